//! Decoded API responses and cursor pagination.

use serde::{Deserialize, Serialize};

use crate::client::OpenFigiClient;
use crate::domain::BaseItem;
use crate::FigiError;

/// One FIGI record. Every attribute may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigiObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "uniqueID", skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exch_code: Option<String>,
    #[serde(rename = "shareClassFIGI", skip_serializing_if = "Option::is_none")]
    pub share_class_figi: Option<String>,
    #[serde(rename = "compositeFIGI", skip_serializing_if = "Option::is_none")]
    pub composite_figi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_type2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_description: Option<String>,
    /// Present when the API cannot disclose non-FIGI attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

/// Result for one mapping job, aligned by position with the request.
///
/// A job can fail (`error`) or match nothing (`warning`) without affecting
/// the other jobs of the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingResult {
    #[serde(default)]
    pub data: Vec<FigiObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl MappingResult {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Wire shape shared by `/search` and `/filter`.
#[derive(Debug, Deserialize)]
pub(crate) struct PagePayload {
    #[serde(default)]
    pub data: Vec<FigiObject>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// One page of `/search` results.
///
/// Keeps the item and query that produced it so [`SearchPage::next`] can
/// replay the call from the returned cursor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    pub data: Vec<FigiObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "next", skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
    #[serde(skip)]
    item: BaseItem,
    #[serde(skip)]
    query: String,
}

impl SearchPage {
    pub(crate) fn from_payload(payload: PagePayload, item: BaseItem, query: String) -> Self {
        Self {
            data: payload.data,
            error: payload.error,
            next_cursor: payload.next.filter(|cursor| !cursor.is_empty()),
            item,
            query,
        }
    }

    /// Continuation cursor; `None` on the last page.
    pub fn cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }

    pub fn item(&self) -> &BaseItem {
        &self.item
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Fetch the following page with the same item and query.
    ///
    /// # Errors
    ///
    /// [`FigiError::NoMoreResults`] when this is the last page.
    pub async fn next(&self, client: &OpenFigiClient) -> Result<SearchPage, FigiError> {
        let cursor = self.cursor().ok_or(FigiError::NoMoreResults)?;
        client.search(&self.item, &self.query, Some(cursor)).await
    }
}

/// One page of `/filter` results: a search page plus the total match count,
/// reported on every page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterPage {
    #[serde(flatten)]
    pub page: SearchPage,
    pub total: u64,
}

impl FilterPage {
    pub(crate) fn from_payload(payload: PagePayload, item: BaseItem, query: String) -> Self {
        let total = payload.total.unwrap_or_default();
        Self {
            page: SearchPage::from_payload(payload, item, query),
            total,
        }
    }

    pub fn data(&self) -> &[FigiObject] {
        &self.page.data
    }

    pub fn cursor(&self) -> Option<&str> {
        self.page.cursor()
    }

    pub fn has_next(&self) -> bool {
        self.page.has_next()
    }

    /// # Errors
    ///
    /// [`FigiError::NoMoreResults`] when this is the last page.
    pub async fn next(&self, client: &OpenFigiClient) -> Result<FilterPage, FigiError> {
        let cursor = self.cursor().ok_or(FigiError::NoMoreResults)?;
        client
            .filter(&self.page.item, &self.page.query, Some(cursor))
            .await
    }
}
