use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::config::{SharedConfig, API_KEY_HEADER};
use crate::domain::BaseItem;
use crate::http_client::{HttpClient, HttpMethod, HttpRequest, ReqwestHttpClient};
use crate::request::MappingRequest;
use crate::response::{FilterPage, MappingResult, PagePayload, SearchPage};
use crate::status::explain_status;
use crate::values::ValueKey;
use crate::FigiError;

/// Body of `/search` and `/filter`: the item fields plus query and cursor.
#[derive(Debug, Serialize)]
struct PageRequestBody<'a> {
    #[serde(flatten)]
    item: &'a BaseItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ValuesPayload {
    #[serde(default)]
    values: Vec<String>,
}

/// Async client for the OpenFIGI v3 API.
///
/// Base URL and API key are read from the [`SharedConfig`] on every call.
/// The client never retries; a non-success status is returned as
/// [`FigiError::Status`].
#[derive(Clone)]
pub struct OpenFigiClient {
    http_client: Arc<dyn HttpClient>,
    config: SharedConfig,
}

impl Default for OpenFigiClient {
    /// Reqwest transport over the process-wide configuration.
    fn default() -> Self {
        Self::new(SharedConfig::global().clone())
    }
}

impl OpenFigiClient {
    pub fn new(config: impl Into<SharedConfig>) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), config)
    }

    pub fn with_http_client(
        http_client: Arc<dyn HttpClient>,
        config: impl Into<SharedConfig>,
    ) -> Self {
        Self {
            http_client,
            config: config.into(),
        }
    }

    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// `POST /mapping`: resolve every job of the batch.
    pub async fn map(&self, request: &MappingRequest) -> Result<Vec<MappingResult>, FigiError> {
        let body = serde_json::to_string(request).map_err(FigiError::Encode)?;
        let results: Vec<MappingResult> =
            self.send(HttpMethod::Post, "/mapping", Some(body)).await?;

        if results.len() != request.len() {
            warn!(
                jobs = request.len(),
                results = results.len(),
                "mapping response is not aligned with the request"
            );
        }
        for (index, result) in results.iter().enumerate() {
            if let Some(message) = &result.error {
                debug!(index, error = %message, "mapping job failed");
            } else if let Some(message) = &result.warning {
                debug!(index, warning = %message, "mapping job returned no match");
            }
        }

        Ok(results)
    }

    /// `POST /search`. An empty `query` is omitted from the body.
    pub async fn search(
        &self,
        item: &BaseItem,
        query: &str,
        start: Option<&str>,
    ) -> Result<SearchPage, FigiError> {
        let payload = self.post_page("/search", item, query, start).await?;
        Ok(SearchPage::from_payload(
            payload,
            item.clone(),
            query.to_owned(),
        ))
    }

    /// `POST /filter`: like search, with the total match count.
    pub async fn filter(
        &self,
        item: &BaseItem,
        query: &str,
        start: Option<&str>,
    ) -> Result<FilterPage, FigiError> {
        let payload = self.post_page("/filter", item, query, start).await?;
        Ok(FilterPage::from_payload(
            payload,
            item.clone(),
            query.to_owned(),
        ))
    }

    /// `GET /mapping/values/{key}`: current accepted values for a field.
    pub async fn mapping_values(&self, key: ValueKey) -> Result<Vec<String>, FigiError> {
        let path = format!("/mapping/values/{}", urlencoding::encode(key.as_str()));
        let payload: ValuesPayload = self.send(HttpMethod::Get, &path, None).await?;
        Ok(payload.values)
    }

    async fn post_page(
        &self,
        path: &str,
        item: &BaseItem,
        query: &str,
        start: Option<&str>,
    ) -> Result<PagePayload, FigiError> {
        let body = PageRequestBody {
            item,
            query: Some(query).filter(|query| !query.is_empty()),
            start: start.filter(|start| !start.is_empty()),
        };
        let body = serde_json::to_string(&body).map_err(FigiError::Encode)?;
        self.send(HttpMethod::Post, path, Some(body)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<T, FigiError> {
        let config = self.config.snapshot();
        let url = format!("{}{}", config.base_url, path);

        let mut request =
            HttpRequest::new(method, url.as_str()).with_timeout_ms(config.timeout_ms);
        if let Some(body) = body {
            request = request.with_json_body(body);
        }
        if let Some(api_key) = &config.api_key {
            request = request.with_header(API_KEY_HEADER, api_key);
        }

        debug!(
            method = method.as_str(),
            %url,
            authenticated = config.api_key.is_some(),
            "sending openfigi request"
        );

        let response = self.http_client.execute(request).await.map_err(|e| {
            warn!(%url, error = %e, "openfigi transport error");
            FigiError::Transport(e)
        })?;

        if !response.is_success() {
            let explanation = explain_status(response.status);
            error!(
                status = response.status,
                %url,
                explanation,
                "openfigi request failed"
            );
            return Err(FigiError::Status {
                status: response.status,
                explanation,
            });
        }

        serde_json::from_str(&response.body).map_err(FigiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BaseItemSetters;

    #[test]
    fn page_body_flattens_item_and_skips_empty_query() {
        let item = BaseItem::builder()
            .with_exch_code("US")
            .build()
            .expect("valid item");

        let body = PageRequestBody {
            item: &item,
            query: Some("").filter(|query| !query.is_empty()),
            start: Some("cursor-1"),
        };

        assert_eq!(
            serde_json::to_value(&body).expect("serialize"),
            serde_json::json!({ "exchCode": "US", "start": "cursor-1" })
        );
    }
}
