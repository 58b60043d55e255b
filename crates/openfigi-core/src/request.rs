use serde::Serialize;

use crate::builder::MappingItemBuilder;
use crate::client::OpenFigiClient;
use crate::domain::MappingItem;
use crate::response::MappingResult;
use crate::{FigiError, ValidationError};

/// Ordered batch of mapping jobs, sent as one JSON array.
///
/// No size limit is applied locally; the API rejects oversized batches with
/// status 413 (more than 10 jobs without an API key, 100 with one).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MappingRequest(Vec<MappingItem>);

impl MappingRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every job in order, stopping at the first invalid one.
    pub fn from_builders<'a>(
        builders: impl IntoIterator<Item = &'a MappingItemBuilder>,
    ) -> Result<Self, ValidationError> {
        builders
            .into_iter()
            .map(MappingItemBuilder::build)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn push(&mut self, item: MappingItem) {
        self.0.push(item);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[MappingItem] {
        &self.0
    }

    /// Submit the batch; one result per job, in request order.
    pub async fn fetch(&self, client: &OpenFigiClient) -> Result<Vec<MappingResult>, FigiError> {
        client.map(self).await
    }
}

impl From<Vec<MappingItem>> for MappingRequest {
    fn from(items: Vec<MappingItem>) -> Self {
        Self(items)
    }
}

impl FromIterator<MappingItem> for MappingRequest {
    fn from_iter<I: IntoIterator<Item = MappingItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MappingRequest {
    type Item = MappingItem;
    type IntoIter = std::vec::IntoIter<MappingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MappingRequest {
    type Item = &'a MappingItem;
    type IntoIter = std::slice::Iter<'a, MappingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
