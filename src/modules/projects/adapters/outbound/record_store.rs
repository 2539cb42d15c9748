// Port for the ordered collection of project records.
//
// Responsibilities
// - Keep insertion order. Own no derived state.
// - Hand out snapshots. Callers aggregate over the returned Vec, never over the store itself.

use crate::modules::projects::core::record::ProjectRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("persistence error: {0}")]
    Persistence(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn add(&self, record: ProjectRecord) -> Result<(), RecordStoreError>;
    async fn all(&self) -> Result<Vec<ProjectRecord>, RecordStoreError>;
    async fn replace(&self, records: Vec<ProjectRecord>) -> Result<(), RecordStoreError>;
    async fn clear(&self) -> Result<(), RecordStoreError>;
}
