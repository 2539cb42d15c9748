// In memory record store.
//
// Purpose
// - Exercise use cases without touching the filesystem.
// - Back the service when no data file is configured.

use crate::modules::projects::adapters::outbound::record_store::{RecordStore, RecordStoreError};
use crate::modules::projects::core::record::ProjectRecord;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Vec<ProjectRecord>>,
    is_offline: bool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ProjectRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RecordStoreError> {
        if self.is_offline {
            return Err(RecordStoreError::Backend("Record store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn add(&self, record: ProjectRecord) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        self.records.write().await.push(record);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<ProjectRecord>, RecordStoreError> {
        self.ensure_online()?;
        Ok(self.records.read().await.clone())
    }

    async fn replace(&self, records: Vec<ProjectRecord>) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        *self.records.write().await = records;
        Ok(())
    }

    async fn clear(&self) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        self.records.write().await.clear();
        Ok(())
    }
}
