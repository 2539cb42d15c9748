// JSON file backed record store.
//
// Purpose
// - Round-trip the record collection to a flat JSON array on disk.
//
// Responsibilities
// - Load fail-soft: any problem with the file yields an empty collection and a warning, so the
//   service stays usable with zero records.
// - Persist after every mutation. The in memory snapshot only changes once the write succeeded.
// - Write through a temp file and rename so a crash never leaves a half written array behind.

use crate::modules::projects::adapters::outbound::record_store::{RecordStore, RecordStoreError};
use crate::modules::projects::core::record::ProjectRecord;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

pub fn load_records(path: &Path) -> Vec<ProjectRecord> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no data file yet, starting empty");
            return Vec::new();
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "unreadable data file, starting empty"
            );
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<ProjectRecord>>(&raw) {
        Ok(records) => {
            tracing::info!(path = %path.display(), count = records.len(), "loaded project records");
            records
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "malformed data file, starting empty"
            );
            Vec::new()
        }
    }
}

pub async fn save_records(path: &Path, records: &[ProjectRecord]) -> Result<(), RecordStoreError> {
    let json = serde_json::to_vec_pretty(records)
        .map_err(|e| RecordStoreError::Persistence(e.to_string()))?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, json)
        .await
        .map_err(|e| RecordStoreError::Persistence(format!("{}: {e}", tmp.display())))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| RecordStoreError::Persistence(format!("{}: {e}", path.display())))?;
    Ok(())
}

pub struct JsonFileRecordStore {
    path: PathBuf,
    records: RwLock<Vec<ProjectRecord>>,
}

impl JsonFileRecordStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = load_records(&path);
        Self {
            path,
            records: RwLock::new(records),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn commit<F>(&self, change: F) -> Result<(), RecordStoreError>
    where
        F: FnOnce(&mut Vec<ProjectRecord>) + Send,
    {
        let mut guard = self.records.write().await;
        let mut next = guard.clone();
        change(&mut next);
        save_records(&self.path, &next).await?;
        *guard = next;
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordStore for JsonFileRecordStore {
    async fn add(&self, record: ProjectRecord) -> Result<(), RecordStoreError> {
        self.commit(|current| current.push(record)).await
    }

    async fn all(&self) -> Result<Vec<ProjectRecord>, RecordStoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn replace(&self, records: Vec<ProjectRecord>) -> Result<(), RecordStoreError> {
        self.commit(|current| *current = records).await
    }

    async fn clear(&self) -> Result<(), RecordStoreError> {
        self.commit(Vec::clear).await
    }
}
