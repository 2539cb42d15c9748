use crate::modules::projects::adapters::codecs::{self, FileFormat};
use crate::modules::projects::adapters::outbound::record_store::RecordStore;
use crate::modules::projects::use_cases::application_error::ApplicationError;
use std::sync::Arc;

/// A downloadable rendering of the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub content_type: &'static str,
    pub file_name: &'static str,
    pub body: String,
}

pub struct ExportProjectsHandler<TStore>
where
    TStore: RecordStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ExportProjectsHandler<TStore>
where
    TStore: RecordStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn export(&self, format: FileFormat) -> Result<ExportFile, ApplicationError> {
        let records = self.store.all().await?;
        let body = codecs::encode(format, &records)?;
        tracing::info!(record_count = records.len(), ?format, "collection exported");
        Ok(ExportFile {
            content_type: format.content_type(),
            file_name: format.file_name(),
            body,
        })
    }
}
