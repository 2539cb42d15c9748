use crate::modules::projects::adapters::codecs::FileFormat;
use crate::modules::projects::adapters::outbound::record_store::RecordStore;
use crate::modules::projects::core::record::ProjectRecord;
use crate::modules::projects::use_cases::application_error::ApplicationError;
use crate::modules::projects::use_cases::import_projects::decode::decode_import;
use crate::shared::infrastructure::confirmation::in_memory::PendingConfirmations;
use crate::shared::infrastructure::confirmation::{ConfirmationToken, StagedConfirmation};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedImport {
    #[serde(flatten)]
    pub confirmation: StagedConfirmation,
    pub record_count: usize,
}

/// Wholesale replace of the collection, in two steps: `stage` validates the upload and parks
/// it, `confirm` swaps it in.
pub struct ImportProjectsHandler<TStore>
where
    TStore: RecordStore + ?Sized + 'static,
{
    store: Arc<TStore>,
    confirmations: PendingConfirmations<Vec<ProjectRecord>>,
}

impl<TStore> ImportProjectsHandler<TStore>
where
    TStore: RecordStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>, confirmation_ttl: Duration) -> Self {
        Self {
            store,
            confirmations: PendingConfirmations::new(confirmation_ttl),
        }
    }

    pub async fn stage(
        &self,
        format: FileFormat,
        content: &str,
        today: NaiveDate,
    ) -> Result<StagedImport, ApplicationError> {
        let records = decode_import(format, content, today).inspect_err(|reason| {
            tracing::warn!(%reason, ?format, "import rejected");
        })?;
        let record_count = records.len();
        let confirmation = self.confirmations.stage(records).await;
        tracing::info!(record_count, ?format, "import staged, awaiting confirmation");
        Ok(StagedImport {
            confirmation,
            record_count,
        })
    }

    pub async fn confirm(&self, token: ConfirmationToken) -> Result<usize, ApplicationError> {
        let records = self.confirmations.confirm(token).await?;
        let record_count = records.len();
        self.store.replace(records).await?;
        tracing::info!(record_count, "import confirmed, collection replaced");
        Ok(record_count)
    }
}
