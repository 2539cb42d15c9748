use crate::modules::projects::adapters::outbound::record_store::RecordStore;
use crate::modules::projects::use_cases::application_error::ApplicationError;
use crate::shared::infrastructure::confirmation::in_memory::PendingConfirmations;
use crate::shared::infrastructure::confirmation::{ConfirmationToken, StagedConfirmation};
use std::sync::Arc;
use std::time::Duration;

pub struct ClearProjectsHandler<TStore>
where
    TStore: RecordStore + ?Sized + 'static,
{
    store: Arc<TStore>,
    confirmations: PendingConfirmations<()>,
}

impl<TStore> ClearProjectsHandler<TStore>
where
    TStore: RecordStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>, confirmation_ttl: Duration) -> Self {
        Self {
            store,
            confirmations: PendingConfirmations::new(confirmation_ttl),
        }
    }

    pub async fn request(&self) -> StagedConfirmation {
        let staged = self.confirmations.stage(()).await;
        tracing::info!(expires_at = %staged.expires_at, "clear requested, awaiting confirmation");
        staged
    }

    pub async fn confirm(&self, token: ConfirmationToken) -> Result<(), ApplicationError> {
        self.confirmations.confirm(token).await?;
        self.store.clear().await?;
        tracing::info!("clear confirmed, collection emptied");
        Ok(())
    }
}
