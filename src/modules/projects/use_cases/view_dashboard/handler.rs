use crate::modules::projects::adapters::outbound::record_store::RecordStore;
use crate::modules::projects::core::record::ProjectRecord;
use crate::modules::projects::use_cases::application_error::ApplicationError;
use crate::modules::projects::use_cases::view_dashboard::dashboard::DashboardView;
use std::sync::Arc;

pub struct ViewDashboardHandler<TStore>
where
    TStore: RecordStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ViewDashboardHandler<TStore>
where
    TStore: RecordStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Current collection in insertion order.
    pub async fn records(&self) -> Result<Vec<ProjectRecord>, ApplicationError> {
        Ok(self.store.all().await?)
    }

    pub async fn dashboard(
        &self,
        top_n: usize,
        recent_n: usize,
    ) -> Result<DashboardView, ApplicationError> {
        let records = self.records().await?;
        tracing::debug!(record_count = records.len(), top_n, recent_n, "building dashboard");
        Ok(DashboardView::build(&records, top_n, recent_n))
    }
}
