use crate::modules::projects::adapters::outbound::record_store::RecordStore;
use crate::modules::projects::use_cases::add_project::handler::AddProjectHandler;
use crate::modules::projects::use_cases::clear_projects::handler::ClearProjectsHandler;
use crate::modules::projects::use_cases::export_projects::handler::ExportProjectsHandler;
use crate::modules::projects::use_cases::import_projects::handler::ImportProjectsHandler;
use crate::modules::projects::use_cases::view_dashboard::handler::ViewDashboardHandler;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub add_handler: Arc<AddProjectHandler<dyn RecordStore>>,
    pub dashboard_handler: Arc<ViewDashboardHandler<dyn RecordStore>>,
    pub export_handler: Arc<ExportProjectsHandler<dyn RecordStore>>,
    pub import_handler: Arc<ImportProjectsHandler<dyn RecordStore>>,
    pub clear_handler: Arc<ClearProjectsHandler<dyn RecordStore>>,
}

impl AppState {
    /// Every handler shares the one store, so a write through any of them is visible to the
    /// next read.
    pub fn new(store: Arc<dyn RecordStore>, confirmation_ttl: Duration) -> Self {
        Self {
            add_handler: Arc::new(AddProjectHandler::new(store.clone())),
            dashboard_handler: Arc::new(ViewDashboardHandler::new(store.clone())),
            export_handler: Arc::new(ExportProjectsHandler::new(store.clone())),
            import_handler: Arc::new(ImportProjectsHandler::new(store.clone(), confirmation_ttl)),
            clear_handler: Arc::new(ClearProjectsHandler::new(store, confirmation_ttl)),
        }
    }
}
