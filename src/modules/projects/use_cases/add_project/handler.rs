use crate::modules::projects::adapters::outbound::record_store::RecordStore;
use crate::modules::projects::core::record::ProjectRecord;
use crate::modules::projects::use_cases::add_project::command::AddProject;
use crate::modules::projects::use_cases::add_project::decide::decide_add;
use crate::modules::projects::use_cases::application_error::ApplicationError;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct AddProjectHandler<TStore>
where
    TStore: RecordStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> AddProjectHandler<TStore>
where
    TStore: RecordStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: AddProject,
        today: NaiveDate,
    ) -> Result<ProjectRecord, ApplicationError> {
        let record = decide_add(command, today).inspect_err(|reason| {
            tracing::info!(%reason, "project submission rejected");
        })?;
        self.store.add(record.clone()).await?;
        tracing::info!(
            category = %record.category,
            hours = record.hours,
            date = %record.date,
            "project added"
        );
        Ok(record)
    }
}
