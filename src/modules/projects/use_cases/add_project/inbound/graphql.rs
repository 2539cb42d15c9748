use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Local;

use crate::modules::projects::use_cases::add_project::command::AddProject;
use crate::modules::projects::use_cases::view_dashboard::inbound::graphql::GqlProjectRecord;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddProjectMutation;

#[Object]
impl AddProjectMutation {
    /// `category: "other"` takes its value from `customCategory`. A missing date means today.
    async fn add_project(
        &self,
        context: &Context<'_>,
        name: String,
        category: String,
        custom_category: Option<String>,
        hours: Option<f64>,
        date: Option<String>,
    ) -> GqlResult<GqlProjectRecord> {
        let state = context.data_unchecked::<AppState>();

        let command = AddProject {
            name,
            category,
            custom_category,
            hours: hours.map_or(serde_json::Value::Null, serde_json::Value::from),
            date,
        };

        let record = state
            .add_handler
            .handle(command, Local::now().date_naive())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(record.into())
    }
}
