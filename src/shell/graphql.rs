use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::projects::use_cases::add_project::inbound::graphql::AddProjectMutation;
use crate::modules::projects::use_cases::clear_projects::inbound::graphql::ClearProjectsMutation;
use crate::modules::projects::use_cases::import_projects::inbound::graphql::ImportProjectsMutation;
pub use crate::modules::projects::use_cases::view_dashboard::inbound::graphql::QueryRoot;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    AddProjectMutation,
    ImportProjectsMutation,
    ClearProjectsMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
