use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Local;

use crate::modules::projects::adapters::codecs::FileFormat;
use crate::modules::projects::use_cases::import_projects::handler::StagedImport;
use crate::shared::infrastructure::confirmation::ConfirmationToken;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlStagedImport {
    pub confirmation_token: String,
    /// RFC 3339
    pub expires_at: String,
    pub record_count: u64,
}

impl From<StagedImport> for GqlStagedImport {
    fn from(s: StagedImport) -> Self {
        Self {
            confirmation_token: s.confirmation.confirmation_token.to_string(),
            expires_at: s.confirmation.expires_at.to_rfc3339(),
            record_count: s.record_count as u64,
        }
    }
}

#[derive(Default)]
pub struct ImportProjectsMutation;

#[Object]
impl ImportProjectsMutation {
    /// `format` is `csv` (default) or `json`.
    async fn stage_import(
        &self,
        context: &Context<'_>,
        content: String,
        format: Option<String>,
    ) -> GqlResult<GqlStagedImport> {
        let state = context.data_unchecked::<AppState>();
        let format = match format {
            Some(raw) => raw.parse::<FileFormat>()?,
            None => FileFormat::default(),
        };
        let staged = state
            .import_handler
            .stage(format, &content, Local::now().date_naive())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(staged.into())
    }

    /// Returns the number of records now in the collection.
    async fn confirm_import(
        &self,
        context: &Context<'_>,
        confirmation_token: String,
    ) -> GqlResult<u64> {
        let state = context.data_unchecked::<AppState>();
        let token = confirmation_token.parse::<ConfirmationToken>()?;
        let record_count = state
            .import_handler
            .confirm(token)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(record_count as u64)
    }
}
