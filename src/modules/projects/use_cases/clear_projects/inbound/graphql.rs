use async_graphql::{Context, Object, Result as GqlResult};

use crate::shared::infrastructure::confirmation::{ConfirmationToken, StagedConfirmation};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlStagedConfirmation {
    pub confirmation_token: String,
    pub expires_at: String,
}

impl From<StagedConfirmation> for GqlStagedConfirmation {
    fn from(s: StagedConfirmation) -> Self {
        Self {
            confirmation_token: s.confirmation_token.to_string(),
            expires_at: s.expires_at.to_rfc3339(),
        }
    }
}

#[derive(Default)]
pub struct ClearProjectsMutation;

#[Object]
impl ClearProjectsMutation {
    async fn request_clear(&self, context: &Context<'_>) -> GqlResult<GqlStagedConfirmation> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.clear_handler.request().await.into())
    }

    async fn confirm_clear(
        &self,
        context: &Context<'_>,
        confirmation_token: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let token = confirmation_token.parse::<ConfirmationToken>()?;
        state
            .clear_handler
            .confirm(token)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
