use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::http::{ConfirmBody, error_response};
use crate::shell::state::AppState;

pub async fn request(State(state): State<AppState>) -> impl IntoResponse {
    let staged = state.clear_handler.request().await;
    (StatusCode::ACCEPTED, Json(staged))
}

pub async fn confirm(
    State(state): State<AppState>,
    body: Result<Json<ConfirmBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let token = match body.token() {
        Ok(token) => token,
        Err(e) => return e.into_response(),
    };

    match state.clear_handler.confirm(token).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
