use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::modules::projects::adapters::codecs::FileFormat;
use crate::shell::http::{ConfirmBody, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ImportParams {
    pub format: Option<String>,
}

#[derive(Serialize)]
pub struct ImportConfirmedResponse {
    pub record_count: usize,
}

/// Validates the uploaded file and parks it until confirmed. The collection is untouched.
pub async fn stage(
    State(state): State<AppState>,
    Query(params): Query<ImportParams>,
    body: String,
) -> impl IntoResponse {
    let format = match params.format.as_deref().map(str::parse::<FileFormat>) {
        None => FileFormat::default(),
        Some(Ok(format)) => format,
        Some(Err(e)) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
    };

    let today = Local::now().date_naive();
    match state.import_handler.stage(format, &body, today).await {
        Ok(staged) => (StatusCode::ACCEPTED, Json(staged)).into_response(),
        Err(e) => e.into_response(),
    }
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

    match state.import_handler.confirm(token).await {
        Ok(record_count) => Json(ImportConfirmedResponse { record_count }).into_response(),
        Err(e) => e.into_response(),
    }
}
