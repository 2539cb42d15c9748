use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Local;
use serde::Deserialize;

use crate::modules::projects::use_cases::add_project::command::AddProject;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddProjectBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub custom_category: Option<String>,
    #[serde(default)]
    pub hours: serde_json::Value,
    #[serde(default)]
    pub date: Option<String>,
}

impl From<AddProjectBody> for AddProject {
    fn from(body: AddProjectBody) -> Self {
        Self {
            name: body.name,
            category: body.category,
            custom_category: body.custom_category,
            hours: body.hours,
            date: body.date,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddProjectBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let today = Local::now().date_naive();
    match state.add_handler.handle(body.into(), today).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => e.into_response(),
    }
}
