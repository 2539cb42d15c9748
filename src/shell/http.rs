use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::projects::use_cases::add_project::inbound::http as add_http;
use crate::modules::projects::use_cases::application_error::ApplicationError;
use crate::modules::projects::use_cases::clear_projects::inbound::http as clear_http;
use crate::modules::projects::use_cases::export_projects::inbound::http as export_http;
use crate::modules::projects::use_cases::import_projects::inbound::http as import_http;
use crate::modules::projects::use_cases::view_dashboard::inbound::http as dashboard_http;
use crate::shared::infrastructure::confirmation::ConfirmationToken;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/projects",
            post(add_http::handle).get(dashboard_http::projects),
        )
        .route("/dashboard", get(dashboard_http::dashboard))
        .route("/summary", get(dashboard_http::summary))
        .route("/monthly-series", get(dashboard_http::monthly_series))
        .route("/category-breakdown", get(dashboard_http::category_breakdown))
        .route("/top-categories", get(dashboard_http::top_categories))
        .route("/top-projects", get(dashboard_http::top_projects))
        .route("/recent-projects", get(dashboard_http::recent_projects))
        .route("/export", get(export_http::handle))
        .route("/import", post(import_http::stage))
        .route("/import/confirm", post(import_http::confirm))
        .route("/clear", post(clear_http::request))
        .route("/clear/confirm", post(clear_http::confirm))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Second step of a two-step operation.
#[derive(Debug, Deserialize)]
pub struct ConfirmBody {
    pub confirmation_token: String,
}

impl ConfirmBody {
    pub fn token(&self) -> Result<ConfirmationToken, ApplicationError> {
        Ok(self.confirmation_token.parse::<ConfirmationToken>()?)
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::Domain(_) | ApplicationError::Import(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApplicationError::Confirmation(_) => StatusCode::NOT_FOUND,
            ApplicationError::Store(_) | ApplicationError::Export(_) => {
                tracing::error!(error = %self, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error_response(status, self.to_string())
    }
}

#[cfg(test)]
mod router_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::shared::infrastructure::confirmation::ConfirmationError;
    use crate::tests::fixtures::state::make_test_state;

    #[tokio::test]
    async fn it_should_route_every_read_endpoint() {
        let app = router(make_test_state(vec![]));
        for path in [
            "/projects",
            "/dashboard",
            "/summary",
            "/monthly-series",
            "/category-breakdown",
            "/top-categories",
            "/top-projects",
            "/recent-projects",
            "/export",
        ] {
            let response = app
                .clone()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {path}");
        }
    }

    #[tokio::test]
    async fn it_should_allow_cross_origin_requests() {
        let response = router(make_test_state(vec![]))
            .oneshot(
                Request::get("/summary")
                    .header("origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(
            response
                .headers()
                .contains_key("access-control-allow-origin")
        );
    }

    #[tokio::test]
    async fn it_should_map_confirmation_errors_to_404() {
        let response = ApplicationError::Confirmation(ConfirmationError::Expired).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
