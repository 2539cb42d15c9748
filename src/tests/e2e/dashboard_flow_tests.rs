// Full journey over HTTP against a JSON file backed store:
// log projects, read the dashboard, export, re-import, clear, restart.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::projects::adapters::outbound::record_store_json_file::JsonFileRecordStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::state::TEST_CONFIRMATION_TTL;

fn app_over(path: &Path) -> Router {
    let store = Arc::new(JsonFileRecordStore::open(path));
    router(AppState::new(store, TEST_CONFIRMATION_TTL))
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn summary(app: &Router) -> Value {
    let (status, body) = call(app, get("/summary")).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn it_should_carry_records_through_every_operation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    let app = app_over(&path);

    for body in [
        json!({"name": "Scarf", "category": "knitting", "hours": 2, "date": "2024-01-05"}),
        json!({"name": "Hat", "category": "knitting", "hours": "3", "date": "2024-01-20"}),
        json!({"name": "Sky", "category": "painting", "hours": 1, "date": "2024-02-01"}),
    ] {
        let (status, _) = call(&app, post_json("/projects", body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let summary_before = summary(&app).await;
    assert_eq!(summary_before["total_projects"], 3);
    assert_eq!(summary_before["total_hours"], 6.0);
    assert_eq!(summary_before["top_category"], "knitting");
    assert_eq!(summary_before["trailing_7day_hours"], 1.0);

    let (_, dashboard) = call(&app, get("/dashboard")).await;
    let dashboard: Value = serde_json::from_str(&dashboard).unwrap();
    assert_eq!(
        dashboard["monthly_series"],
        json!([{"month": "2024-01", "hours": 5.0}, {"month": "2024-02", "hours": 1.0}])
    );
    assert_eq!(dashboard["top_projects"][0]["name"], "Hat");
    assert_eq!(dashboard["recent_projects"][0]["name"], "Sky");

    let (status, csv) = call(&app, get("/export?format=csv")).await;
    assert_eq!(status, StatusCode::OK);

    // A restart sees what was written.
    let app = app_over(&path);
    assert_eq!(summary(&app).await, summary_before);

    let (status, staged) = call(&app, Request::post("/clear").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    let staged: Value = serde_json::from_str(&staged).unwrap();
    let (status, _) = call(
        &app,
        post_json(
            "/clear/confirm",
            json!({"confirmation_token": staged["confirmation_token"]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(summary(&app).await["total_projects"], 0);
    assert_eq!(summary(&app).await["top_category"], "—");

    let (status, staged) = call(
        &app,
        Request::post("/import?format=csv")
            .body(Body::from(csv))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    let staged: Value = serde_json::from_str(&staged).unwrap();
    assert_eq!(staged["record_count"], 3);

    let (status, confirmed) = call(
        &app,
        post_json(
            "/import/confirm",
            json!({"confirmation_token": staged["confirmation_token"]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&confirmed).unwrap(),
        json!({"record_count": 3})
    );

    assert_eq!(summary(&app).await, summary_before);
    assert_eq!(summary(&app_over(&path)).await, summary_before);
}

#[tokio::test]
async fn it_should_start_empty_when_the_data_file_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    std::fs::write(&path, "{ definitely not records").unwrap();

    let app = app_over(&path);
    let summary = summary(&app).await;
    assert_eq!(summary["total_projects"], 0);
    assert_eq!(summary["category_breakdown"], json!([]));

    let (status, _) = call(
        &app,
        post_json(
            "/projects",
            json!({"name": "Card", "category": "paper", "hours": 1, "date": "2024-05-01"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(summary_of(&path).await["total_projects"], 1);
}

async fn summary_of(path: &Path) -> Value {
    summary(&app_over(path)).await
}
