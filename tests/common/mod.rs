// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use post_report::config::Config;
use post_report::routes::create_router;
use post_report::services::ReportService;
use post_report::AppState;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock users/posts source with three users and five posts.
/// User 4 has posts but no user record.
#[allow(dead_code)]
pub async fn mock_source() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Leanne Graham", "username": "Bret" },
            { "id": 2, "name": "Ervin Howell", "username": "Antonette" },
            { "id": 3, "name": "Clementine Bauch", "username": "Samantha" }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "userId": 1, "id": 1, "title": "a", "body": "quia et suscipit" },
            { "userId": 1, "id": 2, "title": "b", "body": "est rerum" },
            { "userId": 2, "id": 3, "title": "c", "body": "et iusto sed quo iure" },
            { "userId": 4, "id": 4, "title": "d", "body": "orphan" },
            { "userId": 3, "id": 5, "title": "e", "body": "" }
        ])))
        .mount(&server)
        .await;

    server
}

/// Create a test app against `source_url`, writing reports into `out_dir`.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(source_url: &str, out_dir: &Path) -> (axum::Router, Arc<AppState>) {
    let config = Config {
        source_base_url: source_url.to_string(),
        spreadsheet_path: out_dir.join("report.xlsx"),
        document_path: out_dir.join("report.pdf"),
        ..Config::test_default()
    };
    let report_service = ReportService::from_config(&config);

    let state = Arc::new(AppState {
        config,
        report_service,
    });

    (create_router(state.clone()), state)
}
