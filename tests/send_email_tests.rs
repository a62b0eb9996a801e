// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end tests for the report request route.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use calamine::{open_workbook, Data, Reader, Xlsx};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn post_report(app: axum::Router, payload: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/send-email")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_invalid_requests_rejected() {
    let source = common::mock_source().await;
    let dir = tempfile::tempdir().unwrap();

    let cases = [
        json!({}),
        json!({ "to": "", "subject": "x", "reportType": "PDF", "body": "x" }),
        json!({ "to": "email@test.com", "subject": "", "reportType": "PDF", "body": "x" }),
        json!({ "to": "email@test.com", "subject": "x", "reportType": "Invalid", "body": "x" }),
        json!({ "to": "email@test.com", "subject": "x", "reportType": "PDF" }),
        json!({ "to": "   ", "subject": "x", "reportType": "PDF", "body": "x" }),
        json!({ "to": null, "subject": "x", "reportType": "PDF", "body": "x" }),
        json!({ "to": "email@test.com", "subject": null, "reportType": "Excel", "body": "x" }),
        json!({ "to": "email@test.com", "subject": "x", "reportType": null, "body": "x" }),
        json!({ "to": "email@test.com", "subject": "x", "reportType": "PDF", "body": null }),
        json!({ "to": 123, "subject": 456, "reportType": "PDF", "body": 789 }),
        json!({ "to": "email@test.com", "subject": "x", "reportType": "PDF", "body": { "text": "object" } }),
        json!({ "to": "email@test.com", "subject": "x", "reportType": "pdf", "body": "x" }),
    ];

    for payload in cases {
        let (app, _state) = common::create_test_app(&source.uri(), dir.path());
        let (status, _) = post_report(app, payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
    }

    // Nothing was fetched or written for rejected requests
    assert!(source.received_requests().await.unwrap().is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_unsupported_format_error_code() {
    let source = common::mock_source().await;
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = common::create_test_app(&source.uri(), dir.path());

    let (status, body) = post_report(
        app,
        json!({ "to": "email@test.com", "subject": "x", "reportType": "Word", "body": "x" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unsupported_format");
}

#[tokio::test]
async fn test_valid_excel_request_writes_spreadsheet() {
    let source = common::mock_source().await;
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = common::create_test_app(&source.uri(), dir.path());

    let (status, body) = post_report(
        app,
        json!({
            "to": "email@test.com",
            "subject": "Excel test",
            "reportType": "Excel",
            "body": "conteúdo"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Email sent successfully (simulated)");

    let mut workbook: Xlsx<_> = open_workbook(&state.config.spreadsheet_path).unwrap();
    let range = workbook.worksheet_range("Report").unwrap();
    let rows: Vec<(String, String, String)> = range
        .rows()
        .skip(1)
        .map(|r| (r[0].to_string(), r[1].to_string(), r[3].to_string()))
        .collect();

    // Sorted by user id; posts by user 4 have no user record and are filtered out
    assert_eq!(
        rows,
        vec![
            ("1".to_string(), "Leanne Graham".to_string(), "12.50".to_string()),
            ("2".to_string(), "Ervin Howell".to_string(), "21.00".to_string()),
            ("3".to_string(), "Clementine Bauch".to_string(), "0.00".to_string()),
        ]
    );

    let counts: Vec<Data> = range.rows().skip(1).map(|r| r[2].clone()).collect();
    assert_eq!(
        counts,
        vec![Data::Float(2.0), Data::Float(1.0), Data::Float(1.0)]
    );
}

#[tokio::test]
async fn test_valid_pdf_request_writes_document() {
    let source = common::mock_source().await;
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = common::create_test_app(&source.uri(), dir.path());

    let (status, _) = post_report(
        app,
        json!({
            "to": "email@test.com",
            "subject": "PDF test",
            "reportType": "PDF",
            "body": "conteúdo"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let bytes = std::fs::read(&state.config.document_path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(!state.config.spreadsheet_path.exists());

    let pdf = lopdf::Document::load_mem(&bytes).unwrap();
    let text = pdf.extract_text(&[1]).unwrap();
    assert!(text.contains("Users and Posts Report"));
    for expected in ["Leanne Graham", "12.50", "Ervin Howell", "21.00", "Clementine Bauch", "0.00"] {
        assert!(text.contains(expected), "missing {} in {:?}", expected, text);
    }
}

#[tokio::test]
async fn test_source_outage_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    // Nothing listens on the default test source
    let (app, state) = common::create_test_app("http://127.0.0.1:9", dir.path());

    let (status, _) = post_report(
        app,
        json!({ "to": "email@test.com", "subject": "x", "reportType": "Excel", "body": "x" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(state.config.spreadsheet_path.exists());
}

#[tokio::test]
async fn test_render_failure_is_server_error() {
    let source = common::mock_source().await;
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let (app, _state) = common::create_test_app(&source.uri(), &missing);

    let (status, body) = post_report(
        app,
        json!({ "to": "email@test.com", "subject": "x", "reportType": "PDF", "body": "x" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "render_failure");
}

#[tokio::test]
async fn test_health() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = common::create_test_app("http://127.0.0.1:9", dir.path());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
