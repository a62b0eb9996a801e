// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report request route.

use crate::error::{AppError, Result};
use crate::models::ReportRequest;
use crate::AppState;
use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Report routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/send-email", post(send_report))
}

#[derive(Serialize)]
pub struct SendReportResponse {
    pub message: String,
}

/// Generate the requested report and mail it.
///
/// The body is taken as raw JSON so that missing fields and wrong types
/// come back as our own 400 rather than the extractor's rejection.
async fn send_report(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<SendReportResponse>> {
    let request: ReportRequest = serde_json::from_value(payload).map_err(|e| {
        tracing::warn!(error = %e, "Rejected malformed report request");
        AppError::BadRequest(format!("Incomplete or invalid data: {}", e))
    })?;

    let report = state
        .report_service
        .generate_and_send(&request)
        .await
        .inspect_err(|e| {
            if e.is_client_error() {
                tracing::warn!(error = %e, "Rejected report request");
            }
        })?;

    tracing::info!(
        format = %report.format,
        rows = report.rows.len(),
        "Report request completed"
    );

    Ok(Json(SendReportResponse {
        message: "Email sent successfully (simulated)".to_string(),
    }))
}
