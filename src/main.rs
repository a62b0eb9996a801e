// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post-Report API Server
//!
//! Accepts report requests, builds the users/posts report in the requested
//! format and hands it to the (simulated) mailer.

use post_report::{config::Config, services::ReportService, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        source = %config.source_base_url,
        timeout_ms = config.request_timeout.as_millis() as u64,
        "Starting Post-Report API"
    );

    let report_service = ReportService::from_config(&config);
    tracing::info!(
        xlsx = %config.spreadsheet_path.display(),
        pdf = %config.document_path.display(),
        "Report output paths"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        report_service,
    });

    // Build router
    let app = post_report::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("post_report=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
