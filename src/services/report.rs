// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report generation service.
//!
//! Handles the core workflow:
//! 1. Fetch users from the source
//! 2. Fetch the posts of those users
//! 3. Aggregate post counts and mean sizes per user
//! 4. Join stats with user names
//! 5. Render the report file
//!
//! Steps run strictly in order. A source outage yields an empty report,
//! not an error; a render failure fails the whole request.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{ReportFormat, ReportRequest, ReportRow};
use crate::services::notify::{Email, Notifier};
use crate::services::{aggregate, assemble, Renderer, SourceClient};
use std::path::PathBuf;
use validator::Validate;

/// A report that has been written to disk.
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    pub format: ReportFormat,
    pub path: PathBuf,
    pub rows: Vec<ReportRow>,
}

/// Runs the fetch, aggregate, assemble and render pipeline.
#[derive(Clone)]
pub struct ReportService {
    source: SourceClient,
    renderer: Renderer,
    notifier: Notifier,
}

impl ReportService {
    pub fn new(source: SourceClient, renderer: Renderer, notifier: Notifier) -> Self {
        Self {
            source,
            renderer,
            notifier,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            SourceClient::from_config(config),
            Renderer::from_config(config),
            Notifier::new(),
        )
    }

    /// Build the report rows from the source. Rows follow user id order.
    pub async fn build_rows(&self) -> Vec<ReportRow> {
        let users = self.source.fetch_users().await;
        let user_ids: Vec<u64> = users.iter().map(|u| u.id).collect();

        let posts = self.source.fetch_posts(user_ids).await;
        let stats = aggregate(&posts);
        let mut rows = assemble(&stats, &users);
        rows.sort_by_key(|r| r.user_id);

        tracing::info!(
            users = users.len(),
            posts = posts.len(),
            rows = rows.len(),
            "Report rows assembled"
        );
        rows
    }

    /// Generate a report file in `format`.
    pub async fn generate(&self, format: ReportFormat) -> Result<ReportArtifact> {
        let rows = self.build_rows().await;
        let path = self.renderer.render(&rows, format).await?;

        Ok(ReportArtifact { format, path, rows })
    }

    /// Validate a request, generate the report it asks for and send it.
    pub async fn generate_and_send(&self, request: &ReportRequest) -> Result<ReportArtifact> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let format: ReportFormat = request.report_type.parse()?;

        let report = self.generate(format).await?;

        let email = Email {
            to: request.to.clone(),
            subject: request.subject.clone(),
            body: request.body.clone(),
        };
        self.notifier.send(&email, &report);

        Ok(report)
    }
}
