// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report rendering: encodes report rows and writes the report file.

pub mod document;
pub mod spreadsheet;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{ReportFormat, ReportRow};
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes reports to the configured path for each format.
///
/// Every render overwrites the previous file for that format. Concurrent
/// renders of the same format each write their own temp file, and the
/// last one to be moved into place wins.
#[derive(Debug, Clone)]
pub struct Renderer {
    spreadsheet_path: PathBuf,
    document_path: PathBuf,
}

impl Renderer {
    pub fn new(spreadsheet_path: impl Into<PathBuf>, document_path: impl Into<PathBuf>) -> Self {
        Self {
            spreadsheet_path: spreadsheet_path.into(),
            document_path: document_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.spreadsheet_path.clone(), config.document_path.clone())
    }

    /// Output path for `format`.
    pub fn path_for(&self, format: ReportFormat) -> &Path {
        match format {
            ReportFormat::Spreadsheet => &self.spreadsheet_path,
            ReportFormat::Document => &self.document_path,
        }
    }

    /// Encode `rows` without touching the filesystem.
    pub fn encode(rows: &[ReportRow], format: ReportFormat) -> Result<Vec<u8>> {
        match format {
            ReportFormat::Spreadsheet => spreadsheet::encode(rows)
                .map_err(|e| AppError::RenderFailure(format!("xlsx encoding: {}", e))),
            ReportFormat::Document => {
                let capacity = document::ROWS_PER_PAGE;
                if rows.len() > capacity {
                    tracing::warn!(
                        rows = rows.len(),
                        capacity,
                        "PDF report is single-page; rows past the page end are cut off"
                    );
                }
                document::encode(rows)
                    .map_err(|e| AppError::RenderFailure(format!("pdf encoding: {}", e)))
            }
        }
    }

    /// Render `rows` as `format` and write the file. Returns the path written.
    pub async fn render(&self, rows: &[ReportRow], format: ReportFormat) -> Result<PathBuf> {
        let bytes = Self::encode(rows, format)?;
        let path = self.path_for(format);
        let size = bytes.len();

        write_replacing(path.to_path_buf(), bytes).await?;

        tracing::info!(
            format = %format,
            rows = rows.len(),
            bytes = size,
            path = %path.display(),
            "Report written"
        );
        Ok(path.to_path_buf())
    }

    /// Render using a format given by its wire name ("Excel" or "PDF").
    ///
    /// An unknown name fails with [`AppError::UnsupportedFormat`] and no
    /// file is written.
    pub async fn render_named(&self, rows: &[ReportRow], format: &str) -> Result<PathBuf> {
        let format: ReportFormat = format.parse()?;
        self.render(rows, format).await
    }
}

/// Write `bytes` to a fresh temp file next to `path`, then rename it over
/// `path`. Readers see either the old report or the new one, never a
/// partial write.
async fn write_replacing(path: PathBuf, bytes: Vec<u8>) -> Result<()> {
    tokio::task::spawn_blocking(move || persist(&path, &bytes))
        .await
        .context("report writer task failed")?
}

fn persist(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        AppError::RenderFailure(format!("creating temp file in {}: {}", dir.display(), e))
    })?;
    tmp.write_all(bytes)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| {
            AppError::RenderFailure(format!("writing {}: {}", tmp.path().display(), e))
        })?;

    // On failure the temp file is dropped and removed.
    tmp.persist(path).map_err(|e| {
        AppError::RenderFailure(format!("moving report to {}: {}", path.display(), e.error))
    })?;
    Ok(())
}
