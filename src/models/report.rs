// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Report rows, output formats and the inbound report request.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// One rendered line of the report: a `UserStat` joined with the user's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub user_id: u64,
    pub name: String,
    pub post_count: u32,
    pub mean_post_size: f64,
}

impl ReportRow {
    /// Mean post size as displayed in every format (two decimals).
    pub fn mean_display(&self) -> String {
        format!("{:.2}", self.mean_post_size)
    }
}

/// Output encoding of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Flat spreadsheet (.xlsx)
    #[serde(rename = "Excel")]
    Spreadsheet,
    /// Single-page paginated document (.pdf)
    #[serde(rename = "PDF")]
    Document,
}

impl ReportFormat {
    /// Name used on the wire for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Spreadsheet => "Excel",
            ReportFormat::Document => "PDF",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            ReportFormat::Spreadsheet => "xlsx",
            ReportFormat::Document => "pdf",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire names are matched exactly: `"pdf"` is not `"PDF"`.
impl FromStr for ReportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Excel" => Ok(ReportFormat::Spreadsheet),
            "PDF" => Ok(ReportFormat::Document),
            other => Err(AppError::UnsupportedFormat(format!(
                "'{}' (expected \"Excel\" or \"PDF\")",
                other
            ))),
        }
    }
}

/// Request body for generating and mailing a report.
///
/// `to`, `subject` and `body` are only passed through to the notifier.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReportRequest {
    #[serde(rename = "reportType")]
    pub report_type: String,
    #[validate(custom(function = "not_blank"))]
    pub to: String,
    #[validate(custom(function = "not_blank"))]
    pub subject: String,
    #[validate(custom(function = "not_blank"))]
    pub body: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
