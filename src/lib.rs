// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Post-Report: per-user post statistics rendered as spreadsheet or PDF.
//!
//! This crate fetches users and their posts from a remote source, computes
//! how many posts each user wrote and their mean length, and writes the
//! result as an `.xlsx` or single-page `.pdf` report.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::ReportService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub report_service: ReportService,
}
