// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report delivery.
//!
//! Sending is simulated: the message is logged, nothing leaves the process.

use crate::services::report::ReportArtifact;

/// Outgoing message that carries a report.
#[derive(Debug, Clone)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Delivers rendered reports.
#[derive(Debug, Clone, Default)]
pub struct Notifier;

impl Notifier {
    pub fn new() -> Self {
        Self
    }

    /// Hand `report` to `email.to`. Logs the message in place of sending it.
    pub fn send(&self, email: &Email, report: &ReportArtifact) {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            body = %email.body,
            format = %report.format,
            rows = report.rows.len(),
            attachment = %report.path.display(),
            "Sending report email (simulated)"
        );
    }
}
