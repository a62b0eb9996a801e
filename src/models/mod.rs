// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod post;
pub mod report;
pub mod stats;
pub mod user;

pub use post::{Post, UserIds};
pub use report::{ReportFormat, ReportRequest, ReportRow};
pub use stats::UserStat;
pub use user::User;
