// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregate;
pub mod assemble;
pub mod notify;
pub mod render;
pub mod report;
pub mod source;

pub use aggregate::aggregate;
pub use assemble::{assemble, NAME_NOT_FOUND};
pub use notify::{Email, Notifier};
pub use render::Renderer;
pub use report::{ReportArtifact, ReportService};
pub use source::SourceClient;
