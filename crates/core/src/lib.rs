// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tally-core: Shared library for the tally issue tracker
//!
//! This crate provides the issue model, the SQLite issue store, business ID
//! generation, and the chart transforms behind the dashboard reports.

pub mod chart;
pub mod db;
pub mod error;
pub mod id;
pub mod issue;

pub use chart::{ColorSource, Distribution, RandomColors, Throughput, Timeline};
pub use db::Database;
pub use error::{Error, Result};
pub use issue::{Issue, IssueDraft, NewIssue, Severity, Status};
