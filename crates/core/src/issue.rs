// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the tally issue tracker.
//!
//! This module contains the fundamental data types: Issue, Severity, Status,
//! and the NewIssue request body that is validated into an IssueDraft.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// How badly an issue affects its reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Severe,
}

impl Severity {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Severe => "Severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Low" => Ok(Severity::Low),
            "Medium" => Ok(Severity::Medium),
            "High" => Ok(Severity::High),
            "Severe" => Ok(Severity::Severe),
            _ => Err(Error::InvalidSeverity(s.to_string())),
        }
    }
}

/// Workflow status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Initial state for every created issue.
    New,
    /// Terminal state. There is no way back to `New`.
    Resolved,
}

impl Status {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "new",
            Status::Resolved => "resolved",
        }
    }

    /// Check if a transition from this status to target is valid.
    ///
    /// Only `new -> resolved` is allowed.
    pub fn can_transition_to(&self, target: Status) -> bool {
        matches!((self, target), (Status::New, Status::Resolved))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "new" => Ok(Status::New),
            "resolved" => Ok(Status::Resolved),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// The primary entity representing a tracked bug report or work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Externally visible identifier (format: `{prefix}-{hash}`).
    pub business_id: String,
    /// Person who filed the issue and is expected to resolve it.
    pub assignee: String,
    /// Short summary.
    pub title: String,
    /// Longer description providing context.
    pub description: String,
    /// How severe the problem is.
    pub severity: Severity,
    /// Current workflow state.
    pub status: Status,
    /// When the issue was created.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified (the resolution time once resolved).
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    /// Creates a new issue in the `new` status.
    pub fn new(business_id: String, draft: IssueDraft, created_at: DateTime<Utc>) -> Self {
        Issue {
            business_id,
            assignee: draft.assignee,
            title: draft.title,
            description: draft.description,
            severity: draft.severity,
            status: Status::New,
            created_at,
            updated_at: created_at,
        }
    }

    /// Returns the UTC calendar day of the last modification.
    pub fn updated_day(&self) -> chrono::NaiveDate {
        self.updated_at.date_naive()
    }
}

/// Request body for creating an issue, before validation.
///
/// Every field is optional here so that a missing field is reported as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewIssue {
    #[serde(default, alias = "name")]
    pub assignee: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

/// The validated content of a new issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    pub assignee: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl NewIssue {
    /// Check field presence and enum membership.
    pub fn validate(self) -> Result<IssueDraft> {
        let assignee = required(self.assignee, "assignee")?;
        let title = required(self.title, "title")?;
        let description = required(self.description, "description")?;
        let severity = required(self.severity, "severity")?.parse()?;

        Ok(IssueDraft {
            assignee,
            title,
            description,
            severity,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingField(field)),
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
