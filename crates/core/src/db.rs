// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed issue store.
//!
//! The [`Database`] struct provides all data access operations for issues:
//! insert, find-all, find-by-business-id, filtered listing and resolve.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::id::generate_unique_id;
use crate::issue::{Issue, IssueDraft, Status};

/// SQL schema for the issue store.
pub const SCHEMA: &str = r#"
-- The rowid is storage identity only; business_id is what clients see
CREATE TABLE IF NOT EXISTS issues (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    business_id TEXT NOT NULL UNIQUE,
    assignee TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    severity TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'new',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_issues_status ON issues(status);
CREATE INDEX IF NOT EXISTS idx_issues_assignee ON issues(assignee);
"#;

const ISSUE_COLUMNS: &str =
    "business_id, assignee, title, description, severity, status, created_at, updated_at";

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

/// Fractional-second digits kept in storage.
const STORED_SUBSEC_DIGITS: u16 = 6;

/// Format a timestamp for storage (fixed width, so text order is time order).
fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Drop the precision storage cannot keep, so returned issues match stored rows.
fn stored_precision(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(STORED_SUBSEC_DIGITS)
}

/// Map a row selected with [`ISSUE_COLUMNS`] to an [`Issue`].
fn row_to_issue(row: &Row<'_>) -> std::result::Result<Issue, rusqlite::Error> {
    let severity_str: String = row.get(4)?;
    let status_str: String = row.get(5)?;
    let created_str: String = row.get(6)?;
    let updated_str: String = row.get(7)?;

    Ok(Issue {
        business_id: row.get(0)?,
        assignee: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        severity: parse_db(&severity_str, "severity")?,
        status: parse_db(&status_str, "status")?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
    })
}

/// Apply the schema to a database connection. Idempotent.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// SQLite database connection with issue store operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // WAL so report reads don't block on writes
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Insert a fully formed issue.
    pub fn create_issue(&self, issue: &Issue) -> Result<()> {
        self.conn.execute(
            "INSERT INTO issues (business_id, assignee, title, description, severity,
             status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                issue.business_id,
                issue.assignee,
                issue.title,
                issue.description,
                issue.severity.as_str(),
                issue.status.as_str(),
                format_timestamp(&issue.created_at),
                format_timestamp(&issue.updated_at),
            ],
        )?;
        Ok(())
    }

    /// Create a new issue from a validated draft, assigning a unique business ID.
    pub fn insert_draft(
        &self,
        prefix: &str,
        draft: IssueDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Issue> {
        let created_at = stored_precision(created_at);
        let business_id =
            generate_unique_id(prefix, &draft, &created_at, |id| self.issue_exists(id))?;
        let issue = Issue::new(business_id, draft, created_at);
        self.create_issue(&issue)?;
        debug!("created issue {}", issue.business_id);
        Ok(issue)
    }

    /// Get an issue by business ID.
    pub fn get_issue(&self, business_id: &str) -> Result<Issue> {
        let issue = self
            .conn
            .query_row(
                &format!("SELECT {ISSUE_COLUMNS} FROM issues WHERE business_id = ?1"),
                params![business_id],
                row_to_issue,
            )
            .optional()?;

        issue.ok_or_else(|| Error::IssueNotFound(business_id.to_string()))
    }

    /// Check if an issue exists.
    pub fn issue_exists(&self, business_id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM issues WHERE business_id = ?1",
            params![business_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Mark an issue as resolved and return its stored state.
    ///
    /// Resolving an already resolved issue leaves it untouched, including
    /// `updated_at`.
    pub fn resolve_issue(&self, business_id: &str, at: DateTime<Utc>) -> Result<Issue> {
        let mut issue = self.get_issue(business_id)?;
        if !issue.status.can_transition_to(Status::Resolved) {
            return Ok(issue);
        }

        let at = stored_precision(at);
        let affected = self.conn.execute(
            "UPDATE issues SET status = ?1, updated_at = ?2
             WHERE business_id = ?3 AND status = ?4",
            params![
                Status::Resolved.as_str(),
                format_timestamp(&at),
                business_id,
                issue.status.as_str(),
            ],
        )?;

        // Someone else moved it first
        if affected == 0 {
            return self.get_issue(business_id);
        }

        debug!("resolved issue {}", business_id);
        issue.status = Status::Resolved;
        issue.updated_at = at;
        Ok(issue)
    }

    /// List issues in insertion order, optionally filtered by status.
    pub fn list_issues(&self, status: Option<Status>) -> Result<Vec<Issue>> {
        let mut sql = format!("SELECT {ISSUE_COLUMNS} FROM issues");
        if status.is_some() {
            sql.push_str(" WHERE status = ?1");
        }
        sql.push_str(" ORDER BY id");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = match status {
            Some(s) => stmt.query_map(params![s.as_str()], row_to_issue)?,
            None => stmt.query_map([], row_to_issue)?,
        };
        let issues = rows.collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(issues)
    }

    /// Get all issues.
    pub fn get_all_issues(&self) -> Result<Vec<Issue>> {
        self.list_issues(None)
    }

    /// Get resolved issues only.
    pub fn get_resolved_issues(&self) -> Result<Vec<Issue>> {
        self.list_issues(Some(Status::Resolved))
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
