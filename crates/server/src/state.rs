// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server state management.
//!
//! Wraps the issue store for shared access from request handlers. The store
//! is opened once at startup and closed when the last handle is dropped
//! after shutdown.

use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use tally_core::{Database, Issue, NewIssue, Result};

/// Shared server state containing the issue store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// The issue store (a SQLite connection is not `Sync`).
    db: Mutex<Database>,
    /// Prefix for generated business IDs.
    id_prefix: String,
}

impl AppState {
    /// Creates state around an already opened database.
    pub fn new(db: Database, id_prefix: impl Into<String>) -> Self {
        AppState {
            inner: Arc::new(AppStateInner {
                db: Mutex::new(db),
                id_prefix: id_prefix.into(),
            }),
        }
    }

    /// Opens (creating if needed) the database at `path`.
    pub fn open(path: &Path, id_prefix: impl Into<String>) -> Result<Self> {
        let db = Database::open(path)?;
        Ok(Self::new(db, id_prefix))
    }

    /// Locks the store for direct access.
    pub async fn db(&self) -> MutexGuard<'_, Database> {
        self.inner.db.lock().await
    }

    /// Validates the request body and stores a new issue.
    pub async fn create_issue(&self, body: NewIssue) -> Result<Issue> {
        let draft = body.validate()?;
        let db = self.db().await;
        db.insert_draft(&self.inner.id_prefix, draft, Utc::now())
    }

    /// Marks an issue resolved. Already resolved issues are returned unchanged.
    pub async fn resolve_issue(&self, business_id: &str) -> Result<Issue> {
        self.db().await.resolve_issue(business_id, Utc::now())
    }

    /// Returns every issue in store order.
    pub async fn all_issues(&self) -> Result<Vec<Issue>> {
        self.db().await.get_all_issues()
    }

    /// Returns resolved issues in store order.
    pub async fn resolved_issues(&self) -> Result<Vec<Issue>> {
        self.db().await.get_resolved_issues()
    }
}
