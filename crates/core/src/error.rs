// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tally-core operations.

use thiserror::Error;

/// All possible errors that can occur in tally-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("invalid severity: '{0}'\n  hint: valid severities are: Low, Medium, High, Severe")]
    InvalidSeverity(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: new, resolved")]
    InvalidStatus(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid id prefix: '{0}'\n  hint: use 2+ lowercase alphanumeric characters with at least one letter")]
    InvalidPrefix(String),

    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl Error {
    /// Returns true if the error was caused by a bad request rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidSeverity(_) | Error::InvalidStatus(_) | Error::MissingField(_)
        )
    }
}

impl From<rusqlite::Error> for Error {
    /// Row mappers box `CorruptedData` inside a conversion failure; unwrap it.
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::FromSqlConversionFailure(column, ty, inner) => {
                match inner.downcast::<Error>() {
                    Ok(e) => *e,
                    Err(inner) => Error::Database(rusqlite::Error::FromSqlConversionFailure(
                        column, ty, inner,
                    )),
                }
            }
            other => Error::Database(other),
        }
    }
}

/// A specialized Result type for tally-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
