// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP error responses.
//!
//! Every error leaves the server as `{"message": "..."}` with a status code
//! chosen by [`ApiError::status`].

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid field in a request body.
    #[error("{0}")]
    Validation(String),

    #[error("issue not found: {0}")]
    NotFound(String),

    #[error("Route not found")]
    RouteNotFound,

    /// The store could not be queried; no payload can be produced.
    #[error("data unavailable: {0}")]
    StoreUnavailable(#[source] tally_core::Error),

    #[error("internal server error: {0}")]
    Internal(#[source] tally_core::Error),
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::StoreUnavailable(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<tally_core::Error> for ApiError {
    fn from(err: tally_core::Error) -> Self {
        use tally_core::Error;

        match err {
            Error::IssueNotFound(id) => ApiError::NotFound(id),
            e if e.is_validation() => ApiError::Validation(first_line(&e)),
            e @ (Error::Database(_) | Error::CorruptedData(_)) => ApiError::StoreUnavailable(e),
            e => ApiError::Internal(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            debug!("{}: {}", status, self);
        }

        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Core errors carry CLI-style hints on following lines; clients get the summary.
fn first_line(err: &tally_core::Error) -> String {
    let message = err.to_string();
    message.lines().next().unwrap_or_default().to_string()
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
