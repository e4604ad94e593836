// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    missing_field = { tally_core::Error::MissingField("title"), StatusCode::BAD_REQUEST },
    invalid_severity = { tally_core::Error::InvalidSeverity("x".into()), StatusCode::BAD_REQUEST },
    not_found = { tally_core::Error::IssueNotFound("iss-1".into()), StatusCode::NOT_FOUND },
    database = { store_error(), StatusCode::INTERNAL_SERVER_ERROR },
    corrupted = { tally_core::Error::CorruptedData("x".into()), StatusCode::INTERNAL_SERVER_ERROR },
    prefix = { tally_core::Error::InvalidPrefix("X".into()), StatusCode::INTERNAL_SERVER_ERROR },
)]
fn status_for_core_error(err: tally_core::Error, expected: StatusCode) {
    assert_eq!(ApiError::from(err).status(), expected);
}

fn store_error() -> tally_core::Error {
    let db = tally_core::Database::open_in_memory().unwrap();
    db.conn.execute_batch("DROP TABLE issues").unwrap();
    db.get_all_issues().unwrap_err()
}

#[test]
fn store_failure_is_distinct_condition() {
    let err = ApiError::from(store_error());
    assert!(matches!(err, ApiError::StoreUnavailable(_)));
    assert!(err.to_string().starts_with("data unavailable"));
}

#[test]
fn validation_message_drops_hints() {
    let err = ApiError::from(tally_core::Error::InvalidSeverity("Urgent".into()));
    assert_eq!(err.to_string(), "invalid severity: 'Urgent'");
}

#[test]
fn route_not_found_message() {
    assert_eq!(ApiError::RouteNotFound.to_string(), "Route not found");
    assert_eq!(ApiError::RouteNotFound.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_body_is_message() {
    let response = ApiError::NotFound("iss-9".into()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.message, "issue not found: iss-9");
}
