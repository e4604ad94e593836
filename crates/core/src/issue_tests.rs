// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use chrono::TimeZone;
use yare::parameterized;

fn body(assignee: &str, title: &str, description: &str, severity: &str) -> NewIssue {
    NewIssue {
        assignee: Some(assignee.to_string()),
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        severity: Some(severity.to_string()),
    }
}

// Severity parsing tests
#[parameterized(
    low = { "Low", Severity::Low },
    medium = { "Medium", Severity::Medium },
    high = { "High", Severity::High },
    severe = { "Severe", Severity::Severe },
)]
fn severity_from_str_valid(input: &str, expected: Severity) {
    assert_eq!(input.parse::<Severity>().unwrap(), expected);
}

#[parameterized(
    invalid = { "Critical" },
    empty = { "" },
    lowercase = { "high" },
    uppercase = { "SEVERE" },
    padded = { " Low" },
)]
fn severity_from_str_invalid(input: &str) {
    assert!(matches!(
        input.parse::<Severity>(),
        Err(Error::InvalidSeverity(_))
    ));
}

#[test]
fn severity_serializes_capitalized() {
    assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"Medium\"");
    assert_eq!(Severity::Severe.to_string(), "Severe");
}

// Status parsing tests
#[parameterized(
    new = { "new", Status::New },
    resolved = { "resolved", Status::Resolved },
)]
fn status_from_str_valid(input: &str, expected: Status) {
    assert_eq!(input.parse::<Status>().unwrap(), expected);
}

#[parameterized(
    invalid = { "closed" },
    empty = { "" },
    capitalized = { "Resolved" },
)]
fn status_from_str_invalid(input: &str) {
    assert!(input.parse::<Status>().is_err());
}

#[parameterized(
    new_to_resolved = { Status::New, Status::Resolved, true },
    resolved_to_new = { Status::Resolved, Status::New, false },
    new_to_new = { Status::New, Status::New, false },
    resolved_to_resolved = { Status::Resolved, Status::Resolved, false },
)]
fn status_transitions(from: Status, to: Status, expected: bool) {
    assert_eq!(from.can_transition_to(to), expected);
}

#[test]
fn status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Status::Resolved).unwrap(), "\"resolved\"");
}

#[test]
fn new_issue_validates() {
    let draft = body("alice", "Crash", "App crashes on start", "High")
        .validate()
        .unwrap();
    assert_eq!(draft.assignee, "alice");
    assert_eq!(draft.severity, Severity::High);
}

#[test]
fn new_issue_accepts_name_alias() {
    let parsed: NewIssue = serde_json::from_str(
        r#"{"name":"bob","title":"t","description":"d","severity":"Low"}"#,
    )
    .unwrap();
    assert_eq!(parsed.validate().unwrap().assignee, "bob");
}

#[parameterized(
    assignee = { "", "t", "d", "Low", "assignee" },
    title = { "a", "", "d", "Low", "title" },
    description = { "a", "t", "", "Low", "description" },
    severity = { "a", "t", "d", "", "severity" },
)]
fn new_issue_missing_field(assignee: &str, title: &str, description: &str, severity: &str, field: &str) {
    let err = body(assignee, title, description, severity)
        .validate()
        .unwrap_err();
    match err {
        Error::MissingField(f) => assert_eq!(f, field),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn new_issue_whitespace_is_present() {
    let draft = body("a", " ", "d", "Low").validate().unwrap();
    assert_eq!(draft.title, " ");
}

#[test]
fn new_issue_lowercase_severity_rejected() {
    let err = body("a", "t", "d", "high").validate().unwrap_err();
    assert!(matches!(err, Error::InvalidSeverity(s) if s == "high"));
}

#[test]
fn new_issue_absent_fields() {
    let err = NewIssue::default().validate().unwrap_err();
    assert!(matches!(err, Error::MissingField("assignee")));
}

#[test]
fn new_issue_invalid_severity() {
    let err = body("a", "t", "d", "Urgent").validate().unwrap_err();
    assert!(matches!(err, Error::InvalidSeverity(_)));
}

#[test]
fn issue_new_starts_unresolved() {
    let at = Utc.with_ymd_and_hms(2024, 3, 9, 23, 30, 0).unwrap();
    let draft = body("a", "t", "d", "Severe").validate().unwrap();
    let issue = Issue::new("iss-1".into(), draft, at);
    assert_eq!(issue.status, Status::New);
    assert_eq!(issue.created_at, issue.updated_at);
    assert_eq!(issue.updated_day().to_string(), "2024-03-09");
}

#[test]
fn issue_serializes_camel_case() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let draft = body("a", "t", "d", "Low").validate().unwrap();
    let json = serde_json::to_value(Issue::new("iss-1".into(), draft, at)).unwrap();
    assert_eq!(json["businessId"], "iss-1");
    assert_eq!(json["status"], "new");
    assert_eq!(json["severity"], "Low");
    assert!(json.get("createdAt").is_some());
    assert!(json.get("updatedAt").is_some());
}
