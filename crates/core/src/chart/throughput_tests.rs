// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::super::test_support::issue;
use super::*;
use crate::issue::Severity;

#[test]
fn datasets_are_resolved_then_new() {
    let t = assignee_throughput(&[]);
    let names: Vec<_> = t.datasets.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(names, vec!["Resolved", "New"]);
    assert!(t.labels.is_empty());
    assert!(t.datasets.iter().all(|d| d.data.is_empty()));
}

#[test]
fn counts_aligned_with_labels() {
    let issues = vec![
        issue("alice", Severity::Low, Status::New),
        issue("bob", Severity::Low, Status::Resolved),
        issue("alice", Severity::High, Status::Resolved),
        issue("alice", Severity::High, Status::New),
        issue("bob", Severity::Low, Status::Resolved),
    ];

    let t = assignee_throughput(&issues);
    assert_eq!(t.labels, vec!["alice", "bob"]);
    assert_eq!(t.datasets[0].data, vec![1, 2]);
    assert_eq!(t.datasets[1].data, vec![2, 0]);
}

#[test]
fn zero_counts_are_reported() {
    let issues = vec![issue("carol", Severity::Severe, Status::New)];
    let t = assignee_throughput(&issues);
    assert_eq!(t.labels, vec!["carol"]);
    assert_eq!(t.datasets[0].data, vec![0]);
    assert_eq!(t.datasets[1].data, vec![1]);
}

#[test]
fn totals_match_per_assignee() {
    let names = ["ann", "ben", "cy"];
    let issues: Vec<_> = (0..20)
        .map(|n| {
            let status = if n % 2 == 0 { Status::New } else { Status::Resolved };
            issue(names[n * n % 3], Severity::Medium, status)
        })
        .collect();

    let t = assignee_throughput(&issues);
    for (i, name) in t.labels.iter().enumerate() {
        let total = issues.iter().filter(|x| &x.assignee == name).count() as u64;
        assert_eq!(t.datasets[0].data[i] + t.datasets[1].data[i], total);
    }
    let mut unique = t.labels.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), t.labels.len());
}

#[test]
fn fixed_styling() {
    let t = assignee_throughput(&[]);
    assert_eq!(t.datasets[0].background_color, "rgba(75, 192, 192, 0.5)");
    assert_eq!(t.datasets[1].border_color, "rgb(255, 99, 132)");
    assert!(t.datasets.iter().all(|d| d.border_width == 1));
}
