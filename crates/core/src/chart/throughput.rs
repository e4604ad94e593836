// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::{group_by, Throughput, ThroughputDataset};
use crate::issue::{Issue, Status};

const RESOLVED_FILL: &str = "rgba(75, 192, 192, 0.5)";
const RESOLVED_BORDER: &str = "rgb(75, 192, 192)";
const NEW_FILL: &str = "rgba(255, 99, 132, 0.5)";
const NEW_BORDER: &str = "rgb(255, 99, 132)";

/// Resolved and new issue counts per assignee.
///
/// Returns two datasets, "Resolved" then "New", both indexed like `labels`.
/// Unlike the distributions, a zero count is reported rather than omitted.
pub fn assignee_throughput(issues: &[Issue]) -> Throughput {
    let groups = group_by(issues, |issue| issue.assignee.clone());

    let mut labels = Vec::with_capacity(groups.len());
    let mut resolved = Vec::with_capacity(groups.len());
    let mut new = Vec::with_capacity(groups.len());

    for (assignee, group) in groups {
        let count = |status: Status| group.iter().filter(|i| i.status == status).count() as u64;
        resolved.push(count(Status::Resolved));
        new.push(count(Status::New));
        labels.push(assignee);
    }

    Throughput {
        labels,
        datasets: vec![
            dataset("Resolved", resolved, RESOLVED_FILL, RESOLVED_BORDER),
            dataset("New", new, NEW_FILL, NEW_BORDER),
        ],
    }
}

fn dataset(label: &str, data: Vec<u64>, fill: &str, border: &str) -> ThroughputDataset {
    ThroughputDataset {
        label: label.to_string(),
        data,
        background_color: fill.to_string(),
        border_color: border.to_string(),
        border_width: 1,
    }
}

#[cfg(test)]
#[path = "throughput_tests.rs"]
mod tests;
