// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt::Display;
use std::hash::Hash;

use super::{group_by, Distribution};
use crate::issue::Issue;

/// Issue count per severity present in the input.
///
/// Severities with no issues get no entry.
pub fn severity_distribution(issues: &[Issue]) -> Distribution {
    count_by(issues, |issue| issue.severity)
}

/// Issue count per status present in the input.
///
/// Statuses with no issues get no entry.
pub fn status_distribution(issues: &[Issue]) -> Distribution {
    count_by(issues, |issue| issue.status)
}

fn count_by<K, F>(issues: &[Issue], key: F) -> Distribution
where
    K: Eq + Hash + Clone + Display,
    F: Fn(&Issue) -> K,
{
    let (labels, data) = group_by(issues, key)
        .into_iter()
        .map(|(k, group)| (k.to_string(), group.len() as u64))
        .unzip();

    Distribution { labels, data }
}

#[cfg(test)]
#[path = "distribution_tests.rs"]
mod tests;
