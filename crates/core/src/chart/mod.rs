// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Chart-ready summaries of the issue set.
//!
//! Every transform here is a pure function of the issues it is handed and
//! produces one of two payload shapes understood by the dashboard's chart
//! surface:
//!
//! - `{labels, data}` ([`Distribution`]) for the severity and status pies
//! - `{labels, datasets}` ([`Timeline`], [`Throughput`]) for the per-assignee
//!   line and bar charts
//!
//! # Grouping order
//!
//! Groups are emitted in the order their key first appears in the input.
//! Callers pass issues in store order, so this is the store's grouping order.
//! Consumers must not rely on it.

mod color;
mod distribution;
mod throughput;
mod timeline;

pub use color::{ColorSource, RandomColors};
pub use distribution::{severity_distribution, status_distribution};
pub use throughput::assignee_throughput;
pub use timeline::resolution_timeline;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

use crate::issue::Issue;

/// Counts per distinct value: `labels[i]` has `data[i]` issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

/// Resolutions per day, one line per assignee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Every day that appears in any dataset, ascending.
    pub labels: Vec<String>,
    pub datasets: Vec<TimelineDataset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDataset {
    /// The assignee.
    pub label: String,
    /// One point per day with at least one resolution, ascending.
    pub data: Vec<TimelinePoint>,
    /// Presentation only. Not stable across requests.
    pub border_color: String,
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Day formatted as `YYYY-MM-DD`.
    pub x: String,
    /// Resolutions on that day.
    pub y: u64,
}

/// Resolved and new counts per assignee, aligned on `labels`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Throughput {
    pub labels: Vec<String>,
    pub datasets: Vec<ThroughputDataset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThroughputDataset {
    pub label: String,
    pub data: Vec<u64>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

/// Group issues by key, keeping groups in first-appearance order.
pub(crate) fn group_by<'a, K, F>(
    issues: impl IntoIterator<Item = &'a Issue>,
    key: F,
) -> Vec<(K, Vec<&'a Issue>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&Issue) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a Issue>)> = Vec::new();

    for issue in issues {
        let k = key(issue);
        match index.get(&k) {
            Some(&i) => groups[i].1.push(issue),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![issue]));
            }
        }
    }

    groups
}

/// Format a day as zero-padded `YYYY-MM-DD`.
pub(crate) fn format_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}


#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
