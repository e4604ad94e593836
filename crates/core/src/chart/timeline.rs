// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use super::{format_day, group_by, ColorSource, Timeline, TimelineDataset, TimelinePoint};
use crate::issue::{Issue, Status};

/// Resolutions per assignee per UTC day of `updated_at`.
///
/// Only resolved issues count; anything else in `issues` is skipped, so an
/// assignee without resolutions gets no dataset. Points within a dataset and
/// the shared `labels` are ascending by date. Each dataset takes the next
/// color from `colors`.
pub fn resolution_timeline<C>(issues: &[Issue], mut colors: C) -> Timeline
where
    C: ColorSource,
{
    let resolved = issues
        .iter()
        .filter(|issue| issue.status == Status::Resolved);

    let mut labels = BTreeSet::new();
    let mut datasets = Vec::new();

    for (assignee, group) in group_by(resolved, |issue| issue.assignee.clone()) {
        let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for issue in group {
            *per_day.entry(issue.updated_day()).or_insert(0) += 1;
        }

        let data = per_day
            .into_iter()
            .map(|(day, count)| {
                let x = format_day(day);
                labels.insert(x.clone());
                TimelinePoint { x, y: count }
            })
            .collect();

        datasets.push(TimelineDataset {
            label: assignee,
            data,
            border_color: colors.next_color(),
            fill: false,
        });
    }

    Timeline {
        labels: labels.into_iter().collect(),
        datasets,
    }
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
