// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn components(color: &str) -> Vec<u16> {
    color
        .strip_prefix("rgb(")
        .and_then(|s| s.strip_suffix(')'))
        .unwrap()
        .split(", ")
        .map(|c| c.parse().unwrap())
        .collect()
}

#[test]
fn colors_are_css_rgb() {
    let mut colors = RandomColors::new();
    for _ in 0..50 {
        let parts = components(&colors.next_color());
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|&c| c < 255));
    }
}

#[test]
fn colors_do_not_repeat_within_a_source() {
    let mut colors = RandomColors::with_rng(StdRng::seed_from_u64(7));
    let issued: HashSet<String> = (0..500).map(|_| colors.next_color()).collect();
    assert_eq!(issued.len(), 500);
}

#[test]
fn mutable_reference_is_a_source() {
    fn take<C: ColorSource>(mut source: C) -> String {
        source.next_color()
    }
    let mut colors = RandomColors::default();
    assert!(take(&mut colors).starts_with("rgb("));
}
