// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line colors for per-assignee datasets.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Number of distinct colors [`RandomColors`] can produce.
const PALETTE_SIZE: usize = 255 * 255 * 255;

/// Hands out one CSS color per dataset.
pub trait ColorSource {
    fn next_color(&mut self) -> String;
}

impl<C: ColorSource + ?Sized> ColorSource for &mut C {
    fn next_color(&mut self) -> String {
        (**self).next_color()
    }
}

/// Random `rgb(r, g, b)` colors, never repeating within one source.
///
/// Use a fresh source per payload: colors identify nothing across requests.
pub struct RandomColors<R: Rng = StdRng> {
    rng: R,
    issued: HashSet<(u8, u8, u8)>,
}

impl RandomColors<StdRng> {
    /// Creates a source seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for RandomColors<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomColors<R> {
    /// Creates a source drawing from the given generator.
    pub fn with_rng(rng: R) -> Self {
        RandomColors {
            rng,
            issued: HashSet::new(),
        }
    }
}

impl<R: Rng> ColorSource for RandomColors<R> {
    fn next_color(&mut self) -> String {
        loop {
            let rgb = (
                self.rng.gen_range(0..255),
                self.rng.gen_range(0..255),
                self.rng.gen_range(0..255),
            );
            if self.issued.insert(rgb) || self.issued.len() >= PALETTE_SIZE {
                return format!("rgb({}, {}, {})", rgb.0, rgb.1, rgb.2);
            }
        }
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
