// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Baseline overflow multiplier applied on the first refill round.
pub const DEFAULT_OVERFLOW_BASELINE: f64 = 2.0;

/// Amount the overflow multiplier grows after each unfinished round.
pub const DEFAULT_OVERFLOW_STEP: f64 = 1.0;

/// Tuning for the rejection-sampling selector.
///
/// Each refill round requests
/// `remaining * bits_needed * (1 + multiplier * rejection_probability)` bits,
/// where the multiplier starts at `overflow_baseline` and grows by
/// `overflow_step` per round. Only the number of entropy calls depends on
/// these values; the output distribution never does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    overflow_baseline: f64,
    overflow_step: f64,
}

impl SelectorConfig {
    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self {
            overflow_baseline: DEFAULT_OVERFLOW_BASELINE,
            overflow_step: DEFAULT_OVERFLOW_STEP,
        }
    }

    /// Sets the baseline multiplier. Negative or NaN values become `0.0`.
    pub fn with_overflow_baseline(mut self, baseline: f64) -> Self {
        self.overflow_baseline = baseline.max(0.0);
        self
    }

    /// Sets the per-round growth. Negative or NaN values become `0.0`.
    pub fn with_overflow_step(mut self, step: f64) -> Self {
        self.overflow_step = step.max(0.0);
        self
    }

    /// Baseline multiplier.
    pub fn overflow_baseline(&self) -> f64 {
        self.overflow_baseline
    }

    /// Per-round growth.
    pub fn overflow_step(&self) -> f64 {
        self.overflow_step
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::new()
    }
}
