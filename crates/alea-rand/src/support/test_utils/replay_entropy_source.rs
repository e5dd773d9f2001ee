// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Deterministic entropy source replaying a fixed byte pattern.
///
/// Every `fill_bytes` call continues where the previous one stopped, cycling
/// through the pattern. An empty pattern yields zero bytes.
pub struct ReplayEntropySource {
    pattern: Vec<u8>,
    cursor: Cell<usize>,
    fill_bytes_count: Cell<usize>,
}

impl ReplayEntropySource {
    /// Creates a source replaying `pattern` forever.
    pub fn new(pattern: &[u8]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            cursor: Cell::new(0),
            fill_bytes_count: Cell::new(0),
        }
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.fill_bytes_count.get()
    }

    /// Returns how many bytes have been handed out so far.
    pub fn bytes_served(&self) -> usize {
        self.cursor.get()
    }
}

impl EntropySource for ReplayEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.fill_bytes_count.set(self.fill_bytes_count.get() + 1);

        let start = self.cursor.get();

        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = if self.pattern.is_empty() {
                0
            } else {
                self.pattern[(start + i) % self.pattern.len()]
            };
        }

        self.cursor.set(start + dest.len());

        Ok(())
    }
}
