// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alea_rand::EntropySource;

use crate::error::RandomError;

/// Returns a uniform integer in `[min_inclusive, max_exclusive)`.
///
/// Draws 64-bit values and rejects the `2^64 mod span` lowest ones, so every
/// value in the range is equally likely. Each draw is one entropy call; the
/// expected number of draws is below 2 for every span.
///
/// # Errors
///
/// - [`RandomError::EmptyRange`] if `max_exclusive <= min_inclusive`
///   (checked before drawing).
/// - [`RandomError::Entropy`] if the entropy source fails.
pub fn random_integer<E: EntropySource + ?Sized>(
    entropy: &E,
    min_inclusive: i64,
    max_exclusive: i64,
) -> Result<i64, RandomError> {
    if max_exclusive <= min_inclusive {
        return Err(RandomError::EmptyRange {
            min: min_inclusive,
            max: max_exclusive,
        });
    }

    let span = max_exclusive.abs_diff(min_inclusive);
    let threshold = span.wrapping_neg() % span;

    loop {
        let mut buf = [0u8; 8];
        entropy.fill_bytes(&mut buf)?;

        let candidate = u64::from_le_bytes(buf);

        if candidate >= threshold {
            return Ok(min_inclusive.wrapping_add((candidate % span) as i64));
        }
    }
}
