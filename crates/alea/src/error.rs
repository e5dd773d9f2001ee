// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alea_rand::EntropyError;
use thiserror::Error;

/// Errors that can occur while generating random output.
///
/// Every variant except [`RandomError::Entropy`] is an invalid argument and is
/// reported before any entropy is drawn.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// The alphabet contains no symbols.
    #[error("EmptyAlphabet")]
    EmptyAlphabet,

    /// The alphabet has more symbols than its index representation can address.
    #[error("AlphabetTooLarge: {len} symbols (max {max})")]
    AlphabetTooLarge {
        /// Number of symbols supplied.
        len: usize,
        /// Largest supported alphabet.
        max: usize,
    },

    /// A byte alphabet used to build a `String` contains non-ASCII bytes.
    #[error("NonAsciiAlphabet")]
    NonAsciiAlphabet,

    /// Block width is zero or wider than the word it is packed into.
    #[error("InvalidBlockWidth: {width} (expected 1..={max})")]
    InvalidBlockWidth {
        /// Requested block width in bits.
        width: u32,
        /// Word width in bits.
        max: u32,
    },

    /// `max_exclusive <= min_inclusive`.
    #[error("EmptyRange: [{min}, {max})")]
    EmptyRange {
        /// Inclusive lower bound.
        min: i64,
        /// Exclusive upper bound.
        max: i64,
    },

    /// The entropy source failed. Fatal; never retried.
    #[error("Entropy: {0}")]
    Entropy(#[from] EntropyError),
}

impl RandomError {
    /// Returns `true` for caller mistakes (as opposed to a broken environment).
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, RandomError::Entropy(_))
    }
}
