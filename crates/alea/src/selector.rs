// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Rejection-sampling symbol selection.
//!
//! # Algorithm
//!
//! 1. `bits_needed` is the smallest `b` with `2^b >= alphabet.len()`.
//! 2. Each refill round draws enough `b`-bit blocks for the remaining
//!    symbols, over-provisioned by the expected rejection rate.
//! 3. A block `< alphabet.len()` selects that symbol; any other block is
//!    discarded. Output is returned as soon as it is full, mid-round.
//! 4. An unfinished round grows the overflow multiplier and refills.
//!
//! Discarding out-of-range blocks keeps every symbol at probability exactly
//! `1 / alphabet.len()` per position. Power-of-two alphabets never reject and
//! always finish in a single entropy call.

use alea_rand::EntropySource;

use crate::bit_blocks::allocate;
use crate::config::SelectorConfig;
use crate::error::RandomError;
use crate::word::{ByteOrder, Word};

/// Largest byte alphabet (indices must fit a single byte).
pub const MAX_BYTE_ALPHABET_LEN: usize = 256;

/// Alphabets needing at most this many bits per index use byte words.
const BYTE_WORD_MAX_BITS: u32 = 4;

/// Smallest `b` such that `2^b >= len`; `0` for `len <= 1`.
#[inline]
pub(crate) fn bits_needed(len: usize) -> u32 {
    if len <= 1 {
        0
    } else {
        usize::BITS - (len - 1).leading_zeros()
    }
}

/// Selects uniformly random symbols from an alphabet.
///
/// Borrows its entropy source; the source is the only shared state.
#[derive(Debug)]
pub struct Selector<'a, E: EntropySource + ?Sized> {
    entropy: &'a E,
    config: SelectorConfig,
}

impl<'a, E: EntropySource + ?Sized> Selector<'a, E> {
    /// Creates a selector with the default [`SelectorConfig`].
    pub fn new(entropy: &'a E) -> Self {
        Self::with_config(entropy, SelectorConfig::default())
    }

    /// Creates a selector with an explicit configuration.
    pub fn with_config(entropy: &'a E, config: SelectorConfig) -> Self {
        Self { entropy, config }
    }

    /// Returns `length` symbols drawn uniformly from `alphabet`.
    ///
    /// Duplicate symbols are allowed and weigh their symbol accordingly.
    /// Indices are full `usize` width, so any alphabet length is accepted;
    /// use [`Selector::select_bytes`] for byte alphabets to enforce
    /// [`MAX_BYTE_ALPHABET_LEN`].
    ///
    /// # Errors
    ///
    /// - [`RandomError::EmptyAlphabet`] if `alphabet` is empty.
    /// - [`RandomError::Entropy`] if the entropy source fails.
    pub fn select<T: Copy>(&self, length: usize, alphabet: &[T]) -> Result<Vec<T>, RandomError> {
        self.select_counting_rounds(length, alphabet)
            .map(|(symbols, _)| symbols)
    }

    /// Like [`Selector::select`], for byte alphabets of at most 256 symbols.
    ///
    /// # Errors
    ///
    /// Additionally returns [`RandomError::AlphabetTooLarge`] for alphabets
    /// longer than [`MAX_BYTE_ALPHABET_LEN`].
    pub fn select_bytes(&self, length: usize, alphabet: &[u8]) -> Result<Vec<u8>, RandomError> {
        if alphabet.len() > MAX_BYTE_ALPHABET_LEN {
            return Err(RandomError::AlphabetTooLarge {
                len: alphabet.len(),
                max: MAX_BYTE_ALPHABET_LEN,
            });
        }

        self.select(length, alphabet)
    }

    /// Like [`Selector::select`], collecting codepoints into a `String`.
    pub fn select_chars(&self, length: usize, alphabet: &[char]) -> Result<String, RandomError> {
        self.select(length, alphabet)
            .map(|symbols| symbols.into_iter().collect())
    }

    /// Selection plus the number of refill rounds (entropy calls) it took.
    pub(crate) fn select_counting_rounds<T: Copy>(
        &self,
        length: usize,
        alphabet: &[T],
    ) -> Result<(Vec<T>, usize), RandomError> {
        let Some(&first) = alphabet.first() else {
            return Err(RandomError::EmptyAlphabet);
        };

        if length == 0 {
            return Ok((Vec::new(), 0));
        }

        if alphabet.len() == 1 {
            return Ok((vec![first; length], 0));
        }

        if bits_needed(alphabet.len()) <= BYTE_WORD_MAX_BITS {
            self.fill::<u8, T>(length, alphabet)
        } else {
            self.fill::<u64, T>(length, alphabet)
        }
    }

    fn fill<W: Word, T: Copy>(
        &self,
        length: usize,
        alphabet: &[T],
    ) -> Result<(Vec<T>, usize), RandomError> {
        let alphabet_len = alphabet.len();
        let bits_needed = bits_needed(alphabet_len);
        let mut output = Vec::with_capacity(length);

        if alphabet_len.is_power_of_two() {
            let bits = length.saturating_mul(bits_needed as usize);
            let blocks = allocate::<W, E>(self.entropy, bits, bits_needed, ByteOrder::LittleEndian)?;

            output.extend(
                blocks
                    .blocks()
                    .take(length)
                    .map(|index| alphabet[index.to_u64() as usize]),
            );

            tracing::trace!(length, alphabet_len, bits_needed, "Filled without rejection");

            return Ok((output, 1));
        }

        let options = (1u128 << bits_needed) as f64;
        let rejection = 1.0 - alphabet_len as f64 / options;
        let limit = alphabet_len as u64;

        let mut multiplier = self.config.overflow_baseline();
        let mut rounds = 0;

        loop {
            rounds += 1;

            let remaining = length - output.len();
            let bits = buffer_bits(remaining, bits_needed, multiplier, rejection);

            tracing::trace!(
                round = rounds,
                remaining,
                bits,
                multiplier,
                alphabet_len,
                "Refilling selector"
            );

            let blocks = allocate::<W, E>(self.entropy, bits, bits_needed, ByteOrder::LittleEndian)?;

            for candidate in blocks.blocks() {
                let candidate = candidate.to_u64();

                if candidate < limit {
                    output.push(alphabet[candidate as usize]);

                    if output.len() == length {
                        return Ok((output, rounds));
                    }
                }
            }

            multiplier += self.config.overflow_step();
        }
    }
}

/// Bits to request for `remaining` symbols at the given rejection rate.
#[inline]
fn buffer_bits(remaining: usize, bits_needed: u32, multiplier: f64, rejection: f64) -> usize {
    let base = remaining.saturating_mul(bits_needed as usize);
    let padded = (base as f64 * (1.0 + multiplier * rejection)).ceil();

    // At least one block per remaining symbol.
    (padded as usize).max(base)
}
