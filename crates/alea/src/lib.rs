// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # alea
//!
//! Unbiased random strings, bit buffers and bounded integers.
//!
//! Every symbol of an alphabet of any size (not only powers of two) has
//! exactly equal probability at every output position, while the entropy
//! source is called as rarely as possible.
//!
//! ## Core Types
//!
//! - [`Generator`]: facade over an injected entropy source
//! - [`Selector`]: rejection-sampling symbol selection
//! - [`allocate`] / [`BitBlocks`]: batched, block-packed random words
//! - [`Alphabet`] and the predefined sets in [`alphabet`]
//!
//! ## Entropy tiers
//!
//! - [`SystemEntropySource`]: OS CSPRNG, for tokens, keys and passwords
//! - [`PseudoEntropySource`]: seeded `SmallRng`, fast and NOT secure
//!
//! ## Example
//!
//! ```rust
//! use alea::{ByteOrder, Generator, alphabet};
//!
//! let secure = Generator::secure();
//! let session_id = secure.random_string(43).expect("Failed to generate session id");
//! assert_eq!(session_id.len(), 43);
//!
//! let fast = Generator::pseudo_from_seed(7);
//! let label = fast
//!     .random_string_from_alphabet(8, alphabet::UPPERCASE)
//!     .expect("Failed to generate label");
//! assert!(label.bytes().all(|b| b.is_ascii_uppercase()));
//!
//! let bits = secure
//!     .random_bits(130, ByteOrder::BigEndian)
//!     .expect("Failed to generate bits");
//! assert_eq!(bits.len(), 3);
//! ```
//!
//! ## Errors
//!
//! Invalid arguments (empty alphabet, oversized byte alphabet, empty integer
//! range, bad block width) are rejected before any entropy is drawn. Entropy
//! failures surface as [`RandomError::Entropy`] and are never retried or
//! replaced by weaker randomness.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

pub mod alphabet;

mod bit_blocks;
mod config;
mod error;
mod generator;
mod integer;
mod selector;
mod word;

pub use alphabet::Alphabet;
pub use bit_blocks::{BitBlocks, Blocks, allocate};
pub use config::{DEFAULT_OVERFLOW_BASELINE, DEFAULT_OVERFLOW_STEP, SelectorConfig};
pub use error::RandomError;
pub use generator::Generator;
pub use integer::random_integer;
pub use selector::{MAX_BYTE_ALPHABET_LEN, Selector};
pub use word::{ByteOrder, Word};

pub use alea_rand::{
    EntropyError, EntropyRng, EntropySource, PseudoEntropySource, SecureEntropySource,
    SystemEntropySource,
};

#[cfg(any(test, feature = "test-utils"))]
pub use alea_rand::test_utils;
