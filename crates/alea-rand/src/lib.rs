// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # alea_rand
//!
//! Entropy sources for the Alea random generation stack.
//!
//! Two tiers are provided. Both hand out raw random bytes on demand and are
//! otherwise opaque to the algorithms built on top of them.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`), secure tier
//! - [`PseudoEntropySource`]: seeded `SmallRng`, fast non-secure tier
//! - [`EntropyRng`]: adapter exposing any source as a `rand_core` RNG
//!
//! ## Traits
//!
//! - [`EntropySource`]: "give me N random bytes"
//! - [`SecureEntropySource`]: marker for sources suitable for secrets
//!
//! ## Example
//!
//! ```rust
//! use alea_rand::{EntropySource, PseudoEntropySource, SystemEntropySource};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut key = [0u8; 32];
//! entropy.fill_bytes(&mut key).expect("Failed to generate entropy");
//!
//! // Reproducible, non-secure
//! let pseudo = PseudoEntropySource::from_seed(42);
//! let mut noise = [0u8; 16];
//! pseudo.fill_bytes(&mut noise).expect("Failed to generate noise");
//! ```
//!
//! ## Platform Support
//!
//! The secure tier supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod pseudo;
mod rng;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use pseudo::PseudoEntropySource;
pub use rng::EntropyRng;
pub use system::SystemEntropySource;
pub use traits::{EntropySource, SecureEntropySource};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
