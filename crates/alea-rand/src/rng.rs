// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `rand_core` adapter over [`EntropySource`].

use rand_core::{TryCryptoRng, TryRngCore};

use crate::error::EntropyError;
use crate::traits::{EntropySource, SecureEntropySource};

/// Exposes an [`EntropySource`] through the `rand_core` fallible RNG traits.
///
/// Lets `rand` distributions, shuffles and range sampling run over either
/// tier. The adapter is a [`TryCryptoRng`] only when the wrapped source is a
/// [`SecureEntropySource`].
///
/// Use [`TryRngCore::unwrap_err`] to obtain an infallible `RngCore` (which
/// panics on entropy failure) where a `rand::Rng` is required.
///
/// # Example
///
/// ```rust
/// use alea_rand::{EntropyRng, SystemEntropySource};
/// use rand_core::TryRngCore;
///
/// let mut rng = EntropyRng::new(SystemEntropySource {});
/// let value = rng.try_next_u64().expect("Failed to draw u64");
/// # let _ = value;
/// ```
#[derive(Debug, Clone)]
pub struct EntropyRng<E> {
    source: E,
}

impl<E: EntropySource> EntropyRng<E> {
    /// Wraps `source`.
    pub fn new(source: E) -> Self {
        Self { source }
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> E {
        self.source
    }
}

impl<E: EntropySource> TryRngCore for EntropyRng<E> {
    type Error = EntropyError;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        let mut buf = [0u8; 4];
        self.source.fill_bytes(&mut buf)?;

        Ok(u32::from_le_bytes(buf))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        let mut buf = [0u8; 8];
        self.source.fill_bytes(&mut buf)?;

        Ok(u64::from_le_bytes(buf))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.source.fill_bytes(dst)
    }
}

impl<E: SecureEntropySource> TryCryptoRng for EntropyRng<E> {}
