// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fast, non-cryptographic entropy tier.

use std::sync::{Mutex, PoisonError};

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Non-secure entropy source backed by [`SmallRng`].
///
/// Much cheaper per byte than [`SystemEntropySource`], but NOT suitable for
/// secrets: the output is predictable to anyone who learns the internal state.
/// Use it for test data, jitter, sampling and similar.
///
/// The generator state sits behind a mutex so one instance can be shared
/// between threads; each `fill_bytes` call takes the lock once.
pub struct PseudoEntropySource {
    rng: Mutex<SmallRng>,
}

impl PseudoEntropySource {
    /// Creates a source seeded from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the OS cannot provide
    /// a seed.
    pub fn from_os() -> Result<Self, EntropyError> {
        Self::from_source(&SystemEntropySource {})
    }

    /// Creates a source seeded with a full-width seed drawn from `source`.
    ///
    /// # Errors
    ///
    /// Propagates the failure of `source`.
    pub fn from_source<E: EntropySource + ?Sized>(source: &E) -> Result<Self, EntropyError> {
        let mut seed = <SmallRng as SeedableRng>::Seed::default();
        source.fill_bytes(seed.as_mut())?;

        tracing::debug!("Seeded pseudo entropy source from entropy source");

        Ok(Self {
            rng: Mutex::new(SmallRng::from_seed(seed)),
        })
    }

    /// Creates a deterministic source. Identical seeds yield identical streams
    /// on the same platform and `rand` version.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl EntropySource for PseudoEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        // SmallRng state stays valid across a panic; poisoning is ignored.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.fill_bytes(dest);

        Ok(())
    }
}

impl core::fmt::Debug for PseudoEntropySource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PseudoEntropySource([REDACTED])")
    }
}
