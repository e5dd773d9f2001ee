// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;

use crate::error::EntropyError;

/// Opaque provider of uniformly random bytes.
///
/// Callers treat a source as expensive: every call may be a syscall or take a
/// lock, so consumers batch their requests into as few calls as possible.
/// Sources needing serialisation (shared state) handle it internally.
pub trait EntropySource {
    /// Fills the destination buffer with uniformly random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source is
    /// unavailable or fails to generate random data. Callers must not retry
    /// with a weaker source.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// Marker for entropy sources suitable for cryptographic use
/// (keys, tokens, session identifiers).
pub trait SecureEntropySource: EntropySource {}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

impl<E: EntropySource + ?Sized> EntropySource for Box<E> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

impl<E: EntropySource + ?Sized> EntropySource for Arc<E> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

impl<E: SecureEntropySource + ?Sized> SecureEntropySource for &E {}
impl<E: SecureEntropySource + ?Sized> SecureEntropySource for Box<E> {}
impl<E: SecureEntropySource + ?Sized> SecureEntropySource for Arc<E> {}
