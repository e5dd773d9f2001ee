// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-width words that random bytes are packed into.

use core::fmt;

/// Byte order used when packing random bytes into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// First byte lands in the word's most significant position.
    BigEndian,
    /// First byte lands in the word's least significant position.
    LittleEndian,
}

/// Unsigned word that bit-blocks are extracted from, low bits first.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`.
pub trait Word: Copy + Default + Eq + fmt::Debug + Send + Sync + 'static {
    /// Width in bits.
    const BITS: u32;
    /// Width in bytes.
    const BYTES: usize;

    /// Builds a word from exactly [`Word::BYTES`] bytes.
    fn from_bytes(order: ByteOrder, bytes: &[u8]) -> Self;

    /// Removes and returns the low `width` bits, shifting the rest down.
    fn take_low_bits(&mut self, width: u32) -> Self;

    /// Widens to `u64` (lossless for every implementor).
    fn to_u64(self) -> u64;
}

macro_rules! impl_word {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;
                const BYTES: usize = core::mem::size_of::<$ty>();

                #[inline(always)]
                fn from_bytes(order: ByteOrder, bytes: &[u8]) -> Self {
                    let mut buf = [0u8; core::mem::size_of::<$ty>()];
                    buf.copy_from_slice(bytes);

                    match order {
                        ByteOrder::BigEndian => <$ty>::from_be_bytes(buf),
                        ByteOrder::LittleEndian => <$ty>::from_le_bytes(buf),
                    }
                }

                #[inline(always)]
                fn take_low_bits(&mut self, width: u32) -> Self {
                    let mask = if width >= Self::BITS {
                        <$ty>::MAX
                    } else {
                        ((1 as $ty) << width) - 1
                    };
                    let value = *self & mask;
                    *self = self.checked_shr(width).unwrap_or(0);

                    value
                }

                #[inline(always)]
                fn to_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);
