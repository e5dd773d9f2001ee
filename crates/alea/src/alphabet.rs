// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Alphabets and predefined symbol sets.

/// Ordered symbols that random strings are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet<'a> {
    /// Single-byte symbols, at most 256 of them. Must be ASCII to build a `String`.
    Bytes(&'a [u8]),
    /// Unicode codepoints, any positive count.
    Chars(&'a [char]),
}

impl<'a> Alphabet<'a> {
    /// Number of symbols (duplicates included).
    pub const fn len(&self) -> usize {
        match self {
            Alphabet::Bytes(bytes) => bytes.len(),
            Alphabet::Chars(chars) => chars.len(),
        }
    }

    /// `true` if the alphabet has no symbols.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a [u8]> for Alphabet<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Alphabet::Bytes(bytes)
    }
}

impl<'a> From<&'a [char]> for Alphabet<'a> {
    fn from(chars: &'a [char]) -> Self {
        Alphabet::Chars(chars)
    }
}

/// `0-9a-f`
pub const HEX: Alphabet<'static> = Alphabet::Bytes(b"0123456789abcdef");

/// `A-Z`
pub const UPPERCASE: Alphabet<'static> = Alphabet::Bytes(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// `A-Za-z`
pub const UPPER_AND_LOWER: Alphabet<'static> =
    Alphabet::Bytes(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `A-Za-z0-9`
pub const ALPHANUMERIC: Alphabet<'static> =
    Alphabet::Bytes(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789");

/// URL-safe base64 symbols (`-` and `_`). Default for random strings.
pub const BASE64_URL: Alphabet<'static> =
    Alphabet::Bytes(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_");

/// Standard base64 symbols (`+` and `/`).
pub const BASE64_STD: Alphabet<'static> =
    Alphabet::Bytes(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");
