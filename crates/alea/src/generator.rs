// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alea_rand::{EntropySource, PseudoEntropySource, SystemEntropySource};

use crate::alphabet::{Alphabet, BASE64_URL};
use crate::bit_blocks::{BitBlocks, allocate};
use crate::config::SelectorConfig;
use crate::error::RandomError;
use crate::integer::random_integer;
use crate::selector::Selector;
use crate::word::ByteOrder;

/// Random bytes, bits, strings and integers over an injected entropy source.
///
/// The generator owns its source (pass `&source` to share one) and holds no
/// other state between calls: each call allocates its own buffers.
///
/// # Example
///
/// ```rust
/// use alea::{Generator, alphabet};
///
/// let generator = Generator::secure();
///
/// let token = generator.random_string(32).expect("Failed to generate token");
/// assert_eq!(token.len(), 32);
///
/// let pin = generator
///     .random_string_from_alphabet(6, alphabet::HEX)
///     .expect("Failed to generate pin");
/// assert!(pin.bytes().all(|b| b.is_ascii_hexdigit()));
///
/// let roll = generator.random_integer(1, 7).expect("Failed to roll");
/// assert!((1..7).contains(&roll));
/// ```
#[derive(Debug, Clone)]
pub struct Generator<E> {
    entropy: E,
    config: SelectorConfig,
}

impl Generator<SystemEntropySource> {
    /// Generator over the OS CSPRNG.
    pub fn secure() -> Self {
        tracing::debug!("Creating secure generator");

        Self::new(SystemEntropySource {})
    }
}

impl Generator<PseudoEntropySource> {
    /// Fast, non-secure generator seeded from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::Entropy`] if the OS cannot provide a seed.
    pub fn pseudo() -> Result<Self, RandomError> {
        tracing::debug!("Creating pseudo generator seeded from OS");

        Ok(Self::new(PseudoEntropySource::from_os()?))
    }

    /// Deterministic, non-secure generator.
    pub fn pseudo_from_seed(seed: u64) -> Self {
        tracing::debug!("Creating pseudo generator from fixed seed");

        Self::new(PseudoEntropySource::from_seed(seed))
    }
}

impl<E: EntropySource> Generator<E> {
    /// Wraps `entropy` with the default [`SelectorConfig`].
    pub fn new(entropy: E) -> Self {
        Self::with_config(entropy, SelectorConfig::default())
    }

    /// Wraps `entropy` with an explicit configuration.
    pub fn with_config(entropy: E, config: SelectorConfig) -> Self {
        Self { entropy, config }
    }

    /// The entropy source.
    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    /// The selector configuration.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Consumes the generator, returning its entropy source.
    pub fn into_inner(self) -> E {
        self.entropy
    }

    fn selector(&self) -> Selector<'_, E> {
        Selector::with_config(&self.entropy, self.config)
    }

    /// Returns `length` bytes straight from the entropy source.
    pub fn random_bytes(&self, length: usize) -> Result<Vec<u8>, RandomError> {
        let mut bytes = vec![0u8; length];
        self.entropy.fill_bytes(&mut bytes)?;

        Ok(bytes)
    }

    /// Fills `dest` straight from the entropy source.
    pub fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        self.entropy.fill_bytes(dest)?;

        Ok(())
    }

    /// Returns `ceil(bit_length / 64)` random words holding at least
    /// `bit_length` random bits.
    ///
    /// The last word may be partial; its random bytes sit in the high-order end
    /// for [`ByteOrder::BigEndian`] and the low-order end for
    /// [`ByteOrder::LittleEndian`].
    pub fn random_bits(&self, bit_length: usize, order: ByteOrder) -> Result<Vec<u64>, RandomError> {
        allocate::<u64, E>(&self.entropy, bit_length, 1, order).map(BitBlocks::into_words)
    }

    /// Random `u64` words packed with `block_width`-bit blocks.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidBlockWidth`] unless `1 <= block_width <= 64`.
    pub fn random_bit_blocks(
        &self,
        bit_length: usize,
        block_width: u32,
        order: ByteOrder,
    ) -> Result<BitBlocks<u64>, RandomError> {
        allocate::<u64, E>(&self.entropy, bit_length, block_width, order)
    }

    /// Returns a `length`-character string over [`BASE64_URL`].
    pub fn random_string(&self, length: usize) -> Result<String, RandomError> {
        self.random_string_from_alphabet(length, BASE64_URL)
    }

    /// Returns a `length`-character string drawn uniformly from `alphabet`.
    ///
    /// # Errors
    ///
    /// - [`RandomError::EmptyAlphabet`] for an empty alphabet.
    /// - [`RandomError::AlphabetTooLarge`] for byte alphabets over 256 symbols.
    /// - [`RandomError::NonAsciiAlphabet`] for byte alphabets with non-ASCII bytes.
    /// - [`RandomError::Entropy`] if the entropy source fails.
    pub fn random_string_from_alphabet(
        &self,
        length: usize,
        alphabet: Alphabet<'_>,
    ) -> Result<String, RandomError> {
        match alphabet {
            Alphabet::Bytes(bytes) => {
                if !bytes.is_ascii() {
                    return Err(RandomError::NonAsciiAlphabet);
                }

                let symbols = self.selector().select_bytes(length, bytes)?;
                String::from_utf8(symbols).map_err(|_| RandomError::NonAsciiAlphabet)
            }
            Alphabet::Chars(chars) => self.selector().select_chars(length, chars),
        }
    }

    /// Returns `length` bytes drawn uniformly from a byte alphabet
    /// (any byte values, at most 256 symbols).
    pub fn random_from_bytes(&self, length: usize, alphabet: &[u8]) -> Result<Vec<u8>, RandomError> {
        self.selector().select_bytes(length, alphabet)
    }

    /// Returns a `length`-codepoint string drawn uniformly from `alphabet`.
    pub fn random_from_chars(&self, length: usize, alphabet: &[char]) -> Result<String, RandomError> {
        self.selector().select_chars(length, alphabet)
    }

    /// Returns a uniform integer in `[min_inclusive, max_exclusive)`.
    ///
    /// # Errors
    ///
    /// [`RandomError::EmptyRange`] if `max_exclusive <= min_inclusive`.
    pub fn random_integer(&self, min_inclusive: i64, max_exclusive: i64) -> Result<i64, RandomError> {
        random_integer(&self.entropy, min_inclusive, max_exclusive)
    }
}
