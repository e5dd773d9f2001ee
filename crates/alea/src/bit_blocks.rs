// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bit-block allocation.
//!
//! Turns "I need `bits` random bits, consumed `block_width` bits at a time"
//! into exactly one entropy draw, packed into fixed-width words.
//!
//! # Layout
//!
//! A word of `W::BITS` bits holds `W::BITS / block_width` whole blocks; any
//! leftover high bits of a full word are never handed out. The bits that do
//! not fill a whole word are rounded up to a multiple of `block_width`, then
//! up to whole bytes, and stored in one final partial word.
//!
//! Every word, partial or not, is packed with the requested [`ByteOrder`]
//! over zero-padded bytes: a big-endian partial word holds its drawn bytes in
//! the high-order end, a little-endian one in the low-order end. [`Blocks`]
//! realigns a big-endian partial word before extracting, so blocks always come
//! from the drawn bits, low bits first.

use alea_rand::EntropySource;

use crate::error::RandomError;
use crate::word::{ByteOrder, Word};

/// Sizes derived from a bit requirement and a block width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlockLayout {
    pub(crate) blocks_per_word: usize,
    pub(crate) full_words: usize,
    pub(crate) remainder_blocks: usize,
    pub(crate) remainder_bytes: usize,
}

impl BlockLayout {
    /// `block_width` must already be validated to `1..=W::BITS`.
    pub(crate) fn new<W: Word>(bits: usize, block_width: u32) -> Self {
        let width = block_width as usize;
        let blocks_per_word = (W::BITS / block_width) as usize;
        let bits_per_word = blocks_per_word * width;

        let full_words = bits / bits_per_word;
        let remainder_blocks = (bits % bits_per_word).div_ceil(width);
        let remainder_bytes = (remainder_blocks * width).div_ceil(8);

        Self {
            blocks_per_word,
            full_words,
            remainder_blocks,
            remainder_bytes,
        }
    }

    pub(crate) fn word_len(&self) -> usize {
        self.full_words + usize::from(self.remainder_bytes > 0)
    }

    pub(crate) fn byte_len<W: Word>(&self) -> usize {
        self.full_words * W::BYTES + self.remainder_bytes
    }

    pub(crate) fn usable_blocks(&self) -> usize {
        self.full_words * self.blocks_per_word + self.remainder_blocks
    }
}

/// Random words plus the number of `block_width`-bit blocks they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitBlocks<W: Word> {
    words: Vec<W>,
    usable_blocks: usize,
    block_width: u32,
    // Zero-padding bits below the data of a big-endian partial last word.
    tail_padding: u32,
}

impl<W: Word> BitBlocks<W> {
    /// Packed random words.
    pub fn words(&self) -> &[W] {
        &self.words
    }

    /// Consumes `self`, returning the packed words.
    pub fn into_words(self) -> Vec<W> {
        self.words
    }

    /// Number of complete blocks available. Never consume more than this.
    pub fn usable_blocks(&self) -> usize {
        self.usable_blocks
    }

    /// Width of one block in bits.
    pub fn block_width(&self) -> u32 {
        self.block_width
    }

    /// `true` when no block is available.
    pub fn is_empty(&self) -> bool {
        self.usable_blocks == 0
    }

    /// Consumes `self`, yielding its [`BitBlocks::usable_blocks`] blocks.
    pub fn blocks(self) -> Blocks<W> {
        let mut words = self.words;

        if self.tail_padding > 0 {
            if let Some(last) = words.last_mut() {
                // Discards the zero padding below the drawn bytes.
                last.take_low_bits(self.tail_padding);
            }
        }

        let blocks_per_word = if self.block_width == 0 {
            0
        } else {
            (W::BITS / self.block_width) as usize
        };

        Blocks {
            words,
            word_index: 0,
            taken_in_word: 0,
            blocks_per_word,
            remaining: self.usable_blocks,
            block_width: self.block_width,
        }
    }
}

impl<W: Word> IntoIterator for BitBlocks<W> {
    type Item = W;
    type IntoIter = Blocks<W>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks()
    }
}

/// Iterator over the blocks of a [`BitBlocks`], word by word, low bits first.
#[derive(Debug)]
pub struct Blocks<W: Word> {
    words: Vec<W>,
    word_index: usize,
    taken_in_word: usize,
    blocks_per_word: usize,
    remaining: usize,
    block_width: u32,
}

impl<W: Word> Iterator for Blocks<W> {
    type Item = W;

    #[inline]
    fn next(&mut self) -> Option<W> {
        if self.remaining == 0 {
            return None;
        }

        if self.taken_in_word == self.blocks_per_word {
            self.word_index += 1;
            self.taken_in_word = 0;
        }

        let word = self.words.get_mut(self.word_index)?;
        let block = word.take_low_bits(self.block_width);

        self.taken_in_word += 1;
        self.remaining -= 1;

        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<W: Word> ExactSizeIterator for Blocks<W> {}

/// Draws enough random bits for `bits` bits in `block_width`-bit blocks.
///
/// Exactly one call is made to `entropy`, for exactly the computed byte
/// count. Requesting zero bits draws nothing and returns no words.
///
/// # Errors
///
/// - [`RandomError::InvalidBlockWidth`] if `block_width` is `0` or exceeds
///   `W::BITS` (checked before drawing).
/// - [`RandomError::Entropy`] if the entropy source fails.
///
/// # Example
///
/// ```rust
/// use alea::{allocate, ByteOrder, SystemEntropySource};
///
/// let blocks = allocate::<u64, _>(&SystemEntropySource {}, 100, 6, ByteOrder::LittleEndian)
///     .expect("Failed to allocate bit blocks");
///
/// // 10 blocks of 6 bits per u64: one full word plus 7 blocks in a second one.
/// assert_eq!(blocks.words().len(), 2);
/// assert_eq!(blocks.usable_blocks(), 17);
/// ```
pub fn allocate<W: Word, E: EntropySource + ?Sized>(
    entropy: &E,
    bits: usize,
    block_width: u32,
    order: ByteOrder,
) -> Result<BitBlocks<W>, RandomError> {
    if block_width == 0 || block_width > W::BITS {
        return Err(RandomError::InvalidBlockWidth {
            width: block_width,
            max: W::BITS,
        });
    }

    if bits == 0 {
        return Ok(BitBlocks {
            words: Vec::new(),
            usable_blocks: 0,
            block_width,
            tail_padding: 0,
        });
    }

    let layout = BlockLayout::new::<W>(bits, block_width);
    let byte_len = layout.byte_len::<W>();
    let mut bytes = vec![0u8; layout.word_len() * W::BYTES];

    tracing::trace!(
        bits,
        block_width,
        word_bits = W::BITS,
        byte_len,
        usable_blocks = layout.usable_blocks(),
        "Drawing bit blocks"
    );

    entropy.fill_bytes(&mut bytes[..byte_len])?;

    let words = bytes
        .chunks_exact(W::BYTES)
        .map(|chunk| W::from_bytes(order, chunk))
        .collect();

    let tail_padding = match order {
        ByteOrder::BigEndian if layout.remainder_bytes > 0 => {
            ((W::BYTES - layout.remainder_bytes) * 8) as u32
        }
        _ => 0,
    };

    Ok(BitBlocks {
        words,
        usable_blocks: layout.usable_blocks(),
        block_width,
        tail_padding,
    })
}
