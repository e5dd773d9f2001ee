// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alea_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour, ReplayEntropySource};

use crate::alphabet::{Alphabet, BASE64_URL, HEX};
use crate::config::SelectorConfig;
use crate::error::RandomError;
use crate::generator::Generator;
use crate::word::ByteOrder;

#[test]
fn test_random_bytes_is_passthrough() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let generator = Generator::new(&mock);

    let bytes = generator.random_bytes(37).expect("Failed to random_bytes(37)");

    assert_eq!(bytes.len(), 37);
    assert_eq!(mock.requested_lengths(), vec![37]);
}

#[test]
fn test_fill_bytes_propagates_failure() {
    let generator = Generator::new(MockEntropySource::new(MockEntropySourceBehaviour::FailAlways));
    let mut buf = [0u8; 8];

    assert!(matches!(
        generator.fill_bytes(&mut buf),
        Err(RandomError::Entropy(_))
    ));
}

#[test]
fn test_random_bits_word_count() {
    let generator = Generator::secure();

    for (bits, words) in [(0, 0), (1, 1), (64, 1), (65, 2), (130, 3), (256, 4)] {
        let result = generator
            .random_bits(bits, ByteOrder::LittleEndian)
            .expect("Failed to random_bits(..)");
        assert_eq!(result.len(), words, "{} bits", bits);
    }
}

#[test]
fn test_random_bits_orders_differ_only_in_packing() {
    let pattern: Vec<u8> = (0..32).map(|i| i * 7 + 3).collect();

    let be = Generator::new(ReplayEntropySource::new(&pattern))
        .random_bits(200, ByteOrder::BigEndian)
        .expect("Failed to random_bits(BE)");
    let le = Generator::new(ReplayEntropySource::new(&pattern))
        .random_bits(200, ByteOrder::LittleEndian)
        .expect("Failed to random_bits(LE)");

    assert_eq!(be.len(), le.len());

    for (b, l) in be.iter().zip(le.iter()) {
        assert_eq!(*b, l.swap_bytes());
        assert_eq!(b.count_ones(), l.count_ones());
    }
}

#[test]
fn test_random_bits_partial_word_keeps_byte_order() {
    let be = Generator::new(ReplayEntropySource::new(&[0xAB]))
        .random_bits(8, ByteOrder::BigEndian)
        .expect("Failed to random_bits(BE)");
    let le = Generator::new(ReplayEntropySource::new(&[0xAB]))
        .random_bits(8, ByteOrder::LittleEndian)
        .expect("Failed to random_bits(LE)");

    assert_eq!(be, vec![0xAB00_0000_0000_0000]);
    assert_eq!(le, vec![0x0000_0000_0000_00AB]);
}

#[test]
fn test_random_bit_blocks_validates_width() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let generator = Generator::new(&mock);

    assert_eq!(
        generator.random_bit_blocks(10, 65, ByteOrder::BigEndian),
        Err(RandomError::InvalidBlockWidth { width: 65, max: 64 })
    );
    assert_eq!(mock.call_count(), 0);

    let blocks = generator
        .random_bit_blocks(100, 7, ByteOrder::BigEndian)
        .expect("Failed to random_bit_blocks(..)");
    assert!(blocks.usable_blocks() * 7 >= 100);
}

#[test]
fn test_random_string_uses_url_safe_alphabet() {
    let generator = Generator::secure();
    let Alphabet::Bytes(allowed) = BASE64_URL else {
        panic!("BASE64_URL is a byte alphabet");
    };

    let value = generator.random_string(200).expect("Failed to random_string(200)");

    assert_eq!(value.len(), 200);
    assert!(value.bytes().all(|b| allowed.contains(&b)));
}

#[test]
fn test_random_string_from_alphabet_hex() {
    let generator = Generator::pseudo_from_seed(1);
    let value = generator
        .random_string_from_alphabet(64, HEX)
        .expect("Failed to random_string_from_alphabet(..)");

    assert_eq!(value.len(), 64);
    assert!(value.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
}

#[test]
fn test_random_string_from_alphabet_chars() {
    let generator = Generator::secure();
    let alphabet = ['🎲', 'ß', 'x'];

    let value = generator
        .random_string_from_alphabet(20, Alphabet::Chars(&alphabet))
        .expect("Failed to random_string_from_alphabet(..)");

    assert_eq!(value.chars().count(), 20);
    assert!(value.chars().all(|c| alphabet.contains(&c)));
}

#[test]
fn test_non_ascii_byte_alphabet_rejected_for_strings() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let generator = Generator::new(&mock);

    assert_eq!(
        generator.random_string_from_alphabet(5, Alphabet::Bytes(&[b'a', 0xFF])),
        Err(RandomError::NonAsciiAlphabet)
    );
    assert_eq!(
        generator.random_string_from_alphabet(5, Alphabet::Bytes(&[])),
        Err(RandomError::EmptyAlphabet)
    );
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_random_from_bytes_accepts_any_byte_values() {
    let generator = Generator::secure();
    let alphabet = [0x00, 0x80, 0xFF];

    let value = generator
        .random_from_bytes(100, &alphabet)
        .expect("Failed to random_from_bytes(..)");

    assert_eq!(value.len(), 100);
    assert!(value.iter().all(|b| alphabet.contains(b)));
}

#[test]
fn test_random_from_chars() {
    let generator = Generator::secure();
    let value = generator
        .random_from_chars(10, &['a', 'b', 'c'])
        .expect("Failed to random_from_chars(..)");

    assert_eq!(value.len(), 10);
}

#[test]
fn test_random_integer() {
    let generator = Generator::secure();

    let value = generator.random_integer(-5, 5).expect("Failed to random_integer(..)");
    assert!((-5..5).contains(&value));

    assert_eq!(
        generator.random_integer(1, 1),
        Err(RandomError::EmptyRange { min: 1, max: 1 })
    );
}

#[test]
fn test_pseudo_from_seed_is_reproducible() {
    let a = Generator::pseudo_from_seed(42);
    let b = Generator::pseudo_from_seed(42);

    assert_eq!(a.random_string(50), b.random_string(50));
    assert_eq!(a.random_integer(0, 1_000_000), b.random_integer(0, 1_000_000));
}

#[test]
fn test_pseudo_from_os() {
    let generator = Generator::pseudo().expect("Failed to create pseudo generator");

    assert_eq!(
        generator.random_string(16).expect("Failed to random_string(16)").len(),
        16
    );
}

#[test]
fn test_config_and_accessors() {
    let config = SelectorConfig::new().with_overflow_baseline(3.0);
    let generator = Generator::with_config(ReplayEntropySource::new(&[1]), config);

    assert_eq!(generator.config(), &config);
    assert_eq!(generator.entropy().call_count(), 0);

    let source = generator.into_inner();
    assert_eq!(source.call_count(), 0);
}
