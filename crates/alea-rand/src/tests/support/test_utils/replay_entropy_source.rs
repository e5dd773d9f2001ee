// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::support::test_utils::ReplayEntropySource;
use crate::traits::EntropySource;

#[test]
fn test_replay_cycles_pattern_across_calls() {
    let source = ReplayEntropySource::new(&[1, 2, 3]);

    let mut first = [0u8; 2];
    let mut second = [0u8; 5];
    source.fill_bytes(&mut first).expect("Failed to fill_bytes(first)");
    source.fill_bytes(&mut second).expect("Failed to fill_bytes(second)");

    assert_eq!(first, [1, 2]);
    assert_eq!(second, [3, 1, 2, 3, 1]);
    assert_eq!(source.call_count(), 2);
    assert_eq!(source.bytes_served(), 7);
}

#[test]
fn test_replay_empty_pattern_yields_zeros() {
    let source = ReplayEntropySource::new(&[]);
    let mut buf = [0xFFu8; 4];

    source.fill_bytes(&mut buf).expect("Failed to fill_bytes");

    assert_eq!(buf, [0; 4]);
}
