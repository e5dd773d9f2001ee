// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;

use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

fn draw<E: EntropySource>(source: E) -> bool {
    let mut buf = [0u8; 8];
    source.fill_bytes(&mut buf).is_ok()
}

#[test]
fn test_reference_delegates_to_source() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);

    assert!(draw(&mock));
    assert!(draw(&mock));
    assert_eq!(mock.call_count(), 2);
}

#[test]
fn test_boxed_and_shared_sources_delegate() {
    let boxed: Box<dyn EntropySource> =
        Box::new(MockEntropySource::new(MockEntropySourceBehaviour::None));
    assert!(draw(boxed));

    let shared = Arc::new(MockEntropySource::new(MockEntropySourceBehaviour::FailAlways));
    assert!(!draw(Arc::clone(&shared)));
    assert_eq!(shared.call_count(), 1);
}
