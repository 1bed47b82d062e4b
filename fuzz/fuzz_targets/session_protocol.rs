// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Session robustness under adversarial verdicts.
//!
//! The oracle contract promises deterministic, monotone verdicts; a real
//! filter can break that promise. The session is allowed to return garbage
//! then, but it must still terminate inside its structural probe bound,
//! never panic, and never hand back anything that isn't an article
//! substring.

#![no_main]

use combosplit::{Isolator, IsolateConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let (head, verdicts) = data.split_at(data.len().min(24));
    let article: String = String::from_utf8_lossy(head)
        .chars()
        .filter(|&c| c != '\u{0}')
        .collect();
    let n = article.chars().count();

    let mut session = match Isolator::new(&article, IsolateConfig::default()) {
        Ok(session) => session,
        Err(_) => return,
    };

    // Structural bound: n outer iterations, each at most n + 2·log n + 4
    // probes. Anything past that is a hang.
    let log = usize::BITS as usize;
    let ceiling = (n + 2) * (n + 2 * log + 4) + 4;

    let mut bits = verdicts
        .iter()
        .flat_map(|&b| (0..8).map(move |i| (b >> i) & 1 == 1));
    let mut fed = 0usize;
    while session.pending_probe().is_some() {
        let verdict = bits.next().unwrap_or(false);
        session.feed(verdict);
        fed += 1;
        assert!(fed <= ceiling, "session exceeded its structural probe bound");
    }

    let combo = session.into_combination();
    for part in combo.components() {
        assert!(article.contains(part.text()));
    }
});
