// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitter invariants under arbitrary articles and planted combinations.
//!
//! The fuzzer picks the article text and where the combination's components
//! sit inside it. Whatever it picks, the result must be a set of article
//! substrings that blocks on its own and loses blocking when any single
//! component is dropped.

#![no_main]

use arbitrary::Arbitrary;
use combosplit::testing::FilterSim;
use combosplit::{assemble, isolate_with, Direction, IsolateConfig, ScanMode};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Case {
    article: String,
    spans: Vec<(u8, u8)>,
    direction: bool,
    doubling: bool,
}

fuzz_target!(|case: Case| {
    // The separator is a caller contract, not fuzzable input.
    let article: String = case.article.chars().filter(|&c| c != '\u{0}').collect();
    let chars: Vec<char> = article.chars().collect();
    if chars.is_empty() {
        return;
    }

    // Carve 1..=4 components out of the article so it blocks by construction.
    let combo: Vec<String> = case
        .spans
        .iter()
        .take(4)
        .map(|&(start, len)| {
            let start = start as usize % chars.len();
            let end = (start + 1 + len as usize % 4).min(chars.len());
            chars[start..end].iter().collect::<String>()
        })
        .collect();
    if combo.is_empty() {
        return;
    }

    let config = IsolateConfig::new(
        if case.direction {
            Direction::LeftToRight
        } else {
            Direction::RightToLeft
        },
        if case.doubling {
            ScanMode::Doubling
        } else {
            ScanMode::Linear
        },
    );

    let mut sim = FilterSim::new([combo]);
    let found = isolate_with(&article, config, |m: &str| sim.submit(m)).unwrap();

    // INVARIANT 1: every component is a substring of the article.
    for part in found.components() {
        assert!(
            article.contains(part.text()),
            "component is not an article substring"
        );
    }

    // INVARIANT 2: the found collection blocks on its own.
    let parts: Vec<String> = found.texts().map(String::from).collect();
    assert!(sim.blocks(&assemble(&parts)), "result does not block");

    // INVARIANT 3: weak necessity — no component is dead weight.
    for skip in 0..parts.len() {
        let rest: Vec<String> = parts
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, p)| p.clone())
            .collect();
        assert!(
            !sim.blocks(&assemble(&rest)),
            "result is not minimal"
        );
    }
});
