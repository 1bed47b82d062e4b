// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Segment refinement: split coarse blocking segments into exact components.
//!
//! Coarse discovery (masking, or any method that yields "this stretch of
//! text matters") can hand back a segment that actually holds *several*
//! adjacent components — or two components that overlap in the article, like
//! `調整` and `整體` inside `調整體`. The test for that is cheap: shave one
//! char off each end of the segment and probe both halves together with the
//! rest of the set. A lone component can't survive losing its first *and*
//! last char, so a blocked verdict means the segment splits.
//!
//! When it does, the boundary locators pin the first component's right edge
//! and the remainder's onset, and the loop continues on what's left of the
//! segment.

use crate::locate::{prefix_edge, suffix_onset};
use crate::oracle::{probe, Oracle};
use std::collections::BTreeSet;

/// Refine a coarse segment set until every element is an exact component.
///
/// `segments` must jointly block (together with nothing else); the refined
/// set blocks too, with every element minimal. Segments that are already
/// exact components cost one probe each.
pub fn refine_segments<O: Oracle + ?Sized>(
    oracle: &mut O,
    segments: &BTreeSet<String>,
) -> BTreeSet<String> {
    let mut refined = segments.clone();
    for segment in segments {
        refined.remove(segment);
        let mut rest: Vec<char> = segment.chars().collect();
        loop {
            let n = rest.len();
            if n <= 1 {
                break;
            }
            let head: String = rest[..n - 1].iter().collect();
            let tail: String = rest[1..].iter().collect();
            let mut parts: Vec<String> = refined.iter().cloned().collect();
            parts.push(tail.clone());
            parts.push(head);
            if !probe(oracle, &parts) {
                // Both trims together break the combination: what's left of
                // the segment is a single component.
                break;
            }

            // At least two components in here. The right edge of the first
            // one is the minimal blocking prefix, given the tail covers the
            // others.
            let mut ctx: Vec<String> = refined.iter().cloned().collect();
            ctx.push(tail);
            let cut = prefix_edge(oracle, &ctx, &rest[..n - 1]);
            refined.insert(rest[..cut].iter().collect());

            // The remainder starts at the latest onset that still blocks
            // with everything committed so far.
            let ctx: Vec<String> = refined.iter().cloned().collect();
            let onset = suffix_onset(oracle, &ctx, &rest[1..]);
            rest.drain(..1 + onset);
        }
        if !rest.is_empty() {
            refined.insert(rest.iter().collect());
        }
    }
    refined
}
