// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boundary locators: binary searches for component edges.
//!
//! Each locator narrows a half-open interval over a window `g` of the
//! article, one oracle bit per halving, until it pins the index at which one
//! more character flips the verdict. Two families:
//!
//! - **prefix family** — how much of the front of `g` does the filter need?
//!   [`prefix_edge`] returns the minimal `e` with `ctx ∪ {g[..e]}` blocking.
//! - **suffix family** — how late can a suffix of `g` start and still block?
//!   [`suffix_onset`] returns the maximal `i` with `ctx ∪ {g[i..]}` blocking.
//!
//! The `_after`/`_before` variants glue a fixed affix onto every probed
//! slice. The splitter uses them to finish off a component whose far end has
//! been bracketed by exponential expansion: the affix carries the part of the
//! component that is already certain, the search runs only over the bracket.
//!
//! All locators cost `⌈log₂ |g|⌉` probes. They lean on one monotonicity
//! assumption: along the slice axis, growing a candidate slice can only turn
//! the verdict from pass to blocked, never back. A filter that violates that
//! gets a garbage index, not an error.

use crate::oracle::{probe, Oracle};

/// A half-open search interval `(lo, hi)` over `[0, n]`.
///
/// The caller owns probe construction and decides which endpoint a verdict
/// moves; this type only guards the interval arithmetic. The search is over
/// once `hi - lo == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bracket {
    pub(crate) lo: usize,
    pub(crate) hi: usize,
}

impl Bracket {
    pub(crate) fn new(lo: usize, hi: usize) -> Self {
        debug_assert!(lo <= hi, "inverted bracket {}..{}", lo, hi);
        Self { lo, hi }
    }

    /// Next probe point, or `None` once the interval is a single step wide.
    #[inline]
    pub(crate) fn mid(&self) -> Option<usize> {
        (self.hi.saturating_sub(self.lo) > 1).then(|| (self.lo + self.hi) / 2)
    }
}

/// Minimal `e` such that `ctx ∪ {g[..e]}` blocks.
///
/// Caller guarantees `ctx ∪ {g}` blocks and `ctx` alone does not; the search
/// keeps the invariant "`g[..lo]` never blocks, `g[..hi]` always does" and
/// returns `hi`.
pub fn prefix_edge<O: Oracle + ?Sized>(oracle: &mut O, ctx: &[String], g: &[char]) -> usize {
    prefix_edge_after(oracle, ctx, g, "")
}

/// [`prefix_edge`] with the fixed affix `lead` prepended to every probed
/// slice. Returns the edge index within `g`; the caller adds its own offset.
pub fn prefix_edge_after<O: Oracle + ?Sized>(
    oracle: &mut O,
    ctx: &[String],
    g: &[char],
    lead: &str,
) -> usize {
    let mut bracket = Bracket::new(0, g.len());
    while let Some(mid) = bracket.mid() {
        if probe(oracle, &affixed_parts(ctx, lead, &g[..mid], "")) {
            bracket.hi = mid;
        } else {
            bracket.lo = mid;
        }
    }
    bracket.hi
}

/// Maximal `i` such that `ctx ∪ {g[i..]}` blocks.
///
/// Mirror of [`prefix_edge`]: the invariant is "`g[lo..]` always blocks,
/// `g[hi..]` never does", and the result is `lo`.
pub fn suffix_onset<O: Oracle + ?Sized>(oracle: &mut O, ctx: &[String], g: &[char]) -> usize {
    suffix_onset_before(oracle, ctx, g, "")
}

/// [`suffix_onset`] with the fixed affix `tail` appended to every probed
/// slice.
pub fn suffix_onset_before<O: Oracle + ?Sized>(
    oracle: &mut O,
    ctx: &[String],
    g: &[char],
    tail: &str,
) -> usize {
    let mut bracket = Bracket::new(0, g.len());
    while let Some(mid) = bracket.mid() {
        if probe(oracle, &affixed_parts(ctx, "", &g[mid..], tail)) {
            bracket.lo = mid;
        } else {
            bracket.hi = mid;
        }
    }
    bracket.lo
}

/// Context plus one candidate slice, with optional affixes on either side.
fn affixed_parts(ctx: &[String], lead: &str, slice: &[char], tail: &str) -> Vec<String> {
    let mut candidate = String::with_capacity(lead.len() + slice.len() * 3 + tail.len());
    candidate.push_str(lead);
    candidate.extend(slice.iter());
    candidate.push_str(tail);
    let mut parts = ctx.to_vec();
    parts.push(candidate);
    parts
}
