// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode contracts.
//!
//! Zero-cost in release builds (`debug_assert!`), loud in development. Each
//! check mirrors an invariant from the splitter's loop documentation; the
//! session calls them at every commit so a broken index computation fails at
//! the commit that produced it, not three articles later in a driver.

use crate::oracle::SEPARATOR;
use std::ops::Range;

/// A committed component is a non-empty, separator-free substring of the
/// article at exactly the span the splitter claims.
#[inline]
pub fn check_component(article: &[char], text: &str, span: &Range<usize>) {
    debug_assert!(!text.is_empty(), "committed an empty component");
    debug_assert!(
        span.start < span.end && span.end <= article.len(),
        "component span {:?} out of bounds for article of {} chars",
        span,
        article.len()
    );
    debug_assert!(
        article[span.clone()].iter().collect::<String>() == text,
        "component text does not match its span {:?}",
        span
    );
    debug_assert!(
        !text.contains(SEPARATOR),
        "component contains the reserved separator"
    );
}

/// Probe components must never carry the separator; assembly would fuse two
/// components into one and the filter would see a message we never built.
#[inline]
pub fn check_probe_parts(parts: &[String]) {
    debug_assert!(
        parts.iter().all(|p| !p.contains(SEPARATOR)),
        "probe part contains the reserved separator"
    );
}

/// A search bracket stays inside the window it was opened on.
#[inline]
pub fn check_window_bracket(lo: usize, hi: usize, n: usize) {
    debug_assert!(
        lo <= hi && hi <= n,
        "bracket {}..{} escapes window of {} chars",
        lo,
        hi,
        n
    );
}
