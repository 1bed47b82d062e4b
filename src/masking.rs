// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mask-and-backtrack isolation.
//!
//! A different route to the same answer as the splitter: instead of growing
//! candidate components, carve away everything the filter doesn't need.
//! Divide and conquer over the article — overwrite a span with the separator
//! char and keep the mask whenever the masked message still blocks; if it
//! doesn't, split the span and retry both halves. The chars that survive
//! form coarse segments (maximal unmasked runs), which
//! [`refine_segments`](crate::refine_segments) sharpens into exact
//! components.
//!
//! Probes here are whole masked messages rather than component collections:
//! the separator doubles as the mask char, so a masked span can never
//! complete a keyword across itself.
//!
//! Query cost is `O(k · log |s|)` masking probes for `k` surviving runs, but
//! unlike the splitter it pays for its divide-and-conquer frontier even on
//! sparse articles. It is kept for cross-checking the splitter and for
//! filters where message-level probes are cheaper than assembly.

use crate::article::Article;
use crate::error::ContractError;
use crate::oracle::{Oracle, SEPARATOR};
use crate::refine::refine_segments;
use std::collections::BTreeSet;

/// Isolate one keyword combination by masking spans of the article.
///
/// Returns the empty set when the article does not block. The result is
/// set-valued; positions are consumed by the masking and not reported.
pub fn isolate_by_masking<O: Oracle + ?Sized>(
    article: &str,
    oracle: &mut O,
) -> Result<BTreeSet<String>, ContractError> {
    let article = Article::new(article)?;
    if article.is_empty() {
        return Ok(BTreeSet::new());
    }
    let total = article.len();
    if !oracle.is_blocked(&article.slice(0..total)) {
        return Ok(BTreeSet::new());
    }

    let mut masked: Vec<char> = article.chars().to_vec();
    let mut stack = vec![(0usize, total)];
    while let Some((lo, hi)) = stack.pop() {
        let mut trial = masked.clone();
        for c in &mut trial[lo..hi] {
            *c = SEPARATOR;
        }
        let span = hi - lo;
        if span < total && oracle.is_blocked(&trial.iter().collect::<String>()) {
            masked = trial;
        } else if span > 1 {
            let mid = (lo + hi) / 2;
            stack.push((mid, hi));
            stack.push((lo, mid));
        }
    }

    let segments: BTreeSet<String> = masked
        .split(|&c| c == SEPARATOR)
        .filter(|run| !run.is_empty())
        .map(|run| run.iter().collect())
        .collect();
    log::debug!("masking left {} coarse segment(s)", segments.len());
    Ok(refine_segments(oracle, &segments))
}
