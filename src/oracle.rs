// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The oracle adapter: message assembly and the probe primitive.
//!
//! The filter is a black box. We hand it one message, it hands back one bit:
//! blocked or not. Everything the splitter learns, it learns one bit at a
//! time, so this module is deliberately tiny — assembly of a component
//! collection into a wire message, and exactly one query per [`probe`] call.
//!
//! # The separator contract
//!
//! Probe messages join components with [`SEPARATOR`] (U+0000). The filter
//! must treat the separator as a hard component boundary: a keyword never
//! matches across it. In exchange, the separator must never occur inside a
//! real component — [`Article`](crate::Article) construction enforces that
//! for article text, and [`assemble`] fails fast if a caller smuggles one in
//! anyway.

/// Reserved component separator for probe messages (U+0000).
///
/// Chosen because the filters this crate targets strip or reject NUL inside
/// real text, so it can never collide with article content.
pub const SEPARATOR: char = '\u{0}';

/// A blocked/not-blocked predicate over messages.
///
/// `true` means *blocked*. The splitter assumes the verdict is deterministic
/// and stateless for the duration of a run; it takes `&mut self` only because
/// real oracles count queries or hold a connection.
///
/// Closures get this for free:
///
/// ```ignore
/// let mut sim = FilterSim::new([["法轮功"]]);
/// let combo = isolate(article, |msg: &str| sim.submit(msg))?;
/// ```
pub trait Oracle {
    /// One query. Returns whether `message` would be blocked.
    fn is_blocked(&mut self, message: &str) -> bool;
}

impl<F> Oracle for F
where
    F: FnMut(&str) -> bool,
{
    #[inline]
    fn is_blocked(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Join probe components into a wire message.
///
/// Empty components carry no information and are skipped. A component
/// containing [`SEPARATOR`] is a programmer error and fails fast.
pub fn assemble<S: AsRef<str>>(parts: &[S]) -> String {
    let mut message = String::new();
    for part in parts {
        let part = part.as_ref();
        assert!(
            !part.contains(SEPARATOR),
            "probe component contains the reserved separator U+0000"
        );
        if part.is_empty() {
            continue;
        }
        if !message.is_empty() {
            message.push(SEPARATOR);
        }
        message.push_str(part);
    }
    message
}

/// Assemble `parts` and submit one probe.
///
/// Exactly one oracle query per call. The core never caches verdicts; if the
/// oracle is expensive, memoise it outside (the probe message is a usable
/// fingerprint).
pub fn probe<O: Oracle + ?Sized, S: AsRef<str>>(oracle: &mut O, parts: &[S]) -> bool {
    let message = assemble(parts);
    let verdict = oracle.is_blocked(&message);
    log::trace!(
        "probe: {} part(s), {} chars -> {}",
        parts.len(),
        message.chars().count(),
        if verdict { "blocked" } else { "pass" },
    );
    verdict
}
