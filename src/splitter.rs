// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synchronous entry points.
//!
//! These are thin drivers: an [`Isolator`] produces probes, the oracle
//! answers them, the loop feeds the verdicts back. Callers with an
//! asynchronous filter should drive the [`Isolator`] themselves — the
//! session holds nothing between probes, so it can sit in an async task and
//! wait as long as it likes.

use crate::combination::Combination;
use crate::error::ContractError;
use crate::oracle::{probe, Oracle};
use crate::session::Isolator;

/// Which end of the article the splitter peels components from.
///
/// Behaviourally equivalent on unordered filters; they differ in which
/// combination gets isolated when several are present, and in query counts
/// on specific articles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Peel the component whose near edge is leftmost.
    #[default]
    LeftToRight,
    /// Peel the component whose near edge is rightmost.
    RightToLeft,
}

/// How the far end of a component is located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Advance one char per probe. Cheapest for short components.
    Linear,
    /// Double the stride until the verdict flips, then binary-search the
    /// final bracket. `O(log |component|)` instead of `O(|component|)`.
    #[default]
    Doubling,
}

/// Splitter configuration: scan direction and far-end scan mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsolateConfig {
    pub direction: Direction,
    pub scan: ScanMode,
}

impl IsolateConfig {
    pub fn new(direction: Direction, scan: ScanMode) -> Self {
        Self { direction, scan }
    }
}

/// Isolate one keyword combination from `article` with the default
/// configuration (left-to-right, doubling scan).
///
/// Returns the empty combination when the article does not block at all.
///
/// ```ignore
/// let mut sim = FilterSim::new([["新疆", "集中營"]]);
/// let combo = isolate(article, |msg: &str| sim.submit(msg))?;
/// assert_eq!(combo.to_set(), ["新疆", "集中營"].into_iter().map(String::from).collect());
/// ```
pub fn isolate<O: Oracle>(article: &str, oracle: O) -> Result<Combination, ContractError> {
    isolate_with(article, IsolateConfig::default(), oracle)
}

/// [`isolate`] with an explicit configuration.
pub fn isolate_with<O: Oracle>(
    article: &str,
    config: IsolateConfig,
    oracle: O,
) -> Result<Combination, ContractError> {
    let session = Isolator::new(article, config)?;
    Ok(drive(session, oracle))
}

/// [`isolate_with`], with components already known to belong to the
/// combination. The context joins every probe but stays out of the result;
/// if it saturates the filter on its own, the result is empty after a
/// single probe.
pub fn isolate_with_context<O: Oracle, S: AsRef<str>>(
    article: &str,
    config: IsolateConfig,
    context: &[S],
    oracle: O,
) -> Result<Combination, ContractError> {
    let session = Isolator::with_context(article, config, context)?;
    Ok(drive(session, oracle))
}

/// Loop a session against a synchronous oracle.
fn drive<O: Oracle>(mut session: Isolator, mut oracle: O) -> Combination {
    while let Some(parts) = session.pending_probe() {
        let verdict = probe(&mut oracle, parts);
        session.feed(verdict);
    }
    session.into_combination()
}
