//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical in-process filter simulator so tests and
//! benches don't each grow their own.

#![doc(hidden)]

use std::collections::BTreeSet;

/// Locally simulate a chat filter enforcing keyword combinations.
///
/// A message is blocked iff, for at least one configured combination, every
/// component occurs in the message as a substring. Queries are counted so
/// tests can assert the splitter's query economy.
///
/// ```ignore
/// let mut sim = FilterSim::new([vec!["新疆", "集中營"]]);
/// let combo = isolate(article, |msg: &str| sim.submit(msg))?;
/// assert!(sim.verify(article, &combo.to_set()));
/// ```
#[derive(Debug, Clone)]
pub struct FilterSim {
    combos: Vec<BTreeSet<String>>,
    queries: usize,
}

impl FilterSim {
    pub fn new<I, C, S>(combos: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let combos: Vec<BTreeSet<String>> = combos
            .into_iter()
            .map(|combo| combo.into_iter().map(Into::into).collect())
            .collect();
        Self { combos, queries: 0 }
    }

    /// Submit one message and count the query.
    pub fn submit(&mut self, message: &str) -> bool {
        self.queries += 1;
        self.blocks(message)
    }

    /// The verdict without counting (for assertions, not for probing).
    pub fn blocks(&self, message: &str) -> bool {
        self.combos
            .iter()
            .any(|combo| combo.iter().all(|k| message.contains(k.as_str())))
    }

    /// Queries answered so far.
    pub fn queries(&self) -> usize {
        self.queries
    }

    pub fn reset_queries(&mut self) {
        self.queries = 0;
    }

    /// Ground-truth combinations fully present in `article`.
    pub fn combos_in(&self, article: &str) -> Vec<BTreeSet<String>> {
        self.combos
            .iter()
            .filter(|combo| combo.iter().all(|k| article.contains(k.as_str())))
            .cloned()
            .collect()
    }

    /// Set-based ground-truth check: is `found` exactly one of the
    /// combinations present in `article`?
    pub fn verify(&self, article: &str, found: &BTreeSet<String>) -> bool {
        self.combos_in(article).iter().any(|combo| combo == found)
    }
}
