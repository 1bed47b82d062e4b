//! Universal invariants of the splitter.
//!
//! Articles are generated over a small Han alphabet and ground-truth
//! combinations are carved out of the article itself, so every generated
//! case is blocking by construction. The invariants checked:
//!
//! 1. every returned component is a substring of the article;
//! 2. the returned collection blocks on its own (sufficiency);
//! 3. dropping any single component stops it blocking (weak necessity);
//! 4. total probes stay inside the documented bound;
//! 5. re-running with the result pre-committed discovers nothing new.

use combosplit::testing::FilterSim;
use combosplit::{assemble, isolate_with, isolate_with_context, IsolateConfig};
use proptest::prelude::*;

use super::common::all_configs;

const ALPHABET: [char; 6] = ['甲', '乙', '丙', '丁', '戊', '己'];

fn article_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(&ALPHABET[..]), 4..60)
        .prop_map(|chars| chars.into_iter().collect())
}

/// An article plus a combination carved out of it: 1..4 component spans of
/// 1..4 chars each, anywhere in the text. Components are substrings by
/// construction, so the article always blocks.
fn case_strategy() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        article_strategy(),
        prop::collection::vec((any::<prop::sample::Index>(), 1..4usize), 1..4),
    )
        .prop_map(|(article, picks)| {
            let chars: Vec<char> = article.chars().collect();
            let mut combo: Vec<String> = picks
                .into_iter()
                .map(|(idx, len)| {
                    let start = idx.index(chars.len());
                    let end = (start + len).min(chars.len());
                    chars[start..end].iter().collect()
                })
                .collect();
            combo.sort();
            combo.dedup();
            (article, combo)
        })
}

/// Generous ceiling for both scan modes: every outer iteration costs at most
/// one locate (log n), one far-end scan (≤ n probes linear, ≤ 2 log n
/// doubling) and two bookkeeping probes, over at most n iterations.
fn query_ceiling(n: usize) -> usize {
    let log = usize::BITS as usize - n.leading_zeros() as usize + 1;
    (n + 2) * (n + 2 * log + 4) + 4
}

proptest! {
    #[test]
    fn substring_sufficiency_necessity((article, combo) in case_strategy()) {
        for config in all_configs() {
            let mut sim = FilterSim::new([combo.clone()]);
            let found = isolate_with(&article, config, |m: &str| sim.submit(m)).unwrap();

            // Substring property.
            for part in found.components() {
                prop_assert!(
                    article.contains(part.text()),
                    "{:?} is not a substring of {:?}",
                    part.text(),
                    article
                );
            }

            // Sufficiency: the found collection blocks on its own.
            let parts: Vec<String> = found.texts().map(String::from).collect();
            prop_assert!(sim.blocks(&assemble(&parts)), "result does not block: {found}");

            // Weak necessity: every component earns its place.
            for skip in 0..parts.len() {
                let rest: Vec<String> = parts
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip)
                    .map(|(_, p)| p.clone())
                    .collect();
                prop_assert!(
                    !sim.blocks(&assemble(&rest)),
                    "dropping {:?} still blocks",
                    parts[skip]
                );
            }
        }
    }

    #[test]
    fn query_counts_stay_bounded((article, combo) in case_strategy()) {
        let n = article.chars().count();
        for config in all_configs() {
            let mut sim = FilterSim::new([combo.clone()]);
            let _ = isolate_with(&article, config, |m: &str| sim.submit(m)).unwrap();
            prop_assert!(
                sim.queries() <= query_ceiling(n),
                "{} queries for {} chars under {:?}",
                sim.queries(),
                n,
                config
            );
        }
    }

    #[test]
    fn rerun_with_result_committed_finds_nothing((article, combo) in case_strategy()) {
        let mut sim = FilterSim::new([combo.clone()]);
        let found = isolate_with(&article, IsolateConfig::default(), |m: &str| sim.submit(m))
            .unwrap();
        prop_assume!(!found.is_empty());

        let context: Vec<String> = found.texts().map(String::from).collect();
        sim.reset_queries();
        let again = isolate_with_context(
            &article,
            IsolateConfig::default(),
            &context,
            |m: &str| sim.submit(m),
        )
        .unwrap();
        prop_assert!(again.is_empty(), "second run found {again}");
        prop_assert_eq!(sim.queries(), 1);
    }

    #[test]
    fn non_blocking_articles_cost_one_probe(article in article_strategy()) {
        // Nothing plantable: the filter wants a char outside the generation
        // alphabet.
        for config in all_configs() {
            let mut sim = FilterSim::new([vec!["法轮功"]]);
            let found = isolate_with(&article, config, |m: &str| sim.submit(m)).unwrap();
            prop_assert!(found.is_empty());
            prop_assert_eq!(sim.queries(), 1);
        }
    }
}
