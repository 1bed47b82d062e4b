//! Cross-variant agreement.
//!
//! With a single configured combination, every direction × scan-mode
//! combination must isolate the same component set — they differ in query
//! economy and in which occurrence they attribute a component to, never in
//! the texts. The mask-and-backtrack route must land on the same set too.

use combosplit::testing::FilterSim;
use combosplit::{isolate_by_masking, isolate_with, IsolateConfig};
use proptest::prelude::*;
use std::collections::BTreeSet;

use super::common::all_configs;

const ALPHABET: [char; 5] = ['甲', '乙', '丙', '丁', '戊'];

fn article_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(&ALPHABET[..]), 4..40)
        .prop_map(|chars| chars.into_iter().collect())
}

fn case_strategy() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        article_strategy(),
        prop::collection::vec((any::<prop::sample::Index>(), 1..3usize), 1..3),
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

proptest! {
    #[test]
    fn all_splitter_variants_agree((article, combo) in case_strategy()) {
        let mut results: Vec<BTreeSet<String>> = Vec::new();
        for config in all_configs() {
            let mut sim = FilterSim::new([combo.clone()]);
            let found = isolate_with(&article, config, |m: &str| sim.submit(m)).unwrap();
            results.push(found.to_set());
        }
        for pair in results.windows(2) {
            prop_assert_eq!(&pair[0], &pair[1]);
        }
    }

    #[test]
    fn masking_agrees_with_the_splitter((article, combo) in case_strategy()) {
        let mut sim = FilterSim::new([combo.clone()]);
        let split = isolate_with(&article, IsolateConfig::default(), |m: &str| sim.submit(m))
            .unwrap()
            .to_set();

        let mut sim = FilterSim::new([combo]);
        let masked =
            isolate_by_masking(&article, &mut |m: &str| sim.submit(m)).unwrap();
        prop_assert_eq!(split, masked);
    }
}
