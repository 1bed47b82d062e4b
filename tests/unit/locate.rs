//! Locator edge cases against a counting oracle.

use super::common::standard_filter;
use combosplit::{prefix_edge, prefix_edge_after, suffix_onset, suffix_onset_before};
use test_log::test;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn prefix_edge_counts_queries_against_the_simulator() {
    let mut sim = standard_filter();
    let g = chars("前文新疆中段集中營後文");
    let edge = prefix_edge(&mut |m: &str| sim.submit(m), &[], &g);
    // Minimal blocking prefix ends right after 集中營.
    assert_eq!(edge, 9);
    assert!(sim.queries() <= 4, "⌈log₂ 11⌉ = 4, got {}", sim.queries());
}

#[test]
fn suffix_onset_respects_committed_context() {
    let mut sim = standard_filter();
    let ctx = vec!["集中營".to_string()];
    let g = chars("前文新疆後文");
    let onset = suffix_onset(&mut |m: &str| sim.submit(m), &ctx, &g);
    // "新疆後文" still blocks with the context, "疆後文" does not.
    assert_eq!(onset, 2);
}

#[test]
fn affix_variants_carry_the_certain_part() {
    let mut sim = standard_filter();
    let edge = prefix_edge_after(&mut |m: &str| sim.submit(m), &[], &chars("轮功xx"), "法");
    assert_eq!(edge, 2);

    let mut sim = standard_filter();
    let onset = suffix_onset_before(&mut |m: &str| sim.submit(m), &[], &chars("xx法轮"), "功");
    assert_eq!(onset, 2);
}

#[test]
fn single_char_window_needs_no_probe() {
    let mut queries = 0usize;
    let mut oracle = |_m: &str| {
        queries += 1;
        true
    };
    assert_eq!(prefix_edge(&mut oracle, &[], &chars("營")), 1);
    assert_eq!(suffix_onset(&mut oracle, &[], &chars("營")), 0);
    assert_eq!(queries, 0);
}
