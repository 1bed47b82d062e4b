//! Refinement of coarse segments into exact components.

use super::common::{set, standard_filter};
use combosplit::refine_segments;
use test_log::test;

#[test]
fn splits_a_segment_holding_two_components() {
    let mut sim = standard_filter();
    let refined = refine_segments(&mut |m: &str| sim.submit(m), &set(&["新疆集中營"]));
    assert_eq!(refined, set(&["新疆", "集中營"]));
}

#[test]
fn splits_across_filler_between_components() {
    // The coarse segment carries junk between the two real components.
    let mut sim = standard_filter();
    let refined = refine_segments(&mut |m: &str| sim.submit(m), &set(&["新疆之中集中營"]));
    assert_eq!(refined, set(&["新疆", "集中營"]));
}

#[test]
fn overlapping_components_both_survive() {
    let mut sim = standard_filter();
    let refined = refine_segments(
        &mut |m: &str| sim.submit(m),
        &set(&["帶來", "調整體", "領域"]),
    );
    assert_eq!(refined, set(&["帶來", "調整", "整體", "領域"]));
}

#[test]
fn exact_components_cost_one_probe_each() {
    let mut sim = standard_filter();
    let segments = set(&["新疆", "集中營"]);
    let refined = refine_segments(&mut |m: &str| sim.submit(m), &segments);
    assert_eq!(refined, segments);
    assert_eq!(sim.queries(), 2);
}
