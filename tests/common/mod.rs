//! Shared test utilities and fixtures.

#![allow(dead_code)]

use combosplit::testing::FilterSim;
use combosplit::{Direction, IsolateConfig, ScanMode};
use std::collections::BTreeSet;

/// The ground-truth combination set used across the end-to-end scenarios.
pub fn standard_filter() -> FilterSim {
    FilterSim::new([
        vec!["新疆", "集中營"],
        vec!["法轮功"],
        vec!["帶來", "調整", "整體", "領域"],
    ])
}

pub fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Every direction × scan-mode combination.
pub fn all_configs() -> Vec<IsolateConfig> {
    let mut configs = Vec::new();
    for direction in [Direction::LeftToRight, Direction::RightToLeft] {
        for scan in [ScanMode::Linear, ScanMode::Doubling] {
            configs.push(IsolateConfig::new(direction, scan));
        }
    }
    configs
}
