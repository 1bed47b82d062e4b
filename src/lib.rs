//! Component-aware binary splitting for keyword-combination discovery.
//!
//! Some filters block a message only when *several* keywords occur in it at
//! once, and the keyword list is secret. Given an article that gets blocked
//! and nothing but a blocked/not-blocked bit per probe, this crate recovers
//! the exact substrings that jointly trigger the filter — spending
//! logarithmic-style queries rather than probing every substring.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ article.rs │────▶│  locate.rs  │────▶│  session.rs  │
//! │ (char-     │     │ (edge       │     │ (resumable   │
//! │  indexed)  │     │  bisection) │     │  splitter)   │
//! └────────────┘     └─────────────┘     └──────┬───────┘
//!        │                                      │
//!        ▼                                      ▼
//! ┌────────────┐     ┌──────────────┐    ┌──────────────┐
//! │ oracle.rs  │◀────│ masking.rs   │    │ splitter.rs  │
//! │ (assembly, │     │ refine.rs    │    │ (sync        │
//! │  probing)  │◀────│ (supplements)│    │  drivers)    │
//! └────────────┘     └──────────────┘    └──────────────┘
//! ```
//!
//! The [`Isolator`] session yields probe component collections and is fed
//! verdicts, so the same state machine drives a local closure, a network
//! filter, or an async task. [`isolate`] is the synchronous ten-line loop on
//! top of it.
//!
//! # Probe protocol
//!
//! A probe is a collection of candidate components joined with [`SEPARATOR`]
//! (U+0000). The filter must treat the separator as a hard boundary —
//! keywords never match across it — and real text must never contain it;
//! [`Article`] construction enforces the latter.
//!
//! # Usage
//!
//! ```ignore
//! use combosplit::{isolate, testing::FilterSim};
//!
//! let mut sim = FilterSim::new([vec!["新疆", "集中營"]]);
//! let combo = isolate(article, |msg: &str| sim.submit(msg))?;
//!
//! assert!(sim.verify(article, &combo.to_set()));
//! println!("{} probes", sim.queries());
//! ```

// Module declarations
mod article;
mod combination;
pub mod contracts;
mod error;
mod locate;
mod masking;
mod oracle;
mod refine;
mod session;
mod splitter;
pub mod testing;

// Re-exports for public API
pub use article::Article;
pub use combination::{Combination, Component};
pub use error::ContractError;
pub use locate::{prefix_edge, prefix_edge_after, suffix_onset, suffix_onset_before};
pub use masking::isolate_by_masking;
pub use oracle::{assemble, probe, Oracle, SEPARATOR};
pub use refine::refine_segments;
pub use session::{Isolator, Step};
pub use splitter::{
    isolate, isolate_with, isolate_with_context, Direction, IsolateConfig, ScanMode,
};
