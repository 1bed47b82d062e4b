// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Caller contract violations.
//!
//! There are no recoverable mid-run errors in this crate: either the input is
//! rejected before the first probe, or the run completes. Anything the filter
//! itself does wrong (non-determinism, lying verdicts) is garbage-in
//! garbage-out and deliberately not detected here.

use std::fmt;

/// Input rejected at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// The article text contains the reserved separator code point (U+0000).
    ///
    /// The separator is the wire contract between probe assembly and the
    /// filter; an article carrying it could smuggle component boundaries
    /// into probes, so it is refused outright.
    SeparatorInArticle {
        /// Char offset of the first occurrence.
        offset: usize,
    },
    /// A pre-committed context component contains the reserved separator.
    SeparatorInContext {
        /// Index of the offending component in the context collection.
        index: usize,
    },
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractError::SeparatorInArticle { offset } => {
                write!(
                    f,
                    "article contains the reserved separator U+0000 at char offset {}",
                    offset
                )
            }
            ContractError::SeparatorInContext { index } => {
                write!(
                    f,
                    "context component {} contains the reserved separator U+0000",
                    index
                )
            }
        }
    }
}

impl std::error::Error for ContractError {}
