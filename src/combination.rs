// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Discovered keyword combinations.
//!
//! One internal representation, two projections. Internally a combination is
//! a sequence of components ordered by where they sit in the article; callers
//! who want the unordered view take [`Combination::to_set`], callers who care
//! about positions read [`Combination::components`] in article order. This
//! avoids the usual mess of maintaining set-valued and tuple-valued variants
//! of the same algorithm side by side.
//!
//! # Invariants
//!
//! - Components are non-empty substrings of the original article.
//! - Growth is monotone: once committed, a component is never removed.
//! - Duplicate texts are silently deduplicated — a filter blocking on a
//!   repeated occurrence would otherwise commit the same keyword twice.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

/// One component of a keyword combination: the substring itself plus the
/// char-offset span of the occurrence the splitter identified.
///
/// The *combination* only cares about the text (presence as a substring is
/// what triggers the filter); the span is bookkeeping for callers that want
/// to highlight or excise the occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    text: String,
    span: Range<usize>,
}

impl Component {
    pub(crate) fn new(text: String, span: Range<usize>) -> Self {
        Self { text, span }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Char-offset span `[start, end)` in the original article.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// A keyword combination: the components that jointly trigger the filter.
///
/// Kept ordered by span start, so iteration yields components in the order
/// they appear in the article regardless of the scan direction that found
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    parts: Vec<Component>,
}

impl Combination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a component. Returns `false` when the text was already present
    /// (the duplicate is dropped, first span wins).
    pub(crate) fn push(&mut self, text: String, span: Range<usize>) -> bool {
        if self.parts.iter().any(|p| p.text == text) {
            return false;
        }
        let at = self.parts.partition_point(|p| p.span.start < span.start);
        self.parts.insert(at, Component::new(text, span));
        true
    }

    /// Components in article order.
    #[inline]
    pub fn components(&self) -> &[Component] {
        &self.parts
    }

    /// Component texts in article order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(Component::text)
    }

    /// The unordered projection.
    pub fn to_set(&self) -> BTreeSet<String> {
        self.parts.iter().map(|p| p.text.clone()).collect()
    }

    pub fn into_texts(self) -> Vec<String> {
        self.parts.into_iter().map(|p| p.text).collect()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.parts.iter().any(|p| p.text == text)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", part.text)?;
        }
        write!(f, "}}")
    }
}
