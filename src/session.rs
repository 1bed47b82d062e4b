// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The resumable splitter: a probe producer you feed verdicts.
//!
//! [`Isolator`] is the component-aware binary splitting loop with the oracle
//! call factored out. It never talks to a filter itself; it hands you the
//! next probe's component collection ([`Isolator::step`]) and you hand back
//! one bit ([`Isolator::feed`]). That keeps the algorithm identical whether
//! the oracle is an in-process closure, a network round-trip, or an async
//! task — the synchronous [`isolate`](crate::isolate) driver is a ten-line
//! loop over this type, and an async dispatcher is the same loop with an
//! `.await` in the middle.
//!
//! # Lifecycle
//!
//! A session starts with the full article in scope and an empty accumulator,
//! peels one component per outer iteration, and finishes when either the
//! remaining window is empty or the accumulated combination already blocks
//! on its own. Within an iteration:
//!
//! 1. **locate** — binary-search the near edge of the closest component in
//!    the current window (`⌈log₂ n⌉` probes);
//! 2. **extend** — push the far end outward, single-step
//!    ([`ScanMode::Linear`]) or by doubling strides
//!    ([`ScanMode::Doubling`]);
//! 3. **narrow** — doubling only: binary-search the far end inside the
//!    bracket the expansion pinned down;
//! 4. **commit** — record the component, shrink the window past its near
//!    edge, and carry the far cursor (offset-corrected) into the next
//!    iteration so already-cleared positions are never re-probed;
//! 5. **saturation check** — one probe of the accumulator alone decides
//!    whether to keep peeling.
//!
//! Extension probes pair the candidate slice with a *cover* slice (the rest
//! of the window beyond the near edge). The cover lets the filter see every
//! component the candidate is not responsible for, so the verdict flips to
//! blocked exactly when the candidate has grown into a complete component.
//!
//! # Termination
//!
//! Structural: every committed component shrinks the window by at least one
//! char, every inner search is bounded, so the session terminates after at
//! most `n` outer iterations *whatever* verdicts are fed. An oracle that
//! breaks the monotonicity assumption gets a garbage combination back, never
//! a hang.

use crate::article::Article;
use crate::combination::Combination;
use crate::contracts;
use crate::error::ContractError;
use crate::locate::Bracket;
use crate::oracle::SEPARATOR;
use crate::splitter::{Direction, IsolateConfig, ScanMode};
use std::ops::Range;

/// What the isolator wants next.
#[derive(Debug)]
pub enum Step<'a> {
    /// Submit this component collection to the filter (joined with
    /// [`SEPARATOR`]) and [`feed`](Isolator::feed) the verdict back.
    Probe(&'a [String]),
    /// Finished; the isolated combination.
    Done(&'a Combination),
}

/// Where the state machine is between probes.
#[derive(Debug)]
enum Phase {
    /// Probing the pre-committed context alone (resumed sessions only).
    ContextCheck,
    /// Probing the whole article: a non-blocking article short-circuits to
    /// an empty result instead of violating the locators' invariants.
    PreCheck,
    /// Near-edge binary search.
    Locate { bracket: Bracket, mid: usize },
    /// Far-end scan, linear or doubling.
    Extend {
        near: usize,
        start: usize,
        cursor: usize,
        last_miss: usize,
    },
    /// Far-end binary search inside the bracket the doubling scan produced.
    Narrow {
        near: usize,
        bracket: Bracket,
        mid: usize,
    },
    /// Probing the accumulator alone after a commit.
    Saturate,
    Done,
}

/// Resumable component-aware binary splitting over one article.
pub struct Isolator {
    article: Article,
    /// Absolute char window still in scope; shrinks monotonically.
    window: Range<usize>,
    config: IsolateConfig,
    /// Components committed before this session started (kept out of the
    /// result, but included in every probe).
    context: Vec<String>,
    acc: Combination,
    /// Far-cursor carry between iterations. Left-to-right: first
    /// window-relative position not yet shown non-blocking. Right-to-left:
    /// last such position.
    carried: usize,
    queries: usize,
    pending: Vec<String>,
    phase: Phase,
}

impl Isolator {
    /// Start a fresh session over `article`.
    pub fn new(article: &str, config: IsolateConfig) -> Result<Self, ContractError> {
        Self::with_context::<&str>(article, config, &[])
    }

    /// Start a session with components already known to be part of the
    /// combination. They join every probe but not the result; if they
    /// saturate the filter by themselves, the session finishes immediately
    /// with an empty combination (one probe).
    pub fn with_context<S: AsRef<str>>(
        article: &str,
        config: IsolateConfig,
        context: &[S],
    ) -> Result<Self, ContractError> {
        for (index, part) in context.iter().enumerate() {
            if part.as_ref().contains(SEPARATOR) {
                return Err(ContractError::SeparatorInContext { index });
            }
        }
        let article = Article::new(article)?;
        let context: Vec<String> = context
            .iter()
            .map(|p| p.as_ref().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        let n = article.len();
        let carried = match config.direction {
            Direction::LeftToRight => 0,
            Direction::RightToLeft => n,
        };
        let mut session = Self {
            article,
            window: 0..n,
            config,
            context,
            acc: Combination::new(),
            carried,
            queries: 0,
            pending: Vec::new(),
            phase: Phase::Done,
        };
        if n == 0 {
            // Empty article: empty combination, zero probes.
        } else if session.context.is_empty() {
            session.pending = vec![session.article.slice(0..n)];
            session.phase = Phase::PreCheck;
        } else {
            session.pending = session.context.clone();
            session.phase = Phase::ContextCheck;
        }
        Ok(session)
    }

    /// The next probe to dispatch, or the finished combination.
    pub fn step(&self) -> Step<'_> {
        match self.phase {
            Phase::Done => Step::Done(&self.acc),
            _ => Step::Probe(&self.pending),
        }
    }

    /// The probe currently awaiting a verdict, or `None` once done.
    pub fn pending_probe(&self) -> Option<&[String]> {
        match self.phase {
            Phase::Done => None,
            _ => Some(&self.pending),
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    /// Probes answered so far.
    #[inline]
    pub fn queries(&self) -> usize {
        self.queries
    }

    /// The result, once [`is_done`](Self::is_done).
    pub fn combination(&self) -> Option<&Combination> {
        match self.phase {
            Phase::Done => Some(&self.acc),
            _ => None,
        }
    }

    /// Consume the session and return the combination.
    ///
    /// Calling this before the session is done is a programmer error.
    pub fn into_combination(self) -> Combination {
        assert!(
            self.is_done(),
            "into_combination called with a probe still outstanding"
        );
        self.acc
    }

    /// Resume with the verdict for the outstanding probe.
    ///
    /// Feeding a verdict with no probe outstanding is a programmer error.
    pub fn feed(&mut self, blocked: bool) {
        assert!(!self.is_done(), "verdict fed to a finished isolator");
        self.queries += 1;
        let phase = std::mem::replace(&mut self.phase, Phase::Done);
        match phase {
            Phase::ContextCheck => {
                if blocked {
                    self.finish("context already blocking");
                } else {
                    let n = self.len();
                    let remainder = self.article.slice(0..n);
                    let parts = self.ctx_with(vec![remainder]);
                    self.emit(parts);
                    self.phase = Phase::PreCheck;
                }
            }
            Phase::PreCheck => {
                if blocked {
                    self.enter_locate();
                } else {
                    self.finish("article does not block");
                }
            }
            Phase::Locate { mut bracket, mid } => {
                // Left-to-right probes suffixes: a block means the component
                // starts at or after mid. Right-to-left probes prefixes.
                match self.config.direction {
                    Direction::LeftToRight => {
                        if blocked {
                            bracket.lo = mid;
                        } else {
                            bracket.hi = mid;
                        }
                    }
                    Direction::RightToLeft => {
                        if blocked {
                            bracket.hi = mid;
                        } else {
                            bracket.lo = mid;
                        }
                    }
                }
                self.drive_locate(bracket);
            }
            Phase::Extend {
                near,
                start,
                cursor,
                last_miss,
            } => self.drive_extend(blocked, near, start, cursor, last_miss),
            Phase::Narrow {
                near, mut bracket, mid,
            } => {
                match self.config.direction {
                    Direction::LeftToRight => {
                        if blocked {
                            bracket.hi = mid;
                        } else {
                            bracket.lo = mid;
                        }
                    }
                    Direction::RightToLeft => {
                        if blocked {
                            bracket.lo = mid;
                        } else {
                            bracket.hi = mid;
                        }
                    }
                }
                self.drive_narrow(near, bracket);
            }
            Phase::Saturate => {
                if blocked {
                    self.finish("combination saturated");
                } else {
                    self.enter_locate();
                }
            }
            Phase::Done => unreachable!("guarded by the is_done assert"),
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn enter_locate(&mut self) {
        let n = self.len();
        debug_assert!(n > 0, "locate entered on an empty window");
        self.drive_locate(Bracket::new(0, n));
    }

    /// Emit the next locate probe, or resolve the near edge and move on.
    fn drive_locate(&mut self, bracket: Bracket) {
        contracts::check_window_bracket(bracket.lo, bracket.hi, self.len());
        match bracket.mid() {
            Some(mid) => {
                let n = self.len();
                let candidate = match self.config.direction {
                    Direction::LeftToRight => self.wslice(mid, n),
                    Direction::RightToLeft => self.wslice(0, mid),
                };
                let parts = self.ctx_with(vec![candidate]);
                self.emit(parts);
                self.phase = Phase::Locate { bracket, mid };
            }
            None => {
                let near = match self.config.direction {
                    Direction::LeftToRight => bracket.lo,
                    Direction::RightToLeft => bracket.hi,
                };
                self.enter_extend(near);
            }
        }
    }

    fn enter_extend(&mut self, near: usize) {
        let n = self.len();
        match self.config.direction {
            Direction::LeftToRight => {
                debug_assert!(near < n);
                let start = (near + 1).max(self.carried.min(n));
                if start >= n {
                    // Every shorter far end is already cleared: the
                    // component runs to the end of the window.
                    self.commit(near, n);
                } else {
                    let parts = self.extension_probe(near, start);
                    self.emit(parts);
                    self.phase = Phase::Extend {
                        near,
                        start,
                        cursor: start,
                        last_miss: start - 1,
                    };
                }
            }
            Direction::RightToLeft => {
                debug_assert!(near >= 1 && near <= n);
                let start = (near - 1).min(self.carried);
                if start == 0 {
                    self.commit(0, near);
                } else {
                    let parts = self.extension_probe(near, start);
                    self.emit(parts);
                    self.phase = Phase::Extend {
                        near,
                        start,
                        cursor: start,
                        last_miss: start + 1,
                    };
                }
            }
        }
    }

    fn drive_extend(
        &mut self,
        blocked: bool,
        near: usize,
        start: usize,
        cursor: usize,
        last_miss: usize,
    ) {
        let n = self.len();
        match (self.config.scan, self.config.direction) {
            (ScanMode::Linear, Direction::LeftToRight) => {
                if blocked {
                    self.commit(near, cursor);
                } else if cursor + 1 >= n {
                    self.commit(near, n);
                } else {
                    let parts = self.extension_probe(near, cursor + 1);
                    self.emit(parts);
                    self.phase = Phase::Extend {
                        near,
                        start,
                        cursor: cursor + 1,
                        last_miss: cursor,
                    };
                }
            }
            (ScanMode::Linear, Direction::RightToLeft) => {
                if blocked {
                    self.commit(cursor, near);
                } else if cursor == 1 {
                    self.commit(0, near);
                } else {
                    let parts = self.extension_probe(near, cursor - 1);
                    self.emit(parts);
                    self.phase = Phase::Extend {
                        near,
                        start,
                        cursor: cursor - 1,
                        last_miss: cursor,
                    };
                }
            }
            (ScanMode::Doubling, Direction::LeftToRight) => {
                if blocked {
                    if cursor == last_miss + 1 {
                        self.commit(near, cursor);
                    } else {
                        self.drive_narrow(near, Bracket::new(last_miss, cursor));
                    }
                } else {
                    let next = start + (2 * (cursor - start)).max(1);
                    if next >= n {
                        if cursor + 1 >= n {
                            self.commit(near, n);
                        } else {
                            // The window end is blocking by assumption; pin
                            // the far end inside (cursor, n].
                            self.drive_narrow(near, Bracket::new(cursor, n));
                        }
                    } else {
                        let parts = self.extension_probe(near, next);
                        self.emit(parts);
                        self.phase = Phase::Extend {
                            near,
                            start,
                            cursor: next,
                            last_miss: cursor,
                        };
                    }
                }
            }
            (ScanMode::Doubling, Direction::RightToLeft) => {
                if blocked {
                    if last_miss == cursor + 1 {
                        self.commit(cursor, near);
                    } else {
                        self.drive_narrow(near, Bracket::new(cursor, last_miss));
                    }
                } else {
                    let offset = (2 * (start - cursor)).max(1);
                    if start <= offset {
                        if cursor == 1 {
                            self.commit(0, near);
                        } else {
                            // Window start is blocking by assumption; pin
                            // the onset inside [0, cursor).
                            self.drive_narrow(near, Bracket::new(0, cursor));
                        }
                    } else {
                        let next = start - offset;
                        let parts = self.extension_probe(near, next);
                        self.emit(parts);
                        self.phase = Phase::Extend {
                            near,
                            start,
                            cursor: next,
                            last_miss: cursor,
                        };
                    }
                }
            }
        }
    }

    /// Emit the next narrowing probe, or resolve the far end and commit.
    fn drive_narrow(&mut self, near: usize, bracket: Bracket) {
        contracts::check_window_bracket(bracket.lo, bracket.hi, self.len());
        match bracket.mid() {
            Some(mid) => {
                let parts = self.extension_probe(near, mid);
                self.emit(parts);
                self.phase = Phase::Narrow { near, bracket, mid };
            }
            None => match self.config.direction {
                Direction::LeftToRight => self.commit(near, bracket.hi),
                Direction::RightToLeft => self.commit(bracket.lo, near),
            },
        }
    }

    /// Record the component `window[from..to)`, shrink the window past its
    /// near edge, and run the saturation check (or finish if nothing is
    /// left in scope).
    fn commit(&mut self, from: usize, to: usize) {
        let n = self.len();
        let wl = self.window.start;
        let span = (wl + from)..(wl + to);
        let text = self.article.slice(span.clone());
        contracts::check_component(self.article.chars(), &text, &span);
        log::debug!("committed component {:?} at {:?}", text, span);
        self.acc.push(text, span);
        match self.config.direction {
            Direction::LeftToRight => {
                if to == n {
                    self.window.start = self.window.end;
                } else {
                    self.window.start = wl + from + 1;
                    self.carried = to - from;
                }
            }
            Direction::RightToLeft => {
                if from == 0 {
                    self.window.end = wl;
                } else {
                    self.window.end = wl + to - 1;
                    self.carried = from - 1;
                }
            }
        }
        if self.window.start == self.window.end {
            self.finish("article exhausted");
        } else {
            let parts = self.ctx_parts();
            self.emit(parts);
            self.phase = Phase::Saturate;
        }
    }

    fn finish(&mut self, why: &str) {
        log::debug!(
            "isolation done ({why}): {} component(s), {} queries",
            self.acc.len(),
            self.queries
        );
        self.pending.clear();
        self.phase = Phase::Done;
    }

    // ------------------------------------------------------------------
    // Probe construction
    // ------------------------------------------------------------------

    /// Candidate `window[near..m)` (or `[m..near)` going right-to-left) plus
    /// the cover slice beyond the near edge.
    fn extension_probe(&self, near: usize, m: usize) -> Vec<String> {
        let n = self.len();
        let (candidate, cover) = match self.config.direction {
            Direction::LeftToRight => (self.wslice(near, m), self.wslice(near + 1, n)),
            Direction::RightToLeft => (self.wslice(m, near), self.wslice(0, near - 1)),
        };
        self.ctx_with(vec![candidate, cover])
    }

    /// Context plus accumulator: what every probe carries.
    fn ctx_parts(&self) -> Vec<String> {
        self.context
            .iter()
            .cloned()
            .chain(self.acc.texts().map(str::to_owned))
            .collect()
    }

    fn ctx_with(&self, extra: Vec<String>) -> Vec<String> {
        let mut parts = self.ctx_parts();
        parts.extend(extra);
        parts
    }

    fn emit(&mut self, parts: Vec<String>) {
        contracts::check_probe_parts(&parts);
        self.pending = parts;
    }

    /// Window length in chars.
    #[inline]
    fn len(&self) -> usize {
        self.window.end - self.window.start
    }

    /// Window-relative half-open slice.
    fn wslice(&self, a: usize, b: usize) -> String {
        self.article.slice(self.window.start + a..self.window.start + b)
    }
}
