// Copyright (c) 2025 Huli Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Timing instrumentation for the coordinator.
//!
//! [`TimedCoordinator`] wraps a [`SearchCoordinator`] and reports
//! wall-clock timing to a caller-supplied observer after every call. The
//! wrapper sits entirely outside the core contract: the coordinator neither
//! knows about it nor changes behavior under it.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::engine::coordinator::{SearchCoordinator, SearchOutcome};
use crate::error::HuliResult;

/// Timing record handed to the observer after each search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTiming {
    /// Wall-clock time the call took.
    pub elapsed: Duration,

    /// Number of patterns in the call.
    pub pattern_count: usize,

    /// Length of the searched text in bytes.
    pub text_len: usize,
}

/// A [`SearchCoordinator`] wrapper that times every call.
#[derive(Debug)]
pub struct TimedCoordinator<F: Fn(&SearchTiming)> {
    inner: SearchCoordinator,
    observer: F,
}

impl<F: Fn(&SearchTiming)> TimedCoordinator<F> {
    /// Wraps `inner`, reporting each call's timing to `observer`.
    pub fn new(inner: SearchCoordinator, observer: F) -> Self {
        Self { inner, observer }
    }

    /// Searches through the wrapped coordinator, invoking the observer with
    /// the elapsed time whether or not the call succeeded.
    pub fn search(&self, text: &str, patterns: &[&str]) -> HuliResult<SearchOutcome> {
        let started = Instant::now();
        let outcome = self.inner.search(text, patterns);

        let timing = SearchTiming {
            elapsed: started.elapsed(),
            pattern_count: patterns.len(),
            text_len: text.len(),
        };
        debug!(
            elapsed_us = timing.elapsed.as_micros() as u64,
            patterns = timing.pattern_count,
            "search call finished"
        );
        (self.observer)(&timing);

        outcome
    }

    /// Returns the wrapped coordinator.
    pub fn inner(&self) -> &SearchCoordinator {
        &self.inner
    }
}
