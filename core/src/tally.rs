//! Per-run result accumulator.
//!
//! One `Tally` instance is created at the top of every driver and folded into
//! the final [`SearchResult`] on every exit path — normal completion, budget
//! trip, or malformed-domain abort all pass through [`Tally::into_result`],
//! so the clock always closes and partial counters are never lost. Nothing
//! here is process-wide: batch sweeps running many searches in one process
//! cannot interfere with each other.

use std::time::{Duration, Instant};

use crate::result::{Counters, Incumbent, SearchResult, Solution, Termination};

/// Mutable counters, incumbent history, and the run clock for one search.
#[derive(Debug)]
pub struct Tally {
    counters: Counters,
    incumbents: Vec<Incumbent>,
    started: Instant,
}

impl Tally {
    /// Start the accumulator and its clock.
    #[must_use]
    pub fn start() -> Self {
        Self {
            counters: Counters::default(),
            incumbents: Vec::new(),
            started: Instant::now(),
        }
    }

    /// Wall-clock time since the run started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Expansions so far.
    #[must_use]
    pub fn expansions(&self) -> u64 {
        self.counters.expansions
    }

    pub fn count_expansion(&mut self) {
        self.counters.expansions += 1;
    }

    pub fn count_generation(&mut self) {
        self.counters.generations += 1;
    }

    pub fn count_duplicate(&mut self) {
        self.counters.duplicates += 1;
    }

    pub fn count_reopening(&mut self) {
        self.counters.reopenings += 1;
    }

    pub fn count_inconsistency(&mut self) {
        self.counters.inconsistencies += 1;
    }

    /// Best incumbent cost so far, if any.
    #[must_use]
    pub fn incumbent_cost(&self) -> Option<f64> {
        self.incumbents.last().map(|i| i.cost)
    }

    /// Record an improving solution with the effort spent so far.
    pub fn note_incumbent(&mut self, cost: f64) {
        debug_assert!(
            self.incumbent_cost().is_none_or(|best| cost < best),
            "incumbent history must be strictly improving"
        );
        self.incumbents.push(Incumbent {
            cost,
            elapsed: self.elapsed(),
            expansions: self.counters.expansions,
        });
    }

    /// Close the clock and produce the immutable result.
    #[must_use]
    pub fn into_result<St, Op>(
        self,
        solution: Option<Solution<St, Op>>,
        termination: Termination,
    ) -> SearchResult<St, Op> {
        let elapsed = self.elapsed();
        SearchResult {
            found: solution.is_some(),
            cost: solution.as_ref().map(|s| s.cost),
            solution,
            counters: self.counters,
            elapsed,
            incumbents: self.incumbents,
            termination,
        }
    }
}
