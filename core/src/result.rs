//! Run results: solution, counters, incumbent history, termination reason.

use std::time::Duration;

use serde::Serialize;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// A stop-at-goal driver popped a goal node.
    GoalReached,
    /// The frontier emptied. With no incumbent this proves the instance
    /// unsolvable (for a finite domain); with one it proves the incumbent
    /// optimal.
    FrontierExhausted,
    /// The expansion budget tripped. The result carries the best incumbent
    /// found before the trip, if any.
    NodeBudgetExhausted,
    /// The wall-clock budget tripped. The result carries the best incumbent
    /// found before the trip, if any.
    TimeBudgetExhausted,
    /// An anytime schedule finished: the final weight reached 1 and the
    /// incumbent was proven optimal.
    ScheduleComplete,
}

impl Termination {
    /// Short name used in run records.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GoalReached => "goal",
            Self::FrontierExhausted => "frontier-exhausted",
            Self::NodeBudgetExhausted => "node-budget",
            Self::TimeBudgetExhausted => "time-budget",
            Self::ScheduleComplete => "schedule-complete",
        }
    }
}

/// One entry of the incumbent history: a solution found mid-run, with the
/// effort spent up to that point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Incumbent {
    pub cost: f64,
    pub elapsed: Duration,
    pub expansions: u64,
}

/// The per-run counters reported as empirical metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    /// Nodes popped and expanded.
    pub expansions: u64,
    /// Successor nodes produced by expansions.
    pub generations: u64,
    /// Generated states whose identity was already in the table.
    pub duplicates: u64,
    /// Closed nodes moved back to open on a cheaper path.
    pub reopenings: u64,
    /// Edge traversals observed to decrease f — evidence of an inconsistent
    /// heuristic. Counted, never fatal: reopening is the safety net.
    pub inconsistencies: u64,
}

/// A reconstructed solution path.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<St, Op> {
    /// Operators applied, in order from the start state.
    pub ops: Vec<Op>,
    /// States visited, root first, goal last.
    pub states: Vec<St>,
    /// Total path cost.
    pub cost: f64,
}

/// The immutable record of one run.
///
/// Everything except `elapsed` and the incumbent timestamps is a
/// deterministic function of the domain and configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<St, Op> {
    /// Whether any solution was found.
    pub found: bool,
    /// The best solution found, if any.
    pub solution: Option<Solution<St, Op>>,
    /// Cost of the best solution found, if any.
    pub cost: Option<f64>,
    pub counters: Counters,
    /// Wall-clock duration of the run, measured on every exit path.
    pub elapsed: Duration,
    /// Every improving solution in order of discovery. Length 1 for
    /// stop-at-goal drivers that succeed; longer for anytime runs.
    pub incumbents: Vec<Incumbent>,
    pub termination: Termination,
}
