//! Run configuration: algorithm selection, weight, budgets, reopening.

use std::time::Duration;

use serde::Serialize;

use crate::error::SearchError;

/// The menagerie. Adding a variant means adding a driver behind
/// [`crate::algo::run`], never editing an existing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Algorithm {
    /// Best-first on f = g + h. Optimal given an admissible, consistent
    /// heuristic; reopening stays on defensively.
    AStar,
    /// Best-first on f = g + w·h, w > 1. Cost within w × optimal given an
    /// admissible heuristic.
    WeightedAStar,
    /// Iterative-deepening f-threshold depth-first search. No open/closed
    /// tables; duplicate detection is path-cycle checking only.
    IdaStar,
    /// Weighted best-first that continues after the first solution, lowering
    /// the weight and pruning against the incumbent until optimality is
    /// proven or a budget trips.
    AnytimeWeightedAStar,
    /// Bounded-lookahead decision session, driven to completion. For
    /// step-at-a-time control use [`crate::algo::RealTimeSearch`] directly.
    RealTime,
}

impl Algorithm {
    /// Short lower-case name used in run records.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::WeightedAStar => "wastar",
            Self::IdaStar => "idastar",
            Self::AnytimeWeightedAStar => "awastar",
            Self::RealTime => "realtime",
        }
    }
}

/// Configuration consumed by the drivers.
///
/// Build with the per-algorithm constructors and the `with_*` helpers, then
/// hand to [`crate::algo::run`]. `validate` runs pre-flight; an invalid
/// configuration never starts a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Heuristic weight, ≥ 1. Exactly 1 for plain A* and IDA*.
    pub weight: f64,
    /// Wall-clock cutoff, polled once per expansion.
    pub time_budget: Option<Duration>,
    /// Expansion-count cutoff, polled before each expansion. A budget of 0
    /// therefore yields exactly 0 expansions.
    pub node_budget: Option<u64>,
    /// Whether a cheaper path to a closed node moves it back to open. The
    /// safety net for inconsistent heuristics; disabling it trades the
    /// optimality guarantee for speed and must be an explicit choice.
    pub reopening: bool,
    /// Expansions per decision step for [`Algorithm::RealTime`]; unused
    /// otherwise.
    pub lookahead: Option<u64>,
}

impl SearchConfig {
    /// Plain optimal A*.
    #[must_use]
    pub fn astar() -> Self {
        Self {
            algorithm: Algorithm::AStar,
            weight: 1.0,
            time_budget: None,
            node_budget: None,
            reopening: true,
            lookahead: None,
        }
    }

    /// Weighted A* with the given weight.
    #[must_use]
    pub fn weighted_astar(weight: f64) -> Self {
        Self {
            algorithm: Algorithm::WeightedAStar,
            weight,
            ..Self::astar()
        }
    }

    /// IDA* at weight 1.
    #[must_use]
    pub fn idastar() -> Self {
        Self {
            algorithm: Algorithm::IdaStar,
            ..Self::astar()
        }
    }

    /// Anytime weighted A* starting from the given weight.
    #[must_use]
    pub fn anytime_weighted_astar(weight: f64) -> Self {
        Self {
            algorithm: Algorithm::AnytimeWeightedAStar,
            weight,
            ..Self::astar()
        }
    }

    /// Real-time search expanding at most `lookahead` nodes per decision.
    #[must_use]
    pub fn real_time(lookahead: u64) -> Self {
        Self {
            algorithm: Algorithm::RealTime,
            lookahead: Some(lookahead),
            ..Self::astar()
        }
    }

    /// Cap total expansions.
    #[must_use]
    pub fn with_node_budget(mut self, budget: u64) -> Self {
        self.node_budget = Some(budget);
        self
    }

    /// Cap wall-clock time.
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Set the reopening flag explicitly.
    #[must_use]
    pub fn with_reopening(mut self, reopening: bool) -> Self {
        self.reopening = reopening;
        self
    }

    /// Pre-flight validation.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] if the weight is non-finite or
    /// below 1, if a weighting is requested for an algorithm that must run at
    /// weight 1, or if a real-time run lacks a positive lookahead.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.weight.is_finite() || self.weight < 1.0 {
            return Err(SearchError::InvalidConfig {
                detail: format!("weight must be finite and >= 1, got {}", self.weight),
            });
        }
        match self.algorithm {
            Algorithm::AStar | Algorithm::IdaStar | Algorithm::RealTime => {
                if self.weight > 1.0 {
                    return Err(SearchError::InvalidConfig {
                        detail: format!(
                            "{} runs at weight 1, got {}",
                            self.algorithm.name(),
                            self.weight
                        ),
                    });
                }
            }
            Algorithm::WeightedAStar | Algorithm::AnytimeWeightedAStar => {}
        }
        if self.algorithm == Algorithm::RealTime && self.lookahead.unwrap_or(0) == 0 {
            return Err(SearchError::InvalidConfig {
                detail: "real-time search needs a lookahead of at least 1".into(),
            });
        }
        Ok(())
    }
}
