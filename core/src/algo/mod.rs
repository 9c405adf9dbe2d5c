//! Algorithm drivers — the menagerie.
//!
//! Every run-to-completion variant goes through [`run`], which validates the
//! configuration and dispatches to its driver. The drivers share the engine
//! machinery (open list, node table, tally) but own their loop shape:
//!
//! - best-first — one loop serving A*, weighted A*, and anytime weighted
//!   A* (weight, reopening, and continuation policy are parameters).
//! - IDA* — iterative-deepening f-threshold depth-first search.
//! - real-time — the resumable bounded-lookahead session; [`run`] drives
//!   it to completion, or callers hold a [`RealTimeSearch`] and step it.

use std::time::Instant;

use crate::config::{Algorithm, SearchConfig};
use crate::domain::SearchDomain;
use crate::error::SearchError;
use crate::result::{SearchResult, Termination};

pub(crate) mod best_first;
pub(crate) mod idastar;
pub(crate) mod realtime;

pub use realtime::{RealTimeSearch, Step};

/// Run the configured algorithm on a domain.
///
/// Unsolvable instances and tripped budgets are reported through the
/// result's [`Termination`], not as errors.
///
/// # Errors
///
/// Returns [`SearchError::InvalidConfig`] for a configuration that fails
/// pre-flight validation and [`SearchError::MalformedDomain`] if the domain
/// violates its numeric contract mid-run.
pub fn run<D: SearchDomain>(
    domain: &D,
    config: &SearchConfig,
) -> Result<SearchResult<D::State, D::Op>, SearchError> {
    config.validate()?;
    match config.algorithm {
        Algorithm::AStar | Algorithm::WeightedAStar => {
            best_first::best_first(domain, config, false)
        }
        Algorithm::AnytimeWeightedAStar => best_first::best_first(domain, config, true),
        Algorithm::IdaStar => idastar::idastar(domain, config),
        Algorithm::RealTime => realtime::run_to_completion(domain, config),
    }
}

/// Run-scoped cutoff, polled once per expansion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cutoff {
    node_budget: Option<u64>,
    deadline: Option<Instant>,
}

impl Cutoff {
    pub(crate) fn from_config(config: &SearchConfig) -> Self {
        Self {
            node_budget: config.node_budget,
            deadline: config.time_budget.map(|budget| Instant::now() + budget),
        }
    }

    /// Check the budgets against the expansions performed so far. The node
    /// budget is checked first so a zero budget reports deterministically
    /// even when a time budget is also set.
    pub(crate) fn check(&self, expansions: u64) -> Option<Termination> {
        if let Some(budget) = self.node_budget {
            if expansions >= budget {
                return Some(Termination::NodeBudgetExhausted);
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Some(Termination::TimeBudgetExhausted);
            }
        }
        None
    }
}
