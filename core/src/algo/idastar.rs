//! IDA*: iterative-deepening f-threshold depth-first search.
//!
//! No open list and no node table — memory stays linear in the solution
//! depth, paid for by re-exploring the shallow tree on every iteration.
//! Duplicate detection is limited to path-cycle checking: a successor whose
//! identity is already on the current path is skipped (and counted as a
//! duplicate), which bounds every probe without a closed set.

use std::collections::HashSet;

use crate::config::SearchConfig;
use crate::domain::{checked_cost, checked_heuristic, SearchDomain};
use crate::error::SearchError;
use crate::result::{SearchResult, Solution, Termination};
use crate::tally::Tally;

use super::Cutoff;

const F_EPS: f64 = 1e-9;

/// Outcome of one depth-first probe.
enum Probe {
    /// Goal reached at this cost; the path is being collected on unwind.
    Found(f64),
    /// Subtree exhausted under the bound; the minimum excess f was recorded.
    Deepen,
    /// A budget tripped mid-probe.
    Stopped(Termination),
}

struct Dfs<'a, D: SearchDomain> {
    domain: &'a D,
    tally: Tally,
    cutoff: Cutoff,
    bound: f64,
    /// Minimum f seen above the bound this iteration; the next threshold.
    next_bound: f64,
    /// Identities on the current path, for cycle checking.
    on_path: HashSet<D::Ident>,
    /// Solution operators, collected goal-first while unwinding.
    ops: Vec<D::Op>,
    /// Solution states, collected goal-first while unwinding.
    states: Vec<D::State>,
}

impl<D: SearchDomain> Dfs<'_, D> {
    fn probe(&mut self, state: &D::State, g: f64, h: f64) -> Result<Probe, SearchError> {
        let f = g + h;
        if f > self.bound + F_EPS {
            if f < self.next_bound {
                self.next_bound = f;
            }
            return Ok(Probe::Deepen);
        }
        if self.domain.is_goal(state) {
            return Ok(Probe::Found(g));
        }
        if let Some(tripped) = self.cutoff.check(self.tally.expansions()) {
            return Ok(Probe::Stopped(tripped));
        }
        self.tally.count_expansion();
        for succ in self.domain.successors(state) {
            let cost = checked_cost::<D>(&succ)?;
            self.tally.count_generation();
            let succ_h = checked_heuristic(self.domain, &succ.state)?;
            if h > cost + succ_h + F_EPS {
                self.tally.count_inconsistency();
            }
            let ident = self.domain.identity(&succ.state);
            if self.on_path.contains(&ident) {
                self.tally.count_duplicate();
                continue;
            }
            self.on_path.insert(ident.clone());
            let probe = self.probe(&succ.state, g + cost, succ_h)?;
            self.on_path.remove(&ident);
            match probe {
                Probe::Found(total) => {
                    self.ops.push(succ.op);
                    self.states.push(succ.state);
                    return Ok(Probe::Found(total));
                }
                Probe::Stopped(tripped) => return Ok(Probe::Stopped(tripped)),
                Probe::Deepen => {}
            }
        }
        Ok(Probe::Deepen)
    }
}

/// Run IDA* to completion.
///
/// The threshold starts at h(root) and is raised each iteration to the
/// minimum f that exceeded it; when an iteration exhausts the tree without
/// overflowing the threshold, the instance is unsolvable.
///
/// # Errors
///
/// Returns [`SearchError::MalformedDomain`] if the domain emits a negative or
/// non-finite edge cost or heuristic.
pub(crate) fn idastar<D: SearchDomain>(
    domain: &D,
    config: &SearchConfig,
) -> Result<SearchResult<D::State, D::Op>, SearchError> {
    let root = domain.initial();
    let root_h = checked_heuristic(domain, &root)?;
    let root_ident = domain.identity(&root);

    let mut dfs = Dfs {
        domain,
        tally: Tally::start(),
        cutoff: Cutoff::from_config(config),
        bound: root_h,
        next_bound: f64::INFINITY,
        on_path: HashSet::new(),
        ops: Vec::new(),
        states: Vec::new(),
    };

    loop {
        dfs.next_bound = f64::INFINITY;
        dfs.on_path.clear();
        dfs.on_path.insert(root_ident.clone());

        match dfs.probe(&root, 0.0, root_h)? {
            Probe::Found(cost) => {
                dfs.tally.note_incumbent(cost);
                dfs.ops.reverse();
                dfs.states.push(root);
                dfs.states.reverse();
                let solution = Solution {
                    ops: dfs.ops,
                    states: dfs.states,
                    cost,
                };
                return Ok(dfs.tally.into_result(Some(solution), Termination::GoalReached));
            }
            Probe::Stopped(tripped) => {
                return Ok(dfs.tally.into_result(None, tripped));
            }
            Probe::Deepen => {
                if dfs.next_bound.is_infinite() {
                    return Ok(dfs
                        .tally
                        .into_result(None, Termination::FrontierExhausted));
                }
                dfs.bound = dfs.next_bound;
            }
        }
    }
}
