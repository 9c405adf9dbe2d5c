//! Real-time bounded-lookahead search: a resumable decision session.
//!
//! Unlike the run-to-completion drivers, a [`RealTimeSearch`] lives across
//! external decision calls: each [`RealTimeSearch::step`] expands a bounded
//! local frontier around the currently committed state, backs the best
//! frontier estimate up into a persistent learned-heuristic table, and
//! commits exactly one move. The session's machinery — node table, open
//! list, learned values, counters — survives between invocations; the caller
//! owns the pacing.
//!
//! The learned values only ever increase, which is what keeps the agent from
//! oscillating forever between states whose static heuristic underestimates
//! the cost of escaping them.

use std::collections::{HashMap, VecDeque};

use crate::config::SearchConfig;
use crate::domain::{checked_cost, checked_heuristic, SearchDomain};
use crate::error::SearchError;
use crate::node::{NodeId, NodeStatus};
use crate::open::OpenList;
use crate::result::{SearchResult, Solution, Termination};
use crate::table::NodeTable;
use crate::tally::Tally;

use super::Cutoff;

/// Outcome of one decision step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<St, Op> {
    /// One move was committed.
    Move { op: Op, state: St },
    /// The committed state satisfies the goal; the session is complete.
    Goal,
    /// The local frontier emptied: no goal is reachable from the committed
    /// state. (Commitment is irrevocable, so a dead-ended agent stays
    /// dead-ended even if the instance was solvable from the start.)
    Exhausted,
    /// The node or time budget tripped before a move could be chosen.
    BudgetExhausted,
}

enum Lookahead {
    GoalInLocal(NodeId),
    Horizon,
    Exhausted,
    Stopped(Termination),
}

/// A resumable bounded-lookahead search session.
pub struct RealTimeSearch<'a, D: SearchDomain> {
    domain: &'a D,
    lookahead: u64,
    cutoff: Cutoff,
    tally: Tally,
    table: NodeTable<D>,
    open: OpenList,
    /// Identity → raised heuristic value, persistent across steps.
    learned: HashMap<D::Ident, f64>,
    committed_state: D::State,
    committed_ops: Vec<D::Op>,
    committed_states: Vec<D::State>,
    committed_cost: f64,
    /// Remaining moves of a goal path found during lookahead.
    plan: VecDeque<(D::Op, D::State, f64)>,
    finished: Option<Termination>,
}

impl<'a, D: SearchDomain> RealTimeSearch<'a, D> {
    /// Open a session at the domain's start state.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] if the configuration fails
    /// validation or carries no positive lookahead.
    pub fn new(domain: &'a D, config: &SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let Some(lookahead) = config.lookahead.filter(|&bound| bound > 0) else {
            return Err(SearchError::InvalidConfig {
                detail: "real-time search needs a lookahead of at least 1".into(),
            });
        };
        let committed_state = domain.initial();
        Ok(Self {
            domain,
            lookahead,
            cutoff: Cutoff::from_config(config),
            tally: Tally::start(),
            table: NodeTable::new(),
            open: OpenList::new(),
            learned: HashMap::new(),
            committed_states: vec![committed_state.clone()],
            committed_state,
            committed_ops: Vec::new(),
            committed_cost: 0.0,
            plan: VecDeque::new(),
            finished: None,
        })
    }

    /// The state the agent is currently committed to.
    #[must_use]
    pub fn committed(&self) -> &D::State {
        &self.committed_state
    }

    /// Perform one decision step. Terminal outcomes are sticky: stepping a
    /// finished session returns the same outcome again.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MalformedDomain`] if the domain emits a
    /// negative or non-finite edge cost or heuristic.
    pub fn step(&mut self) -> Result<Step<D::State, D::Op>, SearchError> {
        if let Some(terminal) = self.finished {
            return Ok(Self::terminal_step(terminal));
        }
        if self.domain.is_goal(&self.committed_state) {
            self.tally.note_incumbent(self.committed_cost);
            self.finished = Some(Termination::GoalReached);
            return Ok(Step::Goal);
        }
        if let Some((op, state, cost)) = self.plan.pop_front() {
            let (op, state) = self.commit(op, state, cost);
            return Ok(Step::Move { op, state });
        }

        let root_ident = self.domain.identity(&self.committed_state);
        let root_id = self.seed_lookahead(root_ident.clone())?;
        match self.run_lookahead()? {
            Lookahead::Stopped(tripped) => {
                self.finished = Some(tripped);
                Ok(Step::BudgetExhausted)
            }
            Lookahead::Exhausted => {
                self.finished = Some(Termination::FrontierExhausted);
                Ok(Step::Exhausted)
            }
            Lookahead::GoalInLocal(goal_id) => {
                for (op, state, cost) in self.path_steps(goal_id) {
                    self.plan.push_back((op, state, cost));
                }
                let (op, state, cost) =
                    self.plan.pop_front().expect("goal path has at least one step");
                let (op, state) = self.commit(op, state, cost);
                Ok(Step::Move { op, state })
            }
            Lookahead::Horizon => {
                let Some((best_id, _)) = self.open.peek_min() else {
                    // The horizon fell exactly on a dead-ended region.
                    self.finished = Some(Termination::FrontierExhausted);
                    return Ok(Step::Exhausted);
                };
                let backup = {
                    let best = self.table.get(best_id);
                    best.g + best.h
                };
                if backup > self.table.get(root_id).h {
                    self.learned.insert(root_ident, backup);
                }
                let (op, state, cost) = self
                    .path_steps(best_id)
                    .into_iter()
                    .next()
                    .expect("best frontier node is below the root");
                let (op, state) = self.commit(op, state, cost);
                Ok(Step::Move { op, state })
            }
        }
    }

    /// Fold the session into a result. The solution is the committed path
    /// when the goal was reached. A session abandoned before a terminal step
    /// reports `TimeBudgetExhausted` — the external decision loop ran out of
    /// its own time.
    #[must_use]
    pub fn into_result(self) -> SearchResult<D::State, D::Op> {
        let termination = self.finished.unwrap_or(Termination::TimeBudgetExhausted);
        let solution = (termination == Termination::GoalReached).then(|| Solution {
            ops: self.committed_ops,
            states: self.committed_states,
            cost: self.committed_cost,
        });
        self.tally.into_result(solution, termination)
    }

    fn terminal_step(terminal: Termination) -> Step<D::State, D::Op> {
        match terminal {
            Termination::GoalReached => Step::Goal,
            Termination::FrontierExhausted => Step::Exhausted,
            _ => Step::BudgetExhausted,
        }
    }

    /// Reset the reusable machinery and seed it with the committed state.
    fn seed_lookahead(&mut self, root_ident: D::Ident) -> Result<NodeId, SearchError> {
        self.table.clear();
        self.open.clear();
        let root_h = self.raised_heuristic(&self.committed_state)?;
        let root_id = self
            .table
            .insert(root_ident, self.committed_state.clone(), 0.0, root_h, None);
        self.open.insert(root_id, self.table.get(root_id).key(1.0));
        Ok(root_id)
    }

    /// Expand up to `lookahead` nodes of the local search space.
    fn run_lookahead(&mut self) -> Result<Lookahead, SearchError> {
        let mut expanded = 0;
        loop {
            if let Some(tripped) = self.cutoff.check(self.tally.expansions()) {
                return Ok(Lookahead::Stopped(tripped));
            }
            if expanded >= self.lookahead {
                return Ok(Lookahead::Horizon);
            }
            let Some((id, _)) = self.open.pop_min() else {
                return Ok(Lookahead::Exhausted);
            };
            self.table.get_mut(id).status = NodeStatus::Closed;
            if self.domain.is_goal(&self.table.get(id).state) {
                return Ok(Lookahead::GoalInLocal(id));
            }
            self.expand(id)?;
            expanded += 1;
        }
    }

    fn expand(&mut self, id: NodeId) -> Result<(), SearchError> {
        self.tally.count_expansion();
        let (state, node_g) = {
            let node = self.table.get(id);
            (node.state.clone(), node.g)
        };
        for succ in self.domain.successors(&state) {
            let cost = checked_cost::<D>(&succ)?;
            self.tally.count_generation();
            let succ_h = self.raised_heuristic(&succ.state)?;
            let succ_g = node_g + cost;
            let ident = self.domain.identity(&succ.state);
            match self.table.lookup(&ident) {
                None => {
                    let child = self
                        .table
                        .insert(ident, succ.state, succ_g, succ_h, Some((id, succ.op)));
                    self.open.insert(child, self.table.get(child).key(1.0));
                }
                Some(existing) => {
                    self.tally.count_duplicate();
                    if succ_g < self.table.get(existing).g {
                        self.table.improve(existing, succ_g, (id, succ.op));
                        match self.table.get(existing).status {
                            NodeStatus::Open => {
                                self.open
                                    .decrease_key(existing, self.table.get(existing).key(1.0));
                            }
                            NodeStatus::Closed => {
                                self.table.get_mut(existing).status = NodeStatus::Open;
                                self.open.insert(existing, self.table.get(existing).key(1.0));
                                self.tally.count_reopening();
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Static heuristic raised by any learned value for the same identity.
    fn raised_heuristic(&self, state: &D::State) -> Result<f64, SearchError> {
        let base = checked_heuristic(self.domain, state)?;
        let ident = self.domain.identity(state);
        Ok(self
            .learned
            .get(&ident)
            .copied()
            .map_or(base, |raised| raised.max(base)))
    }

    /// The `(op, state, edge cost)` steps from the lookahead root to `id`.
    fn path_steps(&self, id: NodeId) -> Vec<(D::Op, D::State, f64)> {
        let mut ids = vec![id];
        let mut cursor = id;
        while let Some((parent, _)) = &self.table.get(cursor).parent {
            ids.push(*parent);
            cursor = *parent;
        }
        ids.reverse();
        ids.windows(2)
            .map(|pair| {
                let parent_g = self.table.get(pair[0]).g;
                let node = self.table.get(pair[1]);
                let (_, op) = node.parent.as_ref().expect("non-root node has a parent");
                (op.clone(), node.state.clone(), node.g - parent_g)
            })
            .collect()
    }

    fn commit(&mut self, op: D::Op, state: D::State, cost: f64) -> (D::Op, D::State) {
        self.committed_cost += cost;
        self.committed_ops.push(op.clone());
        self.committed_states.push(state.clone());
        self.committed_state = state.clone();
        (op, state)
    }
}

/// Drive a session to a terminal step, for [`crate::algo::run`] dispatch.
pub(crate) fn run_to_completion<D: SearchDomain>(
    domain: &D,
    config: &SearchConfig,
) -> Result<SearchResult<D::State, D::Op>, SearchError> {
    let mut session = RealTimeSearch::new(domain, config)?;
    loop {
        match session.step()? {
            Step::Move { .. } => {}
            Step::Goal | Step::Exhausted | Step::BudgetExhausted => break,
        }
    }
    Ok(session.into_result())
}
