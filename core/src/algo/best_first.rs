//! The shared best-first loop: A*, weighted A*, and anytime weighted A*.
//!
//! One loop serves all three — the weight, the reopening flag, and the
//! continuation policy (stop at the first goal pop, or keep improving an
//! incumbent) are parameters. The duplicate protocol is the same everywhere:
//! a regenerated identity either discards the new copy, decrease-keys an open
//! node, or reopens a closed one.

use crate::config::SearchConfig;
use crate::domain::{checked_cost, checked_heuristic, SearchDomain};
use crate::error::SearchError;
use crate::node::{NodeId, NodeStatus};
use crate::open::OpenList;
use crate::result::{SearchResult, Solution, Termination};
use crate::table::NodeTable;
use crate::tally::Tally;

use super::Cutoff;

/// Slack for detecting an f decrease along an edge without flagging float
/// rounding.
const F_EPS: f64 = 1e-9;

/// Weight schedule for the anytime continuation: halve the surplus over 1,
/// snapping to exactly 1 once the surplus is negligible.
fn next_weight(weight: f64) -> f64 {
    let next = 1.0 + (weight - 1.0) / 2.0;
    if next - 1.0 < 0.01 {
        1.0
    } else {
        next
    }
}

/// Best-first search over `domain`.
///
/// With `anytime` false the run stops at the first goal pop (A* and weighted
/// A*). With `anytime` true it records the goal as an incumbent, prunes the
/// frontier against it, lowers the weight, re-keys, and keeps going until
/// optimality is proven or a budget trips.
///
/// # Errors
///
/// Returns [`SearchError::MalformedDomain`] if the domain emits a negative or
/// non-finite edge cost or heuristic.
pub(crate) fn best_first<D: SearchDomain>(
    domain: &D,
    config: &SearchConfig,
    anytime: bool,
) -> Result<SearchResult<D::State, D::Op>, SearchError> {
    let mut tally = Tally::start();
    let cutoff = Cutoff::from_config(config);
    let mut table: NodeTable<D> = NodeTable::new();
    let mut open = OpenList::new();
    let mut weight = config.weight;

    let mut incumbent: Option<NodeId> = None;
    let mut incumbent_cost = f64::INFINITY;

    let root_state = domain.initial();
    let root_h = checked_heuristic(domain, &root_state)?;
    let root_ident = domain.identity(&root_state);
    let root_id = table.insert(root_ident, root_state, 0.0, root_h, None);
    open.insert(root_id, table.get(root_id).key(weight));

    let termination = loop {
        if let Some(tripped) = cutoff.check(tally.expansions()) {
            break tripped;
        }
        let Some((id, _)) = open.pop_min() else {
            break Termination::FrontierExhausted;
        };
        table.get_mut(id).status = NodeStatus::Closed;
        let (node_g, node_h, node_f) = {
            let node = table.get(id);
            (node.g, node.h, node.f())
        };

        // Anytime bound: a popped node that cannot beat the incumbent is
        // discarded without expansion.
        if anytime && incumbent.is_some() && node_f >= incumbent_cost {
            continue;
        }

        if domain.is_goal(&table.get(id).state) {
            tally.note_incumbent(node_g);
            incumbent = Some(id);
            incumbent_cost = node_g;
            if !anytime {
                break Termination::GoalReached;
            }
            let removed = open.prune(|nid| table.get(nid).f() < incumbent_cost);
            for nid in removed {
                table.get_mut(nid).status = NodeStatus::Closed;
            }
            if weight > 1.0 {
                weight = next_weight(weight);
                open.rekey_all(|nid| table.get(nid).key(weight));
                continue;
            }
            // At weight 1 the first goal popped is optimal.
            break Termination::ScheduleComplete;
        }

        tally.count_expansion();
        let state = table.get(id).state.clone();
        for succ in domain.successors(&state) {
            let cost = checked_cost::<D>(&succ)?;
            tally.count_generation();
            let succ_h = checked_heuristic(domain, &succ.state)?;
            if node_h > cost + succ_h + F_EPS {
                tally.count_inconsistency();
            }
            let succ_g = node_g + cost;

            if anytime && incumbent.is_some() && succ_g + succ_h >= incumbent_cost {
                continue;
            }

            let ident = domain.identity(&succ.state);
            match table.lookup(&ident) {
                None => {
                    let child = table.insert(ident, succ.state, succ_g, succ_h, Some((id, succ.op)));
                    open.insert(child, table.get(child).key(weight));
                }
                Some(existing) => {
                    tally.count_duplicate();
                    if succ_g < table.get(existing).g {
                        match table.get(existing).status {
                            NodeStatus::Open => {
                                table.improve(existing, succ_g, (id, succ.op));
                                open.decrease_key(existing, table.get(existing).key(weight));
                            }
                            NodeStatus::Closed => {
                                if config.reopening {
                                    table.improve(existing, succ_g, (id, succ.op));
                                    table.get_mut(existing).status = NodeStatus::Open;
                                    open.insert(existing, table.get(existing).key(weight));
                                    tally.count_reopening();
                                }
                                // Without reopening the cheaper path is
                                // discarded along with the duplicate.
                            }
                        }
                    }
                }
            }
        }
    };

    let solution = incumbent.map(|id| {
        let (ops, states) = table.path_to(id);
        Solution {
            ops,
            states,
            cost: table.get(id).g,
        }
    });
    Ok(tally.into_result(solution, termination))
}
