//! Domain contract trait.

use std::fmt;
use std::hash::Hash;

use crate::error::SearchError;

/// The contract a concrete problem domain must satisfy.
///
/// A domain is an immutable instance description: start state, goal predicate,
/// operators, and a heuristic estimate of remaining cost. It is read-only for
/// the duration of a run; all search bookkeeping lives on the engine side.
///
/// # Contract
///
/// - `successors` must return each applicable operator with the state it
///   produces and an edge cost `>= 0` and finite. Generation must be
///   self-contained: producing a successor must not require the search
///   history, only the argument state.
/// - `heuristic` must return a finite value `>= 0`. Admissibility and
///   consistency are NOT assumed by this interface; specific algorithms
///   require them for their guarantees. A domain whose heuristic is not
///   consistent must only be paired with configurations that keep reopening
///   enabled.
/// - `identity` must be stable: two states that represent the same search
///   position must map to equal keys, and the key must be cheap to hash.
/// - All methods must be deterministic: the same state yields the same
///   successors in the same order on every call.
///
/// Violations of the numeric contract are detected by the engine and surfaced
/// as [`SearchError::MalformedDomain`] with the offending state.
pub trait SearchDomain {
    /// Full state of a search position.
    type State: Clone + fmt::Debug;
    /// Duplicate-detection key derived from a state.
    type Ident: Clone + Eq + Hash + fmt::Debug;
    /// Operator label, kept on the edge for path reporting.
    type Op: Clone + fmt::Debug;

    /// The instance's start state.
    fn initial(&self) -> Self::State;

    /// Goal predicate.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All applicable operators from `state`, each with the resulting state
    /// and its edge cost.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::Op, Self::State>>;

    /// Estimated cost-to-go from `state`.
    fn heuristic(&self, state: &Self::State) -> f64;

    /// Duplicate-detection identity of `state`.
    fn identity(&self, state: &Self::State) -> Self::Ident;
}

/// One generated successor: the operator applied, the state it produced, and
/// the edge cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<Op, St> {
    pub op: Op,
    pub state: St,
    pub cost: f64,
}

/// Fetch a heuristic value, rejecting contract violations.
///
/// # Errors
///
/// Returns [`SearchError::MalformedDomain`] if the value is negative or
/// non-finite.
pub(crate) fn checked_heuristic<D: SearchDomain>(
    domain: &D,
    state: &D::State,
) -> Result<f64, SearchError> {
    let h = domain.heuristic(state);
    if !h.is_finite() || h < 0.0 {
        return Err(SearchError::MalformedDomain {
            detail: format!("heuristic returned {h}"),
            state: format!("{state:?}"),
        });
    }
    Ok(h)
}

/// Validate a successor's edge cost, rejecting contract violations.
///
/// # Errors
///
/// Returns [`SearchError::MalformedDomain`] if the cost is negative or
/// non-finite. The reported state is the successor state the bad edge leads
/// to, which is the most useful thing to show when diagnosing a domain bug.
pub(crate) fn checked_cost<D: SearchDomain>(
    succ: &Successor<D::Op, D::State>,
) -> Result<f64, SearchError> {
    if !succ.cost.is_finite() || succ.cost < 0.0 {
        return Err(SearchError::MalformedDomain {
            detail: format!("edge cost {} on operator {:?}", succ.cost, succ.op),
            state: format!("{:?}", succ.state),
        });
    }
    Ok(succ.cost)
}
