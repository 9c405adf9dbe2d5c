//! Shared helpers for the integration tests.

use std::collections::HashMap;

use searchlab_core::domain::SearchDomain;

/// Independent uniform-cost enumeration: the oracle the optimality tests
/// compare against. A deliberately naive Dijkstra (linear-scan frontier, no
/// heuristic, no tie-breaking subtleties) so that it shares no code with the
/// engine under test. Only suitable for small finite instances.
pub fn brute_force_optimum<D: SearchDomain>(domain: &D) -> Option<f64> {
    let start = domain.initial();
    let mut best: HashMap<D::Ident, f64> = HashMap::new();
    let mut frontier: Vec<(D::State, f64)> = vec![(start.clone(), 0.0)];
    best.insert(domain.identity(&start), 0.0);
    let mut settled: Vec<D::Ident> = Vec::new();
    let mut goal_cost: Option<f64> = None;

    while !frontier.is_empty() {
        let (index, _) = frontier
            .iter()
            .enumerate()
            .min_by(|a, b| a.1 .1.partial_cmp(&b.1 .1).unwrap())
            .unwrap();
        let (state, g) = frontier.swap_remove(index);
        let ident = domain.identity(&state);
        if settled.contains(&ident) {
            continue;
        }
        settled.push(ident);

        if domain.is_goal(&state) {
            goal_cost = Some(g);
            break;
        }
        for succ in domain.successors(&state) {
            let succ_g = g + succ.cost;
            let succ_ident = domain.identity(&succ.state);
            let known = best.get(&succ_ident);
            if known.is_none_or(|&k| succ_g < k) {
                best.insert(succ_ident, succ_g);
                frontier.push((succ.state, succ_g));
            }
        }
    }
    goal_cost
}
