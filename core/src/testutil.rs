//! Tiny explicit-graph fixture domain shared by the engine's unit tests.

use std::collections::HashSet;

use crate::domain::{SearchDomain, Successor};

/// An explicit weighted digraph over vertex ids. State = Ident = Op = vertex
/// id (`Op` is the destination vertex of the edge taken).
pub(crate) struct GraphDomain {
    /// `edges[v]` = outgoing `(to, cost)` pairs, in fixed order.
    pub edges: Vec<Vec<(usize, f64)>>,
    /// Heuristic value per vertex.
    pub h: Vec<f64>,
    pub start: usize,
    pub goals: HashSet<usize>,
}

impl GraphDomain {
    /// A path graph `0 → 1 → … → n-1` with unit edges, goal at the end,
    /// and the exact remaining-distance heuristic.
    pub fn line(n: usize) -> Self {
        let edges = (0..n)
            .map(|v| if v + 1 < n { vec![(v + 1, 1.0)] } else { vec![] })
            .collect();
        let h = (0..n).map(|v| (n - 1 - v) as f64).collect();
        Self {
            edges,
            h,
            start: 0,
            goals: HashSet::from([n - 1]),
        }
    }

    /// A graph whose heuristic is admissible but not consistent, built so
    /// that vertex 3 is expanded with the expensive path through 1 before
    /// the cheap path through 2 is discovered. Correct cost is 2.5
    /// (0 →2 →3 →4); without reopening the search settles for 3.0.
    ///
    /// The inconsistent edge is 2 →3: h(2) = 1.4 > 0.5 + h(3). Every h stays
    /// at or below the true remaining cost, so A* with reopening is exact.
    pub fn inconsistent_diamond() -> Self {
        let edges = vec![
            vec![(1, 1.0), (2, 1.0)], // 0
            vec![(3, 1.0)],           // 1
            vec![(3, 0.5)],           // 2
            vec![(4, 1.0)],           // 3
            vec![],                   // 4 (goal)
        ];
        let h = vec![1.5, 0.5, 1.4, 0.0, 0.0];
        Self {
            edges,
            h,
            start: 0,
            goals: HashSet::from([4]),
        }
    }

    /// A path graph with edges in both directions, a zero heuristic, and the
    /// goal at the far end. Exercises revisiting under learned heuristics.
    pub fn undirected_line(n: usize) -> Self {
        let edges = (0..n)
            .map(|v| {
                let mut out = Vec::new();
                if v > 0 {
                    out.push((v - 1, 1.0));
                }
                if v + 1 < n {
                    out.push((v + 1, 1.0));
                }
                out
            })
            .collect();
        Self {
            edges,
            h: vec![0.0; n],
            start: 0,
            goals: HashSet::from([n - 1]),
        }
    }

    /// Two disconnected vertices: provably unsolvable.
    pub fn unsolvable() -> Self {
        Self {
            edges: vec![vec![], vec![]],
            h: vec![0.0, 0.0],
            start: 0,
            goals: HashSet::from([1]),
        }
    }
}

impl SearchDomain for GraphDomain {
    type State = usize;
    type Ident = usize;
    type Op = usize;

    fn initial(&self) -> usize {
        self.start
    }

    fn is_goal(&self, state: &usize) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &usize) -> Vec<Successor<usize, usize>> {
        self.edges[*state]
            .iter()
            .map(|&(to, cost)| Successor {
                op: to,
                state: to,
                cost,
            })
            .collect()
    }

    fn heuristic(&self, state: &usize) -> f64 {
        self.h[*state]
    }

    fn identity(&self, state: &usize) -> usize {
        *state
    }
}
