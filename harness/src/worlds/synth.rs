//! Synthetic tree: a seed-defined search tree for controlled experiments.
//!
//! The whole instance is one integer seed (the generator emits a single
//! line). Every node derives its children, edge costs, and heuristic noise
//! from an RNG seeded by `(instance seed, node id)`, so the tree is fully
//! reproducible without ever being stored: revisiting a node re-derives the
//! same successors.
//!
//! Nodes at `goal_depth` are goals and leaves. Edge costs are uniform in
//! `[1, 2)`; the exact-depth heuristic `goal_depth - depth` is therefore
//! admissible and consistent. The inconsistent mode scales each node's value
//! by per-node noise in `[0, 1)`, which keeps it admissible while breaking
//! the triangle inequality — the controlled setting for reopening and
//! weighted-suboptimality experiments.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use searchlab_core::domain::{SearchDomain, Successor};

use super::ParseError;

/// Odd multiplier for spreading node ids before seeding the per-node RNG.
const ID_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// One node of the synthetic tree. The id alone determines the subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SynthNode {
    pub id: u64,
    pub depth: u32,
}

/// A synthetic-tree instance.
#[derive(Debug, Clone)]
pub struct SynthTree {
    seed: u64,
    branching: u32,
    goal_depth: u32,
    inconsistent: bool,
}

impl SynthTree {
    /// Build an instance with explicit shape parameters.
    ///
    /// # Panics
    ///
    /// Panics if `branching` or `goal_depth` is zero.
    #[must_use]
    pub fn new(seed: u64, branching: u32, goal_depth: u32) -> Self {
        assert!(branching > 0, "branching must be positive");
        assert!(goal_depth > 0, "goal depth must be positive");
        Self {
            seed,
            branching,
            goal_depth,
            inconsistent: false,
        }
    }

    /// Default experiment shape: ternary, goals at depth 6.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(seed, 3, 6)
    }

    /// Parse the one-line instance format: the seed.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the first token is not a non-negative
    /// integer.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let seed: u64 = text
            .split_whitespace()
            .next()
            .and_then(|tok| tok.parse().ok())
            .ok_or_else(|| ParseError::new("expected a seed integer"))?;
        Ok(Self::from_seed(seed))
    }

    /// Switch the heuristic to the inconsistent (still admissible) variant.
    #[must_use]
    pub fn with_inconsistent_heuristic(mut self) -> Self {
        self.inconsistent = true;
        self
    }

    fn node_rng(&self, id: u64) -> StdRng {
        StdRng::seed_from_u64(self.seed ^ id.wrapping_mul(ID_MIX))
    }
}

impl SearchDomain for SynthTree {
    type State = SynthNode;
    type Ident = u64;
    type Op = u32;

    fn initial(&self) -> SynthNode {
        SynthNode { id: 0, depth: 0 }
    }

    fn is_goal(&self, state: &SynthNode) -> bool {
        state.depth >= self.goal_depth
    }

    fn successors(&self, state: &SynthNode) -> Vec<Successor<u32, SynthNode>> {
        if state.depth >= self.goal_depth {
            return Vec::new();
        }
        let mut rng = self.node_rng(state.id);
        (0..self.branching)
            .map(|child| {
                let id = rng.gen::<u64>();
                let cost = rng.gen_range(1.0..2.0);
                Successor {
                    op: child,
                    state: SynthNode {
                        id,
                        depth: state.depth + 1,
                    },
                    cost,
                }
            })
            .collect()
    }

    fn heuristic(&self, state: &SynthNode) -> f64 {
        let remaining = f64::from(self.goal_depth.saturating_sub(state.depth));
        if self.inconsistent {
            // Per-node noise in [0, 1) keeps the estimate admissible while
            // breaking the triangle inequality along edges.
            let noise = self.node_rng(state.id.rotate_left(17)).gen_range(0.0..1.0);
            remaining * noise
        } else {
            remaining
        }
    }

    fn identity(&self, state: &SynthNode) -> u64 {
        state.id
    }
}
