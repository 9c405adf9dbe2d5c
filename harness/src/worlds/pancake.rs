//! Pancake puzzle: sort a permutation by prefix reversals.
//!
//! State is a stack of cake sizes `0..n`, index 0 on top. The only operator
//! is flipping the top `k` cakes, `2 <= k <= n`, at unit cost. The heuristic
//! is the gap count: adjacent stack positions (plus the bottom-against-plate
//! position) whose sizes differ by more than one. Each flip changes at most
//! one gap, so the count is admissible and consistent.
//!
//! Instance text format: the cake count on the first line, the permutation
//! on the second:
//!
//! ```text
//! <ncakes>
//! <p0> <p1> ... <pn-1>
//! ```

use std::fmt;

use searchlab_core::domain::{SearchDomain, Successor};

use super::ParseError;

/// Flip the top `k` cakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flip(pub usize);

impl fmt::Display for Flip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flip {}", self.0)
    }
}

/// A pancake instance: the scrambled start stack.
#[derive(Debug, Clone)]
pub struct Pancake {
    start: Vec<u8>,
}

impl Pancake {
    /// Build an instance from a start permutation of `0..n`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the stack is not a permutation of `0..n`
    /// or has fewer than two cakes.
    pub fn new(start: Vec<u8>) -> Result<Self, ParseError> {
        let n = start.len();
        if n < 2 {
            return Err(ParseError::new("need at least two cakes"));
        }
        let mut seen = vec![false; n];
        for &cake in &start {
            let slot = seen
                .get_mut(cake as usize)
                .ok_or_else(|| ParseError::new(format!("cake {cake} out of range")))?;
            if *slot {
                return Err(ParseError::new(format!("cake {cake} appears twice")));
            }
            *slot = true;
        }
        Ok(Self { start })
    }

    /// Parse an instance from generator text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] on a malformed count or permutation.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut lines = text.lines();
        let n: usize = lines
            .next()
            .and_then(|line| line.trim().parse().ok())
            .ok_or_else(|| ParseError::new("missing cake count"))?;
        let stack_line = lines
            .next()
            .ok_or_else(|| ParseError::new("missing permutation line"))?;
        let stack: Vec<u8> = stack_line
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| ParseError::new("bad cake token"))?;
        if stack.len() != n {
            return Err(ParseError::new(format!(
                "expected {n} cakes, got {}",
                stack.len()
            )));
        }
        Self::new(stack)
    }

    #[must_use]
    pub fn ncakes(&self) -> usize {
        self.start.len()
    }

    /// The gap heuristic.
    fn gaps(state: &[u8]) -> f64 {
        let n = state.len();
        let mut gaps = 0;
        for pair in state.windows(2) {
            if pair[0].abs_diff(pair[1]) != 1 {
                gaps += 1;
            }
        }
        // The plate counts as cake n: a gap unless the largest cake is at
        // the bottom.
        if state[n - 1] as usize != n - 1 {
            gaps += 1;
        }
        f64::from(gaps)
    }
}

impl SearchDomain for Pancake {
    type State = Vec<u8>;
    type Ident = Vec<u8>;
    type Op = Flip;

    fn initial(&self) -> Vec<u8> {
        self.start.clone()
    }

    fn is_goal(&self, state: &Vec<u8>) -> bool {
        state
            .iter()
            .enumerate()
            .all(|(position, &cake)| cake as usize == position)
    }

    fn successors(&self, state: &Vec<u8>) -> Vec<Successor<Flip, Vec<u8>>> {
        (2..=state.len())
            .map(|k| {
                let mut flipped = state.clone();
                flipped[..k].reverse();
                Successor {
                    op: Flip(k),
                    state: flipped,
                    cost: 1.0,
                }
            })
            .collect()
    }

    fn heuristic(&self, state: &Vec<u8>) -> f64 {
        Self::gaps(state)
    }

    fn identity(&self, state: &Vec<u8>) -> Vec<u8> {
        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generator_output() {
        let pancake = Pancake::parse("4\n3 1 0 2 \n").unwrap();
        assert_eq!(pancake.ncakes(), 4);
        assert_eq!(pancake.initial(), vec![3, 1, 0, 2]);
    }

    #[test]
    fn rejects_non_permutations() {
        assert!(Pancake::parse("3\n0 0 2\n").is_err());
        assert!(Pancake::parse("3\n0 1 5\n").is_err());
        assert!(Pancake::parse("3\n0 1\n").is_err());
    }

    #[test]
    fn sorted_stack_is_the_goal() {
        let pancake = Pancake::new(vec![2, 0, 1]).unwrap();
        assert!(pancake.is_goal(&vec![0, 1, 2]));
        assert!(!pancake.is_goal(&vec![2, 0, 1]));
    }

    #[test]
    fn flips_reverse_prefixes() {
        let pancake = Pancake::new(vec![2, 0, 1]).unwrap();
        let succs = pancake.successors(&vec![2, 0, 1]);
        assert_eq!(succs.len(), 2, "flips of length 2..=n");
        assert_eq!(succs[0].state, vec![0, 2, 1]);
        assert_eq!(succs[1].state, vec![1, 0, 2]);
    }

    #[test]
    fn gap_heuristic_is_zero_exactly_at_the_goal() {
        let pancake = Pancake::new(vec![0, 1, 2, 3]).unwrap();
        assert!((pancake.heuristic(&vec![0, 1, 2, 3])).abs() < 1e-12);
        assert!(pancake.heuristic(&vec![3, 1, 0, 2]) > 0.0);
    }

    #[test]
    fn gap_heuristic_counts_the_plate_position() {
        let pancake = Pancake::new(vec![0, 1, 3, 2]).unwrap();
        // Gaps: between 1 and 3, and 2 is not on the plate.
        assert!((pancake.heuristic(&vec![0, 1, 3, 2]) - 2.0).abs() < 1e-12);
    }
}
