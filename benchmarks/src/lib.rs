//! Shared fixtures for the criterion benches.

#![forbid(unsafe_code)]

use searchlab_harness::worlds::grid::GridNav;
use searchlab_harness::worlds::pancake::Pancake;

/// A 10×10 board with alternating walls; forces a serpentine detour.
/// Written with explicit `\n`s because several rows carry significant
/// trailing spaces.
pub const BENCH_BOARD: &str = concat!(
    "10 10\n",
    "Board:\n",
    "         *\n",
    "  ########\n",
    "          \n",
    "########  \n",
    "          \n",
    "  ########\n",
    "          \n",
    "########  \n",
    "          \n",
    "V         \n",
    "\n",
);

/// Fixed scrambled stacks per size, so runs are comparable across machines.
#[must_use]
pub fn bench_pancake(ncakes: usize) -> Pancake {
    // Deterministic scramble: reverse pairs around the midpoint.
    let mut stack: Vec<u8> = (0..ncakes).map(|cake| cake as u8).collect();
    stack.reverse();
    stack.swap(0, ncakes / 2);
    Pancake::new(stack).expect("scramble is a permutation")
}

/// The detour board, parsed.
#[must_use]
pub fn bench_grid() -> GridNav {
    GridNav::parse(BENCH_BOARD).expect("bench board is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchlab_core::algo;
    use searchlab_core::config::SearchConfig;

    #[test]
    fn bench_fixtures_are_solvable() {
        let grid = bench_grid();
        assert!(algo::run(&grid, &SearchConfig::astar()).unwrap().found);
        let pancake = bench_pancake(7);
        assert!(algo::run(&pancake, &SearchConfig::astar()).unwrap().found);
    }
}
