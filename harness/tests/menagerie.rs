//! Cross-domain acceptance tests: every algorithm against the real worlds,
//! checked against an independent oracle where one exists.

mod common;

use std::io::Read;
use std::time::Duration;

use searchlab_core::algo::{self, RealTimeSearch, Step};
use searchlab_core::config::SearchConfig;
use searchlab_core::result::Termination;

use searchlab_harness::rdb;
use searchlab_harness::report::RunRecord;
use searchlab_harness::worlds::grid::GridNav;
use searchlab_harness::worlds::pancake::Pancake;
use searchlab_harness::worlds::synth::SynthTree;
use searchlab_harness::worlds::tiles::SlidingTiles;

use common::brute_force_optimum;

const OPEN_BOARD: &str = "4 5\nBoard:\n    *\n  #  \n  #  \nV    \n\n";

const SEALED_BOARD: &str = "4 5\nBoard:\n   #*\n  ## \n ##  \nV#   \n\n";

#[test]
fn astar_matches_the_brute_force_optimum_on_grid() {
    let grid = GridNav::parse(OPEN_BOARD).unwrap();
    let oracle = brute_force_optimum(&grid).expect("open board is solvable");
    let result = algo::run(&grid, &SearchConfig::astar()).unwrap();
    assert!(result.found);
    assert!((result.cost.unwrap() - oracle).abs() < 1e-9);
}

#[test]
fn astar_matches_the_brute_force_optimum_on_pancake() {
    let pancake = Pancake::parse("5\n3 1 4 0 2\n").unwrap();
    let oracle = brute_force_optimum(&pancake).expect("every stack is sortable");
    let result = algo::run(&pancake, &SearchConfig::astar()).unwrap();
    assert!((result.cost.unwrap() - oracle).abs() < 1e-9);
}

#[test]
fn weighted_astar_stays_within_its_bound() {
    let pancake = Pancake::parse("6\n5 3 1 4 0 2\n").unwrap();
    let optimum = brute_force_optimum(&pancake).unwrap();
    for weight in [1.5, 2.0, 3.0] {
        let result = algo::run(&pancake, &SearchConfig::weighted_astar(weight)).unwrap();
        assert!(result.found, "weight {weight}");
        assert!(
            result.cost.unwrap() <= weight * optimum + 1e-9,
            "weight {weight}: cost {:?} vs optimum {optimum}",
            result.cost
        );
    }
}

#[test]
fn idastar_agrees_with_astar_on_tiles() {
    let tiles = SlidingTiles::new(3, 3, vec![1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
    let astar = algo::run(&tiles, &SearchConfig::astar()).unwrap();
    let ida = algo::run(&tiles, &SearchConfig::idastar()).unwrap();
    assert_eq!(astar.cost, ida.cost);
    assert!(astar.found && ida.found);
}

#[test]
fn one_slide_fifteen_puzzle_costs_one() {
    let mut cells: Vec<u8> = (1..16).collect();
    cells.push(0);
    cells.swap(14, 15); // blank one slide from home
    let tiles = SlidingTiles::fifteen(cells).unwrap();
    let result = algo::run(&tiles, &SearchConfig::astar()).unwrap();
    assert!(result.found);
    assert!((result.cost.unwrap() - 1.0).abs() < 1e-12);
    assert_eq!(result.solution.unwrap().ops.len(), 1);
}

#[test]
fn sealed_grid_is_reported_unsolvable_not_hung() {
    let grid = GridNav::parse(SEALED_BOARD).unwrap();
    let result = algo::run(&grid, &SearchConfig::astar()).unwrap();
    assert!(!result.found);
    assert_eq!(result.cost, None);
    assert_eq!(result.termination, Termination::FrontierExhausted);
}

#[test]
fn zero_node_budget_is_stable() {
    let grid = GridNav::parse(OPEN_BOARD).unwrap();
    let config = SearchConfig::astar().with_node_budget(0);
    for _ in 0..3 {
        let result = algo::run(&grid, &config).unwrap();
        assert!(!result.found);
        assert_eq!(result.counters.expansions, 0);
        assert_eq!(result.termination, Termination::NodeBudgetExhausted);
    }
}

#[test]
fn identical_runs_serialize_identically_without_timings() {
    let pancake = Pancake::parse("5\n3 1 4 0 2\n").unwrap();
    let config = SearchConfig::weighted_astar(1.5);
    let first = RunRecord::new(
        "pancake",
        "5\n3 1 4 0 2\n",
        &config,
        &algo::run(&pancake, &config).unwrap(),
    );
    let second = RunRecord::new(
        "pancake",
        "5\n3 1 4 0 2\n",
        &config,
        &algo::run(&pancake, &config).unwrap(),
    );
    assert_eq!(
        first.without_timings().to_json().unwrap(),
        second.without_timings().to_json().unwrap()
    );
}

#[test]
fn anytime_history_improves_and_ends_optimal() {
    let grid = GridNav::parse(OPEN_BOARD).unwrap();
    let optimum = brute_force_optimum(&grid).unwrap();
    let result = algo::run(&grid, &SearchConfig::anytime_weighted_astar(3.0)).unwrap();
    assert!(result.found);
    assert!((result.cost.unwrap() - optimum).abs() < 1e-9);
    assert!(!result.incumbents.is_empty());
    for pair in result.incumbents.windows(2) {
        assert!(pair[1].cost < pair[0].cost, "history must strictly improve");
    }
    assert!(matches!(
        result.termination,
        Termination::ScheduleComplete | Termination::FrontierExhausted
    ));
}

#[test]
fn anytime_respects_a_time_budget() {
    let tree = SynthTree::from_seed(11);
    let config =
        SearchConfig::anytime_weighted_astar(2.0).with_time_budget(Duration::from_millis(250));
    let result = algo::run(&tree, &config).unwrap();
    // Either it finished the schedule in time or it reports the budget trip
    // with whatever incumbent it had.
    if result.termination == Termination::TimeBudgetExhausted {
        assert_eq!(result.found, !result.incumbents.is_empty());
    } else {
        assert!(result.found);
    }
}

#[test]
fn inconsistent_synth_heuristic_is_observed_and_survivable() {
    let tree = SynthTree::new(23, 2, 5).with_inconsistent_heuristic();
    let result = algo::run(&tree, &SearchConfig::astar()).unwrap();
    assert!(result.found, "admissible heuristic keeps A* complete");
    let consistent = algo::run(&SynthTree::new(23, 2, 5), &SearchConfig::astar()).unwrap();
    assert!(
        (result.cost.unwrap() - consistent.cost.unwrap()).abs() < 1e-9,
        "reopening keeps the inconsistent run optimal"
    );
    assert!(
        result.counters.inconsistencies > 0,
        "f decreases must be counted"
    );
}

#[test]
fn real_time_session_walks_the_grid_to_the_goal() {
    let grid = GridNav::parse(OPEN_BOARD).unwrap();
    let config = SearchConfig::real_time(8);
    let mut session = RealTimeSearch::new(&grid, &config).unwrap();
    let mut moves = 0;
    loop {
        match session.step().unwrap() {
            Step::Move { .. } => {
                moves += 1;
                assert!(moves < 500, "session must not wander unboundedly");
            }
            Step::Goal => break,
            other => panic!("unexpected outcome {other:?}"),
        }
    }
    let result = session.into_result();
    assert!(result.found);
    assert_eq!(result.termination, Termination::GoalReached);
    assert_eq!(result.solution.unwrap().ops.len(), moves);
}

#[test]
fn real_time_dispatch_runs_to_completion() {
    let grid = GridNav::parse(OPEN_BOARD).unwrap();
    let result = algo::run(&grid, &SearchConfig::real_time(8)).unwrap();
    assert!(result.found);
}

#[test]
fn flat_record_file_round_trips_through_disk() {
    let grid = GridNav::parse(OPEN_BOARD).unwrap();
    let config = SearchConfig::astar();
    let result = algo::run(&grid, &config).unwrap();
    let record = RunRecord::new("grid", OPEN_BOARD, &config, &result);

    let mut file = tempfile::tempfile().unwrap();
    rdb::write_rdb(&record, &mut file).unwrap();

    use std::io::{Seek, SeekFrom};
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut text = String::new();
    file.read_to_string(&mut text).unwrap();

    assert!(text.starts_with("#start data file format 3\n"));
    assert!(text.trim_end().ends_with("#end data file format 3"));
    assert!(text.contains("#pair  \"domain\"  \"grid\""));
    assert!(text.contains(&format!(
        "#pair  \"total nodes expanded\"  \"{}\"",
        result.counters.expansions
    )));
}

#[test]
fn disabling_reopening_loses_optimality_only_without_consistency() {
    // On a consistent domain the flag must not change the answer.
    let grid = GridNav::parse(OPEN_BOARD).unwrap();
    let with = algo::run(&grid, &SearchConfig::astar()).unwrap();
    let without = algo::run(&grid, &SearchConfig::astar().with_reopening(false)).unwrap();
    assert_eq!(with.cost, without.cost);
    assert_eq!(without.counters.reopenings, 0);
}
