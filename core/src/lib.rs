//! Searchlab core: a heuristic state-space search engine for algorithm research.
//!
//! This crate is the engine only. It knows nothing about concrete problem
//! domains, instance files, or on-disk result formats — those live in
//! `searchlab-harness`. A domain plugs in through the [`domain::SearchDomain`]
//! trait; a run is dispatched through [`algo::run`] with a [`config::SearchConfig`]
//! and produces a [`result::SearchResult`] whose counters (expansions,
//! generations, duplicates, reopenings) are the empirical metrics reported in
//! comparisons.
//!
//! # Crate dependency graph
//!
//! ```text
//! searchlab-core  ←  searchlab-harness  ←  searchlab-benchmarks
//! (engine)           (worlds, writers)     (criterion benches)
//! ```
//!
//! # Key types
//!
//! - [`domain::SearchDomain`] — the contract a concrete domain must satisfy
//! - [`node::SearchNode`] — state plus g, h, parent link, and tie-break order
//! - [`open::OpenList`] — binary-heap frontier with decrease-key and re-keying
//! - [`table::NodeTable`] — node arena plus identity index; the single
//!   authoritative node per state identity
//! - [`config::SearchConfig`] — algorithm selection, weight, budgets, reopening
//! - [`result::SearchResult`] — solution, counters, incumbent history,
//!   termination reason
//! - [`algo::RealTimeSearch`] — the resumable bounded-lookahead session

#![forbid(unsafe_code)]

pub mod algo;
pub mod config;
pub mod domain;
pub mod error;
pub mod node;
pub mod open;
pub mod result;
pub mod table;
pub mod tally;

#[cfg(test)]
pub(crate) mod testutil;
