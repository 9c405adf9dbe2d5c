//! Flat run records: the serialization boundary between a search result and
//! the on-disk writers.
//!
//! A [`RunRecord`] is a domain-agnostic flattening of one run — scalar
//! key/value facts plus the incumbent table — tagged with a SHA-256 digest
//! of the instance text so result files can be traced back to the exact
//! instance that produced them. The engine itself knows nothing of this
//! type; writers (the legacy format in [`crate::rdb`], JSON here) consume
//! it.

use serde::Serialize;
use sha2::{Digest, Sha256};

use searchlab_core::config::SearchConfig;
use searchlab_core::result::SearchResult;

/// One row of the incumbent table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncumbentRow {
    /// 1-based discovery order.
    pub number: u64,
    pub cost: f64,
    pub elapsed_seconds: f64,
    pub expansions: u64,
}

/// A flattened, serializable record of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    pub domain: String,
    pub algorithm: String,
    pub weight: f64,
    /// SHA-256 hex digest of the instance text.
    pub instance_digest: String,
    pub found: bool,
    pub cost: Option<f64>,
    /// Operator count of the reported solution.
    pub solution_length: Option<usize>,
    pub expansions: u64,
    pub generations: u64,
    pub duplicates: u64,
    pub reopenings: u64,
    pub inconsistencies: u64,
    pub elapsed_seconds: f64,
    pub termination: String,
    pub incumbents: Vec<IncumbentRow>,
}

impl RunRecord {
    /// Flatten a result with its run metadata.
    #[must_use]
    pub fn new<St, Op>(
        domain: &str,
        instance_text: &str,
        config: &SearchConfig,
        result: &SearchResult<St, Op>,
    ) -> Self {
        Self {
            domain: domain.to_string(),
            algorithm: config.algorithm.name().to_string(),
            weight: config.weight,
            instance_digest: instance_digest(instance_text),
            found: result.found,
            cost: result.cost,
            solution_length: result.solution.as_ref().map(|s| s.ops.len()),
            expansions: result.counters.expansions,
            generations: result.counters.generations,
            duplicates: result.counters.duplicates,
            reopenings: result.counters.reopenings,
            inconsistencies: result.counters.inconsistencies,
            elapsed_seconds: result.elapsed.as_secs_f64(),
            termination: result.termination.name().to_string(),
            incumbents: result
                .incumbents
                .iter()
                .enumerate()
                .map(|(index, incumbent)| IncumbentRow {
                    number: index as u64 + 1,
                    cost: incumbent.cost,
                    elapsed_seconds: incumbent.elapsed.as_secs_f64(),
                    expansions: incumbent.expansions,
                })
                .collect(),
        }
    }

    /// The structured successor format: pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error on serialization failure.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Zero the wall-clock fields, leaving only the deterministic surface.
    /// Two runs of the same instance and configuration must then compare
    /// equal.
    #[must_use]
    pub fn without_timings(mut self) -> Self {
        self.elapsed_seconds = 0.0;
        for row in &mut self.incumbents {
            row.elapsed_seconds = 0.0;
        }
        self
    }
}

/// SHA-256 hex digest of instance text.
#[must_use]
pub fn instance_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
