//! Typed search errors.
//!
//! `SearchError` covers pre-flight validation failures and domain contract
//! violations — the cases where no trustworthy result exists. Runtime
//! terminations (frontier exhaustion, budget trips) are not errors: they are
//! expressed via [`crate::result::Termination`] on a normal result so the
//! counters collected up to that point survive.

/// Typed failure for configuration validation and domain contract violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The configuration cannot be run as given (e.g. weight below 1,
    /// non-finite weight, missing lookahead for a real-time run). No search
    /// steps were taken.
    InvalidConfig { detail: String },
    /// A domain callback returned a value violating its contract (negative or
    /// non-finite edge cost or heuristic). The run is aborted; `state` is a
    /// debug rendering of the offending state for diagnosis.
    MalformedDomain { detail: String, state: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig { detail } => {
                write!(f, "invalid search configuration: {detail}")
            }
            Self::MalformedDomain { detail, state } => {
                write!(f, "malformed domain output ({detail}) at state {state}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
