//! Concrete domains and their instance-text parsers.
//!
//! Each world implements `searchlab_core::domain::SearchDomain` independently
//! and knows how to build itself from the instance text format its generator
//! emits. Parsers are strict: malformed text is a typed [`ParseError`], never
//! a panic, because instance files come from outside the trust boundary.

pub mod grid;
pub mod pancake;
pub mod synth;
pub mod tiles;

/// Failure to parse instance text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub detail: String,
}

impl ParseError {
    pub(crate) fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed instance: {}", self.detail)
    }
}

impl std::error::Error for ParseError {}
