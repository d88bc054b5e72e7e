//! Resource-bounded saturation by resolution, factoring and paramodulation

mod selection;
mod state;

pub use selection::{clause_weight, AgeWeightSelector};
pub use state::Saturation;

use crate::inference::Proof;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Predicate of the literal that collects bindings of query variables
pub const ANSWER_PREDICATE: &str = "$answer";

/// The bound that stopped a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceLimit {
    Time,
    Clauses,
    Inferences,
}

impl fmt::Display for ResourceLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLimit::Time => write!(f, "time"),
            ResourceLimit::Clauses => write!(f, "clauses"),
            ResourceLimit::Inferences => write!(f, "inferences"),
        }
    }
}

/// Result of a saturation run
///
/// A bound never produces `Disproved`: running out of budget says nothing
/// about whether the query follows.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Empty clause derived, or answers found for a query with free variables
    Proved(Vec<Proof>),
    /// Saturated without a contradiction
    Disproved,
    UnknownTimeout(ResourceLimit),
}

impl Outcome {
    pub fn is_proved(&self) -> bool {
        matches!(self, Outcome::Proved(_))
    }

    pub fn is_disproved(&self) -> bool {
        matches!(self, Outcome::Disproved)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Outcome::UnknownTimeout(_))
    }

    pub fn proofs(&self) -> &[Proof] {
        match self {
            Outcome::Proved(proofs) => proofs,
            _ => &[],
        }
    }

    /// Short status word: `proved`, `disproved` or `unknown`
    pub fn status(&self) -> &'static str {
        match self {
            Outcome::Proved(_) => "proved",
            Outcome::Disproved => "disproved",
            Outcome::UnknownTimeout(_) => "unknown",
        }
    }
}

/// Counters of one saturation run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SaturationStats {
    /// Given clauses selected
    pub rounds: usize,
    /// Clauses kept, including those later retired
    pub clauses: usize,
    pub inferences: usize,
    /// Clauses discarded or retired as subsumed
    pub subsumed: usize,
    pub elapsed: Duration,
}
