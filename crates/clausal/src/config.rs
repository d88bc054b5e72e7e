//! Prover configuration types.

use crate::error::{ClausalError, Result};
use crate::unification::Unifier;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Resource bounds and switches for one `ask`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProverConfig {
    /// Wall-clock budget for the saturation loop
    pub timeout: Duration,
    pub max_clauses: usize,
    /// Bound on the number of derived clauses, counted before redundancy checks
    pub max_inferences: usize,
    /// Reject bindings like `x = f(x)` during unification
    pub occurs_check: bool,
    /// Rewrite with equality literals; adds the reflexivity axiom when needed
    pub paramodulation: bool,
    /// Stop after this many answers to a query with free variables
    pub max_answers: usize,
    /// Every n-th given clause is the oldest waiting one, the rest are the lightest
    pub age_weight_ratio: usize,
}

impl Default for ProverConfig {
    fn default() -> Self {
        ProverConfig {
            timeout: Duration::from_secs(10),
            max_clauses: 0,    // 0 means no limit
            max_inferences: 0, // 0 means no limit
            occurs_check: true,
            paramodulation: true,
            max_answers: 0, // 0 means no limit
            age_weight_ratio: 5, // 0 means weight only
        }
    }
}

impl ProverConfig {
    /// Parse a configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ProverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(ClausalError::Config("timeout must be positive".to_string()));
        }
        Ok(())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_clauses(mut self, max_clauses: usize) -> Self {
        self.max_clauses = max_clauses;
        self
    }

    pub fn with_max_inferences(mut self, max_inferences: usize) -> Self {
        self.max_inferences = max_inferences;
        self
    }

    pub fn with_occurs_check(mut self, occurs_check: bool) -> Self {
        self.occurs_check = occurs_check;
        self
    }

    pub fn with_paramodulation(mut self, paramodulation: bool) -> Self {
        self.paramodulation = paramodulation;
        self
    }

    pub fn with_max_answers(mut self, max_answers: usize) -> Self {
        self.max_answers = max_answers;
        self
    }

    pub fn with_age_weight_ratio(mut self, age_weight_ratio: usize) -> Self {
        self.age_weight_ratio = age_weight_ratio;
        self
    }

    /// Unifier honoring the occurs-check switch
    pub fn unifier(&self) -> Unifier {
        Unifier::new(self.occurs_check)
    }
}
