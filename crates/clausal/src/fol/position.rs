//! Subterm positions inside clauses.
//!
//! A `Position` identifies a subterm of one literal: the literal's index in
//! the clause, the argument index in its atom, and a path of argument
//! indices below that.

use super::clause::Clause;
use super::term::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a subterm within a clause
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Index of the literal in the clause
    pub literal: usize,
    /// Index of the argument within the literal's atom
    pub argument: usize,
    /// Path below the argument; empty for the argument itself
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<usize>,
}

impl Position {
    pub fn new(literal: usize, argument: usize, path: Vec<usize>) -> Self {
        Position {
            literal,
            argument,
            path,
        }
    }

    /// Subterm of `clause` at this position
    pub fn resolve<'a>(&self, clause: &'a Clause) -> Option<&'a Term> {
        clause
            .literals()
            .get_index(self.literal)?
            .atom()
            .subterm_at(self.argument, &self.path)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.literal, self.argument)?;
        for i in &self.path {
            write!(f, ".{}", i)?;
        }
        Ok(())
    }
}
