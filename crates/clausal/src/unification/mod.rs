//! Unification algorithm for first-order terms

mod r#match;
mod mgu;

#[cfg(test)]
mod proptest_tests;

pub use mgu::{unify, unify_atoms, UnificationError, UnificationResult, Unifier, DEFAULT_MAX_DEPTH};
pub use r#match::{match_atoms, match_literals, match_term, match_with_subst};
