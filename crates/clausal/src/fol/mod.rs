//! First-order logic data structures
//!
//! This module provides the fundamental types for representing FOL formulas:
//! terms, sentences, literals, clauses and substitutions.

pub mod clause;
pub mod literal;
pub mod position;
pub mod sentence;
pub mod substitution;
pub mod term;

// Re-export commonly used types
pub use clause::Clause;
pub use literal::Literal;
pub use position::Position;
pub use sentence::{AtomicSentence, Quantifier, Sentence, Signature, EQUALITY_SYMBOL};
pub use substitution::Substitution;
pub use term::{Constant, FunctionSymbol, Term, Variable};
