//! Inference rules and proof tracking
//!
//! Generating rules (resolution, factoring, paramodulation) take their
//! premises by reference and return new clauses whose provenance links
//! record the rule, the premises and the substitutions involved.

pub mod common;
pub mod derivation;
pub mod factoring;
pub mod paramodulation;
pub mod proof;
pub mod resolution;

pub use derivation::Derivation;
pub use factoring::factors;
pub use paramodulation::{paramodulants, reflexivity_literal};
pub use proof::{derive, Proof, ProofLine, ProofStep};
pub use resolution::binary_resolvents;
