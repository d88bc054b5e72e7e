//! Clausal: a resolution theorem prover for first-order logic
//!
//! Sentences are converted to clause form and stored in a
//! [`KnowledgeBase`]. Queries are answered by refutation: the negated query
//! joins the stored clauses and a resource-bounded saturation by binary
//! resolution, factoring and paramodulation searches for the empty clause.
//! Every derived clause links to the step that produced it, so a successful
//! search yields a [`Proof`] that can be printed and re-checked.
//!
//! ```
//! use clausal::{KnowledgeBase, Outcome, ProverConfig, Sentence, Term};
//!
//! let mut kb = KnowledgeBase::new();
//! kb.tell(&Sentence::predicate("Missile", vec![Term::constant("M1")])).unwrap();
//! kb.tell(&Sentence::forall(
//!     &["x"],
//!     Sentence::implies(
//!         Sentence::predicate("Missile", vec![Term::var("x")]),
//!         Sentence::predicate("Weapon", vec![Term::var("x")]),
//!     ),
//! ))
//! .unwrap();
//!
//! let query = Sentence::predicate("Weapon", vec![Term::constant("M1")]);
//! match kb.ask(&query, &ProverConfig::default()).unwrap() {
//!     Outcome::Proved(proofs) => println!("{}", proofs[0]),
//!     other => panic!("Expected proof, got {:?}", other),
//! }
//! ```

pub mod config;
pub mod error;
pub mod fol;
pub mod inference;
pub mod json;
pub mod kb;
pub mod normal_form;
pub mod saturation;
pub mod simplifying;
pub mod standardize;
pub mod unification;

pub use config::ProverConfig;
pub use error::{ClausalError, Result};

// Re-export commonly used types from fol
pub use fol::{
    AtomicSentence, Clause, Constant, FunctionSymbol, Literal, Position, Quantifier, Sentence,
    Signature, Substitution, Term, Variable,
};

pub use inference::{Derivation, Proof, ProofLine, ProofStep};
pub use json::{OutcomeJson, ProofJson};
pub use kb::KnowledgeBase;
pub use normal_form::CnfConverter;
pub use saturation::{Outcome, ResourceLimit, Saturation, SaturationStats};
pub use simplifying::subsumes;
pub use standardize::{standardize_apart, Indexical, RenamingContext};
pub use unification::{unify, UnificationError, UnificationResult, Unifier};
