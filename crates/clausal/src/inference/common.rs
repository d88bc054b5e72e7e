//! Common utilities for inference rules

use super::derivation::Derivation;
use super::proof::{derive, ProofStep};
use crate::fol::{Clause, Literal, Substitution};
use crate::standardize::{standardize_apart, standardize_apart_avoiding, Indexical};

/// Rename `other` apart from `clause` when the two share a variable
///
/// The renamed copy carries a renaming step pointing at `other`.
pub fn separate(clause: &Clause, other: &Clause, indexical: &mut Indexical) -> Clause {
    let vars = clause.variables();
    if other.variables().iter().all(|v| !vars.contains(v)) {
        return other.clone();
    }
    let (renamed, renaming) = standardize_apart_avoiding(other, indexical, &vars);
    derive(renamed, Derivation::Renaming { renaming }, vec![ProofStep::of(other)])
}

/// Apply `unifier` to `literals`, then give the result fresh variable names
///
/// Returns the clause (without provenance) and the renaming applied.
pub fn instantiate_fresh(
    literals: impl IntoIterator<Item = Literal>,
    unifier: &Substitution,
    indexical: &mut Indexical,
) -> (Clause, Substitution) {
    let instantiated = Clause::new(literals).apply_substitution(unifier);
    standardize_apart(&instantiated, indexical)
}

/// Cheap pre-check before unifying two atoms
pub fn same_signature(a: &Literal, b: &Literal) -> bool {
    a.atom().symbol() == b.atom().symbol() && a.atom().arity() == b.atom().arity()
}
