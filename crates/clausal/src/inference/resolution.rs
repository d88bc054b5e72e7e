//! Binary resolution inference rule

use super::common::{instantiate_fresh, same_signature, separate};
use super::derivation::Derivation;
use super::proof::{derive, ProofStep};
use crate::fol::Clause;
use crate::standardize::Indexical;
use crate::unification::Unifier;

/// All binary resolvents of `left` and `right`
///
/// `right` is first renamed apart from `left` if they share variables (this
/// includes resolving a clause with itself). Each positive literal of one
/// side is tried against each negative literal of the other, in literal
/// order. Resolvents get fresh variable names from `indexical`.
pub fn binary_resolvents(
    left: &Clause,
    right: &Clause,
    unifier: &Unifier,
    indexical: &mut Indexical,
) -> Vec<Clause> {
    let right = separate(left, right, indexical);
    let mut results = Vec::new();

    for l1 in left.literals() {
        for l2 in right.literals() {
            if l1.is_positive() == l2.is_positive() || !same_signature(l1, l2) {
                continue;
            }
            let Ok(mgu) = unifier.unify_literals(l1, l2) else {
                continue;
            };

            let remaining = left
                .literals()
                .iter()
                .filter(|l| *l != l1)
                .chain(right.literals().iter().filter(|l| *l != l2))
                .cloned();
            let (resolvent, renaming) = instantiate_fresh(remaining, &mgu, indexical);

            results.push(derive(
                resolvent,
                Derivation::BinaryResolvent {
                    resolved: l1.clone(),
                    unifier: mgu,
                    renaming,
                },
                vec![ProofStep::of(left), ProofStep::of(&right)],
            ));
        }
    }

    results
}
