//! Paramodulation inference rule
//!
//! From a clause containing a positive equality `s = t` and a clause
//! containing a subterm `u` that unifies with `s`, derive the second clause
//! with `u` replaced by `t`, together with the rest of the first clause,
//! all under the unifier. Both orientations of the equality are tried, a
//! bare variable side included, and every unifiable non-variable subterm of
//! `into` yields its own paramodulant. Variable positions are never
//! rewritten.

use super::common::{instantiate_fresh, separate};
use super::derivation::Derivation;
use super::proof::{derive, rewrite_literal, ProofStep};
use crate::fol::{AtomicSentence, Clause, Literal, Position};
use crate::standardize::Indexical;
use crate::unification::Unifier;

/// Paramodulants between `left` and `right`, in both directions
pub fn paramodulants(
    left: &Clause,
    right: &Clause,
    unifier: &Unifier,
    indexical: &mut Indexical,
) -> Vec<Clause> {
    let right = separate(left, right, indexical);
    let mut results = paramodulate_into(left, &right, unifier, indexical);
    results.extend(paramodulate_into(&right, left, unifier, indexical));
    results
}

/// Use the positive equalities of `source` to rewrite `into`
fn paramodulate_into(
    source: &Clause,
    into: &Clause,
    unifier: &Unifier,
    indexical: &mut Indexical,
) -> Vec<Clause> {
    let mut results = Vec::new();

    for equality in source.positive_literals() {
        let AtomicSentence::TermEquality { left, right } = equality.atom() else {
            continue;
        };
        for (from, to, left_to_right) in [(left, right, true), (right, left, false)] {
            for (literal_index, literal) in into.literals().iter().enumerate() {
                for (argument, path) in literal.atom().non_variable_positions() {
                    let Some(subterm) = literal.atom().subterm_at(argument, &path) else {
                        continue;
                    };
                    let Ok(mgu) = unifier.unify_terms(subterm, from) else {
                        continue;
                    };
                    // Rewriting a term into itself derives nothing new
                    if subterm.apply_substitution(&mgu) == to.apply_substitution(&mgu) {
                        continue;
                    }
                    let position = Position::new(literal_index, argument, path);
                    let Some(rewritten) = rewrite_literal(into, &position, to) else {
                        continue;
                    };

                    let literals = source
                        .literals()
                        .iter()
                        .filter(|l| *l != equality)
                        .cloned()
                        .chain(rewritten);
                    let (clause, renaming) = instantiate_fresh(literals, &mgu, indexical);
                    results.push(derive(
                        clause,
                        Derivation::Paramodulation {
                            equality: equality.clone(),
                            left_to_right,
                            position,
                            unifier: mgu,
                            renaming,
                        },
                        vec![ProofStep::of(source), ProofStep::of(into)],
                    ));
                }
            }
        }
    }

    results
}

/// Positive equality literal `x = x`
pub fn reflexivity_literal() -> Literal {
    let x = crate::fol::Term::var("x");
    Literal::positive(AtomicSentence::equality(x.clone(), x))
}
