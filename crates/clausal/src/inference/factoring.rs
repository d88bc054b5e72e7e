//! Factoring inference rule

use super::common::same_signature;
use super::derivation::Derivation;
use super::proof::{derive, ProofStep};
use crate::fol::Clause;
use crate::unification::Unifier;
use indexmap::IndexSet;

/// All factors of `clause`, including factors of factors
///
/// A factor unifies two literals of the same polarity; applying the unifier
/// collapses them into one. The clause itself is not included.
pub fn factors(clause: &Clause, unifier: &Unifier) -> Vec<Clause> {
    let mut results: IndexSet<Clause> = IndexSet::new();
    let mut pending = vec![clause.clone()];
    let mut cursor = 0;

    while cursor < pending.len() {
        let current = pending[cursor].clone();
        cursor += 1;

        let literals: Vec<_> = current.literals().iter().collect();
        for i in 0..literals.len() {
            for j in (i + 1)..literals.len() {
                let (a, b) = (literals[i], literals[j]);
                if a.is_positive() != b.is_positive() || !same_signature(a, b) {
                    continue;
                }
                let Ok(mgu) = unifier.unify_literals(a, b) else {
                    continue;
                };
                let factor = derive(
                    current.apply_substitution(&mgu),
                    Derivation::Factor { unifier: mgu },
                    vec![ProofStep::of(&current)],
                );
                if factor != *clause && results.insert(factor.clone()) {
                    pending.push(factor);
                }
            }
        }
    }

    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::{AtomicSentence, Literal, Substitution, Term};
    use crate::inference::Proof;

    fn lit(positive: bool, name: &str, args: Vec<Term>) -> Literal {
        Literal::new(AtomicSentence::predicate(name, args), positive)
    }

    #[test]
    fn test_factoring() {
        // P(x) | P(A) | Q(x)  factors to  P(A) | Q(A)
        let c = Clause::new(vec![
            lit(true, "P", vec![Term::var("x")]),
            lit(true, "P", vec![Term::constant("A")]),
            lit(true, "Q", vec![Term::var("x")]),
        ]);
        let results = factors(&c, &Unifier::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].to_string(), "P(A) | Q(A)");
        Proof::new(ProofStep::of(&results[0]), Substitution::new())
            .verify()
            .unwrap();
    }

    #[test]
    fn test_no_factor_across_polarity() {
        let c = Clause::new(vec![
            lit(true, "P", vec![Term::var("x")]),
            lit(false, "P", vec![Term::constant("A")]),
        ]);
        assert!(factors(&c, &Unifier::default()).is_empty());
    }

    #[test]
    fn test_repeated_factoring() {
        // P(x) | P(y) | P(z) has factors with two literals and one literal
        let c = Clause::new(vec![
            lit(true, "P", vec![Term::var("x")]),
            lit(true, "P", vec![Term::var("y")]),
            lit(true, "P", vec![Term::var("z")]),
        ]);
        let results = factors(&c, &Unifier::default());
        assert!(results.iter().any(|f| f.len() == 1));
        assert!(results.iter().any(|f| f.len() == 2));
        for f in &results {
            Proof::new(ProofStep::of(f), Substitution::new()).verify().unwrap();
        }
    }
}
