//! Subsumption checking for redundancy elimination
//!
//! Clause C subsumes clause D if there is a substitution σ with Cσ ⊆ D and
//! C has no more literals than D. Only variables of C are instantiated;
//! variables of D behave like constants.
//!
//! The test first compares literal counts per polarity, then groups D's
//! literals by polarity, symbol and arity, and finally searches for a
//! consistent matching with backtracking, trying C's most constrained
//! literals first.

use crate::fol::{Clause, Literal, Substitution};
use crate::unification::match_literals;
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeMap;

/// Check whether `general` subsumes `specific`
pub fn subsumes(general: &Clause, specific: &Clause) -> bool {
    if general.len() > specific.len()
        || general.positive_count() > specific.positive_count()
        || general.negative_count() > specific.negative_count()
    {
        return false;
    }

    let mut groups: IndexMap<String, Vec<&Literal>> = IndexMap::new();
    for lit in specific.literals() {
        groups.entry(lit.signature_key()).or_default().push(lit);
    }

    let mut pending: Vec<(&Literal, &Vec<&Literal>)> = Vec::with_capacity(general.len());
    for lit in general.literals() {
        match groups.get(&lit.signature_key()) {
            Some(candidates) => pending.push((lit, candidates)),
            None => return false,
        }
    }
    pending.sort_by_key(|(_, candidates)| candidates.len());

    match_all(&pending, Substitution::new())
}

fn match_all(pending: &[(&Literal, &Vec<&Literal>)], subst: Substitution) -> bool {
    let Some(((lit, candidates), rest)) = pending.split_first() else {
        return true;
    };
    candidates.iter().any(|candidate| {
        let mut extended = subst.clone();
        match_literals(lit, candidate, &mut extended) && match_all(rest, extended)
    })
}

/// Indices of clauses subsumed by another clause of the set
///
/// Clauses are grouped by literal count and each clause is checked only
/// against clauses of its own size or larger. A clause marked subsumed is
/// never used to subsume others, so of two variants the earlier one stays.
pub fn find_subsumed(clauses: &[Clause]) -> IndexSet<usize> {
    let mut by_size: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (i, clause) in clauses.iter().enumerate() {
        by_size.entry(clause.len()).or_default().push(i);
    }

    let mut subsumed = IndexSet::new();
    for (&size, group) in &by_size {
        for &i in group {
            if subsumed.contains(&i) {
                continue;
            }
            for (_, larger) in by_size.range(size..) {
                for &j in larger {
                    if i != j && !subsumed.contains(&j) && subsumes(&clauses[i], &clauses[j]) {
                        subsumed.insert(j);
                    }
                }
            }
        }
    }
    subsumed
}

/// Check whether any of `clauses` subsumes `candidate`
pub fn is_subsumed_by_any<'a>(candidate: &Clause, clauses: impl IntoIterator<Item = &'a Clause>) -> bool {
    clauses
        .into_iter()
        .any(|c| c.len() <= candidate.len() && subsumes(c, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::{AtomicSentence, Term};
    use proptest::prelude::*;

    fn lit(positive: bool, name: &str, args: Vec<Term>) -> Literal {
        Literal::new(AtomicSentence::predicate(name, args), positive)
    }

    fn v(name: &str) -> Term {
        Term::var(name)
    }

    fn c(name: &str) -> Term {
        Term::constant(name)
    }

    #[test]
    fn test_unit_subsumption() {
        let general = Clause::new(vec![lit(true, "P", vec![v("x")])]);
        let specific = Clause::new(vec![
            lit(true, "P", vec![c("A")]),
            lit(false, "Q", vec![v("y")]),
        ]);
        assert!(subsumes(&general, &specific));
        assert!(!subsumes(&specific, &general));
    }

    #[test]
    fn test_consistent_bindings_required() {
        // P(x,x) does not subsume P(A,B)
        let general = Clause::new(vec![lit(true, "P", vec![v("x"), v("x")])]);
        let specific = Clause::new(vec![lit(true, "P", vec![c("A"), c("B")])]);
        assert!(!subsumes(&general, &specific));
    }

    #[test]
    fn test_specific_variables_are_rigid() {
        // P(A) does not subsume P(x)
        let general = Clause::new(vec![lit(true, "P", vec![c("A")])]);
        let specific = Clause::new(vec![lit(true, "P", vec![v("x")])]);
        assert!(!subsumes(&general, &specific));
    }

    #[test]
    fn test_backtracking() {
        // P(x) | Q(x) subsumes P(A) | P(B) | Q(B) only by choosing x = B
        let general = Clause::new(vec![lit(true, "P", vec![v("x")]), lit(true, "Q", vec![v("x")])]);
        let specific = Clause::new(vec![
            lit(true, "P", vec![c("A")]),
            lit(true, "P", vec![c("B")]),
            lit(true, "Q", vec![c("B")]),
        ]);
        assert!(subsumes(&general, &specific));
    }

    #[test]
    fn test_variants_subsume_each_other() {
        let a = Clause::new(vec![lit(true, "P", vec![v("x")]), lit(false, "Q", vec![v("x"), v("y")])]);
        let b = Clause::new(vec![lit(false, "Q", vec![v("u"), v("w")]), lit(true, "P", vec![v("u")])]);
        assert!(subsumes(&a, &b));
        assert!(subsumes(&b, &a));
    }

    #[test]
    fn test_find_subsumed_keeps_first_variant() {
        let clauses = vec![
            Clause::new(vec![lit(true, "P", vec![v("x")])]),
            Clause::new(vec![lit(true, "P", vec![c("A")]), lit(true, "R", vec![])]),
            Clause::new(vec![lit(true, "P", vec![v("y")])]),
            Clause::new(vec![lit(true, "Q", vec![c("A")])]),
        ];
        let subsumed: Vec<usize> = find_subsumed(&clauses).into_iter().collect();
        assert_eq!(subsumed, vec![2, 1]);
    }

    fn arb_clause() -> impl Strategy<Value = Clause> {
        let term = prop_oneof![
            (0..3u8).prop_map(|i| Term::var(format!("x{}", i))),
            (0..2u8).prop_map(|i| Term::constant(format!("C{}", i))),
        ];
        let literal = (any::<bool>(), 0..2u8, proptest::collection::vec(term, 2))
            .prop_map(|(pos, p, args)| lit(pos, &format!("P{}", p), args));
        proptest::collection::vec(literal, 1..4).prop_map(Clause::new)
    }

    proptest! {
        #[test]
        fn subsumption_reflexive(clause in arb_clause()) {
            prop_assert!(subsumes(&clause, &clause));
        }

        #[test]
        fn mutual_subsumption_means_same_size(a in arb_clause(), b in arb_clause()) {
            if subsumes(&a, &b) && subsumes(&b, &a) {
                prop_assert_eq!(a.len(), b.len());
            }
        }

        #[test]
        fn instances_are_subsumed(clause in arb_clause(), target in 0..2u8) {
            let ground = Substitution::from_pairs(
                clause.variables().into_iter().map(|v| (v, Term::constant(format!("C{}", target)))),
            );
            let instance = clause.apply_substitution(&ground);
            if instance.len() == clause.len() {
                prop_assert!(subsumes(&clause, &instance));
            }
        }
    }
}
