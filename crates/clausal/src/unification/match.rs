//! One-way matching for subsumption and fact lookup

use crate::fol::{AtomicSentence, Literal, Substitution, Term};

/// One-way match: find σ such that `pattern σ = target`
///
/// Only variables of the pattern are bound; variables of the target are
/// treated as constants.
pub fn match_term(pattern: &Term, target: &Term) -> Option<Substitution> {
    let mut subst = Substitution::new();
    match_with_subst(pattern, target, &mut subst).then_some(subst)
}

/// Extend `subst` so that `pattern σ = target`
///
/// On failure `subst` may hold partial bindings; callers that backtrack
/// keep their own copy.
pub fn match_with_subst(pattern: &Term, target: &Term, subst: &mut Substitution) -> bool {
    match (pattern, target) {
        // Variable in pattern matches anything, consistently
        (Term::Variable(v), t) => match subst.get(v) {
            Some(bound) => bound == t,
            None => {
                subst.insert(v.clone(), t.clone());
                true
            }
        },
        // Constants must match exactly
        (Term::Constant(c1), Term::Constant(c2)) => c1 == c2,
        // Functions must have same symbol and arity
        (Term::Function(f1, args1), Term::Function(f2, args2)) => {
            f1 == f2
                && args1.len() == args2.len()
                && args1
                    .iter()
                    .zip(args2.iter())
                    .all(|(a1, a2)| match_with_subst(a1, a2, subst))
        }
        // All other combinations fail
        _ => false,
    }
}

/// Match one atom onto another
pub fn match_atoms(pattern: &AtomicSentence, target: &AtomicSentence, subst: &mut Substitution) -> bool {
    match (pattern, target) {
        (
            AtomicSentence::Predicate { name: n1, args: a1 },
            AtomicSentence::Predicate { name: n2, args: a2 },
        ) => {
            n1 == n2
                && a1.len() == a2.len()
                && a1.iter().zip(a2.iter()).all(|(p, t)| match_with_subst(p, t, subst))
        }
        (
            AtomicSentence::TermEquality { left: l1, right: r1 },
            AtomicSentence::TermEquality { left: l2, right: r2 },
        ) => match_with_subst(l1, l2, subst) && match_with_subst(r1, r2, subst),
        _ => false,
    }
}

/// Match literals of the same polarity
pub fn match_literals(pattern: &Literal, target: &Literal, subst: &mut Substitution) -> bool {
    pattern.is_positive() == target.is_positive() && match_atoms(pattern.atom(), target.atom(), subst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::Variable;

    #[test]
    fn test_match_binds_pattern_only() {
        let pattern = Term::function("f", vec![Term::var("x"), Term::var("x")]);
        let target = Term::function("f", vec![Term::var("y"), Term::var("y")]);
        let subst = match_term(&pattern, &target).unwrap();
        assert_eq!(subst.get(&Variable::new("x")), Some(&Term::var("y")));

        // The target's variables are rigid
        assert!(match_term(&Term::constant("A"), &Term::var("y")).is_none());
        // Inconsistent bindings fail
        let target = Term::function("f", vec![Term::constant("A"), Term::constant("B")]);
        assert!(match_term(&pattern, &target).is_none());
    }

    #[test]
    fn test_match_literals_respects_polarity() {
        let p = Literal::positive(AtomicSentence::predicate("P", vec![Term::var("x")]));
        let q = Literal::negative(AtomicSentence::predicate("P", vec![Term::constant("A")]));
        let mut subst = Substitution::new();
        assert!(!match_literals(&p, &q, &mut subst));
        let mut subst = Substitution::new();
        assert!(match_literals(&p, &q.negated(), &mut subst));
    }
}
