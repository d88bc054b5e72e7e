//! Implication elimination and negation normal form

use crate::fol::Sentence;

/// Rewrite `a ⇔ b` as `(a ⇒ b) ∧ (b ⇒ a)` and `a ⇒ b` as `¬a ∨ b`
pub fn eliminate_implications(sentence: &Sentence) -> Sentence {
    match sentence {
        Sentence::Atomic(_) => sentence.clone(),
        Sentence::Not(s) => Sentence::not(eliminate_implications(s)),
        Sentence::And(l, r) => Sentence::and(eliminate_implications(l), eliminate_implications(r)),
        Sentence::Or(l, r) => Sentence::or(eliminate_implications(l), eliminate_implications(r)),
        Sentence::Implies(l, r) => Sentence::or(
            Sentence::not(eliminate_implications(l)),
            eliminate_implications(r),
        ),
        Sentence::Iff(l, r) => {
            let l = eliminate_implications(l);
            let r = eliminate_implications(r);
            Sentence::and(
                Sentence::or(Sentence::not(l.clone()), r.clone()),
                Sentence::or(Sentence::not(r), l),
            )
        }
        Sentence::Quantified(q, vars, body) => {
            Sentence::Quantified(*q, vars.clone(), Box::new(eliminate_implications(body)))
        }
    }
}

/// Push negations down to the atoms
///
/// Implications and biconditionals met on the way are eliminated first, so
/// the conversion is total. The output contains only atoms, negated atoms,
/// `∧`, `∨` and quantifiers, and converting it again returns it unchanged.
pub fn to_nnf(sentence: &Sentence) -> Sentence {
    nnf(sentence, false)
}

fn nnf(sentence: &Sentence, negated: bool) -> Sentence {
    match sentence {
        Sentence::Atomic(_) => {
            if negated {
                Sentence::not(sentence.clone())
            } else {
                sentence.clone()
            }
        }
        Sentence::Not(inner) => nnf(inner, !negated),
        Sentence::And(l, r) => {
            if negated {
                Sentence::or(nnf(l, true), nnf(r, true))
            } else {
                Sentence::and(nnf(l, false), nnf(r, false))
            }
        }
        Sentence::Or(l, r) => {
            if negated {
                Sentence::and(nnf(l, true), nnf(r, true))
            } else {
                Sentence::or(nnf(l, false), nnf(r, false))
            }
        }
        Sentence::Implies(l, r) => {
            if negated {
                // ¬(¬l ∨ r) = l ∧ ¬r
                Sentence::and(nnf(l, false), nnf(r, true))
            } else {
                Sentence::or(nnf(l, true), nnf(r, false))
            }
        }
        Sentence::Iff(l, r) => {
            let expanded = Sentence::and(
                Sentence::implies((**l).clone(), (**r).clone()),
                Sentence::implies((**r).clone(), (**l).clone()),
            );
            nnf(&expanded, negated)
        }
        Sentence::Quantified(q, vars, body) => {
            let q = if negated { q.dual() } else { *q };
            Sentence::Quantified(q, vars.clone(), Box::new(nnf(body, negated)))
        }
    }
}

/// Check that negation applies only to atoms and no implications remain
pub fn is_nnf(sentence: &Sentence) -> bool {
    match sentence {
        Sentence::Atomic(_) => true,
        Sentence::Not(inner) => matches!(**inner, Sentence::Atomic(_)),
        Sentence::And(l, r) | Sentence::Or(l, r) => is_nnf(l) && is_nnf(r),
        Sentence::Implies(_, _) | Sentence::Iff(_, _) => false,
        Sentence::Quantified(_, _, body) => is_nnf(body),
    }
}
