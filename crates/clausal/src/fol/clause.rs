//! Clauses: sets of literals read as a disjunction

use super::literal::Literal;
use super::sentence::Sentence;
use super::term::Variable;
use crate::inference::ProofStep;
use indexmap::IndexSet;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

/// A clause (disjunction of literals)
///
/// Literals keep insertion order for display and iteration, but membership
/// has set semantics. Equality and hashing ignore literal order and the
/// provenance link. Positive and negative counts are fixed at construction,
/// so the Horn/definite classifications are constant-time.
#[derive(Clone)]
pub struct Clause {
    literals: IndexSet<Literal>,
    positive: usize,
    negative: usize,
    hash: OnceLock<u64>,
    proof: Option<Arc<ProofStep>>,
}

impl Clause {
    /// Create a clause; duplicate literals collapse
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        let literals: IndexSet<Literal> = literals.into_iter().collect();
        let positive = literals.iter().filter(|l| l.is_positive()).count();
        let negative = literals.len() - positive;
        Clause {
            literals,
            positive,
            negative,
            hash: OnceLock::new(),
            proof: None,
        }
    }

    /// The empty clause (contradiction)
    pub fn empty() -> Self {
        Clause::new(Vec::new())
    }

    /// Attach the proof step that produced this clause
    pub fn with_proof(mut self, step: Arc<ProofStep>) -> Self {
        self.proof = Some(step);
        self
    }

    /// Same literals without a provenance link
    pub fn without_proof(&self) -> Self {
        Clause {
            proof: None,
            ..self.clone()
        }
    }

    pub fn proof(&self) -> Option<&Arc<ProofStep>> {
        self.proof.as_ref()
    }

    pub fn literals(&self) -> &IndexSet<Literal> {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    pub fn positive_literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter().filter(|l| l.is_positive())
    }

    pub fn negative_literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter().filter(|l| l.is_negative())
    }

    pub fn positive_count(&self) -> usize {
        self.positive
    }

    pub fn negative_count(&self) -> usize {
        self.negative
    }

    /// Exactly one literal
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// Non-empty with at most one positive literal
    pub fn is_horn(&self) -> bool {
        !self.is_empty() && self.positive <= 1
    }

    /// Exactly one positive literal
    pub fn is_definite(&self) -> bool {
        self.positive == 1
    }

    /// Definite clause with at least one negative literal, i.e. `L1 ∧ ... ∧ Ln ⇒ P`
    pub fn is_implication_definite(&self) -> bool {
        self.is_definite() && self.negative > 0
    }

    /// A single positive literal
    pub fn is_fact(&self) -> bool {
        self.is_definite() && self.negative == 0
    }

    /// Check for complementary literals
    pub fn is_tautology(&self) -> bool {
        self.positive_literals()
            .any(|p| self.literals.contains(&p.negated()))
    }

    /// Get all variables in this clause, in order of first occurrence
    pub fn variables(&self) -> IndexSet<Variable> {
        let mut vars = IndexSet::new();
        for lit in &self.literals {
            lit.collect_variables(&mut vars);
        }
        vars
    }

    pub fn is_ground(&self) -> bool {
        self.literals.iter().all(|l| l.atom().arguments().iter().all(|t| t.is_ground()))
    }

    /// Read an implication-definite clause as `(N1 ∧ ... ∧ Nk) ⇒ P`
    pub fn to_implication(&self) -> Option<Sentence> {
        if !self.is_implication_definite() {
            return None;
        }
        let premise = Sentence::conjunction(
            self.negative_literals()
                .map(|l| Sentence::Atomic(l.atom().clone())),
        )?;
        let conclusion = self.positive_literals().next()?.atom().clone();
        Some(Sentence::implies(premise, Sentence::Atomic(conclusion)))
    }

    fn structural_hash(&self) -> u64 {
        *self.hash.get_or_init(|| {
            // Order-insensitive combination of literal hashes
            self.literals.iter().fold(0u64, |acc, lit| {
                let mut hasher = DefaultHasher::new();
                lit.hash(&mut hasher);
                acc.wrapping_add(hasher.finish())
            })
        })
    }
}

impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.literals.len() == other.literals.len()
            && self.structural_hash() == other.structural_hash()
            && self.literals == other.literals
    }
}

impl Eq for Clause {}

impl Hash for Clause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clause")
            .field("literals", &format_args!("{}", self))
            .field("rule", &self.proof.as_ref().map(|p| p.derivation.rule_name()))
            .finish()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "False")
        } else {
            for (i, lit) in self.literals.iter().enumerate() {
                if i > 0 {
                    write!(f, " | ")?;
                }
                write!(f, "{}", lit)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::{AtomicSentence, Term};

    fn lit(positive: bool, name: &str, args: Vec<Term>) -> Literal {
        Literal::new(AtomicSentence::predicate(name, args), positive)
    }

    #[test]
    fn test_set_semantics() {
        let a = lit(true, "P", vec![Term::var("x")]);
        let b = lit(false, "Q", vec![Term::var("x")]);
        let c1 = Clause::new(vec![a.clone(), b.clone(), a.clone()]);
        let c2 = Clause::new(vec![b, a]);

        assert_eq!(c1.len(), 2);
        assert_eq!(c1, c2);
        // Insertion order is kept for display
        assert_eq!(c1.to_string(), "P(x) | ~Q(x)");
        assert_eq!(c2.to_string(), "~Q(x) | P(x)");
    }

    #[test]
    fn test_classification() {
        let fact = Clause::new(vec![lit(true, "Missile", vec![Term::constant("M1")])]);
        assert!(fact.is_unit() && fact.is_horn() && fact.is_definite() && fact.is_fact());
        assert!(!fact.is_implication_definite());

        let rule = Clause::new(vec![
            lit(false, "Missile", vec![Term::var("x")]),
            lit(true, "Weapon", vec![Term::var("x")]),
        ]);
        assert!(rule.is_horn() && rule.is_definite() && rule.is_implication_definite());
        assert!(!rule.is_unit() && !rule.is_fact());
        assert_eq!(
            rule.to_implication().map(|s| s.to_string()),
            Some("(Missile(x) => Weapon(x))".to_string())
        );

        let goal = Clause::new(vec![lit(false, "Weapon", vec![Term::constant("M1")])]);
        assert!(goal.is_horn() && !goal.is_definite());

        let disjunction = Clause::new(vec![
            lit(true, "Kills", vec![Term::constant("Jack"), Term::constant("Tuna")]),
            lit(true, "Kills", vec![Term::constant("Curiosity"), Term::constant("Tuna")]),
        ]);
        assert!(!disjunction.is_horn() && !disjunction.is_definite());

        let empty = Clause::empty();
        assert!(empty.is_empty() && !empty.is_horn());
        assert_eq!(empty.to_string(), "False");
    }

    #[test]
    fn test_tautology() {
        let p = lit(true, "P", vec![Term::var("x")]);
        let taut = Clause::new(vec![p.clone(), p.negated()]);
        assert!(taut.is_tautology());
        let not_taut = Clause::new(vec![p, lit(false, "P", vec![Term::var("y")])]);
        assert!(!not_taut.is_tautology());
    }
}
