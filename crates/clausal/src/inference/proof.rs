//! Proof tracking structures
//!
//! Every derived clause points at the [`ProofStep`] that produced it, and
//! each step points at its predecessors. Steps are created only after their
//! predecessors exist, so the graph is acyclic. A [`Proof`] is the graph
//! below one final step (the empty clause, or an answer clause).

use super::derivation::Derivation;
use crate::error::{ClausalError, Result};
use crate::fol::{Clause, Literal, Substitution};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::sync::Arc;

/// A single step in a proof derivation. Every step produces a clause.
pub struct ProofStep {
    /// Clause produced by this step, without its own provenance link
    pub conclusion: Clause,
    pub derivation: Derivation,
    pub premises: Vec<Arc<ProofStep>>,
}

impl ProofStep {
    pub fn new(conclusion: &Clause, derivation: Derivation, premises: Vec<Arc<ProofStep>>) -> Arc<Self> {
        Arc::new(ProofStep {
            conclusion: conclusion.without_proof(),
            derivation,
            premises,
        })
    }

    /// The step that produced `clause`; clauses built by hand count as premises
    pub fn of(clause: &Clause) -> Arc<ProofStep> {
        match clause.proof() {
            Some(step) => Arc::clone(step),
            None => ProofStep::new(clause, Derivation::Premise, Vec::new()),
        }
    }
}

impl fmt::Debug for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProofStep")
            .field("conclusion", &format_args!("{}", self.conclusion))
            .field("rule", &self.derivation.rule_name())
            .field("premises", &self.premises.len())
            .finish()
    }
}

/// Attach a fresh proof step to `clause`
pub fn derive(clause: Clause, derivation: Derivation, premises: Vec<Arc<ProofStep>>) -> Clause {
    let step = ProofStep::new(&clause, derivation, premises);
    clause.with_proof(step)
}

/// One rendered line of a proof
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofLine {
    pub step: usize,
    pub formula: String,
    pub justification: String,
    pub premises: Vec<usize>,
}

/// A proof rooted at its final step
#[derive(Debug, Clone)]
pub struct Proof {
    root: Arc<ProofStep>,
    bindings: Substitution,
    /// Bindings of a disjunctive answer, one per `$answer` literal of the root
    alternatives: Vec<Substitution>,
}

impl Proof {
    pub fn new(root: Arc<ProofStep>, bindings: Substitution) -> Self {
        Proof {
            root,
            bindings,
            alternatives: Vec::new(),
        }
    }

    /// A proof that at least one of `alternatives` answers the query
    pub fn disjunctive(root: Arc<ProofStep>, alternatives: Vec<Substitution>) -> Self {
        Proof {
            root,
            bindings: Substitution::new(),
            alternatives,
        }
    }

    pub fn root(&self) -> &Arc<ProofStep> {
        &self.root
    }

    /// Query variables and the terms that answer them; empty for ground queries
    /// and for disjunctive answers
    pub fn answer_bindings(&self) -> &Substitution {
        &self.bindings
    }

    /// Bindings of which at least one answers the query; empty unless disjunctive
    pub fn answer_alternatives(&self) -> &[Substitution] {
        &self.alternatives
    }

    pub fn is_disjunctive(&self) -> bool {
        !self.alternatives.is_empty()
    }

    /// Distinct steps, predecessors before the steps that use them
    pub fn ordered_steps(&self) -> Vec<Arc<ProofStep>> {
        fn visit(step: &Arc<ProofStep>, order: &mut IndexMap<usize, Arc<ProofStep>>) {
            let key = Arc::as_ptr(step) as usize;
            if order.contains_key(&key) {
                return;
            }
            for premise in &step.premises {
                visit(premise, order);
            }
            order.insert(key, Arc::clone(step));
        }

        let mut order = IndexMap::new();
        visit(&self.root, &mut order);
        order.into_values().collect()
    }

    /// Numbered lines, starting at 1
    pub fn steps(&self) -> Vec<ProofLine> {
        let ordered = self.ordered_steps();
        let numbers: IndexMap<usize, usize> = ordered
            .iter()
            .enumerate()
            .map(|(i, s)| (Arc::as_ptr(s) as usize, i + 1))
            .collect();

        ordered
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let premises: Vec<usize> = step
                    .premises
                    .iter()
                    .filter_map(|p| numbers.get(&(Arc::as_ptr(p) as usize)).copied())
                    .collect();
                ProofLine {
                    step: i + 1,
                    formula: step.conclusion.to_string(),
                    justification: step.derivation.justification(&premises),
                    premises,
                }
            })
            .collect()
    }

    /// Longest chain of inferences from an input clause to the root
    ///
    /// Renaming steps are not counted.
    pub fn depth(&self) -> usize {
        fn depth_of(step: &Arc<ProofStep>, memo: &mut IndexMap<usize, usize>) -> usize {
            let key = Arc::as_ptr(step) as usize;
            if let Some(&d) = memo.get(&key) {
                return d;
            }
            let below = step
                .premises
                .iter()
                .map(|p| depth_of(p, memo))
                .max()
                .unwrap_or(0);
            let d = match step.derivation {
                _ if step.derivation.is_input() => 0,
                Derivation::Renaming { .. } => below,
                _ => below + 1,
            };
            memo.insert(key, d);
            d
        }
        depth_of(&self.root, &mut IndexMap::new())
    }

    /// Input clauses used by the proof, in step order
    pub fn premises(&self) -> Vec<Clause> {
        let inputs: IndexSet<Clause> = self
            .ordered_steps()
            .iter()
            .filter(|s| s.derivation.is_input())
            .map(|s| s.conclusion.clone())
            .collect();
        inputs.into_iter().collect()
    }

    /// Re-check every step against the substitutions it records
    pub fn verify(&self) -> Result<()> {
        for (i, step) in self.ordered_steps().iter().enumerate() {
            check_step(step).map_err(|reason| ClausalError::InvalidProof {
                step: i + 1,
                reason,
            })?;
        }
        Ok(())
    }
}

fn check_step(step: &ProofStep) -> std::result::Result<(), String> {
    let premises = &step.premises;
    let expect_premises = |n: usize| {
        if premises.len() == n {
            Ok(())
        } else {
            Err(format!(
                "{} expects {} predecessors, found {}",
                step.derivation.rule_name(),
                n,
                premises.len()
            ))
        }
    };

    match &step.derivation {
        Derivation::Premise | Derivation::Goal | Derivation::Axiom { .. } => expect_premises(0),

        Derivation::Renaming { renaming } => {
            expect_premises(1)?;
            if !renaming.is_renaming() {
                return Err(format!("{} is not a renaming", renaming));
            }
            expect_conclusion(step, premises[0].conclusion.apply_substitution(renaming))
        }

        Derivation::Factor { unifier } => {
            expect_premises(1)?;
            let parent = &premises[0].conclusion;
            let factor = parent.apply_substitution(unifier);
            if factor.len() >= parent.len() {
                return Err("factor does not merge any literals".to_string());
            }
            expect_conclusion(step, factor)
        }

        Derivation::BinaryResolvent {
            resolved,
            unifier,
            renaming,
        } => {
            expect_premises(2)?;
            let (left, right) = (&premises[0].conclusion, &premises[1].conclusion);
            if !left.contains(resolved) {
                return Err(format!("{} is not a literal of {}", resolved, left));
            }
            let target = resolved.atom().apply_substitution(unifier);
            let found = right
                .literals()
                .iter()
                .filter(|l| l.is_positive() != resolved.is_positive())
                .filter(|l| l.atom().apply_substitution(unifier) == target)
                .any(|partner| {
                    let resolvent = Clause::new(
                        left.literals()
                            .iter()
                            .filter(|l| *l != resolved)
                            .chain(right.literals().iter().filter(|l| *l != partner))
                            .cloned(),
                    );
                    resolvent
                        .apply_substitution(unifier)
                        .apply_substitution(renaming)
                        == step.conclusion
                });
            if found {
                Ok(())
            } else {
                Err(format!("no complementary pair of {} and {} yields {}", left, right, step.conclusion))
            }
        }

        Derivation::Paramodulation {
            equality,
            left_to_right,
            position,
            unifier,
            renaming,
        } => {
            expect_premises(2)?;
            let (source, into) = (&premises[0].conclusion, &premises[1].conclusion);
            if !equality.is_positive() || !source.contains(equality) {
                return Err(format!("{} is not a positive literal of {}", equality, source));
            }
            let args = equality.atom().arguments();
            if !equality.atom().is_equality() {
                return Err(format!("{} is not an equality", equality));
            }
            let (from, to) = if *left_to_right {
                (args[0], args[1])
            } else {
                (args[1], args[0])
            };
            let subterm = position
                .resolve(into)
                .ok_or_else(|| format!("position {} not in {}", position, into))?;
            if subterm.apply_substitution(unifier) != from.apply_substitution(unifier) {
                return Err(format!("{} does not unify {} with {}", unifier, subterm, from));
            }
            let rewritten = rewrite_literal(into, position, to)
                .ok_or_else(|| format!("cannot rewrite {} at {}", into, position))?;
            let result = Clause::new(
                source
                    .literals()
                    .iter()
                    .filter(|l| *l != equality)
                    .cloned()
                    .chain(rewritten),
            );
            expect_conclusion(
                step,
                result.apply_substitution(unifier).apply_substitution(renaming),
            )
        }
    }
}

/// Literals of `clause` with the subterm at `position` replaced by `replacement`
pub(crate) fn rewrite_literal(
    clause: &Clause,
    position: &crate::fol::Position,
    replacement: &crate::fol::Term,
) -> Option<Vec<Literal>> {
    let mut literals: Vec<Literal> = clause.literals().iter().cloned().collect();
    let target = literals.get(position.literal)?;
    let atom = target
        .atom()
        .replace_at(position.argument, &position.path, replacement)?;
    literals[position.literal] = Literal::new(atom, target.is_positive());
    Some(literals)
}

fn expect_conclusion(step: &ProofStep, expected: Clause) -> std::result::Result<(), String> {
    if expected == step.conclusion {
        Ok(())
    } else {
        Err(format!("expected {}, recorded {}", expected, step.conclusion))
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.steps() {
            writeln!(f, "{:>4}. {}  [{}]", line.step, line.formula, line.justification)?;
        }
        if !self.bindings.is_empty() {
            writeln!(f, "Answer: {}", self.bindings)?;
        }
        if self.is_disjunctive() {
            let alternatives: Vec<String> = self.alternatives.iter().map(|b| b.to_string()).collect();
            writeln!(f, "Answer: {}", alternatives.join(" or "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::{AtomicSentence, Term, Variable};

    fn lit(positive: bool, name: &str, arg: Term) -> Literal {
        Literal::new(AtomicSentence::predicate(name, vec![arg]), positive)
    }

    /// Missile(M1), ~Missile(x) | Weapon(x), ~Weapon(M1) resolved by hand
    fn missile_proof() -> Proof {
        let fact = derive(
            Clause::new(vec![lit(true, "Missile", Term::constant("M1"))]),
            Derivation::Premise,
            vec![],
        );
        let rule = derive(
            Clause::new(vec![
                lit(false, "Missile", Term::var("x")),
                lit(true, "Weapon", Term::var("x")),
            ]),
            Derivation::Premise,
            vec![],
        );
        let goal = derive(
            Clause::new(vec![lit(false, "Weapon", Term::constant("M1"))]),
            Derivation::Goal,
            vec![],
        );
        let unifier = Substitution::from_pairs([(Variable::new("x"), Term::constant("M1"))]);
        let weapon = derive(
            Clause::new(vec![lit(true, "Weapon", Term::constant("M1"))]),
            Derivation::BinaryResolvent {
                resolved: lit(true, "Missile", Term::constant("M1")),
                unifier,
                renaming: Substitution::new(),
            },
            vec![ProofStep::of(&fact), ProofStep::of(&rule)],
        );
        let empty = derive(
            Clause::empty(),
            Derivation::BinaryResolvent {
                resolved: lit(true, "Weapon", Term::constant("M1")),
                unifier: Substitution::new(),
                renaming: Substitution::new(),
            },
            vec![ProofStep::of(&weapon), ProofStep::of(&goal)],
        );
        Proof::new(ProofStep::of(&empty), Substitution::new())
    }

    #[test]
    fn test_steps_are_topological() {
        let proof = missile_proof();
        let lines = proof.steps();
        assert_eq!(lines.len(), 5);
        for line in &lines {
            assert!(line.premises.iter().all(|&p| p < line.step));
        }
        assert_eq!(lines[4].formula, "False");
        assert_eq!(lines[4].premises, vec![3, 4]);
        assert_eq!(lines[0].justification, "Premise");
        assert_eq!(lines[3].justification, "Goal (negated query)");
        assert_eq!(proof.depth(), 2);
        assert_eq!(proof.premises().len(), 3);
    }

    #[test]
    fn test_verify_accepts_valid_proof() {
        missile_proof().verify().unwrap();
    }

    #[test]
    fn test_verify_rejects_wrong_unifier() {
        let fact = Clause::new(vec![lit(true, "Missile", Term::constant("M1"))]);
        let rule = Clause::new(vec![
            lit(false, "Missile", Term::var("x")),
            lit(true, "Weapon", Term::var("x")),
        ]);
        let bogus = derive(
            Clause::new(vec![lit(true, "Weapon", Term::constant("M2"))]),
            Derivation::BinaryResolvent {
                resolved: lit(true, "Missile", Term::constant("M1")),
                unifier: Substitution::from_pairs([(Variable::new("x"), Term::constant("M1"))]),
                renaming: Substitution::new(),
            },
            vec![ProofStep::of(&fact), ProofStep::of(&rule)],
        );
        let proof = Proof::new(ProofStep::of(&bogus), Substitution::new());
        assert!(matches!(
            proof.verify(),
            Err(ClausalError::InvalidProof { step: 3, .. })
        ));
    }

    #[test]
    fn test_display_lists_every_step() {
        let text = missile_proof().to_string();
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().last().unwrap().starts_with("   5. False  [Resolution: 3, 4 on Weapon(M1)"));
    }

    #[test]
    fn test_display_disjunctive_answer() {
        let answer = Clause::new(vec![
            lit(true, "$answer", Term::constant("A")),
            lit(true, "$answer", Term::constant("B")),
        ]);
        let x = Variable::new("x");
        let proof = Proof::disjunctive(
            ProofStep::of(&answer),
            vec![
                Substitution::from_pairs([(x.clone(), Term::constant("A"))]),
                Substitution::from_pairs([(x, Term::constant("B"))]),
            ],
        );
        assert!(proof.is_disjunctive());
        assert!(proof.answer_bindings().is_empty());
        let text = proof.to_string();
        assert_eq!(text.lines().last(), Some("Answer: {x/A} or {x/B}"));
    }
}
