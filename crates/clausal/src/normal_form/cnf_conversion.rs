//! Conversion from sentences to clause form
//!
//! The pipeline runs in a fixed order:
//! 1. eliminate `⇔` and `⇒`
//! 2. negation normal form
//! 3. rename quantified variables so no two quantifiers share a name
//! 4. skolemize existentials
//! 5. drop universal quantifiers
//! 6. distribute `∨` over `∧`
//! 7. extract clauses
//!
//! Free variables are read as universally quantified at the outermost scope.

use super::nnf::{eliminate_implications, to_nnf};
use crate::fol::{Clause, Literal, Quantifier, Sentence, Substitution, Term, Variable};
use crate::standardize::Indexical;
use indexmap::{IndexMap, IndexSet};

/// Prefix of Skolem constants
pub const SKOLEM_CONSTANT_PREFIX: &str = "SC";
/// Prefix of Skolem functions
pub const SKOLEM_FUNCTION_PREFIX: &str = "SF";
/// Prefix of variables renamed while standardizing quantifiers
pub const QUANTIFIED_VARIABLE_PREFIX: &str = "q";

/// Sentence to clause converter
///
/// Skolem symbols are numbered by a counter that lives as long as the
/// converter, so sentences converted by the same converter never share a
/// Skolem symbol.
#[derive(Debug, Clone, Default)]
pub struct CnfConverter {
    skolem_counter: usize,
}

impl CnfConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of Skolem symbols issued so far
    pub fn skolem_count(&self) -> usize {
        self.skolem_counter
    }

    /// Run the full pipeline
    pub fn convert(&mut self, sentence: &Sentence) -> Vec<Clause> {
        let sentence = eliminate_implications(sentence);
        let sentence = to_nnf(&sentence);
        let sentence = standardize_quantified_variables(&sentence);
        let sentence = self.skolemize(&sentence);
        let sentence = drop_universal_quantifiers(&sentence);
        let sentence = distribute_or_over_and(&sentence);
        extract_clauses(&sentence)
    }

    /// Replace existentials by Skolem constants or functions
    ///
    /// Expects negation normal form.
    pub fn skolemize(&mut self, sentence: &Sentence) -> Sentence {
        let mut universal_vars: Vec<Variable> = sentence.free_variables().into_iter().collect();
        self.skolemize_with(sentence, &mut universal_vars)
    }

    fn skolemize_with(&mut self, sentence: &Sentence, universal_vars: &mut Vec<Variable>) -> Sentence {
        match sentence {
            Sentence::Atomic(_) | Sentence::Not(_) => sentence.clone(),
            Sentence::And(l, r) => Sentence::and(
                self.skolemize_with(l, universal_vars),
                self.skolemize_with(r, universal_vars),
            ),
            Sentence::Or(l, r) => Sentence::or(
                self.skolemize_with(l, universal_vars),
                self.skolemize_with(r, universal_vars),
            ),
            Sentence::Quantified(Quantifier::ForAll, vars, body) => {
                let depth = universal_vars.len();
                universal_vars.extend(vars.iter().cloned());
                let body = self.skolemize_with(body, universal_vars);
                universal_vars.truncate(depth);
                Sentence::Quantified(Quantifier::ForAll, vars.clone(), Box::new(body))
            }
            Sentence::Quantified(Quantifier::Exists, vars, body) => {
                let mut subst = Substitution::new();
                for var in vars {
                    subst.insert(var.clone(), self.skolem_term(universal_vars));
                }
                let body = body.apply_substitution(&subst);
                self.skolemize_with(&body, universal_vars)
            }
            Sentence::Implies(_, _) | Sentence::Iff(_, _) => {
                panic!("Implications should be eliminated before skolemization")
            }
        }
    }

    fn skolem_term(&mut self, universal_vars: &[Variable]) -> Term {
        let index = self.skolem_counter;
        self.skolem_counter += 1;
        if universal_vars.is_empty() {
            Term::constant(format!("{}{}", SKOLEM_CONSTANT_PREFIX, index))
        } else {
            Term::function(
                format!("{}{}", SKOLEM_FUNCTION_PREFIX, index),
                universal_vars.iter().cloned().map(Term::Variable).collect(),
            )
        }
    }
}

/// Convert a single sentence with a throwaway converter
pub fn to_clauses(sentence: &Sentence) -> Vec<Clause> {
    CnfConverter::new().convert(sentence)
}

/// Rename bound variables so that no two quantifiers bind the same name
///
/// Free variables count as taken. The first quantifier to bind a name keeps
/// it; later ones receive fresh `q<n>` names.
pub fn standardize_quantified_variables(sentence: &Sentence) -> Sentence {
    let mut all_vars = sentence.free_variables();
    collect_bound_variables(sentence, &mut all_vars);
    let mut taken = all_vars.clone();
    let mut seen = sentence.free_variables();
    let mut indexical = Indexical::new(QUANTIFIED_VARIABLE_PREFIX);
    let mut scope = IndexMap::new();
    rename_bound(sentence, &mut seen, &mut taken, &mut indexical, &mut scope)
}

fn collect_bound_variables(sentence: &Sentence, vars: &mut IndexSet<Variable>) {
    match sentence {
        Sentence::Atomic(atom) => atom.collect_variables(vars),
        Sentence::Not(s) => collect_bound_variables(s, vars),
        Sentence::And(l, r) | Sentence::Or(l, r) | Sentence::Implies(l, r) | Sentence::Iff(l, r) => {
            collect_bound_variables(l, vars);
            collect_bound_variables(r, vars);
        }
        Sentence::Quantified(_, bound, body) => {
            vars.extend(bound.iter().cloned());
            collect_bound_variables(body, vars);
        }
    }
}

fn rename_bound(
    sentence: &Sentence,
    seen: &mut IndexSet<Variable>,
    taken: &mut IndexSet<Variable>,
    indexical: &mut Indexical,
    scope: &mut IndexMap<Variable, Variable>,
) -> Sentence {
    match sentence {
        Sentence::Atomic(atom) => {
            let subst = Substitution::from_pairs(
                scope
                    .iter()
                    .filter(|(from, to)| from != to)
                    .map(|(from, to)| (from.clone(), Term::Variable(to.clone()))),
            );
            Sentence::Atomic(atom.apply_substitution(&subst))
        }
        Sentence::Not(s) => Sentence::not(rename_bound(s, seen, taken, indexical, scope)),
        Sentence::And(l, r) => Sentence::and(
            rename_bound(l, seen, taken, indexical, scope),
            rename_bound(r, seen, taken, indexical, scope),
        ),
        Sentence::Or(l, r) => Sentence::or(
            rename_bound(l, seen, taken, indexical, scope),
            rename_bound(r, seen, taken, indexical, scope),
        ),
        Sentence::Implies(l, r) => Sentence::implies(
            rename_bound(l, seen, taken, indexical, scope),
            rename_bound(r, seen, taken, indexical, scope),
        ),
        Sentence::Iff(l, r) => Sentence::iff(
            rename_bound(l, seen, taken, indexical, scope),
            rename_bound(r, seen, taken, indexical, scope),
        ),
        Sentence::Quantified(q, vars, body) => {
            let saved = scope.clone();
            let mut renamed = Vec::with_capacity(vars.len());
            for var in vars {
                let target = if seen.contains(var) {
                    let fresh = indexical.fresh_variable(taken);
                    taken.insert(fresh.clone());
                    fresh
                } else {
                    seen.insert(var.clone());
                    var.clone()
                };
                scope.insert(var.clone(), target.clone());
                renamed.push(target);
            }
            let body = rename_bound(body, seen, taken, indexical, scope);
            *scope = saved;
            Sentence::Quantified(*q, renamed, Box::new(body))
        }
    }
}

/// Strip universal quantifiers; expects a skolemized sentence
pub fn drop_universal_quantifiers(sentence: &Sentence) -> Sentence {
    match sentence {
        Sentence::Atomic(_) | Sentence::Not(_) => sentence.clone(),
        Sentence::And(l, r) => {
            Sentence::and(drop_universal_quantifiers(l), drop_universal_quantifiers(r))
        }
        Sentence::Or(l, r) => {
            Sentence::or(drop_universal_quantifiers(l), drop_universal_quantifiers(r))
        }
        Sentence::Quantified(Quantifier::ForAll, _, body) => drop_universal_quantifiers(body),
        Sentence::Quantified(Quantifier::Exists, _, _) => {
            panic!("Existential quantifiers should be removed by skolemization")
        }
        Sentence::Implies(_, _) | Sentence::Iff(_, _) => {
            panic!("Implications should be eliminated before dropping quantifiers")
        }
    }
}

/// Distribute `∨` over `∧` until the sentence is a conjunction of disjunctions
pub fn distribute_or_over_and(sentence: &Sentence) -> Sentence {
    match sentence {
        Sentence::And(l, r) => Sentence::and(distribute_or_over_and(l), distribute_or_over_and(r)),
        Sentence::Or(l, r) => distribute_pair(distribute_or_over_and(l), distribute_or_over_and(r)),
        Sentence::Atomic(_) | Sentence::Not(_) => sentence.clone(),
        _ => panic!("Quantifiers and implications should be gone before distribution: {}", sentence),
    }
}

/// `l ∨ r` for `l` and `r` already in CNF
fn distribute_pair(l: Sentence, r: Sentence) -> Sentence {
    match (l, r) {
        // (A & B) | C => (A | C) & (B | C)
        (Sentence::And(a, b), r) => {
            Sentence::and(distribute_pair(*a, r.clone()), distribute_pair(*b, r))
        }
        // C | (A & B) => (C | A) & (C | B)
        (l, Sentence::And(a, b)) => {
            Sentence::and(distribute_pair(l.clone(), *a), distribute_pair(l, *b))
        }
        (l, r) => Sentence::or(l, r),
    }
}

/// Flatten a CNF sentence into clauses; tautologies are dropped
pub fn extract_clauses(sentence: &Sentence) -> Vec<Clause> {
    let mut conjuncts = Vec::new();
    let mut stack = vec![sentence];
    while let Some(s) = stack.pop() {
        match s {
            Sentence::And(l, r) => {
                stack.push(r);
                stack.push(l);
            }
            _ => conjuncts.push(s),
        }
    }

    let clauses: IndexSet<Clause> = conjuncts
        .into_iter()
        .map(|c| Clause::new(collect_literals(c)))
        .filter(|c| !c.is_tautology())
        .collect();
    clauses.into_iter().collect()
}

fn collect_literals(disjunction: &Sentence) -> Vec<Literal> {
    let mut stack = vec![disjunction];
    let mut literals = Vec::new();

    while let Some(s) = stack.pop() {
        match s {
            Sentence::Or(l, r) => {
                stack.push(r);
                stack.push(l);
            }
            Sentence::Atomic(atom) => literals.push(Literal::positive(atom.clone())),
            Sentence::Not(inner) => match &**inner {
                Sentence::Atomic(atom) => literals.push(Literal::negative(atom.clone())),
                _ => panic!("Negation of non-atom in CNF: {}", inner),
            },
            _ => panic!("Non-disjunctive sentence in clause: {}", s),
        }
    }

    literals
}
