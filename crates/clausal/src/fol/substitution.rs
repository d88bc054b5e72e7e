//! Variable substitutions

use super::clause::Clause;
use super::literal::Literal;
use super::sentence::{AtomicSentence, Sentence};
use super::term::{Term, Variable};
use indexmap::IndexMap;
use std::fmt;

/// A substitution mapping variables to terms
///
/// Bindings iterate in insertion order so proof text is reproducible.
/// Equality ignores that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    pub map: IndexMap<Variable, Term>,
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            map: IndexMap::new(),
        }
    }

    /// Build from (variable, term) pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Variable, Term)>) -> Self {
        Substitution {
            map: pairs.into_iter().collect(),
        }
    }

    /// Add a variable -> term mapping
    pub fn insert(&mut self, var: Variable, term: Term) {
        self.map.insert(var, term);
    }

    /// Add a variable -> term mapping with eager substitution propagation
    ///
    /// The new term is normalized against the existing bindings, then the
    /// new binding is applied to every existing value, so the result stays
    /// idempotent.
    pub fn insert_normalized(&mut self, var: Variable, term: Term) {
        let normalized = term.apply_substitution(self);
        let single = Substitution::from_pairs([(var.clone(), normalized.clone())]);
        for value in self.map.values_mut() {
            *value = value.apply_substitution(&single);
        }
        self.map.insert(var, normalized);
    }

    /// Compose two substitutions: `self` first, then `other`
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut result = Substitution::new();

        // Apply other to all terms in self
        for (var, term) in &self.map {
            result.insert(var.clone(), term.apply_substitution(other));
        }

        // Add mappings from other that aren't in self
        for (var, term) in &other.map {
            if !self.map.contains_key(var) {
                result.insert(var.clone(), term.clone());
            }
        }

        result
    }

    /// Get the term for a variable, if bound
    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.map.get(var)
    }

    /// Check if a variable is bound
    pub fn contains(&self, var: &Variable) -> bool {
        self.map.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.map.iter()
    }

    /// Keep only the bindings of `vars`
    pub fn restrict<'a>(&self, vars: impl IntoIterator<Item = &'a Variable>) -> Substitution {
        Substitution::from_pairs(
            vars.into_iter()
                .filter_map(|v| self.map.get(v).map(|t| (v.clone(), t.clone()))),
        )
    }

    /// Every binding maps to a variable and no two bindings share a target
    pub fn is_renaming(&self) -> bool {
        let mut targets = indexmap::IndexSet::new();
        self.map
            .values()
            .all(|t| matches!(t, Term::Variable(v) if targets.insert(v.clone())))
    }

    /// Invert a renaming; `None` if this is not a renaming
    pub fn inverse_renaming(&self) -> Option<Substitution> {
        if !self.is_renaming() {
            return None;
        }
        Some(Substitution::from_pairs(self.map.iter().filter_map(|(k, v)| {
            v.as_variable().map(|w| (w.clone(), Term::Variable(k.clone())))
        })))
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, term)) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}/{}", var, term)?;
        }
        write!(f, "}}")
    }
}

impl Term {
    /// Apply a substitution to this term
    pub fn apply_substitution(&self, subst: &Substitution) -> Term {
        match self {
            Term::Variable(v) => subst.map.get(v).cloned().unwrap_or_else(|| self.clone()),
            Term::Constant(_) => self.clone(),
            Term::Function(f, args) => {
                let new_args = args
                    .iter()
                    .map(|arg| arg.apply_substitution(subst))
                    .collect();
                Term::Function(f.clone(), new_args)
            }
        }
    }
}

impl AtomicSentence {
    /// Apply a substitution to this atom
    pub fn apply_substitution(&self, subst: &Substitution) -> AtomicSentence {
        self.map_terms(|t| t.apply_substitution(subst))
    }
}

impl Literal {
    /// Apply a substitution to this literal
    pub fn apply_substitution(&self, subst: &Substitution) -> Literal {
        Literal::new(self.atom().apply_substitution(subst), self.is_positive())
    }
}

impl Clause {
    /// Apply a substitution to this clause
    ///
    /// The result has no provenance; literals that become identical collapse.
    pub fn apply_substitution(&self, subst: &Substitution) -> Clause {
        Clause::new(self.literals().iter().map(|lit| lit.apply_substitution(subst)))
    }
}

impl Sentence {
    /// Apply a substitution to this sentence
    ///
    /// Quantified variables are rewritten only when they are renamed to
    /// another variable; a variable bound to any other term leaves the
    /// quantifier list, and a quantifier left with no variables disappears.
    pub fn apply_substitution(&self, subst: &Substitution) -> Sentence {
        match self {
            Sentence::Atomic(atom) => Sentence::Atomic(atom.apply_substitution(subst)),
            Sentence::Not(s) => Sentence::not(s.apply_substitution(subst)),
            Sentence::And(l, r) => {
                Sentence::and(l.apply_substitution(subst), r.apply_substitution(subst))
            }
            Sentence::Or(l, r) => {
                Sentence::or(l.apply_substitution(subst), r.apply_substitution(subst))
            }
            Sentence::Implies(l, r) => {
                Sentence::implies(l.apply_substitution(subst), r.apply_substitution(subst))
            }
            Sentence::Iff(l, r) => {
                Sentence::iff(l.apply_substitution(subst), r.apply_substitution(subst))
            }
            Sentence::Quantified(q, vars, body) => {
                let body = body.apply_substitution(subst);
                let vars: Vec<Variable> = vars
                    .iter()
                    .filter_map(|v| match subst.get(v) {
                        None => Some(v.clone()),
                        Some(Term::Variable(renamed)) => Some(renamed.clone()),
                        Some(_) => None,
                    })
                    .collect();
                if vars.is_empty() {
                    body
                } else {
                    Sentence::Quantified(*q, vars, Box::new(body))
                }
            }
        }
    }
}
