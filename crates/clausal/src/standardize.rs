//! Standardizing clauses apart
//!
//! Every proof session owns a [`RenamingContext`]. Variables introduced by
//! renaming are named `prefix + index` with indices issued in call order, so
//! a session replayed from a fresh context produces the same names.

use crate::fol::{Clause, Substitution, Term, Variable};
use indexmap::{IndexMap, IndexSet};

/// Fresh-name source for one variable prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexical {
    prefix: String,
    next: usize,
}

impl Indexical {
    pub fn new(prefix: impl Into<String>) -> Self {
        Indexical {
            prefix: prefix.into(),
            next: 0,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Yields 0, 1, 2, ... in call order
    pub fn next_index(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }

    /// Next variable whose name is not in `avoid`
    pub fn fresh_variable(&mut self, avoid: &IndexSet<Variable>) -> Variable {
        loop {
            let index = self.next_index();
            let candidate = Variable::new(format!("{}{}", self.prefix, index));
            if !avoid.contains(&candidate) {
                return candidate;
            }
        }
    }
}

/// Indexicals of one proof session, keyed by prefix
#[derive(Debug, Clone, Default)]
pub struct RenamingContext {
    indexicals: IndexMap<String, Indexical>,
}

impl RenamingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's indexical for `prefix`, created on first use
    pub fn indexical(&mut self, prefix: &str) -> &mut Indexical {
        self.indexicals
            .entry(prefix.to_string())
            .or_insert_with(|| Indexical::new(prefix))
    }

    /// Forget all issued indices
    pub fn reset(&mut self) {
        self.indexicals.clear();
    }
}

/// Rename every variable of `clause` to a fresh variable
///
/// Returns the renamed clause (without provenance) and the renaming used.
pub fn standardize_apart(clause: &Clause, indexical: &mut Indexical) -> (Clause, Substitution) {
    standardize_apart_avoiding(clause, indexical, &IndexSet::new())
}

/// Like [`standardize_apart`], also steering clear of the names in `avoid`
pub fn standardize_apart_avoiding(
    clause: &Clause,
    indexical: &mut Indexical,
    avoid: &IndexSet<Variable>,
) -> (Clause, Substitution) {
    let vars = clause.variables();
    let mut taken: IndexSet<Variable> = avoid.clone();
    taken.extend(vars.iter().cloned());

    let mut renaming = Substitution::new();
    for var in vars {
        let fresh = indexical.fresh_variable(&taken);
        taken.insert(fresh.clone());
        renaming.insert(var, Term::Variable(fresh));
    }
    (clause.apply_substitution(&renaming), renaming)
}
