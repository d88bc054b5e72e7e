//! Atomic and compound sentences
//!
//! `Sentence` is the tree handed to the knowledge base by callers (usually a
//! parser). The normal-form pipeline turns it into clauses.

use super::term::{Term, Variable};
use crate::error::{ClausalError, Result};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol used for term equality in signatures and display
pub const EQUALITY_SYMBOL: &str = "=";

/// An atomic sentence: a predicate application or an equality between terms
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtomicSentence {
    Predicate { name: String, args: Vec<Term> },
    TermEquality { left: Term, right: Term },
}

impl AtomicSentence {
    pub fn predicate(name: impl Into<String>, args: Vec<Term>) -> Self {
        AtomicSentence::Predicate {
            name: name.into(),
            args,
        }
    }

    pub fn equality(left: Term, right: Term) -> Self {
        AtomicSentence::TermEquality { left, right }
    }

    pub fn is_equality(&self) -> bool {
        matches!(self, AtomicSentence::TermEquality { .. })
    }

    /// Predicate name, or `=` for equalities
    pub fn symbol(&self) -> &str {
        match self {
            AtomicSentence::Predicate { name, .. } => name,
            AtomicSentence::TermEquality { .. } => EQUALITY_SYMBOL,
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            AtomicSentence::Predicate { args, .. } => args.len(),
            AtomicSentence::TermEquality { .. } => 2,
        }
    }

    /// Argument terms in order; an equality yields `[left, right]`
    pub fn arguments(&self) -> Vec<&Term> {
        match self {
            AtomicSentence::Predicate { args, .. } => args.iter().collect(),
            AtomicSentence::TermEquality { left, right } => vec![left, right],
        }
    }

    /// Rebuild this atom with every argument mapped through `f`
    pub fn map_terms(&self, mut f: impl FnMut(&Term) -> Term) -> AtomicSentence {
        match self {
            AtomicSentence::Predicate { name, args } => AtomicSentence::Predicate {
                name: name.clone(),
                args: args.iter().map(&mut f).collect(),
            },
            AtomicSentence::TermEquality { left, right } => AtomicSentence::TermEquality {
                left: f(left),
                right: f(right),
            },
        }
    }

    /// Get all variables in this atom, in order of first occurrence
    pub fn variables(&self) -> IndexSet<Variable> {
        let mut vars = IndexSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    pub fn collect_variables(&self, vars: &mut IndexSet<Variable>) {
        for arg in self.arguments() {
            arg.collect_variables(vars);
        }
    }

    /// Subterm at argument `arg`, following `path` inside it
    pub fn subterm_at(&self, arg: usize, path: &[usize]) -> Option<&Term> {
        self.arguments().get(arg)?.subterm_at(path)
    }

    /// Copy of this atom with the subterm at (`arg`, `path`) replaced
    pub fn replace_at(&self, arg: usize, path: &[usize], replacement: &Term) -> Option<Self> {
        let target = self.arguments().get(arg)?.replace_at(path, replacement)?;
        let mut index = 0;
        Some(self.map_terms(|t| {
            let mapped = if index == arg { target.clone() } else { t.clone() };
            index += 1;
            mapped
        }))
    }

    /// (argument index, path) of every non-variable subterm, in pre-order
    pub fn non_variable_positions(&self) -> Vec<(usize, Vec<usize>)> {
        self.arguments()
            .into_iter()
            .enumerate()
            .flat_map(|(i, arg)| arg.non_variable_paths().into_iter().map(move |p| (i, p)))
            .collect()
    }
}

/// Quantifier kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantifier {
    ForAll,
    Exists,
}

impl Quantifier {
    pub fn dual(self) -> Self {
        match self {
            Quantifier::ForAll => Quantifier::Exists,
            Quantifier::Exists => Quantifier::ForAll,
        }
    }
}

/// A first-order sentence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentence {
    Atomic(AtomicSentence),
    Not(Box<Sentence>),
    And(Box<Sentence>, Box<Sentence>),
    Or(Box<Sentence>, Box<Sentence>),
    Implies(Box<Sentence>, Box<Sentence>),
    Iff(Box<Sentence>, Box<Sentence>),
    Quantified(Quantifier, Vec<Variable>, Box<Sentence>),
}

impl Sentence {
    pub fn predicate(name: impl Into<String>, args: Vec<Term>) -> Self {
        Sentence::Atomic(AtomicSentence::predicate(name, args))
    }

    pub fn equality(left: Term, right: Term) -> Self {
        Sentence::Atomic(AtomicSentence::equality(left, right))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(sentence: Sentence) -> Self {
        Sentence::Not(Box::new(sentence))
    }

    pub fn and(left: Sentence, right: Sentence) -> Self {
        Sentence::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Sentence, right: Sentence) -> Self {
        Sentence::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(premise: Sentence, conclusion: Sentence) -> Self {
        Sentence::Implies(Box::new(premise), Box::new(conclusion))
    }

    pub fn iff(left: Sentence, right: Sentence) -> Self {
        Sentence::Iff(Box::new(left), Box::new(right))
    }

    pub fn forall(vars: &[&str], body: Sentence) -> Self {
        Sentence::Quantified(
            Quantifier::ForAll,
            vars.iter().map(|v| Variable::new(*v)).collect(),
            Box::new(body),
        )
    }

    pub fn exists(vars: &[&str], body: Sentence) -> Self {
        Sentence::Quantified(
            Quantifier::Exists,
            vars.iter().map(|v| Variable::new(*v)).collect(),
            Box::new(body),
        )
    }

    /// Left-nested conjunction of `sentences`; `None` when empty
    pub fn conjunction(sentences: impl IntoIterator<Item = Sentence>) -> Option<Self> {
        sentences.into_iter().reduce(Sentence::and)
    }

    /// Variables not bound by an enclosing quantifier, in order of first occurrence
    pub fn free_variables(&self) -> IndexSet<Variable> {
        let mut free = IndexSet::new();
        let mut bound = Vec::new();
        self.collect_free_variables(&mut bound, &mut free);
        free
    }

    fn collect_free_variables(&self, bound: &mut Vec<Variable>, free: &mut IndexSet<Variable>) {
        match self {
            Sentence::Atomic(atom) => {
                for v in atom.variables() {
                    if !bound.contains(&v) {
                        free.insert(v);
                    }
                }
            }
            Sentence::Not(s) => s.collect_free_variables(bound, free),
            Sentence::And(l, r)
            | Sentence::Or(l, r)
            | Sentence::Implies(l, r)
            | Sentence::Iff(l, r) => {
                l.collect_free_variables(bound, free);
                r.collect_free_variables(bound, free);
            }
            Sentence::Quantified(_, vars, body) => {
                let depth = bound.len();
                bound.extend(vars.iter().cloned());
                body.collect_free_variables(bound, free);
                bound.truncate(depth);
            }
        }
    }

    /// Every atomic sentence, left to right
    pub fn atoms(&self) -> Vec<&AtomicSentence> {
        let mut atoms = Vec::new();
        let mut stack = vec![self];
        while let Some(s) = stack.pop() {
            match s {
                Sentence::Atomic(atom) => atoms.push(atom),
                Sentence::Not(inner) | Sentence::Quantified(_, _, inner) => stack.push(inner),
                Sentence::And(l, r)
                | Sentence::Or(l, r)
                | Sentence::Implies(l, r)
                | Sentence::Iff(l, r) => {
                    stack.push(r);
                    stack.push(l);
                }
            }
        }
        atoms
    }
}

/// Arity of every predicate and function symbol seen so far
///
/// A sentence that reuses a symbol with a different arity, or a function
/// term whose recorded arity disagrees with its argument list, is rejected.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    predicates: IndexMap<String, usize>,
    functions: IndexMap<String, usize>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `sentence` and record its symbols
    ///
    /// The signature is left untouched if the sentence is rejected.
    pub fn check_sentence(&mut self, sentence: &Sentence) -> Result<()> {
        let mut scratch = self.clone();
        scratch.check_structure(sentence)?;
        for atom in sentence.atoms() {
            scratch.check_atom(atom)?;
        }
        *self = scratch;
        Ok(())
    }

    pub fn predicate_arity(&self, name: &str) -> Option<usize> {
        self.predicates.get(name).copied()
    }

    pub fn function_arity(&self, name: &str) -> Option<usize> {
        self.functions.get(name).copied()
    }

    pub fn clear(&mut self) {
        self.predicates.clear();
        self.functions.clear();
    }

    fn check_structure(&self, sentence: &Sentence) -> Result<()> {
        let mut stack = vec![sentence];
        while let Some(s) = stack.pop() {
            match s {
                Sentence::Atomic(_) => {}
                Sentence::Not(inner) => stack.push(inner),
                Sentence::And(l, r)
                | Sentence::Or(l, r)
                | Sentence::Implies(l, r)
                | Sentence::Iff(l, r) => {
                    stack.push(r);
                    stack.push(l);
                }
                Sentence::Quantified(_, vars, body) => {
                    if vars.is_empty() {
                        return Err(ClausalError::MalformedSentence(format!(
                            "quantifier without variables in {}",
                            s
                        )));
                    }
                    stack.push(body);
                }
            }
        }
        Ok(())
    }

    fn check_atom(&mut self, atom: &AtomicSentence) -> Result<()> {
        if let AtomicSentence::Predicate { name, args } = atom {
            record(&mut self.predicates, "predicate", name, args.len())?;
        }
        for arg in atom.arguments() {
            self.check_term(arg)?;
        }
        Ok(())
    }

    fn check_term(&mut self, term: &Term) -> Result<()> {
        if let Term::Function(f, args) = term {
            if f.arity != args.len() {
                return Err(ClausalError::MalformedSentence(format!(
                    "function {} declared with arity {} applied to {} arguments",
                    f.name,
                    f.arity,
                    args.len()
                )));
            }
            record(&mut self.functions, "function", &f.name, f.arity)?;
            for arg in args {
                self.check_term(arg)?;
            }
        }
        Ok(())
    }
}

fn record(table: &mut IndexMap<String, usize>, kind: &str, name: &str, arity: usize) -> Result<()> {
    match table.get(name) {
        Some(&known) if known != arity => Err(ClausalError::MalformedSentence(format!(
            "{} {} used with arity {} and {}",
            kind, name, known, arity
        ))),
        Some(_) => Ok(()),
        None => {
            table.insert(name.to_string(), arity);
            Ok(())
        }
    }
}

impl fmt::Display for AtomicSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomicSentence::Predicate { name, args } => {
                write!(f, "{}", name)?;
                if !args.is_empty() {
                    write!(f, "(")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ")")?;
                }
                Ok(())
            }
            AtomicSentence::TermEquality { left, right } => write!(f, "{} = {}", left, right),
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::ForAll => write!(f, "FORALL"),
            Quantifier::Exists => write!(f, "EXISTS"),
        }
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentence::Atomic(atom) => write!(f, "{}", atom),
            Sentence::Not(inner) => write!(f, "~{}", inner),
            Sentence::And(l, r) => write!(f, "({} & {})", l, r),
            Sentence::Or(l, r) => write!(f, "({} | {})", l, r),
            Sentence::Implies(l, r) => write!(f, "({} => {})", l, r),
            Sentence::Iff(l, r) => write!(f, "({} <=> {})", l, r),
            Sentence::Quantified(q, vars, body) => {
                let names: Vec<&str> = vars.iter().map(|v| v.name.as_str()).collect();
                write!(f, "{} {} {}", q, names.join(","), body)
            }
        }
    }
}
