//! Knowledge base of clauses with resolution-based querying
//!
//! Sentences told to the knowledge base are converted to clause form and
//! stored once each; telling the same sentence twice adds nothing. A query
//! is negated and converted, and its clauses form the set of support of one
//! saturation run over the stored clauses. Asking never changes the
//! knowledge base.
//!
//! Queries with free variables are answered: `Likes(x, Ice)` is asked as
//! `~Likes(x,Ice) | $answer(x)` and every unit `$answer(t)` derived yields
//! the binding `x/t`. A derived `$answer(t1) | $answer(t2)` is a disjunctive
//! answer: one of the two bindings holds.

use crate::config::ProverConfig;
use crate::error::Result;
use crate::fol::{Clause, Literal, Sentence, Signature, Substitution, Term};
use crate::inference::{derive, Derivation};
use crate::normal_form::CnfConverter;
use crate::saturation::{Outcome, Saturation, SaturationStats, ANSWER_PREDICATE};
use crate::standardize::{standardize_apart_avoiding, Indexical};
use crate::unification::{match_literals, Unifier};
use indexmap::IndexSet;
use std::fmt;
use tracing::{debug, trace};

/// Prefix of variables renamed apart during fact lookup
const FETCH_PREFIX: &str = "f";

#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    sentences: Vec<Sentence>,
    clauses: IndexSet<Clause>,
    signature: Signature,
    converter: CnfConverter,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert `sentence` to clauses and store the new ones
    ///
    /// Returns the number of clauses added. A sentence that breaks the
    /// recorded signature is rejected and leaves the knowledge base as it was.
    pub fn tell(&mut self, sentence: &Sentence) -> Result<usize> {
        self.signature.check_sentence(sentence)?;
        let clauses = self.converter.convert(sentence);
        let added = self.store(clauses);
        trace!(sentence = %sentence, added, "tell");
        self.sentences.push(sentence.clone());
        Ok(added)
    }

    /// Tell each sentence in turn
    pub fn tell_all<'a>(&mut self, sentences: impl IntoIterator<Item = &'a Sentence>) -> Result<usize> {
        let mut added = 0;
        for sentence in sentences {
            added += self.tell(sentence)?;
        }
        Ok(added)
    }

    /// Store a clause directly; returns false if it was already present
    pub fn tell_clause(&mut self, clause: Clause) -> Result<bool> {
        if let Some(sentence) = clause_sentence(&clause) {
            self.signature.check_sentence(&sentence)?;
        }
        let added = self.store(vec![clause]) == 1;
        trace!(added, "tell clause");
        Ok(added)
    }

    fn store(&mut self, clauses: Vec<Clause>) -> usize {
        let mut added = 0;
        for clause in clauses {
            let clause = derive(clause.without_proof(), Derivation::Premise, Vec::new());
            if self.clauses.insert(clause) {
                added += 1;
            }
        }
        added
    }

    /// Decide whether `query` follows from the knowledge base
    pub fn ask(&self, query: &Sentence, config: &ProverConfig) -> Result<Outcome> {
        self.ask_with_stats(query, config).map(|(outcome, _)| outcome)
    }

    /// Like [`ask`](Self::ask), also returning the saturation counters
    pub fn ask_with_stats(
        &self,
        query: &Sentence,
        config: &ProverConfig,
    ) -> Result<(Outcome, SaturationStats)> {
        config.validate()?;
        self.signature.clone().check_sentence(query)?;

        let free: Vec<_> = query.free_variables().into_iter().collect();
        let negated = Sentence::not(query.clone());
        let goal = if free.is_empty() {
            negated
        } else {
            let answer = Sentence::predicate(
                ANSWER_PREDICATE,
                free.iter().cloned().map(Term::Variable).collect(),
            );
            Sentence::or(negated, answer)
        };

        // Query Skolem symbols come from a copy so repeated asks agree
        let mut converter = self.converter.clone();
        let goal_clauses: Vec<Clause> = converter
            .convert(&goal)
            .into_iter()
            .map(|c| derive(c, Derivation::Goal, Vec::new()))
            .collect();
        debug!(
            query = %query,
            goal_clauses = goal_clauses.len(),
            clauses = self.clauses.len(),
            "ask"
        );

        // The goal clauses form the set of support
        let mut saturation = Saturation::with_support(self.clauses.iter().cloned(), goal_clauses, config)
            .with_answer_variables(free);
        let outcome = saturation.run();
        Ok((outcome, saturation.stats().clone()))
    }

    /// Sentences in the order they were told
    pub fn original_sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn clauses(&self) -> &IndexSet<Clause> {
        &self.clauses
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn all_definite_clauses(&self) -> Vec<&Clause> {
        self.clauses.iter().filter(|c| c.is_definite()).collect()
    }

    /// Definite clauses with a body, read as `(N1 ∧ ... ∧ Nk) ⇒ P`
    pub fn all_definite_clause_implications(&self) -> Vec<Sentence> {
        self.clauses.iter().filter_map(Clause::to_implication).collect()
    }

    pub fn number_of_facts(&self) -> usize {
        let definite = self.clauses.iter().filter(|c| c.is_definite()).count();
        let implications = self
            .clauses
            .iter()
            .filter(|c| c.is_implication_definite())
            .count();
        definite - implications
    }

    pub fn number_of_rules(&self) -> usize {
        self.clauses.len() - self.number_of_facts()
    }

    /// Unifiers of `literal` with each stored unit clause
    ///
    /// Each result is restricted to the variables of `literal`; duplicates
    /// are dropped.
    pub fn fetch(&self, literal: &Literal) -> Vec<Substitution> {
        let unifier = Unifier::default();
        let avoid = literal.variables();
        let mut indexical = Indexical::new(FETCH_PREFIX);
        let mut results: Vec<Substitution> = Vec::new();

        for clause in self.clauses.iter().filter(|c| c.is_unit()) {
            let (renamed, _) = standardize_apart_avoiding(clause, &mut indexical, &avoid);
            let Some(fact) = renamed.literals().first() else {
                continue;
            };
            if fact.is_positive() != literal.is_positive() {
                continue;
            }
            if let Ok(mgu) = unifier.unify_literals(literal, fact) {
                let restricted = mgu.restrict(&avoid);
                if !results.contains(&restricted) {
                    results.push(restricted);
                }
            }
        }
        results
    }

    /// A stored unit clause is `literal` up to renaming of variables
    pub fn is_renaming(&self, literal: &Literal) -> bool {
        self.clauses
            .iter()
            .filter(|c| c.is_unit())
            .filter_map(|c| c.literals().first())
            .any(|stored| {
                let mut subst = Substitution::new();
                match_literals(stored, literal, &mut subst) && subst.is_renaming()
            })
    }

    /// Forget every sentence, clause and recorded symbol
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "{}", clause)?;
        }
        Ok(())
    }
}

/// Disjunction of a clause's literals; `None` for the empty clause
fn clause_sentence(clause: &Clause) -> Option<Sentence> {
    clause
        .literals()
        .iter()
        .map(|lit| {
            let atom = Sentence::Atomic(lit.atom().clone());
            if lit.is_positive() {
                atom
            } else {
                Sentence::not(atom)
            }
        })
        .reduce(Sentence::or)
}
