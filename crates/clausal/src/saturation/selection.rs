//! Given-clause selection
//!
//! Alternates between the oldest waiting clause and the lightest one. The
//! lightest pick finds short proofs quickly, the oldest pick keeps every
//! waiting clause reachable.

use crate::fol::{Clause, Term};
use indexmap::IndexSet;

/// Symbol count: one per predicate or equality sign, plus the weights of its arguments
pub fn clause_weight(clause: &Clause) -> usize {
    clause
        .literals()
        .iter()
        .map(|lit| 1 + lit.atom().arguments().into_iter().map(term_weight).sum::<usize>())
        .sum()
}

fn term_weight(term: &Term) -> usize {
    match term {
        Term::Variable(_) | Term::Constant(_) => 1,
        Term::Function(_, args) => 1 + args.iter().map(term_weight).sum::<usize>(),
    }
}

/// Picks every `ratio`-th given clause by age and the others by weight
#[derive(Debug, Clone)]
pub struct AgeWeightSelector {
    /// 0 selects by weight only
    ratio: usize,
    picks: usize,
}

impl AgeWeightSelector {
    pub fn new(ratio: usize) -> Self {
        AgeWeightSelector { ratio, picks: 0 }
    }

    /// Remove and return the next given clause from `passive`
    ///
    /// `passive` is kept in queueing order and `weights` is indexed by
    /// clause id. Ties in weight go to the clause queued first.
    pub fn select(&mut self, passive: &mut IndexSet<usize>, weights: &[usize]) -> Option<usize> {
        if passive.is_empty() {
            return None;
        }
        self.picks += 1;

        if self.ratio > 0 && self.picks % self.ratio == 0 {
            passive.shift_remove_index(0)
        } else {
            let lightest = passive
                .iter()
                .enumerate()
                .min_by_key(|(_, &id)| weights.get(id).copied().unwrap_or(usize::MAX))
                .map(|(position, _)| position)?;
            passive.shift_remove_index(lightest)
        }
    }
}
