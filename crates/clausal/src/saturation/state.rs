//! Saturation state and main loop
//!
//! ## Given-clause loop
//!
//! Kept clauses are either active or passive. Each iteration selects a
//! given clause from the passive set (see [`AgeWeightSelector`]), makes it
//! active and infers between it and every active clause, itself included.
//! A clause paired with itself is resolved against a renamed copy.
//!
//! ## Set of support
//!
//! [`Saturation::with_support`] starts the background clauses (the
//! knowledge base and the reflexivity axiom) as active and only the support
//! clauses (the negated query) as passive. Every inference then involves a
//! descendant of the query. Once the passive set runs dry, the background
//! clauses are queued as given clauses themselves, so only a search that
//! has also combined the background with itself reports saturation.
//!
//! ## Admission
//!
//! Every resolvent and paramodulant, and every factor of one, is checked in
//! this order:
//!
//! 1. the empty clause ends the search with a proof,
//! 2. an answer clause records an answer and is not kept,
//! 3. tautologies and duplicates are dropped,
//! 4. clauses subsumed by an active or passive clause are dropped,
//! 5. everything else becomes passive, and the active and passive clauses
//!    it subsumes are retired.
//!
//! Bounds on time, the number of kept clauses and the number of inferences
//! are polled before every pair.

use super::selection::{clause_weight, AgeWeightSelector};
use super::{Outcome, ResourceLimit, SaturationStats, ANSWER_PREDICATE};
use crate::config::ProverConfig;
use crate::fol::{AtomicSentence, Clause, Literal, Substitution, Variable};
use crate::inference::{
    binary_resolvents, derive, factors, paramodulants, reflexivity_literal, Derivation, Proof,
    ProofStep,
};
use crate::simplifying::{find_subsumed, is_subsumed_by_any, subsumes};
use crate::standardize::RenamingContext;
use crate::unification::Unifier;
use indexmap::IndexSet;
use std::time::Instant;
use tracing::{debug, info, trace, warn};

/// Prefix of variables introduced while renaming clauses apart
const RENAMING_PREFIX: &str = "c";

/// One resource-bounded proof attempt over a fixed set of input clauses
pub struct Saturation {
    /// Every clause kept so far; a clause's id is its index
    clauses: IndexSet<Clause>,
    /// Selection weight per clause id
    weights: Vec<usize>,
    active: IndexSet<usize>,
    /// Waiting clauses in queueing order
    passive: IndexSet<usize>,
    /// Background clauses not yet selected as given clauses
    pending_background: Vec<usize>,
    selector: AgeWeightSelector,
    config: ProverConfig,
    unifier: Unifier,
    renaming: RenamingContext,
    answer_variables: Vec<Variable>,
    answers: Vec<(Clause, Proof)>,
    stats: SaturationStats,
}

impl Saturation {
    /// Plain given-clause search with every input clause waiting for selection
    pub fn new(input: impl IntoIterator<Item = Clause>, config: &ProverConfig) -> Self {
        Self::with_support(Vec::new(), input, config)
    }

    /// Set-of-support search
    ///
    /// Tautologies are dropped and factors of the inputs added. The
    /// reflexivity axiom joins the background when paramodulation is on and
    /// equality occurs. Within each group, input clauses subsumed by other
    /// inputs are removed.
    pub fn with_support(
        background: impl IntoIterator<Item = Clause>,
        support: impl IntoIterator<Item = Clause>,
        config: &ProverConfig,
    ) -> Self {
        let unifier = config.unifier();
        let mut background = prepare(background, &unifier);
        let support = prepare(support, &unifier);

        let has_equality = background
            .iter()
            .chain(&support)
            .any(|c| c.literals().iter().any(|l| l.atom().is_equality()));
        if config.paramodulation && has_equality {
            let reflexivity = derive(
                Clause::new(vec![reflexivity_literal()]),
                Derivation::Axiom {
                    name: "reflexivity".to_string(),
                },
                Vec::new(),
            );
            if !background.contains(&reflexivity) {
                background.push(reflexivity);
            }
        }

        let (background, background_subsumed) = without_subsumed(background);
        let (support, support_subsumed) = without_subsumed(support);

        let mut saturation = Saturation {
            clauses: IndexSet::new(),
            weights: Vec::new(),
            active: IndexSet::new(),
            passive: IndexSet::new(),
            pending_background: Vec::new(),
            selector: AgeWeightSelector::new(config.age_weight_ratio),
            config: config.clone(),
            unifier,
            renaming: RenamingContext::new(),
            answer_variables: Vec::new(),
            answers: Vec::new(),
            stats: SaturationStats {
                subsumed: background_subsumed + support_subsumed,
                ..SaturationStats::default()
            },
        };
        for clause in background {
            if let Some(id) = saturation.insert(clause) {
                saturation.active.insert(id);
                saturation.pending_background.push(id);
            }
        }
        for clause in support {
            if let Some(id) = saturation.insert(clause) {
                saturation.passive.insert(id);
            }
        }
        saturation.stats.clauses = saturation.clauses.len();

        debug!(
            active = saturation.active.len(),
            passive = saturation.passive.len(),
            subsumed = saturation.stats.subsumed,
            "saturation initialized"
        );
        saturation
    }

    /// Collect answers for these query variables from `$answer` clauses
    pub fn with_answer_variables(mut self, variables: Vec<Variable>) -> Self {
        self.answer_variables = variables;
        self
    }

    /// Every clause kept so far, including those later retired by subsumption
    pub fn clauses(&self) -> &IndexSet<Clause> {
        &self.clauses
    }

    pub fn stats(&self) -> &SaturationStats {
        &self.stats
    }

    /// Run to a proof, saturation or a resource bound
    pub fn run(&mut self) -> Outcome {
        let start = Instant::now();
        let outcome = self.saturate(start);

        self.stats.elapsed = start.elapsed();
        self.stats.clauses = self.clauses.len();
        info!(
            outcome = outcome.status(),
            rounds = self.stats.rounds,
            clauses = self.stats.clauses,
            inferences = self.stats.inferences,
            subsumed = self.stats.subsumed,
            elapsed_ms = self.stats.elapsed.as_millis() as u64,
            "saturation finished"
        );
        outcome
    }

    fn saturate(&mut self, start: Instant) -> Outcome {
        if let Some(empty) = self.clauses.iter().find(|c| c.is_empty()) {
            return Outcome::Proved(vec![Proof::new(ProofStep::of(empty), Substitution::new())]);
        }

        loop {
            if let Some(limit) = self.exceeded(start) {
                return self.stop(limit);
            }
            let Some(given) = self.selector.select(&mut self.passive, &self.weights) else {
                if self.pending_background.is_empty() {
                    return self.saturated();
                }
                self.queue_background();
                continue;
            };

            self.active.insert(given);
            self.stats.rounds += 1;
            if let Some(outcome) = self.process(given, start) {
                return outcome;
            }
        }
    }

    /// Infer between `given` and every active clause, itself included
    fn process(&mut self, given: usize, start: Instant) -> Option<Outcome> {
        let kept_before = self.clauses.len();
        let subsumed_before = self.stats.subsumed;

        let partners: Vec<usize> = self.active.iter().copied().collect();
        for partner in partners {
            // Either side may have been retired by a clause derived meanwhile
            if !self.active.contains(&given) {
                break;
            }
            if !self.active.contains(&partner) {
                continue;
            }
            if let Some(limit) = self.exceeded(start) {
                return Some(self.stop(limit));
            }
            if let Some(outcome) = self.attempt_pair(given, partner) {
                return Some(outcome);
            }
        }

        debug!(
            round = self.stats.rounds,
            given,
            weight = self.weights.get(given).copied().unwrap_or_default(),
            new = self.clauses.len() - kept_before,
            subsumed = self.stats.subsumed - subsumed_before,
            active = self.active.len(),
            passive = self.passive.len(),
            "given clause processed"
        );
        None
    }

    /// Generate all inferences between the given clause and `partner`
    fn attempt_pair(&mut self, given: usize, partner: usize) -> Option<Outcome> {
        let (Some(left), Some(right)) = (
            self.clauses.get_index(given).cloned(),
            self.clauses.get_index(partner).cloned(),
        ) else {
            return None;
        };

        let indexical = self.renaming.indexical(RENAMING_PREFIX);
        let mut derived = binary_resolvents(&left, &right, &self.unifier, indexical);
        if self.config.paramodulation {
            let indexical = self.renaming.indexical(RENAMING_PREFIX);
            derived.extend(paramodulants(&left, &right, &self.unifier, indexical));
        }

        for clause in derived {
            let clause_factors = factors(&clause, &self.unifier);
            for candidate in std::iter::once(clause).chain(clause_factors) {
                self.stats.inferences += 1;
                if let Some(outcome) = self.admit(candidate) {
                    return Some(outcome);
                }
            }
        }
        None
    }

    fn admit(&mut self, candidate: Clause) -> Option<Outcome> {
        if candidate.is_empty() {
            let proof = Proof::new(ProofStep::of(&candidate), Substitution::new());
            return Some(Outcome::Proved(vec![proof]));
        }
        if self.is_answer_clause(&candidate) {
            return self.record_answer(candidate);
        }

        if candidate.is_tautology() || self.clauses.contains(&candidate) {
            return None;
        }
        if is_subsumed_by_any(&candidate, self.live_clauses()) {
            self.stats.subsumed += 1;
            return None;
        }

        trace!(clause = %candidate, "clause admitted");
        let id = self.insert(candidate)?;
        self.retire_subsumed_by(id);
        self.passive.insert(id);
        None
    }

    /// Store a new clause and return its id
    fn insert(&mut self, clause: Clause) -> Option<usize> {
        let weight = clause_weight(&clause);
        let (id, inserted) = self.clauses.insert_full(clause);
        if inserted {
            self.weights.push(weight);
            Some(id)
        } else {
            None
        }
    }

    fn live_clauses(&self) -> impl Iterator<Item = &Clause> {
        self.active
            .union(&self.passive)
            .filter_map(|&id| self.clauses.get_index(id))
    }

    /// Backward subsumption: retire the live clauses that clause `id` subsumes
    fn retire_subsumed_by(&mut self, id: usize) {
        let Some(general) = self.clauses.get_index(id) else {
            return;
        };
        let retired: Vec<usize> = self
            .active
            .union(&self.passive)
            .copied()
            .filter(|&other| other != id)
            .filter(|&other| {
                self.clauses
                    .get_index(other)
                    .is_some_and(|specific| subsumes(general, specific))
            })
            .collect();

        for other in retired {
            self.active.shift_remove(&other);
            self.passive.shift_remove(&other);
            self.stats.subsumed += 1;
        }
    }

    /// Queue the background clauses that are still active as given clauses
    fn queue_background(&mut self) {
        let pending = std::mem::take(&mut self.pending_background);
        let active = &self.active;
        let waiting: Vec<usize> = pending.into_iter().filter(|id| active.contains(id)).collect();
        debug!(
            clauses = waiting.len(),
            "support exhausted, selecting background clauses"
        );
        self.passive.extend(waiting);
    }

    /// Nonempty and made of positive `$answer` literals only
    fn is_answer_clause(&self, clause: &Clause) -> bool {
        !self.answer_variables.is_empty()
            && clause.literals().iter().all(|literal| {
                literal.is_positive()
                    && matches!(
                        literal.atom(),
                        AtomicSentence::Predicate { name, .. } if name == ANSWER_PREDICATE
                    )
            })
    }

    /// Record an answer unless an earlier answer clause subsumes it
    ///
    /// A unit answer clause binds the query variables. A longer one is a
    /// disjunctive answer: at least one of its bindings holds.
    fn record_answer(&mut self, clause: Clause) -> Option<Outcome> {
        if is_subsumed_by_any(&clause, self.answers.iter().map(|(c, _)| c)) {
            return None;
        }

        let mut alternatives: Vec<Substitution> = clause
            .literals()
            .iter()
            .map(|literal| self.answer_bindings(literal))
            .collect();
        let step = ProofStep::of(&clause);
        let proof = if alternatives.len() == 1 {
            Proof::new(step, alternatives.swap_remove(0))
        } else {
            Proof::disjunctive(step, alternatives)
        };
        trace!(answer = %clause, "answer found");
        self.answers.push((clause, proof));

        if self.config.max_answers > 0 && self.answers.len() >= self.config.max_answers {
            return Some(Outcome::Proved(self.take_answers()));
        }
        None
    }

    /// Query variables bound to the arguments of one `$answer` literal
    fn answer_bindings(&self, literal: &Literal) -> Substitution {
        Substitution::from_pairs(
            self.answer_variables
                .iter()
                .cloned()
                .zip(literal.atom().arguments().into_iter().cloned()),
        )
    }

    /// Answers found so far, without disjunctive answers that a definite one subsumes
    fn take_answers(&mut self) -> Vec<Proof> {
        let answers = std::mem::take(&mut self.answers);
        let definite: Vec<&Clause> = answers
            .iter()
            .map(|(clause, _)| clause)
            .filter(|clause| clause.is_unit())
            .collect();
        answers
            .iter()
            .filter(|(clause, _)| {
                clause.is_unit() || !is_subsumed_by_any(clause, definite.iter().copied())
            })
            .map(|(_, proof)| proof.clone())
            .collect()
    }

    fn exceeded(&self, start: Instant) -> Option<ResourceLimit> {
        if start.elapsed() >= self.config.timeout {
            return Some(ResourceLimit::Time);
        }
        if self.config.max_clauses > 0 && self.clauses.len() >= self.config.max_clauses {
            return Some(ResourceLimit::Clauses);
        }
        if self.config.max_inferences > 0 && self.stats.inferences >= self.config.max_inferences {
            return Some(ResourceLimit::Inferences);
        }
        None
    }

    fn stop(&mut self, limit: ResourceLimit) -> Outcome {
        warn!(
            %limit,
            rounds = self.stats.rounds,
            clauses = self.clauses.len(),
            inferences = self.stats.inferences,
            "resource bound reached"
        );
        self.bounded(limit)
    }

    fn saturated(&mut self) -> Outcome {
        if self.answers.is_empty() {
            Outcome::Disproved
        } else {
            Outcome::Proved(self.take_answers())
        }
    }

    fn bounded(&mut self, limit: ResourceLimit) -> Outcome {
        if self.answers.is_empty() {
            Outcome::UnknownTimeout(limit)
        } else {
            Outcome::Proved(self.take_answers())
        }
    }
}

/// Input clauses without tautologies, followed by their factors
fn prepare(input: impl IntoIterator<Item = Clause>, unifier: &Unifier) -> Vec<Clause> {
    let mut prepared: IndexSet<Clause> = IndexSet::new();
    for clause in input {
        if clause.is_tautology() {
            continue;
        }
        let clause_factors = factors(&clause, unifier);
        prepared.insert(clause);
        prepared.extend(clause_factors.into_iter().filter(|f| !f.is_tautology()));
    }
    prepared.into_iter().collect()
}

/// Drop clauses subsumed by others in the same group; returns how many went
fn without_subsumed(clauses: Vec<Clause>) -> (Vec<Clause>, usize) {
    let subsumed = find_subsumed(&clauses);
    let count = subsumed.len();
    let kept = clauses
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !subsumed.contains(i))
        .map(|(_, c)| c)
        .collect();
    (kept, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::Term;

    fn lit(positive: bool, name: &str, args: Vec<Term>) -> Literal {
        Literal::new(AtomicSentence::predicate(name, args), positive)
    }

    fn clause(literals: Vec<Literal>) -> Clause {
        Clause::new(literals)
    }

    fn x() -> Term {
        Term::var("x")
    }

    fn a() -> Term {
        Term::constant("A")
    }

    fn b() -> Term {
        Term::constant("B")
    }

    #[test]
    fn test_simple_refutation() {
        let clauses = vec![
            clause(vec![lit(true, "P", vec![x()]), lit(true, "Q", vec![x()])]),
            clause(vec![lit(false, "P", vec![a()])]),
            clause(vec![lit(false, "Q", vec![a()])]),
        ];
        let mut saturation = Saturation::new(clauses, &ProverConfig::default());
        match saturation.run() {
            Outcome::Proved(proofs) => {
                assert_eq!(proofs.len(), 1);
                assert!(proofs[0].root().conclusion.is_empty());
                proofs[0].verify().unwrap();
            }
            other => panic!("Expected proof, got {:?}", other),
        }
    }

    #[test]
    fn test_saturation_without_contradiction() {
        let clauses = vec![
            clause(vec![lit(true, "P", vec![a()])]),
            clause(vec![lit(false, "P", vec![x()]), lit(true, "Q", vec![x()])]),
            clause(vec![lit(false, "R", vec![a()])]),
        ];
        let mut saturation = Saturation::new(clauses, &ProverConfig::default());
        let outcome = saturation.run();
        assert!(outcome.is_disproved(), "Expected disproved, got {:?}", outcome);
        // Q(A) was derived and kept
        assert!(saturation
            .clauses()
            .contains(&clause(vec![lit(true, "Q", vec![a()])])));
    }

    #[test]
    fn test_empty_input_saturates() {
        let mut saturation = Saturation::new(Vec::new(), &ProverConfig::default());
        assert!(saturation.run().is_disproved());
    }

    fn growing_clauses() -> Vec<Clause> {
        vec![
            clause(vec![lit(true, "P", vec![a()])]),
            clause(vec![
                lit(false, "P", vec![x()]),
                lit(true, "P", vec![Term::function("f", vec![x()])]),
            ]),
            clause(vec![lit(false, "Q", vec![b()])]),
        ]
    }

    #[test]
    fn test_clause_bound() {
        let config = ProverConfig::default().with_max_clauses(50);
        let mut saturation = Saturation::new(growing_clauses(), &config);
        match saturation.run() {
            Outcome::UnknownTimeout(limit) => assert_eq!(limit, ResourceLimit::Clauses),
            other => panic!("Expected clause bound, got {:?}", other),
        }
        assert!(saturation.clauses().len() >= 50);
    }

    #[test]
    fn test_inference_bound() {
        let config = ProverConfig::default().with_max_inferences(20);
        let mut saturation = Saturation::new(growing_clauses(), &config);
        match saturation.run() {
            Outcome::UnknownTimeout(limit) => assert_eq!(limit, ResourceLimit::Inferences),
            other => panic!("Expected inference bound, got {:?}", other),
        }
        assert!(saturation.stats().inferences >= 20);
    }

    #[test]
    fn test_answers_collected() {
        let clauses = vec![
            clause(vec![lit(true, "P", vec![a()])]),
            clause(vec![lit(true, "P", vec![b()])]),
            clause(vec![
                lit(false, "P", vec![x()]),
                lit(true, ANSWER_PREDICATE, vec![x()]),
            ]),
        ];
        let mut saturation = Saturation::new(clauses.clone(), &ProverConfig::default())
            .with_answer_variables(vec![Variable::new("x")]);
        let outcome = saturation.run();
        let answers: Vec<String> = outcome
            .proofs()
            .iter()
            .map(|p| p.answer_bindings().to_string())
            .collect();
        assert_eq!(answers, vec!["{x/A}", "{x/B}"]);

        let config = ProverConfig::default().with_max_answers(1);
        let mut saturation =
            Saturation::new(clauses, &config).with_answer_variables(vec![Variable::new("x")]);
        assert_eq!(saturation.run().proofs().len(), 1);
    }

    fn answer_goal() -> Clause {
        clause(vec![
            lit(false, "P", vec![x()]),
            lit(true, ANSWER_PREDICATE, vec![x()]),
        ])
    }

    #[test]
    fn test_disjunctive_answer() {
        // P(A) | P(B) tells that one of A and B answers P(x), not which
        let background = vec![clause(vec![lit(true, "P", vec![a()]), lit(true, "P", vec![b()])])];
        let mut saturation =
            Saturation::with_support(background, vec![answer_goal()], &ProverConfig::default())
                .with_answer_variables(vec![Variable::new("x")]);

        let outcome = saturation.run();
        let proofs = outcome.proofs();
        assert_eq!(proofs.len(), 1, "Expected one answer, got {:?}", outcome);
        assert!(proofs[0].is_disjunctive());
        assert!(proofs[0].answer_bindings().is_empty());
        let mut alternatives: Vec<String> = proofs[0]
            .answer_alternatives()
            .iter()
            .map(|b| b.to_string())
            .collect();
        alternatives.sort();
        assert_eq!(alternatives, vec!["{x/A}", "{x/B}"]);
        proofs[0].verify().unwrap();
    }

    #[test]
    fn test_definite_answer_replaces_disjunctive() {
        let background = vec![
            clause(vec![lit(true, "P", vec![a()]), lit(true, "P", vec![b()])]),
            clause(vec![lit(false, "P", vec![b()])]),
        ];
        let mut saturation =
            Saturation::with_support(background, vec![answer_goal()], &ProverConfig::default())
                .with_answer_variables(vec![Variable::new("x")]);

        let outcome = saturation.run();
        let answers: Vec<String> = outcome
            .proofs()
            .iter()
            .map(|p| p.answer_bindings().to_string())
            .collect();
        assert_eq!(answers, vec!["{x/A}"]);
        assert!(outcome.proofs().iter().all(|p| !p.is_disjunctive()));
    }

    #[test]
    fn test_support_drives_the_search() {
        // Nothing in the background resolves with the goal, so it is the
        // only given clause before the background takes its turn
        let background = vec![
            clause(vec![lit(true, "P", vec![a()])]),
            clause(vec![lit(false, "P", vec![x()]), lit(true, "Q", vec![x()])]),
        ];
        let support = vec![clause(vec![lit(false, "R", vec![b()])])];
        let mut saturation = Saturation::with_support(background, support, &ProverConfig::default());

        assert!(saturation.run().is_disproved());
        assert!(saturation
            .clauses()
            .contains(&clause(vec![lit(true, "Q", vec![a()])])));
        // The goal, the two background clauses and Q(A)
        assert_eq!(saturation.stats().rounds, 4);
    }

    #[test]
    fn test_background_contradiction_found() {
        let background = vec![
            clause(vec![lit(true, "P", vec![a()])]),
            clause(vec![lit(false, "P", vec![x()])]),
        ];
        let support = vec![clause(vec![lit(false, "R", vec![b()])])];
        let mut saturation = Saturation::with_support(background, support, &ProverConfig::default());
        assert!(saturation.run().is_proved());
    }

    #[test]
    fn test_backward_subsumption_retires_clauses() {
        // The resolvent P(c) retires P(A) | Q(A) and its own parent ~R(x) | P(x)
        let clauses = vec![
            clause(vec![lit(true, "P", vec![a()]), lit(true, "Q", vec![a()])]),
            clause(vec![lit(true, "R", vec![x()])]),
            clause(vec![lit(false, "R", vec![x()]), lit(true, "P", vec![x()])]),
        ];
        let mut saturation = Saturation::new(clauses, &ProverConfig::default());
        assert!(saturation.run().is_disproved());
        assert!(saturation
            .clauses()
            .iter()
            .any(|c| c.is_unit() && c.literals()[0].atom().symbol() == "P"));
        assert_eq!(saturation.stats().subsumed, 2);
    }

    #[test]
    fn test_reflexivity_axiom() {
        let goal = clause(vec![Literal::negative(AtomicSentence::equality(a(), a()))]);

        let mut saturation = Saturation::new(vec![goal.clone()], &ProverConfig::default());
        let outcome = saturation.run();
        assert!(outcome.is_proved(), "Expected proof, got {:?}", outcome);
        let rules: Vec<&str> = outcome.proofs()[0]
            .ordered_steps()
            .iter()
            .map(|s| s.derivation.rule_name())
            .collect();
        assert!(rules.contains(&"Axiom"));

        let config = ProverConfig::default().with_paramodulation(false);
        let mut saturation = Saturation::new(vec![goal], &config);
        assert!(saturation.run().is_disproved());
    }

    #[test]
    fn test_paramodulation_refutation() {
        let clauses = vec![
            clause(vec![Literal::positive(AtomicSentence::equality(a(), b()))]),
            clause(vec![lit(true, "P", vec![a()])]),
            clause(vec![lit(false, "P", vec![b()])]),
        ];
        let mut saturation = Saturation::new(clauses, &ProverConfig::default());
        let outcome = saturation.run();
        match &outcome {
            Outcome::Proved(proofs) => proofs[0].verify().unwrap(),
            other => panic!("Expected proof, got {:?}", other),
        }
    }

    #[test]
    fn test_subsumed_inputs_removed() {
        let clauses = vec![
            clause(vec![lit(true, "P", vec![x()])]),
            clause(vec![lit(true, "P", vec![a()]), lit(true, "Q", vec![a()])]),
        ];
        let saturation = Saturation::new(clauses, &ProverConfig::default());
        assert_eq!(saturation.clauses().len(), 1);
        assert_eq!(saturation.stats().subsumed, 1);
    }

    #[test]
    fn test_runs_are_deterministic() {
        let config = ProverConfig::default().with_max_clauses(40);
        let run = || {
            let mut saturation = Saturation::new(growing_clauses(), &config);
            saturation.run();
            saturation
                .clauses()
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}
