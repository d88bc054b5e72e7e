//! Property-based tests for unification and matching using proptest.

use super::{match_term, unify, Unifier};
use crate::fol::{Substitution, Term, Variable};
use proptest::prelude::*;

/// Term description, built into a `Term` with a chosen variable prefix
#[derive(Debug, Clone)]
enum TermDesc {
    Var(u8),                 // Variable index 0-3
    Const(u8),               // Constant index 0-3
    Func(u8, Vec<TermDesc>), // Function index 0-1, with args
}

fn arb_term_desc(max_depth: u32) -> BoxedStrategy<TermDesc> {
    if max_depth == 0 {
        prop_oneof![
            (0..4u8).prop_map(TermDesc::Var),
            (0..4u8).prop_map(TermDesc::Const),
        ]
        .boxed()
    } else {
        prop_oneof![
            3 => (0..4u8).prop_map(TermDesc::Var),
            3 => (0..4u8).prop_map(TermDesc::Const),
            2 => (0..2u8, proptest::collection::vec(arb_term_desc(max_depth - 1), 1..=2))
                .prop_map(|(f, args)| TermDesc::Func(f, args)),
        ]
        .boxed()
    }
}

/// Generate a ground term description (no variables)
fn arb_ground_term_desc(max_depth: u32) -> BoxedStrategy<TermDesc> {
    if max_depth == 0 {
        (0..4u8).prop_map(TermDesc::Const).boxed()
    } else {
        prop_oneof![
            3 => (0..4u8).prop_map(TermDesc::Const),
            2 => (0..2u8, proptest::collection::vec(arb_ground_term_desc(max_depth - 1), 1..=2))
                .prop_map(|(f, args)| TermDesc::Func(f, args)),
        ]
        .boxed()
    }
}

fn build_term(desc: &TermDesc, var_prefix: &str) -> Term {
    match desc {
        TermDesc::Var(i) => Term::var(format!("{}{}", var_prefix, i)),
        TermDesc::Const(i) => Term::constant(format!("c{}", i)),
        // Arity is part of the name so equal names always mean equal arity
        TermDesc::Func(f, args) => Term::function(
            format!("f{}_{}", f, args.len()),
            args.iter().map(|a| build_term(a, var_prefix)).collect(),
        ),
    }
}

fn arb_term(max_depth: u32) -> impl Strategy<Value = Term> {
    arb_term_desc(max_depth).prop_map(|d| build_term(&d, "X"))
}

/// Generate a pair of terms over the same variables
fn arb_term_pair(max_depth: u32) -> impl Strategy<Value = (Term, Term)> {
    (arb_term_desc(max_depth), arb_term_desc(max_depth))
        .prop_map(|(d1, d2)| (build_term(&d1, "X"), build_term(&d2, "X")))
}

/// A term `t`, a substitution ρ over X0..X3 into Y-terms, and a ground σ' over Y0..Y3
fn arb_instance_setup() -> impl Strategy<Value = (Term, Substitution, Substitution)> {
    (
        arb_term_desc(3),
        proptest::collection::vec(arb_term_desc(1), 4),
        proptest::collection::vec(arb_ground_term_desc(1), 4),
    )
        .prop_map(|(t, rho, ground)| {
            let term = build_term(&t, "X");
            let rho = Substitution::from_pairs(
                rho.iter()
                    .enumerate()
                    .map(|(i, d)| (Variable::new(format!("X{}", i)), build_term(d, "Y"))),
            );
            let ground = Substitution::from_pairs(
                ground
                    .iter()
                    .enumerate()
                    .map(|(i, d)| (Variable::new(format!("Y{}", i)), build_term(d, "Y"))),
            );
            (term, rho, ground)
        })
}

// =========================================================================
// Unification properties
// =========================================================================

proptest! {
    /// Soundness: if unify(s, t) = σ, then sσ = tσ
    #[test]
    fn unification_soundness((t1, t2) in arb_term_pair(3)) {
        if let Ok(sigma) = unify(&t1, &t2) {
            let t1_sigma = t1.apply_substitution(&sigma);
            let t2_sigma = t2.apply_substitution(&sigma);
            prop_assert_eq!(t1_sigma, t2_sigma, "unifier must make terms equal");
        }
    }

    /// Idempotence: applying the MGU twice changes nothing
    #[test]
    fn unification_idempotent((t1, t2) in arb_term_pair(3)) {
        if let Ok(sigma) = unify(&t1, &t2) {
            let once = t1.apply_substitution(&sigma);
            let twice = once.apply_substitution(&sigma);
            prop_assert_eq!(once, twice);
        }
    }

    /// Symmetry: unify(s, t) succeeds iff unify(t, s) succeeds
    #[test]
    fn unification_symmetry((t1, t2) in arb_term_pair(3)) {
        let r1 = unify(&t1, &t2);
        let r2 = unify(&t2, &t1);
        prop_assert_eq!(r1.is_ok(), r2.is_ok(), "unification should be symmetric");
    }

    /// Most generality: every unifier σ factors through the MGU θ, i.e. θσ = σ
    #[test]
    fn unification_most_general((t, rho, ground) in arb_instance_setup()) {
        let x = t.clone();
        let y = t.apply_substitution(&rho);
        let sigma = rho.compose(&ground);
        prop_assert_eq!(x.apply_substitution(&sigma), y.apply_substitution(&sigma));

        let theta = unify(&x, &y);
        prop_assert!(theta.is_ok(), "an instance must unify with its generalization");
        if let Ok(theta) = theta {
            let mut vars = x.variables();
            vars.extend(y.variables());
            for v in vars {
                let var = Term::Variable(v);
                prop_assert_eq!(
                    var.apply_substitution(&theta).apply_substitution(&sigma),
                    var.apply_substitution(&sigma)
                );
            }
        }
    }

    /// Occurs check: unify(X, f(X)) should always fail
    #[test]
    fn unification_occurs_check(func_idx in 0..2u8, depth in 1..4u32) {
        let x = Term::var("X");
        let mut term = x.clone();
        for _ in 0..depth {
            term = Term::function(format!("f{}", func_idx), vec![term]);
        }
        prop_assert!(unify(&x, &term).is_err(), "occurs check should prevent X = f(...X...)");
        // The permissive unifier accepts the binding
        prop_assert!(Unifier::new(false).unify_terms(&x, &term).is_ok());
    }

    /// Identity: unify(t, t) succeeds with the empty substitution
    #[test]
    fn unification_identity(t in arb_term(3)) {
        let result = unify(&t, &t);
        prop_assert!(result.is_ok(), "term should unify with itself");
        if let Ok(sigma) = result {
            prop_assert!(sigma.is_empty());
        }
    }
}

// =========================================================================
// Matching properties
// =========================================================================

proptest! {
    /// Soundness: if match(pattern, target) = σ, then pattern·σ = target
    #[test]
    fn matching_soundness((t1, t2) in arb_term_pair(3)) {
        if let Some(sigma) = match_term(&t1, &t2) {
            let t1_sigma = t1.apply_substitution(&sigma);
            prop_assert_eq!(t1_sigma, t2, "matching substitution must make pattern equal to target");
        }
    }

    /// Matching is NOT symmetric in general
    #[test]
    fn matching_asymmetry_constant_vs_variable(const_idx in 0..4u8) {
        let x = Term::var("X");
        let c = Term::constant(format!("c{}", const_idx));

        prop_assert!(match_term(&x, &c).is_some(), "variable pattern should match constant");
        prop_assert!(match_term(&c, &x).is_none(), "constant pattern should not match variable");
    }
}
