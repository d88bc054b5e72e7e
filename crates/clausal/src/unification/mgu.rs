//! Most General Unifier (MGU) computation

use crate::fol::{AtomicSentence, Literal, Substitution, Term, Variable};
use std::fmt;

/// Result of a unification attempt
pub type UnificationResult = Result<Substitution, UnificationError>;

/// Recursion limit for the unifier when the occurs check is disabled
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Reasons a unification attempt fails
///
/// Failure is an ordinary outcome; callers match on it or discard it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnificationError {
    /// Occurs check failed - variable occurs in term
    OccursCheck(Variable, Term),
    /// Function symbols don't match
    FunctionClash(String, String),
    /// Predicate symbols don't match
    PredicateClash(String, String),
    /// Arities don't match
    ArityMismatch(usize, usize),
    /// Constant symbols don't match
    ConstantClash(String, String),
    /// Different node kinds (constant vs function, predicate vs equality)
    KindClash(String, String),
    /// Recursion limit reached, only possible on cyclic bindings without occurs check
    DepthExceeded(usize),
}

impl fmt::Display for UnificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnificationError::OccursCheck(v, t) => write!(f, "{} occurs in {}", v, t),
            UnificationError::FunctionClash(a, b) => write!(f, "function clash {} vs {}", a, b),
            UnificationError::PredicateClash(a, b) => write!(f, "predicate clash {} vs {}", a, b),
            UnificationError::ArityMismatch(a, b) => write!(f, "arity mismatch {} vs {}", a, b),
            UnificationError::ConstantClash(a, b) => write!(f, "constant clash {} vs {}", a, b),
            UnificationError::KindClash(a, b) => write!(f, "cannot unify {} with {}", a, b),
            UnificationError::DepthExceeded(d) => write!(f, "unification deeper than {}", d),
        }
    }
}

/// Unification settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unifier {
    /// Reject bindings `x -> t` where `x` occurs in `t`
    pub occurs_check: bool,
    /// Recursion limit
    pub max_depth: usize,
}

impl Default for Unifier {
    fn default() -> Self {
        Unifier {
            occurs_check: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Unifier {
    pub fn new(occurs_check: bool) -> Self {
        Unifier {
            occurs_check,
            ..Self::default()
        }
    }

    /// Unify two terms
    pub fn unify_terms(&self, term1: &Term, term2: &Term) -> UnificationResult {
        let mut subst = Substitution::new();
        self.unify_with_subst(term1, term2, &mut subst, 0)?;
        Ok(subst)
    }

    /// Unify two atomic sentences
    ///
    /// Predicates unify argument-wise when names and arities agree;
    /// equalities unify side by side as an ordered pair.
    pub fn unify_atoms(&self, atom1: &AtomicSentence, atom2: &AtomicSentence) -> UnificationResult {
        let mut subst = Substitution::new();
        self.unify_atoms_with(atom1, atom2, &mut subst)?;
        Ok(subst)
    }

    /// Unify two atoms, extending an existing substitution
    pub fn unify_atoms_with(
        &self,
        atom1: &AtomicSentence,
        atom2: &AtomicSentence,
        subst: &mut Substitution,
    ) -> Result<(), UnificationError> {
        match (atom1, atom2) {
            (
                AtomicSentence::Predicate { name: n1, args: a1 },
                AtomicSentence::Predicate { name: n2, args: a2 },
            ) => {
                if n1 != n2 {
                    return Err(UnificationError::PredicateClash(n1.clone(), n2.clone()));
                }
                self.unify_lists(a1, a2, subst, 0)
            }
            (
                AtomicSentence::TermEquality { left: l1, right: r1 },
                AtomicSentence::TermEquality { left: l2, right: r2 },
            ) => {
                self.unify_with_subst(l1, l2, subst, 0)?;
                self.unify_with_subst(r1, r2, subst, 0)
            }
            _ => Err(UnificationError::KindClash(atom1.to_string(), atom2.to_string())),
        }
    }

    /// Unify the atoms of two literals, ignoring polarity
    pub fn unify_literals(&self, lit1: &Literal, lit2: &Literal) -> UnificationResult {
        self.unify_atoms(lit1.atom(), lit2.atom())
    }

    fn unify_lists(
        &self,
        args1: &[Term],
        args2: &[Term],
        subst: &mut Substitution,
        depth: usize,
    ) -> Result<(), UnificationError> {
        if args1.len() != args2.len() {
            return Err(UnificationError::ArityMismatch(args1.len(), args2.len()));
        }
        for (arg1, arg2) in args1.iter().zip(args2.iter()) {
            self.unify_with_subst(arg1, arg2, subst, depth)?;
        }
        Ok(())
    }

    /// Unify two terms with an existing substitution
    fn unify_with_subst(
        &self,
        term1: &Term,
        term2: &Term,
        subst: &mut Substitution,
        depth: usize,
    ) -> Result<(), UnificationError> {
        if depth > self.max_depth {
            return Err(UnificationError::DepthExceeded(self.max_depth));
        }

        let t1 = term1.apply_substitution(subst);
        let t2 = term2.apply_substitution(subst);

        match (&t1, &t2) {
            // Same term - nothing to do
            _ if t1 == t2 => Ok(()),

            // Variable cases
            (Term::Variable(v), t) | (t, Term::Variable(v)) => {
                if self.occurs_check && t.contains_variable(v) {
                    Err(UnificationError::OccursCheck(v.clone(), t.clone()))
                } else {
                    subst.insert_normalized(v.clone(), t.clone());
                    Ok(())
                }
            }

            // Constant clash
            (Term::Constant(c1), Term::Constant(c2)) => Err(UnificationError::ConstantClash(
                c1.name.clone(),
                c2.name.clone(),
            )),

            // Function terms
            (Term::Function(f1, args1), Term::Function(f2, args2)) => {
                if f1.name != f2.name {
                    return Err(UnificationError::FunctionClash(
                        f1.name.clone(),
                        f2.name.clone(),
                    ));
                }
                self.unify_lists(args1, args2, subst, depth + 1)
            }

            // Function-Constant clash
            (Term::Function(_, _), Term::Constant(_)) | (Term::Constant(_), Term::Function(_, _)) => {
                Err(UnificationError::KindClash(t1.to_string(), t2.to_string()))
            }
        }
    }
}

/// Unify two terms, returning a most general unifier (MGU) if one exists
pub fn unify(term1: &Term, term2: &Term) -> UnificationResult {
    Unifier::default().unify_terms(term1, term2)
}

/// Unify two atomic sentences with the default settings
pub fn unify_atoms(atom1: &AtomicSentence, atom2: &AtomicSentence) -> UnificationResult {
    Unifier::default().unify_atoms(atom1, atom2)
}
