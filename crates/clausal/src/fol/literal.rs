//! Literals: signed atomic sentences

use super::sentence::AtomicSentence;
use super::term::Variable;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// A literal (positive or negative atom)
///
/// Literals are immutable once built. The structural hash is computed on
/// first use and cached, since literals are used heavily as set keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Literal {
    atom: AtomicSentence,
    positive: bool,
    #[serde(skip)]
    hash: OnceLock<u64>,
}

impl Literal {
    pub fn new(atom: AtomicSentence, positive: bool) -> Self {
        Literal {
            atom,
            positive,
            hash: OnceLock::new(),
        }
    }

    /// Create a new positive literal
    pub fn positive(atom: AtomicSentence) -> Self {
        Self::new(atom, true)
    }

    /// Create a new negative literal
    pub fn negative(atom: AtomicSentence) -> Self {
        Self::new(atom, false)
    }

    pub fn atom(&self) -> &AtomicSentence {
        &self.atom
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }

    pub fn is_negative(&self) -> bool {
        !self.positive
    }

    /// Same atom, opposite polarity
    pub fn negated(&self) -> Literal {
        Literal::new(self.atom.clone(), !self.positive)
    }

    /// Check whether `other` is the same atom with opposite polarity
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.positive != other.positive && self.atom == other.atom
    }

    /// Grouping key: polarity, symbol and arity (`~P/2`, `=/2`)
    pub fn signature_key(&self) -> String {
        format!(
            "{}{}/{}",
            if self.positive { "" } else { "~" },
            self.atom.symbol(),
            self.atom.arity()
        )
    }

    pub fn variables(&self) -> IndexSet<Variable> {
        self.atom.variables()
    }

    pub fn collect_variables(&self, vars: &mut IndexSet<Variable>) {
        self.atom.collect_variables(vars);
    }

    fn structural_hash(&self) -> u64 {
        *self.hash.get_or_init(|| {
            let mut hasher = DefaultHasher::new();
            self.positive.hash(&mut hasher);
            self.atom.hash(&mut hasher);
            hasher.finish()
        })
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.positive == other.positive
            && self.structural_hash() == other.structural_hash()
            && self.atom == other.atom
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.positive {
            write!(f, "{}", self.atom)
        } else {
            write!(f, "~{}", self.atom)
        }
    }
}
