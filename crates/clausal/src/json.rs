//! JSON serialization types for proof data

use crate::error::Result;
use crate::fol::{AtomicSentence, Clause, Literal, Substitution, Term};
use crate::inference::{Proof, ProofLine};
use crate::saturation::{Outcome, ResourceLimit};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// JSON representation of a term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TermJson {
    Variable { name: String },
    Constant { name: String },
    Function { name: String, args: Vec<TermJson> },
}

impl From<&Term> for TermJson {
    fn from(term: &Term) -> Self {
        match term {
            Term::Variable(v) => TermJson::Variable {
                name: v.name.clone(),
            },
            Term::Constant(c) => TermJson::Constant {
                name: c.name.clone(),
            },
            Term::Function(f, args) => TermJson::Function {
                name: f.name.clone(),
                args: args.iter().map(TermJson::from).collect(),
            },
        }
    }
}

/// JSON representation of an atom; equality uses the predicate `=`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomJson {
    pub predicate: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub args: Vec<TermJson>,
}

impl From<&AtomicSentence> for AtomJson {
    fn from(atom: &AtomicSentence) -> Self {
        AtomJson {
            predicate: atom.symbol().to_string(),
            args: atom.arguments().into_iter().map(TermJson::from).collect(),
        }
    }
}

/// JSON representation of a literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralJson {
    pub polarity: bool,
    pub atom: AtomJson,
}

impl From<&Literal> for LiteralJson {
    fn from(lit: &Literal) -> Self {
        LiteralJson {
            polarity: lit.is_positive(),
            atom: lit.atom().into(),
        }
    }
}

/// JSON representation of a clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseJson {
    pub literals: Vec<LiteralJson>,
}

impl From<&Clause> for ClauseJson {
    fn from(clause: &Clause) -> Self {
        ClauseJson {
            literals: clause.literals().iter().map(LiteralJson::from).collect(),
        }
    }
}

/// JSON representation of a proof step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofStepJson {
    pub step: usize,
    pub formula: String,
    pub justification: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub premises: Vec<usize>,
    pub clause: ClauseJson,
}

/// JSON representation of a proof
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofJson {
    pub steps: Vec<ProofStepJson>,
    /// Query variable name to answer term
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub bindings: IndexMap<String, String>,
    /// Disjunctive answer: at least one of these binding maps holds
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub alternatives: Vec<IndexMap<String, String>>,
}

impl From<&Proof> for ProofJson {
    fn from(proof: &Proof) -> Self {
        let ordered = proof.ordered_steps();
        let steps = proof
            .steps()
            .into_iter()
            .zip(ordered.iter())
            .map(|(line, step)| {
                let ProofLine {
                    step: number,
                    formula,
                    justification,
                    premises,
                } = line;
                ProofStepJson {
                    step: number,
                    formula,
                    justification,
                    premises,
                    clause: (&step.conclusion).into(),
                }
            })
            .collect();
        let binding_map = |bindings: &Substitution| -> IndexMap<String, String> {
            bindings
                .iter()
                .map(|(var, term)| (var.name.clone(), term.to_string()))
                .collect()
        };
        ProofJson {
            steps,
            bindings: binding_map(proof.answer_bindings()),
            alternatives: proof.answer_alternatives().iter().map(binding_map).collect(),
        }
    }
}

/// JSON representation of an outcome
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeJson {
    /// `proved`, `disproved` or `unknown`
    pub status: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub proofs: Vec<ProofJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<ResourceLimit>,
}

impl From<&Outcome> for OutcomeJson {
    fn from(outcome: &Outcome) -> Self {
        OutcomeJson {
            status: outcome.status().to_string(),
            proofs: outcome.proofs().iter().map(ProofJson::from).collect(),
            limit: match outcome {
                Outcome::UnknownTimeout(limit) => Some(*limit),
                _ => None,
            },
        }
    }
}

impl Proof {
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&ProofJson::from(self))?)
    }
}

impl Outcome {
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&OutcomeJson::from(self))?)
    }
}
