//! Clause derivation tracking.
//!
//! Records how each clause was derived: the rule that fired and the exact
//! substitutions it used, so a proof can be re-checked step by step.

use crate::fol::{Literal, Position, Substitution};

/// How a clause was derived
#[derive(Debug, Clone, PartialEq)]
pub enum Derivation {
    /// Clause of the knowledge base
    Premise,
    /// Clause of the negated query
    Goal,
    /// Built-in axiom such as reflexivity of equality
    Axiom { name: String },
    /// Variables of the single predecessor renamed apart
    Renaming { renaming: Substitution },
    /// Two literals of the single predecessor unified
    Factor { unifier: Substitution },
    /// Binary resolution of the two predecessors on `resolved` (a literal of the first)
    BinaryResolvent {
        resolved: Literal,
        unifier: Substitution,
        renaming: Substitution,
    },
    /// The first predecessor's `equality` rewrote the second at `position`
    Paramodulation {
        equality: Literal,
        left_to_right: bool,
        position: Position,
        unifier: Substitution,
        renaming: Substitution,
    },
}

impl Derivation {
    pub fn rule_name(&self) -> &'static str {
        match self {
            Derivation::Premise => "Premise",
            Derivation::Goal => "Goal",
            Derivation::Axiom { .. } => "Axiom",
            Derivation::Renaming { .. } => "Renaming",
            Derivation::Factor { .. } => "Factor",
            Derivation::BinaryResolvent { .. } => "Resolution",
            Derivation::Paramodulation { .. } => "Paramodulation",
        }
    }

    /// Step has no predecessors
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Derivation::Premise | Derivation::Goal | Derivation::Axiom { .. }
        )
    }

    /// Human-readable justification, given the step numbers of the predecessors
    pub fn justification(&self, premises: &[usize]) -> String {
        let refs = premises
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        match self {
            Derivation::Premise => "Premise".to_string(),
            Derivation::Goal => "Goal (negated query)".to_string(),
            Derivation::Axiom { name } => format!("Axiom ({})", name),
            Derivation::Renaming { renaming } => format!("Renaming of {} {}", refs, renaming),
            Derivation::Factor { unifier } => format!("Factor of {} {}", refs, unifier),
            Derivation::BinaryResolvent {
                resolved,
                unifier,
                renaming,
            } => format!(
                "Resolution: {} on {} {} renaming {}",
                refs, resolved, unifier, renaming
            ),
            Derivation::Paramodulation {
                equality,
                left_to_right,
                position,
                unifier,
                renaming,
            } => format!(
                "Paramodulation: {} with {}{} at {} {} renaming {}",
                refs,
                equality,
                if *left_to_right { "" } else { " (right to left)" },
                position,
                unifier,
                renaming
            ),
        }
    }
}
