//! Simplification: redundancy elimination by subsumption.

pub mod subsumption;

pub use subsumption::{find_subsumed, is_subsumed_by_any, subsumes};
