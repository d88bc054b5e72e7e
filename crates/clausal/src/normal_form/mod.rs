//! Normal-form pipeline from sentences to clauses

pub mod cnf_conversion;
pub mod nnf;

pub use cnf_conversion::{
    distribute_or_over_and, drop_universal_quantifiers, extract_clauses,
    standardize_quantified_variables, to_clauses, CnfConverter, SKOLEM_CONSTANT_PREFIX,
    SKOLEM_FUNCTION_PREFIX,
};
pub use nnf::{eliminate_implications, is_nnf, to_nnf};
