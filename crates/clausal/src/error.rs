//! Error types for clausal

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClausalError {
    #[error("Malformed sentence: {0}")]
    MalformedSentence(String),

    #[error("Invalid proof at step {step}: {reason}")]
    InvalidProof { step: usize, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClausalError>;
