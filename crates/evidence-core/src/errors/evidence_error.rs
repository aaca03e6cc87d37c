use super::ConfigError;

/// Top-level error for callers of the evidence engine.
///
/// An `InputShape` error means validation is unavailable for that input;
/// callers should surface persona results without a verified status
/// rather than aborting.
#[derive(Debug, thiserror::Error)]
pub enum EvidenceError {
    #[error("input shape error: expected {expected}, found {found}")]
    InputShape { expected: String, found: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EvidenceError {
    fn from(err: serde_json::Error) -> Self {
        EvidenceError::Serialization(err.to_string())
    }
}

/// Convenience alias used throughout the workspace.
pub type EvidenceResult<T> = Result<T, EvidenceError>;
