use crate::errors::EvidenceResult;
use crate::models::{Persona, ValidationInput, ValidationReport};

/// Evidence validation for one persona against its interview sources.
pub trait IEvidenceValidator: Send + Sync {
    /// Match, attribute, and score every evidence item of the persona.
    fn validate(&self, persona: &Persona, input: &ValidationInput<'_>) -> EvidenceResult<ValidationReport>;
}
