//! # evidence-core
//!
//! Foundation crate for persona evidence validation.
//! Defines the data model, the parse-once ingestion boundary for persona JSON,
//! configuration, errors, constants, and the validator trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EvidenceConfig;
pub use errors::{EvidenceError, EvidenceResult};
pub use models::{
    EvidenceItem, EvidenceMatch, MatchType, Persona, PersonaTrait, Segment, StructuredTranscript,
    ValidationInput, ValidationStatus, ValidationSummary,
};
