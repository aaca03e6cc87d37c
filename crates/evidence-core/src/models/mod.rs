pub mod evidence;
pub mod evidence_match;
pub mod persona;
pub mod transcript;
pub mod validation_summary;

pub use evidence::EvidenceItem;
pub use evidence_match::{EvidenceMatch, MatchType};
pub use persona::{is_unknown, Demographics, Persona, PersonaTrait};
pub use transcript::{Segment, StructuredTranscript, ValidationInput};
pub use validation_summary::{
    ConfidenceComponents, ContaminationKind, ContaminationReport, CrossTraitReuse,
    DuplicateQuote, DuplicationReport, MatchCounts, SpeakerCheckReport, SpeakerMismatch,
    ValidationReport, ValidationStatus, ValidationSummary,
};
