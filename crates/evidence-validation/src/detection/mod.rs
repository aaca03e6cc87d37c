//! Detectors that run over persona evidence after matching.
//!
//! Each detector is read-only and total: malformed content yields an empty
//! finding, never an error.

pub mod contamination;
pub mod duplication;
pub mod speaker_consistency;

pub use contamination::{detect_contamination, ContaminationDetector, ContaminationHeuristic};
pub use duplication::detect_duplication;
pub use speaker_consistency::check_speaker_consistency;
