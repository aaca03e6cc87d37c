//! # evidence-validation
//!
//! Verifies persona evidence against interview sources before it is shown
//! as "verified".
//!
//! ## Stages
//! 1. **Normalize**: canonical text for robust comparison
//! 2. **Match**: verbatim, normalized, then token-overlap search, with
//!    speaker attribution for structured transcripts
//! 3. **Detect**: duplication, speaker consistency, contamination
//! 4. **Summarize**: counts, tiered PASS/SOFT_FAIL/HARD_FAIL status, and a
//!    weighted confidence score
//! 5. **Filter**: strip researcher-sourced evidence and backfill unknown
//!    age ranges before display
//!
//! Every stage is a pure function of its inputs. Nothing here panics on
//! malformed content; bad input degrades to `no_match` or an empty finding.

pub mod detection;
pub mod engine;
pub mod filter;
pub mod matching;
pub mod normalize;
pub mod summary;

pub use engine::{DisplayPersona, ValidationEngine};
pub use matching::{EvidenceMatcher, EvidenceSource, QuoteMatch};
pub use normalize::normalize;
