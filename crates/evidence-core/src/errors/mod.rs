//! Error handling for the evidence engine.
//! One error enum per concern, `thiserror` only.
//!
//! Detectors are total functions and never return errors; only the
//! ingestion boundary and config loading can fail.

pub mod config_error;
pub mod evidence_error;

pub use config_error::ConfigError;
pub use evidence_error::{EvidenceError, EvidenceResult};
