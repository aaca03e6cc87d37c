//! # evidence-observability
//!
//! Structured logging for the evidence engine. Events are emitted through
//! `tracing` and never influence validation results.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
