//! Subscriber installation and the structured events the engine emits.

pub mod events;

use evidence_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "EVIDENCE_LOG";

/// Install a JSON subscriber filtered by `EVIDENCE_LOG` (default `info`).
///
/// Safe to call more than once; only the first installation takes effect.
pub fn init_tracing() {
    install(env_filter_or("info"), true);
}

/// Install a JSON subscriber with an explicit filter, ignoring `EVIDENCE_LOG`.
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), true);
}

/// Install a subscriber from the observability section of the engine config.
///
/// `EVIDENCE_LOG` still wins over the configured level when set.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    install(env_filter_or(&config.log_level), config.json);
}

fn env_filter_or(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn install(filter: EnvFilter, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true);

    // A second installation fails harmlessly.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
