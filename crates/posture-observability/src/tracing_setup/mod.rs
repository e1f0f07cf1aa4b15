//! Tracing initialization and configuration.

pub mod spans;

use std::sync::Once;

use posture_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-target filter directives.
pub const LOG_ENV: &str = "POSTURE_LOG";

/// Initialize the tracing subscriber from the environment.
///
/// Reads `POSTURE_LOG` for per-target levels, e.g.
/// `POSTURE_LOG=posture_risk=debug,posture_store=warn`.
/// Falls back to `info` when unset or invalid. Idempotent.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize the tracing subscriber from config.
///
/// `POSTURE_LOG` still wins over `config.log_level` when set. Only the first
/// call in a process installs a subscriber.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), &config.log_level);
        let registry = tracing_subscriber::registry().with(filter);

        let installed = if config.json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };

        if let Err(e) = installed {
            // Another subscriber is already global (e.g. host application).
            tracing::debug!("tracing subscriber not installed: {e}");
        }
    });
}

/// Build the filter: directives from the environment when valid, else `fallback_level`.
pub fn build_filter(env_directives: Option<&str>, fallback_level: &str) -> EnvFilter {
    env_directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(fallback_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
