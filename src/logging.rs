//! Logging System
//!
//! Structured diagnostics through `tracing`, written to stderr so that
//! `--stdout` output stays clean. User-facing progress messages go through
//! the `ProgressReporter` port instead.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::shared::Result;

/// Environment variable holding a filter directive, e.g. `reactor_view=trace`
pub const LOG_ENV_VAR: &str = "REACTOR_VIEW_LOG";

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. `REACTOR_VIEW_LOG`
/// 2. `--verbose` (debug)
/// 3. Default (warn)
pub fn init_logging(verbose: bool) -> Result<()> {
    Registry::default()
        .with(build_env_filter(verbose))
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

fn build_env_filter(verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return filter;
    }

    EnvFilter::new(default_level(verbose))
}

fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
