//! Tracing initialization for the `dkd-risk` binary.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Env var holding per-crate log levels, e.g. `DKD_LOG=dkd_core=debug`.
pub const LOG_ENV_VAR: &str = "DKD_LOG";

/// Filter used when `DKD_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "dkd_core=info,dkd_infra=info";

static INIT: Once = Once::new();

/// Install the global subscriber. Idempotent.
///
/// Logs go to stderr so stdout carries only the report.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
