//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Everything goes to stderr; stdout is reserved for the status line
//! - `RUST_LOG` overrides the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::ObservabilitySettings;

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(settings: &ObservabilitySettings) -> String {
    format!("elb_health_check={}", settings.log_level)
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(settings: &ObservabilitySettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(settings)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
