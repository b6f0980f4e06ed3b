//! Tracing subscriber setup.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Install the global subscriber once. `RUST_LOG` wins over the configured
/// level. Later calls are no-ops.
pub fn init_tracing(config: &LoggingConfig) {
    let _ = TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        let _ = match config.format {
            LogFormat::Json => builder
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .try_init(),
            LogFormat::Pretty => builder.with_target(false).try_init(),
        };
    });
}
