//! Structured logging setup for the terrain tool.

use ridgeline_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Console output with uptime timestamps, module paths, and severity
/// levels. The filter comes from `RUST_LOG` when set, falling back to the
/// config's log level (default `info`).
pub fn init_logging(config: &Config) {
    let filter_str = if config.debug.log_level.is_empty() {
        "info".to_string()
    } else {
        config.debug.log_level.clone()
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
