//! Diagnostic log setup for binaries embedding the settings model.
//!
//! The library only emits `tracing` events; nothing is printed until a host
//! installs a subscriber, usually through [`init`].

use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Filter directive chosen by `config`: explicit filter, then debug flag, then default.
#[must_use]
pub fn filter_directive(config: &EnvConfig) -> String {
    match (&config.log_filter, config.debug) {
        (Some(filter), _) => filter.clone(),
        (None, true) => "debug".to_string(),
        (None, false) => DEFAULT_LOG_FILTER.to_string(),
    }
}

/// Installs a stderr fmt subscriber. Later calls are no-ops.
pub fn init(config: &EnvConfig) {
    let filter = EnvFilter::try_new(filter_directive(config))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
