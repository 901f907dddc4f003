//! Structured logging with environment variable configuration.
//!
//! Logs are written to stderr so they never mix with the verdicts and
//! target lists printed on stdout. Records emitted by the clause and
//! catalog libraries through the `log` facade are forwarded to the same
//! subscriber.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CheckConfig;

fn filter_from_config(config: &CheckConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// # Environment Variables
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level` (parsed into `config.log_level`)
/// 2. `PERMISSION_CHECK_LOG_LEVEL` (parsed into `config.log_level`)
/// 3. Default configuration value
///
/// # Note
///
/// If a global subscriber or `log` bridge is already installed, this
/// function silently keeps the existing one. The first subscriber wins.
pub fn init_logging(config: &CheckConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    // Fails only when a subscriber is already installed, e.g. in tests.
    let _ = subscriber.try_init();
}
