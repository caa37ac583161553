pub mod config;
pub mod error;
pub mod file_handler;
pub mod frequency;
pub mod record;
pub mod scanner;

pub use config::ScanConfig;
pub use error::*;
pub use frequency::{report_top_keys, FrequencyTable, TiePolicy};
pub use scanner::LogScanner;

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber. The filter comes from `MOST_ACTIVE_COOKIE_LOG`
/// and defaults to `warn`, so stdout only ever carries results.
pub fn init_tracing(service: &str) {
    let filter = EnvFilter::try_from_env(config::LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    tracing::debug!(service, "tracing initialized");
}

/// Load the log, find the block for `config.date`, and return the most active keys.
pub fn run(config: &ScanConfig) -> Result<Vec<String>, ScanError> {
    let lines = file_handler::load(&config.path)?;
    let table = LogScanner::new(&lines).scan(config.date)?;
    let keys = report_top_keys(&table, config.ties)?;
    tracing::info!(date = %config.date, keys = keys.len(), ties = %config.ties, "scan complete");
    Ok(keys)
}
