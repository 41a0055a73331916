//! Tracing subscriber setup

use crate::config::LogFormat;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Parse a filter directive, falling back to `info` when it is invalid.
///
/// The second value carries the parse error so it can be reported once a
/// subscriber is installed.
pub fn parse_filter(filter: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(filter) {
        Ok(parsed) => (parsed, None),
        Err(e) => (EnvFilter::new("info"), Some(e.to_string())),
    }
}

/// Install the global tracing subscriber.
///
/// Returns the filter parse error, if the configured filter was replaced by
/// the `info` fallback.
pub fn init_logging(filter: &str, format: LogFormat) -> anyhow::Result<Option<String>> {
    let (env_filter, filter_error) = parse_filter(filter);
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
        LogFormat::Pretty => registry
            .with(fmt::layer().with_thread_ids(true).with_target(true))
            .try_init()?,
    }

    Ok(filter_error)
}
