//! # ember-logging
//!
//! Structured logging setup for the Ember crates.
//!
//! - [`LogLevel`] / [`LogFormat`]: the values configuration can select
//! - [`init_subscriber`]: install the global `tracing` subscriber on stderr
//! - [`test_utils`]: in-memory capture for asserting on emitted events
//!
//! Library crates only emit through `tracing` macros; installing a
//! subscriber is left to the host application.

#![deny(unsafe_code)]

pub mod test_utils;
pub mod types;

pub use test_utils::{CapturedEvent, CapturedLogs, capture_logs};
pub use types::{LogFormat, LogLevel};

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber with compact stderr output.
///
/// Call once at application startup. Subsequent calls are no-ops.
/// `RUST_LOG`, when set, overrides `level`.
pub fn init_subscriber(level: LogLevel) {
    init_subscriber_with_format(level, LogFormat::Compact);
}

/// Initialize the global tracing subscriber with the chosen output format.
///
/// Same precedence and idempotence as [`init_subscriber`].
pub fn init_subscriber_with_format(level: LogLevel, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    // try_init fails if a global subscriber is already set
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_subscriber_does_not_panic() {
        // Multiple calls should be safe (no-op after first)
        init_subscriber(LogLevel::Warn);
        init_subscriber(LogLevel::Debug);
        init_subscriber_with_format(LogLevel::Info, LogFormat::Json);
    }
}
