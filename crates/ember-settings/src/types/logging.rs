//! Logging settings.

use ember_logging::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// Subscriber configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Minimum level written to stderr. `RUST_LOG` takes precedence.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
}

impl LoggingSettings {
    /// Install the global subscriber described by these settings.
    pub fn init(&self) {
        ember_logging::init_subscriber_with_format(self.level, self.format);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = LoggingSettings::default();
        assert_eq!(settings.level, LogLevel::Warn);
        assert_eq!(settings.format, LogFormat::Compact);
    }

    #[test]
    fn parses_lowercase_names() {
        let settings: LoggingSettings =
            serde_json::from_str(r#"{"level": "trace", "format": "json"}"#).unwrap();
        assert_eq!(settings.level, LogLevel::Trace);
        assert_eq!(settings.format, LogFormat::Json);
    }
}
