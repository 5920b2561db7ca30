//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase", default)]`, so a partial
//! JSON file only needs the keys it changes.

mod events;
mod logging;

pub use events::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Root settings type.
///
/// # JSON Format
///
/// ```json
/// {
///   "logging": { "level": "debug", "format": "json" },
///   "events": { "queueCapacity": 1024, "disabled": ["Mouse.Motion"] }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmberSettings {
    /// Subscriber configuration.
    pub logging: LoggingSettings,
    /// Event queue configuration.
    pub events: EventSettings,
}

impl EmberSettings {
    /// Check every section for values the event layer would reject.
    pub fn validate(&self) -> Result<()> {
        self.events.validate()
    }
}
