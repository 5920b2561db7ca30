//! Event queue settings.

use ember_events::EventType;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SettingsError};

/// Largest accepted queue capacity.
pub const MAX_QUEUE_CAPACITY: usize = 1_000_000;

/// Event queue configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventSettings {
    /// Maximum number of queued records.
    pub queue_capacity: usize,
    /// Kinds disabled at startup, by display name (`"Mouse.Motion"`,
    /// `"User(3)"`, `"0x400"`, …).
    pub disabled: Vec<String>,
    /// User kinds to register up front. `0` registers none.
    pub user_kind_reserve: u32,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            queue_capacity: ember_events::queue::local::DEFAULT_CAPACITY,
            disabled: Vec::new(),
            user_kind_reserve: 0,
        }
    }
}

impl EventSettings {
    /// Resolve [`disabled`](Self::disabled) to kinds.
    ///
    /// Fails with [`SettingsError::InvalidValue`] on the first unknown name.
    pub fn disabled_kinds(&self) -> Result<Vec<EventType>> {
        self.disabled
            .iter()
            .map(|name| {
                name.parse::<EventType>()
                    .map_err(|e| SettingsError::InvalidValue(format!("events.disabled: {e}")))
            })
            .collect()
    }

    /// Check ranges and names.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_QUEUE_CAPACITY).contains(&self.queue_capacity) {
            return Err(SettingsError::InvalidValue(format!(
                "events.queueCapacity must be in 1..={MAX_QUEUE_CAPACITY}, got {}",
                self.queue_capacity
            )));
        }
        if self.user_kind_reserve > EventType::USER_RANGE_LEN {
            return Err(SettingsError::InvalidValue(format!(
                "events.userKindReserve must be at most {}, got {}",
                EventType::USER_RANGE_LEN,
                self.user_kind_reserve
            )));
        }
        let _ = self.disabled_kinds()?;
        Ok(())
    }
}
