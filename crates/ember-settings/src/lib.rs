//! # ember-settings
//!
//! Configuration management with layered sources for the Ember event layer.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`EmberSettings::default()`]
//! 2. **User file**: `~/.ember/settings.json` (deep-merged over defaults)
//! 3. **Environment variables**: `EMBER_*` overrides (highest priority)
//!
//! [`build_queue`] turns the event section into a ready [`LocalQueue`], and
//! [`LoggingSettings::init`] installs the subscriber.
//!
//! # Usage
//!
//! ```no_run
//! use ember_settings::{build_queue, get_settings};
//!
//! let settings = get_settings();
//! settings.logging.init();
//! let configured = build_queue(&settings.events).unwrap();
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    apply_env_overrides, apply_overrides_from, deep_merge, load_settings, load_settings_from_path,
    load_settings_with, settings_path,
};
pub use types::*;

use std::sync::OnceLock;

use ember_events::{EventFilter, EventType, LocalQueue};
use tracing::{debug, warn};

/// Global settings singleton.
static SETTINGS: OnceLock<EmberSettings> = OnceLock::new();

/// Get the global settings instance.
///
/// On first call, loads settings from `~/.ember/settings.json` with env var
/// overrides. If loading fails, the error is logged and compiled defaults
/// are used.
pub fn get_settings() -> &'static EmberSettings {
    SETTINGS.get_or_init(|| {
        load_settings().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load settings, using defaults");
            EmberSettings::default()
        })
    })
}

/// Initialize the global settings with a specific value.
///
/// Returns the provided settings back if the global was already initialized.
#[allow(clippy::result_large_err)]
pub fn init_settings(settings: EmberSettings) -> std::result::Result<(), EmberSettings> {
    SETTINGS.set(settings)
}

/// A queue built from [`EventSettings`].
#[derive(Debug)]
pub struct ConfiguredQueue {
    /// The queue, with the configured kinds already disabled.
    pub queue: LocalQueue,
    /// First kind of the reserved user block, if any were requested.
    pub reserved_user_kinds: Option<EventType>,
}

/// Build a [`LocalQueue`] from event settings.
///
/// Validates the settings, disables every listed kind and registers the
/// requested user kinds.
pub fn build_queue(settings: &EventSettings) -> Result<ConfiguredQueue> {
    settings.validate()?;
    let queue = LocalQueue::new(settings.queue_capacity);
    for kind in settings.disabled_kinds()? {
        queue.set_enabled(kind, false);
    }
    let reserved_user_kinds = match settings.user_kind_reserve {
        0 => None,
        count => Some(queue.register_user_kinds(count)?),
    };
    debug!(
        capacity = settings.queue_capacity,
        disabled = settings.disabled.len(),
        reserved = settings.user_kind_reserve,
        "event queue configured"
    );
    Ok(ConfiguredQueue {
        queue,
        reserved_user_kinds,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
