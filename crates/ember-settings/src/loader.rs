//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`EmberSettings::default()`]
//! 2. If `~/.ember/settings.json` exists, deep-merge user values over defaults
//! 3. Apply `EMBER_*` environment variable overrides (highest priority)
//! 4. Validate the result
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use ember_events::EventType;
use ember_logging::{LogFormat, LogLevel};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::types::{EmberSettings, MAX_QUEUE_CAPACITY};

/// Minimum log level.
pub const ENV_LOG_LEVEL: &str = "EMBER_LOG_LEVEL";
/// Log output format (`compact` or `json`).
pub const ENV_LOG_FORMAT: &str = "EMBER_LOG_FORMAT";
/// Queue capacity, `1..=1_000_000`.
pub const ENV_QUEUE_CAPACITY: &str = "EMBER_QUEUE_CAPACITY";
/// Comma-separated kind names to disable. Replaces the file's list.
pub const ENV_DISABLED_EVENTS: &str = "EMBER_DISABLED_EVENTS";
/// Number of user kinds to register at startup.
pub const ENV_USER_KIND_RESERVE: &str = "EMBER_USER_KIND_RESERVE";

/// Resolve the path to the settings file (`~/.ember/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".ember").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<EmberSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// If the file does not exist, returns defaults. Invalid JSON or a value
/// that fails validation is an error.
pub fn load_settings_from_path(path: &Path) -> Result<EmberSettings> {
    load_settings_with(path, |name| std::env::var(name).ok())
}

/// [`load_settings_from_path`] with an explicit variable lookup.
pub fn load_settings_with<F>(path: &Path, lookup: F) -> Result<EmberSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = serde_json::to_value(EmberSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    let mut settings: EmberSettings = serde_json::from_value(merged)?;
    apply_overrides_from(&mut settings, lookup);
    settings.validate()?;
    Ok(settings)
}

/// Recursive deep merge of two JSON values.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply process environment overrides to loaded settings.
pub fn apply_env_overrides(settings: &mut EmberSettings) {
    apply_overrides_from(settings, |name| std::env::var(name).ok());
}

/// Apply overrides read through `lookup`.
///
/// Invalid values are logged at warn and ignored, leaving the file or
/// default value in place.
pub fn apply_overrides_from<F>(settings: &mut EmberSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let env = Overrides { lookup };

    // ── Logging ─────────────────────────────────────────────────────
    if let Some(v) = env.read(ENV_LOG_LEVEL, |s| s.parse::<LogLevel>().ok()) {
        settings.logging.level = v;
    }
    if let Some(v) = env.read(ENV_LOG_FORMAT, |s| s.parse::<LogFormat>().ok()) {
        settings.logging.format = v;
    }

    // ── Events ──────────────────────────────────────────────────────
    if let Some(v) = env.read(ENV_QUEUE_CAPACITY, |s| {
        parse_usize_range(s, 1, MAX_QUEUE_CAPACITY)
    }) {
        settings.events.queue_capacity = v;
    }
    if let Some(v) = env.read(ENV_DISABLED_EVENTS, parse_kind_list) {
        settings.events.disabled = v.iter().map(ToString::to_string).collect();
    }
    if let Some(v) = env.read(ENV_USER_KIND_RESERVE, |s| {
        parse_u32_range(s, 0, EventType::USER_RANGE_LEN)
    }) {
        settings.events.user_kind_reserve = v;
    }
}

// ── Pure parsing functions (testable without env vars) ──────────────────────

/// Parse a string as a `usize` within a range.
pub fn parse_usize_range(val: &str, min: usize, max: usize) -> Option<usize> {
    let n: usize = val.trim().parse().ok()?;
    (n >= min && n <= max).then_some(n)
}

/// Parse a string as a `u32` within a range.
pub fn parse_u32_range(val: &str, min: u32, max: u32) -> Option<u32> {
    let n: u32 = val.trim().parse().ok()?;
    (n >= min && n <= max).then_some(n)
}

/// Parse a comma-separated list of kind names.
///
/// Empty entries are skipped, so `""` is the empty list. Any unknown name
/// rejects the whole list.
pub fn parse_kind_list(val: &str) -> Option<Vec<EventType>> {
    val.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<EventType>().ok())
        .collect()
}

// ── Variable readers ────────────────────────────────────────────────────────

struct Overrides<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> Overrides<F> {
    fn read<T>(&self, name: &str, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
        let val = (self.lookup)(name)?;
        let result = parse(&val);
        if result.is_none() {
            warn!(key = name, value = %val, "invalid env var, ignoring");
        }
        result
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
