//! Error types for the event layer.
//!
//! [`EventError`] is returned by every fallible conversion in this crate.
//! All variants are local and synchronous: nothing here is transient, so
//! none of them carry retry information.

use thiserror::Error;

use crate::types::EventType;

/// Errors that can occur while constructing, narrowing or queueing events.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EventError {
    /// The event's kind is not one the requested payload type accepts.
    #[error("event type mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        /// Rendering of the accepted kind set (e.g. `"Clipboard.Updated"`).
        expected: String,
        /// The kind actually carried by the event.
        actual: EventType,
    },

    /// A user kind was requested at or beyond the terminal sentinel.
    #[error("user event offset {offset} is out of range (valid: 0..={max})")]
    UserOffsetOutOfRange {
        /// The requested offset from the start of the user range.
        offset: i64,
        /// The largest valid offset.
        max: u32,
    },

    /// The operation exists in the API but has no implementation.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// Raw envelope bytes could not be decoded.
    #[error("malformed raw event: {0}")]
    MalformedRaw(String),

    /// The event queue has no room left.
    #[error("event queue is full (capacity {capacity})")]
    QueueFull {
        /// Configured queue capacity.
        capacity: usize,
    },

    /// Not enough user kinds remain to satisfy a registration request.
    #[error("user event range exhausted: requested {requested}, remaining {remaining}")]
    UserRangeExhausted {
        /// Number of kinds requested.
        requested: u32,
        /// Number of kinds still available.
        remaining: u32,
    },
}

/// Convenience type alias for event layer results.
pub type Result<T> = std::result::Result<T, EventError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
