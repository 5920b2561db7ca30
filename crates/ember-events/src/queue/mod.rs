//! Boundary traits for the native event queue.
//!
//! The queue itself (pumping, filtering, cross-thread delivery) belongs to
//! the native library. This layer only needs three things from it:
//!
//! - [`EventSource`]: pull the next raw record
//! - [`EventSink`]: push a caller-built record back
//! - [`EventFilter`]: per-kind enabled state, backing [`EventType::is_enabled`]
//!
//! [`LocalQueue`] implements all three in process, for tests and for hosts
//! without a native queue.

pub mod local;

use std::time::Duration;

use crate::envelope::Event;
use crate::errors::Result;
use crate::raw::RawEvent;
use crate::types::EventType;

pub use local::LocalQueue;

/// Producer side of the queue, as seen by a consumer.
pub trait EventSource {
    /// Take the next record without blocking.
    fn poll_raw(&self) -> Option<RawEvent>;

    /// Take the next record, blocking up to `timeout` (`None` waits forever).
    fn wait_raw(&self, timeout: Option<Duration>) -> Option<RawEvent>;

    /// Take and decode the next record without blocking.
    fn poll(&self) -> Result<Option<Event<'static>>> {
        self.poll_raw().map(|raw| raw.decode()).transpose()
    }

    /// Take and decode the next record, blocking up to `timeout`.
    fn wait(&self, timeout: Option<Duration>) -> Result<Option<Event<'static>>> {
        self.wait_raw(timeout).map(|raw| raw.decode()).transpose()
    }
}

/// Accepts caller-built events.
pub trait EventSink {
    /// Enqueue `raw`.
    ///
    /// Returns `Ok(false)` if the kind is disabled and the record was
    /// dropped.
    fn push_raw(&self, raw: RawEvent) -> Result<bool>;

    /// Encode and enqueue `event`.
    fn push(&self, event: &Event<'_>) -> Result<bool> {
        self.push_raw(event.to_raw())
    }
}

/// Per-kind enabled state.
///
/// Not part of [`EventType`] identity: two equal kinds share one flag.
pub trait EventFilter {
    /// Whether records of `kind` are currently accepted.
    fn is_enabled(&self, kind: EventType) -> bool;

    /// Enable or disable `kind`. Disabling drops queued records of that kind.
    fn set_enabled(&self, kind: EventType, enabled: bool);
}
