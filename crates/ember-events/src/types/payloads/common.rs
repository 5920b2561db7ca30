//! The shared event prefix.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::{EventHeader, Rendered};
use crate::types::event_type::EventType;
use crate::types::kind_set::{AcceptsKind, KindSet};

/// Kind + timestamp prefix present at the start of every event.
///
/// As a standalone value it accepts every kind: narrowing any envelope to
/// a `CommonEvent` (via [`Event::common`](crate::Event::common)) always
/// succeeds, and widening one produces the zero-filled variant for its kind
/// (every kind except [`EventType::LAST`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommonEvent {
    #[serde(rename = "type")]
    kind: EventType,
    #[serde(skip)]
    reserved: u32,
    timestamp: u64,
}

impl CommonEvent {
    /// A prefix with the given kind and timestamp.
    #[must_use]
    pub const fn new(kind: EventType, timestamp: u64) -> Self {
        Self {
            kind,
            reserved: 0,
            timestamp,
        }
    }

    /// The kind.
    #[must_use]
    pub const fn kind(&self) -> EventType {
        self.kind
    }

    /// Native monotonic tick count, in nanoseconds.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Replace the kind. Only standalone prefixes can be mutated this way;
    /// payloads expose theirs read-only.
    pub fn set_kind(&mut self, kind: EventType) {
        self.kind = kind;
    }

    /// Replace the timestamp.
    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.timestamp = timestamp;
    }

    /// Native reserved word that follows the kind.
    #[must_use]
    pub const fn reserved(&self) -> u32 {
        self.reserved
    }

    pub(crate) fn with_reserved(mut self, reserved: u32) -> Self {
        self.reserved = reserved;
        self
    }
}

impl EventHeader for CommonEvent {
    fn kind(&self) -> EventType {
        self.kind
    }

    fn timestamp(&self) -> u64 {
        self.timestamp
    }

    fn set_timestamp(&mut self, timestamp: u64) {
        CommonEvent::set_timestamp(self, timestamp);
    }
}

impl AcceptsKind for CommonEvent {
    const ACCEPTED: KindSet = KindSet::Any;
}

impl Display for CommonEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rendered::new(self.kind, self.timestamp, &[]).fmt(f)
    }
}
