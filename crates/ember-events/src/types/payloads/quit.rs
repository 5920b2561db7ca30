//! `QuitEvent`: user-requested application quit.

use std::fmt::{self, Display};

use serde::Serialize;

use super::{CommonEvent, Rendered, impl_event_payload};
use crate::types::event_type::EventType;
use crate::types::kind_set::{AcceptsKind, KindSet};
use crate::types::typed::TypedEventType;

/// Payload for [`EventType::APPLICATION_QUIT`]. Carries the prefix only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct QuitEvent {
    #[serde(flatten)]
    common: CommonEvent,
}

impl QuitEvent {
    /// The only kind a quit event carries.
    pub const TYPE: TypedEventType<Self> = TypedEventType::new_unchecked(EventType::APPLICATION_QUIT);

    /// A quit event stamped with `timestamp`.
    #[must_use]
    pub const fn new(timestamp: u64) -> Self {
        Self {
            common: CommonEvent::new(EventType::APPLICATION_QUIT, timestamp),
        }
    }

    pub(crate) const fn from_common(common: CommonEvent) -> Self {
        Self { common }
    }
}

impl Default for QuitEvent {
    fn default() -> Self {
        Self::new(0)
    }
}

impl AcceptsKind for QuitEvent {
    const ACCEPTED: KindSet = KindSet::One(EventType::APPLICATION_QUIT);
}

impl_event_payload!(<'a> QuitEvent => Quit);

impl Display for QuitEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rendered::new(self.common.kind(), self.common.timestamp(), &[]).fmt(f)
    }
}
