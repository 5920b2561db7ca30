//! `WindowEvent`: window state changes.

use std::fmt::{self, Display};

use serde::Serialize;

use super::{CommonEvent, Rendered, WindowId, impl_event_payload};
use crate::types::event_type::EventType;
use crate::types::kind_set::{AcceptsKind, KindSet};
use crate::types::typed::TypedEventType;

/// Payload for every kind from [`EventType::WINDOW_SHOWN`] through
/// [`EventType::WINDOW_HDR_STATE_CHANGED`].
///
/// `data1`/`data2` are kind-dependent (position for `Moved`, size for
/// `Resized`, display index for `DisplayChanged`, …).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct WindowEvent {
    #[serde(flatten)]
    common: CommonEvent,
    /// The window the event concerns.
    pub window_id: WindowId,
    /// First kind-dependent value.
    pub data1: i32,
    /// Second kind-dependent value.
    pub data2: i32,
}

impl WindowEvent {
    /// A window event carrying `kind`.
    #[must_use]
    pub const fn new(
        kind: TypedEventType<Self>,
        timestamp: u64,
        window_id: WindowId,
        data1: i32,
        data2: i32,
    ) -> Self {
        Self {
            common: CommonEvent::new(kind.kind(), timestamp),
            window_id,
            data1,
            data2,
        }
    }

    pub(crate) const fn from_common(common: CommonEvent, window_id: WindowId, data1: i32, data2: i32) -> Self {
        Self {
            common,
            window_id,
            data1,
            data2,
        }
    }
}

impl AcceptsKind for WindowEvent {
    const ACCEPTED: KindSet = KindSet::Range(EventType::WINDOW_SHOWN, EventType::WINDOW_HDR_STATE_CHANGED);
}

impl_event_payload!(<'a> WindowEvent => Window);

impl Display for WindowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rendered::new(
            self.common.kind(),
            self.common.timestamp(),
            &[
                ("WindowId", &self.window_id),
                ("Data1", &self.data1),
                ("Data2", &self.data2),
            ],
        )
        .fmt(f)
    }
}
