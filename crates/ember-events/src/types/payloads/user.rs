//! `UserEvent`: caller-defined events in the user kind range.

use std::fmt::{self, Display};

use serde::Serialize;

use super::{CommonEvent, Rendered, WindowId, impl_event_payload};
use crate::types::event_type::EventType;
use crate::types::kind_set::{AcceptsKind, KindSet};
use crate::types::typed::TypedEventType;

/// Payload for any kind in `[User, Last)`.
///
/// `code`, `data1` and `data2` are entirely caller-defined. The data slots
/// are pointer-sized so a native consumer can stash addresses in them; this
/// layer never dereferences them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct UserEvent {
    #[serde(flatten)]
    common: CommonEvent,
    /// Associated window, if any.
    pub window_id: WindowId,
    /// Caller-defined code.
    pub code: i32,
    /// First caller-defined word.
    pub data1: usize,
    /// Second caller-defined word.
    pub data2: usize,
}

impl UserEvent {
    /// A user event with zeroed fields.
    #[must_use]
    pub const fn new(kind: TypedEventType<Self>, timestamp: u64) -> Self {
        Self::from_common(CommonEvent::new(kind.kind(), timestamp), WindowId(0), 0, 0, 0)
    }

    pub(crate) const fn from_common(
        common: CommonEvent,
        window_id: WindowId,
        code: i32,
        data1: usize,
        data2: usize,
    ) -> Self {
        Self {
            common,
            window_id,
            code,
            data1,
            data2,
        }
    }

    /// Builder-style setter for [`code`](Self::code).
    #[must_use]
    pub const fn with_code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    /// Builder-style setter for both data words.
    #[must_use]
    pub const fn with_data(mut self, data1: usize, data2: usize) -> Self {
        self.data1 = data1;
        self.data2 = data2;
        self
    }

    /// Builder-style setter for [`window_id`](Self::window_id).
    #[must_use]
    pub const fn with_window(mut self, window_id: WindowId) -> Self {
        self.window_id = window_id;
        self
    }

    /// Offset of this event's kind within the user range.
    #[must_use]
    pub fn user_value(&self) -> u32 {
        // The kind is validated on every path that sets it.
        self.common.kind().try_user_value().unwrap_or_default()
    }
}

impl AcceptsKind for UserEvent {
    const ACCEPTED: KindSet = KindSet::Range(EventType::USER, EventType::from_raw(EventType::LAST.raw() - 1));
}

impl_event_payload!(<'a> UserEvent => User);

impl Display for UserEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data1 = format!("{:#x}", self.data1);
        let data2 = format!("{:#x}", self.data2);
        Rendered::new(
            self.common.kind(),
            self.common.timestamp(),
            &[
                ("WindowId", &self.window_id),
                ("Code", &self.code),
                ("Data1", &data1),
                ("Data2", &data2),
            ],
        )
        .fmt(f)
    }
}
