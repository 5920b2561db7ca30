//! `OpaqueEvent`: raw storage for kinds without a dedicated payload type.

use std::fmt::{self, Display};

use serde::{Serialize, Serializer};

use super::{CommonEvent, Rendered, impl_event_payload};
use crate::types::event_type::EventType;
use crate::types::kind_set::{AcceptsKind, KindSet};
use crate::types::typed::TypedEventType;

/// Bytes following the common prefix in a native event.
pub const OPAQUE_DATA_LEN: usize = 112;

/// Payload for every kind that no dedicated payload type claims (mouse,
/// gamepad, pen, …, plus unregistered values). Never carries
/// [`EventType::LAST`].
///
/// The bytes after the prefix are kept verbatim so the event survives a
/// decode/encode round trip unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct OpaqueEvent {
    #[serde(flatten)]
    common: CommonEvent,
    /// Native bytes after the prefix, uninterpreted.
    #[serde(serialize_with = "serialize_data")]
    pub data: [u8; OPAQUE_DATA_LEN],
}

impl OpaqueEvent {
    /// A zero-filled event of `kind`.
    #[must_use]
    pub const fn new(kind: TypedEventType<Self>, timestamp: u64) -> Self {
        Self::from_common(CommonEvent::new(kind.kind(), timestamp), [0; OPAQUE_DATA_LEN])
    }

    pub(crate) const fn from_common(common: CommonEvent, data: [u8; OPAQUE_DATA_LEN]) -> Self {
        Self { common, data }
    }
}

impl AcceptsKind for OpaqueEvent {
    const ACCEPTED: KindSet = KindSet::Unclaimed;
}

impl_event_payload!(<'a> OpaqueEvent => Opaque);

fn serialize_data<S: Serializer>(
    data: &[u8; OPAQUE_DATA_LEN],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(data)
}

impl Display for OpaqueEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rendered::new(self.common.kind(), self.common.timestamp(), &[]).fmt(f)
    }
}
