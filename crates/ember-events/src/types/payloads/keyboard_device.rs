//! `KeyboardDeviceEvent`: keyboard hotplug.

use std::fmt::{self, Display};

use serde::Serialize;

use super::{CommonEvent, KeyboardId, Rendered, impl_event_payload};
use crate::types::event_type::EventType;
use crate::types::kind_set::{AcceptsKind, KindSet};
use crate::types::typed::TypedEventType;

/// Payload for [`EventType::KEYBOARD_ADDED`] and
/// [`EventType::KEYBOARD_REMOVED`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct KeyboardDeviceEvent {
    #[serde(flatten)]
    common: CommonEvent,
    /// The keyboard that was attached or detached.
    pub which: KeyboardId,
}

impl KeyboardDeviceEvent {
    /// Keyboard attached.
    pub const ADDED: TypedEventType<Self> = TypedEventType::new_unchecked(EventType::KEYBOARD_ADDED);
    /// Keyboard detached.
    pub const REMOVED: TypedEventType<Self> =
        TypedEventType::new_unchecked(EventType::KEYBOARD_REMOVED);

    /// A hotplug event for keyboard `which`.
    #[must_use]
    pub const fn new(kind: TypedEventType<Self>, timestamp: u64, which: KeyboardId) -> Self {
        Self {
            common: CommonEvent::new(kind.kind(), timestamp),
            which,
        }
    }

    pub(crate) const fn from_common(common: CommonEvent, which: KeyboardId) -> Self {
        Self { common, which }
    }

    /// Whether this reports a newly attached keyboard.
    #[must_use]
    pub fn is_added(&self) -> bool {
        self.common.kind() == EventType::KEYBOARD_ADDED
    }
}

impl AcceptsKind for KeyboardDeviceEvent {
    const ACCEPTED: KindSet = KindSet::Pair(EventType::KEYBOARD_ADDED, EventType::KEYBOARD_REMOVED);
}

impl_event_payload!(<'a> KeyboardDeviceEvent => KeyboardDevice);

impl Display for KeyboardDeviceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rendered::new(
            self.common.kind(),
            self.common.timestamp(),
            &[("Which", &self.which)],
        )
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Event;
    use crate::errors::EventError;
    use crate::types::payloads::{EventHeader, EventPayload, QuitEvent};
    use assert_matches::assert_matches;

    #[test]
    fn accepts_exactly_added_and_removed() {
        assert!(KeyboardDeviceEvent::accepts(EventType::KEYBOARD_ADDED));
        assert!(KeyboardDeviceEvent::accepts(EventType::KEYBOARD_REMOVED));
        assert!(!KeyboardDeviceEvent::accepts(EventType::KEYBOARD_KEY_DOWN));
        assert!(!KeyboardDeviceEvent::accepts(EventType::MOUSE_ADDED));
    }

    #[test]
    fn roundtrip_both_kinds() {
        for kind in [KeyboardDeviceEvent::ADDED, KeyboardDeviceEvent::REMOVED] {
            let original = KeyboardDeviceEvent::new(kind, 100, KeyboardId(7));
            let event: Event<'_> = original.into();
            assert_eq!(event.kind(), kind);
            assert_eq!(KeyboardDeviceEvent::try_from(event).unwrap(), original);
        }
    }

    #[test]
    fn set_kind_switches_between_accepted_kinds() {
        let mut ev = KeyboardDeviceEvent::new(KeyboardDeviceEvent::ADDED, 0, KeyboardId(1));
        assert!(ev.is_added());
        ev.set_kind(KeyboardDeviceEvent::REMOVED);
        assert!(!ev.is_added());
        assert_eq!(ev.kind(), EventType::KEYBOARD_REMOVED);
    }

    #[test]
    fn typed_kind_from_plain_kind_is_validated() {
        let typed = TypedEventType::<KeyboardDeviceEvent>::try_from(EventType::KEYBOARD_REMOVED).unwrap();
        assert_eq!(typed, KeyboardDeviceEvent::REMOVED);
        assert_matches!(
            TypedEventType::<KeyboardDeviceEvent>::try_from(EventType::KEYBOARD_KEY_UP),
            Err(EventError::KindMismatch { expected, .. })
                if expected == "Keyboard.Added | Keyboard.Removed"
        );
    }

    #[test]
    fn narrowing_other_payload_fails() {
        let event = QuitEvent::new(1).widen();
        assert_matches!(
            KeyboardDeviceEvent::narrow(&event),
            Err(EventError::KindMismatch { .. })
        );
    }

    #[test]
    fn display_appends_which() {
        let ev = KeyboardDeviceEvent::new(KeyboardDeviceEvent::ADDED, 3_000_000_000, KeyboardId(9));
        assert_eq!(
            ev.to_string(),
            "{ Type: Keyboard.Added, Timestamp: 0h 0min 3s 0ms 0ns, Which: 9 }"
        );
    }
}
