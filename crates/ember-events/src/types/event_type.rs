//! The [`EventType`] identity value.
//!
//! An `EventType` is a thin wrapper over the native 32-bit discriminant.
//! Named kinds are associated constants generated from the registry table
//! (e.g. [`EventType::APPLICATION_QUIT`]); caller-defined kinds live in the
//! open-ended user range and are built with [`EventType::user`].
//!
//! Rendering follows three tiers:
//! - registered kinds print as `"Category.Name"`
//! - kinds in `[User, Last)` print as `"User(n)"`
//! - anything else prints as its raw decimal value

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::registry::{ALL_NAMED_KINDS, EventCategory};
use crate::errors::{EventError, Result};
use crate::queue::EventFilter;

/// Event kind discriminant.
///
/// Equality, ordering and hashing are by raw value. The enabled/disabled
/// state of a kind is owned by the queue collaborator and is not part of
/// identity; see [`is_enabled`](Self::is_enabled).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct EventType(u32);

impl EventType {
    /// Lowest possible value. Never used by a live event.
    pub const FIRST: Self = Self(0);
    /// Start of the caller-registered range.
    pub const USER: Self = Self(0x8000);
    /// Terminal sentinel. Never a valid live kind.
    pub const LAST: Self = Self(0xFFFF);
    /// Number of kinds in `[User, Last)`.
    pub const USER_RANGE_LEN: u32 = Self::LAST.0 - Self::USER.0;

    /// Wrap a raw discriminant.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw discriminant.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The kind `offset` positions into the user range.
    ///
    /// Fails with [`EventError::UserOffsetOutOfRange`] if `offset` is
    /// negative or would land on or past [`EventType::LAST`].
    pub fn user(offset: i32) -> Result<Self> {
        let max = Self::USER_RANGE_LEN - 1;
        match u32::try_from(offset) {
            Ok(off) if off <= max => Ok(Self(Self::USER.0 + off)),
            _ => Err(EventError::UserOffsetOutOfRange {
                offset: i64::from(offset),
                max,
            }),
        }
    }

    /// Offset within the user range, if this is a user kind.
    #[must_use]
    pub const fn try_user_value(self) -> Option<u32> {
        if self.is_user() {
            Some(self.0 - Self::USER.0)
        } else {
            None
        }
    }

    /// Whether this kind lies in `[User, Last)`.
    #[must_use]
    pub const fn is_user(self) -> bool {
        self.0 >= Self::USER.0 && self.0 < Self::LAST.0
    }

    /// Category whose range contains this kind.
    #[must_use]
    pub fn category(self) -> Option<EventCategory> {
        EventCategory::of(self)
    }

    /// Symbolic `"Category.Name"` for registered kinds.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        self.symbolic_name()
    }

    /// Whether the queue collaborator currently accepts this kind.
    pub fn is_enabled<F: EventFilter + ?Sized>(self, filter: &F) -> bool {
        filter.is_enabled(self)
    }

    /// Enable or disable this kind on the queue collaborator.
    pub fn set_enabled<F: EventFilter + ?Sized>(self, filter: &F, enabled: bool) {
        filter.set_enabled(self, enabled);
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.symbolic_name() {
            f.write_str(name)
        } else if let Some(offset) = self.try_user_value() {
            write!(f, "User({offset})")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Debug for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventType")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl From<EventType> for u32 {
    fn from(kind: EventType) -> Self {
        kind.0
    }
}

impl FromStr for EventType {
    type Err = String;

    /// Parses every form [`Display`](fmt::Display) produces, plus `0x` hex.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(inner) = s.strip_prefix("User(").and_then(|r| r.strip_suffix(')')) {
            let offset: i32 = inner
                .trim()
                .parse()
                .map_err(|_| format!("unknown event type: {s}"))?;
            return Self::user(offset).map_err(|e| e.to_string());
        }
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return u32::from_str_radix(hex, 16)
                .map(Self)
                .map_err(|_| format!("unknown event type: {s}"));
        }
        if let Ok(raw) = s.parse::<u32>() {
            return Ok(Self(raw));
        }
        ALL_NAMED_KINDS
            .iter()
            .copied()
            .find(|kind| kind.symbolic_name() == Some(s))
            .ok_or_else(|| format!("unknown event type: {s}"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::registry::ALL_CATEGORIES;
    use assert_matches::assert_matches;
    use std::collections::HashSet;

    #[test]
    fn named_kind_display() {
        assert_eq!(EventType::APPLICATION_QUIT.to_string(), "Application.Quit");
        assert_eq!(EventType::CLIPBOARD_UPDATE.to_string(), "Clipboard.Updated");
        assert_eq!(EventType::KEYBOARD_ADDED.to_string(), "Keyboard.Added");
        assert_eq!(EventType::WINDOW_CLOSE_REQUESTED.to_string(), "Window.CloseRequested");
        assert_eq!(EventType::INTERNAL_POLL_SENTINEL.to_string(), "Internal.PollSentinel");
    }

    #[test]
    fn user_kind_display() {
        assert_eq!(EventType::user(5).unwrap().to_string(), "User(5)");
        assert_eq!(EventType::USER.to_string(), "User(0)");
    }

    #[test]
    fn unregistered_kind_display_is_numeric() {
        assert_eq!(EventType::from_raw(0x123).to_string(), "291");
        assert_eq!(EventType::LAST.to_string(), "65535");
        assert_eq!(EventType::FIRST.to_string(), "0");
    }

    #[test]
    fn debug_wraps_display() {
        assert_eq!(
            format!("{:?}", EventType::APPLICATION_QUIT),
            "EventType(Application.Quit)"
        );
    }

    #[test]
    fn user_zero_is_user_base() {
        assert_eq!(EventType::user(0).unwrap(), EventType::USER);
    }

    #[test]
    fn user_last_valid_offset() {
        let max = i32::try_from(EventType::LAST.raw() - EventType::USER.raw() - 1).unwrap();
        let kind = EventType::user(max).unwrap();
        assert_eq!(kind.raw(), EventType::LAST.raw() - 1);
        assert!(kind.is_user());
    }

    #[test]
    fn user_offset_at_last_fails() {
        let at_last = i32::try_from(EventType::LAST.raw() - EventType::USER.raw()).unwrap();
        assert_matches!(
            EventType::user(at_last),
            Err(EventError::UserOffsetOutOfRange { offset, max: 32_766 }) if offset == i64::from(at_last)
        );
    }

    #[test]
    fn user_negative_offset_fails() {
        assert_matches!(
            EventType::user(-1),
            Err(EventError::UserOffsetOutOfRange { offset: -1, .. })
        );
    }

    #[test]
    fn try_user_value_only_inside_range() {
        assert_eq!(EventType::USER.try_user_value(), Some(0));
        assert_eq!(EventType::user(42).unwrap().try_user_value(), Some(42));
        assert_eq!(EventType::LAST.try_user_value(), None);
        assert_eq!(EventType::APPLICATION_QUIT.try_user_value(), None);
        assert_eq!(EventType::from_raw(0x7FFF).try_user_value(), None);
    }

    #[test]
    fn ordering_follows_raw_value() {
        assert!(EventType::APPLICATION_QUIT < EventType::CLIPBOARD_UPDATE);
        assert!(EventType::CLIPBOARD_UPDATE < EventType::USER);
        assert!(EventType::user(1).unwrap() > EventType::USER);
        assert!(EventType::LAST > EventType::user(32_766).unwrap());
    }

    #[test]
    fn named_kinds_never_alias() {
        let mut seen = HashSet::new();
        for kind in &ALL_NAMED_KINDS {
            assert!(seen.insert(kind.raw()), "duplicate raw value: {kind}");
        }
    }

    #[test]
    fn named_kinds_sit_in_their_category() {
        for kind in ALL_NAMED_KINDS {
            let category = kind.category().expect("named kind has a category");
            let name = kind.name().unwrap();
            assert!(
                name.starts_with(&format!("{}.", category.as_str())),
                "{name} not in {category}"
            );
        }
    }

    #[test]
    fn categories_are_disjoint() {
        for (i, a) in ALL_CATEGORIES.iter().enumerate() {
            for b in &ALL_CATEGORIES[i + 1..] {
                assert!(
                    a.range().end() < b.range().start(),
                    "{a} overlaps or precedes {b}"
                );
            }
        }
    }

    #[test]
    fn user_category_is_exactly_user_range() {
        let range = EventCategory::User.range();
        assert_eq!(*range.start(), EventType::USER.raw());
        assert_eq!(*range.end(), EventType::LAST.raw() - 1);
        assert_eq!(EventType::LAST.category(), None);
    }

    #[test]
    fn category_ranges_match_native_values() {
        assert_eq!(EventType::APPLICATION_QUIT.raw(), 0x100);
        assert_eq!(EventType::DISPLAY_ORIENTATION.raw(), 0x151);
        assert_eq!(EventType::WINDOW_SHOWN.raw(), 0x202);
        assert_eq!(EventType::KEYBOARD_KEY_DOWN.raw(), 0x300);
        assert_eq!(EventType::MOUSE_MOTION.raw(), 0x400);
        assert_eq!(EventType::JOYSTICK_AXIS_MOTION.raw(), 0x600);
        assert_eq!(EventType::GAMEPAD_AXIS_MOTION.raw(), 0x650);
        assert_eq!(EventType::TOUCH_FINGER_DOWN.raw(), 0x700);
        assert_eq!(EventType::CLIPBOARD_UPDATE.raw(), 0x900);
        assert_eq!(EventType::DROP_FILE.raw(), 0x1000);
        assert_eq!(EventType::AUDIO_DEVICE_ADDED.raw(), 0x1100);
        assert_eq!(EventType::SENSOR_UPDATE.raw(), 0x1200);
        assert_eq!(EventType::PEN_PROXIMITY_IN.raw(), 0x1300);
        assert_eq!(EventType::CAMERA_DEVICE_ADDED.raw(), 0x1400);
        assert_eq!(EventType::RENDER_TARGETS_RESET.raw(), 0x2000);
        assert_eq!(EventType::PRIVATE_3.raw(), 0x4003);
        assert_eq!(EventType::INTERNAL_POLL_SENTINEL.raw(), 0x7F00);
    }

    #[test]
    fn from_str_all_named_kinds() {
        for kind in ALL_NAMED_KINDS {
            let parsed: EventType = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn from_str_user_hex_and_decimal() {
        assert_eq!("User(5)".parse::<EventType>().unwrap(), EventType::user(5).unwrap());
        assert_eq!("0x900".parse::<EventType>().unwrap(), EventType::CLIPBOARD_UPDATE);
        assert_eq!("256".parse::<EventType>().unwrap(), EventType::APPLICATION_QUIT);
    }

    #[test]
    fn from_str_rejects_invalid() {
        let err = "Window.Teleported".parse::<EventType>().unwrap_err();
        assert!(err.contains("unknown event type"));
        assert!("".parse::<EventType>().is_err());
        assert!("User(abc)".parse::<EventType>().is_err());
        assert!("User(40000)".parse::<EventType>().unwrap_err().contains("out of range"));
    }

    #[test]
    fn serde_is_raw_number() {
        let json = serde_json::to_value(EventType::CLIPBOARD_UPDATE).unwrap();
        assert_eq!(json, serde_json::json!(0x900));
        let back: EventType = serde_json::from_value(json).unwrap();
        assert_eq!(back, EventType::CLIPBOARD_UPDATE);
    }

    #[test]
    fn hash_and_eq() {
        let mut set = HashSet::new();
        let _ = set.insert(EventType::APPLICATION_QUIT);
        let _ = set.insert(EventType::from_raw(0x100));
        assert_eq!(set.len(), 1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn display_parse_roundtrip(raw in any::<u32>()) {
                let kind = EventType::from_raw(raw);
                let parsed: EventType = kind.to_string().parse().unwrap();
                prop_assert_eq!(parsed, kind);
            }

            #[test]
            fn user_offsets_roundtrip(offset in 0i32..32_767) {
                let kind = EventType::user(offset).unwrap();
                prop_assert_eq!(kind.try_user_value(), Some(u32::try_from(offset).unwrap()));
                prop_assert_eq!(kind.category(), Some(EventCategory::User));
            }

            #[test]
            fn ordering_matches_raw(a in any::<u32>(), b in any::<u32>()) {
                prop_assert_eq!(
                    EventType::from_raw(a).cmp(&EventType::from_raw(b)),
                    a.cmp(&b)
                );
            }
        }
    }
}
