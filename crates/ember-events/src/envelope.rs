//! The [`Event`] envelope: one value that can hold any payload variant.
//!
//! The envelope is a sum type whose variant is always the one whose payload
//! accepts the carried kind. Widening (`From<P> for Event`) preserves that
//! because payloads can only hold kinds they accept; narrowing re-checks it
//! before handing out a copy or a reference.
//!
//! The leading kind is readable without knowing the active variant, via
//! [`EventHeader::kind`] or [`Event::common`].

use std::fmt::{self, Display};

use serde::Serialize;

use crate::errors::{EventError, Result};
use crate::types::{
    AcceptsKind, ClipboardEvent, CommonEvent, EventHeader, EventPayload, EventType,
    KeyboardDeviceEvent, KeyboardId, OPAQUE_DATA_LEN, OpaqueEvent, QuitEvent, UserEvent,
    WindowEvent, WindowId,
};

/// A native event of any kind.
///
/// `'a` bounds borrowed native data reachable from the payload (the
/// clipboard MIME-type list); envelopes without such data are `'static`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Event<'a> {
    /// [`EventType::APPLICATION_QUIT`].
    Quit(QuitEvent),
    /// Window state changes.
    Window(WindowEvent),
    /// Keyboard hotplug.
    KeyboardDevice(KeyboardDeviceEvent),
    /// Clipboard content changed.
    Clipboard(ClipboardEvent<'a>),
    /// Caller-registered kinds.
    User(UserEvent),
    /// Every kind without a dedicated payload type.
    Opaque(OpaqueEvent),
}

/// Whether a dedicated (non-opaque) payload type accepts `kind`.
pub(crate) fn is_claimed(kind: EventType) -> bool {
    QuitEvent::accepts(kind)
        || WindowEvent::accepts(kind)
        || KeyboardDeviceEvent::accepts(kind)
        || ClipboardEvent::accepts(kind)
        || UserEvent::accepts(kind)
}

impl<'a> Event<'a> {
    /// The zero-filled envelope for `kind` at timestamp 0.
    ///
    /// Fails with [`EventError::KindMismatch`] for [`EventType::LAST`], the
    /// only value no variant accepts.
    pub fn zeroed(kind: EventType) -> Result<Self> {
        CommonEvent::new(kind, 0).try_into()
    }

    /// The shared prefix of the active variant.
    #[must_use]
    pub const fn common(&self) -> &CommonEvent {
        match self {
            Self::Quit(p) => p.header(),
            Self::Window(p) => p.header(),
            Self::KeyboardDevice(p) => p.header(),
            Self::Clipboard(p) => p.header(),
            Self::User(p) => p.header(),
            Self::Opaque(p) => p.header(),
        }
    }

    /// Copy the active payload out as `P`.
    ///
    /// Same as `P::try_from(event)`, but without consuming the envelope.
    pub fn narrow<P: EventPayload<'a>>(&self) -> Result<P> {
        P::narrow(self)
    }

    /// Whether `P` accepts this envelope's kind.
    #[must_use]
    pub fn is<P: AcceptsKind>(&self) -> bool {
        P::accepts(self.kind())
    }

    /// Whether this envelope carries a caller-registered kind.
    #[must_use]
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User(_))
    }

    /// Drop any borrowed native data, yielding an envelope that can outlive
    /// the native queue's buffers.
    #[must_use]
    pub fn detach(self) -> Event<'static> {
        match self {
            Self::Quit(p) => Event::Quit(p),
            Self::Window(p) => Event::Window(p),
            Self::KeyboardDevice(p) => Event::KeyboardDevice(p),
            Self::Clipboard(p) => Event::Clipboard(ClipboardEvent::from_common(*p.header(), p.owner)),
            Self::User(p) => Event::User(p),
            Self::Opaque(p) => Event::Opaque(p),
        }
    }
}

/// The all-zero record: kind [`EventType::FIRST`], timestamp 0.
impl Default for Event<'_> {
    fn default() -> Self {
        Self::Opaque(OpaqueEvent::from_common(CommonEvent::default(), [0; OPAQUE_DATA_LEN]))
    }
}

impl EventHeader for Event<'_> {
    fn kind(&self) -> EventType {
        self.common().kind()
    }

    fn timestamp(&self) -> u64 {
        self.common().timestamp()
    }

    fn set_timestamp(&mut self, timestamp: u64) {
        match self {
            Self::Quit(p) => p.set_timestamp(timestamp),
            Self::Window(p) => p.set_timestamp(timestamp),
            Self::KeyboardDevice(p) => p.set_timestamp(timestamp),
            Self::Clipboard(p) => p.set_timestamp(timestamp),
            Self::User(p) => p.set_timestamp(timestamp),
            Self::Opaque(p) => p.set_timestamp(timestamp),
        }
    }
}

/// Widening a bare prefix selects the variant for its kind, zero-filling
/// every payload field. The terminal sentinel has no variant.
impl TryFrom<CommonEvent> for Event<'_> {
    type Error = EventError;

    fn try_from(common: CommonEvent) -> Result<Self> {
        let kind = common.kind();
        let event = if QuitEvent::accepts(kind) {
            Self::Quit(QuitEvent::from_common(common))
        } else if WindowEvent::accepts(kind) {
            Self::Window(WindowEvent::from_common(common, WindowId(0), 0, 0))
        } else if KeyboardDeviceEvent::accepts(kind) {
            Self::KeyboardDevice(KeyboardDeviceEvent::from_common(common, KeyboardId(0)))
        } else if ClipboardEvent::accepts(kind) {
            Self::Clipboard(ClipboardEvent::from_common(common, false))
        } else if UserEvent::accepts(kind) {
            Self::User(UserEvent::from_common(common, WindowId(0), 0, 0, 0))
        } else if OpaqueEvent::accepts(kind) {
            Self::Opaque(OpaqueEvent::from_common(common, [0; OPAQUE_DATA_LEN]))
        } else {
            return Err(EventError::KindMismatch {
                expected: "any live kind".to_string(),
                actual: kind,
            });
        };
        Ok(event)
    }
}

impl Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quit(p) => p.fmt(f),
            Self::Window(p) => p.fmt(f),
            Self::KeyboardDevice(p) => p.fmt(f),
            Self::Clipboard(p) => p.fmt(f),
            Self::User(p) => p.fmt(f),
            Self::Opaque(p) => p.fmt(f),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
