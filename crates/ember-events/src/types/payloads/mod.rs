//! Payload variants and the capability traits they share.
//!
//! Every payload begins with the same [`CommonEvent`] prefix (kind +
//! timestamp) and declares, through [`AcceptsKind`], which kinds it may
//! carry.
//!
//! - [`EventHeader`]: kind/timestamp access shared by payloads and the envelope.
//! - [`EventPayload`]: widen/narrow against [`Event`] plus the unchecked
//!   locate accessors, which are gated behind the crate-private [`Token`].
//!
//! Payload-specific fields are public; the prefix is not, so a payload's
//! kind can only change through [`EventPayload::set_kind`], which takes a
//! pre-validated [`TypedEventType`].

pub mod clipboard;
pub mod common;
pub mod ids;
pub mod keyboard_device;
pub mod opaque;
pub mod quit;
pub mod user;
pub mod window;

use std::fmt;

use tracing::debug;

use super::event_type::EventType;
use super::kind_set::AcceptsKind;
use super::typed::TypedEventType;
use crate::envelope::Event;
use crate::errors::{EventError, Result};

pub use clipboard::{ClipboardEvent, MimeTypes};
pub use common::CommonEvent;
pub use ids::{KeyboardId, WindowId};
pub use keyboard_device::KeyboardDeviceEvent;
pub use opaque::{OPAQUE_DATA_LEN, OpaqueEvent};
pub use quit::QuitEvent;
pub use user::UserEvent;
pub use window::WindowEvent;

/// Capability token for the unchecked locate accessors.
///
/// Cannot be constructed outside this crate, so [`EventPayload::locate`]
/// and [`EventPayload::locate_mut`] are uncallable by downstream code.
#[derive(Debug)]
pub struct Token(pub(crate) ());

/// Kind and timestamp access common to every event representation.
pub trait EventHeader {
    /// The event's kind.
    fn kind(&self) -> EventType;

    /// Native monotonic tick count, in nanoseconds.
    fn timestamp(&self) -> u64;

    /// Overwrite the timestamp.
    fn set_timestamp(&mut self, timestamp: u64);
}

/// A concrete payload that can be widened into, and narrowed out of, an
/// [`Event`].
pub trait EventPayload<'a>: EventHeader + AcceptsKind + Copy + fmt::Display + Into<Event<'a>> {
    /// Change the kind to another one this payload accepts.
    fn set_kind(&mut self, kind: TypedEventType<Self>);

    /// Unchecked view of this payload inside `event`.
    ///
    /// Performs no kind validation; callers check the kind first.
    #[doc(hidden)]
    fn locate<'e>(event: &'e Event<'a>, token: Token) -> Option<&'e Self>;

    /// Mutable counterpart of [`locate`](Self::locate).
    #[doc(hidden)]
    fn locate_mut<'e>(event: &'e mut Event<'a>, token: Token) -> Option<&'e mut Self>;

    /// The current kind, as a typed value.
    fn typed_kind(&self) -> TypedEventType<Self> {
        TypedEventType::new_unchecked(self.kind())
    }

    /// Copy this payload into an envelope. Never fails.
    fn widen(self) -> Event<'a> {
        self.into()
    }

    /// Copy this payload type out of `event`.
    ///
    /// Fails with [`EventError::KindMismatch`] naming the accepted set and
    /// the envelope's actual kind.
    fn narrow(event: &Event<'a>) -> Result<Self> {
        let actual = event.kind();
        let mismatch = || EventError::KindMismatch {
            expected: Self::ACCEPTED.to_string(),
            actual,
        };
        if !Self::accepts(actual) {
            debug!(kind = %actual, expected = %Self::ACCEPTED, "narrowing rejected");
            return Err(mismatch());
        }
        Self::locate(event, Token(())).copied().ok_or_else(mismatch)
    }
}

/// Wrapper that renders the shared `"{ Type: …, Timestamp: … }"` form,
/// followed by any payload-specific fields.
pub(crate) struct Rendered<'f> {
    kind: EventType,
    timestamp: u64,
    fields: &'f [(&'static str, &'f dyn fmt::Display)],
}

impl<'f> Rendered<'f> {
    pub(crate) fn new(
        kind: EventType,
        timestamp: u64,
        fields: &'f [(&'static str, &'f dyn fmt::Display)],
    ) -> Self {
        Self {
            kind,
            timestamp,
            fields,
        }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ Type: {}, Timestamp: {}",
            self.kind,
            super::timestamp::DisplayTimestamp(self.timestamp)
        )?;
        for (name, value) in self.fields {
            write!(f, ", {name}: {value}")?;
        }
        f.write_str(" }")
    }
}

/// Implements [`EventHeader`], [`EventPayload`], widening and narrowing for
/// a payload struct with a private `common: CommonEvent` field.
macro_rules! impl_event_payload {
    (<$lt:lifetime> $ty:ty => $variant:ident) => {
        impl<$lt> $ty {
            /// The shared prefix, including the native reserved word.
            pub(crate) const fn header(&self) -> &$crate::types::payloads::CommonEvent {
                &self.common
            }
        }

        impl<$lt> $crate::types::payloads::EventHeader for $ty {
            fn kind(&self) -> $crate::types::EventType {
                self.common.kind()
            }

            fn timestamp(&self) -> u64 {
                self.common.timestamp()
            }

            fn set_timestamp(&mut self, timestamp: u64) {
                self.common.set_timestamp(timestamp);
            }
        }

        impl<$lt> $crate::types::payloads::EventPayload<$lt> for $ty {
            fn set_kind(&mut self, kind: $crate::types::TypedEventType<Self>) {
                self.common.set_kind(kind.kind());
            }

            fn locate<'e>(
                event: &'e $crate::envelope::Event<$lt>,
                _token: $crate::types::payloads::Token,
            ) -> Option<&'e Self> {
                match event {
                    $crate::envelope::Event::$variant(payload) => Some(payload),
                    _ => None,
                }
            }

            fn locate_mut<'e>(
                event: &'e mut $crate::envelope::Event<$lt>,
                _token: $crate::types::payloads::Token,
            ) -> Option<&'e mut Self> {
                match event {
                    $crate::envelope::Event::$variant(payload) => Some(payload),
                    _ => None,
                }
            }
        }

        impl<$lt> From<$ty> for $crate::envelope::Event<$lt> {
            fn from(payload: $ty) -> Self {
                Self::$variant(payload)
            }
        }

        impl<$lt> TryFrom<$crate::envelope::Event<$lt>> for $ty {
            type Error = $crate::errors::EventError;

            fn try_from(event: $crate::envelope::Event<$lt>) -> $crate::errors::Result<Self> {
                <Self as $crate::types::payloads::EventPayload<$lt>>::narrow(&event)
            }
        }
    };
}

pub(crate) use impl_event_payload;
