//! # ember-events
//!
//! Event representation layer for the Ember multimedia binding.
//!
//! The native library delivers events as a fixed-size tagged union. This
//! crate models that union as a Rust sum type and gives callers checked,
//! zero-copy access to the active variant:
//!
//! - **Kinds**: [`EventType`] wraps the native discriminant; named kinds
//!   are associated constants, caller kinds come from [`EventType::user`]
//! - **Typed kinds**: [`TypedEventType<P>`] proves a kind is acceptable to
//!   payload `P`, so payload setters cannot be handed a foreign kind
//! - **Envelope**: [`Event`] holds any payload; widening is `From`,
//!   narrowing is `TryFrom` and fails with [`EventError::KindMismatch`]
//! - **Views**: [`EventRef`] / [`EventRefReadOnly`] alias existing storage
//!   and narrow in place with `try_as`
//! - **Wire form**: [`RawEvent`] is the 128-byte native record
//! - **Queue boundary**: [`EventSource`], [`EventSink`] and [`EventFilter`],
//!   with [`LocalQueue`] as an in-process implementation
//!
//! Raw pointer handling is confined to [`MimeTypes`] and
//! [`RawEvent::decode_borrowed`]; everything else is safe code.

#![deny(unsafe_code)]

pub mod envelope;
pub mod errors;
pub mod queue;
pub mod raw;
pub mod refs;
pub mod types;
pub mod user_kinds;

pub use envelope::Event;
pub use errors::{EventError, Result};
pub use queue::{EventFilter, EventSink, EventSource, LocalQueue};
pub use raw::{RAW_EVENT_SIZE, RawEvent};
pub use refs::{EventRef, EventRefReadOnly};
pub use types::{
    AcceptsKind, ClipboardEvent, CommonEvent, DisplayTimestamp, EventCategory, EventHeader,
    EventPayload, EventType, KeyboardDeviceEvent, KeyboardId, KindSet, MimeTypes, OpaqueEvent,
    QuitEvent, TypedEventType, UserEvent, WindowEvent, WindowId,
};
pub use user_kinds::UserKindRegistry;
