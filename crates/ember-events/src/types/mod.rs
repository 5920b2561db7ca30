//! Kind identity and payload types.
//!
//! - [`EventType`]: the raw kind discriminant plus its registry of named kinds
//! - [`TypedEventType`]: a kind proven acceptable to one payload type
//! - [`payloads`]: the concrete payload structs and their capability traits

#[macro_use]
mod macros;

pub mod event_type;
pub mod kind_set;
pub mod payloads;
pub mod registry;
pub mod timestamp;
pub mod typed;

pub use event_type::EventType;
pub use kind_set::{AcceptsKind, KindSet};
pub use payloads::{
    ClipboardEvent, CommonEvent, EventHeader, EventPayload, KeyboardDeviceEvent, KeyboardId,
    MimeTypes, OPAQUE_DATA_LEN, OpaqueEvent, QuitEvent, Token, UserEvent, WindowEvent, WindowId,
};
pub use registry::{ALL_CATEGORIES, ALL_NAMED_KINDS, EventCategory};
pub use timestamp::DisplayTimestamp;
pub use typed::TypedEventType;
