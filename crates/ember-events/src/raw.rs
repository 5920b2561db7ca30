//! The native 128-byte event record and its codec.
//!
//! [`RawEvent`] is the byte-exact form exchanged with the native queue.
//! Every record starts with the common prefix:
//!
//! | offset | size | field     |
//! |--------|------|-----------|
//! | 0      | 4    | kind      |
//! | 4      | 4    | reserved  |
//! | 8      | 8    | timestamp |
//!
//! Payload fields follow at offset 16 in native byte order. Decoding picks
//! the [`Event`] variant from the kind alone, so a record can never be read
//! through the wrong payload layout.

use std::ffi::c_char;
use std::fmt;
use std::mem::size_of;
use std::ptr;

use tracing::{trace, warn};

use crate::envelope::Event;
use crate::errors::{EventError, Result};
use crate::types::{
    ClipboardEvent, CommonEvent, EventHeader, EventType, KeyboardDeviceEvent, KeyboardId,
    MimeTypes, OPAQUE_DATA_LEN, OpaqueEvent, QuitEvent, UserEvent, WindowEvent, WindowId,
};

/// Size of a native event record in bytes.
pub const RAW_EVENT_SIZE: usize = 128;

const PREFIX_LEN: usize = 16;
const WORD: usize = size_of::<usize>();

const KIND_AT: usize = 0;
const RESERVED_AT: usize = 4;
const TIMESTAMP_AT: usize = 8;

const CLIPBOARD_OWNER_AT: usize = 16;
const CLIPBOARD_COUNT_AT: usize = 20;
const CLIPBOARD_LIST_AT: usize = 24;

const KEYBOARD_WHICH_AT: usize = 16;

const WINDOW_ID_AT: usize = 16;
const WINDOW_DATA1_AT: usize = 20;
const WINDOW_DATA2_AT: usize = 24;

const USER_WINDOW_AT: usize = 16;
const USER_CODE_AT: usize = 20;
const USER_DATA1_AT: usize = 24;
const USER_DATA2_AT: usize = USER_DATA1_AT + WORD;

const _: () = assert!(PREFIX_LEN + OPAQUE_DATA_LEN == RAW_EVENT_SIZE);
const _: () = assert!(USER_DATA2_AT + WORD <= RAW_EVENT_SIZE);

/// A native event record, byte for byte.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(C, align(8))]
pub struct RawEvent {
    bytes: [u8; RAW_EVENT_SIZE],
}

impl RawEvent {
    /// An all-zero record.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            bytes: [0; RAW_EVENT_SIZE],
        }
    }

    /// Wrap bytes received from the native queue.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; RAW_EVENT_SIZE]) -> Self {
        Self { bytes }
    }

    /// The record's bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; RAW_EVENT_SIZE] {
        &self.bytes
    }

    /// Mutable access for native code filling the record in place.
    pub fn as_bytes_mut(&mut self) -> &mut [u8; RAW_EVENT_SIZE] {
        &mut self.bytes
    }

    /// The kind at offset 0, readable without decoding.
    #[must_use]
    pub fn kind(&self) -> EventType {
        EventType::from_raw(u32::from_ne_bytes(self.read(KIND_AT)))
    }

    /// Decode into an owned envelope.
    ///
    /// The clipboard MIME-type list is dropped (its buffer belongs to the
    /// native queue); use [`decode_borrowed`](Self::decode_borrowed) to keep
    /// it. Fails with [`EventError::MalformedRaw`] on an impossible layout.
    pub fn decode(&self) -> Result<Event<'static>> {
        self.decode_with(|_, _| MimeTypes::empty())
    }

    /// Decode, keeping a borrowed view of the clipboard MIME-type list.
    ///
    /// # Safety
    ///
    /// For a clipboard record, the list pointer and count must describe a
    /// live array as required by [`MimeTypes::from_raw_parts`], valid for
    /// `'a`. For every other kind this is equivalent to [`decode`](Self::decode).
    #[allow(unsafe_code)]
    pub unsafe fn decode_borrowed<'a>(&self) -> Result<Event<'a>> {
        self.decode_with(|addr, len| {
            let list = ptr::with_exposed_provenance::<*const c_char>(addr);
            // SAFETY: forwarded to the caller.
            unsafe { MimeTypes::from_raw_parts(list, len) }
        })
    }

    fn decode_with<'a>(&self, mime_types: impl FnOnce(usize, usize) -> MimeTypes<'a>) -> Result<Event<'a>> {
        let kind = self.kind();
        if kind == EventType::LAST {
            warn!(%kind, "terminal sentinel in raw record");
            return Err(EventError::MalformedRaw(format!(
                "kind {kind} is the terminal sentinel"
            )));
        }
        let common = CommonEvent::new(kind, u64::from_ne_bytes(self.read(TIMESTAMP_AT)))
            .with_reserved(u32::from_ne_bytes(self.read(RESERVED_AT)));

        let event = match Event::try_from(common)? {
            Event::Quit(_) => Event::Quit(QuitEvent::from_common(common)),
            Event::Window(_) => Event::Window(WindowEvent::from_common(
                common,
                WindowId(self.u32_at(WINDOW_ID_AT)),
                self.i32_at(WINDOW_DATA1_AT),
                self.i32_at(WINDOW_DATA2_AT),
            )),
            Event::KeyboardDevice(_) => Event::KeyboardDevice(KeyboardDeviceEvent::from_common(
                common,
                KeyboardId(self.u32_at(KEYBOARD_WHICH_AT)),
            )),
            Event::Clipboard(_) => {
                let count = self.i32_at(CLIPBOARD_COUNT_AT);
                let Ok(len) = usize::try_from(count) else {
                    warn!(%kind, count, "negative clipboard MIME-type count");
                    return Err(EventError::MalformedRaw(format!(
                        "clipboard MIME-type count {count} is negative"
                    )));
                };
                let owner = self.bytes[CLIPBOARD_OWNER_AT] != 0;
                let list = mime_types(self.usize_at(CLIPBOARD_LIST_AT), len);
                Event::Clipboard(ClipboardEvent::from_common(common, owner).with_mime_types(list))
            }
            Event::User(_) => Event::User(UserEvent::from_common(
                common,
                WindowId(self.u32_at(USER_WINDOW_AT)),
                self.i32_at(USER_CODE_AT),
                self.usize_at(USER_DATA1_AT),
                self.usize_at(USER_DATA2_AT),
            )),
            Event::Opaque(_) => Event::Opaque(OpaqueEvent::from_common(common, self.read(PREFIX_LEN))),
        };
        trace!(%kind, "decoded raw event");
        Ok(event)
    }

    /// Encode an envelope into its native record.
    ///
    /// The clipboard MIME-type list is written as its raw pointer; the
    /// record is only meaningful while that buffer is alive.
    #[must_use]
    pub fn encode(event: &Event<'_>) -> Self {
        let mut raw = Self::zeroed();
        let common = event.common();
        raw.write(KIND_AT, &common.kind().raw().to_ne_bytes());
        raw.write(RESERVED_AT, &common.reserved().to_ne_bytes());
        raw.write(TIMESTAMP_AT, &common.timestamp().to_ne_bytes());

        match event {
            Event::Quit(_) => {}
            Event::Window(p) => {
                raw.write(WINDOW_ID_AT, &p.window_id.raw().to_ne_bytes());
                raw.write(WINDOW_DATA1_AT, &p.data1.to_ne_bytes());
                raw.write(WINDOW_DATA2_AT, &p.data2.to_ne_bytes());
            }
            Event::KeyboardDevice(p) => {
                raw.write(KEYBOARD_WHICH_AT, &p.which.raw().to_ne_bytes());
            }
            Event::Clipboard(p) => {
                let mimes = p.mime_types();
                // Counts past i32::MAX cannot come from the native queue.
                let count = i32::try_from(mimes.len()).unwrap_or(i32::MAX);
                raw.bytes[CLIPBOARD_OWNER_AT] = u8::from(p.owner);
                raw.write(CLIPBOARD_COUNT_AT, &count.to_ne_bytes());
                raw.write(CLIPBOARD_LIST_AT, &mimes.as_ptr().expose_provenance().to_ne_bytes());
            }
            Event::User(p) => {
                raw.write(USER_WINDOW_AT, &p.window_id.raw().to_ne_bytes());
                raw.write(USER_CODE_AT, &p.code.to_ne_bytes());
                raw.write(USER_DATA1_AT, &p.data1.to_ne_bytes());
                raw.write(USER_DATA2_AT, &p.data2.to_ne_bytes());
            }
            Event::Opaque(p) => raw.write(PREFIX_LEN, &p.data),
        }
        raw
    }

    fn read<const N: usize>(&self, at: usize) -> [u8; N] {
        let mut out = [0; N];
        out.copy_from_slice(&self.bytes[at..at + N]);
        out
    }

    fn write(&mut self, at: usize, bytes: &[u8]) {
        self.bytes[at..at + bytes.len()].copy_from_slice(bytes);
    }

    fn u32_at(&self, at: usize) -> u32 {
        u32::from_ne_bytes(self.read(at))
    }

    fn i32_at(&self, at: usize) -> i32 {
        i32::from_ne_bytes(self.read(at))
    }

    fn usize_at(&self, at: usize) -> usize {
        usize::from_ne_bytes(self.read(at))
    }
}

impl Default for RawEvent {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl From<&Event<'_>> for RawEvent {
    fn from(event: &Event<'_>) -> Self {
        Self::encode(event)
    }
}

impl<'a> From<Event<'a>> for RawEvent {
    fn from(event: Event<'a>) -> Self {
        Self::encode(&event)
    }
}

impl TryFrom<RawEvent> for Event<'static> {
    type Error = EventError;

    fn try_from(raw: RawEvent) -> Result<Self> {
        raw.decode()
    }
}

impl fmt::Debug for RawEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawEvent")
            .field("kind", &self.kind())
            .field("timestamp", &u64::from_ne_bytes(self.read(TIMESTAMP_AT)))
            .finish_non_exhaustive()
    }
}

impl Event<'_> {
    /// Shorthand for [`RawEvent::encode`].
    #[must_use]
    pub fn to_raw(&self) -> RawEvent {
        RawEvent::encode(self)
    }
}

impl EventHeader for RawEvent {
    fn kind(&self) -> EventType {
        RawEvent::kind(self)
    }

    fn timestamp(&self) -> u64 {
        u64::from_ne_bytes(self.read(TIMESTAMP_AT))
    }

    fn set_timestamp(&mut self, timestamp: u64) {
        self.write(TIMESTAMP_AT, &timestamp.to_ne_bytes());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use crate::types::TypedEventType;
    use assert_matches::assert_matches;

    fn raw_with_prefix(kind: u32, timestamp: u64) -> RawEvent {
        let mut raw = RawEvent::zeroed();
        raw.write(KIND_AT, &kind.to_ne_bytes());
        raw.write(TIMESTAMP_AT, &timestamp.to_ne_bytes());
        raw
    }

    #[test]
    fn layout_matches_native_record() {
        assert_eq!(size_of::<RawEvent>(), RAW_EVENT_SIZE);
        assert_eq!(std::mem::align_of::<RawEvent>(), 8);
    }

    #[test]
    fn decodes_quit_from_native_bytes() {
        let raw = raw_with_prefix(0x100, 42);
        assert_eq!(raw.kind(), EventType::APPLICATION_QUIT);
        let event = raw.decode().unwrap();
        assert_eq!(event.narrow::<QuitEvent>().unwrap(), QuitEvent::new(42));
    }

    #[test]
    fn decodes_user_fields_at_native_offsets() {
        let mut raw = raw_with_prefix(0x8003, 7);
        raw.write(USER_WINDOW_AT, &9u32.to_ne_bytes());
        raw.write(USER_CODE_AT, &(-2i32).to_ne_bytes());
        raw.write(USER_DATA1_AT, &0x1234usize.to_ne_bytes());
        raw.write(USER_DATA2_AT, &usize::MAX.to_ne_bytes());

        let user = raw.decode().unwrap().narrow::<UserEvent>().unwrap();
        assert_eq!(user.user_value(), 3);
        assert_eq!(user.window_id, WindowId(9));
        assert_eq!(user.code, -2);
        assert_eq!(user.data1, 0x1234);
        assert_eq!(user.data2, usize::MAX);
    }

    #[test]
    fn encode_decode_preserves_every_variant() {
        let events: [Event<'static>; 5] = [
            QuitEvent::new(1).into(),
            KeyboardDeviceEvent::new(KeyboardDeviceEvent::ADDED, 2, KeyboardId(11)).into(),
            WindowEvent::new(TypedEventType::new(EventType::WINDOW_RESIZED).unwrap(), 3, WindowId(1), 800, 600)
                .into(),
            UserEvent::new(TypedEventType::user(100).unwrap(), 4)
                .with_code(5)
                .with_data(6, 7)
                .into(),
            ClipboardEvent::new(5, true).into(),
        ];
        for event in events {
            assert_eq!(event.to_raw().decode().unwrap(), event, "{event}");
        }
    }

    #[test]
    fn opaque_bytes_survive_roundtrip() {
        let mut raw = raw_with_prefix(EventType::MOUSE_MOTION.raw(), 10);
        for (i, byte) in raw.as_bytes_mut()[PREFIX_LEN..].iter_mut().enumerate() {
            *byte = u8::try_from(i).unwrap();
        }
        let event = raw.decode().unwrap();
        assert_matches!(event, Event::Opaque(_));
        assert_eq!(RawEvent::from(event), raw);
    }

    #[test]
    fn reserved_word_is_preserved() {
        let mut raw = raw_with_prefix(0x100, 0);
        raw.write(RESERVED_AT, &0xDEAD_BEEFu32.to_ne_bytes());
        let event = raw.decode().unwrap();
        assert_eq!(event.common().reserved(), 0xDEAD_BEEF);
        assert_eq!(event.to_raw(), raw);
    }

    #[test]
    fn negative_clipboard_count_is_malformed() {
        let mut raw = raw_with_prefix(0x900, 0);
        raw.write(CLIPBOARD_COUNT_AT, &(-1i32).to_ne_bytes());
        assert_matches!(raw.decode(), Err(EventError::MalformedRaw(msg)) if msg.contains("-1"));
    }

    #[test]
    fn terminal_sentinel_record_is_malformed() {
        let raw = raw_with_prefix(EventType::LAST.raw(), 3);
        assert_matches!(raw.decode(), Err(EventError::MalformedRaw(msg)) if msg.contains("65535"));
    }

    #[test]
    fn owned_decode_drops_mime_list() {
        let list = [c"text/plain".as_ptr()];
        let mimes = unsafe { MimeTypes::from_raw_parts(list.as_ptr(), list.len()) };
        let event: Event<'_> = ClipboardEvent::new(1, true).with_mime_types(mimes).into();
        let raw = event.to_raw();

        let owned = raw.decode().unwrap().narrow::<ClipboardEvent<'_>>().unwrap();
        assert!(owned.owner);
        assert!(owned.mime_types().is_empty());
    }

    #[test]
    fn borrowed_decode_keeps_mime_list() {
        let list = [c"text/plain".as_ptr(), c"text/html".as_ptr()];
        let mimes = unsafe { MimeTypes::from_raw_parts(list.as_ptr(), list.len()) };
        let raw = Event::from(ClipboardEvent::new(1, false).with_mime_types(mimes)).to_raw();

        let event = unsafe { raw.decode_borrowed() }.unwrap();
        let clip = event.narrow::<ClipboardEvent<'_>>().unwrap();
        assert_eq!(clip.mime_types().as_ptr(), list.as_ptr());
        assert_eq!(clip.mime_types().to_strings(), ["text/plain", "text/html"]);
    }

    #[test]
    fn header_access_without_decoding() {
        let mut raw = raw_with_prefix(0x8000, 5);
        assert_eq!(EventHeader::timestamp(&raw), 5);
        raw.set_timestamp(6);
        assert_eq!(raw.decode().unwrap().timestamp(), 6);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), RAW_EVENT_SIZE)) {
                let mut arr = [0u8; RAW_EVENT_SIZE];
                arr.copy_from_slice(&bytes);
                let raw = RawEvent::from_bytes(arr);
                match raw.decode() {
                    Ok(event) => prop_assert_eq!(event.kind(), raw.kind()),
                    Err(err) => prop_assert!(matches!(err, EventError::MalformedRaw(_))),
                }
            }

            #[test]
            fn kind_survives_encode(raw_kind in any::<u32>(), ts in any::<u64>()) {
                prop_assume!(raw_kind != EventType::LAST.raw());
                let event = Event::try_from(CommonEvent::new(EventType::from_raw(raw_kind), ts)).unwrap();
                let raw = event.to_raw();
                prop_assert_eq!(raw.kind().raw(), raw_kind);
                prop_assert_eq!(raw.decode().unwrap(), event);
            }
        }
    }
}
