//! `ClipboardEvent` and the borrowed MIME-type list it carries.

use std::ffi::{CStr, c_char};
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ptr;

use serde::{Serialize, Serializer};

use super::{CommonEvent, Rendered, impl_event_payload};
use crate::errors::{EventError, Result};
use crate::types::event_type::EventType;
use crate::types::kind_set::{AcceptsKind, KindSet};
use crate::types::typed::TypedEventType;

/// Non-owning view over a native array of nul-terminated MIME-type strings.
///
/// The array and the strings belong to the native queue; copying the view
/// copies the pointer, never the data. Strings are decoded lazily at read
/// time.
#[derive(Clone, Copy)]
pub struct MimeTypes<'a> {
    ptr: *const *const c_char,
    len: usize,
    _borrow: PhantomData<&'a CStr>,
}

impl<'a> MimeTypes<'a> {
    /// A view over nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ptr: ptr::null(),
            len: 0,
            _borrow: PhantomData,
        }
    }

    /// View `len` string pointers starting at `ptr`.
    ///
    /// # Safety
    ///
    /// If `len > 0`, `ptr` must point to `len` readable `*const c_char`
    /// values. Each entry must be null or point to a nul-terminated string.
    /// The array and every string must stay alive and unmodified for `'a`.
    #[allow(unsafe_code)]
    #[must_use]
    pub unsafe fn from_raw_parts(ptr: *const *const c_char, len: usize) -> Self {
        Self {
            ptr,
            len: if ptr.is_null() { 0 } else { len },
            _borrow: PhantomData,
        }
    }

    /// Number of entries, including null ones.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entry `index`, or `None` if out of bounds or null.
    #[allow(unsafe_code)]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a CStr> {
        if index >= self.len {
            return None;
        }
        // SAFETY: `index < len` and `from_raw_parts` requires `len` readable
        // entries that outlive `'a`; `len` is 0 whenever `ptr` is null.
        let entry = unsafe { *self.ptr.add(index) };
        if entry.is_null() {
            return None;
        }
        // SAFETY: non-null entries are nul-terminated and live for `'a`.
        Some(unsafe { CStr::from_ptr(entry) })
    }

    /// Iterate non-null entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a CStr> + use<'a> {
        let this = *self;
        (0..this.len).filter_map(move |i| this.get(i))
    }

    /// Decode every non-null entry, replacing invalid UTF-8.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(|s| s.to_string_lossy().into_owned()).collect()
    }

    /// The raw array pointer, for handing back across the native boundary.
    #[must_use]
    pub const fn as_ptr(&self) -> *const *const c_char {
        self.ptr
    }
}

impl Default for MimeTypes<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

// SAFETY: the view is read-only and `from_raw_parts` requires the data to be
// immutable for `'a`, so sharing or sending it is equivalent to sharing a
// `&'a [&'a CStr]`.
#[allow(unsafe_code)]
unsafe impl Send for MimeTypes<'_> {}
#[allow(unsafe_code)]
unsafe impl Sync for MimeTypes<'_> {}

/// Identity comparison: same array, same length.
impl PartialEq for MimeTypes<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.ptr, other.ptr) && self.len == other.len
    }
}

impl Eq for MimeTypes<'_> {}

impl Hash for MimeTypes<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
        self.len.hash(state);
    }
}

impl fmt::Debug for MimeTypes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Display for MimeTypes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, mime) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&mime.to_string_lossy())?;
        }
        f.write_str("]")
    }
}

impl Serialize for MimeTypes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(CStr::to_string_lossy))
    }
}

/// Payload for [`EventType::CLIPBOARD_UPDATE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ClipboardEvent<'a> {
    #[serde(flatten)]
    common: CommonEvent,
    /// Whether this application currently owns the clipboard contents.
    pub owner: bool,
    mime_types: MimeTypes<'a>,
}

impl<'a> ClipboardEvent<'a> {
    /// The only kind a clipboard event carries.
    pub const UPDATED: TypedEventType<Self> = TypedEventType::new_unchecked(EventType::CLIPBOARD_UPDATE);

    /// A clipboard update with an empty MIME-type list.
    #[must_use]
    pub const fn new(timestamp: u64, owner: bool) -> Self {
        Self::from_common(CommonEvent::new(EventType::CLIPBOARD_UPDATE, timestamp), owner)
    }

    pub(crate) const fn from_common(common: CommonEvent, owner: bool) -> Self {
        Self {
            common,
            owner,
            mime_types: MimeTypes::empty(),
        }
    }

    pub(crate) const fn with_mime_types(mut self, mime_types: MimeTypes<'a>) -> Self {
        self.mime_types = mime_types;
        self
    }

    /// The borrowed MIME-type list offered by the clipboard owner.
    #[must_use]
    pub const fn mime_types(&self) -> MimeTypes<'a> {
        self.mime_types
    }

    /// Replacing the list would require this layer to own a native string
    /// array, which it never does. Always fails with
    /// [`EventError::NotImplemented`].
    pub fn set_mime_types(&mut self, _mime_types: &[&str]) -> Result<()> {
        Err(EventError::NotImplemented("ClipboardEvent::set_mime_types"))
    }
}

impl AcceptsKind for ClipboardEvent<'_> {
    const ACCEPTED: KindSet = KindSet::One(EventType::CLIPBOARD_UPDATE);
}

impl_event_payload!(<'a> ClipboardEvent<'a> => Clipboard);

impl Display for ClipboardEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rendered::new(
            self.common.kind(),
            self.common.timestamp(),
            &[("Owner", &self.owner), ("MimeTypes", &self.mime_types)],
        )
        .fmt(f)
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use crate::envelope::Event;
    use assert_matches::assert_matches;

    fn sample() -> [*const c_char; 3] {
        [c"text/plain".as_ptr(), ptr::null(), c"image/png".as_ptr()]
    }

    #[test]
    fn empty_list() {
        let mimes = MimeTypes::empty();
        assert!(mimes.is_empty());
        assert_eq!(mimes.get(0), None);
        assert!(mimes.to_strings().is_empty());
        assert_eq!(format!("{mimes:?}"), "[]");
    }

    #[test]
    fn reads_entries_and_skips_nulls() {
        let raw = sample();
        let mimes = unsafe { MimeTypes::from_raw_parts(raw.as_ptr(), raw.len()) };
        assert_eq!(mimes.len(), 3);
        assert_eq!(mimes.get(0), Some(c"text/plain"));
        assert_eq!(mimes.get(1), None);
        assert_eq!(mimes.get(3), None);
        assert_eq!(mimes.to_strings(), ["text/plain", "image/png"]);
        assert_eq!(mimes.to_string(), "[text/plain, image/png]");
    }

    #[test]
    fn null_array_is_empty_regardless_of_len() {
        let mimes = unsafe { MimeTypes::from_raw_parts(ptr::null(), 4) };
        assert!(mimes.is_empty());
    }

    #[test]
    fn equality_is_by_identity() {
        let a = sample();
        let b = sample();
        let view_a = unsafe { MimeTypes::from_raw_parts(a.as_ptr(), a.len()) };
        let view_a2 = unsafe { MimeTypes::from_raw_parts(a.as_ptr(), a.len()) };
        let view_b = unsafe { MimeTypes::from_raw_parts(b.as_ptr(), b.len()) };
        assert_eq!(view_a, view_a2);
        assert_ne!(view_a, view_b);
        assert_eq!(view_a.to_strings(), view_b.to_strings());
    }

    #[test]
    fn copying_event_shares_buffer() {
        let raw = sample();
        let mimes = unsafe { MimeTypes::from_raw_parts(raw.as_ptr(), raw.len()) };
        let ev = ClipboardEvent::new(1, true).with_mime_types(mimes);
        let copy = ev;
        assert_eq!(copy.mime_types().as_ptr(), raw.as_ptr());
    }

    #[test]
    fn setting_mime_types_is_not_implemented() {
        let mut ev = ClipboardEvent::new(0, false);
        assert_matches!(
            ev.set_mime_types(&["text/html"]),
            Err(EventError::NotImplemented(name)) if name.contains("set_mime_types")
        );
        assert!(ev.mime_types().is_empty());
    }

    #[test]
    fn widen_narrow_keeps_borrow() {
        let raw = sample();
        let mimes = unsafe { MimeTypes::from_raw_parts(raw.as_ptr(), raw.len()) };
        let event: Event<'_> = ClipboardEvent::new(5, true).with_mime_types(mimes).into();
        let back = ClipboardEvent::try_from(event).unwrap();
        assert!(back.owner);
        assert_eq!(back.mime_types().to_strings(), ["text/plain", "image/png"]);
    }

    #[test]
    fn display() {
        let raw = [c"text/plain".as_ptr()];
        let mimes = unsafe { MimeTypes::from_raw_parts(raw.as_ptr(), raw.len()) };
        let ev = ClipboardEvent::new(0, true).with_mime_types(mimes);
        assert_eq!(
            ev.to_string(),
            "{ Type: Clipboard.Updated, Timestamp: 0h 0min 0s 0ms 0ns, Owner: true, MimeTypes: [text/plain] }"
        );
    }

    #[test]
    fn serializes_mime_types_as_strings() {
        let raw = [c"a/b".as_ptr()];
        let mimes = unsafe { MimeTypes::from_raw_parts(raw.as_ptr(), raw.len()) };
        let json = serde_json::to_value(ClipboardEvent::new(3, false).with_mime_types(mimes)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": 0x900, "timestamp": 3, "owner": false, "mime_types": ["a/b"] })
        );
    }
}
