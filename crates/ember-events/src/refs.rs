//! Zero-copy reference views into existing envelopes and payloads.
//!
//! [`EventRef`] and [`EventRefReadOnly`] alias storage the caller already
//! owns; they never copy it. Equality is address identity: two views are
//! equal only if they point at the same location, regardless of contents.
//! Neither type implements value comparison, so structural equality on a
//! view is rejected at compile time.
//!
//! A view borrows its source, so it cannot outlive it. Sharing the source
//! across threads while a view is live is ruled out by the borrow checker.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr;

use tracing::trace;

use crate::envelope::Event;
use crate::types::{EventHeader, EventPayload, EventType, Token, TypedEventType};

/// Mutable, non-owning view of a single envelope or payload.
pub struct EventRef<'r, T> {
    target: &'r mut T,
}

/// Read-only, non-owning view of a single envelope or payload.
pub struct EventRefReadOnly<'r, T> {
    target: &'r T,
}

impl<'r, T> EventRef<'r, T> {
    /// View `target` in place.
    pub fn new(target: &'r mut T) -> Self {
        Self { target }
    }

    /// Downgrade to a read-only view of the same location.
    #[must_use]
    pub fn read_only(&self) -> EventRefReadOnly<'_, T> {
        EventRefReadOnly::new(&*self.target)
    }

    /// Give up the view, returning the underlying borrow.
    pub fn into_mut(self) -> &'r mut T {
        self.target
    }

    /// Address of the viewed location.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        ptr::from_ref(&*self.target)
    }
}

impl<'r, T> EventRefReadOnly<'r, T> {
    /// View `target` in place.
    #[must_use]
    pub fn new(target: &'r T) -> Self {
        Self { target }
    }

    /// The underlying borrow, with the view's full lifetime.
    #[must_use]
    pub fn get(&self) -> &'r T {
        self.target
    }

    /// Address of the viewed location.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        ptr::from_ref(self.target)
    }
}

impl<T: EventHeader> EventRef<'_, T> {
    /// Kind of the viewed event.
    #[must_use]
    pub fn kind(&self) -> EventType {
        self.target.kind()
    }

    /// Timestamp of the viewed event.
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        self.target.timestamp()
    }

    /// Overwrite the timestamp in place.
    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.target.set_timestamp(timestamp);
    }
}

impl<T: EventHeader> EventRefReadOnly<'_, T> {
    /// Kind of the viewed event.
    #[must_use]
    pub fn kind(&self) -> EventType {
        self.target.kind()
    }

    /// Timestamp of the viewed event.
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        self.target.timestamp()
    }
}

impl<'a> EventRef<'_, Event<'a>> {
    /// Narrow to a view of the active payload without copying.
    ///
    /// Succeeds iff the envelope's kind is exactly `kind`. The returned view
    /// aliases the same storage, so writes through it are visible through
    /// `self` once it is dropped.
    pub fn try_as<P: EventPayload<'a>>(&mut self, kind: TypedEventType<P>) -> Option<EventRef<'_, P>> {
        if self.target.kind() != kind.kind() {
            trace!(kind = %self.target.kind(), requested = %kind, "view narrowing declined");
            return None;
        }
        P::locate_mut(self.target, Token(())).map(EventRef::new)
    }
}

impl<'r, 'a> EventRefReadOnly<'r, Event<'a>> {
    /// Read-only counterpart of [`EventRef::try_as`].
    ///
    /// The narrowed view keeps the source's full lifetime.
    #[must_use]
    pub fn try_as<P: EventPayload<'a>>(&self, kind: TypedEventType<P>) -> Option<EventRefReadOnly<'r, P>> {
        if self.target.kind() != kind.kind() {
            trace!(kind = %self.target.kind(), requested = %kind, "view narrowing declined");
            return None;
        }
        P::locate(self.target, Token(())).map(EventRefReadOnly::new)
    }
}

impl Event<'_> {
    /// A mutable view of this envelope.
    pub fn by_ref(&mut self) -> EventRef<'_, Self> {
        EventRef::new(self)
    }

    /// A read-only view of this envelope.
    #[must_use]
    pub fn by_ref_read_only(&self) -> EventRefReadOnly<'_, Self> {
        EventRefReadOnly::new(self)
    }
}

impl<T> Deref for EventRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.target
    }
}

impl<T> DerefMut for EventRef<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.target
    }
}

impl<T> Deref for EventRefReadOnly<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.target
    }
}

impl<T> Clone for EventRefReadOnly<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EventRefReadOnly<'_, T> {}

impl<'r, T> From<&'r mut T> for EventRef<'r, T> {
    fn from(target: &'r mut T) -> Self {
        Self::new(target)
    }
}

impl<'r, T> From<&'r T> for EventRefReadOnly<'r, T> {
    fn from(target: &'r T) -> Self {
        Self::new(target)
    }
}

impl<'r, T> From<EventRef<'r, T>> for EventRefReadOnly<'r, T> {
    fn from(view: EventRef<'r, T>) -> Self {
        Self::new(view.into_mut())
    }
}

// Identity equality. Value comparison goes through `*view == *other`.

impl<T> PartialEq for EventRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.as_ptr(), other.as_ptr())
    }
}

impl<T> Eq for EventRef<'_, T> {}

impl<T> PartialEq for EventRefReadOnly<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.target, other.target)
    }
}

impl<T> Eq for EventRefReadOnly<'_, T> {}

impl<T> PartialEq<EventRefReadOnly<'_, T>> for EventRef<'_, T> {
    fn eq(&self, other: &EventRefReadOnly<'_, T>) -> bool {
        ptr::eq(self.as_ptr(), other.as_ptr())
    }
}

impl<T> PartialEq<EventRef<'_, T>> for EventRefReadOnly<'_, T> {
    fn eq(&self, other: &EventRef<'_, T>) -> bool {
        ptr::eq(self.as_ptr(), other.as_ptr())
    }
}

impl<T: fmt::Debug> fmt::Debug for EventRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRef")
            .field("at", &self.as_ptr())
            .field("target", &self.target)
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for EventRefReadOnly<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRefReadOnly")
            .field("at", &self.as_ptr())
            .field("target", &self.target)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for EventRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.target, f)
    }
}

impl<T: fmt::Display> fmt::Display for EventRefReadOnly<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.target, f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ClipboardEvent, KeyboardDeviceEvent, KeyboardId, QuitEvent, UserEvent, WindowId,
    };

    #[test]
    fn same_location_is_equal() {
        let mut event: Event<'_> = QuitEvent::new(1).into();
        let a = EventRefReadOnly::new(&event);
        let b = EventRefReadOnly::new(&event);
        assert_eq!(a, b);

        let view = event.by_ref();
        let ptr = view.as_ptr();
        assert_eq!(ptr, ptr::from_ref(&event));
    }

    #[test]
    fn identical_copies_are_not_equal() {
        let first: Event<'_> = QuitEvent::new(1).into();
        let second = first;
        assert_eq!(first, second);
        assert_ne!(EventRefReadOnly::new(&first), EventRefReadOnly::new(&second));
    }

    #[test]
    fn mutable_and_read_only_compare_by_address() {
        let mut first: Event<'_> = QuitEvent::new(1).into();
        let second = first;
        let view = EventRef::new(&mut first);
        assert_ne!(view, EventRefReadOnly::new(&second));
        assert!(view == view.read_only());
    }

    #[test]
    fn header_passthrough() {
        let mut event: Event<'_> = ClipboardEvent::new(10, true).into();
        let mut view = event.by_ref();
        assert_eq!(view.kind(), EventType::CLIPBOARD_UPDATE);
        view.set_timestamp(20);
        assert_eq!(view.timestamp(), 20);
        assert_eq!(event.timestamp(), 20);
    }

    #[test]
    fn try_as_matching_kind_aliases_storage() {
        let kind = TypedEventType::user(2).unwrap();
        let mut event: Event<'_> = UserEvent::new(kind, 0).into();
        {
            let mut view = event.by_ref();
            let mut user = view.try_as(kind).unwrap();
            user.code = 77;
            user.window_id = WindowId(5);
        }
        let user = event.narrow::<UserEvent>().unwrap();
        assert_eq!(user.code, 77);
        assert_eq!(user.window_id, WindowId(5));
    }

    #[test]
    fn try_as_requires_exact_kind() {
        let mut event: Event<'_> = UserEvent::new(TypedEventType::user(2).unwrap(), 0).into();
        let mut view = event.by_ref();
        assert!(view.try_as(TypedEventType::<UserEvent>::user(3).unwrap()).is_none());
        assert!(view.try_as(QuitEvent::TYPE).is_none());
        assert!(view.try_as(TypedEventType::<UserEvent>::user(2).unwrap()).is_some());
    }

    #[test]
    fn try_as_between_paired_kinds() {
        let mut event: Event<'_> =
            KeyboardDeviceEvent::new(KeyboardDeviceEvent::ADDED, 0, KeyboardId(3)).into();
        let mut view = event.by_ref();
        assert!(view.try_as(KeyboardDeviceEvent::REMOVED).is_none());
        {
            let mut kb = view.try_as(KeyboardDeviceEvent::ADDED).unwrap();
            kb.set_kind(KeyboardDeviceEvent::REMOVED);
        }
        assert_eq!(view.kind(), EventType::KEYBOARD_REMOVED);
    }

    #[test]
    fn read_only_try_as_outlives_view() {
        let event: Event<'_> = QuitEvent::new(42).into();
        let quit = {
            let view = event.by_ref_read_only();
            view.try_as(QuitEvent::TYPE).unwrap()
        };
        assert_eq!(quit.timestamp(), 42);
        assert!(event.by_ref_read_only().try_as(ClipboardEvent::UPDATED).is_none());
    }

    #[test]
    fn display_passes_through() {
        let event: Event<'_> = QuitEvent::new(42).into();
        assert_eq!(
            event.by_ref_read_only().to_string(),
            "{ Type: Application.Quit, Timestamp: 0h 0min 0s 0ms 42ns }"
        );
    }

    #[test]
    fn views_over_payloads() {
        let mut a = QuitEvent::new(1);
        let b = QuitEvent::new(1);
        let view = EventRef::from(&mut a);
        assert_eq!(view.kind(), EventType::APPLICATION_QUIT);
        assert_ne!(view.read_only(), EventRefReadOnly::from(&b));
        let ro: EventRefReadOnly<'_, QuitEvent> = view.into();
        assert_eq!(*ro, b);
    }
}
