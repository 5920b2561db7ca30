//! [`TypedEventType<P>`]: an [`EventType`] proven acceptable to payload `P`.
//!
//! The only public constructors validate `P::accepts(kind)`, so holding a
//! `TypedEventType<P>` is proof that the kind may legally be carried by a
//! `P`. Payload setters take this type instead of a bare [`EventType`],
//! which removes a whole class of variant confusion at compile time.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::event_type::EventType;
use super::kind_set::AcceptsKind;
use crate::errors::{EventError, Result};

/// An [`EventType`] tagged with the payload type it is valid for.
///
/// Zero-size beyond the wrapped kind. Widening to [`EventType`] is free;
/// narrowing from [`EventType`] is checked.
pub struct TypedEventType<P> {
    kind: EventType,
    _payload: PhantomData<fn() -> P>,
}

impl<P> TypedEventType<P> {
    /// Wrap `kind` without consulting `P::accepts`.
    ///
    /// Only used for the pre-validated constants declared next to each
    /// payload type.
    pub(crate) const fn new_unchecked(kind: EventType) -> Self {
        Self {
            kind,
            _payload: PhantomData,
        }
    }

    /// The wrapped kind.
    #[must_use]
    pub const fn kind(self) -> EventType {
        self.kind
    }
}

impl<P: AcceptsKind> TypedEventType<P> {
    /// Validate `kind` against `P`.
    ///
    /// Fails with [`EventError::KindMismatch`] if `P` does not accept it.
    pub fn new(kind: EventType) -> Result<Self> {
        if P::accepts(kind) {
            Ok(Self::new_unchecked(kind))
        } else {
            Err(EventError::KindMismatch {
                expected: P::ACCEPTED.to_string(),
                actual: kind,
            })
        }
    }

    /// Shorthand for `TypedEventType::new(EventType::user(offset)?)`.
    pub fn user(offset: i32) -> Result<Self> {
        Self::new(EventType::user(offset)?)
    }
}

impl<P: AcceptsKind> TryFrom<EventType> for TypedEventType<P> {
    type Error = EventError;

    fn try_from(kind: EventType) -> Result<Self> {
        Self::new(kind)
    }
}

impl<P> From<TypedEventType<P>> for EventType {
    fn from(typed: TypedEventType<P>) -> Self {
        typed.kind
    }
}

// Manual impls: derives would wrongly require `P: Clone` etc.

impl<P> Clone for TypedEventType<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for TypedEventType<P> {}

impl<P> PartialEq for TypedEventType<P> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl<P> Eq for TypedEventType<P> {}

impl<P> PartialEq<EventType> for TypedEventType<P> {
    fn eq(&self, other: &EventType) -> bool {
        self.kind == *other
    }
}

impl<P> PartialEq<TypedEventType<P>> for EventType {
    fn eq(&self, other: &TypedEventType<P>) -> bool {
        *self == other.kind
    }
}

impl<P> PartialOrd for TypedEventType<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for TypedEventType<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind.cmp(&other.kind)
    }
}

impl<P> PartialOrd<EventType> for TypedEventType<P> {
    fn partial_cmp(&self, other: &EventType) -> Option<Ordering> {
        self.kind.partial_cmp(other)
    }
}

impl<P> PartialOrd<TypedEventType<P>> for EventType {
    fn partial_cmp(&self, other: &TypedEventType<P>) -> Option<Ordering> {
        self.partial_cmp(&other.kind)
    }
}

impl<P> Hash for TypedEventType<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

impl<P> fmt::Display for TypedEventType<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl<P> fmt::Debug for TypedEventType<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TypedEventType<{}>({})",
            std::any::type_name::<P>().rsplit("::").next().unwrap_or("?"),
            self.kind
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
