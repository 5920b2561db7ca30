//! Declared kind sets and the [`AcceptsKind`] predicate.
//!
//! Each payload type declares, as a constant, exactly which kinds it may
//! carry. The predicate is stateless and type-indexed: it lives on the type,
//! not on instances.

use std::fmt;

use super::event_type::EventType;

/// A statically declared set of kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindSet {
    /// Exactly one kind.
    One(EventType),
    /// Exactly two kinds.
    Pair(EventType, EventType),
    /// Every kind in the inclusive range.
    Range(EventType, EventType),
    /// Every kind.
    Any,
    /// Every live kind not claimed by a dedicated payload type.
    /// [`EventType::LAST`] is a sentinel and never a member.
    Unclaimed,
}

impl KindSet {
    /// Whether `kind` is a member.
    #[must_use]
    pub fn contains(self, kind: EventType) -> bool {
        match self {
            Self::One(k) => kind == k,
            Self::Pair(a, b) => kind == a || kind == b,
            Self::Range(lo, hi) => lo <= kind && kind <= hi,
            Self::Any => true,
            Self::Unclaimed => kind != EventType::LAST && !crate::envelope::is_claimed(kind),
        }
    }
}

impl fmt::Display for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(k) => write!(f, "{k}"),
            Self::Pair(a, b) => write!(f, "{a} | {b}"),
            Self::Range(lo, hi) => write!(f, "{lo}..={hi}"),
            Self::Any => f.write_str("any"),
            Self::Unclaimed => f.write_str("unclaimed"),
        }
    }
}

/// Static "accepts this kind" predicate for a payload type.
pub trait AcceptsKind {
    /// The full set of kinds this type may carry.
    const ACCEPTED: KindSet;

    /// Whether a value of this type may carry `kind`.
    #[must_use]
    fn accepts(kind: EventType) -> bool {
        Self::ACCEPTED.contains(kind)
    }
}
