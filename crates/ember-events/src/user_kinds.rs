//! Allocation of caller-registered kinds from the user range.

use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{debug, warn};

use crate::errors::{EventError, Result};
use crate::types::EventType;

/// Hands out contiguous blocks of `[User, Last)`, lowest first.
///
/// Registration is lock-free and never reuses a kind.
#[derive(Debug, Default)]
pub struct UserKindRegistry {
    next: AtomicU32,
}

impl UserKindRegistry {
    /// A registry with the whole user range free.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU32::new(0),
        }
    }

    /// Reserve `count` kinds and return the first.
    ///
    /// Fails with [`EventError::UserRangeExhausted`] if `count` is zero or
    /// more than what is left.
    pub fn register(&self, count: u32) -> Result<EventType> {
        let mut offset = self.next.load(Ordering::Relaxed);
        loop {
            let remaining = Self::remaining_from(offset);
            if count == 0 || count > remaining {
                warn!(requested = count, remaining, "cannot register user event kinds");
                return Err(EventError::UserRangeExhausted {
                    requested: count,
                    remaining,
                });
            }
            match self
                .next
                .compare_exchange_weak(offset, offset + count, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => {
                    let first = EventType::from_raw(EventType::USER.raw() + offset);
                    debug!(%first, count, "registered user event kinds");
                    return Ok(first);
                }
                Err(current) => offset = current,
            }
        }
    }

    /// Kinds still available.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        Self::remaining_from(self.next.load(Ordering::Relaxed))
    }

    const fn remaining_from(offset: u32) -> u32 {
        EventType::USER_RANGE_LEN - offset
    }
}
