//! In-process queue implementing the boundary traits.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, warn};

use super::{EventFilter, EventSink, EventSource};
use crate::errors::{EventError, Result};
use crate::raw::RawEvent;
use crate::types::EventType;
use crate::user_kinds::UserKindRegistry;

/// Default capacity, matching the native queue's limit.
pub const DEFAULT_CAPACITY: usize = 65_535;

struct State {
    events: VecDeque<RawEvent>,
    disabled: HashSet<EventType>,
}

/// Bounded FIFO of raw records with per-kind filtering.
///
/// Safe to share across threads; producers push while a consumer blocks in
/// [`EventSource::wait_raw`].
pub struct LocalQueue {
    state: Mutex<State>,
    ready: Condvar,
    capacity: usize,
    user_kinds: UserKindRegistry,
}

impl fmt::Debug for LocalQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("LocalQueue")
            .field("capacity", &self.capacity)
            .field("len", &state.events.len())
            .field("disabled", &state.disabled.len())
            .finish_non_exhaustive()
    }
}

impl LocalQueue {
    /// An empty queue holding at most `capacity` records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(State {
                events: VecDeque::new(),
                disabled: HashSet::new(),
            }),
            ready: Condvar::new(),
            capacity,
            user_kinds: UserKindRegistry::new(),
        }
    }

    /// Maximum number of queued records.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of queued records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().events.len()
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().events.is_empty()
    }

    /// Whether a record of `kind` is queued.
    #[must_use]
    pub fn has_event(&self, kind: EventType) -> bool {
        self.state.lock().events.iter().any(|raw| raw.kind() == kind)
    }

    /// Drop every queued record whose kind lies in `kinds`. Returns the
    /// number dropped.
    pub fn flush(&self, kinds: RangeInclusive<EventType>) -> usize {
        let mut state = self.state.lock();
        let before = state.events.len();
        state.events.retain(|raw| !kinds.contains(&raw.kind()));
        let dropped = before - state.events.len();
        if dropped > 0 {
            debug!(dropped, from = %kinds.start(), to = %kinds.end(), "flushed events");
        }
        dropped
    }

    /// Reserve `count` contiguous user kinds; returns the first.
    pub fn register_user_kinds(&self, count: u32) -> Result<EventType> {
        self.user_kinds.register(count)
    }

    /// Kinds currently disabled, in ascending order.
    #[must_use]
    pub fn disabled_kinds(&self) -> Vec<EventType> {
        let mut kinds: Vec<_> = self.state.lock().disabled.iter().copied().collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for LocalQueue {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl EventSource for LocalQueue {
    fn poll_raw(&self) -> Option<RawEvent> {
        self.state.lock().events.pop_front()
    }

    fn wait_raw(&self, timeout: Option<Duration>) -> Option<RawEvent> {
        // A timeout past the clock's range waits without a deadline.
        let deadline = timeout.and_then(|t| Instant::now().checked_add(t));
        let mut state = self.state.lock();
        loop {
            if let Some(raw) = state.events.pop_front() {
                return Some(raw);
            }
            match deadline {
                None => self.ready.wait(&mut state),
                Some(deadline) => {
                    if self.ready.wait_until(&mut state, deadline).timed_out() {
                        return state.events.pop_front();
                    }
                }
            }
        }
    }
}

impl EventSink for LocalQueue {
    fn push_raw(&self, raw: RawEvent) -> Result<bool> {
        let kind = raw.kind();
        let mut state = self.state.lock();
        if state.disabled.contains(&kind) {
            debug!(%kind, "dropped event of disabled kind");
            return Ok(false);
        }
        if state.events.len() >= self.capacity {
            warn!(%kind, capacity = self.capacity, "event queue full");
            return Err(EventError::QueueFull {
                capacity: self.capacity,
            });
        }
        state.events.push_back(raw);
        drop(state);
        let _ = self.ready.notify_one();
        Ok(true)
    }
}

impl EventFilter for LocalQueue {
    fn is_enabled(&self, kind: EventType) -> bool {
        !self.state.lock().disabled.contains(&kind)
    }

    fn set_enabled(&self, kind: EventType, enabled: bool) {
        let mut state = self.state.lock();
        if enabled {
            if state.disabled.remove(&kind) {
                debug!(%kind, "event kind enabled");
            }
            return;
        }
        if state.disabled.insert(kind) {
            let before = state.events.len();
            state.events.retain(|raw| raw.kind() != kind);
            debug!(%kind, dropped = before - state.events.len(), "event kind disabled");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Event;
    use crate::types::{EventHeader, QuitEvent, TypedEventType, UserEvent};
    use assert_matches::assert_matches;
    use std::sync::Arc;

    fn user(offset: i32) -> Event<'static> {
        UserEvent::new(TypedEventType::user(offset).unwrap(), 0).into()
    }

    #[test]
    fn fifo_order() {
        let queue = LocalQueue::default();
        assert!(queue.push(&user(1)).unwrap());
        assert!(queue.push(&user(2)).unwrap());
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.poll().unwrap(), Some(user(1)));
        assert_eq!(queue.poll().unwrap(), Some(user(2)));
        assert_eq!(queue.poll().unwrap(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn disabled_kind_is_dropped() {
        let queue = LocalQueue::default();
        let kind = EventType::user(1).unwrap();
        kind.set_enabled(&queue, false);
        assert!(!kind.is_enabled(&queue));
        assert!(!queue.push(&user(1)).unwrap());
        assert!(queue.is_empty());

        kind.set_enabled(&queue, true);
        assert!(queue.push(&user(1)).unwrap());
    }

    #[test]
    fn disabling_flushes_queued_kind() {
        let queue = LocalQueue::default();
        let _ = queue.push(&user(1)).unwrap();
        let _ = queue.push(&user(2)).unwrap();
        queue.set_enabled(EventType::user(1).unwrap(), false);
        assert!(!queue.has_event(EventType::user(1).unwrap()));
        assert!(queue.has_event(EventType::user(2).unwrap()));
        assert_eq!(queue.disabled_kinds(), [EventType::user(1).unwrap()]);
    }

    #[test]
    fn full_queue_rejects() {
        let queue = LocalQueue::new(1);
        let _ = queue.push(&user(0)).unwrap();
        assert_matches!(queue.push(&user(0)), Err(EventError::QueueFull { capacity: 1 }));
    }

    #[test]
    fn flush_range() {
        let queue = LocalQueue::default();
        for offset in 0..5 {
            let _ = queue.push(&user(offset)).unwrap();
        }
        let _ = queue.push(&QuitEvent::new(0).into()).unwrap();
        let dropped = queue.flush(EventType::user(1).unwrap()..=EventType::user(3).unwrap());
        assert_eq!(dropped, 3);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn wait_times_out_when_empty() {
        let queue = LocalQueue::default();
        assert_eq!(queue.wait(Some(Duration::from_millis(10))).unwrap(), None);
    }

    #[test]
    fn wait_with_unrepresentable_timeout_returns_queued_event() {
        let queue = LocalQueue::default();
        assert!(queue.push(&QuitEvent::new(3).into()).unwrap());
        let event = queue.wait(Some(Duration::MAX)).unwrap().unwrap();
        assert_eq!(event.kind(), EventType::APPLICATION_QUIT);
    }

    #[test]
    fn wait_with_unrepresentable_timeout_blocks_until_push() {
        let queue = Arc::new(LocalQueue::default());
        let producer = Arc::clone(&queue);
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            producer.push(&QuitEvent::new(4).into()).unwrap()
        });
        let event = queue.wait(Some(Duration::MAX)).unwrap().unwrap();
        assert_eq!(event.timestamp(), 4);
        assert!(handle.join().unwrap());
    }

    #[test]
    fn wait_wakes_on_push_from_other_thread() {
        let queue = Arc::new(LocalQueue::default());
        let producer = Arc::clone(&queue);
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            producer.push(&QuitEvent::new(5).into()).unwrap()
        });
        let event = queue.wait(Some(Duration::from_secs(5))).unwrap().unwrap();
        assert_eq!(event.kind(), EventType::APPLICATION_QUIT);
        assert!(handle.join().unwrap());
    }

    #[test]
    fn registers_user_kinds_contiguously() {
        let queue = LocalQueue::default();
        let first = queue.register_user_kinds(3).unwrap();
        let next = queue.register_user_kinds(1).unwrap();
        assert_eq!(first, EventType::USER);
        assert_eq!(next, EventType::user(3).unwrap());
    }
}
