//! Deadline-based debouncing.
//!
//! There are no background timers here. A [`Debouncer`] only records the
//! latest value and when it becomes due; whoever owns it (the TUI loop, a
//! test) calls [`Debouncer::poll`] with the current time. Scheduling always
//! replaces the pending value, so a superseded value can never fire.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Time source for the controller.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    elapsed_nanos: Arc<AtomicU64>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            elapsed_nanos: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed_nanos
            .fetch_add(by.as_nanos() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + Duration::from_nanos(self.elapsed_nanos.load(Ordering::SeqCst))
    }
}

/// Identifies one scheduled value. Only the most recent handle is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceHandle(u64);

#[derive(Debug)]
struct Pending<T> {
    handle: DebounceHandle,
    value: T,
    deadline: Instant,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    next_id: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_id: 0,
            pending: None,
        }
    }

    /// Start a new quiet window for `value`, dropping whatever was pending.
    pub fn schedule(&mut self, value: T, now: Instant) -> DebounceHandle {
        self.next_id += 1;
        let handle = DebounceHandle(self.next_id);
        self.pending = Some(Pending {
            handle,
            value,
            deadline: now + self.delay,
        });
        handle
    }

    /// Drop the pending value, if any. Calling it again is a no-op.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Cancel only if `handle` is still the live one.
    pub fn cancel_handle(&mut self, handle: DebounceHandle) -> bool {
        if self.is_live(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_live(&self, handle: DebounceHandle) -> bool {
        self.pending.as_ref().is_some_and(|p| p.handle == handle)
    }

    /// Take the pending value once its quiet window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if due { self.cancel() } else { None }
    }

    /// Take the pending value regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
