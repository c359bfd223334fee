use std::fmt;

use crate::overflow::Overflow;
use crate::sync::atomic::AtomicI64;
use crate::updater::LongFieldUpdater;

static CNT: LongFieldUpdater<Counter> = LongFieldUpdater::new("cnt", cnt);

fn cnt(counter: &Counter) -> &AtomicI64 {
    &counter.cnt
}

/// A lock-free 64-bit counter.
///
/// All mutation goes through atomic read-modify-write operations, so a
/// `&Counter` can be shared freely between threads: concurrent calls to
/// [`increment_and_get`](Counter::increment_and_get) each observe a distinct
/// value and no increment is ever lost.
pub struct Counter {
    cnt: AtomicI64,
}

impl Counter {
    /// A counter starting at zero.
    pub fn new() -> Self {
        Self::with_value(0)
    }

    /// A counter starting at `value`.
    pub fn with_value(value: i64) -> Self {
        Self {
            cnt: AtomicI64::new(value),
        }
    }

    /// The current value.
    pub fn get(&self) -> i64 {
        CNT.get(self)
    }

    /// Overwrites the current value.
    pub fn set(&self, value: i64) {
        CNT.set(self, value)
    }

    /// Atomically adds one and returns the new value.
    ///
    /// Wraps from `i64::MAX` to `i64::MIN`.
    pub fn increment_and_get(&self) -> i64 {
        CNT.increment_and_get(self)
    }

    /// Atomically adds one and returns the value from before the increment.
    pub fn get_and_increment(&self) -> i64 {
        CNT.get_and_increment(self)
    }

    /// Atomically subtracts one and returns the new value.
    pub fn decrement_and_get(&self) -> i64 {
        CNT.decrement_and_get(self)
    }

    /// Atomically adds `delta`, wrapping on overflow.
    pub fn add(&self, delta: i64) {
        CNT.get_and_add(self, delta);
    }

    /// Atomically adds `delta` and returns the new value.
    pub fn add_and_get(&self, delta: i64) -> i64 {
        CNT.add_and_get(self, delta)
    }

    /// Like [`increment_and_get`](Counter::increment_and_get), but fails
    /// instead of wrapping, leaving the counter at `i64::MAX`.
    pub fn checked_increment_and_get(&self) -> Result<i64, Overflow> {
        CNT.checked_add_and_get(self, 1)
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<i64> for Counter {
    fn from(value: i64) -> Self {
        Self::with_value(value)
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter").field("cnt", &self.get()).finish()
    }
}
