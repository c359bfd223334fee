use std::fmt;

use crate::overflow::Overflow;
use crate::sync::atomic::{AtomicI64, Ordering};
use crate::tracing::{debug, trace};

/// Performs atomic arithmetic on one `AtomicI64` field of values of type `T`.
///
/// An updater holds no state of its own beyond the field projection, so it is
/// normally kept in a `static` next to the type whose field it updates:
///
// Shuttle's atomics panic outside a shuttle execution.
#[cfg_attr(not(feature = "shuttle"), doc = "```")]
#[cfg_attr(feature = "shuttle", doc = "```ignore")]
/// use lockfree_counter::LongFieldUpdater;
/// use lockfree_counter::AtomicI64;
///
/// struct Stats {
///     hits: AtomicI64,
/// }
///
/// fn hits(stats: &Stats) -> &AtomicI64 {
///     &stats.hits
/// }
///
/// static HITS: LongFieldUpdater<Stats> = LongFieldUpdater::new("hits", hits);
///
/// let stats = Stats { hits: AtomicI64::new(0) };
/// assert_eq!(HITS.increment_and_get(&stats), 1);
/// assert_eq!(HITS.get(&stats), 1);
/// ```
///
/// Every operation is sequentially consistent. Arithmetic wraps on overflow
/// unless one of the `checked_*` methods is used.
pub struct LongFieldUpdater<T: ?Sized> {
    field_name: &'static str,
    field: fn(&T) -> &AtomicI64,
}

impl<T: ?Sized> LongFieldUpdater<T> {
    pub const fn new(field_name: &'static str, field: fn(&T) -> &AtomicI64) -> Self {
        Self { field_name, field }
    }

    pub fn field_name(&self) -> &'static str {
        self.field_name
    }

    #[inline]
    fn field<'a>(&self, obj: &'a T) -> &'a AtomicI64 {
        (self.field)(obj)
    }

    #[inline]
    pub fn get(&self, obj: &T) -> i64 {
        self.field(obj).load(Ordering::SeqCst)
    }

    pub fn set(&self, obj: &T, value: i64) {
        trace!(field = self.field_name, value, "set");
        self.field(obj).store(value, Ordering::SeqCst);
    }

    /// Stores `value`, returning the previous value.
    pub fn get_and_set(&self, obj: &T, value: i64) -> i64 {
        let previous = self.field(obj).swap(value, Ordering::SeqCst);
        trace!(field = self.field_name, previous, value, "get_and_set");
        previous
    }

    /// Stores `update` if the field currently holds `expect`.
    /// Returns whether the store happened.
    pub fn compare_and_set(&self, obj: &T, expect: i64, update: i64) -> bool {
        self.field(obj)
            .compare_exchange(expect, update, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    #[inline]
    pub fn get_and_add(&self, obj: &T, delta: i64) -> i64 {
        self.field(obj).fetch_add(delta, Ordering::SeqCst)
    }

    /// Adds `delta` and returns the new value. No two concurrent callers
    /// observe the same intermediate value.
    #[inline]
    pub fn add_and_get(&self, obj: &T, delta: i64) -> i64 {
        self.get_and_add(obj, delta).wrapping_add(delta)
    }

    #[inline]
    pub fn increment_and_get(&self, obj: &T) -> i64 {
        self.add_and_get(obj, 1)
    }

    #[inline]
    pub fn get_and_increment(&self, obj: &T) -> i64 {
        self.get_and_add(obj, 1)
    }

    #[inline]
    pub fn decrement_and_get(&self, obj: &T) -> i64 {
        self.add_and_get(obj, -1)
    }

    #[inline]
    pub fn get_and_decrement(&self, obj: &T) -> i64 {
        self.get_and_add(obj, -1)
    }

    /// Like [`add_and_get`](Self::add_and_get), but leaves the field
    /// untouched instead of wrapping.
    pub fn checked_add_and_get(&self, obj: &T, delta: i64) -> Result<i64, Overflow> {
        let field = self.field(obj);
        let mut current = field.load(Ordering::SeqCst);
        loop {
            let Some(next) = current.checked_add(delta) else {
                debug!(field = self.field_name, current, delta, "refusing to overflow");
                return Err(Overflow::new(self.field_name, current, delta));
            };

            match field.compare_exchange_weak(current, next, Ordering::SeqCst, Ordering::SeqCst) {
                Ok(_) => return Ok(next),
                Err(actual) => current = actual,
            }
        }
    }
}

impl<T: ?Sized> fmt::Debug for LongFieldUpdater<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LongFieldUpdater")
            .field(&self.field_name)
            .finish()
    }
}
