//! A lock-free 64-bit counter, built on a reusable atomic field updater.
//!
#![cfg_attr(not(feature = "shuttle"), doc = "```")]
#![cfg_attr(feature = "shuttle", doc = "```ignore")]
//! let counter = lockfree_counter::Counter::new();
//! assert_eq!(counter.increment_and_get(), 1);
//! assert_eq!(counter.increment_and_get(), 2);
//! assert_eq!(counter.get(), 2);
//! ```
#![forbid(unsafe_code)]

mod counter;
mod overflow;
mod sync;
mod tracing;
mod updater;

pub use self::counter::Counter;
pub use self::overflow::Overflow;
pub use self::sync::atomic::AtomicI64;
pub use self::updater::LongFieldUpdater;
