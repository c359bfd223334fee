use lockfree_counter::Counter;
use test_log::test;

use crate::sync::{check, thread, Arc, ITERATIONS, THREADS};

/// Every increment from every thread gets its own value, and together
/// they cover `1..=N` without gaps.
#[test]
fn increments_are_unique_and_dense() {
    check(|| {
        let counter = Arc::new(Counter::new());

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let counter = counter.clone();
                thread::spawn(move || {
                    (0..ITERATIONS)
                        .map(|_| counter.increment_and_get())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut observed = Vec::with_capacity(THREADS * ITERATIONS);
        for handle in handles {
            let values = handle.join().unwrap();
            // Each thread sees its own increments in increasing order.
            assert!(values.windows(2).all(|w| w[0] < w[1]), "{values:?}");
            observed.extend(values);
        }

        let n = (THREADS * ITERATIONS) as i64;
        observed.sort_unstable();
        assert_eq!(observed, (1..=n).collect::<Vec<_>>());
        assert_eq!(counter.get(), n);
    });
}

/// Mixing the pre- and post-increment flavors still loses nothing.
#[test]
fn mixed_increments() {
    check(|| {
        let counter = Arc::new(Counter::with_value(100));

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let counter = counter.clone();
                thread::spawn(move || {
                    for _ in 0..ITERATIONS {
                        if t % 2 == 0 {
                            counter.increment_and_get();
                        } else {
                            counter.get_and_increment();
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.get(), 100 + (THREADS * ITERATIONS) as i64);
    });
}
