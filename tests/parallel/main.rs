mod concurrent_increment;

#[cfg(not(feature = "shuttle"))]
pub(crate) mod sync {
    pub use std::sync::*;
    pub use std::thread;

    pub const THREADS: usize = 8;
    pub const ITERATIONS: usize = 10_000;

    pub fn check(f: impl Fn() + Send + Sync + 'static) {
        f();
    }
}

#[cfg(feature = "shuttle")]
pub(crate) mod sync {
    pub use shuttle::sync::*;
    pub use shuttle::thread;

    pub const THREADS: usize = 3;
    pub const ITERATIONS: usize = 4;

    pub fn check(f: impl Fn() + Send + Sync + 'static) {
        shuttle::check_pct(f, 1000, 50);
    }
}
