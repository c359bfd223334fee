pub use shim::*;

#[cfg(feature = "shuttle")]
pub mod shim {
    pub use shuttle::sync::atomic;
}

#[cfg(not(feature = "shuttle"))]
pub mod shim {
    pub mod atomic {
        // `std` lacks `AtomicI64` on some 32-bit targets.
        pub use portable_atomic::AtomicI64;
        pub use std::sync::atomic::Ordering;
    }
}
