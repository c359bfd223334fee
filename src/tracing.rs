//! Wrappers around `tracing` macros that keep event construction out of the
//! atomic fast paths; these events are only ever enabled while debugging.

macro_rules! trace {
    ($($x:tt)*) => {
        crate::tracing::event!(TRACE, $($x)*)
    };
}

macro_rules! debug {
    ($($x:tt)*) => {
        crate::tracing::event!(DEBUG, $($x)*)
    };
}

macro_rules! event {
    ($level:ident, $($x:tt)*) => {{
        if ::tracing::enabled!(::tracing::Level::$level) {
            let event = {
                #[cold] #[inline(never)] || { ::tracing::event!(::tracing::Level::$level, $($x)*) }
            };

            event();
        }
    }};
}

pub(crate) use {debug, event, trace};
