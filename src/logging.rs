// With the `log` feature these forward to the `log` crate; without it they
// expand to nothing so the core stays dependency-free.

#[cfg(feature = "log")]
pub(crate) use ::log::{debug, trace};

#[cfg(not(feature = "log"))]
macro_rules! __debug {
    ($($arg:tt)+) => {};
}

#[cfg(not(feature = "log"))]
macro_rules! __trace {
    ($($arg:tt)+) => {};
}

#[cfg(not(feature = "log"))]
pub(crate) use {__debug as debug, __trace as trace};
