//! crates/konsol/src/macros.rs
//! Formatting macros for the forwarding methods.
//!
//! Each macro builds the [`fmt::Arguments`](std::fmt::Arguments) in place and
//! hands it to the method of the same name on the first argument, which is
//! normally a [`Konsol`](crate::Konsol). Any value with a matching method
//! taking `fmt::Arguments` works too. Nothing is rendered unless the module
//! is enabled.

/// Forwards to [`Konsol::log`](crate::Konsol::log).
///
/// # Example
/// ```
/// let log = konsol::Konsol::new("mymodule").unwrap();
/// konsol::konsol_log!(log, "loaded {} entries", 3);
/// ```
#[macro_export]
macro_rules! konsol_log {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log(::std::format_args!($($arg)*))
    };
}

/// Forwards to [`Konsol::info`](crate::Konsol::info).
#[macro_export]
macro_rules! konsol_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(::std::format_args!($($arg)*))
    };
}

/// Forwards to [`Konsol::warn`](crate::Konsol::warn).
#[macro_export]
macro_rules! konsol_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(::std::format_args!($($arg)*))
    };
}

/// Forwards to [`Konsol::error`](crate::Konsol::error).
#[macro_export]
macro_rules! konsol_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(::std::format_args!($($arg)*))
    };
}

/// Forwards to [`Konsol::trace`](crate::Konsol::trace).
#[macro_export]
macro_rules! konsol_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace(::std::format_args!($($arg)*))
    };
}

/// Forwards a pretty `Debug` rendering of a value to
/// [`Konsol::dir`](crate::Konsol::dir).
///
/// # Example
/// ```
/// let log = konsol::Konsol::new("mymodule").unwrap();
/// konsol::konsol_dir!(log, vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! konsol_dir {
    ($logger:expr, $value:expr $(,)?) => {
        $logger.dir_value(&$value)
    };
}

/// Starts a timer through [`Konsol::time`](crate::Konsol::time).
#[macro_export]
macro_rules! konsol_time {
    ($logger:expr, $($arg:tt)*) => {
        $logger.time(::std::format_args!($($arg)*))
    };
}

/// Stops a timer through [`Konsol::time_end`](crate::Konsol::time_end).
#[macro_export]
macro_rules! konsol_time_end {
    ($logger:expr, $($arg:tt)*) => {
        $logger.time_end(::std::format_args!($($arg)*))
    };
}
