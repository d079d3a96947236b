//! crates/konsol/src/console/mod.rs
//! The console primitive wrapped by every logger.

use std::fmt;
use std::sync::{Arc, OnceLock};

mod recording;
mod standard;

pub use recording::{ConsoleEvent, RecordingConsole};
pub use standard::StdConsole;

/// A console-style output surface with exactly eight methods.
///
/// Loggers hand the caller's [`fmt::Arguments`] through unchanged, together
/// with the module name of the logger making the call. An implementation
/// decides where and how they are written, and whether the module name
/// appears in the output. Implementations must not fail: output errors are
/// swallowed at this layer.
pub trait Console: Send + Sync {
    /// General output.
    fn log(&self, module: &str, args: fmt::Arguments<'_>);
    /// Informational output.
    fn info(&self, module: &str, args: fmt::Arguments<'_>);
    /// Warning output.
    fn warn(&self, module: &str, args: fmt::Arguments<'_>);
    /// Error output.
    fn error(&self, module: &str, args: fmt::Arguments<'_>);
    /// Output followed by a stack trace.
    fn trace(&self, module: &str, args: fmt::Arguments<'_>);
    /// Inspection output; callers usually pass a `{:#?}` rendering.
    fn dir(&self, module: &str, args: fmt::Arguments<'_>);
    /// Starts the timer named by `label`.
    fn time(&self, module: &str, label: fmt::Arguments<'_>);
    /// Stops the timer named by `label` and reports the elapsed time.
    fn time_end(&self, module: &str, label: fmt::Arguments<'_>);
}

impl<C> Console for Arc<C>
where
    C: Console + ?Sized,
{
    fn log(&self, module: &str, args: fmt::Arguments<'_>) {
        (**self).log(module, args);
    }

    fn info(&self, module: &str, args: fmt::Arguments<'_>) {
        (**self).info(module, args);
    }

    fn warn(&self, module: &str, args: fmt::Arguments<'_>) {
        (**self).warn(module, args);
    }

    fn error(&self, module: &str, args: fmt::Arguments<'_>) {
        (**self).error(module, args);
    }

    fn trace(&self, module: &str, args: fmt::Arguments<'_>) {
        (**self).trace(module, args);
    }

    fn dir(&self, module: &str, args: fmt::Arguments<'_>) {
        (**self).dir(module, args);
    }

    fn time(&self, module: &str, label: fmt::Arguments<'_>) {
        (**self).time(module, label);
    }

    fn time_end(&self, module: &str, label: fmt::Arguments<'_>) {
        (**self).time_end(module, label);
    }
}

/// Process-wide [`StdConsole`], shared so timers started by one logger can
/// be stopped by another.
pub(crate) fn default_console() -> Arc<dyn Console> {
    static CONSOLE: OnceLock<Arc<dyn Console>> = OnceLock::new();
    Arc::clone(CONSOLE.get_or_init(|| Arc::new(StdConsole::new())))
}
