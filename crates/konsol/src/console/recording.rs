//! crates/konsol/src/console/recording.rs
//! In-memory console that records forwarded calls.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use super::Console;
use crate::method::Method;

/// A call that reached a [`RecordingConsole`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleEvent {
    /// Module name of the logger that made the call.
    pub module: String,
    /// Console method that was invoked.
    pub method: Method,
    /// The rendered arguments.
    pub message: String,
}

/// Console that keeps every call in memory instead of writing it.
///
/// Useful for asserting on what a gated logger actually forwarded.
///
/// ```
/// use std::sync::Arc;
/// use konsol::{Konsol, Method, RecordingConsole, VerbosityRegistry};
///
/// let console = Arc::new(RecordingConsole::new());
/// let registry = Arc::new(VerbosityRegistry::new());
/// let logger = Konsol::builder("mymodule")
///     .registry(Arc::clone(&registry))
///     .console(console.clone())
///     .build()
///     .unwrap();
///
/// logger.info(format_args!("suppressed"));
/// registry.enable("mymodule").unwrap();
/// logger.info(format_args!("shown"));
///
/// let events = console.drain_events();
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].method, Method::Info);
/// assert_eq!(events[0].message, "shown");
/// ```
#[derive(Debug, Default)]
pub struct RecordingConsole {
    events: Mutex<Vec<ConsoleEvent>>,
}

impl RecordingConsole {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, module: &str, method: Method, args: fmt::Arguments<'_>) {
        let event = ConsoleEvent {
            module: module.to_owned(),
            method,
            message: args.to_string(),
        };
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Removes and returns every recorded event, oldest first.
    pub fn drain_events(&self) -> Vec<ConsoleEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    /// Number of events recorded for `method` since the last drain.
    #[must_use]
    pub fn count(&self, method: Method) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|event| event.method == method)
            .count()
    }

    /// Number of events recorded since the last drain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been recorded since the last drain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Console for RecordingConsole {
    fn log(&self, module: &str, args: fmt::Arguments<'_>) {
        self.record(module, Method::Log, args);
    }

    fn info(&self, module: &str, args: fmt::Arguments<'_>) {
        self.record(module, Method::Info, args);
    }

    fn warn(&self, module: &str, args: fmt::Arguments<'_>) {
        self.record(module, Method::Warn, args);
    }

    fn error(&self, module: &str, args: fmt::Arguments<'_>) {
        self.record(module, Method::Error, args);
    }

    fn trace(&self, module: &str, args: fmt::Arguments<'_>) {
        self.record(module, Method::Trace, args);
    }

    fn dir(&self, module: &str, args: fmt::Arguments<'_>) {
        self.record(module, Method::Dir, args);
    }

    fn time(&self, module: &str, label: fmt::Arguments<'_>) {
        self.record(module, Method::Time, label);
    }

    fn time_end(&self, module: &str, label: fmt::Arguments<'_>) {
        self.record(module, Method::TimeEnd, label);
    }
}
