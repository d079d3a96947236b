//! crates/konsol/src/console/standard.rs
//! Console that writes to stdout and stderr.

use std::backtrace::Backtrace;
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use super::Console;

const DEFAULT_LABEL: &str = "default";

type Stream = Mutex<Box<dyn Write + Send>>;

/// The default console.
///
/// `log`, `info`, `dir` and finished timers go to the output stream;
/// `warn`, `error` and `trace` go to the error stream. Each call writes one
/// line (plus a backtrace for `trace`). Write failures are ignored.
pub struct StdConsole {
    out: Stream,
    err: Stream,
    timers: Mutex<HashMap<String, Instant>>,
}

impl fmt::Debug for StdConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdConsole")
            .field(
                "timers",
                &self.timers.lock().unwrap_or_else(PoisonError::into_inner).len(),
            )
            .finish_non_exhaustive()
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl StdConsole {
    /// Console bound to the process stdout and stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    /// Console bound to arbitrary writers.
    pub fn with_writers<O, E>(out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            timers: Mutex::new(HashMap::new()),
        }
    }

    fn write_line(stream: &Stream, args: fmt::Arguments<'_>) {
        let mut writer = stream.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.write_fmt(args);
        let _ = writer.write_all(b"\n");
        let _ = writer.flush();
    }

    fn label(label: fmt::Arguments<'_>) -> String {
        let label = label.to_string();
        if label.is_empty() {
            DEFAULT_LABEL.to_owned()
        } else {
            label
        }
    }
}

impl Console for StdConsole {
    fn log(&self, _module: &str, args: fmt::Arguments<'_>) {
        Self::write_line(&self.out, args);
    }

    fn info(&self, _module: &str, args: fmt::Arguments<'_>) {
        Self::write_line(&self.out, args);
    }

    fn warn(&self, _module: &str, args: fmt::Arguments<'_>) {
        Self::write_line(&self.err, args);
    }

    fn error(&self, _module: &str, args: fmt::Arguments<'_>) {
        Self::write_line(&self.err, args);
    }

    fn trace(&self, _module: &str, args: fmt::Arguments<'_>) {
        let backtrace = Backtrace::force_capture();
        Self::write_line(&self.err, format_args!("Trace: {args}\n{backtrace}"));
    }

    fn dir(&self, _module: &str, args: fmt::Arguments<'_>) {
        Self::write_line(&self.out, args);
    }

    fn time(&self, _module: &str, label: fmt::Arguments<'_>) {
        let label = Self::label(label);
        let mut timers = self.timers.lock().unwrap_or_else(PoisonError::into_inner);
        if timers.contains_key(&label) {
            drop(timers);
            Self::write_line(
                &self.err,
                format_args!("Warning: Label '{label}' already exists for console.time()"),
            );
            return;
        }
        timers.insert(label, Instant::now());
    }

    fn time_end(&self, _module: &str, label: fmt::Arguments<'_>) {
        let label = Self::label(label);
        let started = self
            .timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&label);
        match started {
            Some(started) => {
                let millis = started.elapsed().as_secs_f64() * 1000.0;
                Self::write_line(&self.out, format_args!("{label}: {millis:.3}ms"));
            }
            None => Self::write_line(
                &self.err,
                format_args!("Warning: No such label '{label}' for console.timeEnd()"),
            ),
        }
    }
}
