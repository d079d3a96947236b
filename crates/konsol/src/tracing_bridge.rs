//! crates/konsol/src/tracing_bridge.rs
//! Bridge between konsol loggers and the tracing crate.
//!
//! [`TracingConsole`] is a [`Console`] that turns forwarded calls into tracing
//! events, so gated konsol output can flow into whatever subscriber the host
//! installed. [`init_tracing`] installs a plain fmt subscriber for hosts that
//! have none.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use konsol::{Konsol, TracingConsole, init_tracing};
//!
//! init_tracing().ok();
//! let console = Arc::new(TracingConsole::new());
//! let log = Konsol::builder("mymodule").console(console.clone()).build()?;
//! let db = Konsol::builder("db").console(console).build()?;
//! Konsol::enable("mymodule")?;
//! konsol::konsol_warn!(log, "disk almost full");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::console::Console;

/// Console that emits every forwarded call as a tracing event with target
/// `konsol`.
///
/// | method            | level |
/// |-------------------|-------|
/// | `log`, `info`     | INFO  |
/// | `warn`            | WARN  |
/// | `error`           | ERROR |
/// | `trace`           | TRACE |
/// | `dir`             | DEBUG |
/// | `time`, `time_end`| DEBUG |
///
/// Each event carries a `module` field naming the logger that made the
/// call, so one console can be shared by every logger in a process.
/// `time_end` adds `elapsed_ms`.
///
/// Timers are keyed by module and label together; two modules may run a
/// timer with the same label side by side.
#[derive(Debug, Default)]
pub struct TracingConsole {
    timers: Mutex<HashMap<(String, String), Instant>>,
}

impl TracingConsole {
    /// Creates a console with no running timers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn timers(&self) -> std::sync::MutexGuard<'_, HashMap<(String, String), Instant>> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Console for TracingConsole {
    fn log(&self, module: &str, args: fmt::Arguments<'_>) {
        tracing::info!(target: "konsol", module, method = "log", "{args}");
    }

    fn info(&self, module: &str, args: fmt::Arguments<'_>) {
        tracing::info!(target: "konsol", module, method = "info", "{args}");
    }

    fn warn(&self, module: &str, args: fmt::Arguments<'_>) {
        tracing::warn!(target: "konsol", module, method = "warn", "{args}");
    }

    fn error(&self, module: &str, args: fmt::Arguments<'_>) {
        tracing::error!(target: "konsol", module, method = "error", "{args}");
    }

    fn trace(&self, module: &str, args: fmt::Arguments<'_>) {
        tracing::trace!(target: "konsol", module, method = "trace", "{args}");
    }

    fn dir(&self, module: &str, args: fmt::Arguments<'_>) {
        tracing::debug!(target: "konsol", module, method = "dir", "{args}");
    }

    fn time(&self, module: &str, label: fmt::Arguments<'_>) {
        let label = label.to_string();
        tracing::debug!(target: "konsol", module, method = "time", "{label}");
        self.timers()
            .entry((module.to_owned(), label))
            .or_insert_with(Instant::now);
    }

    fn time_end(&self, module: &str, label: fmt::Arguments<'_>) {
        let label = label.to_string();
        let started = self.timers().remove(&(module.to_owned(), label.clone()));
        match started {
            Some(started) => {
                let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
                tracing::debug!(
                    target: "konsol",
                    module,
                    method = "timeEnd",
                    elapsed_ms,
                    "{label}: {elapsed_ms:.3}ms"
                );
            }
            None => {
                tracing::warn!(
                    target: "konsol",
                    module,
                    method = "timeEnd",
                    "no such label '{label}'"
                );
            }
        }
    }
}

/// Installs a fmt subscriber filtered by `RUST_LOG`.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
}

/// Installs a fmt subscriber behind a caller-supplied filter layer.
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// konsol::init_tracing_with_filter(EnvFilter::new("konsol=debug"))?;
/// ```
pub fn init_tracing_with_filter<F>(filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
