#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `konsol` is a console-style logging facade with per-module output gating.
//! A [`Konsol`] logger is created for a module name and exposes the eight
//! console methods (`log`, `info`, `warn`, `error`, `trace`, `dir`, `time`,
//! `time_end`). Output is suppressed by default; it is switched on per module
//! through the `KONSOL` environment variable or [`enable`].
//!
//! # Design
//!
//! A [`VerbosityRegistry`] holds the set of enabled module names. The
//! process-wide registry is created lazily and seeded once, on the first
//! logger construction, from `KONSOL`: a list of names separated by
//! whitespace and/or commas. After that only [`enable`] and [`disable`]
//! change it.
//!
//! Loggers check the registry on every call, not at construction, so
//! toggling a module affects loggers that already exist. Each forwarding
//! method is pre-bound into a [`Forwarder`] that can be detached from its
//! logger and called on its own.
//!
//! Output itself is delegated to a [`Console`]. [`StdConsole`] writes to
//! stdout/stderr, [`RecordingConsole`] keeps calls in memory, and with the
//! `tracing` feature `TracingConsole` emits tracing events.
//!
//! # Invariants
//!
//! - Registry membership is the only thing deciding whether a module's
//!   loggers forward output; loggers sharing a name share fate.
//! - Environment seeding runs at most once per registry. A `KONSOL` value set
//!   after the first construction is never read.
//! - Loggers cannot change the registry; enabling and disabling are
//!   process-wide operations.
//!
//! # Errors
//!
//! Only module-name validation fails: [`Konsol::new`], [`enable`] and
//! [`disable`] return [`KonsolError::InvalidArgument`] for an empty name.
//! Forwarding calls and queries never fail.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use konsol::{Konsol, Method, RecordingConsole, VerbosityRegistry, konsol_info};
//!
//! let registry = Arc::new(VerbosityRegistry::new());
//! let console = Arc::new(RecordingConsole::new());
//! let log = Konsol::builder("mymodule")
//!     .registry(Arc::clone(&registry))
//!     .console(console.clone())
//!     .build()?;
//!
//! konsol_info!(log, "hidden");
//! registry.enable("mymodule")?;
//! konsol_info!(log, "shown {}", 1);
//!
//! let events = console.drain_events();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].method, Method::Info);
//! assert_eq!(events[0].message, "shown 1");
//! # Ok::<(), konsol::KonsolError>(())
//! ```

mod config;
mod console;
mod env;
mod error;
mod logger;
mod macros;
mod method;
mod module_name;
mod registry;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{ENV_VAR, KonsolConfig, parse_module_list};
pub use console::{Console, ConsoleEvent, RecordingConsole, StdConsole};
pub use env::{EnvSource, ProcessEnv};
pub use error::KonsolError;
pub use logger::{Forwarder, Konsol, KonsolBuilder};
pub use method::Method;
pub use module_name::ModuleName;
pub use registry::VerbosityRegistry;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{TracingConsole, init_tracing, init_tracing_with_filter};

/// Enables output for `module_name` in the process-wide registry.
///
/// Idempotent. Fails only for an empty name.
pub fn enable(module_name: &str) -> Result<(), KonsolError> {
    Konsol::enable(module_name)
}

/// Disables output for `module_name` in the process-wide registry.
///
/// Idempotent; disabling a name that was never enabled is not an error.
pub fn disable(module_name: &str) -> Result<(), KonsolError> {
    Konsol::disable(module_name)
}

/// Whether `module_name` is enabled in the process-wide registry.
#[must_use]
pub fn is_enabled(module_name: &str) -> bool {
    VerbosityRegistry::global().is_enabled(module_name)
}
