//! Shared helpers for konsol integration tests.
//!
//! Every test binary is its own process, so each file gets a fresh
//! process-wide registry. [`KonsolEnv`] owns the environment for the span of
//! a test, and [`global_logger`] routes output into a [`RecordingConsole`].

#![allow(dead_code)]

use std::env;
use std::ffi::OsString;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use konsol::{ENV_VAR, Konsol, RecordingConsole};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Exclusive hold on the process environment.
///
/// Only one `KonsolEnv` exists at a time within a test binary. Every
/// variable it touches is put back, newest change first, when it drops.
pub struct KonsolEnv {
    saved: Vec<(String, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl KonsolEnv {
    /// Waits for any other holder, then takes the environment over.
    pub fn acquire() -> Self {
        Self {
            saved: Vec::new(),
            _lock: ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Sets the `KONSOL` variable.
    pub fn modules(&mut self, value: &str) -> &mut Self {
        self.set(ENV_VAR, value)
    }

    /// Removes the `KONSOL` variable.
    pub fn no_modules(&mut self) -> &mut Self {
        self.unset(ENV_VAR)
    }

    /// Sets `key` to `value` until the scope ends.
    #[allow(unsafe_code)]
    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.save(key);
        // SAFETY: ENV_LOCK is held, so no other test in this binary touches
        // the environment concurrently.
        unsafe { env::set_var(key, value) };
        self
    }

    /// Removes `key` until the scope ends.
    #[allow(unsafe_code)]
    pub fn unset(&mut self, key: &str) -> &mut Self {
        self.save(key);
        // SAFETY: see `set`.
        unsafe { env::remove_var(key) };
        self
    }

    /// Releases the environment, restoring everything touched so far.
    pub fn restore(self) {
        drop(self);
    }

    fn save(&mut self, key: &str) {
        self.saved.push((key.to_owned(), env::var_os(key)));
    }
}

impl Drop for KonsolEnv {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..).rev() {
            // SAFETY: the lock guard is still held; fields drop after this.
            match previous {
                Some(value) => unsafe { env::set_var(&key, value) },
                None => unsafe { env::remove_var(&key) },
            }
        }
    }
}

/// Logger on the process-wide registry and process environment, writing
/// into `console`.
pub fn global_logger(name: &str, console: &Arc<RecordingConsole>) -> Konsol {
    Konsol::builder(name)
        .console(console.clone())
        .build()
        .expect("valid module name")
}
