//! crates/konsol/src/logger.rs
//! Named loggers and their detachable forwarding methods.

use std::fmt;
use std::sync::Arc;

use crate::console::{Console, default_console};
use crate::env::{EnvSource, ProcessEnv};
use crate::error::KonsolError;
use crate::method::Method;
use crate::module_name::ModuleName;
use crate::registry::VerbosityRegistry;

/// Module name plus the registry that decides whether it is enabled.
#[derive(Clone)]
struct Gate {
    module: ModuleName,
    registry: Arc<VerbosityRegistry>,
}

impl Gate {
    fn is_open(&self) -> bool {
        self.registry.is_enabled(self.module.as_str())
    }
}

/// One forwarding method of a [`Konsol`], detached from the logger.
///
/// A forwarder owns everything it needs, so it keeps working after the
/// logger that produced it is dropped. The registry is consulted on every
/// call.
///
/// ```
/// use std::sync::Arc;
/// use konsol::{Konsol, Method, RecordingConsole, VerbosityRegistry};
///
/// let console = Arc::new(RecordingConsole::new());
/// let registry = Arc::new(VerbosityRegistry::new());
/// let warn = Konsol::builder("mymodule")
///     .registry(Arc::clone(&registry))
///     .console(console.clone())
///     .build()
///     .unwrap()
///     .forwarder(Method::Warn)
///     .into_fn();
///
/// registry.enable("mymodule").unwrap();
/// warn(format_args!("disk almost full"));
/// assert_eq!(console.count(Method::Warn), 1);
/// ```
#[derive(Clone)]
pub struct Forwarder {
    method: Method,
    gate: Gate,
    console: Arc<dyn Console>,
}

impl Forwarder {
    /// Forwards `args` to the console if the module is enabled right now.
    pub fn call(&self, args: fmt::Arguments<'_>) {
        if self.gate.is_open() {
            self.method.dispatch(&*self.console, self.gate.module.as_str(), args);
        }
    }

    /// The console method this forwarder targets.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Module name bound into this forwarder.
    #[must_use]
    pub const fn module_name(&self) -> &ModuleName {
        &self.gate.module
    }

    /// Turns the forwarder into a plain closure.
    pub fn into_fn(self) -> impl Fn(fmt::Arguments<'_>) + Send + Sync + 'static {
        move |args: fmt::Arguments<'_>| self.call(args)
    }
}

impl fmt::Debug for Forwarder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forwarder")
            .field("method", &self.method)
            .field("module", &self.gate.module)
            .finish_non_exhaustive()
    }
}

/// A logger bound to one module name.
///
/// Every forwarding method checks the registry at call time, so a logger
/// built before [`Konsol::enable`] starts forwarding as soon as its module
/// is enabled and stops again after [`Konsol::disable`]. Output is off by
/// default.
///
/// Enabling and disabling are process-wide operations; a logger cannot
/// change its own state.
///
/// ```
/// use konsol::{Konsol, konsol_info};
///
/// let log = Konsol::new("mymodule").unwrap();
/// konsol_info!(log, "suppressed unless KONSOL lists mymodule");
///
/// Konsol::enable("mymodule").unwrap();
/// konsol_info!(log, "visible");
/// Konsol::disable("mymodule").unwrap();
/// ```
#[derive(Clone)]
pub struct Konsol {
    module: ModuleName,
    forwarders: [Forwarder; 8],
}

impl Konsol {
    /// Creates a logger for `module_name` against the process-wide registry
    /// and the standard console.
    ///
    /// The first logger created in the process seeds the registry from the
    /// `KONSOL` environment variable. Later changes to the variable are not
    /// observed.
    pub fn new(module_name: &str) -> Result<Self, KonsolError> {
        Self::builder(module_name).build()
    }

    /// Starts a builder for loggers with an injected registry, console or
    /// environment.
    pub fn builder(module_name: impl Into<String>) -> KonsolBuilder {
        KonsolBuilder {
            module_name: module_name.into(),
            registry: None,
            console: None,
            env: None,
        }
    }

    /// Enables output for `module_name` in the process-wide registry.
    pub fn enable(module_name: &str) -> Result<(), KonsolError> {
        VerbosityRegistry::global().enable(module_name)
    }

    /// Disables output for `module_name` in the process-wide registry.
    pub fn disable(module_name: &str) -> Result<(), KonsolError> {
        VerbosityRegistry::global().disable(module_name)
    }

    /// The module name this logger was created with.
    #[must_use]
    pub const fn module_name(&self) -> &ModuleName {
        &self.module
    }

    /// Whether this logger currently forwards output.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.forwarders[0].gate.is_open()
    }

    /// Detached forwarder for `method`.
    #[must_use]
    pub fn forwarder(&self, method: Method) -> Forwarder {
        self.forwarders[method as usize].clone()
    }

    /// All eight forwarders, in [`Method::ALL`] order.
    pub fn forwarders(&self) -> impl Iterator<Item = &Forwarder> {
        self.forwarders.iter()
    }

    fn forward(&self, method: Method, args: fmt::Arguments<'_>) {
        self.forwarders[method as usize].call(args);
    }

    /// Forwards to `console.log`.
    pub fn log(&self, args: fmt::Arguments<'_>) {
        self.forward(Method::Log, args);
    }

    /// Forwards to `console.info`.
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.forward(Method::Info, args);
    }

    /// Forwards to `console.warn`.
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.forward(Method::Warn, args);
    }

    /// Forwards to `console.error`.
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.forward(Method::Error, args);
    }

    /// Forwards to `console.trace`.
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.forward(Method::Trace, args);
    }

    /// Forwards to `console.dir`.
    pub fn dir(&self, args: fmt::Arguments<'_>) {
        self.forward(Method::Dir, args);
    }

    /// Forwards a pretty `Debug` rendering of `value` to `console.dir`.
    pub fn dir_value(&self, value: &dyn fmt::Debug) {
        self.forward(Method::Dir, format_args!("{value:#?}"));
    }

    /// Forwards to `console.time`.
    pub fn time(&self, label: fmt::Arguments<'_>) {
        self.forward(Method::Time, label);
    }

    /// Forwards to `console.timeEnd`.
    pub fn time_end(&self, label: fmt::Arguments<'_>) {
        self.forward(Method::TimeEnd, label);
    }
}

impl fmt::Debug for Konsol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Konsol")
            .field("module", &self.module)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// Builder returned by [`Konsol::builder`].
#[must_use]
pub struct KonsolBuilder {
    module_name: String,
    registry: Option<Arc<VerbosityRegistry>>,
    console: Option<Arc<dyn Console>>,
    env: Option<Box<dyn EnvSource>>,
}

impl fmt::Debug for KonsolBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KonsolBuilder")
            .field("module_name", &self.module_name)
            .field("registry", &self.registry)
            .field("custom_console", &self.console.is_some())
            .field("custom_env", &self.env.is_some())
            .finish()
    }
}

impl KonsolBuilder {
    /// Uses `registry` instead of the process-wide one.
    pub fn registry(mut self, registry: Arc<VerbosityRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Forwards to `console` instead of the standard console.
    pub fn console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = Some(console);
        self
    }

    /// Reads the seeding variable from `env` instead of the process
    /// environment.
    pub fn env<E>(mut self, env: E) -> Self
    where
        E: EnvSource + 'static,
    {
        self.env = Some(Box::new(env));
        self
    }

    /// Validates the module name, runs the registry's one-shot seeding and
    /// binds the forwarders.
    pub fn build(self) -> Result<Konsol, KonsolError> {
        let module = ModuleName::validate(&self.module_name, "new")?;
        let registry = self
            .registry
            .unwrap_or_else(|| Arc::clone(VerbosityRegistry::global()));
        let console = self.console.unwrap_or_else(default_console);

        match self.env {
            Some(env) => registry.seed_once(&*env),
            None => registry.seed_once(&ProcessEnv),
        };

        let gate = Gate { module, registry };
        let forwarders = Method::ALL.map(|method| Forwarder {
            method,
            gate: gate.clone(),
            console: Arc::clone(&console),
        });

        Ok(Konsol {
            module: gate.module,
            forwarders,
        })
    }
}
