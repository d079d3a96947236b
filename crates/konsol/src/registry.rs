//! crates/konsol/src/registry.rs
//! Process-wide set of enabled module names.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::config::{KonsolConfig, parse_module_list};
use crate::env::EnvSource;
use crate::error::KonsolError;
use crate::module_name::ModuleName;

#[derive(Debug, Default)]
struct RegistryState {
    enabled: HashSet<String>,
    seeded: bool,
}

/// Tracks which module names currently forward output.
///
/// Membership is the only state kept per name. A registry starts empty and
/// is seeded at most once from the environment, on the first logger
/// construction against it; afterwards only [`enable`](Self::enable) and
/// [`disable`](Self::disable) change it.
///
/// The process-wide instance lives behind [`VerbosityRegistry::global`].
/// Tests and embedders can build private registries and inject them through
/// [`Konsol::builder`](crate::Konsol::builder).
#[derive(Debug)]
pub struct VerbosityRegistry {
    state: Mutex<RegistryState>,
    config: KonsolConfig,
}

impl Default for VerbosityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VerbosityRegistry {
    /// Creates an empty registry that seeds from `KONSOL`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(KonsolConfig::default())
    }

    /// Creates an empty registry with explicit seeding configuration.
    #[must_use]
    pub fn with_config(config: KonsolConfig) -> Self {
        Self {
            state: Mutex::new(RegistryState::default()),
            config,
        }
    }

    /// The registry shared by every logger built with [`Konsol::new`](crate::Konsol::new).
    pub fn global() -> &'static Arc<Self> {
        static GLOBAL: OnceLock<Arc<VerbosityRegistry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(Self::new()))
    }

    /// Seeding configuration of this registry.
    #[must_use]
    pub const fn config(&self) -> &KonsolConfig {
        &self.config
    }

    // The set is updated with single insert/remove calls, so a panic while
    // the lock is held cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enables output for `module_name`. Enabling twice is a no-op.
    pub fn enable(&self, module_name: &str) -> Result<(), KonsolError> {
        let name = ModuleName::validate(module_name, "enable")?;
        let inserted = self.lock().enabled.insert(name.as_str().to_owned());
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "konsol::registry", module = %name, changed = inserted, "enable");
        #[cfg(not(feature = "tracing"))]
        let _ = inserted;
        Ok(())
    }

    /// Disables output for `module_name`. Disabling an unknown name is a no-op.
    pub fn disable(&self, module_name: &str) -> Result<(), KonsolError> {
        let name = ModuleName::validate(module_name, "disable")?;
        let removed = self.lock().enabled.remove(name.as_str());
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "konsol::registry", module = %name, changed = removed, "disable");
        #[cfg(not(feature = "tracing"))]
        let _ = removed;
        Ok(())
    }

    /// Whether `module_name` currently forwards output.
    #[must_use]
    pub fn is_enabled(&self, module_name: &str) -> bool {
        self.lock().enabled.contains(module_name)
    }

    /// Adds every name listed in `raw` (a `KONSOL`-style value).
    ///
    /// This does not touch the one-shot flag; it is the parsing half of
    /// [`seed_once`](Self::seed_once) and can be called directly by hosts
    /// that read their module list from somewhere other than the environment.
    pub fn seed_from_environment(&self, raw: &str) {
        let added = Self::insert_all(&mut self.lock(), raw);
        Self::trace_seeded(raw, added);
    }

    fn insert_all(state: &mut RegistryState, raw: &str) -> usize {
        parse_module_list(raw)
            .filter(|name| state.enabled.insert((*name).to_owned()))
            .count()
    }

    // Emitted with the state lock released: a subscriber may query the
    // registry from inside the event.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn trace_seeded(raw: &str, added: usize) {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "konsol::registry", value = raw, added, "seeded module list");
    }

    /// Runs the one-shot environment seeding if it has not happened yet.
    ///
    /// The first call marks the registry as seeded whether or not the
    /// variable is set, so a value that appears later is never read. Returns
    /// `true` when this call performed the seeding.
    pub fn seed_once(&self, env: &dyn EnvSource) -> bool {
        let seeded = {
            let mut state = self.lock();
            if state.seeded {
                return false;
            }
            state.seeded = true;
            if self.config.seed_from_env {
                env.var(&self.config.env_var).map(|raw| {
                    let added = Self::insert_all(&mut state, &raw);
                    (raw, added)
                })
            } else {
                None
            }
        };
        if let Some((raw, added)) = seeded {
            Self::trace_seeded(&raw, added);
        }
        true
    }

    /// Whether the one-shot seeding has already run.
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        self.lock().seeded
    }

    /// Sorted snapshot of the enabled names.
    #[must_use]
    pub fn enabled_modules(&self) -> Vec<String> {
        let mut names: Vec<_> = self.lock().enabled.iter().cloned().collect();
        names.sort_unstable();
        names
    }
}
