//! crates/konsol/src/module_name.rs
//! Validated module names used as registry keys.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::error::KonsolError;

/// A non-empty, case-sensitive module name.
///
/// The name is stored behind an [`Arc`] so forwarders bound to the same
/// logger share one allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleName(Arc<str>);

impl ModuleName {
    /// Validates `name` on behalf of `operation`.
    pub(crate) fn validate(name: &str, operation: &'static str) -> Result<Self, KonsolError> {
        if name.is_empty() {
            return Err(KonsolError::empty_module_name(operation));
        }
        Ok(Self(Arc::from(name)))
    }

    /// Creates a module name, rejecting the empty string.
    ///
    /// ```
    /// use konsol::ModuleName;
    ///
    /// assert_eq!(ModuleName::new("mymodule").unwrap().as_str(), "mymodule");
    /// assert!(ModuleName::new("").is_err());
    /// ```
    pub fn new(name: &str) -> Result<Self, KonsolError> {
        Self::validate(name, "new")
    }

    /// Borrows the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ModuleName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ModuleName {
    type Error = KonsolError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<String> for ModuleName {
    type Error = KonsolError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(&name)
    }
}

/// Hosts that receive names from loosely-typed sources (configuration maps,
/// FFI) can pass `None` to get the "missing" flavour of the error.
impl TryFrom<Option<&str>> for ModuleName {
    type Error = KonsolError;

    fn try_from(name: Option<&str>) -> Result<Self, Self::Error> {
        name.map_or_else(
            || Err(KonsolError::missing_module_name("new")),
            Self::new,
        )
    }
}
