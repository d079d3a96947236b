//! crates/konsol/src/error.rs
//! Error type for module-name validation.

use thiserror::Error;

/// Errors reported by logger construction and the process-wide
/// enable/disable operations.
///
/// Forwarding calls and registry queries never fail; validation of the
/// module name is the only fallible step.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum KonsolError {
    /// The module name was missing or empty.
    #[error("invalid argument to {operation}: {reason}")]
    InvalidArgument {
        /// Operation that rejected the argument (`new`, `enable`, `disable`).
        operation: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },
}

impl KonsolError {
    pub(crate) const fn missing_module_name(operation: &'static str) -> Self {
        Self::InvalidArgument {
            operation,
            reason: "module name is missing",
        }
    }

    pub(crate) const fn empty_module_name(operation: &'static str) -> Self {
        Self::InvalidArgument {
            operation,
            reason: "module name must not be empty",
        }
    }

    /// Returns `true` for [`KonsolError::InvalidArgument`].
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
