//! crates/konsol/src/env.rs
//! Environment lookup used by registry seeding.

use std::env;
use std::ffi::OsString;

/// Source of environment variable values.
///
/// [`ProcessEnv`] reads the real process environment. Any
/// `Fn(&str) -> Option<String>` closure is also a source, which lets tests
/// seed a registry without touching global state.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
///
/// Values that are not valid UTF-8 are decoded lossily, so the valid names
/// in a partly garbled list still take effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var_os(key).map(decode)
    }
}

fn decode(value: OsString) -> String {
    value
        .into_string()
        .unwrap_or_else(|raw| raw.to_string_lossy().into_owned())
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, key: &str) -> Option<String> {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_source() {
        let source = |key: &str| (key == "KONSOL").then(|| "a b".to_owned());
        assert_eq!(source.var("KONSOL").as_deref(), Some("a b"));
        assert_eq!(source.var("OTHER"), None);
    }

    #[test]
    fn process_env_missing_variable() {
        assert_eq!(ProcessEnv.var("KONSOL_TEST_DEFINITELY_UNSET_7f3a"), None);
    }

    #[test]
    fn utf8_values_pass_through() {
        assert_eq!(decode(OsString::from("mymodule other")), "mymodule other");
    }

    #[cfg(unix)]
    #[test]
    fn invalid_utf8_keeps_valid_names() {
        use std::os::unix::ffi::OsStringExt;

        let value = decode(OsString::from_vec(b"good \xFF bad".to_vec()));
        assert_eq!(value, "good \u{FFFD} bad");

        let registry = crate::VerbosityRegistry::new();
        assert!(registry.seed_once(&|_: &str| Some(value.clone())));
        assert!(registry.is_enabled("good"));
        assert!(registry.is_enabled("bad"));
    }
}
