//! crates/konsol/src/config.rs
//! Seeding configuration and the `KONSOL` list parser.

/// Environment variable read by the one-shot seeding.
pub const ENV_VAR: &str = "KONSOL";

/// How a registry seeds itself on first logger construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KonsolConfig {
    /// Name of the environment variable holding the module list.
    pub env_var: String,
    /// Whether seeding consults the environment at all.
    pub seed_from_env: bool,
}

impl Default for KonsolConfig {
    fn default() -> Self {
        Self {
            env_var: ENV_VAR.to_owned(),
            seed_from_env: true,
        }
    }
}

impl KonsolConfig {
    /// Configuration that reads `name` instead of `KONSOL`.
    pub fn with_env_var(name: impl Into<String>) -> Self {
        Self {
            env_var: name.into(),
            ..Self::default()
        }
    }

    /// Configuration that never reads the environment.
    #[must_use]
    pub fn without_env() -> Self {
        Self {
            seed_from_env: false,
            ..Self::default()
        }
    }
}

/// Splits a module list on runs of whitespace and/or commas.
///
/// Empty tokens are dropped, so leading, trailing and repeated separators
/// are harmless.
///
/// ```
/// let names: Vec<_> = konsol::parse_module_list(" a , b,,c\td ").collect();
/// assert_eq!(names, ["a", "b", "c", "d"]);
/// ```
pub fn parse_module_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}
