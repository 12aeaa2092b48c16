//! Boolean flags

use crate::source::{EnvSource, ProcessEnv};

/// Interpret a raw environment value as a flag.
///
/// `true`, `yes` (any case) and `1` are true after trimming; anything else,
/// including the empty string, is false.
///
/// ```rust
/// use envtoken::parse_boolean;
///
/// assert!(parse_boolean("Yes"));
/// assert!(parse_boolean(" 1 "));
/// assert!(!parse_boolean("on"));
/// ```
pub fn parse_boolean(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
}

/// Read a flag straight from the process environment.
///
/// An unset variable is read as `""`, so it is false.
pub fn bool_from_env(key: &str) -> bool {
    bool_from_source(&ProcessEnv, key)
}

/// Same as [`bool_from_env`], against any [`EnvSource`].
pub fn bool_from_source<S: EnvSource + ?Sized>(source: &S, key: &str) -> bool {
    parse_boolean(&source.lookup(key).unwrap_or_default())
}
