//! Where environment values come from

use std::collections::HashMap;
use std::env;

/// Presence-aware lookup of environment variables.
///
/// `None` means the variable is not set at all; `Some("")` means it is set
/// but empty. The registry relies on that distinction.
///
/// Any `Fn(&str) -> Option<String>` is a source, which keeps one-off test
/// doubles short:
///
/// ```rust
/// # use envtoken::{EnvSource, Environment, Token};
/// let source = |key: &str| (key == "MODE").then(|| "fast".to_string());
/// let (env, errors) = Environment::build_from([Token::required("MODE")], &source);
/// assert!(errors.is_none());
/// assert_eq!(env.get_value("MODE"), Some("fast"));
/// ```
pub trait EnvSource {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    #[inline]
    fn lookup(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values still count as set.
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// In-memory environment, mostly for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }
}

impl EnvSource for MapEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self(key)
    }
}
