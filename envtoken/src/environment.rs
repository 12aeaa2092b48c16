//! The token registry and its validation pass

use std::collections::HashMap;

use tracing::debug;

use crate::boolean::parse_boolean;
use crate::error::{EnvironmentError, ErrorCollection};
use crate::source::{EnvSource, ProcessEnv};
use crate::token::Token;

/// Resolved tokens, keyed by environment variable name.
///
/// Built once from a list of [`Token`]s. Tokens that fail validation are left
/// out, so a registry returned together with errors only holds the tokens
/// that passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    tokens: HashMap<String, Token>,
}

impl Environment {
    /// Validate `tokens` against the process environment.
    ///
    /// See [`Environment::build_from`].
    pub fn build<I>(tokens: I) -> (Self, Option<ErrorCollection>)
    where
        I: IntoIterator<Item = Token>,
    {
        Self::build_from(tokens, &ProcessEnv)
    }

    /// Validate `tokens` against `source`.
    ///
    /// Every token is visited in order. A required token whose variable is
    /// unset or empty is recorded as an error and skipped; everything else is
    /// resolved and stored. The registry is returned even when validation
    /// failed, alongside the collected errors.
    pub fn build_from<I, S>(tokens: I, source: &S) -> (Self, Option<ErrorCollection>)
    where
        I: IntoIterator<Item = Token>,
        S: EnvSource + ?Sized,
    {
        let mut env = Self::default();
        let mut errors = ErrorCollection::new();

        for mut token in tokens {
            let value = source.lookup(token.key());
            if token.is_required() {
                match value.as_deref() {
                    None => {
                        debug!(
                            key = token.key(),
                            reason = "not set",
                            "required token failed validation"
                        );
                        errors.add_key_not_set(token.key());
                        continue;
                    }
                    Some("") => {
                        debug!(
                            key = token.key(),
                            reason = "empty value",
                            "required token failed validation"
                        );
                        errors.add_key_empty_value(token.key());
                        continue;
                    }
                    Some(_) => {}
                }
            }

            debug!(key = token.key(), present = value.is_some(), "resolved token");
            token.set_value(value);
            env.add(token);
        }

        debug!(resolved = env.len(), errors = errors.len(), "environment built");

        if errors.is_empty() {
            (env, None)
        } else {
            (env, Some(errors))
        }
    }

    /// Validate `tokens` against the process environment, failing on any
    /// problem.
    ///
    /// ```rust
    /// # use envtoken::{Environment, Token};
    /// std::env::remove_var("ENVTOKEN_DOC_MISSING");
    /// let err = Environment::try_build([Token::required("ENVTOKEN_DOC_MISSING")]).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid environment, 1 error(s):\nkey ENVTOKEN_DOC_MISSING, not set"
    /// );
    /// ```
    pub fn try_build<I>(tokens: I) -> Result<Self, EnvironmentError>
    where
        I: IntoIterator<Item = Token>,
    {
        Self::try_build_from(tokens, &ProcessEnv)
    }

    /// Same as [`Environment::try_build`], against any [`EnvSource`].
    pub fn try_build_from<I, S>(tokens: I, source: &S) -> Result<Self, EnvironmentError>
    where
        I: IntoIterator<Item = Token>,
        S: EnvSource + ?Sized,
    {
        match Self::build_from(tokens, source) {
            (env, None) => Ok(env),
            (env, Some(errors)) => match errors.aggregate_error() {
                Some(error) => Err(error),
                None => Ok(env),
            },
        }
    }

    /// Store `token`, replacing any token with the same key.
    pub fn add(&mut self, token: Token) {
        self.tokens.insert(token.key().to_string(), token);
    }

    pub fn get(&self, key: &str) -> Option<&Token> {
        self.tokens.get(key)
    }

    /// Effective value for `key`.
    ///
    /// The environment value wins when non-empty, then the default when
    /// non-empty. Unknown keys yield `None`.
    pub fn get_value(&self, key: &str) -> Option<&str> {
        let token = self.get(key)?;
        token
            .value()
            .filter(|v| !v.is_empty())
            .or_else(|| token.default_value().filter(|v| !v.is_empty()))
    }

    /// Effective value for `key` read as a flag; `false` when there is none.
    pub fn get_boolean(&self, key: &str) -> bool {
        self.get_value(key).is_some_and(parse_boolean)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.tokens.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
