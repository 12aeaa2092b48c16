//! Error types for environment validation

use std::fmt;

/// A single problem found while validating a token.
///
/// Both variants only carry the environment variable name; values are never
/// part of an error because they may hold secrets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required environment variable is not set at all.
    #[error("key {key}, not set")]
    KeyNotSet {
        /// Name of the missing environment variable
        key: String,
    },

    /// A required environment variable is set to the empty string.
    #[error("key {key}, value is empty")]
    KeyEmptyValue {
        /// Name of the empty environment variable
        key: String,
    },
}

impl ValidationError {
    /// Name of the offending environment variable
    pub fn key(&self) -> &str {
        match self {
            Self::KeyNotSet { key } | Self::KeyEmptyValue { key } => key,
        }
    }
}

/// Every validation problem from one build, as a single error.
///
/// The message starts with a summary line followed by one line per problem,
/// empty values first:
///
/// ```text
/// Invalid environment, 2 error(s):
/// key API_KEY, value is empty
/// key DATABASE_URL, not set
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid environment, {} error(s):\n{}", .errors.len(), render_lines(.errors))]
pub struct EnvironmentError {
    errors: Vec<ValidationError>,
}

impl EnvironmentError {
    /// Individual errors, in the order they are rendered
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

fn render_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Accumulates validation errors over a whole build instead of stopping at
/// the first one.
///
/// Empty-value and not-set errors are kept apart so that the aggregated
/// message always lists empty values first, each group in the order it was
/// recorded. Nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorCollection {
    empty_value_errors: Vec<ValidationError>,
    not_set_errors: Vec<ValidationError>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a [`ValidationError::KeyNotSet`] for `key` and return it.
    pub fn add_key_not_set(&mut self, key: impl Into<String>) -> ValidationError {
        let error = ValidationError::KeyNotSet { key: key.into() };
        self.not_set_errors.push(error.clone());
        error
    }

    /// Record a [`ValidationError::KeyEmptyValue`] for `key` and return it.
    pub fn add_key_empty_value(&mut self, key: impl Into<String>) -> ValidationError {
        let error = ValidationError::KeyEmptyValue { key: key.into() };
        self.empty_value_errors.push(error.clone());
        error
    }

    pub fn not_set_errors(&self) -> &[ValidationError] {
        &self.not_set_errors
    }

    pub fn empty_value_errors(&self) -> &[ValidationError] {
        &self.empty_value_errors
    }

    pub fn len(&self) -> usize {
        self.empty_value_errors.len() + self.not_set_errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.empty_value_errors.is_empty() && self.not_set_errors.is_empty()
    }

    /// Iterate in rendering order: empty values, then unset keys.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.empty_value_errors
            .iter()
            .chain(self.not_set_errors.iter())
    }

    /// Combine everything recorded so far into one error.
    ///
    /// Returns `None` when nothing was recorded.
    pub fn aggregate_error(&self) -> Option<EnvironmentError> {
        if self.is_empty() {
            return None;
        }
        Some(EnvironmentError {
            errors: self.iter().cloned().collect(),
        })
    }
}

impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.aggregate_error() {
            Some(error) => fmt::Display::fmt(&error, f),
            None => Ok(()),
        }
    }
}

impl IntoIterator for ErrorCollection {
    type Item = ValidationError;
    type IntoIter = std::iter::Chain<
        std::vec::IntoIter<ValidationError>,
        std::vec::IntoIter<ValidationError>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.empty_value_errors
            .into_iter()
            .chain(self.not_set_errors)
    }
}
