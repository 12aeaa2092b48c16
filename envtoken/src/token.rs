//! Token declarations

use serde::{Deserialize, Serialize};

/// A single environment variable the application depends on.
///
/// A token starts out unresolved. [`Environment`](crate::Environment) fills in
/// the value while validating, so callers normally only construct tokens and
/// read them back through the registry.
///
/// Tokens can also be declared as data:
///
/// ```rust
/// # use envtoken::Token;
/// # fn main() -> anyhow::Result<()> {
/// let tokens: Vec<Token> = serde_json::from_str(
///     r#"[{"key": "DATABASE_URL", "required": true}, {"key": "PORT", "default": "8080"}]"#,
/// )?;
/// assert!(tokens[0].is_required());
/// assert_eq!(tokens[1].default_value(), Some("8080"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    key: String,
    #[serde(default)]
    required: bool,
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    default_value: Option<String>,
    #[serde(skip)]
    value: Option<String>,
}

impl Token {
    /// Create an unresolved token.
    ///
    /// The default is kept as given; an empty default behaves like no default
    /// when the value is read.
    pub fn new(key: impl Into<String>, default_value: impl Into<String>, required: bool) -> Self {
        Self {
            key: key.into(),
            required,
            default_value: Some(default_value.into()),
            value: None,
        }
    }

    /// Create a required token without a default.
    pub fn required(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            required: true,
            default_value: None,
            value: None,
        }
    }

    /// Create an optional token that falls back to `default_value`.
    pub fn optional(key: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self::new(key, default_value, false)
    }

    /// Environment variable name
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Raw value read from the environment, if the variable was present.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Overwrite the resolved value.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}
