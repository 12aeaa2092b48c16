//! Startup validation for environment variable configuration
//!
//! `envtoken` lets an application declare the environment variables it depends
//! on, check them all in one pass, and report **every** missing or empty
//! variable at once instead of failing on the first.
//!
//! # Features
//!
//! - **Aggregated errors**: one report listing every problem, empty values first
//! - **Required and optional tokens**: optional tokens fall back to a default
//! - **Flags**: `true`, `yes` and `1` read as true
//! - **Injectable source**: validate against the process environment, a map, or a closure
//!
//! # Example
//!
//! ```rust
//! use envtoken::{Environment, Token};
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("DATABASE_URL", "postgres://localhost/db");
//! #     std::env::remove_var("LISTEN_ADDR");
//! let tokens = vec![
//!     Token::required("DATABASE_URL"),
//!     Token::optional("LISTEN_ADDR", "127.0.0.1:8080"),
//!     Token::optional("DEBUG", ""),
//! ];
//!
//! let (env, errors) = Environment::build(tokens);
//! if let Some(errors) = errors {
//!     anyhow::bail!("{errors}");
//! }
//!
//! assert_eq!(env.get_value("DATABASE_URL"), Some("postgres://localhost/db"));
//! assert_eq!(env.get_value("LISTEN_ADDR"), Some("127.0.0.1:8080"));
//! # Ok(())
//! # }
//! ```
//!
//! # Validation rules
//!
//! | Token | Variable unset | Variable empty | Variable set |
//! |-------|----------------|----------------|--------------|
//! | required | `KeyNotSet`, token dropped | `KeyEmptyValue`, token dropped | stored |
//! | optional | stored, default applies | stored, default applies | stored |
//!
//! # Fail fast
//!
//! [`Environment::try_build`] turns the collected errors into a single
//! [`EnvironmentError`], which works with `?`:
//!
//! ```rust
//! # use envtoken::{Environment, Token};
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("API_TOKEN", "secret");
//! let env = Environment::try_build([Token::required("API_TOKEN")])?;
//! assert!(env.contains_key("API_TOKEN"));
//! # Ok(())
//! # }
//! ```

mod boolean;
mod environment;
mod error;
mod source;
mod token;

pub use boolean::{bool_from_env, bool_from_source, parse_boolean};
pub use environment::Environment;
pub use error::{EnvironmentError, ErrorCollection, ValidationError};
pub use source::{EnvSource, MapEnv, ProcessEnv};
pub use token::Token;
