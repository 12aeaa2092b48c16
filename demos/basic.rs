//! Basic usage example
//!
//! Run with `RUST_LOG=envtoken=debug` to see each token being validated.

use envtoken::{Environment, Token};
use tracing_subscriber::EnvFilter;

fn tokens() -> Vec<Token> {
    vec![
        // Optional: falls back to "default" when KEY1 is unset or empty
        Token::new("KEY1", "default", false),
        // Required: KEY2 must be set to a non-empty value
        Token::new("KEY2", "", true),
    ]
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    std::env::remove_var("KEY2");

    // First pass: KEY2 is missing, so every problem is reported together
    let (_, errors) = Environment::build(tokens());
    if let Some(errors) = errors {
        println!("{errors}");
    }

    std::env::set_var("KEY2", "value2");

    // Second pass: fail fast if anything is still wrong
    let env = Environment::try_build(tokens())?;

    println!("KEY1={}", env.get_value("KEY1").unwrap_or_default());
    println!("KEY2={}", env.get_value("KEY2").unwrap_or_default());

    Ok(())
}
