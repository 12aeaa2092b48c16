//! Integration tests against the process environment

use envtoken::{bool_from_env, Environment, Token, ValidationError};
use serial_test::serial;
use std::env;

fn remove_tokens(tokens: &[Token]) {
    for token in tokens {
        env::remove_var(token.key());
    }
}

#[test]
#[serial]
fn test_required_not_set() {
    let tokens = vec![
        Token::new("_TEST_NOT_SET_1", "", true),
        Token::new("_TEST_NOT_SET_2", "", true),
    ];
    remove_tokens(&tokens);

    let (_, errors) = Environment::build(tokens);
    let errors = errors.expect("errors expected");
    assert_eq!(errors.not_set_errors().len(), 2);
    assert_eq!(errors.empty_value_errors().len(), 0);
}

#[test]
#[serial]
fn test_required_empty_value() {
    let tokens = vec![
        Token::new("_TEST_EMPTY_1", "", true),
        Token::new("_TEST_EMPTY_2", "", true),
    ];
    for token in &tokens {
        env::set_var(token.key(), "");
    }

    let (env, errors) = Environment::build(tokens.clone());
    let errors = errors.expect("errors expected");
    assert_eq!(errors.empty_value_errors().len(), 2);
    assert_eq!(errors.not_set_errors().len(), 0);
    assert!(env.is_empty());

    remove_tokens(&tokens);
}

#[test]
#[serial]
fn test_required_set() {
    let tokens = vec![
        Token::new("_TEST_SET_1", "", true),
        Token::new("_TEST_SET_2", "", true),
    ];
    for token in &tokens {
        env::set_var(token.key(), token.key());
    }

    let (env, errors) = Environment::build(tokens.clone());
    assert!(errors.is_none(), "unexpected errors: {errors:?}");
    for token in &tokens {
        assert_eq!(env.get_value(token.key()), Some(token.key()));
    }

    remove_tokens(&tokens);
}

#[test]
#[serial]
fn test_optional_defaults() {
    let tokens = vec![
        Token::new("_TEST_DEFAULT_1", "1", false),
        Token::new("_TEST_DEFAULT_2", "2", false),
        Token::new("_TEST_DEFAULT_3", "4", false),
    ];
    remove_tokens(&tokens);

    let (env, errors) = Environment::build(tokens.clone());
    assert!(errors.is_none());
    for token in &tokens {
        assert_eq!(env.get_value(token.key()), token.default_value());
    }

    env::set_var("_TEST_DEFAULT_1", "override");
    let (env, errors) = Environment::build(tokens.clone());
    assert!(errors.is_none());
    assert_eq!(env.get_value("_TEST_DEFAULT_1"), Some("override"));
    assert_eq!(env.get_value("_TEST_DEFAULT_2"), Some("2"));

    remove_tokens(&tokens);
}

#[test]
#[serial]
fn test_missing_then_set() {
    let tokens = vec![
        Token::new("_TEST_KEY1", "default", false),
        Token::new("_TEST_KEY2", "", true),
    ];
    remove_tokens(&tokens);

    let (env, errors) = Environment::build(tokens.clone());
    let errors = errors.expect("errors expected");
    assert_eq!(
        errors.not_set_errors(),
        &[ValidationError::KeyNotSet {
            key: "_TEST_KEY2".to_string()
        }]
    );
    assert_eq!(
        errors.to_string(),
        "Invalid environment, 1 error(s):\nkey _TEST_KEY2, not set"
    );
    assert_eq!(env.get_value("_TEST_KEY1"), Some("default"));
    assert!(env.get("_TEST_KEY2").is_none());

    env::set_var("_TEST_KEY2", "value2");
    let (env, errors) = Environment::build(tokens.clone());
    assert!(errors.is_none());
    assert_eq!(env.get_value("_TEST_KEY2"), Some("value2"));

    remove_tokens(&tokens);
}

#[test]
#[serial]
fn test_try_build_with_anyhow() {
    fn load() -> anyhow::Result<Environment> {
        Ok(Environment::try_build([Token::required("_TEST_TRY_BUILD")])?)
    }

    env::remove_var("_TEST_TRY_BUILD");
    let err = load().unwrap_err();
    assert!(err.to_string().contains("key _TEST_TRY_BUILD, not set"));

    env::set_var("_TEST_TRY_BUILD", "ok");
    let env = load().unwrap();
    assert_eq!(env.get_value("_TEST_TRY_BUILD"), Some("ok"));

    env::remove_var("_TEST_TRY_BUILD");
}

#[test]
#[serial]
fn test_bool_from_env_false() {
    let key = "_BOOL_FALSE";

    env::remove_var(key);
    assert!(!bool_from_env(key));

    for value in ["", "0", "no", "false", "2"] {
        env::set_var(key, value);
        assert!(!bool_from_env(key), "{key}={value:?} should be false");
    }

    env::remove_var(key);
}

#[test]
#[serial]
fn test_bool_from_env_true() {
    let key = "_BOOL_TRUE";

    for value in ["true", "TRUE", "yes", "YES", "1"] {
        env::set_var(key, value);
        assert!(bool_from_env(key), "{key}={value:?} should be true");
    }

    env::remove_var(key);
}

#[test]
#[serial]
fn test_tokens_declared_as_json() {
    let tokens: Vec<Token> = serde_json::from_str(
        r#"[
            {"key": "_TEST_JSON_REQUIRED", "required": true},
            {"key": "_TEST_JSON_FLAG", "default": "yes"}
        ]"#,
    )
    .unwrap();
    env::set_var("_TEST_JSON_REQUIRED", "present");
    env::remove_var("_TEST_JSON_FLAG");

    let (env, errors) = Environment::build(tokens.clone());
    assert!(errors.is_none());
    assert_eq!(env.get_value("_TEST_JSON_REQUIRED"), Some("present"));
    assert!(env.get_boolean("_TEST_JSON_FLAG"));

    remove_tokens(&tokens);
}
