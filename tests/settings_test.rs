//! Settings loading from files and the environment

use std::env;
use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use InfluenceHub::config::{SessionBackendKind, Settings};

const ENV_KEYS: &[&str] = &[
    "INFLUENCEHUB__API__BASE_URL",
    "INFLUENCEHUB__API__TIMEOUT_SECONDS",
    "INFLUENCEHUB__SESSION__BACKEND",
    "INFLUENCEHUB__LOGGING__LEVEL",
];

fn clear_env() {
    for key in ENV_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_file_or_env() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let stem = dir.path().join("missing");

    let settings = Settings::load_from(stem.to_str().unwrap()).unwrap();
    assert_eq!(settings.api.base_url, "http://192.168.6.29:5000");
    assert_eq!(settings.api.timeout_seconds, None);
    assert_eq!(settings.session.backend, SessionBackendKind::File);
    assert_eq!(settings.logging.level, "info");
    assert!(settings.account.is_none());
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn test_file_then_env_override() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("influencehub.toml");
    fs::write(
        &file,
        r#"
[api]
base_url = "http://localhost:5000"

[session]
backend = "memory"

[account]
email = "brand@example.com"
password = "secret"
"#,
    )
    .unwrap();
    let stem = dir.path().join("influencehub");

    env::set_var("INFLUENCEHUB__API__TIMEOUT_SECONDS", "15");
    env::set_var("INFLUENCEHUB__LOGGING__LEVEL", "debug");
    let settings = Settings::load_from(stem.to_str().unwrap());
    clear_env();

    let settings = settings.unwrap();
    assert_eq!(settings.api.base_url, "http://localhost:5000");
    assert_eq!(settings.api.timeout_seconds, Some(15));
    assert_eq!(settings.session.backend, SessionBackendKind::Memory);
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.account.as_ref().map(|a| a.email.as_str()), Some("brand@example.com"));
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn test_env_selects_redis_without_url_fails_validation() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let stem = dir.path().join("missing");

    env::set_var("INFLUENCEHUB__SESSION__BACKEND", "redis");
    let settings = Settings::load_from(stem.to_str().unwrap());
    clear_env();

    let settings = settings.unwrap();
    assert_eq!(settings.session.backend, SessionBackendKind::Redis);
    assert!(settings.validate().is_err());
}
