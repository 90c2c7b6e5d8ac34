//! Unit tests for configuration resolution
//!
//! Note: Uses serial_test to prevent ENV variable race conditions. Tests
//! that manipulate PORT / MEALKEEP_DB / MEALKEEP_CONFIG are marked with
//! #[serial] so they run sequentially, not in parallel.

use mealkeep_common::config::{ServerConfig, TomlConfig, DEFAULT_PORT};
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;

fn clear_env() {
    env::remove_var("PORT");
    env::remove_var("MEALKEEP_DB");
    env::remove_var("MEALKEEP_CONFIG");
}

#[test]
#[serial]
fn test_resolve_with_no_overrides_uses_defaults() {
    clear_env();
    // Point at a config path that does not exist
    env::set_var("MEALKEEP_CONFIG", "/nonexistent/mealkeep.toml");

    let config = ServerConfig::resolve().expect("resolution should succeed");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.database_path, PathBuf::from("mealkeep.db"));

    clear_env();
}

#[test]
#[serial]
fn test_env_port_overrides_default() {
    clear_env();
    env::set_var("MEALKEEP_CONFIG", "/nonexistent/mealkeep.toml");
    env::set_var("PORT", "8080");

    let config = ServerConfig::resolve().expect("resolution should succeed");
    assert_eq!(config.port, 8080);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_port_is_rejected() {
    clear_env();
    env::set_var("MEALKEEP_CONFIG", "/nonexistent/mealkeep.toml");
    env::set_var("PORT", "not-a-port");

    let result = ServerConfig::resolve();
    assert!(result.is_err(), "Invalid PORT should fail resolution");

    clear_env();
}

#[test]
#[serial]
fn test_toml_file_supplies_port_and_db_path() {
    clear_env();

    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("mealkeep.toml");
    let mut file = std::fs::File::create(&config_path).expect("create config");
    writeln!(file, "port = 6001").unwrap();
    writeln!(file, "database_path = \"/tmp/alternate.db\"").unwrap();

    env::set_var("MEALKEEP_CONFIG", &config_path);

    let config = ServerConfig::resolve().expect("resolution should succeed");
    assert_eq!(config.port, 6001);
    assert_eq!(config.database_path, PathBuf::from("/tmp/alternate.db"));

    clear_env();
}

#[test]
#[serial]
fn test_env_wins_over_toml() {
    clear_env();

    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("mealkeep.toml");
    std::fs::write(&config_path, "port = 6001\n").expect("write config");

    env::set_var("MEALKEEP_CONFIG", &config_path);
    env::set_var("PORT", "7001");
    env::set_var("MEALKEEP_DB", "/tmp/env.db");

    let config = ServerConfig::resolve().expect("resolution should succeed");
    assert_eq!(config.port, 7001);
    assert_eq!(config.database_path, PathBuf::from("/tmp/env.db"));

    clear_env();
}

#[test]
fn test_malformed_toml_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("mealkeep.toml");
    std::fs::write(&config_path, "port = \"not a number").expect("write config");

    let result = TomlConfig::load(&config_path);
    assert!(result.is_err(), "Malformed config file should be rejected");
}
