//! Tests for layered configuration.

use crate::config::{ConfigError, KgConfig, TraversalLimits};
use serial_test::serial;
use std::io::Write;

#[test]
fn test_defaults() {
    let config = KgConfig::default();
    assert_eq!(config.server.port, 4000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert!(config.server.cors_origins.is_empty());
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.traversal, TraversalLimits { min_depth: 1, max_depth: 5 });
    assert!(!config.seed);
    assert_eq!(config.environment, "development");
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_toml_overrides_only_given_keys() {
    let config = KgConfig::from_toml_str(
        r#"
        seed = true

        [server]
        port = 8080

        [traversal]
        max_depth = 3
        "#,
    )
    .unwrap();

    assert!(config.seed);
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.traversal.min_depth, 1);
    assert_eq!(config.traversal.max_depth, 3);
}

#[test]
fn test_defaults_round_trip_through_toml() {
    let rendered = toml::to_string(&KgConfig::default()).unwrap();
    let parsed = KgConfig::from_toml_str(&rendered).unwrap();
    assert_eq!(parsed, KgConfig::default());
}

#[test]
fn test_rejects_inverted_depth_bounds() {
    let err = KgConfig::from_toml_str("[traversal]\nmin_depth = 4\nmax_depth = 2\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_rejects_wrong_type() {
    let err = KgConfig::from_toml_str("[server]\nport = \"high\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
}

#[test]
fn test_traversal_limits_accepts() {
    let limits = TraversalLimits::default();
    assert!(!limits.accepts(0));
    assert!(limits.accepts(1));
    assert!(limits.accepts(5));
    assert!(!limits.accepts(6));
}

#[test]
#[serial]
fn test_load_missing_file() {
    let err = KgConfig::load(Some(std::path::Path::new("/nonexistent/kgraph.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
#[serial]
fn test_load_file_then_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "environment = \"staging\"\n[server]\nport = 5000").unwrap();

    std::env::set_var("KGRAPH_SERVER__PORT", "6000");
    std::env::set_var("KGRAPH_LOGGING__LEVEL", "debug");
    let result = KgConfig::load(Some(file.path()));
    std::env::remove_var("KGRAPH_SERVER__PORT");
    std::env::remove_var("KGRAPH_LOGGING__LEVEL");

    let config = result.unwrap();
    assert_eq!(config.environment, "staging");
    assert_eq!(config.server.port, 6000);
    assert_eq!(config.logging.level, "debug");
}
