//! Layered configuration.
//!
//! Values are resolved in order, later layers winning:
//! 1. built-in defaults ([`KgConfig::default`])
//! 2. an optional TOML file
//! 3. environment variables prefixed with `KGRAPH_`, using `__` between
//!    section and key (e.g. `KGRAPH_SERVER__PORT=8080`, `KGRAPH_SEED=true`)
//!
//! ```toml
//! seed = true
//! environment = "production"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 4000
//! cors_origins = ["http://localhost:5173"]
//!
//! [logging]
//! level = "debug"
//!
//! [traversal]
//! min_depth = 1
//! max_depth = 5
//! ```

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration file was requested but does not exist.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// A provider failed or a value has the wrong type.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    /// Values parsed but are inconsistent.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Allowed CORS origins. Empty means permissive.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            cors_origins: Vec::new(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Bounds accepted for the `depth` of a traversal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalLimits {
    /// Smallest accepted depth.
    pub min_depth: usize,
    /// Largest accepted depth.
    pub max_depth: usize,
}

impl Default for TraversalLimits {
    fn default() -> Self {
        Self {
            min_depth: 1,
            max_depth: 5,
        }
    }
}

impl TraversalLimits {
    /// Returns true if `depth` lies within the bounds.
    #[must_use]
    pub fn accepts(&self, depth: usize) -> bool {
        (self.min_depth..=self.max_depth).contains(&depth)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KgConfig {
    /// Load the demo graph at startup.
    pub seed: bool,
    /// Deployment environment name, reported by the health endpoint.
    pub environment: String,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Traversal request bounds.
    pub traversal: TraversalLimits,
}

impl Default for KgConfig {
    fn default() -> Self {
        Self {
            seed: false,
            environment: "development".to_string(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            traversal: TraversalLimits::default(),
        }
    }
}

impl KgConfig {
    /// Prefix of environment variables read by [`KgConfig::load`].
    pub const ENV_PREFIX: &'static str = "KGRAPH_";

    /// Builds the provider chain: defaults, optional TOML file, environment.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(Self::ENV_PREFIX).split("__"))
    }

    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is given but missing, if a value cannot be
    /// parsed, or if validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
        }
        let config: Self = Self::figment(path).extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document layered over the defaults (no environment).
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml))
            .extract()
            .map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid(
                "server.port must be greater than 0".to_string(),
            ));
        }
        if self.traversal.min_depth > self.traversal.max_depth {
            return Err(ConfigError::Invalid(format!(
                "traversal.min_depth ({}) exceeds traversal.max_depth ({})",
                self.traversal.min_depth, self.traversal.max_depth
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "logging.level cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
