//! Configuration for shopkeep applications.
//!
//! TOML file + environment loading, persistence back to disk, and
//! translation into `shopkeep_core::CatalogConfig`. Embedding
//! applications call [`load_config`] at startup and hand the result to
//! the data layer.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shopkeep_core::CatalogConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Catalog endpoint settings.
    #[serde(default)]
    pub api: ApiSection,

    /// Search behavior settings.
    #[serde(default)]
    pub search: SearchSection,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiSection {
    /// Collection endpoint base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SearchSection {
    /// Debounce settle interval in milliseconds.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000/api/v1/products".into()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_settle_ms() -> u64 {
    300
}

impl Config {
    /// Translate into the data layer's runtime configuration.
    pub fn to_catalog_config(&self) -> Result<CatalogConfig, ConfigError> {
        let base_url = self
            .api
            .base_url
            .parse()
            .map_err(|_| ConfigError::Validation {
                field: "api.base_url".into(),
                reason: format!("invalid URL: {}", self.api.base_url),
            })?;

        Ok(CatalogConfig {
            base_url,
            timeout: Duration::from_secs(self.api.timeout_secs),
            search_settle: Duration::from_millis(self.search.settle_ms),
        })
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "shopkeep", "shopkeep").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("shopkeep");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full `Config` from file + environment.
///
/// Environment variables use the `SHOPKEEP_` prefix with `__` between
/// section and key, e.g. `SHOPKEEP_API__BASE_URL`.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file path, still merging the environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SHOPKEEP_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning defaults if loading fails for any reason.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

/// Serialize config to TOML at an explicit path, creating parent
/// directories as needed.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_translate_to_catalog_config() {
        let config = Config::default();
        let catalog = config.to_catalog_config().unwrap();
        assert_eq!(
            catalog.base_url.as_str(),
            "http://localhost:3000/api/v1/products"
        );
        assert_eq!(catalog.timeout, Duration::from_secs(30));
        assert_eq!(catalog.search_settle, Duration::from_millis(300));
    }

    #[test]
    fn invalid_base_url_is_a_validation_error() {
        let mut config = Config::default();
        config.api.base_url = "not a url".into();

        match config.to_catalog_config() {
            Err(ConfigError::Validation { field, .. }) => assert_eq!(field, "api.base_url"),
            other => panic!("expected validation error, got: {other:?}"),
        }
    }

    #[test]
    fn file_values_override_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [api]
                base_url = "https://shop.example.com/api/v1/products"
                timeout_secs = 10

                [search]
                settle_ms = 150
                "#,
            )?;

            let config = load_config_from(Path::new("config.toml")).unwrap();
            assert_eq!(config.api.base_url, "https://shop.example.com/api/v1/products");
            assert_eq!(config.api.timeout_secs, 10);
            assert_eq!(config.search.settle_ms, 150);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [api]
                timeout_secs = 10
                "#,
            )?;
            jail.set_env("SHOPKEEP_API__TIMEOUT_SECS", "5");
            jail.set_env("SHOPKEEP_SEARCH__SETTLE_MS", "75");

            let config = load_config_from(Path::new("config.toml")).unwrap();
            assert_eq!(config.api.timeout_secs, 5);
            assert_eq!(config.search.settle_ms, 75);
            Ok(())
        });
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.search.settle_ms = 450;
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.search.settle_ms, 450);
    }
}
