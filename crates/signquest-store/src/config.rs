//! Game configuration and store factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use signquest_core::catalog::{AssetCatalog, DEFAULT_ASSETS};
use signquest_core::controller::ControllerConfig;
use signquest_core::model::Session;
use signquest_core::traits::{FixedSession, ProfileStore};

use crate::http::HttpProfileStore;
use crate::offline::OfflineStore;

/// Where player profiles live.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreConfig {
    Http {
        base_url: String,
        #[serde(default)]
        timeout_secs: Option<u64>,
    },
    #[default]
    Offline,
}

/// Top-level signquest configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignquestConfig {
    /// Email of the signed-in player; unset means anonymous play.
    #[serde(default)]
    pub identity: Option<String>,
    /// Asset identifiers to quiz on.
    #[serde(default = "default_catalog")]
    pub catalog: Vec<String>,
    /// How long feedback stays on screen, in milliseconds.
    #[serde(default = "default_feedback_ms")]
    pub feedback_ms: u64,
    /// Profile store backend.
    #[serde(default)]
    pub store: StoreConfig,
}

fn default_catalog() -> Vec<String> {
    DEFAULT_ASSETS.iter().map(|s| s.to_string()).collect()
}
fn default_feedback_ms() -> u64 {
    3000
}

impl Default for SignquestConfig {
    fn default() -> Self {
        Self {
            identity: None,
            catalog: default_catalog(),
            feedback_ms: default_feedback_ms(),
            store: StoreConfig::default(),
        }
    }
}

impl SignquestConfig {
    pub fn asset_catalog(&self) -> AssetCatalog {
        AssetCatalog::new(self.catalog.iter().cloned())
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            feedback_window: Duration::from_millis(self.feedback_ms),
        }
    }

    /// Session provider for the configured identity.
    pub fn session_provider(&self) -> FixedSession {
        FixedSession(
            self.identity
                .as_deref()
                .filter(|email| !email.trim().is_empty())
                .map(Session::new),
        )
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_store_config(config: &StoreConfig) -> StoreConfig {
    match config {
        StoreConfig::Http {
            base_url,
            timeout_secs,
        } => StoreConfig::Http {
            base_url: resolve_env_vars(base_url),
            timeout_secs: *timeout_secs,
        },
        StoreConfig::Offline => StoreConfig::Offline,
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `signquest.toml` in the current directory
/// 2. `~/.config/signquest/config.toml`
///
/// Environment variable overrides: `SIGNQUEST_EMAIL`, `SIGNQUEST_STORE_URL`.
pub fn load_config() -> Result<SignquestConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<SignquestConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("signquest.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<SignquestConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SignquestConfig::default(),
    };

    // Apply env var overrides
    if let Ok(email) = std::env::var("SIGNQUEST_EMAIL") {
        config.identity = Some(email);
    }
    if let Ok(base_url) = std::env::var("SIGNQUEST_STORE_URL") {
        let timeout_secs = match &config.store {
            StoreConfig::Http { timeout_secs, .. } => *timeout_secs,
            StoreConfig::Offline => None,
        };
        config.store = StoreConfig::Http {
            base_url,
            timeout_secs,
        };
    }

    config.identity = config.identity.as_deref().map(resolve_env_vars);
    config.store = resolve_store_config(&config.store);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("signquest"))
}

/// Create a store instance from its configuration.
pub fn create_store(config: &StoreConfig) -> Result<Arc<dyn ProfileStore>> {
    match config {
        StoreConfig::Http {
            base_url,
            timeout_secs,
        } => {
            anyhow::ensure!(!base_url.is_empty(), "store base_url is empty");
            let store = HttpProfileStore::new(base_url, *timeout_secs)
                .context("failed to build HTTP client")?;
            Ok(Arc::new(store))
        }
        StoreConfig::Offline => Ok(Arc::new(OfflineStore)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_SIGNQUEST_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_SIGNQUEST_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_SIGNQUEST_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("no vars here"), "no vars here");
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_SIGNQUEST_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = SignquestConfig::default();
        assert_eq!(config.catalog.len(), 9);
        assert_eq!(config.feedback_ms, 3000);
        assert_eq!(config.store, StoreConfig::Offline);
        assert!(config.session_provider().0.is_none());
        assert_eq!(
            config.controller_config().feedback_window,
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
identity = "sam@example.com"
catalog = ["Hello.png", "Yes.png"]
feedback_ms = 1500

[store]
type = "http"
base_url = "http://localhost:3000"
timeout_secs = 5
"#;
        let config: SignquestConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.asset_catalog().len(), 2);
        assert_eq!(config.feedback_ms, 1500);
        assert_eq!(
            config.store,
            StoreConfig::Http {
                base_url: "http://localhost:3000".into(),
                timeout_secs: Some(5),
            }
        );
        let session = config.session_provider().0.unwrap();
        assert_eq!(session.identity.as_str(), "sam@example.com");
    }

    #[test]
    fn blank_identity_is_anonymous() {
        let config: SignquestConfig = toml::from_str("identity = \"  \"").unwrap();
        assert!(config.session_provider().0.is_none());
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signquest.toml");
        std::fs::write(&path, "catalog = []\n\n[store]\ntype = \"offline\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert!(config.asset_catalog().is_empty());
    }

    #[test]
    fn missing_explicit_path_is_error() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[store]\ntype = \"carrier-pigeon\"\n").unwrap();

        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }

    #[test]
    fn create_store_by_kind() {
        let store = create_store(&StoreConfig::Offline).unwrap();
        assert_eq!(store.name(), "offline");

        let store = create_store(&StoreConfig::Http {
            base_url: "http://localhost:3000".into(),
            timeout_secs: None,
        })
        .unwrap();
        assert_eq!(store.name(), "http");

        assert!(create_store(&StoreConfig::Http {
            base_url: String::new(),
            timeout_secs: None,
        })
        .is_err());
    }
}
