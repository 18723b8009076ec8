//! Client-side settings.
//!
//! Reads/writes `~/.credit-admin/config.toml`. Flags and environment
//! variables override the file for a single run.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use credit_client::{ApiClient, NoAuth, StaticToken, TokenSource};

fn default_page_size() -> u32 {
    credit_admin::DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

/// Client configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClientConfig {
    /// API base URL (e.g. "http://localhost:8080").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,

    /// Bearer token sent with every request.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,

    /// Rows per page for paginated views.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            token: String::new(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Default config file path: ~/.credit-admin/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply per-run overrides (flags or environment).
    pub fn with_overrides(mut self, server: Option<String>, token: Option<String>) -> Self {
        if let Some(server) = server.filter(|s| !s.trim().is_empty()) {
            self.server = server;
        }
        if let Some(token) = token {
            self.token = token;
        }
        self
    }

    /// Build the API client these settings describe.
    pub fn client(&self) -> anyhow::Result<ApiClient> {
        if self.server.trim().is_empty() {
            anyhow::bail!(
                "No server URL set. Run `credit-admin config set --server <url>` or pass --server."
            );
        }
        let tokens: Arc<dyn TokenSource> = if self.token.is_empty() {
            Arc::new(NoAuth)
        } else {
            Arc::new(StaticToken::new(self.token.clone()))
        };
        let client = ApiClient::new(self.server.trim(), tokens)
            .with_timeout(Duration::from_secs(self.timeout_secs.max(1)))?;
        Ok(client)
    }
}

/// Return the config directory (~/.credit-admin).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".credit-admin")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.server.is_empty());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = ClientConfig {
            server: "http://localhost:8080".to_string(),
            page_size: 25,
            ..ClientConfig::default()
        };
        config.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("page-size = 25"));
        assert!(!content.contains("token"));
        assert_eq!(ClientConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: ClientConfig = toml::from_str(r#"server = "https://credit.example.com""#).unwrap();
        assert_eq!(config.server, "https://credit.example.com");
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig {
            server: "http://file".to_string(),
            token: "file-token".to_string(),
            ..ClientConfig::default()
        };
        let merged = config
            .clone()
            .with_overrides(Some("http://flag".to_string()), None);
        assert_eq!(merged.server, "http://flag");
        assert_eq!(merged.token, "file-token");

        let blank = config.with_overrides(Some("  ".to_string()), Some(String::new()));
        assert_eq!(blank.server, "http://file");
        assert!(blank.token.is_empty());
    }

    #[test]
    fn test_client_requires_server() {
        let err = ClientConfig::default().client().unwrap_err();
        assert!(err.to_string().contains("No server URL set"));
        let ok = ClientConfig {
            server: "http://localhost:8080/".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(ok.client().unwrap().base_url(), "http://localhost:8080");
    }
}
