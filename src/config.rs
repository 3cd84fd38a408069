//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/hugegraph/config.toml` (XDG) or platform config dir
//! 2. Project config: `.hugegraph.toml`
//! 3. Environment variables: `HUGEGRAPH_*`
//!
//! Every key has a default, so no file is required:
//!
//! ```toml
//! [server]
//! url = "http://localhost:8080"
//! graph = "hugegraph"
//! username = "admin"
//! password = "secret"
//! timeout = 20
//! ```
//!
//! Environment variables split on `_`, e.g. `HUGEGRAPH_SERVER_URL`.

use std::ops::Deref;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Default server address.
pub const DEFAULT_URL: &str = "http://localhost:8080";

/// Default graph name.
pub const DEFAULT_GRAPH: &str = "hugegraph";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Connection settings for the HugeGraph server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the REST API, e.g. `http://localhost:8080`.
    #[serde(default = "default_url")]
    pub url: String,
    /// Graph name used in every `graphs/{graph}/...` path.
    #[serde(default = "default_graph")]
    pub graph: String,
    /// Basic auth user.
    pub username: Option<String>,
    /// Basic auth password.
    pub password: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_graph() -> String {
    DEFAULT_GRAPH.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            graph: default_graph(),
            username: None,
            password: None,
            timeout: default_timeout(),
        }
    }
}

impl ServerConfig {
    /// Settings for `url` and `graph` with everything else defaulted.
    pub fn new(url: &str, graph: &str) -> Self {
        Self {
            url: url.to_string(),
            graph: graph.to_string(),
            ..Self::default()
        }
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// The layered provider stack used by [`Config::load`].
    pub fn figment() -> Figment {
        Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(Self::user_config_path()))
            // Layer 2: Project config
            .merge(Toml::file(".hugegraph.toml"))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("HUGEGRAPH_").split("_"))
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, url: Option<&str>, graph: Option<&str>) -> Self {
        if let Some(url) = url {
            self.server.url = url.to_string();
        }
        if let Some(graph) = graph {
            self.server.graph = graph.to_string();
        }
        self
    }

    /// User config path: ~/.config/hugegraph/config.toml (XDG) or platform config dir.
    fn user_config_path() -> std::path::PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("hugegraph").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        dirs::config_dir()
            .map(|p| p.join("hugegraph").join("config.toml"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_files() {
        Jail::expect_with(|jail| {
            let home = jail.directory().to_path_buf();
            jail.set_env("HOME", home.display());
            let config = Config::load().expect("defaults should load");
            assert_eq!(config.server.url, DEFAULT_URL);
            assert_eq!(config.server.graph, DEFAULT_GRAPH);
            assert_eq!(config.server.timeout(), Duration::from_secs(20));
            assert!(config.server.username.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_project_file_and_env_layers() {
        Jail::expect_with(|jail| {
            let home = jail.directory().to_path_buf();
            jail.set_env("HOME", home.display());
            jail.create_file(
                ".hugegraph.toml",
                r#"
                [server]
                url = "http://graph.internal:8080"
                graph = "social"
                timeout = 5
                "#,
            )?;
            jail.set_env("HUGEGRAPH_SERVER_GRAPH", "fraud");

            let config = Config::load().expect("config should load");
            assert_eq!(config.server.url, "http://graph.internal:8080");
            assert_eq!(config.server.graph, "fraud");
            assert_eq!(config.server.timeout, 5);
            Ok(())
        });
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some("http://other:8081"), None);
        assert_eq!(config.server.url, "http://other:8081");
        assert_eq!(config.server.graph, DEFAULT_GRAPH);
    }
}
