// File: src/config.rs
// Purpose: Configuration parsing from mtable.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE: &str = "mtable.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dev: DevConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Page title shown in the browser tab and heading
    #[serde(default = "default_title")]
    pub title: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Development configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevConfig {
    /// Inject the browser live-reload script
    #[serde(default = "default_false")]
    pub live_reload: bool,
}

fn default_title() -> String {
    "Multiplication Table".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for DevConfig {
    fn default() -> Self {
        Self { live_reload: false }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./mtable.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }

    /// Apply `MTABLE_HOST`, `MTABLE_PORT` and `LIVE_RELOAD` overrides.
    /// Unparseable values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("MTABLE_HOST").filter(|h| !h.trim().is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup("MTABLE_PORT").and_then(|p| p.trim().parse().ok()) {
            self.server.port = port;
        }
        if let Some(live) = lookup("LIVE_RELOAD").and_then(|v| v.trim().parse().ok()) {
            self.dev.live_reload = live;
        }
        self
    }

    /// Apply overrides from the process environment
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// `host:port` for binding the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.project.title, "Multiplication Table");
        assert!(!config.dev.live_reload);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [server]
            port = 8080

            [dev]
            live_reload = true
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.dev.live_reload);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load("definitely/not/here/mtable.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("mtable-config-{}.toml", std::process::id()));
        fs::write(&path, "[project]\ntitle = \"Times\"\n").unwrap();
        let config = Config::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.project.title, "Times");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("mtable-bad-{}.toml", std::process::id()));
        fs::write(&path, "[server]\nport = \"not a port\"\n").unwrap();
        let result = Config::load(&path);
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let env = HashMap::from([
            ("MTABLE_HOST", "0.0.0.0"),
            ("MTABLE_PORT", "9000"),
            ("LIVE_RELOAD", "yes"),
        ]);
        let config = Config::default().with_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        // "yes" is not a bool, so the file value stays
        assert!(!config.dev.live_reload);
    }
}
