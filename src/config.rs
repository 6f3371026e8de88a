use serde::{Deserialize, Serialize};

use crate::tmdb::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    #[serde(default, alias = "apikey")]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url", alias = "baseurl")]
    pub base_url: String,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_port() -> String {
    "5000".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }

    /// Read the config file if one is given, then apply environment overrides.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Environment wins over the file for the upstream credential and endpoint.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get("TMDB_API_KEY") {
            self.tmdb.api_key = Some(key);
        }
        if let Some(url) = get("TMDB_BASE_URL") {
            self.tmdb.base_url = url;
        }
        if let Some(port) = get("PORT") {
            self.listen.port = port;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.listen.port, "5000");
        assert_eq!(config.tmdb.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.tmdb.max_attempts, 3);
        assert_eq!(config.tmdb.retry_delay_ms, 1000);
        assert_eq!(config.tmdb.timeout_ms, 10_000);
        assert!(config.tmdb.api_key.is_none());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
listen:
  address: 127.0.0.1
  port: "8080"
tmdb:
  apikey: secret
  max_attempts: 5
  retry_delay_ms: 250
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.listen.address.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.listen.port, "8080");
        assert_eq!(config.tmdb.api_key.as_deref(), Some("secret"));
        assert_eq!(config.tmdb.max_attempts, 5);
        assert_eq!(config.tmdb.retry_delay_ms, 250);
        assert_eq!(config.tmdb.timeout_ms, 10_000);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("TMDB_API_KEY", "from-env"),
            ("TMDB_BASE_URL", ""),
            ("PORT", "9000"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.tmdb.base_url = "http://localhost:1234".to_string();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.tmdb.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.tmdb.base_url, "http://localhost:1234");
        assert_eq!(config.listen.port, "9000");
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/popular-movies.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(..)));
    }
}
