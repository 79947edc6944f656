use std::time::Duration;

use serde::Deserialize;

use crate::services::{recency::DEFAULT_CAPACITY, recommendations::DEFAULT_FETCH_LIMIT};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Jikan API base URL
    #[serde(default = "default_jikan_api_url")]
    pub jikan_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum number of items requested per genre
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: u32,

    /// Minimum score an item needs to be returned by the catalog
    #[serde(default = "default_min_score")]
    pub min_score: u32,

    /// How many recently recommended ids are remembered
    #[serde(default = "default_recent_capacity")]
    pub recent_capacity: usize,

    /// Timeout for a single catalog request, in seconds
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,

    /// Origin allowed to call the API from a browser
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_jikan_api_url() -> String {
    "https://api.jikan.moe/v4".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_fetch_limit() -> u32 {
    DEFAULT_FETCH_LIMIT
}

fn default_min_score() -> u32 {
    6
}

fn default_recent_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_upstream_timeout_secs() -> u64 {
    10
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jikan_api_url: default_jikan_api_url(),
            host: default_host(),
            port: default_port(),
            fetch_limit: default_fetch_limit(),
            min_score: default_min_score(),
            recent_capacity: default_recent_capacity(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
            cors_origin: default_cors_origin(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_environment() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.jikan_api_url, "https://api.jikan.moe/v4");
        assert_eq!(config.port, 5000);
        assert_eq!(config.fetch_limit, 10);
        assert_eq!(config.min_score, 6);
        assert_eq!(config.recent_capacity, 10);
        assert_eq!(config.upstream_timeout(), Duration::from_secs(10));
        assert_eq!(config.cors_origin, "http://localhost:3000");
    }

    #[test]
    fn test_default_matches_empty_environment() {
        let from_env: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        let default = Config::default();
        assert_eq!(from_env.bind_address(), default.bind_address());
        assert_eq!(from_env.jikan_api_url, default.jikan_api_url);
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("FETCH_LIMIT".to_string(), "25".to_string()),
            ("JIKAN_API_URL".to_string(), "http://localhost:9000".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.fetch_limit, 25);
        assert_eq!(config.jikan_api_url, "http://localhost:9000");
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_malformed_port_is_rejected() {
        let vars = vec![("PORT".to_string(), "abc".to_string())];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
