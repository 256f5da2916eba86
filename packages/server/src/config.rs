use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub channel_secret: String,
    pub channel_token: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            channel_secret: lookup("CHANNEL_SECRET")
                .filter(|v| !v.trim().is_empty())
                .context("CHANNEL_SECRET must be set")?,
            channel_token: lookup("CHANNEL_TOKEN")
                .filter(|v| !v.trim().is_empty())
                .context("CHANNEL_TOKEN must be set")?,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_lookup(lookup(&[
            ("CHANNEL_SECRET", "s3cret"),
            ("CHANNEL_TOKEN", "t0ken"),
            ("PORT", "3000"),
        ]))
        .unwrap();

        assert_eq!(config.channel_secret, "s3cret");
        assert_eq!(config.channel_token, "t0ken");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_port_defaults_to_8080() {
        let config = Config::from_lookup(lookup(&[
            ("CHANNEL_SECRET", "s3cret"),
            ("CHANNEL_TOKEN", "t0ken"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_missing_credentials_fail() {
        let err = Config::from_lookup(lookup(&[("CHANNEL_TOKEN", "t0ken")])).unwrap_err();
        assert!(err.to_string().contains("CHANNEL_SECRET"));

        let err = Config::from_lookup(lookup(&[
            ("CHANNEL_SECRET", "s3cret"),
            ("CHANNEL_TOKEN", ""),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("CHANNEL_TOKEN"));
    }

    #[test]
    fn test_invalid_port_fails() {
        let err = Config::from_lookup(lookup(&[
            ("CHANNEL_SECRET", "s3cret"),
            ("CHANNEL_TOKEN", "t0ken"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
