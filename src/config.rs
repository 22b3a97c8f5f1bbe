// src/config.rs
use std::{env, net::SocketAddr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: SocketAddr,
    site_title: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://folio.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".into()
}

fn default_max_connections() -> u32 {
    16
}

fn default_site_title() -> String {
    "Folio".into()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);

        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let listen_addr = raw_addr.parse::<SocketAddr>().map_err(|err| {
            ConfigError::Invalid(format!("LISTEN_ADDR '{raw_addr}' is not a socket address: {err}"))
        })?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(value) if value > 0 => value,
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
                    )));
                }
            },
            None => default_max_connections(),
        };

        let site_title = lookup("SITE_TITLE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(default_site_title);

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            site_title,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Heading of the article list page.
    pub fn site_title(&self) -> &str {
        &self.site_title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_url(), "sqlite://folio.db?mode=rwc");
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.database_max_connections(), 16);
        assert_eq!(config.site_title(), "Folio");
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("LISTEN_ADDR", "0.0.0.0:8081"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("SITE_TITLE", "Notebook"),
        ]))
        .unwrap();
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.listen_addr().port(), 8081);
        assert_eq!(config.database_max_connections(), 4);
        assert_eq!(config.site_title(), "Notebook");
    }

    #[test]
    fn invalid_listen_addr_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("LISTEN_ADDR", "localhost")])).unwrap_err();
        assert!(err.to_string().contains("LISTEN_ADDR"));
    }

    #[test]
    fn zero_connections_is_rejected() {
        assert!(
            AppConfig::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "0")])).is_err()
        );
        assert!(
            AppConfig::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "many")])).is_err()
        );
    }

    #[test]
    fn blank_site_title_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[("SITE_TITLE", "   ")])).unwrap();
        assert_eq!(config.site_title(), "Folio");
    }
}
