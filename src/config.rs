//! Runtime settings read from environment variables

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server: ServerSettings,
    pub fetch: FetchSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    /// Upper bound on a whole upstream request, body included
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: concat!("wiki-tables/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source. Unset variables and
    /// unparsable numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_defaults = ServerSettings::default();
        let fetch_defaults = FetchSettings::default();

        let server = ServerSettings {
            host: lookup("SERVER_HOST").unwrap_or(server_defaults.host),
            port: parse_or("SERVER_PORT", &lookup, server_defaults.port),
        };

        let timeout_secs = parse_or(
            "FETCH_TIMEOUT_SECS",
            &lookup,
            fetch_defaults.timeout.as_secs(),
        );
        let fetch = FetchSettings {
            timeout: Duration::from_secs(timeout_secs),
            user_agent: lookup("SCRAPER_USER_AGENT").unwrap_or(fetch_defaults.user_agent),
        };

        Self { server, fetch }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidAddress {
                host: self.host.clone(),
                port: self.port,
                reason: e.to_string(),
            }
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %raw, default = %default, "Invalid setting, using default");
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings(&[]);
        assert_eq!(settings.server.port, 8081);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.fetch.timeout, Duration::from_secs(30));
        assert!(settings.fetch.user_agent.starts_with("wiki-tables/"));
    }

    #[test]
    fn test_overrides() {
        let settings = settings(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "9000"),
            ("FETCH_TIMEOUT_SECS", "5"),
            ("SCRAPER_USER_AGENT", "test-agent"),
        ]);
        assert_eq!(
            settings.server.socket_addr().unwrap(),
            "127.0.0.1:9000".parse().unwrap()
        );
        assert_eq!(settings.fetch.timeout, Duration::from_secs(5));
        assert_eq!(settings.fetch.user_agent, "test-agent");
    }

    #[test]
    fn test_invalid_number_falls_back() {
        let settings = settings(&[("SERVER_PORT", "eighty"), ("FETCH_TIMEOUT_SECS", "-1")]);
        assert_eq!(settings.server.port, DEFAULT_PORT);
        assert_eq!(settings.fetch.timeout.as_secs(), DEFAULT_FETCH_TIMEOUT_SECS);
    }

    #[test]
    fn test_invalid_host() {
        let settings = settings(&[("SERVER_HOST", "not-an-ip")]);
        assert!(matches!(
            settings.server.socket_addr(),
            Err(ConfigError::InvalidAddress { .. })
        ));
    }
}
