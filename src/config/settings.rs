//! Runtime settings read from the process environment.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./test.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_STATIC_DIR: &str = ".";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Connection settings for the SQLite store.
#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Log every SQL statement at info level.
    pub echo: bool,
}

impl DatabaseSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
            echo: false,
        }
    }

    /// Private in-memory database; gone once the store is closed.
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL)
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub bind_addr: SocketAddr,
    /// Directory served for paths no API route matches.
    pub static_dir: PathBuf,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseSettings::default(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Settings {
    /// Read settings from env. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseSettings {
            url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?),
            echo: parse_flag(&lookup, "DATABASE_ECHO")?,
        };
        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "BIND_ADDR", value: raw })?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "BIND_ADDR", value: DEFAULT_BIND_ADDR.into() })?,
        };
        Ok(Self {
            database,
            bind_addr,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(s.database.max_connections, 5);
        assert!(!s.database.echo);
        assert_eq!(s.bind_addr.port(), 8000);
        assert_eq!(s.static_dir, PathBuf::from("."));
        assert_eq!(s.max_body_bytes, 1024 * 1024);
    }

    #[test]
    fn overrides_are_applied() {
        let s = settings(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("DATABASE_ECHO", "TRUE"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("STATIC_DIR", "public"),
        ])
        .unwrap();
        assert!(s.database.is_in_memory());
        assert_eq!(s.database.max_connections, 2);
        assert!(s.database.echo);
        assert_eq!(s.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(s.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = settings(&[("BIND_ADDR", "nowhere")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));

        let err = settings(&[("DATABASE_ECHO", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_ECHO", .. }));

        let err = settings(&[("DATABASE_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_MAX_CONNECTIONS", .. }));
    }
}
