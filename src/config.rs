//! Web server settings, read from the environment.
//!
//! | Variable                  | Default   |
//! |---------------------------|-----------|
//! | `HOST`                    | `0.0.0.0` |
//! | `PORT`                    | `8080`    |
//! | `TOURNAMENT_DATA_DIR`     | unset (in-memory stores) |
//! | `INACTIVITY_TIMEOUT_SECS` | `43200` (12h) |
//!
//! Values that fail to parse fall back to the default.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// When set, each tournament is persisted to `<data_dir>/<id>.json`.
    pub data_dir: Option<PathBuf>,
    /// Tournaments untouched for this long are dropped from memory.
    pub inactivity_timeout: Duration,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_inactivity_timeout() -> Duration {
    Duration::from_secs(12 * 3600)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_dir: None,
            inactivity_timeout: default_inactivity_timeout(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(default_host);
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let data_dir = lookup("TOURNAMENT_DATA_DIR")
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from);
        let inactivity_timeout = lookup("INACTIVITY_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(default_inactivity_timeout);
        Self {
            host,
            port,
            data_dir,
            inactivity_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("TOURNAMENT_DATA_DIR", "/var/lib/swiss"),
            ("INACTIVITY_TIMEOUT_SECS", "60"),
        ]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/swiss")));
        assert_eq!(config.inactivity_timeout, Duration::from_secs(60));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[("PORT", "http"), ("INACTIVITY_TIMEOUT_SECS", "-1"), ("TOURNAMENT_DATA_DIR", " ")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.inactivity_timeout, Duration::from_secs(12 * 3600));
        assert_eq!(config.data_dir, None);
    }
}
