use crate::window::DEFAULT_INTERVAL;
use std::{env, net::SocketAddr, num::NonZeroUsize, path::PathBuf};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;

/// Startup settings, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Log file loaded before the server starts accepting requests.
    pub log_path: Option<PathBuf>,
    pub initial_interval: NonZeroUsize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let log_path = lookup("WATER_LOG_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let initial_interval = match lookup("WATER_LOG_INTERVAL") {
            Some(value) => value.trim().parse().unwrap_or_else(|_| {
                warn!("ignoring invalid WATER_LOG_INTERVAL {value:?}");
                DEFAULT_INTERVAL
            }),
            None => DEFAULT_INTERVAL,
        };

        Self {
            port,
            log_path,
            initial_interval,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = config(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_path, None);
        assert_eq!(config.initial_interval.get(), 7);
    }

    #[test]
    fn reads_all_settings() {
        let config = config(&[
            ("PORT", "9100"),
            ("WATER_LOG_PATH", "/tmp/water.txt"),
            ("WATER_LOG_INTERVAL", "14"),
        ]);
        assert_eq!(config.addr().port(), 9100);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/water.txt")));
        assert_eq!(config.initial_interval.get(), 14);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config(&[
            ("PORT", "http"),
            ("WATER_LOG_PATH", "  "),
            ("WATER_LOG_INTERVAL", "0"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_path, None);
        assert_eq!(config.initial_interval.get(), 7);
    }
}
