//! Runtime configuration: built-in defaults, then `.env`/environment, then flags.

use std::time::Duration;

use dogceo_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

const ENV_BASE_URL: &str = "DOGCEO_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "DOGCEO_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match parse_timeout_secs(&raw) {
                Some(timeout) => config.timeout = timeout,
                None => tracing::warn!(
                    "Ignoring {}={:?}, using {}s",
                    ENV_TIMEOUT_SECS,
                    raw,
                    config.timeout.as_secs()
                ),
            }
        }
        config
    }

    /// Applies command-line flags on top of the environment.
    pub fn with_overrides(mut self, base_url: Option<&str>, timeout_secs: Option<u64>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url.to_string();
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }
}

fn parse_timeout_secs(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
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
    fn defaults_without_env() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "https://dog.ceo");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn env_overrides_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DOGCEO_BASE_URL", "http://localhost:9000"),
            ("DOGCEO_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_timeout_falls_back() {
        for raw in ["soon", "0", "-3", ""] {
            let config = Config::from_lookup(lookup(&[("DOGCEO_TIMEOUT_SECS", raw)]));
            assert_eq!(config.timeout, DEFAULT_TIMEOUT, "input {:?}", raw);
        }
    }

    #[test]
    fn flags_override_env() {
        let config = Config::from_lookup(lookup(&[("DOGCEO_TIMEOUT_SECS", "5")]))
            .with_overrides(Some("http://127.0.0.1:1"), Some(12));
        assert_eq!(config.base_url, "http://127.0.0.1:1");
        assert_eq!(config.timeout, Duration::from_secs(12));
    }
}
