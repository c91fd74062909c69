use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://192.168.50.6:8000/api/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

const BASE_ENV: &str = "LOGBOOK_API_BASE";
const TIMEOUT_ENV: &str = "LOGBOOK_API_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("LOGBOOK_API_BASE must be an absolute http(s) URL, got {0:?}")]
    InvalidBase(String),
    #[error("LOGBOOK_API_TIMEOUT_SECS must be a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

/// Where the logs resource lives and how long a single call may take.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Absolute http(s) base, always ending in `/`.
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base: &str, timeout: Duration) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base(base)?,
            timeout,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves the configuration from an arbitrary key lookup. Blank values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base = non_blank(lookup(BASE_ENV)).unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout = match non_blank(lookup(TIMEOUT_ENV)) {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidTimeout(raw))?,
            None => DEFAULT_TIMEOUT,
        };

        Self::new(&base, timeout)
    }

    /// Resolves a path such as `logs/` or `logs/7/` beneath the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

fn normalize_base(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw).map_err(|_| ConfigError::InvalidBase(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBase(raw.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn defaults_point_at_api_with_fifteen_second_timeout() {
        let config = ApiConfig::from_lookup(|_| None).expect("defaults resolve");

        assert_eq!(config.base_url.as_str(), "http://192.168.50.6:8000/api/");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn endpoints_stay_under_the_api_prefix() {
        let config = ApiConfig::from_lookup(|_| None).expect("defaults resolve");

        assert_eq!(
            config.endpoint("logs/").unwrap().as_str(),
            "http://192.168.50.6:8000/api/logs/"
        );
        assert_eq!(
            config.endpoint("/logs/42/").unwrap().as_str(),
            "http://192.168.50.6:8000/api/logs/42/"
        );
    }

    #[test]
    fn environment_overrides_are_applied() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("LOGBOOK_API_BASE", " https://fleet.example.org/api/v2 "),
            ("LOGBOOK_API_TIMEOUT_SECS", "5"),
        ]))
        .expect("overrides resolve");

        assert_eq!(config.base_url.as_str(), "https://fleet.example.org/api/v2/");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn blank_overrides_fall_back_to_defaults() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("LOGBOOK_API_BASE", "   "),
            ("LOGBOOK_API_TIMEOUT_SECS", ""),
        ]))
        .expect("blank values are ignored");

        assert_eq!(config, ApiConfig::from_lookup(|_| None).expect("defaults resolve"));
    }

    #[test]
    fn rejects_non_http_base_and_zero_timeout() {
        let err = ApiConfig::from_lookup(lookup_from(&[("LOGBOOK_API_BASE", "ftp://host/api")]))
            .expect_err("ftp is not accepted");
        assert_eq!(err, ConfigError::InvalidBase("ftp://host/api".into()));

        let err = ApiConfig::from_lookup(lookup_from(&[("LOGBOOK_API_TIMEOUT_SECS", "0")]))
            .expect_err("zero timeout is rejected");
        assert_eq!(err, ConfigError::InvalidTimeout("0".into()));
    }

    #[test]
    fn default_base_gains_trailing_slash() {
        let config = ApiConfig::new("http://192.168.50.6:8000/api", DEFAULT_TIMEOUT)
            .expect("unslashed base is accepted");

        assert_eq!(config.base_url.as_str(), DEFAULT_API_BASE);
        assert_eq!(
            config.endpoint("logs/7/").expect("joins").as_str(),
            "http://192.168.50.6:8000/api/logs/7/"
        );
    }
}
