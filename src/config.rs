use crate::api::endpoints::DEFAULT_LOCALE;
use crate::error::AppError;
use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub locale: String,
    pub timeout_secs: u64,
    pub requests_per_second: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: DEFAULT_LOCALE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let locale = lookup("CATALOG_LOCALE")
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or(defaults.locale);

        let timeout_secs = match lookup("CATALOG_TIMEOUT_SECS") {
            Some(raw) => parse_positive("CATALOG_TIMEOUT_SECS", &raw)?,
            None => defaults.timeout_secs,
        };

        let requests_per_second = match lookup("CATALOG_REQUESTS_PER_SECOND") {
            Some(raw) => parse_positive("CATALOG_REQUESTS_PER_SECOND", &raw)? as u32,
            None => defaults.requests_per_second,
        };

        Ok(Config {
            locale,
            timeout_secs,
            requests_per_second,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<u64, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 && value <= u32::MAX as u64 => Ok(value),
        _ => Err(AppError::ConfigError(format!(
            "{} must be a positive integer, got '{}'",
            key, raw
        ))),
    }
}
