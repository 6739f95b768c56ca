// src/config.rs
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings, read from `HOUSE_PRICE_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub model_path: String,
    pub geocoder_url: String,
    pub user_agent: String,
    pub geocode_timeout: Duration,
    pub cache_ttl_secs: i64,
    pub session_idle_secs: i64,
    pub log_level: String,
}

impl AppConfig {
    /// Load from the process environment, after merging a `.env` file if
    /// one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = parse_var(&lookup, "HOUSE_PRICE_GEOCODE_TIMEOUT_SECS", 10)?;

        let config = Self {
            addr: parse_var(&lookup, "HOUSE_PRICE_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?,
            max_workers: parse_var(&lookup, "HOUSE_PRICE_MAX_WORKERS", 8)?,
            model_path: lookup("HOUSE_PRICE_MODEL_PATH").unwrap_or_else(|| "model.json".into()),
            geocoder_url: lookup("HOUSE_PRICE_GEOCODER_URL")
                .unwrap_or_else(|| "https://nominatim.openstreetmap.org".into()),
            user_agent: lookup("HOUSE_PRICE_USER_AGENT").unwrap_or_else(|| "house_price_app".into()),
            geocode_timeout: Duration::from_secs(timeout_secs),
            cache_ttl_secs: parse_var(&lookup, "HOUSE_PRICE_CACHE_TTL_SECS", 3600)?,
            session_idle_secs: parse_var(&lookup, "HOUSE_PRICE_SESSION_IDLE_SECS", 86_400)?,
            log_level: lookup("HOUSE_PRICE_LOG").unwrap_or_else(|| "info".into()),
        };

        positive("HOUSE_PRICE_MAX_WORKERS", config.max_workers as i64)?;
        positive("HOUSE_PRICE_GEOCODE_TIMEOUT_SECS", timeout_secs as i64)?;
        positive("HOUSE_PRICE_CACHE_TTL_SECS", config.cache_ttl_secs)?;
        positive("HOUSE_PRICE_SESSION_IDLE_SECS", config.session_idle_secs)?;

        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: value.clone(),
            reason: e.to_string(),
        }),
    }
}

fn positive(var: &'static str, value: i64) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "must be greater than 0".into(),
        })
    }
}
