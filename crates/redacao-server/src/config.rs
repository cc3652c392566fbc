use std::fmt;
use std::str::FromStr;

use jiff::tz::TimeZone;
use thiserror::Error;

use redacao_core::models::user::{TestUser, UserId};
use redacao_gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use redacao_storage::client::DbSettings;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {var} has invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub db: DbSettings,
    pub port: u16,
    pub test_user_id: UserId,
    /// Zone dashboard dates are rendered in. Defaults to the host's zone.
    pub display_time_zone: TimeZone,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if set. Empty values count as unset, except for `DB_PASSWORD`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        Ok(Self {
            gemini_api_key: required("GEMINI_API_KEY")?,
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            db: DbSettings {
                host: required("DB_HOST")?,
                port: parse_or(get("DB_PORT"), "DB_PORT", DEFAULT_DB_PORT)?,
                user: required("DB_USER")?,
                password: lookup("DB_PASSWORD").unwrap_or_default(),
                database: required("DB_NAME")?,
                max_connections: parse_or(
                    get("DB_MAX_CONNECTIONS"),
                    "DB_MAX_CONNECTIONS",
                    DEFAULT_DB_MAX_CONNECTIONS,
                )?,
            },
            port: parse_or(get("PORT"), "PORT", DEFAULT_PORT)?,
            test_user_id: parse_or(get("TEST_USER_ID"), "TEST_USER_ID", TestUser::DEFAULT_ID)?,
            display_time_zone: time_zone(get("DISPLAY_TIME_ZONE"))?,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("db", &self.db)
            .field("port", &self.port)
            .field("test_user_id", &self.test_user_id)
            .field("display_time_zone", &self.display_time_zone.iana_name())
            .finish()
    }
}

fn parse_or<T>(value: Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

fn time_zone(name: Option<String>) -> Result<TimeZone, ConfigError> {
    match name {
        None => Ok(TimeZone::system()),
        Some(name) => TimeZone::get(name.trim()).map_err(|e| ConfigError::Invalid {
            var: "DISPLAY_TIME_ZONE",
            value: name.clone(),
            reason: e.to_string(),
        }),
    }
}
