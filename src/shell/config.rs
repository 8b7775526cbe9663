// Service configuration, read from the environment.
//
// Every key is optional. `main` loads a `.env` file first, so local overrides live there.

use crate::modules::attendance::session::registry::SessionSettings;
use std::net::SocketAddr;
use thiserror::Error;

pub const BIND_ADDR: &str = "ATTENDANCE_BIND_ADDR";
pub const COLLECTION: &str = "ATTENDANCE_COLLECTION";
pub const LOCATION_PLACEHOLDER: &str = "ATTENDANCE_LOCATION_PLACEHOLDER";
pub const RESUME_OPEN_SHIFT: &str = "ATTENDANCE_RESUME_OPEN_SHIFT";
pub const LOG_FILTER: &str = "ATTENDANCE_LOG_FILTER";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub sessions: SessionSettings,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = SessionSettings::default();

        let bind_addr = lookup(BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|_| ConfigError::Invalid {
            key: BIND_ADDR,
            value: bind_addr.clone(),
        })?;

        let collection = non_blank(COLLECTION, lookup(COLLECTION))?.unwrap_or(defaults.collection);
        let location_placeholder = non_blank(LOCATION_PLACEHOLDER, lookup(LOCATION_PLACEHOLDER))?
            .unwrap_or(defaults.location_placeholder);

        let resume_open_shift = match lookup(RESUME_OPEN_SHIFT) {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                key: RESUME_OPEN_SHIFT,
                value,
            })?,
            None => defaults.resume_open_shift,
        };

        Ok(Self {
            bind_addr,
            sessions: SessionSettings {
                collection,
                location_placeholder,
                resume_open_shift,
            },
            log_filter: lookup(LOG_FILTER).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

fn non_blank(key: &'static str, value: Option<String>) -> Result<Option<String>, ConfigError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Invalid { key, value }),
        value => Ok(value),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
