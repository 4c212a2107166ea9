//! Runtime configuration, read once at startup.

use crate::transport::TIKTOK_TTS_URL;
use crate::{Error, ErrorContext, Result};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

pub const SESSION_ID_ENV: &str = "TIKTOK_SESSIONID";

/// Settings for the relay server and its outbound client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Credential used when a request carries no `session_id`.
    pub default_session_id: Option<String>,
    pub bind_addr: SocketAddr,
    pub provider_url: String,
    pub max_attempts: u32,
    pub request_timeout: Duration,
    pub proxy_url: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            default_session_id: None,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            provider_url: TIKTOK_TTS_URL.to_string(),
            max_attempts: 3,
            request_timeout: Duration::from_secs(20),
            proxy_url: None,
        }
    }
}

impl RelayConfig {
    /// Builds the config from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let bind_addr = match get("TTS_RELAY_ADDR") {
            Some(raw) => raw.parse::<SocketAddr>().map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid bind address '{}': {}", raw, e),
                    ErrorContext::new().with_source("TTS_RELAY_ADDR"),
                )
            })?,
            None => defaults.bind_addr,
        };

        let max_attempts = match get("TTS_MAX_ATTEMPTS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(Error::configuration_with_context(
                        format!("expected a positive integer, got '{}'", raw),
                        ErrorContext::new().with_source("TTS_MAX_ATTEMPTS"),
                    ))
                }
            },
            None => defaults.max_attempts,
        };

        let request_timeout = match get("TTS_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid timeout '{}': {}", raw, e),
                    ErrorContext::new().with_source("TTS_HTTP_TIMEOUT_SECS"),
                )
            })?,
            None => defaults.request_timeout,
        };

        Ok(Self {
            default_session_id: get(SESSION_ID_ENV),
            bind_addr,
            provider_url: get("TIKTOK_TTS_URL").unwrap_or(defaults.provider_url),
            max_attempts,
            request_timeout,
            proxy_url: get("TTS_PROXY_URL"),
        })
    }

    pub fn with_default_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.default_session_id = Some(session_id.into());
        self
    }
}
