//! Process-wide settings, read once at startup from the environment.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::core::{BubbleError, MarketClient};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Settings {
    /// `PORT`
    pub port: u16,
    /// `MARKET_API_KEY`; absence is reported per request, not at startup.
    pub api_key: Option<String>,
    /// `MARKET_API_BASE`
    pub api_base: Option<Url>,
    /// `LISTING_URL`
    pub listing_url: Option<Url>,
    /// `STATIC_DIR`
    pub static_dir: PathBuf,
    /// `REQUEST_TIMEOUT_SECS`
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: None,
            api_base: None,
            listing_url: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Malformed values fall back to
    /// their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = get("PORT")
            .and_then(|v| parse_or_warn("PORT", &v))
            .unwrap_or(defaults.port);
        let request_timeout = get("REQUEST_TIMEOUT_SECS")
            .and_then(|v| parse_or_warn::<u64>("REQUEST_TIMEOUT_SECS", &v))
            .filter(|secs| *secs > 0)
            .map_or(defaults.request_timeout, Duration::from_secs);

        Self {
            port,
            api_key: get("MARKET_API_KEY"),
            api_base: get("MARKET_API_BASE").and_then(|v| parse_or_warn("MARKET_API_BASE", &v)),
            listing_url: get("LISTING_URL").and_then(|v| parse_or_warn("LISTING_URL", &v)),
            static_dir: get("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            request_timeout,
        }
    }

    /// Build the shared upstream client from these settings.
    pub fn client(&self) -> Result<MarketClient, BubbleError> {
        let mut b = MarketClient::builder().timeout(self.request_timeout);
        if let Some(key) = &self.api_key {
            b = b.api_key(key.clone());
        }
        if let Some(u) = &self.api_base {
            b = b.api_base(u.clone());
        }
        if let Some(u) = &self.listing_url {
            b = b.listing_url(u.clone());
        }
        b.build()
    }
}

fn parse_or_warn<T>(key: &str, value: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(key, value, error = %e, "ignoring malformed setting");
            None
        }
    }
}
