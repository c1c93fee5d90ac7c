//! Public client surface + builder.
//! Defaults (UA, endpoints, timeouts) live in `constants`.

mod constants;

use crate::core::BubbleError;
use constants::{
    DEFAULT_API_BASE, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_LISTING_URL, DEFAULT_TIMEOUT_SECS,
    USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Shared HTTP capability for the listing page and the market-data API.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted, so one
/// instance is built at startup and handed to every component that talks upstream.
#[derive(Debug, Clone)]
pub struct MarketClient {
    http: Client,
    listing_url: Url,
    api_base: Url,
    api_key: Option<String>,
}

impl MarketClient {
    /// Create a new builder.
    pub fn builder() -> MarketClientBuilder {
        MarketClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn listing_url(&self) -> &Url {
        &self.listing_url
    }
    pub(crate) fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Whether a market API credential was configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The market API credential, or `ConfigMissing` when none was configured.
    ///
    /// Callers check this before issuing any upstream call so that a missing key
    /// fails fast instead of producing a batch of null metrics.
    pub fn require_api_key(&self) -> Result<&str, BubbleError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| BubbleError::ConfigMissing("MARKET_API_KEY is not set".into()))
    }

    /// An authenticated GET against the market API.
    pub(crate) fn api_get(&self, url: Url) -> Result<reqwest::RequestBuilder, BubbleError> {
        let key = self.require_api_key()?;
        Ok(self.http.get(url).bearer_auth(key))
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct MarketClientBuilder {
    user_agent: Option<String>,
    listing_url: Option<Url>,
    api_base: Option<Url>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl MarketClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the ranked listing page (e.g., `https://www.slickcharts.com/sp500`).
    pub fn listing_url(mut self, url: Url) -> Self {
        self.listing_url = Some(url);
        self
    }

    /// Override the market API base (e.g., `https://api.polygon.io/`).
    ///
    /// A missing trailing `/` is added so a base with a path prefix keeps it when
    /// endpoint paths are joined onto it.
    pub fn api_base(mut self, mut url: Url) -> Self {
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.api_base = Some(url);
        self
    }

    /// Set the market API credential. Empty strings are treated as absent.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = if key.trim().is_empty() { None } else { Some(key) };
        self
    }

    /// Set the overall per-request timeout. Default: 5s.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: 3s.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<MarketClient, BubbleError> {
        let listing_url = match self.listing_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_LISTING_URL)?,
        };
        let api_base = match self.api_base {
            Some(u) => u,
            None => Url::parse(DEFAULT_API_BASE)?,
        };

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            )
            .connect_timeout(
                self.connect_timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
            )
            .build()?;

        Ok(MarketClient {
            http,
            listing_url,
            api_base,
            api_key: self.api_key,
        })
    }
}
