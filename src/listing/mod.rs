//! Ranked ticker listing.

mod extract;

pub use extract::extract_symbols;

use crate::core::{BoxFuture, BubbleError, MarketClient, TickerSource};

/// Default href convention on the listing page.
pub const DEFAULT_HREF_PREFIX: &str = "/symbol/";

/// [`TickerSource`] that scrapes the configured listing page.
#[derive(Debug, Clone)]
pub struct ListingScraper {
    client: MarketClient,
    href_prefix: String,
}

impl ListingScraper {
    pub fn new(client: MarketClient) -> Self {
        Self {
            client,
            href_prefix: DEFAULT_HREF_PREFIX.to_string(),
        }
    }

    /// Override the href path prefix that marks a symbol link.
    #[must_use]
    pub fn href_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.href_prefix = prefix.into();
        self
    }

    /// Fetch the listing once and extract up to `limit` symbols.
    ///
    /// # Errors
    /// `BubbleError::SourceUnavailable` on transport failure, non-2xx status, or when
    /// no symbol could be extracted. There is no retry.
    pub async fn fetch_top(&self, limit: usize) -> Result<Vec<String>, BubbleError> {
        let url = self.client.listing_url().clone();
        let resp = crate::core::net::send_checked(self.client.http().get(url.clone()), &url)
            .await
            .map_err(|e| BubbleError::SourceUnavailable(e.to_string()))?;
        let body = crate::core::net::get_text(resp, "listing_html", "-")
            .await
            .map_err(|e| BubbleError::SourceUnavailable(e.to_string()))?;

        let symbols = extract_symbols(&body, &self.href_prefix, limit);
        if symbols.is_empty() {
            return Err(BubbleError::SourceUnavailable(format!(
                "no symbols found at {url}"
            )));
        }
        tracing::debug!(count = symbols.len(), "listing scraped");
        Ok(symbols)
    }
}

impl TickerSource for ListingScraper {
    fn top_tickers(&self, limit: usize) -> BoxFuture<'_, Result<Vec<String>, BubbleError>> {
        Box::pin(self.fetch_top(limit))
    }
}
