//! Per-ticker price and percent-change computation.

mod change;
mod range;

pub use change::{IntradayChange, intraday_change, percent_change, session_base};
pub use range::{Lookback, Range};

use chrono::{DateTime, Utc};

use crate::core::{BoxFuture, BubbleError, MarketClient, MetricService, TickerMetric};
use crate::history::{fetch_daily, fetch_intraday};

/// Computes a [`TickerMetric`] from the market-data API.
///
/// Every upstream failure is logged and degrades the affected field to `None`; the
/// computation itself never fails.
#[derive(Debug, Clone)]
pub struct MetricFetcher {
    client: MarketClient,
    reference_time: Option<DateTime<Utc>>,
}

impl MetricFetcher {
    pub fn new(client: MarketClient) -> Self {
        Self {
            client,
            reference_time: None,
        }
    }

    /// Anchor upstream windows at a fixed instant instead of the wall clock.
    #[must_use]
    pub fn with_reference_time(mut self, at: DateTime<Utc>) -> Self {
        self.reference_time = Some(at);
        self
    }

    /// Compute the metric for `ticker` as of the reference time (default: now).
    pub async fn compute_metric(&self, ticker: &str, range: Range) -> TickerMetric {
        let now = self.reference_time.unwrap_or_else(Utc::now);
        self.compute_metric_at(ticker, range, now).await
    }

    /// Compute the metric for `ticker` with upstream windows anchored at `now`.
    pub async fn compute_metric_at(
        &self,
        ticker: &str,
        range: Range,
        now: DateTime<Utc>,
    ) -> TickerMetric {
        let closes = self.intraday_closes(ticker, now).await;

        let (price, change_percent) = match range.lookback() {
            Lookback::Bars(n) => {
                let c = intraday_change(closes.as_deref().unwrap_or_default(), n);
                (c.price, c.change_percent)
            }
            Lookback::Sessions(k) => {
                // The live intraday close stands in for "now" on every session range.
                let now_close = closes.as_deref().and_then(|c| c.last().copied());
                let base = self.session_base_close(ticker, k, now).await;
                (now_close, percent_change(now_close, base))
            }
        };

        tracing::debug!(ticker, %range, ?price, ?change_percent, "metric computed");
        TickerMetric {
            ticker: ticker.to_string(),
            price,
            change_percent,
        }
    }

    async fn intraday_closes(&self, ticker: &str, now: DateTime<Utc>) -> Option<Vec<f64>> {
        match fetch_intraday(&self.client, ticker, now).await {
            Ok(bars) => Some(bars.into_iter().map(|b| b.close).collect()),
            Err(e) => {
                tracing::warn!(ticker, error = %e, "intraday lookup degraded");
                None
            }
        }
    }

    async fn session_base_close(
        &self,
        ticker: &str,
        sessions_back: usize,
        now: DateTime<Utc>,
    ) -> Option<f64> {
        match fetch_daily(&self.client, ticker, sessions_back, now).await {
            Ok(rows) => {
                let closes: Vec<f64> = rows.into_iter().map(|b| b.close).collect();
                session_base(&closes, sessions_back)
            }
            Err(e) => {
                tracing::warn!(ticker, sessions_back, error = %e, "daily lookup degraded");
                None
            }
        }
    }
}

impl MetricService for MetricFetcher {
    fn compute<'a>(
        &'a self,
        ticker: &'a str,
        range: Range,
    ) -> BoxFuture<'a, Result<TickerMetric, BubbleError>> {
        Box::pin(async move { Ok(self.compute_metric(ticker, range).await) })
    }
}
