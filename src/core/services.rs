use crate::core::{BubbleError, TickerMetric};
use crate::metrics::Range;

/// Boxed future returned by the service traits, so they stay object safe.
pub type BoxFuture<'a, T> =
    core::pin::Pin<Box<dyn core::future::Future<Output = T> + Send + 'a>>;

/// A source of ranked ticker symbols.
///
/// The extraction strategy (HTML scraping, a structured feed, a fixed list in tests)
/// is an implementation detail; callers only see an ordered, de-duplicated list.
pub trait TickerSource: Send + Sync {
    /// Returns at most `limit` symbols in ranking order.
    ///
    /// # Errors
    /// `BubbleError::SourceUnavailable` when the listing cannot be fetched or yields
    /// no symbols at all.
    fn top_tickers(&self, limit: usize) -> BoxFuture<'_, Result<Vec<String>, BubbleError>>;
}

/// A service that computes one [`TickerMetric`].
///
/// Implemented by [`crate::metrics::MetricFetcher`], which never returns `Err`; the
/// `Result` exists so the batch runner can absorb failures from other implementations.
pub trait MetricService: Send + Sync {
    fn compute<'a>(
        &'a self,
        ticker: &'a str,
        range: Range,
    ) -> BoxFuture<'a, Result<TickerMetric, BubbleError>>;
}
