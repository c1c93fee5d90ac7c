//! Bounded-parallel metric computation over a ticker list.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use futures::future::join_all;

use crate::core::{MetricService, TickerMetric};
use crate::metrics::Range;

/// Compute metrics for every ticker, `concurrency` at a time.
///
/// Tickers are processed in consecutive chunks; a chunk runs concurrently and the next
/// chunk starts only once every item of the current one has resolved. The output has
/// the same length and order as `tickers`. An item whose computation returns `Err` or
/// panics is reported as [`TickerMetric::empty`].
pub async fn run_all<S>(
    service: &S,
    tickers: &[String],
    range: Range,
    concurrency: usize,
) -> Vec<TickerMetric>
where
    S: MetricService + ?Sized,
{
    let concurrency = concurrency.max(1);
    let mut out = Vec::with_capacity(tickers.len());

    for (batch, chunk) in tickers.chunks(concurrency).enumerate() {
        tracing::debug!(batch, size = chunk.len(), %range, "running metric batch");
        let futs = chunk.iter().map(|ticker| async move {
            // The call sits inside the guarded future so a panic raised while building
            // the service's future is caught as well as one raised while polling it.
            match AssertUnwindSafe(async move { service.compute(ticker, range).await })
                .catch_unwind()
                .await
            {
                Ok(Ok(metric)) => metric,
                Ok(Err(e)) => {
                    tracing::warn!(ticker = %ticker, error = %e, "metric failed; reporting nulls");
                    TickerMetric::empty(ticker.as_str())
                }
                Err(_) => {
                    tracing::error!(ticker = %ticker, "metric computation panicked; reporting nulls");
                    TickerMetric::empty(ticker.as_str())
                }
            }
        });
        out.extend(join_all(futs).await);
    }
    out
}
