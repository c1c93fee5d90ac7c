#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use sp500_bubbles::core::BoxFuture;
use sp500_bubbles::{AppState, BubbleError, MetricService, Range, TickerMetric, TickerSource, router};
use tokio::net::TcpListener;

/// Serve `state` on an ephemeral port; returns the base URL.
pub async fn spawn_server(state: AppState, static_dir: &Path) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(state, static_dir);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Returns `count` synthetic tickers regardless of the requested limit, and records
/// the limits it was asked for.
pub struct GreedySource {
    pub count: usize,
    pub limits: Mutex<Vec<usize>>,
}

impl GreedySource {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            limits: Mutex::new(Vec::new()),
        }
    }
}

impl TickerSource for GreedySource {
    fn top_tickers(&self, limit: usize) -> BoxFuture<'_, Result<Vec<String>, BubbleError>> {
        self.limits.lock().unwrap().push(limit);
        let out = (0..self.count).map(|i| format!("T{i}")).collect();
        Box::pin(async move { Ok(out) })
    }
}

pub struct PanickingSource;

impl TickerSource for PanickingSource {
    fn top_tickers(&self, _limit: usize) -> BoxFuture<'_, Result<Vec<String>, BubbleError>> {
        panic!("listing exploded")
    }
}

/// Echoes a fixed metric, recording the ranges requested and peak concurrency.
pub struct RecordingMetrics {
    pub ranges: Mutex<Vec<Range>>,
    in_flight: AtomicUsize,
    pub peak: AtomicUsize,
}

impl RecordingMetrics {
    pub fn new() -> Self {
        Self {
            ranges: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }
}

impl MetricService for RecordingMetrics {
    fn compute<'a>(
        &'a self,
        ticker: &'a str,
        range: Range,
    ) -> BoxFuture<'a, Result<TickerMetric, BubbleError>> {
        Box::pin(async move {
            self.ranges.lock().unwrap().push(range);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(2)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(TickerMetric {
                ticker: ticker.to_string(),
                price: Some(100.0),
                change_percent: Some(2.5),
            })
        })
    }
}
