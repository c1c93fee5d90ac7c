use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use sp500_bubbles::core::BoxFuture;
use sp500_bubbles::{BubbleError, MetricService, Range, TickerMetric, run_all};

/// Resolves each ticker after a per-ticker delay, tracks peak concurrency and logs
/// `start:<T>` / `end:<T>` events in the order they happen.
struct SlowService {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    events: std::sync::Mutex<Vec<String>>,
}

impl SlowService {
    fn new() -> Self {
        Self {
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            events: std::sync::Mutex::new(Vec::new()),
        }
    }

    fn record(&self, kind: &str, ticker: &str) {
        self.events.lock().unwrap().push(format!("{kind}:{ticker}"));
    }

    fn position(&self, event: &str) -> usize {
        let events = self.events.lock().unwrap();
        events
            .iter()
            .position(|e| e == event)
            .unwrap_or_else(|| panic!("{event} never recorded in {events:?}"))
    }

    fn delay_for(ticker: &str) -> Duration {
        match ticker {
            "SLOW" => Duration::from_millis(80),
            _ => Duration::from_millis(5),
        }
    }
}

impl MetricService for SlowService {
    fn compute<'a>(
        &'a self,
        ticker: &'a str,
        _range: Range,
    ) -> BoxFuture<'a, Result<TickerMetric, BubbleError>> {
        Box::pin(async move {
            self.record("start", ticker);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Self::delay_for(ticker)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.record("end", ticker);
            Ok(TickerMetric {
                ticker: ticker.to_string(),
                price: Some(1.0),
                change_percent: Some(0.0),
            })
        })
    }
}

fn tickers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

#[tokio::test]
async fn output_order_matches_input_despite_latency() {
    let svc = SlowService::new();
    let input = tickers(&["SLOW", "FAST"]);

    let out = run_all(&svc, &input, Range::Day, 2).await;

    let order: Vec<&str> = out.iter().map(|m| m.ticker.as_str()).collect();
    assert_eq!(order, vec!["SLOW", "FAST"]);
}

#[tokio::test]
async fn batches_never_exceed_concurrency_and_do_not_overlap() {
    let svc = Arc::new(SlowService::new());
    let input = tickers(&["A", "SLOW", "B", "C", "D", "E", "F"]);

    let out = run_all(svc.as_ref(), &input, Range::Week, 3).await;

    assert_eq!(out.len(), input.len());
    assert_eq!(svc.peak.load(Ordering::SeqCst), 3);

    // Fast items of the first chunk free their slots early; the next chunk must still
    // wait for SLOW, and the last chunk for every item of the second.
    let slow_done = svc.position("end:SLOW");
    for t in ["C", "D", "E"] {
        let started = svc.position(&format!("start:{t}"));
        assert!(
            started > slow_done,
            "{t} started before SLOW finished: {:?}",
            svc.events.lock().unwrap()
        );
    }
    let f_started = svc.position("start:F");
    for t in ["C", "D", "E"] {
        assert!(svc.position(&format!("end:{t}")) < f_started);
    }
}

#[tokio::test]
async fn zero_concurrency_is_treated_as_one() {
    let svc = SlowService::new();
    let input = tickers(&["A", "B", "C"]);

    let out = run_all(&svc, &input, Range::Day, 0).await;

    assert_eq!(out.len(), 3);
    assert_eq!(svc.peak.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_input_yields_empty_output() {
    let svc = SlowService::new();
    let out = run_all(&svc, &[], Range::Day, 10).await;
    assert!(out.is_empty());
}
