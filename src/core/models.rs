use serde::Serialize;

/* ----- OUTPUT (served by the HTTP layer) ----- */

/// Price and percent change for one ticker over the requested range.
///
/// Both numeric fields are independently nullable; a metric is always emitted,
/// even when every upstream lookup for its ticker failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerMetric {
    pub ticker: String,
    pub price: Option<f64>,
    pub change_percent: Option<f64>,
}

impl TickerMetric {
    /// A metric with no price and no change, used when nothing could be computed.
    pub fn empty(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            price: None,
            change_percent: None,
        }
    }
}

/* ----- HISTORY (shared by history/ and metrics/) ----- */

/// One fixed-duration price sample; only the close is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBar {
    /// Bar start, epoch milliseconds.
    pub ts: i64,
    pub close: f64,
}
