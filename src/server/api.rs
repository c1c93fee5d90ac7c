use std::num::IntErrorKind;

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::batch::run_all;
use crate::core::TickerMetric;
use crate::metrics::Range;
use crate::server::AppState;
use crate::server::error::ApiError;

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;
pub const MAX_CONCURRENCY: usize = 10;

/// Raw query for `/api/sp500`. Both values are kept as strings so malformed input
/// falls back to defaults instead of being rejected.
#[derive(Debug, Default, Deserialize)]
pub struct Sp500Query {
    pub range: Option<String>,
    pub limit: Option<String>,
}

/// Absent or non-numeric → [`DEFAULT_LIMIT`]; numeric values are clamped to `1..=100`,
/// including integers too large for `i64`.
pub fn parse_limit(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_LIMIT;
    };
    match raw.trim().parse::<i64>() {
        Ok(n) => usize::try_from(n.clamp(1, MAX_LIMIT as i64)).unwrap_or(DEFAULT_LIMIT),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => MAX_LIMIT,
            IntErrorKind::NegOverflow => 1,
            _ => DEFAULT_LIMIT,
        },
    }
}

/// GET /api/health
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// GET /api/sp500?range=<hour|day|week|month|year>&limit=<1..100>
pub async fn sp500_handler(
    State(state): State<AppState>,
    Query(q): Query<Sp500Query>,
) -> Result<Json<Vec<TickerMetric>>, ApiError> {
    // Checked before any upstream call.
    state.client.require_api_key()?;

    let range = Range::parse_or_default(q.range.as_deref());
    let limit = parse_limit(q.limit.as_deref());
    let concurrency = limit.min(MAX_CONCURRENCY);

    let mut tickers = state.source.top_tickers(limit).await?;
    tickers.truncate(limit);

    let mut metrics = run_all(state.metrics.as_ref(), &tickers, range, concurrency).await;
    metrics.truncate(limit);

    tracing::info!(
        %range,
        limit,
        returned = metrics.len(),
        priced = metrics.iter().filter(|m| m.price.is_some()).count(),
        "sp500 request served"
    );
    Ok(Json(metrics))
}
