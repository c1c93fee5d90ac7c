//! Price history from the market-data aggregates API.
//!
//! Two shapes are fetched:
//! - intraday bars over a short trailing window, oldest first;
//! - end-of-day sessions, newest first, walking `next_url` pagination until enough
//!   sessions are collected.

mod fetch;
mod params;
mod wire;

pub use params::{INTRADAY_BAR_MINUTES, INTRADAY_WINDOW_DAYS, MAX_DAILY_PAGES, daily_window_days};

use chrono::{DateTime, TimeDelta, Utc};

use crate::core::{BubbleError, MarketClient, PriceBar};
use params::INTRADAY_PAGE_LIMIT;

/// Fetch intraday bars for `symbol` over the trailing window ending at `now`.
///
/// Bars are returned oldest first.
///
/// # Errors
/// Any transport failure, non-2xx status, or malformed body.
pub async fn fetch_intraday(
    client: &MarketClient,
    symbol: &str,
    now: DateTime<Utc>,
) -> Result<Vec<PriceBar>, BubbleError> {
    let from = (now - TimeDelta::days(INTRADAY_WINDOW_DAYS)).timestamp_millis();
    let to = now.timestamp_millis();

    let mut url = client.api_base().join(&format!(
        "v2/aggs/ticker/{symbol}/range/{INTRADAY_BAR_MINUTES}/minute/{from}/{to}"
    ))?;
    url.query_pairs_mut()
        .append_pair("adjusted", "true")
        .append_pair("sort", "asc")
        .append_pair("limit", &INTRADAY_PAGE_LIMIT.to_string());

    let mut bars = fetch::fetch_page(client, url, "intraday", symbol).await?.bars;
    bars.sort_by_key(|b| b.ts);
    Ok(bars)
}

/// Fetch at least `sessions_back + 1` end-of-day sessions for `symbol`, if upstream has them.
///
/// Rows are returned newest first. Fewer rows are returned when upstream runs out of
/// pages or [`MAX_DAILY_PAGES`] is reached.
///
/// Cursors are only followed when they share the API base's origin.
///
/// # Errors
/// A failure on the first page is returned as is. A failure on a later page ends the
/// walk and keeps what was already collected.
pub async fn fetch_daily(
    client: &MarketClient,
    symbol: &str,
    sessions_back: usize,
    now: DateTime<Utc>,
) -> Result<Vec<PriceBar>, BubbleError> {
    let wanted = sessions_back.saturating_add(1);
    let to = now.date_naive();
    let from = to - TimeDelta::days(daily_window_days(sessions_back));

    let mut url = client
        .api_base()
        .join(&format!("v2/aggs/ticker/{symbol}/range/1/day/{from}/{to}"))?;
    url.query_pairs_mut()
        .append_pair("adjusted", "true")
        .append_pair("sort", "desc")
        .append_pair("limit", &wanted.to_string());

    let first = fetch::fetch_page(client, url, "daily", symbol).await?;
    let mut rows = first.bars;
    let mut next = first.next_url;
    let mut pages = 1usize;

    while rows.len() < wanted && pages < MAX_DAILY_PAGES {
        let Some(cursor) = next.take() else { break };
        // The cursor carries the bearer token; never send it off the API's origin.
        if cursor.origin() != client.api_base().origin() {
            tracing::warn!(symbol, cursor = %cursor, "ignoring next_url on a foreign origin");
            break;
        }
        match fetch::fetch_page(client, cursor, "daily", symbol).await {
            Ok(page) => {
                rows.extend(page.bars);
                next = page.next_url;
                pages += 1;
            }
            Err(e) => {
                tracing::warn!(symbol, pages, error = %e, "daily pagination stopped early");
                break;
            }
        }
    }

    rows.sort_by(|a, b| b.ts.cmp(&a.ts));
    rows.dedup_by_key(|b| b.ts);
    Ok(rows)
}
