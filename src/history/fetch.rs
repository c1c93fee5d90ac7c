use url::Url;

use crate::core::{BubbleError, MarketClient, PriceBar};
use crate::history::wire::AggsEnvelope;

/// One decoded page of aggregate bars.
pub(crate) struct Page {
    pub(crate) bars: Vec<PriceBar>,
    pub(crate) next_url: Option<Url>,
}

pub(crate) async fn fetch_page(
    client: &MarketClient,
    url: Url,
    endpoint: &str,
    symbol: &str,
) -> Result<Page, BubbleError> {
    tracing::debug!(endpoint, symbol, path = url.path(), "fetching aggregates page");
    let req = client.api_get(url.clone())?;
    let resp = crate::core::net::send_checked(req, &url).await?;
    let body = crate::core::net::get_text(resp, endpoint, symbol).await?;
    decode_page(&body)
}

pub(crate) fn decode_page(body: &str) -> Result<Page, BubbleError> {
    let parsed: AggsEnvelope = serde_json::from_str(body)
        .map_err(|e| BubbleError::Data(format!("json parse error: {e}")))?;

    if let Some(err) = parsed.error {
        return Err(BubbleError::Data(format!("upstream error: {err}")));
    }
    if parsed.status.as_deref() == Some("ERROR") {
        return Err(BubbleError::Data("upstream status ERROR".into()));
    }

    // Bars without a usable close are dropped rather than treated as zero.
    let bars = parsed
        .results
        .unwrap_or_default()
        .into_iter()
        .filter_map(|b| match (b.t, b.c) {
            (Some(ts), Some(close)) if close.is_finite() => Some(PriceBar { ts, close }),
            _ => None,
        })
        .collect();

    let next_url = match parsed.next_url.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Some(Url::parse(s)?),
        _ => None,
    };

    Ok(Page { bars, next_url })
}
