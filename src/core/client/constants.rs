//! Centralized constants for default endpoints and UA.

/// Default desktop UA; the listing page rejects obvious bot agents.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Ranked S&P 500 listing (constituents ordered by index weight).
pub(crate) const DEFAULT_LISTING_URL: &str = "https://www.slickcharts.com/sp500";

/// Market-data aggregates API base (paths are joined onto it).
pub(crate) const DEFAULT_API_BASE: &str = "https://api.polygon.io/";

/// Per-call timeout applied when the builder is not told otherwise.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Connect timeout applied when the builder is not told otherwise.
pub(crate) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 3;
