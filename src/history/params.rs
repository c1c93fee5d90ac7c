/// Size of one intraday bar, in minutes.
pub const INTRADAY_BAR_MINUTES: u32 = 15;

/// Intraday lookback window. Wide enough to reach the last session over a weekend.
pub const INTRADAY_WINDOW_DAYS: i64 = 3;

/// Upper bound on intraday bars requested in one call.
pub(crate) const INTRADAY_PAGE_LIMIT: usize = 5000;

/// Hard cap on end-of-day pages walked for one ticker.
pub const MAX_DAILY_PAGES: usize = 10;

/// Calendar days needed to cover `sessions` trading sessions, with slack for
/// weekends and exchange holidays.
pub fn daily_window_days(sessions: usize) -> i64 {
    let sessions = i64::try_from(sessions).unwrap_or(i64::MAX / 2);
    sessions.saturating_mul(7) / 5 + 14
}
