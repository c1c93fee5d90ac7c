//! Pure percent-change arithmetic. No I/O here.

/// `(now - base) / base * 100`, or `None` when an operand is missing, `base` is zero,
/// or the result is not finite.
pub fn percent_change(now: Option<f64>, base: Option<f64>) -> Option<f64> {
    let (now, base) = (now?, base?);
    if base == 0.0 {
        return None;
    }
    let pct = (now - base) / base * 100.0;
    pct.is_finite().then_some(pct)
}

/// Outcome of comparing the latest intraday bar with an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntradayChange {
    pub price: Option<f64>,
    pub base: Option<f64>,
    pub change_percent: Option<f64>,
}

/// Compare the last close with the close `bars_back` positions earlier.
///
/// `closes` is oldest first. Needs `bars_back + 1` closes for a base; with fewer,
/// `base` and `change_percent` are `None` while `price` is still the last close.
pub fn intraday_change(closes: &[f64], bars_back: usize) -> IntradayChange {
    let price = closes.last().copied();
    let base = closes
        .len()
        .checked_sub(bars_back + 1)
        .and_then(|i| closes.get(i).copied());
    IntradayChange {
        price,
        base,
        change_percent: percent_change(price, base),
    }
}

/// Comparison close for a session lookback.
///
/// `closes` is newest first. Takes the close `sessions_back` rows back, or the
/// oldest available row when history is shorter than that.
pub fn session_base(closes: &[f64], sessions_back: usize) -> Option<f64> {
    closes
        .get(sessions_back)
        .or_else(|| closes.last())
        .copied()
}
