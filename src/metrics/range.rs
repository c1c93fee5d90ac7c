use std::fmt;
use std::str::FromStr;

use crate::core::BubbleError;

/// The comparison horizon for a percent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Range {
    Hour,
    #[default]
    Day,
    Week,
    Month,
    Year,
}

/// How far back the comparison point sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookback {
    /// Intraday bars before the latest bar.
    Bars(usize),
    /// End-of-day sessions before the latest session.
    Sessions(usize),
}

impl Range {
    pub const ALL: [Range; 5] = [
        Range::Hour,
        Range::Day,
        Range::Week,
        Range::Month,
        Range::Year,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Range::Hour => "hour",
            Range::Day => "day",
            Range::Week => "week",
            Range::Month => "month",
            Range::Year => "year",
        }
    }

    /// Lookback distance for this range. An hour is five 15-minute bars (≈75 minutes).
    pub fn lookback(self) -> Lookback {
        match self {
            Range::Hour => Lookback::Bars(5),
            Range::Day => Lookback::Sessions(1),
            Range::Week => Lookback::Sessions(5),
            Range::Month => Lookback::Sessions(21),
            Range::Year => Lookback::Sessions(252),
        }
    }

    /// Parse a query value, falling back to the default for anything unrecognized.
    pub fn parse_or_default(s: Option<&str>) -> Self {
        s.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Range {
    type Err = BubbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Range::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| BubbleError::Data(format!("unknown range: {s}")))
    }
}
