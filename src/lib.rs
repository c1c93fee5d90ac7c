//! sp500-bubbles: percent-change snapshot of the top S&P 500 constituents.
//!
//! The pipeline is listing → tickers → per-ticker price/history lookups → JSON.
//! [`listing`] scrapes the ranked constituents, [`metrics`] turns market-data history
//! into a [`TickerMetric`], [`batch`] fans out with bounded parallelism, and
//! [`server`] exposes the result over HTTP.

pub mod batch;
pub mod config;
pub mod core;
pub mod history;
pub mod listing;
pub mod metrics;
pub mod server;

pub use crate::core::{
    BubbleError, MarketClient, MarketClientBuilder, MetricService, PriceBar, TickerMetric,
    TickerSource,
};
pub use batch::run_all;
pub use config::Settings;
pub use listing::ListingScraper;
pub use metrics::{Lookback, MetricFetcher, Range};
pub use server::{AppState, router};
