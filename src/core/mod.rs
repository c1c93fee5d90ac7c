//! Core components of the `sp500-bubbles` aggregator.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The shared [`MarketClient`] and its builder.
//! - The primary [`BubbleError`] type.
//! - Shared data models like [`TickerMetric`] and [`PriceBar`].
//! - The service traits the batch runner and HTTP layer are written against.

/// The shared client (`MarketClient`), builder, and configuration.
pub mod client;
/// The primary error type (`BubbleError`) for the crate.
pub mod error;
/// Shared data models used across modules (e.g., `TickerMetric`, `PriceBar`).
pub mod models;
/// Service traits for abstracting ticker listing and metric computation.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::MarketClient`
pub use client::{MarketClient, MarketClientBuilder};
pub use error::BubbleError;
pub use models::{PriceBar, TickerMetric};
pub use services::{BoxFuture, MetricService, TickerSource};
