//! HTTP surface: JSON API, health probe, and the single-page front end.

pub mod api;
pub mod error;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::core::{BubbleError, MarketClient, MetricService, TickerSource};
use crate::listing::ListingScraper;
use crate::metrics::MetricFetcher;

pub use error::ApiError;

/// Read-only state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: MarketClient,
    pub source: Arc<dyn TickerSource>,
    pub metrics: Arc<dyn MetricService>,
}

impl AppState {
    /// State backed by the listing scraper and the market-data metric fetcher.
    pub fn new(client: MarketClient) -> Self {
        Self {
            source: Arc::new(ListingScraper::new(client.clone())),
            metrics: Arc::new(MetricFetcher::new(client.clone())),
            client,
        }
    }

    /// Replace the ticker source.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn TickerSource>) -> Self {
        self.source = source;
        self
    }

    /// Replace the metric service.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricService>) -> Self {
        self.metrics = metrics;
        self
    }
}

/// Build the application router. Unmatched paths serve `static_dir/index.html`.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(api::health_handler))
        .route("/api/sp500", get(api::sp500_handler))
        .fallback_service(spa)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(state: AppState, settings: &Settings) -> Result<(), BubbleError> {
    if !state.client.has_api_key() {
        tracing::warn!("MARKET_API_KEY is not set; /api/sp500 will answer 500");
    }

    let app = router(state, &settings.static_dir);
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, static_dir = %settings.static_dir.display(), "Server listening");
    tracing::info!("  GET /api/sp500?range=day&limit=10");
    tracing::info!("  GET /api/health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
