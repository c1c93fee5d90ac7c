use sp500_bubbles::{AppState, Settings, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal outside development.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let settings = Settings::from_env();
    let client = settings.client()?;

    tracing::info!(port = settings.port, "starting sp500-bubbles");
    server::serve(AppState::new(client), &settings).await?;
    Ok(())
}
