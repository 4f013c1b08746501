use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use portfolio_chat::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real env vars still apply.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env();
    if config.api_key.is_none() {
        warn!("GROQ_API_KEY is not set; /api/chat will return 500 until it is");
    }
    info!(model = %config.model, url = %config.api_url, "Groq client configured");

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config));

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    info!("portfolio chat running at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
