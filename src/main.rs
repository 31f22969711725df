use anyhow::Context;
use general_store_bot::config::Config;
use general_store_bot::router::create_app_router;
use general_store_bot::state::AppState;
use std::sync::Arc;
use tracing::info;

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = Config::from_env().context("invalid configuration")?;
    let addr = config.bind_addr;

    // Initialize application state
    let state = Arc::new(AppState::new(config));
    info!(
        products = state.catalog.len(),
        policy = ?state.config.stock_policy,
        "catalog stocked"
    );

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Store bot listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
