use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tokio::net::TcpListener;

use crate::app::{app, cors_layer};
use crate::auth::TokenKeys;
use crate::config::AppConfig;
use crate::database::{DatabaseManager, MemoryRestaurantStore, PgRestaurantStore, RestaurantStore};
use crate::services::YelpClient;
use crate::state::AppState;

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[arg(long, help = "Host to bind to (overrides HOST)")]
    pub host: Option<String>,

    #[arg(long, help = "Port to bind to (overrides PORT)")]
    pub port: Option<u16>,

    #[arg(long, help = "Use the in-memory store even when DATABASE_URL is set")]
    pub memory: bool,
}

pub async fn handle(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env().context("loading configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Starting Restaurant API in {:?} mode", config.environment);

    let store = build_store(&config, args.memory).await?;
    let search = Arc::new(YelpClient::new(&config.search).context("building search client")?);
    let tokens = TokenKeys::from_secret(&config.security.jwt_secret, config.security.jwt_expiry_hours)?;

    let router = app(AppState::new(store, search, tokens), cors_layer(&config));

    let bind_addr = config.addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Restaurant API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_store(config: &AppConfig, force_memory: bool) -> anyhow::Result<Arc<dyn RestaurantStore>> {
    if force_memory || config.database.url.is_none() {
        tracing::warn!("Using in-memory restaurant store; records will not survive a restart");
        return Ok(Arc::new(MemoryRestaurantStore::new()));
    }

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("connecting to database")?;
    DatabaseManager::migrate(&pool).await.context("applying schema")?;

    Ok(Arc::new(PgRestaurantStore::new(pool)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
