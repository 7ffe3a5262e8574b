use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use onbajet_api::{app, AppState};
use onbajet_core::TrustedHintsResolver;
use onbajet_store::{CatalogRepository, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onbajet_api=debug,onbajet_deals=debug,onbajet_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;

    let catalog = CatalogRepository::from_config(&config.catalog)
        .await
        .context("Failed to load catalog")?;
    tracing::info!("Catalog ready with {} items", catalog.len());

    let state = AppState::new(
        Arc::new(catalog),
        Arc::new(TrustedHintsResolver::default()),
        config.travel.clone(),
        config.defaults.clone(),
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Starting OnBaJet API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
