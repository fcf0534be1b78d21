use anyhow::{Context, Result};
use dotenv::dotenv;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod config;
mod error;
mod ledger;
mod models;
mod simulation;
mod swap;
mod wallet;
mod web;

use crate::config::Config;
use crate::ledger::loader::{spawn_mock_history_loader, HistorySettings};
use crate::wallet::{KeyValueStore, MemoryStore, SledStore, WalletSession};
use crate::web::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Arc::new(Config::load()?);
    info!("Configuration loaded successfully");

    // Wallet address placeholder lives in memory unless a store path is configured
    let store: Arc<dyn KeyValueStore> = match &config.wallet_store_path {
        Some(path) => Arc::new(SledStore::open(path).context("Failed to open wallet store")?),
        None => Arc::new(MemoryStore::new()),
    };
    let wallet = WalletSession::mount(store).context("Failed to read wallet address")?;
    info!("Wallet address: {}", wallet.address());

    // Flipped on shutdown so pending simulated operations are abandoned
    let (teardown_tx, teardown_rx) = watch::channel(false);

    let state = AppState::new(config.clone(), wallet, teardown_rx.clone());

    spawn_mock_history_loader(
        state.transactions.clone(),
        HistorySettings::from_config(&config),
        teardown_rx,
    );

    let shutdown = async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown requested, abandoning pending operations");
                let _ = teardown_tx.send(true);
            }
            Err(e) => {
                error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    info!("Starting GlobeCoin ledger service...");
    web::server::start_server(state, shutdown).await?;

    Ok(())
}
