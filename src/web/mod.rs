//! Web API module for the GlobeCoin demo
//!
//! Serves the data behind each screen (transactions, swap, transfer, mint,
//! burn, settings) as JSON for the presentation layer.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;

use std::sync::Arc;
use tokio::sync::{watch, Mutex, RwLock};

use crate::config::Config;
use crate::ledger::TransactionLog;
use crate::simulation::SimulatedDelay;
use crate::swap::SwapQuoter;
use crate::wallet::WalletSession;

/// Shared application state for all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,
    /// Mock transaction history for this session
    pub transactions: Arc<RwLock<TransactionLog>>,
    /// Static-rate swap quoter
    pub quoter: Arc<SwapQuoter>,
    /// Wallet address placeholder and connection flag
    pub wallet: Arc<Mutex<WalletSession>>,
    /// Flips to `true` when the session is torn down; pending simulated
    /// operations are abandoned
    pub teardown: watch::Receiver<bool>,
}

impl AppState {
    pub fn new(config: Arc<Config>, wallet: WalletSession, teardown: watch::Receiver<bool>) -> Self {
        Self {
            config,
            transactions: Arc::new(RwLock::new(TransactionLog::new())),
            quoter: Arc::new(SwapQuoter::with_defaults()),
            wallet: Arc::new(Mutex::new(wallet)),
            teardown,
        }
    }

    pub fn transfer_delay(&self) -> SimulatedDelay {
        SimulatedDelay::from_millis(self.config.transfer_delay_ms)
    }

    pub fn swap_delay(&self) -> SimulatedDelay {
        SimulatedDelay::from_millis(self.config.swap_delay_ms)
    }
}
