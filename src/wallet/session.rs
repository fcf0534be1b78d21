use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use super::store::KeyValueStore;
use crate::error::{LedgerError, LedgerResult};

pub const WALLET_ADDRESS_KEY: &str = "walletAddress";

/// Shown when no address has been stored
pub const PLACEHOLDER_WALLET_ADDRESS: &str = "0x1234...ABCD";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WalletInfo {
    pub address: String,
    pub connected: bool,
}

/// Display-only wallet state for one session, backed by an injected store
pub struct WalletSession {
    store: Arc<dyn KeyValueStore>,
    address: String,
    connected: bool,
}

impl WalletSession {
    /// Read the stored address, falling back to the placeholder
    pub fn mount(store: Arc<dyn KeyValueStore>) -> LedgerResult<Self> {
        let stored = store.get(WALLET_ADDRESS_KEY)?;
        let connected = stored.is_some();
        let address = stored.unwrap_or_else(|| PLACEHOLDER_WALLET_ADDRESS.to_string());

        info!("Wallet session mounted (connected: {})", connected);
        Ok(Self {
            store,
            address,
            connected,
        })
    }

    pub fn connect(&mut self, address: &str) -> LedgerResult<()> {
        let address = address.trim();
        if address.is_empty() {
            return Err(LedgerError::InvalidAddress("wallet address is empty".to_string()));
        }

        self.store.set(WALLET_ADDRESS_KEY, address)?;
        self.address = address.to_string();
        self.connected = true;
        info!("Wallet connected: {}", self.address);
        Ok(())
    }

    /// Clear the stored address and disconnect
    pub fn logout(&mut self) -> LedgerResult<()> {
        self.store.remove(WALLET_ADDRESS_KEY)?;
        self.address = PLACEHOLDER_WALLET_ADDRESS.to_string();
        self.connected = false;
        info!("Wallet logged out");
        Ok(())
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn info(&self) -> WalletInfo {
        WalletInfo {
            address: self.address.clone(),
            connected: self.connected,
        }
    }
}
