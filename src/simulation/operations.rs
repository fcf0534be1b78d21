//! Simulated wallet operations.
//!
//! Nothing here touches a ledger: each operation validates its input, waits
//! out a fixed delay and reports success. An abandoned delay leaves no trace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{info, warn};

use super::delay::{DelayOutcome, SimulatedDelay};
use crate::error::{LedgerError, LedgerResult};
use crate::models::token::{is_fiat_currency, transfer_assets};
use crate::swap::SwapQuote;

/// Value shown by the mint and burn calculators for any complete input
pub const PLACEHOLDER_COIN_VALUE: &str = "123.45";

#[derive(Debug, Clone, Deserialize)]
pub struct TransferRequest {
    pub receiver_address: String,
    pub amount: f64,
    pub asset: String, // Transfer asset id, "usdc" or "usdt"
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    pub id: String,
    pub receiver_address: String,
    pub amount: f64,
    pub asset: String,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SwapReceipt {
    pub id: String,
    pub from_symbol: String,
    pub to_symbol: String,
    pub from_amount: f64,
    pub to_amount_display: String,
    pub message: String,
    pub completed_at: DateTime<Utc>,
}

fn validate_amount(amount: f64) -> LedgerResult<f64> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(LedgerError::InvalidAmount(format!("{} (must be greater than zero)", amount)))
    }
}

pub async fn simulate_transfer(
    request: TransferRequest,
    delay: SimulatedDelay,
    teardown: &mut watch::Receiver<bool>,
) -> LedgerResult<TransferReceipt> {
    let receiver_address = request.receiver_address.trim().to_string();
    if receiver_address.is_empty() {
        return Err(LedgerError::InvalidAddress("receiver address is empty".to_string()));
    }
    let amount = validate_amount(request.amount)?;
    let asset = request.asset.trim().to_lowercase();
    if !transfer_assets().iter().any(|a| a.id == asset) {
        return Err(LedgerError::UnsupportedAsset(request.asset));
    }

    info!("Transferring {} {} to {}", amount, asset, receiver_address);
    if delay.wait_or_abandon(teardown).await == DelayOutcome::Abandoned {
        warn!("Transfer to {} abandoned before completion", receiver_address);
        return Err(LedgerError::OperationAbandoned("transfer".to_string()));
    }

    Ok(TransferReceipt {
        id: uuid::Uuid::new_v4().to_string(),
        receiver_address,
        amount,
        asset,
        completed_at: Utc::now(),
    })
}

/// Execute a previously built quote. Requires a connected wallet.
pub async fn simulate_swap(
    quote: &SwapQuote,
    wallet_connected: bool,
    delay: SimulatedDelay,
    teardown: &mut watch::Receiver<bool>,
) -> LedgerResult<SwapReceipt> {
    if !wallet_connected {
        return Err(LedgerError::WalletNotConnected);
    }
    validate_amount(quote.from_amount)?;

    info!(
        "Swapping {} {} for {} {}",
        quote.from_amount, quote.from_symbol, quote.to_amount_display, quote.to_symbol
    );
    if delay.wait_or_abandon(teardown).await == DelayOutcome::Abandoned {
        warn!("Swap {} -> {} abandoned before completion", quote.from_symbol, quote.to_symbol);
        return Err(LedgerError::OperationAbandoned("swap".to_string()));
    }

    Ok(SwapReceipt {
        id: uuid::Uuid::new_v4().to_string(),
        from_symbol: quote.from_symbol.clone(),
        to_symbol: quote.to_symbol.clone(),
        from_amount: quote.from_amount,
        to_amount_display: quote.to_amount_display.clone(),
        message: format!(
            "Swap successful! {} {} swapped for {} {}",
            quote.from_amount, quote.from_symbol, quote.to_amount_display, quote.to_symbol
        ),
        completed_at: Utc::now(),
    })
}

/// Mint/burn calculator: the placeholder value once both fields are filled
/// in, an empty string otherwise.
pub fn calculate_coin_value(amount: &str, currency: &str) -> LedgerResult<String> {
    let (amount, currency) = (amount.trim(), currency.trim());
    if amount.is_empty() || currency.is_empty() {
        return Ok(String::new());
    }
    if !is_fiat_currency(currency) {
        return Err(LedgerError::UnsupportedAsset(currency.to_string()));
    }
    Ok(PLACEHOLDER_COIN_VALUE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swap::{SwapQuoter, DEFAULT_SLIPPAGE_PERCENT};
    use std::time::Duration;

    fn transfer(receiver: &str, amount: f64, asset: &str) -> TransferRequest {
        TransferRequest {
            receiver_address: receiver.to_string(),
            amount,
            asset: asset.to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_transfer_resolves_after_delay() {
        let (_tx, mut rx) = watch::channel(false);
        let start = tokio::time::Instant::now();

        let receipt = simulate_transfer(transfer(" 0xreceiver ", 25.5, "USDC"), SimulatedDelay::from_millis(1500), &mut rx)
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert_eq!(receipt.receiver_address, "0xreceiver");
        assert_eq!(receipt.asset, "usdc");
        assert_eq!(receipt.amount, 25.5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transfer_validation() {
        let (_tx, mut rx) = watch::channel(false);
        let delay = SimulatedDelay::from_millis(1500);

        let err = simulate_transfer(transfer("", 1.0, "usdc"), delay, &mut rx).await.unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAddress(_)));

        let err = simulate_transfer(transfer("0xabc", 0.0, "usdc"), delay, &mut rx).await.unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));

        let err = simulate_transfer(transfer("0xabc", 1.0, "dai"), delay, &mut rx).await.unwrap_err();
        assert_eq!(err, LedgerError::UnsupportedAsset("dai".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transfer_abandoned_on_teardown() {
        let (tx, mut rx) = watch::channel(false);
        let pending = tokio::spawn(async move {
            simulate_transfer(transfer("0xabc", 1.0, "usdt"), SimulatedDelay::from_millis(1500), &mut rx).await
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        tx.send(true).unwrap();

        let err = pending.await.unwrap().unwrap_err();
        assert_eq!(err, LedgerError::OperationAbandoned("transfer".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_swap_requires_connected_wallet() {
        let (_tx, mut rx) = watch::channel(false);
        let quote = SwapQuoter::with_defaults()
            .build_quote("SOL", "USDC", 2.0, DEFAULT_SLIPPAGE_PERCENT)
            .unwrap();

        let err = simulate_swap(&quote, false, SimulatedDelay::from_millis(2000), &mut rx).await.unwrap_err();
        assert_eq!(err, LedgerError::WalletNotConnected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_swap_success_message() {
        let (_tx, mut rx) = watch::channel(false);
        let quote = SwapQuoter::with_defaults()
            .build_quote("SOL", "USDC", 2.0, DEFAULT_SLIPPAGE_PERCENT)
            .unwrap();

        let receipt = simulate_swap(&quote, true, SimulatedDelay::from_millis(2000), &mut rx).await.unwrap();
        assert_eq!(receipt.message, "Swap successful! 2 SOL swapped for 90.2400 USDC");
    }

    #[tokio::test(start_paused = true)]
    async fn test_swap_rejects_zero_amount() {
        let (_tx, mut rx) = watch::channel(false);
        let quote = SwapQuoter::with_defaults()
            .build_quote("SOL", "USDC", 0.0, DEFAULT_SLIPPAGE_PERCENT)
            .unwrap();

        let err = simulate_swap(&quote, true, SimulatedDelay::from_millis(2000), &mut rx).await.unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
    }

    #[test]
    fn test_coin_value_calculator() {
        assert_eq!(calculate_coin_value("100", "MYR").unwrap(), "123.45");
        assert_eq!(calculate_coin_value("", "MYR").unwrap(), "");
        assert_eq!(calculate_coin_value("100", "").unwrap(), "");
        assert_eq!(
            calculate_coin_value("100", "EUR").unwrap_err(),
            LedgerError::UnsupportedAsset("EUR".to_string())
        );
    }
}
