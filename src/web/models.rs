//! Request and Response DTOs for the Web API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ledger::{LogState, TransactionPage};
use crate::models::{TokenDescriptor, Transaction, TransactionType, TransferAsset};

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Transactions
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct PageNavQuery {
    pub page_size: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub short_id: String,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub label: String,
    pub amount: f64,
    pub amount_display: String,
    pub timestamp: DateTime<Utc>,
    pub timestamp_display: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id.clone(),
            short_id: tx.short_id(),
            tx_type: tx.tx_type,
            label: tx.tx_type.to_string(),
            amount: tx.amount,
            amount_display: tx.amount_display(),
            timestamp: tx.timestamp,
            timestamp_display: tx.timestamp_display(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub status: LogState,
    pub transactions: Vec<TransactionRow>,
    pub page: usize,
    pub page_size: i64,
    pub total_pages: usize,
    pub total_items: usize,
    pub loading: bool,
}

impl TransactionsResponse {
    pub fn from_page(status: LogState, page: TransactionPage) -> Self {
        Self {
            status,
            transactions: page.items.iter().map(TransactionRow::from).collect(),
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
            total_items: page.total_items,
            loading: page.loading,
        }
    }
}

// ============================================================================
// Tokens & Swap
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TokensResponse {
    pub tokens: Vec<TokenDescriptor>,
    pub slippage_options: Vec<f64>,
    pub default_slippage: f64,
    pub transfer_assets: Vec<TransferAsset>,
    pub fiat_currencies: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    pub from: String,
    pub to: String,
    pub amount: Option<f64>,
    pub slippage: Option<f64>,
    #[serde(default)]
    pub flip: bool, // Reverse the pair, carrying the quoted output over as input
}

#[derive(Debug, Deserialize)]
pub struct SwapRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub slippage: Option<f64>,
}

// ============================================================================
// Mint & Burn
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub coin_value: String,
}

// ============================================================================
// Wallet
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ConnectRequest {
    pub address: String,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}
