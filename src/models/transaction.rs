use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Mint,
    Burn,
    Transfer,
    Swap,
}

impl TransactionType {
    pub const ALL: [TransactionType; 4] = [Self::Mint, Self::Burn, Self::Transfer, Self::Swap];

    /// Lowercase label, the form search terms are matched against
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mint => "mint",
            Self::Burn => "burn",
            Self::Transfer => "transfer",
            Self::Swap => "swap",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mint => write!(f, "Mint"),
            Self::Burn => write!(f, "Burn"),
            Self::Transfer => write!(f, "Transfer"),
            Self::Swap => write!(f, "Swap"),
        }
    }
}

/// A single record of the mock transaction history.
/// Records are created in one batch and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,                  // Opaque "0x" + 8 hex digit token, unique within a log
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub amount: f64,                 // Non-negative, 2 fractional digits
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(id: String, tx_type: TransactionType, amount: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            tx_type,
            amount,
            timestamp,
        }
    }

    /// Shortest decimal form of the amount (`12.5`, `300`), used for search matching
    pub fn amount_search_text(&self) -> String {
        self.amount.to_string()
    }

    /// Amount with exactly two fractional digits, as shown in the history table
    pub fn amount_display(&self) -> String {
        format!("{:.2}", self.amount)
    }

    /// `MM-DD HH:MM`
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%m-%d %H:%M").to_string()
    }

    pub fn short_id(&self) -> String {
        let prefix: String = self.id.chars().take(6).collect();
        format!("{}...", prefix)
    }

    /// Case-insensitive match against id, amount or type label.
    /// `term` must already be lowercased.
    pub fn matches(&self, term: &str) -> bool {
        self.id.to_lowercase().contains(term)
            || self.amount_search_text().contains(term)
            || self.tx_type.as_str().contains(term)
    }
}
