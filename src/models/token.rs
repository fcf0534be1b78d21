use serde::{Deserialize, Serialize};

/// Decimals assumed for a symbol that is quoted but not listed in the catalog
pub const UNLISTED_TOKEN_DECIMALS: u8 = 9;

/// Fiat currencies offered by the mint and burn calculators
pub const FIAT_CURRENCIES: [&str; 4] = ["MYR", "USD", "JPY", "YUAN"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenDescriptor {
    pub symbol: String,  // Unique within a catalog
    pub name: String,
    pub icon: String,
    pub decimals: u8,    // Bounds the fractional digits shown for amounts
    pub address: String, // Mint address placeholder, never validated
}

impl TokenDescriptor {
    pub fn new(symbol: &str, name: &str, icon: &str, decimals: u8, address: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            decimals,
            address: address.to_string(),
        }
    }

    /// Stand-in descriptor for a symbol the catalog does not list
    pub fn unlisted(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            icon: String::new(),
            decimals: UNLISTED_TOKEN_DECIMALS,
            address: String::new(),
        }
    }
}

/// Assets accepted by the transfer form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferAsset {
    pub id: String, // Lowercase form id, e.g. "usdc"
    pub name: String,
    pub icon: String,
}

/// The set of tokens available to a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenCatalog {
    tokens: Vec<TokenDescriptor>,
}

impl TokenCatalog {
    /// Builds a catalog, keeping the first descriptor for any repeated symbol
    pub fn new(tokens: Vec<TokenDescriptor>) -> Self {
        let mut unique: Vec<TokenDescriptor> = Vec::with_capacity(tokens.len());
        for token in tokens {
            if !unique.iter().any(|t| t.symbol == token.symbol) {
                unique.push(token);
            }
        }
        Self { tokens: unique }
    }

    /// SOL, USDC, BONK and RAY
    pub fn default_swap_tokens() -> Self {
        Self::new(vec![
            TokenDescriptor::new("SOL", "Solana", "◎", 9, "So11111111111111111111111111111111111111112"),
            TokenDescriptor::new("USDC", "USD Coin", "$", 6, "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"),
            TokenDescriptor::new("BONK", "Bonk", "B", 5, "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263"),
            TokenDescriptor::new("RAY", "Raydium", "R", 6, "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R"),
        ])
    }

    pub fn get(&self, symbol: &str) -> Option<&TokenDescriptor> {
        self.tokens.iter().find(|t| t.symbol == symbol)
    }

    pub fn tokens(&self) -> &[TokenDescriptor] {
        &self.tokens
    }
}

pub fn transfer_assets() -> Vec<TransferAsset> {
    vec![
        TransferAsset {
            id: "usdc".to_string(),
            name: "USDC".to_string(),
            icon: "💵".to_string(),
        },
        TransferAsset {
            id: "usdt".to_string(),
            name: "USDT".to_string(),
            icon: "💴".to_string(),
        },
    ]
}

pub fn is_fiat_currency(code: &str) -> bool {
    FIAT_CURRENCIES.contains(&code)
}
