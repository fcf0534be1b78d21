use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::debug;

use super::rates::RateTable;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{TokenCatalog, TokenDescriptor};

/// Slippage tolerances offered to the user, in percent
pub const SLIPPAGE_OPTIONS: [f64; 4] = [0.1, 0.5, 1.0, 3.0];
pub const DEFAULT_SLIPPAGE_PERCENT: f64 = 0.5;

/// Fractional digits for a destination amount: 4 for tokens with more than
/// 2 decimals, otherwise the token's own precision.
pub fn rounding_digits(decimals: u8) -> usize {
    if decimals > 2 {
        4
    } else {
        decimals as usize
    }
}

/// Fixed-point rendering of the exact binary value, with exact ties rounded
/// away from zero (0.125 → "0.13").
pub fn format_fixed(value: f64, digits: usize) -> String {
    let scale = digits as u32;
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded = exact.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(scale);
            rounded.to_string()
        }
        // Out of Decimal's range
        None => format!("{:.*}", digits, value),
    }
}

pub fn round_to(value: f64, digits: usize) -> f64 {
    format_fixed(value, digits).parse().unwrap_or(value)
}

/// Mock price impact: `0.1 + amount / 1000`, two decimals, "0.00" for
/// non-positive amounts.
pub fn price_impact(from_amount: f64) -> String {
    if !(from_amount > 0.0) {
        return "0.00".to_string();
    }
    format_fixed(0.1 + from_amount / 1000.0, 2)
}

pub fn validate_slippage(percent: f64) -> LedgerResult<f64> {
    SLIPPAGE_OPTIONS
        .iter()
        .copied()
        .find(|option| (option - percent).abs() < 1e-9)
        .ok_or(LedgerError::UnsupportedSlippage(percent))
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SwapQuote {
    pub from_symbol: String,
    pub to_symbol: String,
    pub from_amount: f64,
    pub to_amount: f64,
    pub to_amount_display: String,       // Fixed digits, e.g. "90.2400"
    pub effective_rate: Option<String>,  // to/from with 4 decimals, only for positive amounts
    pub price_impact_percent: String,
    pub slippage_percent: f64,
    pub minimum_received: f64,
}

/// Quotes swaps from a static rate table over a token catalog
#[derive(Debug, Clone)]
pub struct SwapQuoter {
    catalog: TokenCatalog,
    rates: RateTable,
}

impl SwapQuoter {
    pub fn new(catalog: TokenCatalog, rates: RateTable) -> Self {
        Self { catalog, rates }
    }

    /// Demo catalog with the built-in rate table
    pub fn with_defaults() -> Self {
        Self::new(TokenCatalog::default_swap_tokens(), RateTable::with_default_rates())
    }

    pub fn catalog(&self) -> &TokenCatalog {
        &self.catalog
    }

    pub fn rate(&self, from: &str, to: &str) -> f64 {
        self.rates.rate(from, to)
    }

    // Blank means nothing selected. Unlisted symbols still quote at the fallback rate.
    fn resolve(&self, symbol: &str) -> Option<TokenDescriptor> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return None;
        }
        Some(
            self.catalog
                .get(symbol)
                .cloned()
                .unwrap_or_else(|| TokenDescriptor::unlisted(symbol)),
        )
    }

    /// Destination amount as shown in the read-only field: "0" when there is
    /// nothing to quote, otherwise rounded to the destination's display digits.
    pub fn quote_display(&self, from: &str, to: &str, from_amount: f64) -> String {
        let (from_token, to_token) = match (self.resolve(from), self.resolve(to)) {
            (Some(f), Some(t)) => (f, t),
            _ => return "0".to_string(),
        };
        if !(from_amount > 0.0) {
            return "0".to_string();
        }

        let rate = self.rate(&from_token.symbol, &to_token.symbol);
        format_fixed(from_amount * rate, rounding_digits(to_token.decimals))
    }

    pub fn quote(&self, from: &str, to: &str, from_amount: f64) -> f64 {
        self.quote_display(from, to, from_amount).parse().unwrap_or(0.0)
    }

    /// Full quote including price impact and the slippage-adjusted minimum
    pub fn build_quote(&self, from: &str, to: &str, from_amount: f64, slippage_percent: f64) -> LedgerResult<SwapQuote> {
        let slippage_percent = validate_slippage(slippage_percent)?;
        let to_amount_display = self.quote_display(from, to, from_amount);
        let to_amount = self.quote(from, to, from_amount);

        let digits = self
            .resolve(to)
            .map(|t| rounding_digits(t.decimals))
            .unwrap_or(0);
        let effective_rate = if from_amount > 0.0 {
            Some(format_fixed(to_amount / from_amount, 4))
        } else {
            None
        };

        let quote = SwapQuote {
            from_symbol: from.trim().to_string(),
            to_symbol: to.trim().to_string(),
            from_amount,
            to_amount,
            to_amount_display,
            effective_rate,
            price_impact_percent: price_impact(from_amount),
            slippage_percent,
            minimum_received: round_to(to_amount * (1.0 - slippage_percent / 100.0), digits),
        };

        debug!(
            "Quoted {} {} -> {} {} (impact {}%)",
            quote.from_amount, quote.from_symbol, quote.to_amount_display, quote.to_symbol, quote.price_impact_percent
        );
        Ok(quote)
    }

    /// Reverse the pair: the previous destination amount becomes the new
    /// source amount and the quote is recomputed.
    pub fn flip(&self, quote: &SwapQuote) -> LedgerResult<SwapQuote> {
        self.build_quote(&quote.to_symbol, &quote.from_symbol, quote.to_amount, quote.slippage_percent)
    }
}
