use std::collections::HashMap;
use tracing::warn;

/// Multiplier used for any pair the table does not list
pub const FALLBACK_RATE: f64 = 1.0;

// Static demo rates. Directions are independent entries and do not
// invert each other (SOL-USDC × USDC-SOL ≠ 1).
const DEFAULT_RATES: [(&str, &str, f64); 12] = [
    ("SOL", "USDC", 45.12),
    ("SOL", "BONK", 38423.71),
    ("SOL", "RAY", 9.54),
    ("USDC", "SOL", 0.022),
    ("USDC", "BONK", 852.63),
    ("USDC", "RAY", 0.211),
    ("BONK", "SOL", 0.000026),
    ("BONK", "USDC", 0.00117),
    ("BONK", "RAY", 0.00025),
    ("RAY", "SOL", 0.105),
    ("RAY", "USDC", 4.74),
    ("RAY", "BONK", 4023.15),
];

/// Directional "FROM-TO" → multiplier lookup
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_rates() -> Self {
        let mut table = Self::new();
        for (from, to, rate) in DEFAULT_RATES {
            table.insert(from, to, rate);
        }
        table
    }

    pub fn pair_key(from: &str, to: &str) -> String {
        format!("{}-{}", from, to)
    }

    /// Add or replace a directional rate. Only positive finite rates are kept.
    pub fn insert(&mut self, from: &str, to: &str, rate: f64) -> bool {
        if !(rate.is_finite() && rate > 0.0) {
            warn!("Ignoring non-positive rate {} for {}", rate, Self::pair_key(from, to));
            return false;
        }
        self.rates.insert(Self::pair_key(from, to), rate);
        true
    }

    /// Listed rate for the pair, or [`FALLBACK_RATE`]. Never fails.
    pub fn rate(&self, from: &str, to: &str) -> f64 {
        self.rates
            .get(&Self::pair_key(from, to))
            .copied()
            .unwrap_or(FALLBACK_RATE)
    }
}
