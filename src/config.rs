use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub api_host: String,
    pub api_port: u16,

    // Mock transaction history
    pub mock_transaction_count: usize,
    pub mock_max_age_days: u32,
    pub mock_rng_seed: Option<u64>, // Fixed seed for reproducible demo data
    pub transactions_page_size: i64,

    // Simulated network latency
    pub fetch_delay_ms: u64,
    pub transfer_delay_ms: u64,
    pub swap_delay_ms: u64,

    pub wallet_store_path: Option<PathBuf>, // Unset keeps the wallet address in memory only
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 3000,
            mock_transaction_count: 20,
            mock_max_age_days: 14,
            mock_rng_seed: None,
            transactions_page_size: 5,
            fetch_delay_ms: 800,
            transfer_delay_ms: 1500,
            swap_delay_ms: 2000,
            wallet_store_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            api_host: env::var("API_HOST").unwrap_or(defaults.api_host),
            api_port: parse_var("API_PORT", defaults.api_port)?,

            mock_transaction_count: parse_var("MOCK_TRANSACTION_COUNT", defaults.mock_transaction_count)?,
            mock_max_age_days: parse_var("MOCK_MAX_AGE_DAYS", defaults.mock_max_age_days)?,
            mock_rng_seed: env::var("MOCK_RNG_SEED")
                .ok()
                .map(|v| v.trim().parse::<u64>())
                .transpose()
                .context("Failed to parse MOCK_RNG_SEED as integer")?,
            transactions_page_size: parse_var("TRANSACTIONS_PAGE_SIZE", defaults.transactions_page_size)?,

            fetch_delay_ms: parse_var("FETCH_DELAY_MS", defaults.fetch_delay_ms)?,
            transfer_delay_ms: parse_var("TRANSFER_DELAY_MS", defaults.transfer_delay_ms)?,
            swap_delay_ms: parse_var("SWAP_DELAY_MS", defaults.swap_delay_ms)?,

            wallet_store_path: env::var("WALLET_STORE_PATH").ok().map(PathBuf::from),
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Failed to parse {}", name)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.api_port, 3000);
        assert_eq!(config.mock_transaction_count, 20);
        assert_eq!(config.mock_max_age_days, 14);
        assert_eq!(config.transactions_page_size, 5);
        assert_eq!(config.swap_delay_ms, 2000);
        assert!(config.wallet_store_path.is_none());
    }

    #[test]
    fn test_parse_var_falls_back_when_unset() {
        let value: u64 = parse_var("GLOBECOIN_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("GLOBECOIN_TEST_BAD_PORT", "not-a-port");
        let parsed: Result<u16> = parse_var("GLOBECOIN_TEST_BAD_PORT", 3000);
        assert!(parsed.is_err());
        env::remove_var("GLOBECOIN_TEST_BAD_PORT");
    }
}
