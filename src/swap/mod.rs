pub mod quote;
pub mod rates;

pub use quote::{SwapQuote, SwapQuoter, DEFAULT_SLIPPAGE_PERCENT, SLIPPAGE_OPTIONS};
