pub mod delay;
pub mod operations;

pub use delay::{DelayOutcome, SimulatedDelay};
pub use operations::{
    calculate_coin_value, simulate_swap, simulate_transfer, SwapReceipt, TransferReceipt, TransferRequest,
};
