pub mod generator;
pub mod loader;
pub mod log;
pub mod query;

pub use log::{LogState, TransactionLog, TransactionPage};
