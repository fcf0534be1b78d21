pub mod token;
pub mod transaction;

// Re-export commonly used types
pub use token::{TokenCatalog, TokenDescriptor, TransferAsset};
pub use transaction::{Transaction, TransactionType};
