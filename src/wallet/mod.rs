pub mod session;
pub mod store;

pub use session::{WalletInfo, WalletSession};
pub use store::{KeyValueStore, MemoryStore, SledStore};
