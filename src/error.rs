use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Invalid page size: {0} (must be greater than zero)")]
    InvalidPageSize(i64),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Unsupported asset: {0}")]
    UnsupportedAsset(String),

    #[error("Unsupported slippage tolerance: {0}%")]
    UnsupportedSlippage(f64),

    #[error("Wallet not connected")]
    WalletNotConnected,

    #[error("Operation abandoned: {0}")]
    OperationAbandoned(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl LedgerError {
    /// Input-validation errors are the caller's to correct; everything else is
    /// a local, recoverable failure of a simulated operation or the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidPageSize(_)
                | Self::InvalidAmount(_)
                | Self::InvalidAddress(_)
                | Self::UnsupportedAsset(_)
                | Self::UnsupportedSlippage(_)
        )
    }
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
