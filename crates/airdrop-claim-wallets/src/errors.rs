use thiserror::Error;

pub type WalletResult<T> = Result<T, WalletError>;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid base58 key: {0}")]
    InvalidBase58(String),

    #[error("Invalid JSON key file: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid keypair bytes: {0}")]
    InvalidKeypair(String),
}
