use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

pub type ClaimResult<T> = Result<T, ClaimError>;

/// Errors raised while assembling or signing a claim batch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    #[error("No claim instructions in batch: every claimant was skipped or the list was empty")]
    DegenerateBatch,

    #[error("Missing key material for required signer {address}")]
    MissingSigner { address: Pubkey },

    #[error("No valid token account address for owner {owner} and mint {mint}")]
    Derivation { owner: Pubkey, mint: Pubkey },

    #[error("Transaction too large: {size} bytes (max: {max})")]
    TransactionTooLarge { size: usize, max: usize },

    #[error("Failed to sign transaction: {0}")]
    Signing(String),

    #[error("Invalid instruction data: {0}")]
    InvalidInstructionData(String),

    #[error("Failed to serialize transaction: {0}")]
    Serialization(String),
}

impl ClaimError {
    /// Address this error is about, when there is one
    pub fn address(&self) -> Option<Pubkey> {
        match self {
            ClaimError::MissingSigner { address } => Some(*address),
            ClaimError::Derivation { owner, .. } => Some(*owner),
            _ => None,
        }
    }
}
