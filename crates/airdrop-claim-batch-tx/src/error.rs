use solana_sdk::signature::Signature;
use thiserror::Error;

pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Errors that can occur while broadcasting and confirming a transaction
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The ledger refused the transaction; nothing was applied
    #[error("Transaction rejected: {reason}")]
    Rejected { reason: String },

    /// Broadcast succeeded but confirmation was not observed; the transaction may still land
    #[error("Transaction {signature} unconfirmed: on-chain state unknown, re-query the signature before retrying")]
    Unconfirmed { signature: Signature },

    #[error("RPC client error: {0}")]
    RpcClient(#[from] solana_client::client_error::ClientError),

    #[error("Broadcast failed after {retries} retries: {last_error}")]
    RetriesExhausted { retries: usize, last_error: String },
}

impl SubmissionError {
    /// Whether the transaction may have been applied despite the error.
    ///
    /// A transport failure does not prove the node never received the transaction.
    pub fn is_ambiguous(&self) -> bool {
        matches!(
            self,
            SubmissionError::Unconfirmed { .. } | SubmissionError::RetriesExhausted { .. }
        )
    }
}
