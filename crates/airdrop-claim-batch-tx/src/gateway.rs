use crate::SubmissionResult;
use async_trait::async_trait;
use solana_sdk::{hash::Hash, signature::Signature, transaction::Transaction};

/// Broadcasts signed transactions and waits for the ledger to confirm them
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Blockhash to sign the next transaction with
    async fn latest_blockhash(&self) -> SubmissionResult<Hash>;

    /// Broadcast `transaction` and wait for confirmation.
    ///
    /// Returns the transaction signature once confirmed,
    /// [`crate::SubmissionError::Rejected`] when the ledger refused it, or
    /// [`crate::SubmissionError::Unconfirmed`] when the outcome is unknown.
    async fn submit(&self, transaction: &Transaction) -> SubmissionResult<Signature>;
}
