use crate::{ClaimError, ClaimResult};
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use std::collections::HashMap;
use tracing::debug;

/// Matches a transaction's required signers against a pool of identities and signs it
pub struct SignerCoordinator;

impl SignerCoordinator {
    /// Distinct addresses that must sign `transaction`, fee payer first
    pub fn required_signers(transaction: &Transaction) -> Vec<Pubkey> {
        let num_required = transaction.message.header.num_required_signatures as usize;
        transaction
            .message
            .account_keys
            .iter()
            .take(num_required)
            .copied()
            .collect()
    }

    /// Sign every required position of `transaction` with keys from `identities`.
    ///
    /// Either every required signature is produced or nothing is signed.
    pub fn sign(
        mut transaction: Transaction,
        identities: &[&Keypair],
        recent_blockhash: Hash,
    ) -> ClaimResult<Transaction> {
        let pool: HashMap<Pubkey, &Keypair> = identities
            .iter()
            .map(|keypair| (keypair.pubkey(), *keypair))
            .collect();

        let signers = Self::required_signers(&transaction)
            .into_iter()
            .map(|address| {
                pool.get(&address)
                    .copied()
                    .ok_or(ClaimError::MissingSigner { address })
            })
            .collect::<ClaimResult<Vec<&Keypair>>>()?;

        transaction
            .try_sign(signers.as_slice(), recent_blockhash)
            .map_err(|e| ClaimError::Signing(e.to_string()))?;

        debug!("Signed transaction with {} signer(s)", signers.len());
        Ok(transaction)
    }
}
