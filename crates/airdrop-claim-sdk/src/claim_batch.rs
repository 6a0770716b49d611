use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Working set for one run: the fee payer plus deduplicated claimants.
///
/// Claimants keep first-seen order; the fee payer is never a claimant.
pub struct ClaimBatch {
    fee_payer: Keypair,
    claimants: Vec<Keypair>,
}

impl ClaimBatch {
    pub fn new(fee_payer: Keypair, identities: impl IntoIterator<Item = Keypair>) -> Self {
        let fee_payer_address = fee_payer.pubkey();
        let mut seen = HashSet::new();
        let mut claimants = Vec::new();

        for identity in identities {
            let address = identity.pubkey();
            if address == fee_payer_address {
                warn!("Fee payer {} listed as a claimant, excluding it", address);
                continue;
            }
            if !seen.insert(address) {
                debug!("Dropping duplicate wallet {}", address);
                continue;
            }
            claimants.push(identity);
        }

        Self {
            fee_payer,
            claimants,
        }
    }

    pub fn fee_payer(&self) -> &Keypair {
        &self.fee_payer
    }

    pub fn claimants(&self) -> &[Keypair] {
        &self.claimants
    }

    pub fn claimant_addresses(&self) -> Vec<Pubkey> {
        self.claimants.iter().map(Signer::pubkey).collect()
    }

    pub fn len(&self) -> usize {
        self.claimants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimants.is_empty()
    }

    /// Fee payer followed by every claimant
    pub fn signer_pool(&self) -> Vec<&Keypair> {
        std::iter::once(&self.fee_payer)
            .chain(self.claimants.iter())
            .collect()
    }

    /// Keep only claimants for which `keep` returns true
    pub fn retain_claimants(&mut self, mut keep: impl FnMut(&Pubkey) -> bool) {
        self.claimants.retain(|keypair| keep(&keypair.pubkey()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clone_keypair(keypair: &Keypair) -> Keypair {
        keypair.insecure_clone()
    }

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let a = Keypair::new();
        let b = Keypair::new();
        let c = Keypair::new();

        let batch = ClaimBatch::new(
            Keypair::new(),
            vec![
                clone_keypair(&b),
                clone_keypair(&a),
                clone_keypair(&b),
                clone_keypair(&c),
                clone_keypair(&a),
            ],
        );

        assert_eq!(
            batch.claimant_addresses(),
            vec![b.pubkey(), a.pubkey(), c.pubkey()]
        );
    }

    #[test]
    fn test_fee_payer_excluded() {
        let fee_payer = Keypair::new();
        let other = Keypair::new();

        let batch = ClaimBatch::new(
            clone_keypair(&fee_payer),
            vec![clone_keypair(&fee_payer), clone_keypair(&other)],
        );

        assert_eq!(batch.claimant_addresses(), vec![other.pubkey()]);
        assert_eq!(batch.fee_payer().pubkey(), fee_payer.pubkey());
    }

    #[test]
    fn test_signer_pool_starts_with_fee_payer() {
        let fee_payer = Keypair::new();
        let fee_payer_address = fee_payer.pubkey();
        let batch = ClaimBatch::new(fee_payer, vec![Keypair::new(), Keypair::new()]);

        let pool = batch.signer_pool();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool[0].pubkey(), fee_payer_address);
    }

    #[test]
    fn test_retain_claimants() {
        let keep = Keypair::new();
        let keep_address = keep.pubkey();
        let mut batch = ClaimBatch::new(Keypair::new(), vec![keep, Keypair::new()]);

        batch.retain_claimants(|address| *address == keep_address);

        assert_eq!(batch.claimant_addresses(), vec![keep_address]);
    }

    #[test]
    fn test_only_fee_payer_is_empty() {
        let fee_payer = Keypair::new();
        let batch = ClaimBatch::new(clone_keypair(&fee_payer), vec![fee_payer]);
        assert!(batch.is_empty());
    }
}
