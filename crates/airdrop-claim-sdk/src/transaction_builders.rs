/*!
# Transaction Builders

Assembles claim batches into single unsigned transactions.

Every batch has the same shape:

1. compute-unit limit
2. compute-unit price
3. for each claimant: idempotent token account creation, then the claim

The fee payer is the message fee payer and funds token account rent; it is
never a claim target. Assembly makes no RPC calls; the caller provides the
recent blockhash and signs the result with [`crate::SignerCoordinator`].

## Usage

```rust
use airdrop_claim_sdk::{BatchAssembler, ClaimProgramConfig, AssemblerConfig};
use solana_sdk::{hash::Hash, pubkey::Pubkey};

let assembler = BatchAssembler::new(ClaimProgramConfig::default(), AssemblerConfig::default());
let fee_payer = Pubkey::new_unique();
let claimants = vec![Pubkey::new_unique(), Pubkey::new_unique()];

let tx = assembler
    .assemble(&claimants, &fee_payer, Hash::default())
    .expect("Failed to assemble batch");
assert_eq!(tx.message.instructions.len(), 6);
```
*/

use crate::{
    build_claim_ix, build_create_token_account_idempotent_ix, build_priority_fee_ixs,
    AddressFinder, AssemblerConfig, ClaimError, ClaimProgramConfig, ClaimResult,
};
use solana_sdk::{
    hash::Hash, instruction::Instruction, message::Message, pubkey::Pubkey,
    transaction::Transaction,
};
use std::collections::HashSet;
use tracing::debug;

/// Instructions emitted before the first claim pair
pub const PRIORITY_FEE_IX_COUNT: usize = 2;

/// Instructions emitted per claimant
pub const IXS_PER_CLAIMANT: usize = 2;

/// Builds claim batch transactions from a program configuration
#[derive(Debug, Clone)]
pub struct BatchAssembler {
    program: ClaimProgramConfig,
    config: AssemblerConfig,
    address_finder: AddressFinder,
}

impl BatchAssembler {
    pub fn new(program: ClaimProgramConfig, config: AssemblerConfig) -> Self {
        let address_finder = AddressFinder::from_config(&program);
        Self {
            program,
            config,
            address_finder,
        }
    }

    pub fn program(&self) -> &ClaimProgramConfig {
        &self.program
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    pub fn address_finder(&self) -> &AddressFinder {
        &self.address_finder
    }

    /// Ordered instruction list for a batch, without size checks
    pub fn assemble_instructions(
        &self,
        claimants: &[Pubkey],
        fee_payer: &Pubkey,
    ) -> ClaimResult<Vec<Instruction>> {
        let mut instructions =
            Vec::with_capacity(PRIORITY_FEE_IX_COUNT + IXS_PER_CLAIMANT * claimants.len());
        instructions.extend(build_priority_fee_ixs(&self.config.priority_fee));

        let mut seen = HashSet::with_capacity(claimants.len());
        let mut claim_pairs = 0usize;

        for claimant in claimants {
            if claimant == fee_payer {
                debug!("Skipping fee payer {} in claimant list", claimant);
                continue;
            }
            if !seen.insert(*claimant) {
                debug!("Skipping duplicate claimant {}", claimant);
                continue;
            }

            let (token_account, _) = self.address_finder.find_token_account_address(claimant)?;

            instructions.push(build_create_token_account_idempotent_ix(
                &self.program,
                fee_payer,
                claimant,
                &token_account,
            ));
            instructions.push(build_claim_ix(&self.program, claimant, &token_account)?);
            claim_pairs += 1;

            debug!("Added claim pair for {} (token account {})", claimant, token_account);
        }

        if claim_pairs == 0 {
            return Err(ClaimError::DegenerateBatch);
        }

        Ok(instructions)
    }

    /// Unsigned transaction claiming for every claimant, paid by `fee_payer`
    pub fn assemble(
        &self,
        claimants: &[Pubkey],
        fee_payer: &Pubkey,
        recent_blockhash: Hash,
    ) -> ClaimResult<Transaction> {
        let instructions = self.assemble_instructions(claimants, fee_payer)?;

        let message = Message::new_with_blockhash(&instructions, Some(fee_payer), &recent_blockhash);
        let transaction = Transaction::new_unsigned(message);
        let size = serialized_size(&transaction)?;
        if size > self.config.max_transaction_size_bytes {
            return Err(ClaimError::TransactionTooLarge {
                size,
                max: self.config.max_transaction_size_bytes,
            });
        }

        Ok(transaction)
    }

    /// Split claimants into consecutive groups that each fit one transaction.
    ///
    /// The fee payer and repeated claimants are dropped before packing.
    pub fn split_into_batches(
        &self,
        claimants: &[Pubkey],
        fee_payer: &Pubkey,
    ) -> ClaimResult<Vec<Vec<Pubkey>>> {
        let mut seen = HashSet::with_capacity(claimants.len());
        let unique: Vec<Pubkey> = claimants
            .iter()
            .filter(|claimant| *claimant != fee_payer && seen.insert(**claimant))
            .copied()
            .collect();

        if unique.is_empty() {
            return Err(ClaimError::DegenerateBatch);
        }

        let mut batches: Vec<Vec<Pubkey>> = Vec::new();
        let mut current: Vec<Pubkey> = Vec::new();

        for claimant in unique {
            current.push(claimant);
            match self.assemble(&current, fee_payer, Hash::default()) {
                Ok(_) => {}
                Err(ClaimError::TransactionTooLarge { .. }) if current.len() > 1 => {
                    current.pop();
                    batches.push(std::mem::take(&mut current));
                    current.push(claimant);
                    // a lone claimant that still does not fit is a configuration problem
                    self.assemble(&current, fee_payer, Hash::default())?;
                }
                Err(e) => return Err(e),
            }
        }
        batches.push(current);

        debug!("Split claimants into {} batch(es)", batches.len());
        Ok(batches)
    }
}

/// Wire size of a legacy transaction carrying `message` with all signatures present
pub fn serialized_transaction_size(message: &Message) -> ClaimResult<usize> {
    serialized_size(&Transaction::new_unsigned(message.clone()))
}

// Unsigned transactions carry default signatures, so the size matches the signed wire form.
fn serialized_size(transaction: &Transaction) -> ClaimResult<usize> {
    bincode::serialized_size(transaction)
        .map(|size| size as usize)
        .map_err(|e| ClaimError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SignerCoordinator;
    use solana_sdk::{
        packet::PACKET_DATA_SIZE,
        signature::{Keypair, Signer, SIGNATURE_BYTES},
    };

    fn assembler() -> BatchAssembler {
        BatchAssembler::new(ClaimProgramConfig::default(), AssemblerConfig::default())
    }

    #[test]
    fn test_instruction_count() {
        let fee_payer = Pubkey::new_unique();
        for count in 1..=3 {
            let claimants: Vec<Pubkey> = (0..count).map(|_| Pubkey::new_unique()).collect();
            let ixs = assembler()
                .assemble_instructions(&claimants, &fee_payer)
                .unwrap();
            assert_eq!(ixs.len(), 2 + 2 * count);
        }
    }

    #[test]
    fn test_empty_claimants_is_degenerate() {
        let result = assembler().assemble(&[], &Pubkey::new_unique(), Hash::default());
        assert_eq!(result.unwrap_err(), ClaimError::DegenerateBatch);
    }

    #[test]
    fn test_fee_payer_only_is_degenerate() {
        let fee_payer = Pubkey::new_unique();
        let result = assembler().assemble(&[fee_payer], &fee_payer, Hash::default());
        assert_eq!(result.unwrap_err(), ClaimError::DegenerateBatch);
    }

    #[test]
    fn test_fee_payer_is_skipped_among_claimants() {
        let fee_payer = Pubkey::new_unique();
        let claimant = Pubkey::new_unique();

        let ixs = assembler()
            .assemble_instructions(&[fee_payer, claimant, fee_payer], &fee_payer)
            .unwrap();

        assert_eq!(ixs.len(), 4);
        assert!(ixs[3]
            .accounts
            .iter()
            .all(|meta| !(meta.pubkey == fee_payer && meta.is_signer)));
    }

    #[test]
    fn test_duplicate_claimants_are_collapsed() {
        let fee_payer = Pubkey::new_unique();
        let claimant = Pubkey::new_unique();

        let ixs = assembler()
            .assemble_instructions(&[claimant, claimant], &fee_payer)
            .unwrap();
        assert_eq!(ixs.len(), 4);
    }

    #[test]
    fn test_fee_payer_is_message_payer() {
        let fee_payer = Keypair::new();
        let tx = assembler()
            .assemble(&[Pubkey::new_unique()], &fee_payer.pubkey(), Hash::default())
            .unwrap();

        assert_eq!(tx.message.account_keys[0], fee_payer.pubkey());
        assert_eq!(tx.message.header.num_required_signatures, 2);
        assert_eq!(tx.signatures.len(), 2);
    }

    #[test]
    fn test_blockhash_is_set() {
        let blockhash = Hash::new_unique();
        let tx = assembler()
            .assemble(&[Pubkey::new_unique()], &Pubkey::new_unique(), blockhash)
            .unwrap();
        assert_eq!(tx.message.recent_blockhash, blockhash);
    }

    #[test]
    fn test_oversized_batch_rejected() {
        let fee_payer = Pubkey::new_unique();
        let claimants: Vec<Pubkey> = (0..20).map(|_| Pubkey::new_unique()).collect();

        let result = assembler().assemble(&claimants, &fee_payer, Hash::default());
        match result {
            Err(ClaimError::TransactionTooLarge { size, max }) => {
                assert!(size > max);
                assert_eq!(max, PACKET_DATA_SIZE);
            }
            other => panic!("expected TransactionTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_split_into_batches_fits_every_batch() {
        let assembler = assembler();
        let fee_payer = Pubkey::new_unique();
        let mut claimants: Vec<Pubkey> = (0..20).map(|_| Pubkey::new_unique()).collect();
        let first = claimants[0];
        claimants.push(fee_payer);
        claimants.push(first);

        let batches = assembler.split_into_batches(&claimants, &fee_payer).unwrap();

        assert!(batches.len() > 1);
        assert_eq!(batches.iter().map(Vec::len).sum::<usize>(), 20);
        for batch in &batches {
            assert!(!batch.contains(&fee_payer));
            assert!(assembler.assemble(batch, &fee_payer, Hash::default()).is_ok());
        }

        let flattened: Vec<Pubkey> = batches.into_iter().flatten().collect();
        assert_eq!(flattened, claimants[..20].to_vec());
    }

    #[test]
    fn test_split_single_small_batch() {
        let fee_payer = Pubkey::new_unique();
        let claimants = vec![Pubkey::new_unique(), Pubkey::new_unique()];

        let batches = assembler()
            .split_into_batches(&claimants, &fee_payer)
            .unwrap();
        assert_eq!(batches, vec![claimants]);
    }

    #[test]
    fn test_split_rejects_claimant_that_never_fits() {
        let assembler = BatchAssembler::new(
            ClaimProgramConfig::default(),
            AssemblerConfig {
                max_transaction_size_bytes: 200,
                ..Default::default()
            },
        );

        let result = assembler.split_into_batches(&[Pubkey::new_unique()], &Pubkey::new_unique());
        assert!(matches!(
            result,
            Err(ClaimError::TransactionTooLarge { .. })
        ));
    }

    #[test]
    fn test_serialized_size_matches_bincode_layout() {
        let fee_payer = Keypair::new();
        let claimant = Keypair::new();
        let tx = assembler()
            .assemble(&[claimant.pubkey()], &fee_payer.pubkey(), Hash::default())
            .unwrap();

        let size = serialized_transaction_size(&tx.message).unwrap();
        assert_eq!(size, 1 + 2 * SIGNATURE_BYTES + tx.message.serialize().len());

        let signed = SignerCoordinator::sign(tx, &[&fee_payer, &claimant], Hash::default()).unwrap();
        assert_eq!(bincode::serialize(&signed).unwrap().len(), size);
    }
}
