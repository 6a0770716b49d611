/*!
# Airdrop Claim SDK

Builds one atomic transaction that claims an airdrop for many wallets at once,
with a single fee payer funding token account creation.

## Pipeline

- [`ClaimBatch`]: fee payer plus deduplicated claimant identities
- [`BatchAssembler`]: priority-fee directives, then an idempotent token
  account creation and a claim instruction per claimant
- [`SignerCoordinator`]: collects every required signature or fails with
  [`ClaimError::MissingSigner`]

Submission lives in `airdrop-claim-batch-tx`.

## Usage

```rust
use airdrop_claim_sdk::{
    AssemblerConfig, BatchAssembler, ClaimBatch, ClaimProgramConfig, SignerCoordinator,
};
use solana_sdk::{
    hash::Hash,
    signature::{Keypair, Signer},
};

let batch = ClaimBatch::new(Keypair::new(), vec![Keypair::new(), Keypair::new()]);
let assembler = BatchAssembler::new(ClaimProgramConfig::default(), AssemblerConfig::default());

let recent_blockhash = Hash::default(); // Get from RPC
let tx = assembler
    .assemble(&batch.claimant_addresses(), &batch.fee_payer().pubkey(), recent_blockhash)
    .expect("Failed to assemble batch");
let signed = SignerCoordinator::sign(tx, &batch.signer_pool(), recent_blockhash)
    .expect("Failed to sign batch");
assert!(signed.is_signed());
```
*/

mod address_finder;
mod claim_batch;
mod claim_data;
mod config;
mod error;
mod instruction_builders;
mod signer_coordinator;
mod transaction_builders;

pub use address_finder::AddressFinder;
pub use claim_batch::ClaimBatch;
pub use claim_data::*;
pub use config::*;
pub use error::{ClaimError, ClaimResult};
pub use instruction_builders::*;
pub use signer_coordinator::SignerCoordinator;
pub use transaction_builders::*;
