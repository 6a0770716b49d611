/*!
# Airdrop Claim Batch Transactions

Signs and submits airdrop claim batches built by `airdrop-claim-sdk`, with
retry on transport errors and confirmation tracking that keeps a ledger
rejection apart from an unknown outcome.

## Quick Start

```rust,no_run
use airdrop_claim_batch_tx::{BatchClaimSubmitter, RpcSubmissionGateway};
use airdrop_claim_sdk::{AssemblerConfig, BatchAssembler, ClaimBatch, ClaimProgramConfig};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::signature::Keypair;
use std::sync::Arc;

# async fn example() -> Result<(), Box<dyn std::error::Error>> {
let rpc_client = Arc::new(RpcClient::new("https://api.devnet.solana.com".to_string()));
let gateway = RpcSubmissionGateway::new(rpc_client);
let assembler = BatchAssembler::new(ClaimProgramConfig::default(), AssemblerConfig::default());

let batch = ClaimBatch::new(Keypair::new(), vec![Keypair::new(), Keypair::new()]);
let report = BatchClaimSubmitter::new(gateway, assembler).run(&batch).await?;
println!("{} of {} transaction(s) confirmed", report.confirmed_count(), report.batches.len());
# Ok(())
# }
```
*/

mod client;
mod config;
mod error;
mod gateway;
mod submitter;

pub use client::RpcSubmissionGateway;
pub use config::GatewayConfig;
pub use error::{SubmissionError, SubmissionResult};
pub use gateway::SubmissionGateway;
pub use submitter::{BatchClaimSubmitter, BatchOutcome, BatchReport, ClaimRunReport};

// Re-export key Solana types for convenience
pub use solana_client::nonblocking::rpc_client::RpcClient;
pub use solana_sdk::{
    hash::Hash,
    signature::{Keypair, Signature},
    transaction::Transaction,
};
