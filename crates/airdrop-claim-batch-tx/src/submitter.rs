use crate::{SubmissionError, SubmissionGateway};
use airdrop_claim_sdk::{BatchAssembler, ClaimBatch, ClaimResult, SignerCoordinator};
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use std::future::{pending, Future};
use std::pin::Pin;
use tracing::{error, info, warn};

const NOT_SENT_AFTER_INTERRUPT: &str = "run interrupted before this batch was sent";

/// What happened to one transaction of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Confirmed on-chain; every claim in the batch applied
    Confirmed { signature: Signature },
    /// Refused by the ledger; no claim in the batch applied
    Rejected { reason: String },
    /// Broadcast but not confirmed; re-query `signature` before retrying
    Unconfirmed { signature: Signature },
    /// Never broadcast
    Failed { reason: String },
    /// Assembled and signed only
    DryRun { signature: Signature },
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub index: usize,
    pub claimants: Vec<Pubkey>,
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct ClaimRunReport {
    pub batches: Vec<BatchReport>,
    /// The run was stopped before every batch was settled
    pub interrupted: bool,
}

impl ClaimRunReport {
    fn count(&self, predicate: impl Fn(&BatchOutcome) -> bool) -> usize {
        self.batches.iter().filter(|b| predicate(&b.outcome)).count()
    }

    pub fn confirmed_count(&self) -> usize {
        self.count(|o| matches!(o, BatchOutcome::Confirmed { .. }))
    }

    pub fn rejected_count(&self) -> usize {
        self.count(|o| matches!(o, BatchOutcome::Rejected { .. }))
    }

    pub fn unconfirmed_count(&self) -> usize {
        self.count(|o| matches!(o, BatchOutcome::Unconfirmed { .. }))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, BatchOutcome::Failed { .. }))
    }

    /// Claimants whose batch was confirmed
    pub fn confirmed_claimants(&self) -> Vec<Pubkey> {
        self.batches
            .iter()
            .filter(|b| matches!(b.outcome, BatchOutcome::Confirmed { .. }))
            .flat_map(|b| b.claimants.iter().copied())
            .collect()
    }

    pub fn is_complete_success(&self) -> bool {
        !self.interrupted
            && !self.batches.is_empty()
            && self.confirmed_count() == self.batches.len()
    }
}

/// Runs assemble → sign → submit for every transaction-sized slice of a [`ClaimBatch`]
pub struct BatchClaimSubmitter<G> {
    gateway: G,
    assembler: BatchAssembler,
    dry_run: bool,
}

impl<G: SubmissionGateway> BatchClaimSubmitter<G> {
    pub fn new(gateway: G, assembler: BatchAssembler) -> Self {
        Self {
            gateway,
            assembler,
            dry_run: false,
        }
    }

    /// Assemble and sign without submitting
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn assembler(&self) -> &BatchAssembler {
        &self.assembler
    }

    /// Claim for every claimant in `batch`, signing with the batch's own keys
    pub async fn run(&self, batch: &ClaimBatch) -> ClaimResult<ClaimRunReport> {
        self.run_until(batch, pending::<()>()).await
    }

    /// Like [`run`](Self::run), but stops as soon as `interrupt` completes.
    ///
    /// A transaction already broadcast at that point is reported as
    /// `Unconfirmed`; the remaining ones are reported as `Failed` and never sent.
    pub async fn run_until(
        &self,
        batch: &ClaimBatch,
        interrupt: impl Future<Output = ()>,
    ) -> ClaimResult<ClaimRunReport> {
        self.run_with_signers_until(
            &batch.claimant_addresses(),
            &batch.fee_payer().pubkey(),
            &batch.signer_pool(),
            interrupt,
        )
        .await
    }

    /// Claim for `claimants`, paid by `fee_payer`, signing from `signer_pool`.
    ///
    /// Assembly and signing problems (degenerate batch, missing signer,
    /// derivation, size) are returned before anything is broadcast. Gateway
    /// failures are recorded per transaction and do not stop later ones.
    pub async fn run_with_signers(
        &self,
        claimants: &[Pubkey],
        fee_payer: &Pubkey,
        signer_pool: &[&Keypair],
    ) -> ClaimResult<ClaimRunReport> {
        self.run_with_signers_until(claimants, fee_payer, signer_pool, pending::<()>())
            .await
    }

    pub async fn run_with_signers_until(
        &self,
        claimants: &[Pubkey],
        fee_payer: &Pubkey,
        signer_pool: &[&Keypair],
        interrupt: impl Future<Output = ()>,
    ) -> ClaimResult<ClaimRunReport> {
        let slices = self.assembler.split_into_batches(claimants, fee_payer)?;

        for slice in &slices {
            self.assemble_and_sign(slice, fee_payer, signer_pool, Hash::default())?;
        }

        let total = slices.len();
        info!(
            "Claiming for {} wallet(s) in {} transaction(s)",
            slices.iter().map(Vec::len).sum::<usize>(),
            total
        );

        tokio::pin!(interrupt);
        let mut report = ClaimRunReport::default();
        for (index, slice) in slices.into_iter().enumerate() {
            let outcome = if report.interrupted {
                BatchOutcome::Failed {
                    reason: NOT_SENT_AFTER_INTERRUPT.to_string(),
                }
            } else {
                info!(
                    "Submitting batch {} of {} ({} claimant(s))",
                    index + 1,
                    total,
                    slice.len()
                );
                let step = self
                    .submit_slice(&slice, fee_payer, signer_pool, interrupt.as_mut())
                    .await?;
                report.interrupted = step.interrupted;
                step.outcome
            };

            report.batches.push(BatchReport {
                index,
                claimants: slice,
                outcome,
            });
        }

        info!(
            "Run finished: {} confirmed, {} rejected, {} unconfirmed, {} failed",
            report.confirmed_count(),
            report.rejected_count(),
            report.unconfirmed_count(),
            report.failed_count()
        );
        Ok(report)
    }

    fn assemble_and_sign(
        &self,
        claimants: &[Pubkey],
        fee_payer: &Pubkey,
        signer_pool: &[&Keypair],
        recent_blockhash: Hash,
    ) -> ClaimResult<Transaction> {
        let tx = self
            .assembler
            .assemble(claimants, fee_payer, recent_blockhash)?;
        SignerCoordinator::sign(tx, signer_pool, recent_blockhash)
    }

    async fn submit_slice<I>(
        &self,
        claimants: &[Pubkey],
        fee_payer: &Pubkey,
        signer_pool: &[&Keypair],
        mut interrupt: Pin<&mut I>,
    ) -> ClaimResult<SliceStep>
    where
        I: Future<Output = ()>,
    {
        let blockhash_result = tokio::select! {
            biased;
            _ = interrupt.as_mut() => {
                warn!("Interrupted before broadcast");
                return Ok(SliceStep::interrupted(BatchOutcome::Failed {
                    reason: NOT_SENT_AFTER_INTERRUPT.to_string(),
                }));
            }
            result = self.gateway.latest_blockhash() => result,
        };

        let recent_blockhash = match blockhash_result {
            Ok(hash) => hash,
            Err(e) => {
                error!("Failed to fetch blockhash: {}", e);
                return Ok(SliceStep::finished(BatchOutcome::Failed {
                    reason: e.to_string(),
                }));
            }
        };

        let tx = self.assemble_and_sign(claimants, fee_payer, signer_pool, recent_blockhash)?;
        let signature = tx.signatures[0];

        if self.dry_run {
            info!("Dry run: would submit {}", signature);
            return Ok(SliceStep::finished(BatchOutcome::DryRun { signature }));
        }

        info!("Submitting transaction {}", signature);
        let submit_result = tokio::select! {
            biased;
            _ = interrupt.as_mut() => {
                warn!(
                    "Interrupted while waiting for {}; re-query before retrying",
                    signature
                );
                return Ok(SliceStep::interrupted(BatchOutcome::Unconfirmed { signature }));
            }
            result = self.gateway.submit(&tx) => result,
        };

        let outcome = match submit_result {
            Ok(signature) => {
                info!("Batch confirmed: {}", signature);
                BatchOutcome::Confirmed { signature }
            }
            Err(SubmissionError::Rejected { reason }) => {
                error!("Batch rejected: {}", reason);
                BatchOutcome::Rejected { reason }
            }
            Err(e) if e.is_ambiguous() => {
                warn!(
                    "Batch {} outcome unknown ({}); re-query before retrying",
                    signature, e
                );
                BatchOutcome::Unconfirmed { signature }
            }
            Err(e) => {
                error!("Batch submission failed: {}", e);
                BatchOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        Ok(SliceStep::finished(outcome))
    }
}

struct SliceStep {
    outcome: BatchOutcome,
    interrupted: bool,
}

impl SliceStep {
    fn finished(outcome: BatchOutcome) -> Self {
        Self {
            outcome,
            interrupted: false,
        }
    }

    fn interrupted(outcome: BatchOutcome) -> Self {
        Self {
            outcome,
            interrupted: true,
        }
    }
}
