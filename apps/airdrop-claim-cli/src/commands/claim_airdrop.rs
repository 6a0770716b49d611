use crate::config::{NetworkArgs, PayerArgs, ProgramArgs, WalletArgs};
use crate::eligibility::EligibilityChecker;
use crate::error::{CliError, CliResult};
use airdrop_claim_batch_tx::{
    BatchClaimSubmitter, BatchOutcome, ClaimRunReport, RpcSubmissionGateway,
};
use airdrop_claim_sdk::{BatchAssembler, ClaimBatch, ClaimError};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, signature::Signer};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct ClaimOptions {
    pub dry_run: bool,
    pub eligibility_url: Option<String>,
}

pub async fn execute(
    payer: PayerArgs,
    wallets: WalletArgs,
    program: ProgramArgs,
    network: NetworkArgs,
    options: ClaimOptions,
) -> CliResult<()> {
    println!("🎯 Starting airdrop claim...");

    println!("🔑 Loading fee payer...");
    let fee_payer = payer.load_payer()?;
    println!("✅ Fee payer: {}", fee_payer.pubkey());

    println!("📂 Loading wallets from {}...", wallets.wallets_dir.display());
    let identities = wallets.wallet_directory().list_identities()?;
    println!("✅ Loaded {} wallet(s)", identities.len());

    let mut batch = ClaimBatch::new(fee_payer, identities);

    if let Some(url) = &options.eligibility_url {
        println!("🔍 Checking eligibility...");
        let checker = EligibilityChecker::new(url)?;
        let dropped = checker.filter_batch(&mut batch).await;
        println!(
            "✅ {} wallet(s) eligible, {} removed",
            batch.len(),
            dropped
        );
    }

    if batch.is_empty() {
        println!("❌ No wallets to claim for");
        return Ok(());
    }

    let assembler = BatchAssembler::new(program.program_config(), program.assembler_config());
    let rpc_client = Arc::new(RpcClient::new_with_commitment(
        network.rpc_url.clone(),
        CommitmentConfig::confirmed(),
    ));
    let gateway = RpcSubmissionGateway::with_config(rpc_client, network.gateway_config());
    let submitter = BatchClaimSubmitter::new(gateway, assembler).with_dry_run(options.dry_run);

    if options.dry_run {
        println!("🧪 Dry run: transactions will be signed but not sent");
    }

    let report = match submitter.run_until(&batch, interrupted()).await {
        Ok(report) => report,
        Err(ClaimError::DegenerateBatch) => {
            println!("❌ Nothing to claim: every wallet was the fee payer or a duplicate");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    print_report(&report);

    if options.dry_run || report.is_complete_success() {
        Ok(())
    } else {
        Err(CliError::CommandExecution(format!(
            "{} of {} transaction(s) not confirmed",
            report.batches.len() - report.confirmed_count(),
            report.batches.len()
        )))
    }
}

/// Resolves on Ctrl-C; never resolves if the handler cannot be installed
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

fn print_report(report: &ClaimRunReport) {
    for batch in &report.batches {
        println!(
            "\n📦 Transaction {} ({} wallet(s))",
            batch.index + 1,
            batch.claimants.len()
        );
        for claimant in &batch.claimants {
            debug!(%claimant, "Claimant in batch");
            println!("   {}", claimant);
        }

        match &batch.outcome {
            BatchOutcome::Confirmed { signature } => {
                println!("✅ Confirmed: {}", signature);
            }
            BatchOutcome::DryRun { signature } => {
                println!("🧪 Signed (not sent): {}", signature);
            }
            BatchOutcome::Rejected { reason } => {
                println!("❌ Rejected: {}", reason);
            }
            BatchOutcome::Unconfirmed { signature } => {
                println!("⚠️  Outcome unknown: {}", signature);
                println!("   Check this signature on an explorer before retrying these wallets.");
            }
            BatchOutcome::Failed { reason } => {
                println!("❌ Not sent: {}", reason);
            }
        }
    }

    if report.interrupted {
        println!("\n⚠️  Run interrupted: unsent transactions are listed as not sent.");
    }

    println!("\n📊 Claim Summary:");
    println!("   Transactions: {}", report.batches.len());
    println!("   Confirmed: {}", report.confirmed_count());
    println!("   Rejected: {}", report.rejected_count());
    println!("   Unconfirmed: {}", report.unconfirmed_count());
    println!("   Not sent: {}", report.failed_count());
    println!(
        "   Wallets claimed: {}",
        report.confirmed_claimants().len()
    );
}
