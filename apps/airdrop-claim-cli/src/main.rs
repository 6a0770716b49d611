use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;
mod eligibility;
mod error;

use commands::claim_airdrop::ClaimOptions;
use config::{NetworkArgs, PayerArgs, ProgramArgs, WalletArgs, DEFAULT_ELIGIBILITY_URL};
use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "airdrop-claim")]
#[command(about = "Batch airdrop claims for a directory of Solana wallets")]
#[command(version)]
struct Cli {
    /// Log filter (tracing EnvFilter syntax)
    #[arg(long, global = true, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Claim the airdrop for every wallet in the wallets directory
    Claim {
        #[command(flatten)]
        payer: PayerArgs,

        #[command(flatten)]
        wallets: WalletArgs,

        #[command(flatten)]
        program: ProgramArgs,

        #[command(flatten)]
        network: NetworkArgs,

        /// Assemble and sign, but do not send
        #[arg(long)]
        dry_run: bool,

        /// Drop wallets the eligibility API reports as ineligible or already claimed
        #[arg(long)]
        check_eligibility: bool,

        /// Eligibility API endpoint
        #[arg(long, default_value = DEFAULT_ELIGIBILITY_URL)]
        eligibility_url: String,
    },

    /// Show derived token accounts and the transaction plan (offline)
    Inspect {
        #[command(flatten)]
        payer: PayerArgs,

        #[command(flatten)]
        wallets: WalletArgs,

        #[command(flatten)]
        program: ProgramArgs,
    },
}

fn init_tracing(filter: &str) -> CliResult<()> {
    let env_filter = EnvFilter::try_new(filter)
        .map_err(|e| CliError::InvalidConfig(format!("Invalid log level '{}': {}", filter, e)))?;
    let subscriber = fmt().with_env_filter(env_filter).with_target(false).finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::InvalidConfig(format!("Failed to install logger: {}", e)))
}

#[tokio::main]
async fn main() -> CliResult<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Claim {
            payer,
            wallets,
            program,
            network,
            dry_run,
            check_eligibility,
            eligibility_url,
        } => {
            let options = ClaimOptions {
                dry_run,
                eligibility_url: check_eligibility.then_some(eligibility_url),
            };
            commands::claim_airdrop::execute(payer, wallets, program, network, options).await
        }

        Commands::Inspect {
            payer,
            wallets,
            program,
        } => commands::inspect::execute(payer, wallets, program),
    }
}
