use crate::error::{CliError, CliResult};
use airdrop_claim_batch_tx::GatewayConfig;
use airdrop_claim_sdk::{
    AssemblerConfig, ClaimProgramConfig, PriorityFeeConfig, DEFAULT_CLAIM_PROGRAM_ID,
    DEFAULT_COMPUTE_UNIT_LIMIT, DEFAULT_COMPUTE_UNIT_PRICE_MICRO_LAMPORTS, DEFAULT_MINT,
};
use airdrop_claim_wallets::{parse_base58_keypair, WalletDirectory};
use clap::Args;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_ELIGIBILITY_URL: &str = "https://api.clusters.xyz/v0.1/airdrops/pengu/eligibility";

/// Where the fee payer's key comes from
#[derive(Args, Debug, Clone)]
pub struct PayerArgs {
    /// Fee payer secret key (base58)
    #[arg(long, env = "PAYER_PRIVATE_KEY", hide_env_values = true)]
    pub payer_private_key: Option<String>,

    /// Fee payer keypair file (solana-keygen JSON), used when no private key is given
    #[arg(long)]
    pub payer_keypair: Option<PathBuf>,
}

impl PayerArgs {
    pub fn load_payer(&self) -> CliResult<Keypair> {
        if let Some(encoded) = &self.payer_private_key {
            return Ok(parse_base58_keypair(encoded)?);
        }

        if let Some(path) = &self.payer_keypair {
            return read_keypair_file(path).map_err(|e| {
                CliError::InvalidConfig(format!(
                    "Failed to read payer keypair from '{}': {}",
                    path.display(),
                    e
                ))
            });
        }

        Err(CliError::InvalidConfig(
            "No fee payer: set PAYER_PRIVATE_KEY or pass --payer-keypair".to_string(),
        ))
    }
}

/// Claimant wallets
#[derive(Args, Debug, Clone)]
pub struct WalletArgs {
    /// Directory of *.txt (base58 per line) and *.json wallet files
    #[arg(short, long, env = "WALLETS_DIR", default_value = "wallets")]
    pub wallets_dir: PathBuf,
}

impl WalletArgs {
    pub fn wallet_directory(&self) -> WalletDirectory {
        WalletDirectory::new(&self.wallets_dir)
    }
}

/// Claim program and priority fee settings
#[derive(Args, Debug, Clone)]
pub struct ProgramArgs {
    /// Token mint being claimed
    #[arg(long, env = "AIRDROP_MINT", default_value_t = DEFAULT_MINT)]
    pub mint: Pubkey,

    /// Claim program id
    #[arg(long, env = "CLAIM_PROGRAM_ID", default_value_t = DEFAULT_CLAIM_PROGRAM_ID)]
    pub claim_program: Pubkey,

    /// Compute unit limit for each transaction
    #[arg(long, default_value_t = DEFAULT_COMPUTE_UNIT_LIMIT)]
    pub compute_unit_limit: u32,

    /// Priority fee in micro-lamports per compute unit
    #[arg(long, env = "COMPUTE_UNIT_PRICE", default_value_t = DEFAULT_COMPUTE_UNIT_PRICE_MICRO_LAMPORTS)]
    pub compute_unit_price: u64,
}

impl ProgramArgs {
    pub fn program_config(&self) -> ClaimProgramConfig {
        ClaimProgramConfig {
            mint: self.mint,
            claim_program_id: self.claim_program,
            ..Default::default()
        }
    }

    pub fn assembler_config(&self) -> AssemblerConfig {
        AssemblerConfig {
            priority_fee: PriorityFeeConfig {
                compute_unit_limit: self.compute_unit_limit,
                compute_unit_price_micro_lamports: self.compute_unit_price,
            },
            ..Default::default()
        }
    }
}

/// Network settings for submission
#[derive(Args, Debug, Clone)]
pub struct NetworkArgs {
    /// Solana RPC URL
    #[arg(short, long, env = "CLUSTER_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Seconds to wait for confirmation before reporting the outcome as unknown
    #[arg(long, default_value_t = 90)]
    pub confirmation_timeout_secs: u64,

    /// Skip preflight simulation
    #[arg(long)]
    pub skip_preflight: bool,
}

impl NetworkArgs {
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            confirmation_timeout: Duration::from_secs(self.confirmation_timeout_secs),
            skip_preflight: self.skip_preflight,
            ..Default::default()
        }
    }
}
