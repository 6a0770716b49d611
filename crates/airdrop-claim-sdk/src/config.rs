use crate::claim_data::ClaimInstructionData;
use solana_sdk::{packet::PACKET_DATA_SIZE, pubkey, pubkey::Pubkey};

/// Airdropped token mint
pub const DEFAULT_MINT: Pubkey = pubkey!("2zMMhcVQEXDtdE6vsFS7S7D5oUodfJHE8vd1gnBouauv");

/// Airdrop claim program
pub const DEFAULT_CLAIM_PROGRAM_ID: Pubkey =
    pubkey!("CUEB3rQGVrvCRTmyjLrPnsd6bBBsGbz1Sr49vxNLJkGR");

/// Writable program-state accounts passed first to every claim
pub const DEFAULT_PROGRAM_STATE_ACCOUNTS: [Pubkey; 2] = [
    pubkey!("AQ84tYQnFLtdpCvXXRSXwYT7UzFNKVrCtqyiyxi8oDwE"),
    pubkey!("Cdc77Y1G1JyeXB6WrJJG7RBvUmNK4Mxp3ojGumRT5ovn"),
];

pub const DEFAULT_CONFIG_ACCOUNT: Pubkey =
    pubkey!("2EEw1A49utRqUsnYRYWtnpz2UQ7n7sJn8EEpdN2nKqWQ");

pub const DEFAULT_VAULT_AUTHORITY: Pubkey =
    pubkey!("4rqc9TttM89RWaKKkkXJqYtGWws8LuMx9FBSW4DfSUMp");

pub const DEFAULT_COMPUTE_UNIT_LIMIT: u32 = 200_000;

/// 0.01 SOL per compute unit, expressed in micro-lamports
pub const DEFAULT_COMPUTE_UNIT_PRICE_MICRO_LAMPORTS: u64 = 10_000_000;

/// Program identities and fixed accounts needed to build claim batches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimProgramConfig {
    /// Token mint being claimed
    pub mint: Pubkey,

    /// Program that executes the claim instruction
    pub claim_program_id: Pubkey,

    /// The two program-state accounts at positions 0 and 1 of the claim
    pub program_state_accounts: [Pubkey; 2],

    /// Read-only config account at position 3 of the claim
    pub config_account: Pubkey,

    /// Vault authority at position 5 of the claim
    pub vault_authority: Pubkey,

    pub token_program_id: Pubkey,
    pub associated_token_program_id: Pubkey,
    pub system_program_id: Pubkey,
    pub instructions_sysvar_id: Pubkey,

    /// Claim payload sent with every claim instruction
    pub claim_data: ClaimInstructionData,
}

impl Default for ClaimProgramConfig {
    fn default() -> Self {
        Self {
            mint: DEFAULT_MINT,
            claim_program_id: DEFAULT_CLAIM_PROGRAM_ID,
            program_state_accounts: DEFAULT_PROGRAM_STATE_ACCOUNTS,
            config_account: DEFAULT_CONFIG_ACCOUNT,
            vault_authority: DEFAULT_VAULT_AUTHORITY,
            token_program_id: spl_token::ID,
            associated_token_program_id: spl_associated_token_account::ID,
            system_program_id: solana_sdk::system_program::ID,
            instructions_sysvar_id: solana_sdk::sysvar::instructions::ID,
            claim_data: ClaimInstructionData::default(),
        }
    }
}

/// Compute budget directives prepended to every batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityFeeConfig {
    pub compute_unit_limit: u32,
    pub compute_unit_price_micro_lamports: u64,
}

impl Default for PriorityFeeConfig {
    fn default() -> Self {
        Self {
            compute_unit_limit: DEFAULT_COMPUTE_UNIT_LIMIT,
            compute_unit_price_micro_lamports: DEFAULT_COMPUTE_UNIT_PRICE_MICRO_LAMPORTS,
        }
    }
}

/// Configuration for batch assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Compute budget directives
    pub priority_fee: PriorityFeeConfig,

    /// Maximum serialized transaction size in bytes
    pub max_transaction_size_bytes: usize,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            priority_fee: PriorityFeeConfig::default(),
            max_transaction_size_bytes: PACKET_DATA_SIZE,
        }
    }
}
