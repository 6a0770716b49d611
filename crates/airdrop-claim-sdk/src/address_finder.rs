use crate::{
    config::ClaimProgramConfig,
    error::{ClaimError, ClaimResult},
};
use solana_sdk::pubkey::Pubkey;

/// Derives program-owned addresses for a claim configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressFinder {
    pub mint: Pubkey,

    pub associated_token_program_id: Pubkey,
    pub token_program_id: Pubkey,
}

impl AddressFinder {
    pub fn new(mint: Pubkey, associated_token_program_id: Pubkey, token_program_id: Pubkey) -> Self {
        Self {
            mint,
            associated_token_program_id,
            token_program_id,
        }
    }

    pub fn from_config(config: &ClaimProgramConfig) -> Self {
        Self::new(
            config.mint,
            config.associated_token_program_id,
            config.token_program_id,
        )
    }

    /// Associated token account of `owner` for the configured mint.
    ///
    /// Seeds are `[owner, token_program, mint]` under the associated token
    /// account program; bumps are searched from 255 down.
    pub fn find_token_account_address(&self, owner: &Pubkey) -> ClaimResult<(Pubkey, u8)> {
        Pubkey::try_find_program_address(
            &[
                owner.as_ref(),
                self.token_program_id.as_ref(),
                self.mint.as_ref(),
            ],
            &self.associated_token_program_id,
        )
        .ok_or(ClaimError::Derivation {
            owner: *owner,
            mint: self.mint,
        })
    }
}

impl Default for AddressFinder {
    fn default() -> Self {
        Self::from_config(&ClaimProgramConfig::default())
    }
}
