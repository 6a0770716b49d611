use crate::{config::ClaimProgramConfig, error::ClaimResult, PriorityFeeConfig};
use solana_sdk::{
    compute_budget::ComputeBudgetInstruction,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

/// `AssociatedTokenAccountInstruction::CreateIdempotent`
pub const CREATE_IDEMPOTENT_DISCRIMINATOR: u8 = 1;

/// Compute-unit limit followed by compute-unit price. No accounts, no signers.
pub fn build_priority_fee_ixs(priority_fee: &PriorityFeeConfig) -> [Instruction; 2] {
    [
        ComputeBudgetInstruction::set_compute_unit_limit(priority_fee.compute_unit_limit),
        ComputeBudgetInstruction::set_compute_unit_price(
            priority_fee.compute_unit_price_micro_lamports,
        ),
    ]
}

/// Create `token_account` for `owner` unless it already exists; rent is paid by `payer`.
pub fn build_create_token_account_idempotent_ix(
    config: &ClaimProgramConfig,
    payer: &Pubkey,
    owner: &Pubkey,
    token_account: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: config.associated_token_program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*token_account, false),
            AccountMeta::new_readonly(*owner, false),
            AccountMeta::new_readonly(config.mint, false),
            AccountMeta::new_readonly(config.system_program_id, false),
            AccountMeta::new_readonly(config.token_program_id, false),
        ],
        data: vec![CREATE_IDEMPOTENT_DISCRIMINATOR],
    }
}

/// Claim for `claimant` into `claimant_token_account`.
///
/// Account order is positional and owned by the claim program.
pub fn build_claim_ix(
    config: &ClaimProgramConfig,
    claimant: &Pubkey,
    claimant_token_account: &Pubkey,
) -> ClaimResult<Instruction> {
    let [state, state_secondary] = config.program_state_accounts;

    Ok(Instruction {
        program_id: config.claim_program_id,
        accounts: vec![
            AccountMeta::new(state, false),
            AccountMeta::new(state_secondary, false),
            AccountMeta::new(*claimant_token_account, false),
            AccountMeta::new_readonly(config.config_account, false),
            AccountMeta::new(*claimant, true),
            AccountMeta::new_readonly(config.vault_authority, false),
            AccountMeta::new_readonly(config.token_program_id, false),
            AccountMeta::new_readonly(config.instructions_sysvar_id, false),
        ],
        data: config.claim_data.data()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AddressFinder;
    use solana_sdk::compute_budget;
    use spl_associated_token_account::instruction::create_associated_token_account_idempotent;

    #[test]
    fn test_priority_fee_ixs() {
        let ixs = build_priority_fee_ixs(&PriorityFeeConfig::default());

        assert_eq!(ixs[0].program_id, compute_budget::id());
        assert_eq!(ixs[1].program_id, compute_budget::id());
        assert!(ixs.iter().all(|ix| ix.accounts.is_empty()));
        assert_eq!(
            ixs[0],
            ComputeBudgetInstruction::set_compute_unit_limit(200_000)
        );
        assert_eq!(
            ixs[1],
            ComputeBudgetInstruction::set_compute_unit_price(10_000_000)
        );
    }

    #[test]
    fn test_create_idempotent_matches_spl() {
        let config = ClaimProgramConfig::default();
        let payer = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let (token_account, _) = AddressFinder::from_config(&config)
            .find_token_account_address(&owner)
            .unwrap();

        let ix = build_create_token_account_idempotent_ix(&config, &payer, &owner, &token_account);
        let expected = create_associated_token_account_idempotent(
            &payer,
            &owner,
            &config.mint,
            &config.token_program_id,
        );

        assert_eq!(ix, expected);
    }

    #[test]
    fn test_claim_ix_account_roles() {
        let config = ClaimProgramConfig::default();
        let claimant = Pubkey::new_unique();
        let token_account = Pubkey::new_unique();

        let ix = build_claim_ix(&config, &claimant, &token_account).unwrap();

        assert_eq!(ix.program_id, config.claim_program_id);
        assert_eq!(ix.accounts.len(), 8);

        let roles: Vec<(Pubkey, bool, bool)> = ix
            .accounts
            .iter()
            .map(|meta| (meta.pubkey, meta.is_signer, meta.is_writable))
            .collect();
        assert_eq!(
            roles,
            vec![
                (config.program_state_accounts[0], false, true),
                (config.program_state_accounts[1], false, true),
                (token_account, false, true),
                (config.config_account, false, false),
                (claimant, true, true),
                (config.vault_authority, false, false),
                (config.token_program_id, false, false),
                (config.instructions_sysvar_id, false, false),
            ]
        );
    }

    #[test]
    fn test_claim_ix_only_claimant_signs() {
        let config = ClaimProgramConfig::default();
        let claimant = Pubkey::new_unique();

        let ix = build_claim_ix(&config, &claimant, &Pubkey::new_unique()).unwrap();
        let signers: Vec<_> = ix.accounts.iter().filter(|m| m.is_signer).collect();

        assert_eq!(signers.len(), 1);
        assert_eq!(signers[0].pubkey, claimant);
    }
}
