use crate::config::{PayerArgs, ProgramArgs, WalletArgs};
use crate::error::CliResult;
use airdrop_claim_sdk::{serialized_transaction_size, BatchAssembler, ClaimBatch, ClaimError};
use solana_sdk::{hash::Hash, message::Message, signature::Signer};

/// Prints derived token accounts and the transaction plan without touching the network
pub fn execute(payer: PayerArgs, wallets: WalletArgs, program: ProgramArgs) -> CliResult<()> {
    let fee_payer = payer.load_payer()?;
    let identities = wallets.wallet_directory().list_identities()?;
    let batch = ClaimBatch::new(fee_payer, identities);
    let assembler = BatchAssembler::new(program.program_config(), program.assembler_config());
    let program_config = assembler.program();

    println!("🔍 Airdrop claim plan");
    println!("   Mint: {}", program_config.mint);
    println!("   Claim program: {}", program_config.claim_program_id);
    println!("   Fee payer: {}", batch.fee_payer().pubkey());
    println!(
        "   Claim data: {}",
        hex::encode(program_config.claim_data.data()?)
    );

    println!("\n💰 Token accounts ({} wallet(s)):", batch.len());
    for claimant in batch.claimant_addresses() {
        let (token_account, _bump) = assembler
            .address_finder()
            .find_token_account_address(&claimant)?;
        println!("   {} → {}", claimant, token_account);
    }

    let fee_payer = batch.fee_payer().pubkey();
    let slices = match assembler.split_into_batches(&batch.claimant_addresses(), &fee_payer) {
        Ok(slices) => slices,
        Err(ClaimError::DegenerateBatch) => {
            println!("\n❌ Nothing to claim: no wallets besides the fee payer");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("\n📦 Transactions: {}", slices.len());
    for (i, slice) in slices.iter().enumerate() {
        let instructions = assembler.assemble_instructions(slice, &fee_payer)?;
        let message =
            Message::new_with_blockhash(&instructions, Some(&fee_payer), &Hash::default());
        println!(
            "   {}. {} wallet(s), {} instruction(s), {} signature(s), {} / {} bytes",
            i + 1,
            slice.len(),
            instructions.len(),
            message.header.num_required_signatures,
            serialized_transaction_size(&message)?,
            assembler.config().max_transaction_size_bytes
        );
    }

    Ok(())
}
