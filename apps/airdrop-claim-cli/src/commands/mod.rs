pub mod claim_airdrop;
pub mod inspect;
