/*!
# Airdrop Claim Wallets

Loads claimant identities from a directory of wallet files.

## File Formats

### Text files (`*.txt`)
One base58-encoded 64-byte secret key per line. Blank lines are ignored.

### JSON files (`*.json`)
A single keypair as a JSON array of 64 bytes, the format written by
`solana-keygen`.

Files with other extensions are ignored. Malformed entries are skipped with a
warning so one bad line never blocks the rest of the run.

## Usage

```rust,no_run
use airdrop_claim_wallets::{WalletDirectory, WalletResult};

fn example() -> WalletResult<()> {
    let identities = WalletDirectory::new("./wallets").list_identities()?;
    println!("Loaded {} wallet(s)", identities.len());
    Ok(())
}
```
*/

pub mod errors;
pub mod loader;

pub use errors::{WalletError, WalletResult};
pub use loader::{parse_base58_keypair, parse_json_keypair, WalletDirectory};
