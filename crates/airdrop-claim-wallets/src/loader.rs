/*!
# Wallet Loading

Reads every supported wallet file in a directory. Only public addresses are
ever logged.
*/

use crate::errors::{WalletError, WalletResult};
use solana_sdk::signature::{Keypair, Signer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const KEYPAIR_LEN: usize = 64;

/// Directory of `*.txt` and `*.json` wallet files
#[derive(Debug, Clone)]
pub struct WalletDirectory {
    path: PathBuf,
}

impl WalletDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Supported wallet files, sorted by file name
    pub fn wallet_files(&self) -> WalletResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let path = entry?.path();
            if path.is_file() && WalletFormat::from_path(&path).is_some() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Every identity found in the directory, in file order.
    ///
    /// Unreadable files and malformed entries are skipped with a warning.
    /// Duplicates are kept; the claim batch collapses them.
    pub fn list_identities(&self) -> WalletResult<Vec<Keypair>> {
        let mut identities = Vec::new();

        for path in self.wallet_files()? {
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping unreadable wallet file {}: {}", path.display(), e);
                    continue;
                }
            };

            let found = match WalletFormat::from_path(&path) {
                Some(WalletFormat::Text) => read_text_wallets(&path, &content),
                Some(WalletFormat::Json) => read_json_wallet(&path, &content).into_iter().collect(),
                None => continue,
            };

            if found.is_empty() {
                warn!("No wallets found in {}", path.display());
            }
            identities.extend(found);
        }

        debug!(
            "Loaded {} wallet(s) from {}",
            identities.len(),
            self.path.display()
        );
        Ok(identities)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalletFormat {
    Text,
    Json,
}

impl WalletFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "txt" => Some(WalletFormat::Text),
            "json" => Some(WalletFormat::Json),
            _ => None,
        }
    }
}

fn read_text_wallets(path: &Path, content: &str) -> Vec<Keypair> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(i, line)| match parse_base58_keypair(line) {
            Ok(keypair) => {
                debug!("Loaded {} from {}:{}", keypair.pubkey(), path.display(), i + 1);
                Some(keypair)
            }
            Err(e) => {
                warn!("Skipping {}:{}: {}", path.display(), i + 1, e);
                None
            }
        })
        .collect()
}

fn read_json_wallet(path: &Path, content: &str) -> Option<Keypair> {
    if content.trim().is_empty() {
        return None;
    }

    match parse_json_keypair(content) {
        Ok(keypair) => {
            debug!("Loaded {} from {}", keypair.pubkey(), path.display());
            Some(keypair)
        }
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            None
        }
    }
}

/// Parse a base58-encoded 64-byte secret key
pub fn parse_base58_keypair(encoded: &str) -> WalletResult<Keypair> {
    let bytes = bs58::decode(encoded.trim())
        .into_vec()
        .map_err(|e| WalletError::InvalidBase58(e.to_string()))?;
    keypair_from_bytes(&bytes)
}

/// Parse a JSON array of 64 secret key bytes
pub fn parse_json_keypair(json: &str) -> WalletResult<Keypair> {
    let bytes: Vec<u8> = serde_json::from_str(json)?;
    keypair_from_bytes(&bytes)
}

fn keypair_from_bytes(bytes: &[u8]) -> WalletResult<Keypair> {
    if bytes.len() != KEYPAIR_LEN {
        return Err(WalletError::InvalidKeypair(format!(
            "expected {} bytes, got {}",
            KEYPAIR_LEN,
            bytes.len()
        )));
    }
    Keypair::try_from(bytes).map_err(|e| WalletError::InvalidKeypair(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn base58(keypair: &Keypair) -> String {
        bs58::encode(keypair.to_bytes()).into_string()
    }

    fn json(keypair: &Keypair) -> String {
        serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_parse_base58_keypair() {
        let keypair = Keypair::new();
        let parsed = parse_base58_keypair(&format!("  {}\r", base58(&keypair))).unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_parse_json_keypair() {
        let keypair = Keypair::new();
        let parsed = parse_json_keypair(&json(&keypair)).unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_keypair_from_bytes_signs_as_original() {
        let keypair = Keypair::new();
        let restored = keypair_from_bytes(&keypair.to_bytes()).unwrap();

        let message = b"claim";
        let signature = restored.sign_message(message);
        assert!(signature.verify(keypair.pubkey().as_ref(), message));
        assert!(matches!(
            keypair_from_bytes(&keypair.to_bytes()[..63]),
            Err(WalletError::InvalidKeypair(_))
        ));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(matches!(
            parse_base58_keypair("not-base58-0OIl"),
            Err(WalletError::InvalidBase58(_))
        ));
        assert!(matches!(
            parse_base58_keypair(&bs58::encode([1u8; 32]).into_string()),
            Err(WalletError::InvalidKeypair(_))
        ));
        assert!(matches!(
            parse_json_keypair("{\"key\": 1}"),
            Err(WalletError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_list_identities_reads_both_formats() {
        let dir = tempdir().unwrap();
        let a = Keypair::new();
        let b = Keypair::new();
        let c = Keypair::new();

        fs::write(
            dir.path().join("a.txt"),
            format!("{}\n\n{}\n", base58(&a), base58(&b)),
        )
        .unwrap();
        fs::write(dir.path().join("b.json"), json(&c)).unwrap();
        fs::write(dir.path().join("notes.md"), base58(&Keypair::new())).unwrap();

        let identities = WalletDirectory::new(dir.path()).list_identities().unwrap();
        let addresses: Vec<_> = identities.iter().map(|k| k.pubkey()).collect();

        assert_eq!(addresses, vec![a.pubkey(), b.pubkey(), c.pubkey()]);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let dir = tempdir().unwrap();
        let good = Keypair::new();

        fs::write(
            dir.path().join("mixed.txt"),
            format!("garbage\n{}\n", base58(&good)),
        )
        .unwrap();
        fs::write(dir.path().join("broken.json"), "[1, 2, 3").unwrap();
        fs::write(dir.path().join("empty.json"), "").unwrap();
        fs::write(dir.path().join("empty.txt"), "\n").unwrap();

        let identities = WalletDirectory::new(dir.path()).list_identities().unwrap();

        assert_eq!(identities.len(), 1);
        assert_eq!(identities[0].pubkey(), good.pubkey());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let dir = tempdir().unwrap();
        let keypair = Keypair::new();

        fs::write(dir.path().join("a.txt"), base58(&keypair)).unwrap();
        fs::write(dir.path().join("b.json"), json(&keypair)).unwrap();

        let identities = WalletDirectory::new(dir.path()).list_identities().unwrap();
        assert_eq!(identities.len(), 2);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let result = WalletDirectory::new(dir.path().join("missing")).list_identities();
        assert!(matches!(result, Err(WalletError::Io(_))));
    }

    #[test]
    fn test_wallet_files_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("z.txt"), "").unwrap();
        fs::write(dir.path().join("a.json"), "").unwrap();
        fs::write(dir.path().join("m.csv"), "").unwrap();

        let files = WalletDirectory::new(dir.path()).wallet_files().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "z.txt"]);
    }
}
