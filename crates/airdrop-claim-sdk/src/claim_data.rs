/*!
# Claim Instruction Data

Fixed-layout payload of the claim instruction: an 8-byte operation
discriminator followed by the claim parameters as little-endian fixed-width
integers (borsh encoding of [`ClaimParams`]).

```text
[u64 discriminator][u8 flag][u32 param_a][u64 param_b][u16 param_c][u32 param_d]
```
*/

use crate::error::{ClaimError, ClaimResult};
use borsh::{BorshDeserialize, BorshSerialize};

pub const CLAIM_DISCRIMINATOR: [u8; 8] = [0x3e, 0xe6, 0xd6, 0x1b, 0x98, 0x5f, 0xfe, 0x20];

/// Encoded length of [`ClaimParams`]
pub const CLAIM_PARAMS_LEN: usize = 1 + 4 + 8 + 2 + 4;

/// Encoded length of a full claim payload
pub const CLAIM_DATA_LEN: usize = CLAIM_DISCRIMINATOR.len() + CLAIM_PARAMS_LEN;

/// Claim parameters, owned by the claim program
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ClaimParams {
    pub flag: u8,
    pub param_a: u32,
    pub param_b: u64,
    pub param_c: u16,
    pub param_d: u32,
}

impl Default for ClaimParams {
    fn default() -> Self {
        Self {
            flag: 0x01,
            param_a: 0xed07_0000,
            param_b: 0x0000_31dd_5140_0046,
            param_c: 0x0800,
            param_d: 0x0715_66af,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimInstructionData {
    pub discriminator: [u8; 8],
    pub params: ClaimParams,
}

impl Default for ClaimInstructionData {
    fn default() -> Self {
        Self {
            discriminator: CLAIM_DISCRIMINATOR,
            params: ClaimParams::default(),
        }
    }
}

impl ClaimInstructionData {
    pub fn new(discriminator: [u8; 8], params: ClaimParams) -> Self {
        Self {
            discriminator,
            params,
        }
    }

    /// Serialize to the on-wire payload
    pub fn data(&self) -> ClaimResult<Vec<u8>> {
        let mut data = Vec::with_capacity(CLAIM_DATA_LEN);
        data.extend_from_slice(&self.discriminator);
        self.params
            .serialize(&mut data)
            .map_err(|e| ClaimError::InvalidInstructionData(e.to_string()))?;
        Ok(data)
    }

    /// Parse a payload, rejecting anything that is not exactly [`CLAIM_DATA_LEN`] bytes
    pub fn try_from_bytes(bytes: &[u8]) -> ClaimResult<Self> {
        if bytes.len() != CLAIM_DATA_LEN {
            return Err(ClaimError::InvalidInstructionData(format!(
                "expected {} bytes, got {}",
                CLAIM_DATA_LEN,
                bytes.len()
            )));
        }

        let (discriminator, params) = bytes.split_at(CLAIM_DISCRIMINATOR.len());
        let mut disc = [0u8; 8];
        disc.copy_from_slice(discriminator);

        let params = ClaimParams::try_from_slice(params)
            .map_err(|e| ClaimError::InvalidInstructionData(e.to_string()))?;

        Ok(Self::new(disc, params))
    }
}
