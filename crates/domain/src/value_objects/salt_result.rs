use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

/// Outcome of a salt search.
///
/// Recomputed for every deployment attempt; identical inputs always produce
/// the identical salt, so a previously mined salt can be reused as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaltResult {
    /// Inner salt, the big-endian search counter left-padded to 32 bytes.
    pub salt: B256,
    /// Address the token will be deployed at, when known.
    pub predicted_address: Option<Address>,
}

impl SaltResult {
    pub fn new(salt: B256, predicted_address: Address) -> Self {
        Self {
            salt,
            predicted_address: Some(predicted_address),
        }
    }
}
