use alloy_primitives::{Address, B256, keccak256};
use alloy_sol_types::SolValue;

/// Hash and encoding primitives used by the salt search.
///
/// The production implementation is [`Keccak`]; tests substitute cheaper
/// or adversarial hashes.
pub trait Create2Hasher: Send + Sync {
    /// 256-bit hash of an arbitrary byte sequence.
    fn hash(&self, data: &[u8]) -> B256;

    /// Encodes `(admin, inner_salt)` as the factory does before hashing.
    fn encode_salt(&self, admin: Address, inner_salt: B256) -> Vec<u8> {
        (admin, inner_salt).abi_encode_params()
    }

    /// Salt the factory actually deploys with.
    fn factory_salt(&self, admin: Address, inner_salt: B256) -> B256 {
        self.hash(&self.encode_salt(admin, inner_salt))
    }

    /// `low20(hash(0xff ++ deployer ++ salt ++ init_code_hash))`.
    fn create2_address(&self, deployer: Address, salt: B256, init_code_hash: B256) -> Address {
        let mut preimage = [0u8; 85];
        preimage[0] = 0xff;
        preimage[1..21].copy_from_slice(deployer.as_slice());
        preimage[21..53].copy_from_slice(salt.as_slice());
        preimage[53..85].copy_from_slice(init_code_hash.as_slice());
        Address::from_slice(&self.hash(&preimage)[12..])
    }
}

/// Keccak-256, the hash the EVM uses for CREATE2.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak;

impl Create2Hasher for Keccak {
    fn hash(&self, data: &[u8]) -> B256 {
        keccak256(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    #[test]
    fn test_create2_matches_reference_formula() {
        let deployer = address!("8EEF0dC80ADf57908bB1be0236c2a72a7e379C2d");
        let salt = b256!("0000000000000000000000000000000000000000000000000000000000000007");
        let init_code_hash = keccak256(b"init code");

        let expected = deployer.create2(salt.0, init_code_hash.0);
        assert_eq!(Keccak.create2_address(deployer, salt, init_code_hash), expected);
    }

    #[test]
    fn test_encode_salt_is_two_words() {
        let admin = address!("00000000000000000000000000000000000000aa");
        let inner = B256::with_last_byte(1);
        let encoded = Keccak.encode_salt(admin, inner);

        assert_eq!(encoded.len(), 64);
        assert_eq!(&encoded[12..32], admin.as_slice());
        assert_eq!(&encoded[32..], inner.as_slice());
    }
}
