use super::hasher::{Create2Hasher, Keccak};
use crate::constants::DEFAULT_MAX_SALT_ATTEMPTS;
use crate::error::{LaunchError, Result};
use crate::value_objects::SaltResult;
use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Configuration for the salt search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinerConfig {
    /// Salts tried before the search gives up.
    pub max_attempts: u64,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_SALT_ATTEMPTS,
        }
    }
}

/// Brute-force search for a deployment salt whose CREATE2 address sorts
/// strictly below a target address.
///
/// The search is a bounded loop over an integer counter and blocks the
/// calling thread until it finishes.
#[derive(Debug, Clone, Default)]
pub struct AddressMiner<H = Keccak> {
    hasher: H,
    config: MinerConfig,
}

impl AddressMiner<Keccak> {
    /// Creates a Keccak-backed miner.
    pub fn new(config: MinerConfig) -> Self {
        Self::with_hasher(Keccak, config)
    }
}

impl<H: Create2Hasher> AddressMiner<H> {
    /// Creates a miner backed by a custom hash.
    pub fn with_hasher(hasher: H, config: MinerConfig) -> Self {
        Self { hasher, config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Returns the hash primitive.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Encodes the search counter as a 32-byte big-endian inner salt.
    pub fn inner_salt(counter: u64) -> B256 {
        B256::from(U256::from(counter).to_be_bytes::<32>())
    }

    /// Address the factory deploys to for a given inner salt.
    pub fn predict(
        &self,
        init_code_hash: B256,
        admin: Address,
        deployer: Address,
        inner_salt: B256,
    ) -> Address {
        let factory_salt = self.hasher.factory_salt(admin, inner_salt);
        self.hasher
            .create2_address(deployer, factory_salt, init_code_hash)
    }

    /// Same as [`Self::predict`], hashing the init code first.
    pub fn predict_from_init_code(
        &self,
        init_code: &[u8],
        admin: Address,
        deployer: Address,
        inner_salt: B256,
    ) -> Address {
        self.predict(self.hasher.hash(init_code), admin, deployer, inner_salt)
    }

    /// Finds the first inner salt whose address is numerically below `target`.
    ///
    /// # Arguments
    /// * `init_code` - Creation bytecode with encoded constructor arguments
    /// * `admin` - Token admin the factory binds the salt to
    /// * `deployer` - Factory address performing CREATE2
    /// * `target` - Exclusive upper bound for the resulting address
    ///
    /// # Errors
    /// Returns [`LaunchError::SearchExhausted`] when no salt within
    /// `max_attempts` qualifies.
    pub fn mine(
        &self,
        init_code: &[u8],
        admin: Address,
        deployer: Address,
        target: Address,
    ) -> Result<SaltResult> {
        let init_code_hash = self.hasher.hash(init_code);
        info!(
            admin = %admin,
            deployer = %deployer,
            target = %target,
            max_attempts = self.config.max_attempts,
            "Searching deployment salt"
        );

        for counter in 0..self.config.max_attempts {
            let inner_salt = Self::inner_salt(counter);
            let candidate = self.predict(init_code_hash, admin, deployer, inner_salt);
            if candidate < target {
                debug!(attempts = counter + 1, address = %candidate, "Salt found");
                return Ok(SaltResult::new(inner_salt, candidate));
            }
        }

        warn!(
            admin = %admin,
            deployer = %deployer,
            target = %target,
            max_attempts = self.config.max_attempts,
            "Salt search exhausted"
        );
        Err(LaunchError::SearchExhausted {
            target,
            admin,
            deployer,
            max_attempts: self.config.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, keccak256};
    use std::sync::atomic::{AtomicU64, Ordering};

    const ADMIN: Address = address!("00000000000000000000000000000000000000a1");
    const FACTORY: Address = address!("8EEF0dC80ADf57908bB1be0236c2a72a7e379C2d");
    const PAIRED: Address = address!("D09cf0982A32DD6856e12d6BF2F08A822eA5D91D");

    /// Always hashes to 0xff..ff, so no address ever qualifies.
    struct Saturated;

    impl Create2Hasher for Saturated {
        fn hash(&self, _data: &[u8]) -> B256 {
            B256::repeat_byte(0xff)
        }
    }

    /// Cheap hash whose first 8 bytes are a call counter.
    #[derive(Default)]
    struct Counting {
        calls: AtomicU64,
    }

    impl Create2Hasher for Counting {
        fn hash(&self, _data: &[u8]) -> B256 {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let mut out = [0xffu8; 32];
            // addresses come from the low 20 bytes
            out[12..20].copy_from_slice(&(u64::MAX - n).to_be_bytes());
            B256::from(out)
        }
    }

    #[test]
    fn test_inner_salt_is_left_padded() {
        let salt = AddressMiner::<Keccak>::inner_salt(0x0102);
        assert_eq!(salt[30], 0x01);
        assert_eq!(salt[31], 0x02);
        assert!(salt[..30].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_mine_finds_address_below_target() {
        let miner = AddressMiner::new(MinerConfig::default());
        let result = miner.mine(b"init code", ADMIN, FACTORY, PAIRED).unwrap();
        let predicted = result.predicted_address.unwrap();

        assert!(predicted < PAIRED);
        assert_eq!(
            miner.predict_from_init_code(b"init code", ADMIN, FACTORY, result.salt),
            predicted
        );
    }

    #[test]
    fn test_mine_is_deterministic() {
        let miner = AddressMiner::new(MinerConfig::default());
        let first = miner.mine(b"init code", ADMIN, FACTORY, PAIRED).unwrap();
        let second = miner.mine(b"init code", ADMIN, FACTORY, PAIRED).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_salt_is_bound_to_admin() {
        let miner = AddressMiner::new(MinerConfig::default());
        let salt = AddressMiner::<Keccak>::inner_salt(0);
        let hash = keccak256(b"init code");
        let other_admin = address!("00000000000000000000000000000000000000b2");
        assert_ne!(
            miner.predict(hash, ADMIN, FACTORY, salt),
            miner.predict(hash, other_admin, FACTORY, salt)
        );
    }

    #[test]
    fn test_mine_exhausts_attempts() {
        let miner = AddressMiner::with_hasher(Saturated, MinerConfig { max_attempts: 16 });
        let err = miner.mine(b"init code", ADMIN, FACTORY, PAIRED).unwrap_err();
        assert_eq!(
            err,
            LaunchError::SearchExhausted {
                target: PAIRED,
                admin: ADMIN,
                deployer: FACTORY,
                max_attempts: 16
            }
        );
        assert!(err.to_string().contains(&ADMIN.to_string()));
        assert!(err.to_string().contains(&FACTORY.to_string()));
    }

    #[test]
    fn test_mine_zero_target_never_matches() {
        let miner = AddressMiner::new(MinerConfig { max_attempts: 32 });
        let err = miner.mine(b"init code", ADMIN, FACTORY, Address::ZERO).unwrap_err();
        assert!(matches!(err, LaunchError::SearchExhausted { .. }));
    }

    #[test]
    fn test_mine_stops_at_first_hit() {
        // every candidate starts with 0xff..; only the counter bytes vary
        let target = Address::from_slice(&[
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfa, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ]);
        let miner = AddressMiner::with_hasher(Counting::default(), MinerConfig { max_attempts: 100 });
        let result = miner.mine(b"init code", ADMIN, FACTORY, target).unwrap();

        assert!(result.predicted_address.unwrap() < target);
        // one init-code hash, then two hashes per attempt
        let calls = miner.hasher().calls.load(Ordering::SeqCst);
        assert_eq!(calls % 2, 1);
        assert_eq!(result.salt, AddressMiner::<Keccak>::inner_salt((calls - 1) / 2 - 1));
    }
}
