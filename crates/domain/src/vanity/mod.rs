//! Deterministic deployment address mining.
//!
//! The factory derives the deployment salt from the caller's inner salt and
//! the token admin, then deploys with CREATE2. The miner searches inner salts
//! until the resulting address sorts below a target address.

mod hasher;
mod init_code;
mod miner;

pub use hasher::{Create2Hasher, Keccak};
pub use init_code::ConstructorArgs;
pub use miner::{AddressMiner, MinerConfig};
