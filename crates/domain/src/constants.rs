use alloy_primitives::U256;

/// Fixed whole-token supply of every launched token.
pub const TOKEN_SUPPLY: u64 = 100_000_000_000;

/// Decimals of every launched token.
pub const TOKEN_DECIMALS: u8 = 18;

/// Chain id used when none is configured (Base mainnet).
pub const DEFAULT_CHAIN_ID: u64 = 8453;

/// Tick spacing of launch pools.
pub const DEFAULT_TICK_SPACING: i32 = 200;

/// Upper tick bound of the target AMM.
pub const MAX_TICK: i32 = 887_200;

/// Lower tick bound of the target AMM.
pub const MIN_TICK: i32 = -887_200;

/// Basis points that reward and position splits must add up to.
pub const BPS_TOTAL: u32 = 10_000;

/// Fee flag marking a pool as dynamic-fee.
pub const DYNAMIC_FEE_FLAG: u32 = 0x80_0000;

/// Default fee, in bps, charged on each side of the pool.
pub const DEFAULT_FEE_BPS: u16 = 100;

/// Default number of salts tried before giving up.
pub const DEFAULT_MAX_SALT_ATTEMPTS: u64 = 500_000;

/// Total supply in base units (`TOKEN_SUPPLY * 10^18`).
pub fn max_supply_base_units() -> U256 {
    U256::from(TOKEN_SUPPLY) * U256::from(10u64).pow(U256::from(TOKEN_DECIMALS))
}
