//! Market data providers.

mod dexscreener;

pub use dexscreener::{
    DEFAULT_PAIR_URL, DexScreenerOracle, DexScreenerPair, DexScreenerResponse, OracleConfig,
};
