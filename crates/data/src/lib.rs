//! Market data for automatic tick derivation.
//!
//! This crate fetches a USD quote for the paired token, approximates a TWAP,
//! applies the volatility guard and caches the result.

/// Market data providers.
pub mod providers;
/// HTTP transport abstraction.
pub mod transport;

use async_trait::async_trait;
use launchpad_domain::Result;
use launchpad_domain::value_objects::PriceQuote;
use std::sync::Arc;

/// Source of guarded USD quotes for the paired token.
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Returns a quote, reusing a fresh cached one unless `force_refresh`.
    ///
    /// # Errors
    /// Fails on network, timeout, payload, price or volatility problems.
    async fn get_quote(&self, force_refresh: bool) -> Result<Arc<PriceQuote>>;
}
