//! Tick and price math.

/// Conversion between USD prices and aligned tick ranges.
pub mod price_tick;
/// TWAP approximation and volatility guard.
pub mod twap;

pub use price_tick::{TickDerivationParams, derive_ticks, price_to_tick, tick_to_price};
pub use twap::{VolatilityGuard, apply_volatility_guard, approximate_twap};
