//! TWAP approximation and volatility guard.
//!
//! The price source only reports a spot price and a handful of percentage
//! changes, so the TWAP is approximated from the six-hour change: the price
//! six hours ago is back-solved and blended with the spot price.

use crate::error::{LaunchError, Result};
use serde::{Deserialize, Serialize};

/// Maximum tolerated one-hour change, in percent.
pub const DEFAULT_MAX_HOURLY_CHANGE_PCT: f64 = 60.0;

/// Spot/TWAP deviation above which the spot price is ignored.
pub const DEFAULT_MAX_SPOT_DEVIATION_RATIO: f64 = 0.25;

/// Default weight of the spot price in the TWAP blend; the back-solved
/// historical price gets the remainder.
pub const DEFAULT_TWAP_SPOT_WEIGHT: f64 = 2.0 / 3.0;

/// Thresholds and weighting applied before a quote is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityGuard {
    /// Maximum absolute one-hour change in percent.
    pub max_hourly_change_pct: f64,
    /// Maximum `|spot - twap| / twap` before the TWAP is used alone.
    pub max_spot_deviation_ratio: f64,
    /// Spot weight in `[0, 1]` used by [`approximate_twap`].
    pub twap_spot_weight: f64,
}

impl Default for VolatilityGuard {
    fn default() -> Self {
        Self {
            max_hourly_change_pct: DEFAULT_MAX_HOURLY_CHANGE_PCT,
            max_spot_deviation_ratio: DEFAULT_MAX_SPOT_DEVIATION_RATIO,
            twap_spot_weight: DEFAULT_TWAP_SPOT_WEIGHT,
        }
    }
}

impl VolatilityGuard {
    /// Checks that thresholds are finite and non-negative and the weight is in `[0, 1]`.
    ///
    /// # Errors
    /// Returns [`LaunchError::Validation`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let non_negative = |value: f64, field: &str| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(LaunchError::Validation(format!(
                    "{field} must be finite and non-negative, got {value}"
                )))
            }
        };
        non_negative(self.max_hourly_change_pct, "max_hourly_change_pct")?;
        non_negative(self.max_spot_deviation_ratio, "max_spot_deviation_ratio")?;
        if !(0.0..=1.0).contains(&self.twap_spot_weight) {
            return Err(LaunchError::Validation(format!(
                "twap_spot_weight must be within [0, 1], got {}",
                self.twap_spot_weight
            )));
        }
        Ok(())
    }
}

/// Approximates the TWAP from the spot price and the six-hour change,
/// blending `spot_weight * spot + (1 - spot_weight) * price_six_hours_ago`.
///
/// Falls back to the spot price when the change is missing, non-finite or
/// at or below -100% (the back-solve would divide by zero or flip sign).
pub fn approximate_twap(spot: f64, h6_change_pct: Option<f64>, spot_weight: f64) -> f64 {
    let Some(change) = h6_change_pct.filter(|c| c.is_finite()) else {
        return spot;
    };
    let delta = change / 100.0;
    if delta <= -1.0 {
        return spot;
    }
    let price_six_hours_ago = spot / (1.0 + delta);
    spot_weight * spot + (1.0 - spot_weight) * price_six_hours_ago
}

/// Picks the price to use from spot and TWAP.
///
/// # Errors
/// Returns [`LaunchError::Volatility`] when `|h1|` exceeds the guard.
pub fn apply_volatility_guard(
    spot: f64,
    twap: f64,
    h1_change_pct: Option<f64>,
    guard: &VolatilityGuard,
) -> Result<f64> {
    if let Some(hourly) = h1_change_pct.filter(|c| c.is_finite())
        && hourly.abs() > guard.max_hourly_change_pct
    {
        return Err(LaunchError::Volatility {
            hourly_change_pct: hourly,
            max_pct: guard.max_hourly_change_pct,
        });
    }

    if !twap.is_finite() || twap <= 0.0 {
        return Ok(spot);
    }

    let deviation = (spot - twap).abs() / twap;
    if deviation > guard.max_spot_deviation_ratio {
        return Ok(twap);
    }

    Ok((spot + twap) / 2.0)
}
