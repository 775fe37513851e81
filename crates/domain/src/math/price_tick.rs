use crate::constants::{DEFAULT_TICK_SPACING, MAX_TICK, MIN_TICK, TOKEN_SUPPLY};
use crate::error::{LaunchError, Result};
use crate::value_objects::TickRange;
use serde::{Deserialize, Serialize};

/// Market cap, in USD, the launched token is priced at when liquidity opens.
pub const DEFAULT_TARGET_MARKET_CAP_USD: f64 = 27_000.0;

/// Width of the single launch position, in ticks.
pub const DEFAULT_RANGE_WIDTH_TICKS: i32 = 110_400;

const TICK_BASE: f64 = 1.0001;

/// Inputs to [`derive_ticks`] besides the price itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickDerivationParams {
    /// Target fully diluted market cap in USD.
    pub target_market_cap_usd: f64,
    /// Pool tick spacing. Bounds are only guaranteed aligned when it divides
    /// `MAX_TICK` (887200), since clamping snaps to the protocol bound.
    pub tick_spacing: i32,
    /// Requested position width in ticks.
    pub range_width_ticks: i32,
}

impl Default for TickDerivationParams {
    fn default() -> Self {
        Self {
            target_market_cap_usd: DEFAULT_TARGET_MARKET_CAP_USD,
            tick_spacing: DEFAULT_TICK_SPACING,
            range_width_ticks: DEFAULT_RANGE_WIDTH_TICKS,
        }
    }
}

/// Returns the price corresponding to a given tick.
/// P = 1.0001 ^ tick
pub fn tick_to_price(tick: i32) -> f64 {
    TICK_BASE.powi(tick)
}

/// Returns the unrounded tick corresponding to a given price.
/// tick = ln(P) / ln(1.0001)
pub fn price_to_tick(price: f64) -> Result<f64> {
    if !price.is_finite() || price <= 0.0 {
        return Err(LaunchError::TickConversion(format!(
            "price {price} has no tick"
        )));
    }
    Ok(price.ln() / TICK_BASE.ln())
}

/// Clamps a tick into the protocol-wide bound.
pub fn clamp_tick(tick: i64) -> i32 {
    tick.clamp(i64::from(MIN_TICK), i64::from(MAX_TICK)) as i32
}

/// Rounds `tick / spacing` to the nearest integer, halves towards positive
/// infinity, and scales back up.
fn round_to_spacing(tick: f64, spacing: i32) -> i64 {
    let scaled = tick / f64::from(spacing);
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64 * i64::from(spacing)
}

/// Derives the launch position's tick range from the paired token's USD price.
///
/// The launched token is priced at `target_market_cap_usd / TOKEN_SUPPLY` USD,
/// converted into paired-token units, and the resulting tick becomes the
/// lower bound. The lower bound is pulled down when needed so the full width
/// fits below [`MAX_TICK`].
///
/// # Errors
/// Returns [`LaunchError::InvalidPrice`] for a non-positive or non-finite
/// price, [`LaunchError::Validation`] for non-positive spacing or width, and
/// [`LaunchError::TickConversion`] when the price ratio is unusable.
pub fn derive_ticks(price_usd: f64, params: &TickDerivationParams) -> Result<TickRange> {
    if !price_usd.is_finite() || price_usd <= 0.0 {
        return Err(LaunchError::InvalidPrice(format!(
            "paired token price {price_usd} passed to tick derivation"
        )));
    }
    if params.tick_spacing <= 0 {
        return Err(LaunchError::validation("tick_spacing must be positive"));
    }
    if params.range_width_ticks <= 0 {
        return Err(LaunchError::validation("range_width_ticks must be positive"));
    }

    let spacing = params.tick_spacing;
    let aligned_width = match (params.range_width_ticks / spacing) * spacing {
        0 => spacing,
        width => width,
    };

    let token_price_usd = params.target_market_cap_usd / TOKEN_SUPPLY as f64;
    let token_price_in_paired = token_price_usd / price_usd;
    if !token_price_in_paired.is_finite() || token_price_in_paired <= 0.0 {
        return Err(LaunchError::TickConversion(format!(
            "could not express token price {token_price_usd} USD in paired-token terms"
        )));
    }

    let raw_tick = price_to_tick(token_price_in_paired)?;
    let aligned_lower = round_to_spacing(raw_tick, spacing);

    let clamped_lower = clamp_tick(aligned_lower);
    let max_lower = i64::from(MAX_TICK) - i64::from(aligned_width);
    let tick_lower = clamp_tick(i64::from(clamped_lower).min(max_lower));
    let tick_upper = clamp_tick(i64::from(tick_lower) + i64::from(aligned_width));

    Ok(TickRange::new(tick_lower, tick_upper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn defaults() -> TickDerivationParams {
        TickDerivationParams::default()
    }

    #[test]
    fn test_tick_to_price() {
        // Tick 0 -> Price 1
        assert_eq!(tick_to_price(0), 1.0);

        // Tick 100 -> 1.0001^100 ~= 1.010049
        let p100 = tick_to_price(100);
        assert!((p100 - 1.01004966).abs() < 0.000001);
    }

    #[test]
    fn test_price_to_tick() {
        assert_eq!(price_to_tick(1.0).unwrap(), 0.0);
        assert_eq!(price_to_tick(1.01004966).unwrap().round(), 100.0);
        assert!(price_to_tick(0.0).is_err());
        assert!(price_to_tick(f64::NAN).is_err());
    }

    #[test]
    fn test_derive_ticks_from_smoothed_quote() {
        // used price of a 0.00002852 spot with a +1.11% six hour change
        let spot = 0.00002852_f64;
        let then = spot / (1.0 + 1.11 / 100.0);
        let twap = (2.0 / 3.0) * spot + (1.0 / 3.0) * then;
        let used = (spot + twap) / 2.0;

        let range = derive_ticks(used, &defaults()).unwrap();
        assert_eq!(range.tick_lower, -46_600);
        assert_eq!(range.tick_upper, -46_600 + 110_400);
    }

    #[test]
    fn test_derive_ticks_reference_price() {
        let range = derive_ticks(0.000024812482489493697, &defaults()).unwrap();
        assert_eq!(range.tick_lower, -45_200);
        assert_eq!(range.tick_upper, 65_200);
    }

    #[test]
    fn test_derive_ticks_rejects_bad_price() {
        assert!(matches!(
            derive_ticks(0.0, &defaults()),
            Err(LaunchError::InvalidPrice(_))
        ));
        assert!(matches!(
            derive_ticks(-1.0, &defaults()),
            Err(LaunchError::InvalidPrice(_))
        ));
        assert!(matches!(
            derive_ticks(f64::INFINITY, &defaults()),
            Err(LaunchError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_derive_ticks_rejects_bad_params() {
        let params = TickDerivationParams {
            tick_spacing: 0,
            ..defaults()
        };
        assert!(matches!(
            derive_ticks(1.0, &params),
            Err(LaunchError::Validation(_))
        ));

        let params = TickDerivationParams {
            range_width_ticks: -200,
            ..defaults()
        };
        assert!(matches!(
            derive_ticks(1.0, &params),
            Err(LaunchError::Validation(_))
        ));
    }

    #[test]
    fn test_derive_ticks_unrepresentable_ratio() {
        // subnormal price overflows the ratio to infinity
        assert!(matches!(
            derive_ticks(5e-324, &defaults()),
            Err(LaunchError::TickConversion(_))
        ));

        let params = TickDerivationParams {
            target_market_cap_usd: 0.0,
            ..defaults()
        };
        assert!(matches!(
            derive_ticks(1.0, &params),
            Err(LaunchError::TickConversion(_))
        ));
    }

    #[test]
    fn test_narrow_width_uses_one_spacing() {
        let params = TickDerivationParams {
            range_width_ticks: 100,
            ..defaults()
        };
        let range = derive_ticks(1.0, &params).unwrap();
        assert_eq!(range.tick_lower, -151_200);
        assert_eq!(range.width(), 200);
    }

    #[test]
    fn test_lower_shifted_to_fit_width() {
        // raw tick ~884959, above MAX_TICK - width
        let range = derive_ticks(1e-45, &defaults()).unwrap();
        assert_eq!(range.tick_lower, MAX_TICK - 110_400);
        assert_eq!(range.tick_upper, MAX_TICK);
    }

    #[test]
    fn test_oversized_width_is_compressed() {
        let params = TickDerivationParams {
            range_width_ticks: 1_000_000_000,
            ..defaults()
        };
        let range = derive_ticks(0.5, &params).unwrap();
        assert_eq!(range.tick_lower, MIN_TICK);
        assert_eq!(range.tick_upper, MAX_TICK);
    }

    #[test]
    fn test_round_to_spacing_halves_up() {
        assert_eq!(round_to_spacing(-100.0, 200), 0);
        assert_eq!(round_to_spacing(100.0, 200), 200);
        assert_eq!(round_to_spacing(-46_583.4, 200), -46_600);
    }

    proptest! {
        #[test]
        fn prop_ticks_aligned_and_bounded(
            exp in -40.0f64..20.0,
            spacing in prop::sample::select(vec![1, 10, 50, 100, 200, 400]),
        ) {
            let price = 10f64.powf(exp);
            let params = TickDerivationParams { tick_spacing: spacing, ..defaults() };
            let range = derive_ticks(price, &params).unwrap();
            prop_assert!(range.is_aligned(spacing));
            prop_assert!(range.tick_lower >= MIN_TICK && range.tick_upper <= MAX_TICK);
            prop_assert!(range.tick_lower < range.tick_upper);
        }

        #[test]
        fn prop_higher_price_never_raises_tick(a in -12.0f64..0.0, b in -12.0f64..0.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let cheap = derive_ticks(10f64.powf(lo), &defaults()).unwrap();
            let dear = derive_ticks(10f64.powf(hi), &defaults()).unwrap();
            prop_assert!(dear.tick_lower <= cheap.tick_lower);
        }
    }
}
