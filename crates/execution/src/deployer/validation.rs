use launchpad_domain::constants::BPS_TOTAL;
use launchpad_domain::entities::{PoolPosition, RewardRecipient, TokenConfig};
use launchpad_domain::{LaunchError, Result};

/// Fails unless `tick` is a multiple of `spacing`.
pub fn assert_tick_multiple_of_spacing(tick: i32, spacing: i32) -> Result<()> {
    if spacing <= 0 || tick % spacing != 0 {
        return Err(LaunchError::Validation(format!(
            "Tick {tick} is not a multiple of spacing {spacing}"
        )));
    }
    Ok(())
}

/// Fails unless the values add up to exactly 10_000.
pub fn assert_bps_sum(values: impl IntoIterator<Item = u16>, label: &str) -> Result<()> {
    let total: u32 = values.into_iter().map(u32::from).sum();
    if total != BPS_TOTAL {
        return Err(LaunchError::Validation(format!(
            "{label} must sum to {BPS_TOTAL}, got {total}"
        )));
    }
    Ok(())
}

/// Checks the fields every token needs before anything else runs.
pub fn validate_token_fields(token: &TokenConfig) -> Result<()> {
    if token.name.trim().is_empty()
        || token.symbol.trim().is_empty()
        || token.image.trim().is_empty()
    {
        return Err(LaunchError::validation(
            "Token name, symbol, and image are required",
        ));
    }
    if token.admin.is_zero() {
        return Err(LaunchError::validation("Valid token admin address is required"));
    }
    Ok(())
}

/// Reward shares must cover exactly 100%.
pub fn validate_rewards(recipients: &[RewardRecipient]) -> Result<()> {
    assert_bps_sum(recipients.iter().map(|r| r.bps), "Reward BPS")
}

/// Every bound must sit on the spacing grid and each range must be non-empty.
pub fn validate_positions(positions: &[PoolPosition], tick_spacing: i32) -> Result<()> {
    if positions.is_empty() {
        return Err(LaunchError::validation("At least one pool position is required"));
    }
    for position in positions {
        assert_tick_multiple_of_spacing(position.tick_lower, tick_spacing)?;
        assert_tick_multiple_of_spacing(position.tick_upper, tick_spacing)?;
        if position.tick_lower >= position.tick_upper {
            return Err(LaunchError::Validation(format!(
                "Position tick_lower {} must be below tick_upper {}",
                position.tick_lower, position.tick_upper
            )));
        }
    }
    Ok(())
}

/// An explicit starting tick must match the first position's lower tick.
pub fn validate_starting_tick(starting_tick: Option<i32>, positions: &[PoolPosition]) -> Result<()> {
    let first = positions
        .first()
        .ok_or_else(|| LaunchError::validation("At least one pool position is required"))?;
    match starting_tick {
        Some(tick) if tick != first.tick_lower => Err(LaunchError::Validation(format!(
            "pool.starting_tick {tick} must equal the first position tick_lower {}",
            first.tick_lower
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;
    use launchpad_domain::entities::{PoolSettings, TokenContext, TokenMetadata};

    fn position(tick_lower: i32, tick_upper: i32) -> PoolPosition {
        PoolPosition {
            tick_lower,
            tick_upper,
            position_bps: 10_000,
        }
    }

    fn token() -> TokenConfig {
        TokenConfig {
            name: "Token".to_string(),
            symbol: "TKN".to_string(),
            image: "ipfs://img".to_string(),
            admin: Address::repeat_byte(0xa1),
            metadata: TokenMetadata::default(),
            context: TokenContext::default(),
            dev_buy: None,
            rewards: vec![RewardRecipient::new(Address::repeat_byte(0xa1), 10_000)],
            pool: PoolSettings::default(),
            fees: None,
        }
    }

    #[test]
    fn test_bps_sum() {
        assert!(assert_bps_sum([5_000, 5_000], "Reward BPS").is_ok());
        let err = assert_bps_sum([5_000, 4_000], "Reward BPS").unwrap_err();
        assert_eq!(
            err,
            LaunchError::Validation("Reward BPS must sum to 10000, got 9000".to_string())
        );
        // no u16 overflow
        assert!(assert_bps_sum([u16::MAX, u16::MAX], "Reward BPS").is_err());
        assert!(assert_bps_sum([], "Reward BPS").is_err());
    }

    #[test]
    fn test_tick_multiple() {
        assert!(assert_tick_multiple_of_spacing(-46_600, 200).is_ok());
        assert!(assert_tick_multiple_of_spacing(-46_650, 200).is_err());
        assert!(assert_tick_multiple_of_spacing(0, 0).is_err());
    }

    #[test]
    fn test_positions() {
        assert!(validate_positions(&[position(-200, 200)], 200).is_ok());
        assert!(validate_positions(&[], 200).is_err());
        assert!(validate_positions(&[position(-200, 300)], 200).is_err());
        assert!(validate_positions(&[position(200, 200)], 200).is_err());
    }

    #[test]
    fn test_starting_tick() {
        let positions = [position(-400, 400), position(400, 800)];
        assert!(validate_starting_tick(None, &positions).is_ok());
        assert!(validate_starting_tick(Some(-400), &positions).is_ok());
        assert!(validate_starting_tick(Some(400), &positions).is_err());
    }

    #[test]
    fn test_token_fields() {
        assert!(validate_token_fields(&token()).is_ok());

        let mut missing_image = token();
        missing_image.image = "  ".to_string();
        assert!(validate_token_fields(&missing_image).is_err());

        let mut zero_admin = token();
        zero_admin.admin = Address::ZERO;
        assert!(validate_token_fields(&zero_admin).is_err());
    }
}
