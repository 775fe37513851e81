use super::validation::{
    validate_positions, validate_rewards, validate_starting_tick, validate_token_fields,
};
use crate::abi::{encode_dev_buy_data, encode_locker_data, encode_static_fee_pool_data, paired_pool_key};
use alloy_primitives::{Address, B256, Bytes, U256};
use launchpad_data::PriceOracle;
use launchpad_domain::constants::{BPS_TOTAL, DEFAULT_TICK_SPACING};
use launchpad_domain::entities::{
    DeploymentConfig, ExtensionConfig, LockerConfig, MevModuleConfig, PoolConfig, PoolPosition,
    PoolPositions, TokenConfig, TokenDeployConfig,
};
use launchpad_domain::environment::DeployerAddresses;
use launchpad_domain::math::{TickDerivationParams, derive_ticks};
use launchpad_domain::math::price_tick::{DEFAULT_RANGE_WIDTH_TICKS, DEFAULT_TARGET_MARKET_CAP_USD};
use launchpad_domain::value_objects::SaltResult;
use launchpad_domain::vanity::{AddressMiner, ConstructorArgs, Create2Hasher, Keccak, MinerConfig};
use launchpad_domain::{LaunchError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

const WEI_PER_ETH: u64 = 1_000_000_000_000_000_000;

/// Ticks used for the standard position when no live quote is consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickDefaults {
    pub tick_lower: Option<i32>,
    pub tick_upper: Option<i32>,
}

impl TickDefaults {
    pub fn new(tick_lower: i32, tick_upper: i32) -> Self {
        Self {
            tick_lower: Some(tick_lower),
            tick_upper: Some(tick_upper),
        }
    }
}

/// Parameters of automatic tick derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoTickOptions {
    pub enabled: bool,
    pub target_market_cap_usd: f64,
    pub range_width_ticks: i32,
}

impl Default for AutoTickOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            target_market_cap_usd: DEFAULT_TARGET_MARKET_CAP_USD,
            range_width_ticks: DEFAULT_RANGE_WIDTH_TICKS,
        }
    }
}

/// A deployment configuration together with its predicted token address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltDeployment {
    pub config: DeploymentConfig,
    pub predicted_address: Address,
}

/// Assembles factory deployment configurations.
///
/// Building runs in this order:
/// 1. Token fields, reward shares, fees and explicit positions are validated
/// 2. Positions are resolved (explicit, live quote, or configured defaults)
/// 3. A salt is mined so the token address sorts below the paired token
/// 4. Pool, locker, MEV and extension payloads are encoded
pub struct DeploymentConfigBuilder<H = Keccak> {
    addresses: DeployerAddresses,
    chain_id: u64,
    creation_code: Bytes,
    tick_spacing: i32,
    defaults: TickDefaults,
    miner: AddressMiner<H>,
    price_oracle: Option<Arc<dyn PriceOracle>>,
    auto_ticks: AutoTickOptions,
}

impl DeploymentConfigBuilder<Keccak> {
    /// Creates a builder with the default tick spacing and a Keccak miner.
    ///
    /// # Arguments
    /// * `addresses` - Validated address book of the target network
    /// * `chain_id` - Chain the token originates on
    /// * `creation_code` - Token contract creation bytecode, without arguments
    pub fn new(addresses: DeployerAddresses, chain_id: u64, creation_code: Bytes) -> Self {
        Self {
            addresses,
            chain_id,
            creation_code,
            tick_spacing: DEFAULT_TICK_SPACING,
            defaults: TickDefaults::default(),
            miner: AddressMiner::new(MinerConfig::default()),
            price_oracle: None,
            auto_ticks: AutoTickOptions::default(),
        }
    }
}

impl<H: Create2Hasher> DeploymentConfigBuilder<H> {
    /// Replaces the salt miner.
    pub fn with_miner<M: Create2Hasher>(self, miner: AddressMiner<M>) -> DeploymentConfigBuilder<M> {
        DeploymentConfigBuilder {
            addresses: self.addresses,
            chain_id: self.chain_id,
            creation_code: self.creation_code,
            tick_spacing: self.tick_spacing,
            defaults: self.defaults,
            miner,
            price_oracle: self.price_oracle,
            auto_ticks: self.auto_ticks,
        }
    }

    pub fn with_tick_spacing(mut self, tick_spacing: i32) -> Self {
        self.tick_spacing = tick_spacing;
        self
    }

    pub fn with_defaults(mut self, defaults: TickDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Enables automatic ticks from `oracle` when `options.enabled` is set.
    pub fn with_price_oracle(mut self, oracle: Arc<dyn PriceOracle>, options: AutoTickOptions) -> Self {
        self.price_oracle = Some(oracle);
        self.auto_ticks = options;
        self
    }

    pub fn addresses(&self) -> &DeployerAddresses {
        &self.addresses
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn tick_spacing(&self) -> i32 {
        self.tick_spacing
    }

    /// Whether standard positions are priced from a live quote.
    pub fn auto_ticks_enabled(&self) -> bool {
        self.auto_ticks.enabled && self.price_oracle.is_some()
    }

    /// Constructor arguments the factory passes to the token contract.
    pub fn constructor_args(&self, token: &TokenConfig) -> ConstructorArgs {
        ConstructorArgs::new(
            token.name.as_str(),
            token.symbol.as_str(),
            token.admin,
            token.image.as_str(),
            token.metadata_json(),
            token.context_json(),
            self.chain_id,
        )
    }

    /// Mines an inner salt for `token`.
    ///
    /// Blocks the calling thread for up to the miner's attempt bound.
    ///
    /// # Errors
    /// Returns [`LaunchError::SearchExhausted`] if no salt qualifies.
    pub fn generate_salt(&self, token: &TokenConfig) -> Result<SaltResult> {
        let init_code = self.constructor_args(token).init_code(&self.creation_code);
        self.miner.mine(
            &init_code,
            token.admin,
            self.addresses.factory,
            self.addresses.paired_token,
        )
    }

    /// Address the factory deploys `token` to with the given inner salt.
    pub fn predict_address(&self, salt: B256, token: &TokenConfig) -> Address {
        let init_code = self.constructor_args(token).init_code(&self.creation_code);
        self.miner
            .predict_from_init_code(&init_code, token.admin, self.addresses.factory, salt)
    }

    /// Re-derives the token address from an assembled configuration.
    pub fn preflight_address(&self, config: &DeploymentConfig) -> Address {
        let token = &config.token;
        let args = ConstructorArgs::new(
            token.name.as_str(),
            token.symbol.as_str(),
            token.admin,
            token.image.as_str(),
            token.metadata.as_str(),
            token.context.as_str(),
            token.originating_chain_id,
        );
        self.miner.predict_from_init_code(
            &args.init_code(&self.creation_code),
            token.admin,
            self.addresses.factory,
            token.salt,
        )
    }

    /// Resolves the liquidity positions and the starting tick for `token`.
    ///
    /// # Errors
    /// Live-quote failures are wrapped in [`LaunchError::AutoTicks`]; a
    /// standard position with neither a quote nor defaults is a
    /// [`LaunchError::Validation`].
    pub async fn resolve_positions(&self, token: &TokenConfig) -> Result<(Vec<PoolPosition>, Option<i32>)> {
        if let PoolPositions::Explicit(positions) = &token.pool.positions {
            return Ok((positions.clone(), token.pool.starting_tick));
        }

        if self.auto_ticks.enabled
            && let Some(oracle) = &self.price_oracle
        {
            let position = self
                .auto_position(oracle.as_ref())
                .await
                .map_err(|e| {
                    warn!(
                        price_source_failure = e.is_price_source_failure(),
                        error = %e,
                        "Automatic tick derivation failed"
                    );
                    LaunchError::AutoTicks(Box::new(e))
                })?;
            let starting_tick = token.pool.starting_tick.unwrap_or(position.tick_lower);
            return Ok((vec![position], Some(starting_tick)));
        }

        match (self.defaults.tick_lower, self.defaults.tick_upper) {
            (Some(tick_lower), Some(tick_upper)) => Ok((
                vec![PoolPosition {
                    tick_lower,
                    tick_upper,
                    position_bps: BPS_TOTAL as u16,
                }],
                token.pool.starting_tick,
            )),
            _ => Err(LaunchError::validation(
                "tick_lower and tick_upper defaults are required for standard pool positions",
            )),
        }
    }

    async fn auto_position(&self, oracle: &dyn PriceOracle) -> Result<PoolPosition> {
        let quote = oracle.get_quote(false).await?;
        let params = TickDerivationParams {
            target_market_cap_usd: self.auto_ticks.target_market_cap_usd,
            tick_spacing: self.tick_spacing,
            range_width_ticks: self.auto_ticks.range_width_ticks,
        };
        let range = derive_ticks(quote.used_price_usd, &params)?;
        info!(
            used_price_usd = quote.used_price_usd,
            tick_lower = range.tick_lower,
            tick_upper = range.tick_upper,
            "Derived automatic ticks"
        );
        Ok(PoolPosition {
            tick_lower: range.tick_lower,
            tick_upper: range.tick_upper,
            position_bps: BPS_TOTAL as u16,
        })
    }

    /// Validates `token`, resolves its positions and mines its salt.
    ///
    /// # Errors
    /// Any validation, quote, tick, search, ordering or encoding failure.
    pub async fn build(&self, token: &TokenConfig) -> Result<BuiltDeployment> {
        self.validate(token)?;
        let (positions, starting_tick) = self.resolve_positions(token).await?;
        self.assemble(token, &positions, starting_tick)
    }

    /// Checks everything that can be checked without a quote or a search.
    pub fn validate(&self, token: &TokenConfig) -> Result<()> {
        validate_token_fields(token)?;
        validate_rewards(&token.rewards)?;
        token.fees.unwrap_or_default().validate()?;
        if let PoolPositions::Explicit(positions) = &token.pool.positions {
            validate_positions(positions, self.tick_spacing)?;
            validate_starting_tick(token.pool.starting_tick, positions)?;
        }
        Ok(())
    }

    /// Mines the salt and encodes the configuration for resolved positions.
    ///
    /// # Errors
    /// Position, search, ordering and encoding failures.
    pub fn assemble(
        &self,
        token: &TokenConfig,
        positions: &[PoolPosition],
        starting_tick: Option<i32>,
    ) -> Result<BuiltDeployment> {
        validate_positions(positions, self.tick_spacing)?;
        validate_starting_tick(starting_tick, positions)?;

        let salt = self.generate_salt(token)?;
        let predicted = salt
            .predicted_address
            .unwrap_or_else(|| self.predict_address(salt.salt, token));
        let paired = self.addresses.paired_token;
        if predicted >= paired {
            warn!(predicted = %predicted, paired = %paired, "Predicted token does not sort below paired token");
            return Err(LaunchError::OrderingConstraint { predicted, paired });
        }

        let fees = token.fees.unwrap_or_default();
        let config = DeploymentConfig {
            token: TokenDeployConfig {
                admin: token.admin,
                name: token.name.clone(),
                symbol: token.symbol.clone(),
                salt: salt.salt,
                image: token.image.clone(),
                metadata: token.metadata_json(),
                context: token.context_json(),
                originating_chain_id: self.chain_id,
            },
            pool: PoolConfig {
                hook: self.addresses.fee_static_hook,
                paired_token: paired,
                starting_tick: positions[0].tick_lower,
                tick_spacing: self.tick_spacing,
                pool_data: encode_static_fee_pool_data(&fees),
            },
            locker: LockerConfig {
                locker: self.addresses.locker,
                reward_admins: token.rewards.iter().map(|r| r.effective_admin()).collect(),
                reward_recipients: token.rewards.iter().map(|r| r.recipient).collect(),
                reward_bps: token.rewards.iter().map(|r| r.bps).collect(),
                tick_lower: positions.iter().map(|p| p.tick_lower).collect(),
                tick_upper: positions.iter().map(|p| p.tick_upper).collect(),
                position_bps: positions.iter().map(|p| p.position_bps).collect(),
                locker_data: encode_locker_data(token.rewards.len()),
            },
            mev_module: MevModuleConfig {
                mev_module: self.addresses.mev_module,
                mev_module_data: Bytes::new(),
            },
            extensions: self.extensions(token)?,
        };

        debug!(
            token = %predicted,
            salt = %salt.salt,
            positions = positions.len(),
            extensions = config.extensions.len(),
            "Deployment config assembled"
        );
        Ok(BuiltDeployment {
            config,
            predicted_address: predicted,
        })
    }

    fn extensions(&self, token: &TokenConfig) -> Result<Vec<ExtensionConfig>> {
        let Some(dev_buy) = token.dev_buy.filter(|d| d.eth_amount > Decimal::ZERO) else {
            return Ok(Vec::new());
        };
        let extension = self
            .addresses
            .dev_buy
            .ok_or_else(|| LaunchError::validation("Dev buy extension address is required"))?;
        let pool_key = paired_pool_key(
            self.addresses.paired_token,
            self.addresses.weth.unwrap_or(Address::ZERO),
            self.tick_spacing,
            self.addresses.fee_static_hook,
        )?;

        Ok(vec![ExtensionConfig {
            extension,
            msg_value: eth_to_wei(dev_buy.eth_amount)?,
            extension_bps: 0,
            extension_data: encode_dev_buy_data(pool_key, token.admin),
        }])
    }
}

/// Converts an ETH amount to wei, rounding half away from zero.
///
/// # Errors
/// Negative or overflowing amounts are rejected.
pub fn eth_to_wei(amount: Decimal) -> Result<U256> {
    let wei = amount
        .checked_mul(Decimal::from(WEI_PER_ETH))
        .ok_or_else(|| LaunchError::Validation(format!("Dev buy amount {amount} is too large")))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    wei.to_u128()
        .map(U256::from)
        .ok_or_else(|| LaunchError::Validation(format!("Dev buy amount {amount} is not a valid wei value")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpad_domain::entities::DevBuy;
    use rust_decimal_macros::dec;

    #[test]
    fn test_eth_to_wei() {
        assert_eq!(eth_to_wei(dec!(1)).unwrap(), U256::from(WEI_PER_ETH));
        assert_eq!(
            eth_to_wei(dec!(0.0001)).unwrap(),
            U256::from(100_000_000_000_000u64)
        );
        assert_eq!(
            eth_to_wei(dec!(0.0000000000000000005)).unwrap(),
            U256::from(1u64)
        );
        assert!(eth_to_wei(dec!(-1)).is_err());
    }

    #[test]
    fn test_auto_tick_defaults() {
        let options = AutoTickOptions::default();
        assert!(options.enabled);
        assert_eq!(options.target_market_cap_usd, 27_000.0);
        assert_eq!(options.range_width_ticks, 110_400);
    }

    #[test]
    fn test_zero_dev_buy_adds_no_extension() {
        let token = TokenConfig {
            name: "Token".to_string(),
            symbol: "TKN".to_string(),
            image: "ipfs://img".to_string(),
            admin: Address::repeat_byte(0xa1),
            metadata: Default::default(),
            context: Default::default(),
            dev_buy: Some(DevBuy {
                eth_amount: Decimal::ZERO,
            }),
            rewards: vec![],
            pool: Default::default(),
            fees: None,
        };
        let addresses = DeployerAddresses {
            factory: Address::repeat_byte(1),
            locker: Address::repeat_byte(2),
            mev_module: Address::repeat_byte(3),
            fee_locker: Address::repeat_byte(4),
            fee_static_hook: Address::repeat_byte(5),
            paired_token: Address::repeat_byte(0xd0),
            dev_buy: None,
            weth: None,
        };
        let builder = DeploymentConfigBuilder::new(addresses, 8453, Bytes::from_static(b"code"));
        assert!(builder.extensions(&token).unwrap().is_empty());
    }
}
