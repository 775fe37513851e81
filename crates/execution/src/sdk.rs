//! High-level launch SDK.
//!
//! Wires the address book, the price oracle, the deployment builder and the
//! transaction submitter together.

use crate::deployer::{
    AutoTickOptions, BuiltDeployment, DeployOptions, DeployOutcome, DeploymentConfigBuilder,
    Deployer, TickDefaults,
};
use crate::fees::{ClaimContext, ClaimFeesParams, ClaimOutcome, claim_fees};
use crate::submitter::TransactionSubmitter;
use alloy_primitives::{Address, Bytes};
use launchpad_data::PriceOracle;
use launchpad_data::providers::{DexScreenerOracle, OracleConfig};
use launchpad_domain::entities::TokenConfig;
use launchpad_domain::environment::{Environment, LaunchAddresses};
use launchpad_domain::math::price_tick::{DEFAULT_RANGE_WIDTH_TICKS, DEFAULT_TARGET_MARKET_CAP_USD};
use launchpad_domain::{LaunchError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Caller overrides for automatic tick derivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoTickConfig {
    /// Defaults to on for Base mainnet without explicit default ticks.
    pub enabled: Option<bool>,
    pub target_market_cap_usd: Option<f64>,
    pub range_width_ticks: Option<i32>,
}

/// Configuration of [`LaunchSdk`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchSdkConfig {
    pub environment: Environment,
    /// Merged over the environment's address book.
    #[serde(default)]
    pub address_overrides: LaunchAddresses,
    /// Defaults to the environment's chain id.
    #[serde(default)]
    pub chain_id: Option<u64>,
    #[serde(default)]
    pub defaults: Option<TickDefaults>,
    #[serde(default)]
    pub auto_ticks: AutoTickConfig,
    #[serde(default)]
    pub simulate: bool,
    #[serde(default)]
    pub default_account: Option<Address>,
    #[serde(skip)]
    pub oracle: OracleConfig,
}

impl Default for LaunchSdkConfig {
    fn default() -> Self {
        Self {
            environment: Environment::BaseMainnet,
            address_overrides: LaunchAddresses::default(),
            chain_id: None,
            defaults: None,
            auto_ticks: AutoTickConfig::default(),
            simulate: false,
            default_account: None,
            oracle: OracleConfig::default(),
        }
    }
}

impl LaunchSdkConfig {
    /// Resolved auto-tick options for this configuration.
    pub fn auto_tick_options(&self) -> AutoTickOptions {
        let enabled_by_default =
            self.environment == Environment::BaseMainnet && self.defaults.is_none();
        AutoTickOptions {
            enabled: self.auto_ticks.enabled.unwrap_or(enabled_by_default),
            target_market_cap_usd: self
                .auto_ticks
                .target_market_cap_usd
                .unwrap_or(DEFAULT_TARGET_MARKET_CAP_USD),
            range_width_ticks: self
                .auto_ticks
                .range_width_ticks
                .unwrap_or(DEFAULT_RANGE_WIDTH_TICKS),
        }
    }
}

/// Entry point for deploying tokens and claiming fees.
pub struct LaunchSdk {
    environment: Environment,
    addresses: LaunchAddresses,
    deployer: Deployer,
    submitter: Option<Arc<dyn TransactionSubmitter>>,
    default_account: Option<Address>,
    simulate: bool,
}

impl LaunchSdk {
    /// Creates an SDK backed by a DexScreener oracle.
    ///
    /// # Errors
    /// Returns [`LaunchError::Validation`] when a required address is missing
    /// or the oracle's volatility guard is invalid.
    pub fn new(
        config: LaunchSdkConfig,
        creation_code: Bytes,
        submitter: Option<Arc<dyn TransactionSubmitter>>,
    ) -> Result<Self> {
        let oracle = Arc::new(DexScreenerOracle::new(config.oracle.clone())?);
        Self::with_price_oracle(config, creation_code, submitter, oracle)
    }

    /// Creates an SDK with a caller-supplied price oracle.
    ///
    /// # Errors
    /// Returns [`LaunchError::Validation`] when a required address is missing.
    pub fn with_price_oracle(
        config: LaunchSdkConfig,
        creation_code: Bytes,
        submitter: Option<Arc<dyn TransactionSubmitter>>,
        oracle: Arc<dyn PriceOracle>,
    ) -> Result<Self> {
        let environment = config.environment;
        let addresses = environment.addresses().merge(&config.address_overrides);
        let deployer_addresses = addresses.validate(environment)?;
        let chain_id = config.chain_id.unwrap_or_else(|| environment.chain_id());
        let auto_ticks = config.auto_tick_options();

        let mut builder = DeploymentConfigBuilder::new(deployer_addresses, chain_id, creation_code)
            .with_price_oracle(oracle, auto_ticks);
        if let Some(defaults) = config.defaults {
            builder = builder.with_defaults(defaults);
        }

        let mut deployer = Deployer::new(builder, submitter.clone()).with_simulate(config.simulate);
        if let Some(account) = config.default_account {
            deployer = deployer.with_default_account(account);
        }

        info!(
            environment = %environment,
            chain_id,
            auto_ticks = deployer.builder().auto_ticks_enabled(),
            simulate = config.simulate,
            "Launch SDK initialised"
        );
        Ok(Self {
            environment,
            addresses,
            deployer,
            submitter,
            default_account: config.default_account,
            simulate: config.simulate,
        })
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Address book after overrides.
    pub fn addresses(&self) -> &LaunchAddresses {
        &self.addresses
    }

    pub fn deployer(&self) -> &Deployer {
        &self.deployer
    }

    /// Builds the configuration for `token` without submitting anything.
    ///
    /// # Errors
    /// Validation, quote, tick, search or ordering failures.
    pub async fn build_config(&self, token: &TokenConfig) -> Result<BuiltDeployment> {
        self.deployer.builder().build(token).await
    }

    /// Deploys `token`, deriving ticks from the live price when enabled.
    ///
    /// # Errors
    /// See [`Deployer::deploy`].
    pub async fn deploy_token(&self, token: &TokenConfig, options: DeployOptions) -> Result<DeployOutcome> {
        self.deployer.deploy(token, options).await
    }

    /// Waits for a deployment and returns the token address.
    ///
    /// # Errors
    /// See [`Deployer::wait_for_token`].
    pub async fn wait_for_token(&self, outcome: &DeployOutcome, confirmations: u64) -> Result<Address> {
        self.deployer.wait_for_token(outcome, confirmations).await
    }

    /// Claims accrued fees of the paired token for `params.fee_owner`.
    ///
    /// # Errors
    /// A missing submitter, fee locker or account, or a submission failure.
    pub async fn claim_fees(&self, params: ClaimFeesParams) -> Result<ClaimOutcome> {
        let submitter = self
            .submitter
            .as_deref()
            .ok_or_else(|| LaunchError::validation("Transaction submitter is required to claim fees"))?;
        let ctx = ClaimContext {
            submitter,
            fee_locker: self.addresses.fee_locker,
            paired_token: self.deployer.builder().addresses().paired_token,
            default_account: self.default_account,
            simulate: self.simulate,
        };
        claim_fees(ctx, params).await
    }
}
