use super::builder::DeploymentConfigBuilder;
use crate::abi::{decode_token_created, encode_deploy_call};
use crate::submitter::{CallSpec, ReceiptStatus, TransactionSubmitter};
use alloy_primitives::{Address, B256};
use launchpad_domain::entities::{DeploymentConfig, TokenConfig};
use launchpad_domain::vanity::{Create2Hasher, Keccak};
use launchpad_domain::{LaunchError, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Placeholder hash returned when a deployment is only simulated.
pub const SIMULATED_DEPLOY_HASH: B256 = B256::repeat_byte(0xab);

/// Per-call deployment options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeployOptions {
    /// Sending account; falls back to the deployer default.
    pub account: Option<Address>,
    /// Overrides the deployer's simulate-only flag.
    pub simulate: Option<bool>,
}

/// Result of [`Deployer::deploy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub tx_hash: B256,
    pub predicted_address: Address,
    /// Address re-derived from the final configuration.
    pub preflight_address: Address,
    pub config: DeploymentConfig,
    pub simulated: bool,
}

/// Builds, simulates and sends factory deployments.
pub struct Deployer<H = Keccak> {
    builder: DeploymentConfigBuilder<H>,
    submitter: Option<Arc<dyn TransactionSubmitter>>,
    default_account: Option<Address>,
    simulate: bool,
}

impl<H: Create2Hasher> Deployer<H> {
    pub fn new(builder: DeploymentConfigBuilder<H>, submitter: Option<Arc<dyn TransactionSubmitter>>) -> Self {
        Self {
            builder,
            submitter,
            default_account: None,
            simulate: false,
        }
    }

    pub fn with_default_account(mut self, account: Address) -> Self {
        self.default_account = Some(account);
        self
    }

    /// Makes every deployment simulate-only unless overridden per call.
    pub fn with_simulate(mut self, simulate: bool) -> Self {
        self.simulate = simulate;
        self
    }

    pub fn builder(&self) -> &DeploymentConfigBuilder<H> {
        &self.builder
    }

    /// Builds the configuration for `token` and, unless simulating, sends it.
    ///
    /// # Errors
    /// Builder failures, a missing submitter or account, a preflight
    /// mismatch, or a submission failure.
    pub async fn deploy(&self, token: &TokenConfig, options: DeployOptions) -> Result<DeployOutcome> {
        let simulate_only = options.simulate.unwrap_or(self.simulate);
        if !simulate_only && self.submitter.is_none() {
            return Err(LaunchError::validation(
                "Transaction submitter is required for deployment",
            ));
        }

        let built = self.builder.build(token).await?;
        let preflight = self.builder.preflight_address(&built.config);
        if preflight != built.predicted_address {
            return Err(LaunchError::Validation(format!(
                "Preflight address {preflight} does not match predicted {}",
                built.predicted_address
            )));
        }

        if simulate_only {
            info!(token = %preflight, "Simulated deployment");
            return Ok(DeployOutcome {
                tx_hash: SIMULATED_DEPLOY_HASH,
                predicted_address: built.predicted_address,
                preflight_address: preflight,
                config: built.config,
                simulated: true,
            });
        }

        let account = options
            .account
            .or(self.default_account)
            .ok_or_else(|| LaunchError::validation("Account is required to send transactions"))?;
        let submitter = self.require_submitter()?;
        let call = CallSpec {
            from: Some(account),
            to: self.builder.addresses().factory,
            data: encode_deploy_call(&built.config)?,
            value: built.config.total_msg_value(),
        };

        let prepared = submitter.simulate(&call).await?;
        let tx_hash = submitter.send(prepared).await?;
        info!(tx_hash = %tx_hash, token = %preflight, account = %account, "Deployment submitted");

        Ok(DeployOutcome {
            tx_hash,
            predicted_address: built.predicted_address,
            preflight_address: preflight,
            config: built.config,
            simulated: false,
        })
    }

    /// Waits for a deployment and returns the created token address.
    ///
    /// A simulated outcome resolves to its preflight address without
    /// touching the chain.
    ///
    /// # Errors
    /// [`LaunchError::Submission`] on revert, a missing `TokenCreated`
    /// event or a zero token address.
    pub async fn wait_for_token(&self, outcome: &DeployOutcome, confirmations: u64) -> Result<Address> {
        if outcome.simulated {
            return Ok(outcome.preflight_address);
        }

        let receipt = self
            .require_submitter()?
            .wait_for_receipt(outcome.tx_hash, confirmations)
            .await?;
        if receipt.status == ReceiptStatus::Reverted {
            warn!(tx_hash = %outcome.tx_hash, "Deployment reverted");
            return Err(LaunchError::Submission(format!(
                "Transaction {} reverted",
                outcome.tx_hash
            )));
        }

        let factory = self.builder.addresses().factory;
        let token = receipt
            .logs
            .iter()
            .filter(|log| log.address == factory)
            .find_map(decode_token_created)
            .ok_or_else(|| {
                LaunchError::Submission(format!(
                    "TokenCreated event not found in transaction {}",
                    outcome.tx_hash
                ))
            })?;

        if token.is_zero() {
            return Err(LaunchError::Submission(
                "TokenCreated event carried the zero address".to_string(),
            ));
        }
        Ok(token)
    }

    fn require_submitter(&self) -> Result<&dyn TransactionSubmitter> {
        self.submitter
            .as_deref()
            .ok_or_else(|| LaunchError::validation("Transaction submitter is required"))
    }
}
