//! Claiming accrued LP fees from the fee locker.

use crate::abi::encode_claim_call;
use crate::submitter::{CallSpec, ReceiptStatus, TransactionSubmitter, TxReceipt};
use alloy_primitives::{Address, B256, U256};
use launchpad_domain::{LaunchError, Result};
use tracing::info;

/// Placeholder hash returned when a claim is only simulated.
pub const SIMULATED_CLAIM_HASH: B256 = B256::repeat_byte(0xcd);

/// Parameters of a fee claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimFeesParams {
    /// Account whose accrued fees are claimed.
    pub fee_owner: Address,
    /// Overrides the environment's fee locker.
    pub fee_locker: Option<Address>,
    pub account: Option<Address>,
    pub simulate: Option<bool>,
}

impl ClaimFeesParams {
    pub fn new(fee_owner: Address) -> Self {
        Self {
            fee_owner,
            fee_locker: None,
            account: None,
            simulate: None,
        }
    }
}

/// Environment-level settings a claim falls back to.
#[derive(Clone, Copy)]
pub struct ClaimContext<'a> {
    pub submitter: &'a dyn TransactionSubmitter,
    pub fee_locker: Option<Address>,
    /// Token whose fees are claimed.
    pub paired_token: Address,
    pub default_account: Option<Address>,
    pub simulate: bool,
}

/// Result of [`claim_fees`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub tx_hash: B256,
    pub simulated: bool,
}

/// Simulates the claim and, unless simulate-only, sends it.
///
/// # Errors
/// A missing fee locker or account, or a simulation/submission failure.
pub async fn claim_fees(ctx: ClaimContext<'_>, params: ClaimFeesParams) -> Result<ClaimOutcome> {
    let fee_locker = params
        .fee_locker
        .or(ctx.fee_locker)
        .filter(|a| !a.is_zero())
        .ok_or_else(|| LaunchError::validation("Fee locker address is required"))?;
    let simulate_only = params.simulate.unwrap_or(ctx.simulate);
    let account = params.account.or(ctx.default_account);
    if !simulate_only && account.is_none() {
        return Err(LaunchError::validation("Account is required to send transactions"));
    }

    let call = CallSpec {
        from: account,
        to: fee_locker,
        data: encode_claim_call(params.fee_owner, ctx.paired_token),
        value: U256::ZERO,
    };
    let prepared = ctx.submitter.simulate(&call).await?;

    if simulate_only {
        info!(fee_owner = %params.fee_owner, "Simulated fee claim");
        return Ok(ClaimOutcome {
            tx_hash: SIMULATED_CLAIM_HASH,
            simulated: true,
        });
    }

    let tx_hash = ctx.submitter.send(prepared).await?;
    info!(tx_hash = %tx_hash, fee_owner = %params.fee_owner, "Fee claim submitted");
    Ok(ClaimOutcome {
        tx_hash,
        simulated: false,
    })
}

/// Waits for a claim; simulated claims resolve to `None`.
///
/// # Errors
/// [`LaunchError::Submission`] when the claim reverted.
pub async fn wait_for_claim(
    submitter: &dyn TransactionSubmitter,
    outcome: &ClaimOutcome,
    confirmations: u64,
) -> Result<Option<TxReceipt>> {
    if outcome.simulated {
        return Ok(None);
    }
    let receipt = submitter.wait_for_receipt(outcome.tx_hash, confirmations).await?;
    if receipt.status == ReceiptStatus::Reverted {
        return Err(LaunchError::Submission(format!(
            "Fee claim {} reverted",
            outcome.tx_hash
        )));
    }
    Ok(Some(receipt))
}
