//! Transaction submission collaborator.
//!
//! The RPC/wallet client lives outside this workspace; it is consumed through
//! [`TransactionSubmitter`].

use alloy_primitives::{Address, B256, Bytes, U256};
use async_trait::async_trait;
use launchpad_domain::Result;
use serde::{Deserialize, Serialize};

/// A contract call to simulate and send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSpec {
    /// Sending account.
    pub from: Option<Address>,
    /// Target contract.
    pub to: Address,
    /// Calldata.
    pub data: Bytes,
    /// Wei attached to the call.
    pub value: U256,
}

/// A simulated call ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedCall {
    pub call: CallSpec,
    /// Gas limit estimated during simulation.
    pub gas_limit: Option<u64>,
}

/// Final status of a mined transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptStatus {
    Success,
    Reverted,
}

/// A log emitted by a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLog {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
}

/// Receipt of a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub tx_hash: B256,
    pub status: ReceiptStatus,
    pub logs: Vec<ReceiptLog>,
}

/// Simulates, sends and tracks transactions.
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    /// Dry-runs a call against current chain state.
    async fn simulate(&self, call: &CallSpec) -> Result<PreparedCall>;

    /// Signs and broadcasts a simulated call, returning its hash.
    async fn send(&self, prepared: PreparedCall) -> Result<B256>;

    /// Waits until the transaction has `confirmations` confirmations.
    async fn wait_for_receipt(&self, tx_hash: B256, confirmations: u64) -> Result<TxReceipt>;
}
