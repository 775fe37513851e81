//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use launchpad_execution::prelude::*;
//! ```

// Deployer
pub use crate::deployer::{
    AutoTickOptions, BuiltDeployment, DeployOptions, DeployOutcome, Deployer,
    DeploymentConfigBuilder, SIMULATED_DEPLOY_HASH, TickDefaults, eth_to_wei,
};

// Fees
pub use crate::fees::{
    ClaimContext, ClaimFeesParams, ClaimOutcome, SIMULATED_CLAIM_HASH, claim_fees, wait_for_claim,
};

// SDK
pub use crate::sdk::{AutoTickConfig, LaunchSdk, LaunchSdkConfig};

// Submission
pub use crate::submitter::{
    CallSpec, PreparedCall, ReceiptLog, ReceiptStatus, TransactionSubmitter, TxReceipt,
};
