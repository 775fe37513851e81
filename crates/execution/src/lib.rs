//! Deployment assembly and transaction submission for token launches.
//!
//! This crate provides:
//! - ABI payloads for the factory, fee hook and fee locker
//! - The deployment configuration builder with salt mining and auto ticks
//! - Deployment and fee claiming through a transaction submitter
//! - The high-level [`sdk::LaunchSdk`] facade

/// Prelude module for convenient imports.
pub mod prelude;

/// ABI encoding and event decoding.
pub mod abi;
/// Deployment configuration builder and deployer.
pub mod deployer;
/// Fee claiming.
pub mod fees;
/// High-level SDK.
pub mod sdk;
/// Transaction submission collaborator.
pub mod submitter;
