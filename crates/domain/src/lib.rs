//! Domain types and pure algorithms for token launches.
//!
//! This crate holds everything that does not touch the network:
//! - Deployment configuration entities and the caller-facing token model
//! - Price quote, tick range and salt value objects
//! - Tick derivation from a USD price
//! - TWAP approximation and the volatility guard
//! - Deterministic deployment address mining
//! - The per-network address book

/// Protocol-wide constants.
pub mod constants;
/// Caller-facing and on-chain configuration records.
pub mod entities;
/// Network address book.
pub mod environment;
/// Error taxonomy shared by every crate in the workspace.
pub mod error;
/// Static fee schedule.
pub mod fees;
/// Tick and price math.
pub mod math;
/// Immutable value objects.
pub mod value_objects;
/// Deployment salt search.
pub mod vanity;

pub use error::{LaunchError, Result};
