//! Error taxonomy for launch configuration, pricing and mining.

use alloy_primitives::Address;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LaunchError>;

/// Every failure the launch pipeline can raise.
///
/// Conditions are raised at the point of detection; none of them is
/// silently replaced by a default value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LaunchError {
    /// Missing or invalid caller input.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The salt search ran out of attempts.
    #[error(
        "No salt producing an address below {target} for admin {admin} via deployer {deployer} within {max_attempts} attempts"
    )]
    SearchExhausted {
        /// Address the candidate had to sort below.
        target: Address,
        /// Token admin the salts were bound to.
        admin: Address,
        /// Factory performing CREATE2.
        deployer: Address,
        /// Attempts that were made.
        max_attempts: u64,
    },

    /// The mined token address does not sort below the paired token.
    #[error("Predicted token {predicted} does not sort below paired token {paired}")]
    OrderingConstraint {
        /// Predicted token address.
        predicted: Address,
        /// Paired reference token address.
        paired: Address,
    },

    /// Malformed or missing price payload.
    #[error("Price source returned an unusable payload: {0}")]
    DataSource(String),

    /// Transport-level failure while fetching a quote.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the price source.
    #[error("Price source responded with {status} {reason}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Reason phrase.
        reason: String,
    },

    /// The fetch did not finish within its bound.
    #[error("Price request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured bound in milliseconds.
        timeout_ms: u64,
    },

    /// Non-positive or non-finite price.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Hourly change is too large to trust any derived price.
    #[error("Price volatility too high (|h1|={hourly_change_pct}%, max {max_pct}%) to derive ticks safely")]
    Volatility {
        /// Observed one-hour change in percent.
        hourly_change_pct: f64,
        /// Configured maximum in percent.
        max_pct: f64,
    },

    /// USD price could not be expressed in paired-token terms.
    #[error("Tick conversion failed: {0}")]
    TickConversion(String),

    /// Automatic tick resolution failed.
    #[error("Failed to derive automatic ticks: {0}")]
    AutoTicks(Box<LaunchError>),

    /// Simulation, submission or receipt failure.
    #[error("Submission failed: {0}")]
    Submission(String),

    /// ABI encoding failure.
    #[error("Encoding failed: {0}")]
    Encoding(String),
}

impl LaunchError {
    /// Shorthand for a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Returns true for failures caused by the price source or the network.
    #[must_use]
    pub fn is_price_source_failure(&self) -> bool {
        matches!(
            self,
            Self::DataSource(_) | Self::Network(_) | Self::HttpStatus { .. } | Self::Timeout { .. }
        )
    }
}
