//! Deployment configuration assembly and submission.
//!
//! - Input validation that runs before any search or network call
//! - Salt mining and address prediction
//! - Automatic tick resolution from a live quote
//! - Submission through a [`crate::submitter::TransactionSubmitter`]

mod builder;
mod deploy;
mod validation;

pub use builder::*;
pub use deploy::*;
pub use validation::*;
