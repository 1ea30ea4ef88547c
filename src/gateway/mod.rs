//! Submission gateway module

mod simulated;
mod traits;

pub use simulated::{FailurePlan, SimulatedGateway};
pub use traits::{SubmissionError, SubmissionGateway, SubmissionReceipt};

#[cfg(test)]
pub use traits::MockSubmissionGateway;
