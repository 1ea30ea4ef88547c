//! Simulated submission gateway
//!
//! Stands in for a real transport: waits a configurable delay, then
//! succeeds or fails according to a deterministic plan. Failures follow a
//! counter rather than a random draw so behavior is reproducible.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::state::FormSnapshot;

use super::traits::{SubmissionError, SubmissionGateway, SubmissionReceipt};

/// When the simulated gateway reports failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePlan {
    #[default]
    Never,
    Always,
    /// Fail every nth attempt (1-based); `EveryNth(0)` never fails
    EveryNth(u32),
    /// Fail every attempt with a rejection from the receiving service
    Reject,
}

/// Local stand-in for a submission backend
#[derive(Debug, Default)]
pub struct SimulatedGateway {
    delay: Duration,
    plan: FailurePlan,
    attempts: AtomicU32,
}

impl SimulatedGateway {
    pub fn new(delay: Duration, plan: FailurePlan) -> Self {
        Self {
            delay,
            plan,
            attempts: AtomicU32::new(0),
        }
    }

    /// Number of submit attempts seen so far
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::Relaxed)
    }

    fn failure(&self, attempt: u32) -> Option<SubmissionError> {
        match self.plan {
            FailurePlan::Never => None,
            FailurePlan::Always => Some(SubmissionError::Network),
            FailurePlan::EveryNth(0) => None,
            FailurePlan::EveryNth(n) if attempt % n == 0 => Some(SubmissionError::Network),
            FailurePlan::EveryNth(_) => None,
            FailurePlan::Reject => Some(SubmissionError::Rejected(
                "declined by the receiving service".to_string(),
            )),
        }
    }
}

#[async_trait]
impl SubmissionGateway for SimulatedGateway {
    async fn submit(
        &self,
        form_id: &str,
        _snapshot: FormSnapshot,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let attempt = self.attempts.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!("simulating submission of {form_id}, attempt {attempt}");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(err) = self.failure(attempt) {
            tracing::debug!("simulated failure for {form_id} on attempt {attempt}: {err}");
            return Err(err);
        }
        Ok(SubmissionReceipt::new())
    }
}
