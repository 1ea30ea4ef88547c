//! Trait abstraction for the submission gateway to enable mocking in tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::state::FormSnapshot;

/// Whole-form submission failure, recoverable; field values stay intact
/// for a retry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("network error")]
    Network,
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Acknowledgement of an accepted submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Asynchronous submission capability injected into the controller.
///
/// The controller awaits exactly one call per submit attempt with its
/// in-flight flag held for the full duration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Deliver a validated form snapshot
    async fn submit(
        &self,
        form_id: &str,
        snapshot: FormSnapshot,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}
