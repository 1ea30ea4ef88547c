//! Field status and submission lifecycle state

/// Visual validity indicator for a single field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// No indicator shown
    #[default]
    Neutral,
    /// Success styling
    Valid,
    /// Error styling with an inline message
    Invalid(String),
}

impl FieldStatus {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldStatus::Invalid(_))
    }
}

/// Submission lifecycle of a controller instance.
///
/// Only one submission may be in flight at a time; a submit trigger while
/// in `Submitting` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_neutral() {
        assert_eq!(FieldStatus::default(), FieldStatus::Neutral);
    }

    #[test]
    fn test_is_invalid() {
        assert!(FieldStatus::Invalid("message".to_string()).is_invalid());
        assert!(!FieldStatus::Valid.is_invalid());
        assert!(!FieldStatus::Neutral.is_invalid());
    }

    #[test]
    fn test_default_submission_state_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }

    #[test]
    fn test_only_submitting_is_in_flight() {
        assert!(SubmissionState::Submitting.is_in_flight());
        assert!(!SubmissionState::Idle.is_in_flight());
        assert!(!SubmissionState::Validating.is_in_flight());
        assert!(!SubmissionState::Succeeded.is_in_flight());
        assert!(!SubmissionState::Failed.is_in_flight());
    }
}
