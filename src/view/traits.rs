//! Trait abstraction for the structural form view to enable mocking in tests

use crate::state::{Field, FieldKey, FieldValue};

/// Discrete input events emitted by a form view
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A field's value changed
    FieldChanged { key: FieldKey, value: FieldValue },
    /// Focus left a field
    FieldBlurred { key: FieldKey },
    /// The form's submit control was triggered
    Submitted,
}

/// Structural view of a form: enumerable fields, per-field feedback,
/// and a submit control.
///
/// The controller holds this behind a trait object and never touches any
/// rendering substrate directly.
#[cfg_attr(test, mockall::automock)]
pub trait FormView: Send + Sync {
    /// Identifier of the form this view represents
    fn form_id(&self) -> String;

    /// Enumerate all fields in document order
    fn fields(&self) -> Vec<Field>;

    /// Show the error indicator and an inline message node for a field,
    /// replacing any previous node
    fn show_error(&self, key: &FieldKey, message: &str);

    /// Show the success indicator for a field
    fn show_valid(&self, key: &FieldKey);

    /// Remove the indicator and any inline error node for a field
    fn clear_status(&self, key: &FieldKey);

    /// Remove every indicator and inline error node on the form
    fn clear_all_statuses(&self);

    /// Enable or disable the submit control
    fn set_submit_enabled(&self, enabled: bool);

    /// Replace the submit control's label
    fn set_submit_label(&self, label: &str);

    /// Current submit control label
    fn submit_label(&self) -> String;

    /// Reset every field to its empty/unchecked state
    fn reset_fields(&self);
}
