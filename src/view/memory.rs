//! In-memory form view
//!
//! Backs the console front end and serves as the concrete test double for
//! the controller: it keeps the same error-node discipline a DOM-backed
//! view would (one inline node per invalid field, removed on clear).

use std::sync::Mutex;

use crate::state::{Field, FieldKey, FieldStatus, FieldValue};

use super::traits::{FormEvent, FormView};

const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

#[derive(Debug)]
struct Inner {
    fields: Vec<Field>,
    /// Inline error nodes in insertion order, at most one per field
    error_nodes: Vec<(FieldKey, String)>,
    statuses: Vec<(FieldKey, FieldStatus)>,
    submit_enabled: bool,
    submit_label: String,
}

/// A form held entirely in memory
#[derive(Debug)]
pub struct InMemoryForm {
    id: String,
    inner: Mutex<Inner>,
}

impl InMemoryForm {
    pub fn new(id: &str, fields: Vec<Field>) -> Self {
        Self {
            id: id.to_string(),
            inner: Mutex::new(Inner {
                fields,
                error_nodes: Vec::new(),
                statuses: Vec::new(),
                submit_enabled: true,
                submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            }),
        }
    }

    pub fn with_submit_label(self, label: &str) -> Self {
        self.lock().submit_label = label.to_string();
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn key_matches(field: &Field, key: &FieldKey) -> bool {
        field.name == key.name
            && match &key.choice {
                Some(choice) => field.choice_value.as_deref() == Some(choice.as_str()),
                None => true,
            }
    }

    /// Type into a field and return the change event for the controller
    pub fn enter_text(&self, key: &FieldKey, text: &str) -> FormEvent {
        let mut inner = self.lock();
        if let Some(field) = inner.fields.iter_mut().find(|f| Self::key_matches(f, key)) {
            field.set_text(text.to_string());
        }
        FormEvent::FieldChanged {
            key: key.clone(),
            value: FieldValue::Text(text.to_string()),
        }
    }

    /// Toggle a checkable field and return the change event for the controller
    pub fn set_checked(&self, key: &FieldKey, checked: bool) -> FormEvent {
        let mut inner = self.lock();
        if let Some(field) = inner.fields.iter_mut().find(|f| Self::key_matches(f, key)) {
            field.set_checked(checked);
        }
        FormEvent::FieldChanged {
            key: key.clone(),
            value: FieldValue::Checked(checked),
        }
    }

    /// Blur event for a field
    pub fn blur(&self, key: &FieldKey) -> FormEvent {
        FormEvent::FieldBlurred { key: key.clone() }
    }

    /// Submit-control trigger event
    pub fn press_submit(&self) -> FormEvent {
        FormEvent::Submitted
    }

    /// Current visual status of a field
    pub fn status(&self, key: &FieldKey) -> FieldStatus {
        self.lock()
            .statuses
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, status)| status.clone())
            .unwrap_or_default()
    }

    /// Inline error nodes currently attached, in insertion order
    pub fn error_nodes(&self) -> Vec<(FieldKey, String)> {
        self.lock().error_nodes.clone()
    }

    pub fn error_node_count(&self) -> usize {
        self.lock().error_nodes.len()
    }

    pub fn submit_enabled(&self) -> bool {
        self.lock().submit_enabled
    }

    pub fn current_submit_label(&self) -> String {
        self.lock().submit_label.clone()
    }
}

impl FormView for InMemoryForm {
    fn form_id(&self) -> String {
        self.id.clone()
    }

    fn fields(&self) -> Vec<Field> {
        self.lock().fields.clone()
    }

    fn show_error(&self, key: &FieldKey, message: &str) {
        let mut inner = self.lock();
        inner.error_nodes.retain(|(k, _)| k != key);
        inner.error_nodes.push((key.clone(), message.to_string()));
        inner.statuses.retain(|(k, _)| k != key);
        inner
            .statuses
            .push((key.clone(), FieldStatus::Invalid(message.to_string())));
    }

    fn show_valid(&self, key: &FieldKey) {
        let mut inner = self.lock();
        inner.error_nodes.retain(|(k, _)| k != key);
        inner.statuses.retain(|(k, _)| k != key);
        inner.statuses.push((key.clone(), FieldStatus::Valid));
    }

    fn clear_status(&self, key: &FieldKey) {
        let mut inner = self.lock();
        inner.error_nodes.retain(|(k, _)| k != key);
        inner.statuses.retain(|(k, _)| k != key);
    }

    fn clear_all_statuses(&self) {
        let mut inner = self.lock();
        inner.error_nodes.clear();
        inner.statuses.clear();
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.lock().submit_enabled = enabled;
    }

    fn set_submit_label(&self, label: &str) {
        self.lock().submit_label = label.to_string();
    }

    fn submit_label(&self) -> String {
        self.lock().submit_label.clone()
    }

    fn reset_fields(&self) {
        let mut inner = self.lock();
        for field in &mut inner.fields {
            field.clear();
        }
    }
}
