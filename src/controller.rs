//! Form submission controller
//!
//! Owns one form's field registry for the form's lifetime, drives
//! per-field and whole-form validation against the view, and runs a
//! guarded submission lifecycle: at most one submission in flight, and
//! the submit control is always re-enabled with its original label once
//! an attempt settles, on the success and the failure path alike.

use std::sync::Arc;

use crate::config::FormsConfig;
use crate::gateway::SubmissionGateway;
use crate::notify::{NotificationSink, Severity};
use crate::state::{Field, FieldKey, FieldRegistry, FormSnapshot, SubmissionState};
use crate::validate::{self, ValidationError};
use crate::view::{FormEvent, FormPage, FormView};

const SERVICES_GROUP: &str = "services[]";

/// Controller bound to a single form
pub struct FormController {
    form_id: String,
    view: Arc<dyn FormView>,
    registry: FieldRegistry,
    gateway: Arc<dyn SubmissionGateway>,
    notifier: Arc<dyn NotificationSink>,
    config: FormsConfig,
    state: SubmissionState,
    /// In-flight guard: set before awaiting the gateway, cleared when the
    /// attempt settles
    is_submitting: bool,
}

impl FormController {
    /// Bind to a form on a page. Returns `None` silently when no form
    /// matches the identifier; controllers may be instantiated
    /// speculatively on pages that lack the form.
    pub fn bind(
        page: &dyn FormPage,
        form_id: &str,
        gateway: Arc<dyn SubmissionGateway>,
        notifier: Arc<dyn NotificationSink>,
        config: FormsConfig,
    ) -> Option<Self> {
        let view = match page.find_form(form_id) {
            Some(view) => view,
            None => {
                tracing::debug!("no form matches {form_id}, skipping bind");
                return None;
            }
        };
        Some(Self::from_view(view, gateway, notifier, config))
    }

    /// Bind directly to a form view
    pub fn from_view(
        view: Arc<dyn FormView>,
        gateway: Arc<dyn SubmissionGateway>,
        notifier: Arc<dyn NotificationSink>,
        config: FormsConfig,
    ) -> Self {
        let form_id = view.form_id();
        let registry = FieldRegistry::from_fields(view.fields());
        tracing::debug!("bound {form_id} with {} fields", registry.len());
        Self {
            form_id,
            view,
            registry,
            gateway,
            notifier,
            config,
            state: SubmissionState::Idle,
            is_submitting: false,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Current values as a snapshot
    pub fn snapshot(&self) -> FormSnapshot {
        self.registry.snapshot()
    }

    /// React to one input event from the view
    pub async fn handle_event(&mut self, event: FormEvent) {
        match event {
            FormEvent::FieldChanged { key, value } => {
                self.registry.apply_change(&key, value);
                self.view.clear_status(&key);
                if self.registry.is_group_member(&key) {
                    let group = key.name.clone();
                    self.validate_checkbox_group(&group);
                }
            }
            FormEvent::FieldBlurred { key } => {
                let _ = self.validate_field(&key);
            }
            FormEvent::Submitted => {
                self.submit().await;
            }
        }
    }

    /// Evaluate one field and update its visual status.
    ///
    /// Returns the first failing rule's error; unknown field names pass.
    pub fn validate_field(&self, key: &FieldKey) -> Result<(), ValidationError> {
        let Some(field) = self.registry.get(key) else {
            tracing::debug!("validate requested for unknown field {key}");
            return Ok(());
        };

        // Unchecked optional checkables carry no indicator at all
        if field.kind.is_checkable() && !field.is_checked() && !field.constraints.required {
            self.view.clear_status(key);
            return Ok(());
        }

        self.view.clear_status(key);
        match validate::validate_field(field) {
            Ok(()) => {
                self.view.show_valid(key);
                Ok(())
            }
            Err(error) => {
                self.view.show_error(key, &error.to_string());
                Err(error)
            }
        }
    }

    /// Validate a checkbox group: passes unless the group is required and
    /// no member is checked. On failure the error indicator goes on the
    /// group's first member only.
    pub fn validate_checkbox_group(&self, group: &str) -> bool {
        let members = self.registry.group_members(group);
        if members.is_empty() {
            return true;
        }

        let required = members.iter().any(|f| f.constraints.required);
        let any_checked = members.iter().any(|f| f.is_checked());

        if required && !any_checked {
            if let Some(first) = members.first() {
                self.view
                    .show_error(&first.key(), &ValidationError::GroupEmpty.to_string());
            }
            return false;
        }

        for member in members {
            self.view.clear_status(&member.key());
        }
        true
    }

    /// Validate every field and every checkbox group, flagging all
    /// failures in a single pass
    pub fn validate_form(&self) -> bool {
        self.view.clear_all_statuses();

        let mut all_valid = true;

        let keys: Vec<FieldKey> = self
            .registry
            .iter()
            .filter(|f| !f.is_group_member())
            .map(Field::key)
            .collect();
        for key in &keys {
            if self.validate_field(key).is_err() {
                all_valid = false;
            }
        }

        for group in self.registry.group_names() {
            if !self.validate_checkbox_group(&group) {
                all_valid = false;
            }
        }

        if !all_valid {
            tracing::debug!("validation failed for {}", self.form_id);
        }
        all_valid
    }

    /// Run one guarded submission attempt: validate, disable the submit
    /// control, await the gateway, then surface the outcome. A trigger
    /// while a submission is in flight is ignored.
    pub async fn submit(&mut self) {
        if self.is_submitting {
            tracing::debug!("submission already in flight for {}, ignoring", self.form_id);
            return;
        }

        self.state = SubmissionState::Validating;
        if !self.validate_form() {
            self.state = SubmissionState::Idle;
            return;
        }

        self.is_submitting = true;
        self.state = SubmissionState::Submitting;

        let original_label = self.view.submit_label();
        self.view.set_submit_enabled(false);
        self.view.set_submit_label(self.config.pending_label());

        let snapshot = self.registry.snapshot();
        let outcome = self.gateway.submit(&self.form_id, snapshot.clone()).await;

        match outcome {
            Ok(receipt) => {
                self.state = SubmissionState::Succeeded;
                match serde_json::to_string(&snapshot) {
                    Ok(data) => {
                        tracing::info!("{} submitted as {}: {data}", self.form_id, receipt.id);
                    }
                    Err(_) => tracing::info!("{} submitted as {}", self.form_id, receipt.id),
                }
                // Build the message before the values are cleared
                let message = self.success_message();
                self.view.reset_fields();
                self.registry.reset();
                self.view.clear_all_statuses();
                self.notifier.notify(&message, Severity::Success);
            }
            Err(error) => {
                self.state = SubmissionState::Failed;
                tracing::warn!("submission of {} failed: {error}", self.form_id);
                self.notifier
                    .notify(self.config.failure_message(), Severity::Error);
            }
        }

        // Runs on both outcomes: the control must never stay disabled
        self.is_submitting = false;
        self.view.set_submit_enabled(true);
        self.view.set_submit_label(&original_label);
    }

    /// Success notification text. Forms exposing a services checkbox
    /// group get a message naming the selected services.
    fn success_message(&self) -> String {
        if !self.registry.group_names().iter().any(|g| g == SERVICES_GROUP) {
            return self.config.success_message().to_string();
        }

        let selected: Vec<String> = self
            .registry
            .checked_values(SERVICES_GROUP)
            .iter()
            .map(|value| self.config.service_label(value))
            .collect();
        let services = if selected.is_empty() {
            "our services".to_string()
        } else {
            selected.join(", ")
        };
        format!(
            "Thank you for your inquiry about {services}! \
             We will contact you within 24 hours with more information."
        )
    }
}
