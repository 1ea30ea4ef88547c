//! Form field value objects

use std::fmt;

/// Input kinds recognized by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Checkbox,
    Radio,
    Select,
    Textarea,
}

impl FieldKind {
    /// Checkable kinds carry a checked/unchecked state instead of text
    pub fn is_checkable(&self) -> bool {
        matches!(self, FieldKind::Checkbox | FieldKind::Radio)
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Constraints declared on a field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldConstraints {
    pub required: bool,
    pub min_length: Option<usize>,
}

/// Identity of a field within a form.
///
/// Checkable fields that share a name (checkbox groups, radio groups) are
/// distinguished by their choice value; all other fields are identified by
/// name alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldKey {
    pub name: String,
    pub choice: Option<String>,
}

impl FieldKey {
    /// Key for a field identified by name alone
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            choice: None,
        }
    }

    /// Key for a member of a checkbox or radio group
    pub fn member(name: &str, choice: &str) -> Self {
        Self {
            name: name.to_string(),
            choice: Some(choice.to_string()),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.choice {
            Some(choice) => write!(f, "{}#{}", self.name, choice),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub constraints: FieldConstraints,
    /// Submitted value for checkable fields (the `value` attribute)
    pub choice_value: Option<String>,
    pub value: FieldValue,
}

impl Field {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        let value = if kind.is_checkable() {
            FieldValue::Checked(false)
        } else {
            FieldValue::Text(String::new())
        };
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            constraints: FieldConstraints::default(),
            choice_value: None,
            value,
        }
    }

    /// Create a new single-line text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Create a new email field
    pub fn email(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    /// Create a new telephone field
    pub fn tel(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Tel)
    }

    /// Create a new multiline text field
    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    /// Create a new select field
    pub fn select(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Select)
    }

    /// Create a new checkbox with a submitted choice value
    pub fn checkbox(name: &str, label: &str, choice: &str) -> Self {
        let mut field = Self::new(name, label, FieldKind::Checkbox);
        field.choice_value = Some(choice.to_string());
        field
    }

    /// Create a new radio button with a submitted choice value
    pub fn radio(name: &str, label: &str, choice: &str) -> Self {
        let mut field = Self::new(name, label, FieldKind::Radio);
        field.choice_value = Some(choice.to_string());
        field
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.constraints.required = true;
        self
    }

    /// Declare a minimum length for the trimmed value
    pub fn min_length(mut self, min: usize) -> Self {
        self.constraints.min_length = Some(min);
        self
    }

    /// Set an initial text value
    pub fn with_text(mut self, value: &str) -> Self {
        self.value = FieldValue::Text(value.to_string());
        self
    }

    /// The field's identity within its form
    pub fn key(&self) -> FieldKey {
        FieldKey {
            name: self.name.clone(),
            choice: self.choice_value.clone(),
        }
    }

    /// Checkboxes whose name carries the `[]` suffix are validated as a group
    pub fn is_group_member(&self) -> bool {
        self.kind == FieldKind::Checkbox && self.name.ends_with("[]")
    }

    /// Get the text value (returns empty string for checkable fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Checked(_) => "",
        }
    }

    /// Get the checked state (returns false for text fields)
    pub fn is_checked(&self) -> bool {
        match &self.value {
            FieldValue::Checked(c) => *c,
            FieldValue::Text(_) => false,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Set the checked state
    pub fn set_checked(&mut self, checked: bool) {
        self.value = FieldValue::Checked(checked);
    }

    /// Clear the field back to its empty/unchecked state
    pub fn clear(&mut self) {
        self.value = if self.kind.is_checkable() {
            FieldValue::Checked(false)
        } else {
            FieldValue::Text(String::new())
        };
    }
}
