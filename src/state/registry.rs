//! Field registry and form snapshots
//!
//! The registry is built once when a controller binds to a form and holds
//! the ordered field list for the form's lifetime. Checkbox groups are
//! derived from it rather than re-queried from the view.

use std::collections::BTreeMap;

use serde::Serialize;

use super::field::{Field, FieldKey, FieldKind, FieldValue};

/// Ordered collection of a form's fields, keyed by name (and choice value
/// for checkable fields sharing a name)
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: Vec<Field>,
}

impl FieldRegistry {
    /// Build a registry from fields enumerated in document order
    pub fn from_fields(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Look up a field by key. A key without a choice value matches the
    /// first field with that name.
    pub fn get(&self, key: &FieldKey) -> Option<&Field> {
        self.fields.iter().find(|f| Self::matches(f, key))
    }

    pub fn get_mut(&mut self, key: &FieldKey) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| Self::matches(f, key))
    }

    fn matches(field: &Field, key: &FieldKey) -> bool {
        field.name == key.name
            && match &key.choice {
                Some(choice) => field.choice_value.as_deref() == Some(choice.as_str()),
                None => true,
            }
    }

    /// Apply a value change from the view
    pub fn apply_change(&mut self, key: &FieldKey, value: FieldValue) {
        match self.get_mut(key) {
            Some(field) => field.value = value,
            None => tracing::debug!("change event for unknown field {key}"),
        }
    }

    /// Whether the key refers to a checkbox-group member
    pub fn is_group_member(&self, key: &FieldKey) -> bool {
        self.get(key).is_some_and(Field::is_group_member)
    }

    /// Distinct checkbox-group names, in document order
    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for field in self.fields.iter().filter(|f| f.is_group_member()) {
            if !names.contains(&field.name) {
                names.push(field.name.clone());
            }
        }
        names
    }

    /// Members of a checkbox group, in document order
    pub fn group_members(&self, group: &str) -> Vec<&Field> {
        self.fields
            .iter()
            .filter(|f| f.is_group_member() && f.name == group)
            .collect()
    }

    /// Choice values of the checked members of a group, in document order
    pub fn checked_values(&self, group: &str) -> Vec<String> {
        self.group_members(group)
            .into_iter()
            .filter(|f| f.is_checked())
            .filter_map(|f| f.choice_value.clone())
            .collect()
    }

    /// Clear every field back to its empty/unchecked state
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }

    /// Collect the current values into a snapshot.
    ///
    /// Group members collect into an ordered sequence of checked choice
    /// values under the group name; plain checkboxes become booleans;
    /// radio groups record only the checked member's choice value.
    pub fn snapshot(&self) -> FormSnapshot {
        let mut values: BTreeMap<String, SnapshotValue> = BTreeMap::new();
        for field in &self.fields {
            if field.is_group_member() {
                let entry = values
                    .entry(field.name.clone())
                    .or_insert_with(|| SnapshotValue::Many(Vec::new()));
                if let SnapshotValue::Many(list) = entry {
                    if field.is_checked() {
                        if let Some(choice) = &field.choice_value {
                            list.push(choice.clone());
                        }
                    }
                }
                continue;
            }
            match field.kind {
                FieldKind::Checkbox => {
                    values.insert(field.name.clone(), SnapshotValue::Flag(field.is_checked()));
                }
                FieldKind::Radio => {
                    if field.is_checked() {
                        if let Some(choice) = &field.choice_value {
                            values
                                .insert(field.name.clone(), SnapshotValue::Text(choice.clone()));
                        }
                    }
                }
                _ => {
                    values.insert(
                        field.name.clone(),
                        SnapshotValue::Text(field.as_text().to_string()),
                    );
                }
            }
        }
        FormSnapshot { values }
    }
}

/// One captured field value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SnapshotValue {
    Text(String),
    Flag(bool),
    Many(Vec<String>),
}

/// Mapping from field name to captured value at submit time
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    values: BTreeMap<String, SnapshotValue>,
}

impl FormSnapshot {
    pub fn get(&self, name: &str) -> Option<&SnapshotValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry_fields() -> Vec<Field> {
        vec![
            Field::text("name", "Full Name").required(),
            Field::email("email", "Email Address").required(),
            Field::tel("phone", "Phone Number"),
            Field::checkbox("services[]", "Internship Programs", "internship").required(),
            Field::checkbox("services[]", "Mentorship", "mentorship"),
            Field::checkbox("services[]", "Networking Events", "networking"),
            Field::checkbox("newsletter", "Subscribe to newsletter", "yes"),
            Field::radio("referral", "Search engine", "search"),
            Field::radio("referral", "Word of mouth", "word_of_mouth"),
            Field::textarea("message", "Message").required().min_length(10),
        ]
    }

    mod lookup {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_get_by_name() {
            let registry = FieldRegistry::from_fields(inquiry_fields());
            let field = registry.get(&FieldKey::named("email")).unwrap();
            assert_eq!(field.kind, FieldKind::Email);
        }

        #[test]
        fn test_get_member_by_choice() {
            let registry = FieldRegistry::from_fields(inquiry_fields());
            let field = registry
                .get(&FieldKey::member("services[]", "mentorship"))
                .unwrap();
            assert_eq!(field.label, "Mentorship");
        }

        #[test]
        fn test_get_without_choice_returns_first_member() {
            let registry = FieldRegistry::from_fields(inquiry_fields());
            let field = registry.get(&FieldKey::named("services[]")).unwrap();
            assert_eq!(field.choice_value.as_deref(), Some("internship"));
        }

        #[test]
        fn test_get_unknown_returns_none() {
            let registry = FieldRegistry::from_fields(inquiry_fields());
            assert!(registry.get(&FieldKey::named("missing")).is_none());
        }
    }

    mod changes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_apply_change_updates_value() {
            let mut registry = FieldRegistry::from_fields(inquiry_fields());
            registry.apply_change(
                &FieldKey::named("name"),
                FieldValue::Text("Thandi".to_string()),
            );
            assert_eq!(registry.get(&FieldKey::named("name")).unwrap().as_text(), "Thandi");
        }

        #[test]
        fn test_apply_change_to_group_member() {
            let mut registry = FieldRegistry::from_fields(inquiry_fields());
            registry.apply_change(
                &FieldKey::member("services[]", "mentorship"),
                FieldValue::Checked(true),
            );
            assert_eq!(registry.checked_values("services[]"), vec!["mentorship"]);
        }

        #[test]
        fn test_apply_change_unknown_is_noop() {
            let mut registry = FieldRegistry::from_fields(inquiry_fields());
            registry.apply_change(
                &FieldKey::named("missing"),
                FieldValue::Text("x".to_string()),
            );
            assert_eq!(registry.len(), 10);
        }

        #[test]
        fn test_reset_clears_all_values() {
            let mut registry = FieldRegistry::from_fields(inquiry_fields());
            registry.apply_change(
                &FieldKey::named("name"),
                FieldValue::Text("Thandi".to_string()),
            );
            registry.apply_change(
                &FieldKey::member("services[]", "internship"),
                FieldValue::Checked(true),
            );
            registry.reset();
            assert_eq!(registry.get(&FieldKey::named("name")).unwrap().as_text(), "");
            assert!(registry.checked_values("services[]").is_empty());
        }
    }

    mod groups {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_group_names_deduplicated_in_order() {
            let registry = FieldRegistry::from_fields(inquiry_fields());
            assert_eq!(registry.group_names(), vec!["services[]"]);
        }

        #[test]
        fn test_plain_checkbox_is_not_a_group() {
            let registry = FieldRegistry::from_fields(inquiry_fields());
            assert!(!registry.is_group_member(&FieldKey::named("newsletter")));
            assert!(registry.is_group_member(&FieldKey::member("services[]", "networking")));
        }

        #[test]
        fn test_group_members_in_document_order() {
            let registry = FieldRegistry::from_fields(inquiry_fields());
            let labels: Vec<&str> = registry
                .group_members("services[]")
                .into_iter()
                .map(|f| f.label.as_str())
                .collect();
            assert_eq!(
                labels,
                vec!["Internship Programs", "Mentorship", "Networking Events"]
            );
        }

        #[test]
        fn test_checked_values_in_document_order() {
            let mut registry = FieldRegistry::from_fields(inquiry_fields());
            registry.apply_change(
                &FieldKey::member("services[]", "networking"),
                FieldValue::Checked(true),
            );
            registry.apply_change(
                &FieldKey::member("services[]", "internship"),
                FieldValue::Checked(true),
            );
            assert_eq!(
                registry.checked_values("services[]"),
                vec!["internship", "networking"]
            );
        }
    }

    mod snapshots {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_text_fields_snapshot_as_text() {
            let mut registry = FieldRegistry::from_fields(inquiry_fields());
            registry.apply_change(
                &FieldKey::named("name"),
                FieldValue::Text("Thandi".to_string()),
            );
            let snapshot = registry.snapshot();
            assert_eq!(
                snapshot.get("name"),
                Some(&SnapshotValue::Text("Thandi".to_string()))
            );
        }

        #[test]
        fn test_group_collects_checked_choice_values() {
            let mut registry = FieldRegistry::from_fields(inquiry_fields());
            registry.apply_change(
                &FieldKey::member("services[]", "internship"),
                FieldValue::Checked(true),
            );
            registry.apply_change(
                &FieldKey::member("services[]", "mentorship"),
                FieldValue::Checked(true),
            );
            let snapshot = registry.snapshot();
            assert_eq!(
                snapshot.get("services[]"),
                Some(&SnapshotValue::Many(vec![
                    "internship".to_string(),
                    "mentorship".to_string()
                ]))
            );
        }

        #[test]
        fn test_group_present_as_empty_sequence_when_none_checked() {
            let registry = FieldRegistry::from_fields(inquiry_fields());
            let snapshot = registry.snapshot();
            assert_eq!(
                snapshot.get("services[]"),
                Some(&SnapshotValue::Many(Vec::new()))
            );
        }

        #[test]
        fn test_plain_checkbox_snapshots_as_flag() {
            let mut registry = FieldRegistry::from_fields(inquiry_fields());
            let snapshot = registry.snapshot();
            assert_eq!(snapshot.get("newsletter"), Some(&SnapshotValue::Flag(false)));

            registry.apply_change(&FieldKey::named("newsletter"), FieldValue::Checked(true));
            let snapshot = registry.snapshot();
            assert_eq!(snapshot.get("newsletter"), Some(&SnapshotValue::Flag(true)));
        }

        #[test]
        fn test_radio_records_only_checked_member() {
            let mut registry = FieldRegistry::from_fields(inquiry_fields());
            let snapshot = registry.snapshot();
            assert!(snapshot.get("referral").is_none());

            registry.apply_change(
                &FieldKey::member("referral", "search"),
                FieldValue::Checked(true),
            );
            let snapshot = registry.snapshot();
            assert_eq!(
                snapshot.get("referral"),
                Some(&SnapshotValue::Text("search".to_string()))
            );
        }

        #[test]
        fn test_snapshot_serializes_to_flat_json() {
            let mut registry = FieldRegistry::from_fields(inquiry_fields());
            registry.apply_change(
                &FieldKey::named("name"),
                FieldValue::Text("Thandi".to_string()),
            );
            registry.apply_change(
                &FieldKey::member("services[]", "internship"),
                FieldValue::Checked(true),
            );
            let json = serde_json::to_value(registry.snapshot()).unwrap();
            assert_eq!(json["name"], "Thandi");
            assert_eq!(json["newsletter"], false);
            assert!(json["services[]"].is_array());
        }
    }
}
