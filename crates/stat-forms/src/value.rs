//! Raw field values as typed by the user.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The current value of one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text inputs and textareas.
    Text(String),
    /// Checkboxes.
    Flag(bool),
}

impl FieldValue {
    /// Returns the text, or `None` for a flag.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag(_) => None,
        }
    }

    /// Returns the flag, or `None` for text.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    /// Returns whether the value counts as "not provided".
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Flag(b) => !b,
        }
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Flag(_) => "flag",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Field name to current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    values: HashMap<String, FieldValue>,
}

impl FormValues {
    /// Creates an empty value map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, replacing any previous one.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(field.into(), value.into());
    }

    /// Builder form of [`FormValues::set`].
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Returns the raw value of a field.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Returns the text of a field; missing or flag fields read as empty.
    pub fn text(&self, field: &str) -> &str {
        self.get(field).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Returns the flag of a field; missing or text fields read as `false`.
    pub fn flag(&self, field: &str) -> bool {
        self.get(field)
            .and_then(FieldValue::as_flag)
            .unwrap_or(false)
    }

    /// Returns the number of fields present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether no field is present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_read_as_defaults() {
        let values = FormValues::new().with("email", "a@b.co");
        assert_eq!(values.text("email"), "a@b.co");
        assert_eq!(values.text("password"), "");
        assert!(!values.flag("agreeTerms"));
    }

    #[test]
    fn test_blank() {
        assert!(FieldValue::from("").is_blank());
        assert!(FieldValue::from(false).is_blank());
        assert!(!FieldValue::from(" ").is_blank());
        assert!(!FieldValue::from(true).is_blank());
    }
}
