//! Error types for forms.

use std::collections::HashMap;
use thiserror::Error;

/// Form-specific errors.
///
/// These are raised at the controller boundary when the caller misuses a
/// form. A submitted value that breaks a rule is not an error of this kind;
/// it is reported through [`ValidationErrors`].
#[derive(Debug, Error)]
pub enum FormError {
    /// The form has no field with this name.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A text value was given to a flag field, or the other way around.
    #[error("field {field} expects a {expected} value")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    /// A schema was declared with a pattern that does not compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Workflow configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Validation errors keyed by field, at most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Error message keyed by field name.
    pub errors: HashMap<String, String>,
}

impl ValidationErrors {
    /// Creates a new empty `ValidationErrors`.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Records an error for a field.
    ///
    /// The first message recorded for a field wins.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error for a specific field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Returns whether the field has an error.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Returns the fields with errors, sorted by name.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }

    /// Removes every error.
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for field in self.fields() {
            if let Some(message) = self.get(field) {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Failure reported by a submit action.
///
/// The message is shown to the user as-is, above the form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct SubmissionError {
    message: String,
}

impl SubmissionError {
    /// Creates a submission error with a displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the displayable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
