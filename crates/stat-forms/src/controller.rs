//! Live form state for one mounted form.

use tracing::debug;

use crate::error::{FormError, Result, ValidationErrors};
use crate::kinds::FormKind;
use crate::schema::{FormSchema, InputKind, ValidationResult};
use crate::value::{FieldValue, FormValues};

/// What the view needs to draw one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub name: String,
    pub label: String,
    pub input: InputKind,
    pub placeholder: Option<String>,
    pub hint: Option<String>,
    pub required: bool,
    pub value: FieldValue,
    pub error: Option<String>,
}

/// Binds a schema to the values, errors and busy flag of one form.
#[derive(Debug)]
pub struct FormController {
    schema: FormSchema,
    values: FormValues,
    errors: ValidationErrors,
    submitting: bool,
}

impl FormController {
    /// Creates a controller with the schema's default values.
    pub fn new(schema: FormSchema) -> Self {
        let values = schema.defaults();
        Self {
            schema,
            values,
            errors: ValidationErrors::new(),
            submitting: false,
        }
    }

    /// Creates a controller for one of the built-in forms.
    ///
    /// # Errors
    ///
    /// Propagates schema construction errors.
    pub fn for_kind(kind: FormKind) -> Result<Self> {
        Ok(Self::new(kind.schema()?))
    }

    /// Returns the form kind.
    pub const fn kind(&self) -> FormKind {
        self.schema.kind()
    }

    /// Returns the schema.
    pub const fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Updates one field.
    ///
    /// Errors are left untouched until the next submit.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] for a field the schema does not
    /// declare, and [`FormError::TypeMismatch`] when a checkbox receives text
    /// or a text input receives a flag.
    pub fn set_field_value(&mut self, field: &str, value: impl Into<FieldValue>) -> Result<()> {
        let rule = self
            .schema
            .rule(field)
            .ok_or_else(|| FormError::UnknownField(field.to_string()))?;
        let value = value.into();
        let expected = rule.input.default_value();
        if std::mem::discriminant(&expected) != std::mem::discriminant(&value) {
            return Err(FormError::TypeMismatch {
                field: field.to_string(),
                expected: expected.kind_name(),
            });
        }
        self.values.set(field, value);
        Ok(())
    }

    /// Returns the current value of a field.
    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Returns all current values.
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    /// Returns the error shown for a field.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    /// Returns all errors.
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns whether a submission is in flight.
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Validates the current values.
    ///
    /// An invalid result replaces the error map; a valid one clears it.
    pub fn attempt_submit(&mut self) -> ValidationResult {
        let result = self.schema.validate(&self.values);
        match &result {
            ValidationResult::Invalid(errors) => {
                debug!(form = %self.kind(), fields = ?errors.fields(), "validation failed");
                self.errors = errors.clone();
            }
            ValidationResult::Valid(_) => self.errors.clear(),
        }
        result
    }

    /// Restores default values and clears errors.
    pub fn reset(&mut self) {
        self.values = self.schema.defaults();
        self.errors.clear();
    }

    /// Returns one binding per field, in declaration order.
    pub fn bindings(&self) -> Vec<FieldBinding> {
        self.schema
            .fields()
            .iter()
            .map(|rule| FieldBinding {
                name: rule.name.clone(),
                label: rule.label.clone(),
                input: rule.input,
                placeholder: rule.placeholder.clone(),
                hint: rule.hint.clone(),
                required: rule.required,
                value: self
                    .values
                    .get(&rule.name)
                    .cloned()
                    .unwrap_or_else(|| rule.input.default_value()),
                error: self.errors.get(&rule.name).map(str::to_string),
            })
            .collect()
    }
}
