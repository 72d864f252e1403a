//! Declarative form schemas.

use crate::error::ValidationErrors;
use crate::kinds::{FormKind, ValidatedForm};
use crate::validation::Validator;
use crate::value::{FieldValue, FormValues};

/// How a field is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Textarea,
    Checkbox,
}

impl InputKind {
    /// Returns the HTML input type.
    pub const fn html_type(self) -> &'static str {
        match self {
            Self::Text | Self::Textarea => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Checkbox => "checkbox",
        }
    }

    /// Returns the default value for a field of this kind.
    pub fn default_value(self) -> FieldValue {
        match self {
            Self::Checkbox => FieldValue::Flag(false),
            _ => FieldValue::Text(String::new()),
        }
    }
}

/// Rules and presentation for one field.
pub struct FieldRule {
    /// Field name.
    pub name: String,
    /// Field label.
    pub label: String,
    /// Input kind.
    pub input: InputKind,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Hint shown below the input.
    pub hint: Option<String>,
    /// Whether the field is marked as required in the view.
    pub required: bool,
    /// Validators, evaluated in order.
    pub validators: Vec<Box<dyn Validator>>,
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("input", &self.input)
            .field("required", &self.required)
            .field("validators", &self.validators.len())
            .finish_non_exhaustive()
    }
}

impl FieldRule {
    /// Creates a field rule with no validators.
    pub fn new(name: impl Into<String>, label: impl Into<String>, input: InputKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            input,
            placeholder: None,
            hint: None,
            required: false,
            validators: Vec::new(),
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Sets the hint.
    #[must_use]
    pub fn hint(mut self, text: impl Into<String>) -> Self {
        self.hint = Some(text.into());
        self
    }

    /// Appends a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Returns the first failing validator's message.
    pub fn check(&self, value: &FieldValue) -> Option<String> {
        self.validators.iter().find_map(|v| v.validate(value).err())
    }
}

type Check = Box<dyn Fn(&FormValues) -> bool + Send + Sync>;

/// A rule over the whole value map, reported on one field.
pub struct CrossFieldRule {
    /// Field that displays the error.
    pub target: String,
    /// Error message.
    pub message: String,
    check: Check,
}

impl std::fmt::Debug for CrossFieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrossFieldRule")
            .field("target", &self.target)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl CrossFieldRule {
    /// Creates a cross-field rule.
    pub fn new(
        target: impl Into<String>,
        message: impl Into<String>,
        check: impl Fn(&FormValues) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            target: target.into(),
            message: message.into(),
            check: Box::new(check),
        }
    }

    /// Creates a rule requiring two text fields to be equal.
    pub fn matches(target: &str, other: &str, message: impl Into<String>) -> Self {
        let (a, b) = (target.to_string(), other.to_string());
        Self::new(target, message, move |values| values.text(&a) == values.text(&b))
    }

    /// Returns whether the rule holds.
    pub fn holds(&self, values: &FormValues) -> bool {
        (self.check)(values)
    }
}

/// Outcome of validating a value map.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// Every rule passed.
    Valid(ValidatedForm),
    /// At least one rule failed.
    Invalid(ValidationErrors),
}

impl ValidationResult {
    /// Returns whether the result is valid.
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the errors of an invalid result.
    pub const fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Valid(_) => None,
        }
    }
}

/// Field rules, cross-field rules and defaults for one form kind.
#[derive(Debug)]
pub struct FormSchema {
    kind: FormKind,
    fields: Vec<FieldRule>,
    cross_rules: Vec<CrossFieldRule>,
}

impl FormSchema {
    /// Creates an empty schema for a form kind.
    pub const fn new(kind: FormKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
            cross_rules: Vec::new(),
        }
    }

    /// Adds a field rule.
    #[must_use]
    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    /// Adds a cross-field rule.
    #[must_use]
    pub fn cross_rule(mut self, rule: CrossFieldRule) -> Self {
        self.cross_rules.push(rule);
        self
    }

    /// Returns the form kind.
    pub const fn kind(&self) -> FormKind {
        self.kind
    }

    /// Returns the field rules in declaration order.
    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    /// Returns the rule for a field.
    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the value map a freshly mounted form starts with.
    pub fn defaults(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.input.default_value()))
            .collect()
    }

    /// Validates a value map.
    ///
    /// Cross-field rules only run once every field rule has passed.
    pub fn validate(&self, values: &FormValues) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        for rule in &self.fields {
            let default = rule.input.default_value();
            let value = values.get(&rule.name).unwrap_or(&default);
            if let Some(message) = rule.check(value) {
                errors.add(&rule.name, message);
            }
        }

        if errors.is_empty() {
            for rule in self.cross_rules.iter().filter(|r| !r.holds(values)) {
                errors.add(&rule.target, rule.message.clone());
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid(ValidatedForm::from_values(self.kind, values))
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}
