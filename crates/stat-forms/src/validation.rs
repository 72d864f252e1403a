//! Field validators.
//!
//! A validator is one (check, message) pair. Field rules hold them in order
//! and stop at the first one that fails.

use std::sync::LazyLock;

use regex::Regex;

use crate::value::FieldValue;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex compiles")
});

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns the error message if invalid.
    fn validate(&self, value: &FieldValue) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

fn text_of(value: &FieldValue) -> &str {
    value.as_text().unwrap_or("")
}

/// Validator that requires a non-blank value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new `RequiredValidator` with default message.
    pub fn new() -> Self {
        Self {
            message: "필수 입력 항목입니다".to_string(),
        }
    }

    /// Creates a new `RequiredValidator` with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        if text_of(value).trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a minimum length in characters.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new `MinLengthValidator`.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("최소 {min_length}자 이상 입력해주세요"),
        }
    }

    /// Creates a new `MinLengthValidator` with custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        if text_of(value).chars().count() < self.min_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a maximum length in characters.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    max_length: usize,
    message: String,
}

impl MaxLengthValidator {
    /// Creates a new `MaxLengthValidator`.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            message: format!("최대 {max_length}자까지 입력할 수 있습니다"),
        }
    }

    /// Creates a new `MaxLengthValidator` with custom message.
    pub fn with_message(max_length: usize, message: impl Into<String>) -> Self {
        Self {
            max_length,
            message: message.into(),
        }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        if text_of(value).chars().count() > self.max_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for email addresses.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new `EmailValidator` with default message.
    pub fn new() -> Self {
        Self {
            message: "올바른 이메일 형식이 아닙니다".to_string(),
        }
    }

    /// Creates a new `EmailValidator` with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        if EMAIL_REGEX.is_match(text_of(value)) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for absolute URLs.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    message: String,
}

impl UrlValidator {
    /// Creates a new `UrlValidator` with default message.
    pub fn new() -> Self {
        Self {
            message: "유효한 URL을 입력해주세요".to_string(),
        }
    }

    /// Creates a new `UrlValidator` with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for UrlValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        match url::Url::parse(text_of(value)) {
            Ok(_) => Ok(()),
            Err(_) => Err(self.message.clone()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator requiring the value to match every one of its patterns.
///
/// The regex engine has no lookaround, so "contains a letter and a digit"
/// is expressed as several patterns that must all match.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    patterns: Vec<Regex>,
    message: String,
}

impl RegexValidator {
    /// Creates a new `RegexValidator` with a single pattern.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Self::all(&[pattern], message)
    }

    /// Creates a `RegexValidator` that requires all patterns to match.
    pub fn all(patterns: &[&str], message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            patterns: patterns
                .iter()
                .map(|p| Regex::new(p))
                .collect::<Result<_, _>>()?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        let text = text_of(value);
        if self.patterns.iter().all(|p| p.is_match(text)) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for checkboxes that must be ticked.
#[derive(Debug, Clone)]
pub struct AcceptedValidator {
    message: String,
}

impl AcceptedValidator {
    /// Creates a new `AcceptedValidator` with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Validator for AcceptedValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        if value.as_flag() == Some(true) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Runs the inner validator only when a value was provided.
///
/// An empty string counts as "not provided".
#[derive(Debug, Clone)]
pub struct Optional<V> {
    inner: V,
}

impl<V: Validator> Optional<V> {
    /// Wraps a validator.
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V: Validator> Validator for Optional<V> {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        if value.is_blank() {
            Ok(())
        } else {
            self.inner.validate(value)
        }
    }

    fn message(&self) -> &str {
        self.inner.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::from(s)
    }

    #[test]
    fn test_required_validator() {
        let v = RequiredValidator::new();
        assert!(v.validate(&text("hello")).is_ok());
        assert!(v.validate(&text("")).is_err());
        assert!(v.validate(&text("   ")).is_err());
    }

    #[test]
    fn test_length_counts_characters() {
        let min = MinLengthValidator::new(5);
        let max = MaxLengthValidator::new(5);
        assert!(min.validate(&text("발로란트팟")).is_ok());
        assert!(max.validate(&text("발로란트팟")).is_ok());
        assert!(min.validate(&text("발로란트")).is_err());
        assert!(max.validate(&text("발로란트 5인큐")).is_err());
    }

    #[test]
    fn test_email_validator() {
        let v = EmailValidator::new();
        assert!(v.validate(&text("user@example.com")).is_ok());
        assert!(v.validate(&text("user.name@domain.co.kr")).is_ok());
        assert!(v.validate(&text("invalid")).is_err());
        assert!(v.validate(&text("@example.com")).is_err());
        assert_eq!(
            v.validate(&text("")),
            Err("올바른 이메일 형식이 아닙니다".to_string())
        );
    }

    #[test]
    fn test_url_validator() {
        let v = UrlValidator::new();
        assert!(v.validate(&text("https://discord.gg/example")).is_ok());
        assert!(v.validate(&text("http://example.com/path")).is_ok());
        assert!(v.validate(&text("discord.gg/example")).is_err());
        assert!(v.validate(&text("not a url")).is_err());
    }

    #[test]
    fn test_regex_validator_all_patterns() {
        let v = RegexValidator::all(&[r"^[A-Za-z\d]{8,}$", r"[A-Za-z]", r"\d"], "mixed").unwrap();
        assert!(v.validate(&text("abcdefg1")).is_ok());
        assert!(v.validate(&text("abcdefgh")).is_err());
        assert!(v.validate(&text("12345678")).is_err());
        assert!(v.validate(&text("abcdef1!")).is_err());
    }

    #[test]
    fn test_regex_validator_rejects_bad_pattern() {
        assert!(RegexValidator::new("(", "never").is_err());
    }

    #[test]
    fn test_accepted_validator() {
        let v = AcceptedValidator::with_message("agree");
        assert!(v.validate(&FieldValue::Flag(true)).is_ok());
        assert!(v.validate(&FieldValue::Flag(false)).is_err());
        assert!(v.validate(&text("true")).is_err());
    }

    #[test]
    fn test_optional_skips_empty() {
        let v = Optional::new(UrlValidator::new());
        assert!(v.validate(&text("")).is_ok());
        assert!(v.validate(&text("https://discord.gg/x")).is_ok());
        assert!(v.validate(&text("nope")).is_err());
    }
}
