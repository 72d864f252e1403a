//! # stat-forms
//!
//! Form validation and the submission workflow behind the sign-in, sign-up
//! and party-post forms of the STAT board.
//!
//! This crate provides:
//! - Declarative form schemas with ordered field rules and cross-field rules
//! - A form controller holding values, errors and the busy flag
//! - A submission workflow: validate, submit, then redirect or report
//! - HTML rendering of a form's view bindings
//!
//! ## Quick Start
//!
//! ```rust
//! use stat_forms::{field, FormController, FormKind, ValidationResult};
//!
//! let mut form = FormController::for_kind(FormKind::PostCreate).unwrap();
//! form.set_field_value(field::TITLE, "발로란트 5인큐 모집").unwrap();
//! form.set_field_value(field::CONTENT, "오늘 밤 10시, 골드 이상").unwrap();
//!
//! assert!(form.attempt_submit().is_valid());
//! ```
//!
//! ## Validation
//!
//! Each field stops at its first failing rule, so a field shows one message
//! at a time. Cross-field rules run only once every field rule passes:
//!
//! ```rust
//! use stat_forms::{field, FormKind, FormValues};
//!
//! let schema = FormKind::SignUp.schema().unwrap();
//! let values = FormValues::new()
//!     .with(field::EMAIL, "gamer@example.com")
//!     .with(field::NICKNAME, "네팔렘")
//!     .with(field::PASSWORD, "abcdefg1")
//!     .with(field::CONFIRM_PASSWORD, "abcdefg2")
//!     .with(field::AGREE_TERMS, true);
//!
//! let result = schema.validate(&values);
//! let errors = result.errors().unwrap();
//! assert_eq!(errors.fields(), vec![field::CONFIRM_PASSWORD]);
//! ```
//!
//! ## Submitting
//!
//! ```ignore
//! use std::sync::Arc;
//! use stat_forms::{FormKind, LoggingAction, SubmissionWorkflow, SubmitOutcome};
//!
//! let workflow = SubmissionWorkflow::for_kind(
//!     FormKind::SignIn,
//!     Arc::new(LoggingAction),
//!     navigator,
//! )?;
//! match workflow.submit().await {
//!     SubmitOutcome::Redirected(route) => println!("now at {route}"),
//!     SubmitOutcome::Invalid(errors) => println!("{errors}"),
//!     other => println!("{other:?}"),
//! }
//! ```

mod config;
mod controller;
mod error;
mod kinds;
pub mod render;
mod schema;
pub mod validation;
mod value;
mod workflow;

pub use config::WorkflowConfig;
pub use controller::{FieldBinding, FormController};
pub use error::{FormError, Result, SubmissionError, ValidationErrors};
pub use kinds::{field, FormKind, PostData, SignInData, SignUpData, ValidatedForm};
pub use schema::{CrossFieldRule, FieldRule, FormSchema, InputKind, ValidationResult};
pub use value::{FieldValue, FormValues};
pub use workflow::{
    BoxFuture, FormView, LoggingAction, Navigator, SubmissionWorkflow, SubmitAction,
    SubmitOutcome, WorkflowState,
};
pub use tokio_util::sync::CancellationToken;
