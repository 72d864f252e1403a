//! Submission workflow.
//!
//! Sequences one logical submission of a form:
//!
//! ```text
//! Idle -> Validating -> Invalid -> Idle
//!                    -> Submitting -> Succeeded -> Redirected
//!                                  -> Failed -> Idle
//! ```
//!
//! The injected [`SubmitAction`] is the only suspension point. While it
//! runs the workflow is busy and further submits are ignored. The
//! workflow's [`CancellationToken`] is tied to the lifetime of the view;
//! once cancelled, an in-flight result is dropped and no redirect happens.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures::FutureExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::WorkflowConfig;
use crate::controller::{FieldBinding, FormController};
use crate::error::{Result, SubmissionError, ValidationErrors};
use crate::kinds::{FormKind, ValidatedForm};
use crate::schema::ValidationResult;
use crate::value::FieldValue;

/// Shown when the submit action panics instead of returning.
const ACTION_PANICKED: &str = "요청을 처리하지 못했습니다. 다시 시도해주세요";

/// A boxed future for injected async capabilities.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The side effect behind a form: register, sign in or create a post.
///
/// # Example
///
/// ```ignore
/// struct Register;
///
/// impl SubmitAction for Register {
///     fn perform<'a>(
///         &'a self,
///         form: &'a ValidatedForm,
///     ) -> BoxFuture<'a, Result<(), SubmissionError>> {
///         Box::pin(async move {
///             api.register(form).await.map_err(|e| SubmissionError::new(e.to_string()))
///         })
///     }
/// }
/// ```
pub trait SubmitAction: Send + Sync {
    /// Performs the submission with validated values.
    fn perform<'a>(&'a self, form: &'a ValidatedForm)
        -> BoxFuture<'a, std::result::Result<(), SubmissionError>>;
}

/// Moves the user to another page.
pub trait Navigator: Send + Sync {
    /// Navigates to a named route.
    fn go_to(&self, route: &str);
}

/// Placeholder action that logs the attempt and succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingAction;

impl SubmitAction for LoggingAction {
    fn perform<'a>(
        &'a self,
        form: &'a ValidatedForm,
    ) -> BoxFuture<'a, std::result::Result<(), SubmissionError>> {
        Box::pin(async move {
            info!(form = %form.kind(), "submission received");
            Ok(())
        })
    }
}

/// Where the workflow currently is.
///
/// `Invalid` and `Failed` are not states of their own: both settle back
/// to `Idle` immediately, with the errors kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Redirected,
}

impl std::fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Redirected => "redirected",
        };
        f.write_str(name)
    }
}

/// What a call to [`SubmissionWorkflow::submit`] ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are shown next to their fields.
    Invalid(ValidationErrors),
    /// The action failed; its message is shown above the form.
    Failed(SubmissionError),
    /// The action succeeded and the navigator was sent to this route.
    Redirected(&'static str),
    /// A submission was already in flight, or the form is done.
    Ignored,
    /// The view went away before the submission finished.
    Cancelled,
}

/// Everything the view renders for a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub kind: FormKind,
    pub fields: Vec<FieldBinding>,
    pub busy: bool,
    pub submission_error: Option<String>,
}

#[derive(Debug)]
struct Inner {
    controller: FormController,
    state: WorkflowState,
    submission_error: Option<String>,
}

/// Runs validation, the submit action and the redirect for one form.
pub struct SubmissionWorkflow {
    inner: Mutex<Inner>,
    action: Arc<dyn SubmitAction>,
    navigator: Arc<dyn Navigator>,
    delay: Duration,
    cancel: CancellationToken,
}

impl std::fmt::Debug for SubmissionWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionWorkflow")
            .field("inner", &self.inner)
            .field("delay", &self.delay)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl SubmissionWorkflow {
    /// Creates a workflow that redirects immediately on success.
    pub fn new(
        controller: FormController,
        action: Arc<dyn SubmitAction>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            inner: Mutex::new(Inner {
                controller,
                state: WorkflowState::Idle,
                submission_error: None,
            }),
            action,
            navigator,
            delay: Duration::ZERO,
            cancel: CancellationToken::new(),
        }
    }

    /// Creates a workflow for one of the built-in forms.
    ///
    /// # Errors
    ///
    /// Propagates schema construction errors.
    pub fn for_kind(
        kind: FormKind,
        action: Arc<dyn SubmitAction>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        Ok(Self::new(FormController::for_kind(kind)?, action, navigator))
    }

    /// Sets the pause between success and redirect.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Takes the redirect delay for this form's kind from a config.
    #[must_use]
    pub fn with_config(self, config: &WorkflowConfig) -> Self {
        let delay = config.delay_for(self.kind());
        self.with_delay(delay)
    }

    /// Binds the workflow to an existing token, usually the view's.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the form kind.
    pub fn kind(&self) -> FormKind {
        self.lock().controller.kind()
    }

    /// Returns the current state.
    pub fn state(&self) -> WorkflowState {
        self.lock().state
    }

    /// Returns whether a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.lock().controller.is_submitting()
    }

    /// Returns the message of the last failed submission.
    pub fn submission_error(&self) -> Option<String> {
        self.lock().submission_error.clone()
    }

    /// Returns the error shown for a field.
    pub fn field_error(&self, field: &str) -> Option<String> {
        self.lock().controller.field_error(field).map(str::to_string)
    }

    /// Updates one field. Accepted in every state.
    ///
    /// # Errors
    ///
    /// See [`FormController::set_field_value`].
    pub fn set_field_value(&self, field: &str, value: impl Into<FieldValue>) -> Result<()> {
        self.lock().controller.set_field_value(field, value)
    }

    /// Restores the form's defaults unless a submission is in flight.
    ///
    /// Returns whether the form was reset.
    pub fn reset(&self) -> bool {
        let mut inner = self.lock();
        if inner.state != WorkflowState::Idle {
            return false;
        }
        inner.controller.reset();
        inner.submission_error = None;
        true
    }

    /// Returns a snapshot of what the view needs to render.
    pub fn view(&self) -> FormView {
        let inner = self.lock();
        FormView {
            kind: inner.controller.kind(),
            fields: inner.controller.bindings(),
            busy: inner.controller.is_submitting(),
            submission_error: inner.submission_error.clone(),
        }
    }

    /// Cancels any in-flight submission or pending redirect.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns the token bound to this workflow.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Handles a submit event.
    pub async fn submit(&self) -> SubmitOutcome {
        let form = match self.begin() {
            Ok(form) => form,
            Err(outcome) => return outcome,
        };
        let kind = form.kind();
        let in_flight = InFlight::new(self);

        // `perform` runs inside the guarded future so a panic before it
        // returns is caught too.
        let perform = AssertUnwindSafe(async { self.action.perform(&form).await }).catch_unwind();
        let result = tokio::select! {
            biased;
            () = self.cancel.cancelled() => None,
            result = perform => Some(result.unwrap_or_else(|_| {
                warn!(form = %kind, "submit action panicked");
                Err(SubmissionError::new(ACTION_PANICKED))
            })),
        };

        match result {
            None => {
                info!(form = %kind, "submission cancelled");
                in_flight.settle(WorkflowState::Idle, None);
                return SubmitOutcome::Cancelled;
            }
            Some(Err(err)) => {
                warn!(form = %kind, error = %err, "submission failed");
                in_flight.settle(WorkflowState::Idle, Some(err.message().to_string()));
                return SubmitOutcome::Failed(err);
            }
            Some(Ok(())) => {
                debug!(form = %kind, "submission succeeded");
                in_flight.settle(WorkflowState::Succeeded, None);
            }
        }

        if !self.delay.is_zero() {
            tokio::select! {
                biased;
                () = self.cancel.cancelled() => {
                    info!(form = %kind, "redirect cancelled");
                    return SubmitOutcome::Cancelled;
                }
                () = tokio::time::sleep(self.delay) => {}
            }
        } else if self.cancel.is_cancelled() {
            return SubmitOutcome::Cancelled;
        }

        let destination = kind.destination();
        self.navigator.go_to(destination);
        self.lock().state = WorkflowState::Redirected;
        info!(form = %kind, route = destination, "redirected");
        SubmitOutcome::Redirected(destination)
    }

    /// Validates and marks the workflow busy, or says why not.
    fn begin(&self) -> std::result::Result<ValidatedForm, SubmitOutcome> {
        let mut inner = self.lock();
        if inner.state != WorkflowState::Idle {
            debug!(state = %inner.state, "submit ignored");
            return Err(SubmitOutcome::Ignored);
        }
        if self.cancel.is_cancelled() {
            return Err(SubmitOutcome::Cancelled);
        }

        inner.state = WorkflowState::Validating;
        inner.submission_error = None;
        match inner.controller.attempt_submit() {
            ValidationResult::Invalid(errors) => {
                inner.state = WorkflowState::Idle;
                Err(SubmitOutcome::Invalid(errors))
            }
            ValidationResult::Valid(form) => {
                inner.state = WorkflowState::Submitting;
                inner.controller.set_submitting(true);
                Ok(form)
            }
        }
    }

    fn settle(&self, state: WorkflowState, submission_error: Option<String>) {
        let mut inner = self.lock();
        inner.state = state;
        inner.controller.set_submitting(false);
        inner.submission_error = submission_error;
    }
}

/// Marks a submission whose action has not settled yet.
///
/// Dropping it armed means the `submit` future was abandoned mid-action;
/// the workflow then goes back to `Idle` so the form can be submitted again.
struct InFlight<'a> {
    workflow: &'a SubmissionWorkflow,
    armed: bool,
}

impl<'a> InFlight<'a> {
    const fn new(workflow: &'a SubmissionWorkflow) -> Self {
        Self {
            workflow,
            armed: true,
        }
    }

    fn settle(mut self, state: WorkflowState, submission_error: Option<String>) {
        self.armed = false;
        self.workflow.settle(state, submission_error);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            debug!("submission abandoned before the action settled");
            self.workflow.settle(WorkflowState::Idle, None);
        }
    }
}
