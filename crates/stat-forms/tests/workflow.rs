//! Tests for the submission workflow.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::*;
use stat_forms::{
    field, FormKind, PostData, SubmissionError, SubmitOutcome, ValidatedForm, WorkflowState,
};

#[tokio::test]
async fn success_redirects_once_per_kind() {
    for (kind, route) in [
        (FormKind::SignIn, "dashboard"),
        (FormKind::SignUp, "sign_in"),
        (FormKind::PostCreate, "board"),
    ] {
        let action = Arc::new(ScriptedAction::succeeding());
        let navigator = Arc::new(RecordingNavigator::default());
        let wf = workflow(kind, &action, &navigator);
        fill_valid(&wf);

        assert_eq!(wf.submit().await, SubmitOutcome::Redirected(route));
        assert_eq!(wf.state(), WorkflowState::Redirected);
        assert!(!wf.is_busy());
        assert_eq!(action.calls(), 1);
        assert_eq!(navigator.visits(), vec![route.to_string()]);
    }
}

#[tokio::test]
async fn action_receives_typed_values() {
    let action = Arc::new(ScriptedAction::succeeding());
    let navigator = Arc::new(RecordingNavigator::default());
    let wf = workflow(FormKind::PostCreate, &action, &navigator);
    fill_valid(&wf);
    wf.set_field_value(field::DISCORD_LINK, "").unwrap();

    wf.submit().await;

    assert_eq!(
        action.seen(),
        vec![ValidatedForm::PostCreate(PostData {
            title: "로스트아크 아르고스 파티 구합니다".to_string(),
            content: "1430 이상, 저녁 9시 출발합니다. 디코 필수".to_string(),
            discord_link: None,
        })]
    );
}

#[tokio::test]
async fn invalid_form_never_reaches_action() {
    let action = Arc::new(ScriptedAction::succeeding());
    let navigator = Arc::new(RecordingNavigator::default());
    let wf = workflow(FormKind::SignUp, &action, &navigator);
    fill_valid(&wf);
    wf.set_field_value(field::CONFIRM_PASSWORD, "maple2026").unwrap();

    let outcome = wf.submit().await;
    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected invalid, got {outcome:?}");
    };
    assert_eq!(errors.fields(), vec![field::CONFIRM_PASSWORD]);
    assert_eq!(action.calls(), 0);
    assert!(navigator.visits().is_empty());
    assert_eq!(wf.state(), WorkflowState::Idle);
    assert!(!wf.is_busy());
    assert_eq!(
        wf.view().fields[3].error.as_deref(),
        Some("비밀번호가 일치하지 않습니다")
    );
}

#[tokio::test]
async fn failure_returns_to_idle_with_message() {
    let action = Arc::new(ScriptedAction::failing("서버에 연결할 수 없습니다"));
    let navigator = Arc::new(RecordingNavigator::default());
    let wf = workflow(FormKind::SignIn, &action, &navigator);
    fill_valid(&wf);

    assert_eq!(
        wf.submit().await,
        SubmitOutcome::Failed(SubmissionError::new("서버에 연결할 수 없습니다"))
    );
    assert_eq!(wf.state(), WorkflowState::Idle);
    assert!(!wf.is_busy());
    assert_eq!(
        wf.submission_error().as_deref(),
        Some("서버에 연결할 수 없습니다")
    );
    assert!(navigator.visits().is_empty());
}

#[tokio::test]
async fn failed_submission_can_be_retried() {
    let failing = Arc::new(ScriptedAction::failing("잠시 후 다시 시도해주세요"));
    let navigator = Arc::new(RecordingNavigator::default());
    let wf = workflow(FormKind::PostCreate, &failing, &navigator);
    fill_valid(&wf);

    wf.submit().await;
    wf.submit().await;

    assert_eq!(failing.calls(), 2);
    assert!(wf.view().submission_error.is_some());
}

#[tokio::test]
async fn resubmit_while_submitting_is_ignored() {
    let action = Arc::new(ScriptedAction::succeeding().gated());
    let navigator = Arc::new(RecordingNavigator::default());
    let wf = workflow(FormKind::PostCreate, &action, &navigator);
    fill_valid(&wf);

    let first = wf.submit();
    tokio::pin!(first);
    assert!(futures::poll!(&mut first).is_pending());
    assert_eq!(wf.state(), WorkflowState::Submitting);
    assert!(wf.is_busy());
    assert!(wf.view().busy);

    assert_eq!(wf.submit().await, SubmitOutcome::Ignored);
    assert_eq!(action.calls(), 1);
    assert_eq!(wf.state(), WorkflowState::Submitting);

    action.release();
    assert_eq!(first.await, SubmitOutcome::Redirected("board"));
    assert_eq!(action.calls(), 1);
    assert_eq!(navigator.visits(), vec!["board".to_string()]);
}

#[tokio::test]
async fn field_edits_accepted_while_submitting() {
    let action = Arc::new(ScriptedAction::succeeding().gated());
    let navigator = Arc::new(RecordingNavigator::default());
    let wf = workflow(FormKind::SignIn, &action, &navigator);
    fill_valid(&wf);

    let first = wf.submit();
    tokio::pin!(first);
    assert!(futures::poll!(&mut first).is_pending());
    wf.set_field_value(field::REMEMBER_ME, true).unwrap();
    assert!(!wf.reset());

    action.release();
    assert_eq!(first.await, SubmitOutcome::Redirected("dashboard"));
}

#[tokio::test]
async fn submit_after_redirect_is_ignored() {
    let action = Arc::new(ScriptedAction::succeeding());
    let navigator = Arc::new(RecordingNavigator::default());
    let wf = workflow(FormKind::SignUp, &action, &navigator);
    fill_valid(&wf);

    wf.submit().await;
    assert_eq!(wf.submit().await, SubmitOutcome::Ignored);
    assert_eq!(action.calls(), 1);
    assert_eq!(navigator.visits().len(), 1);
}

#[tokio::test]
async fn cancel_during_submitting_drops_result() {
    let action = Arc::new(ScriptedAction::succeeding().gated());
    let navigator = Arc::new(RecordingNavigator::default());
    let wf = workflow(FormKind::PostCreate, &action, &navigator);
    fill_valid(&wf);

    let first = wf.submit();
    tokio::pin!(first);
    assert!(futures::poll!(&mut first).is_pending());

    wf.cancel();
    assert_eq!(first.await, SubmitOutcome::Cancelled);
    assert_eq!(wf.state(), WorkflowState::Idle);
    assert!(!wf.is_busy());
    assert!(navigator.visits().is_empty());
}

#[tokio::test]
async fn cancel_during_delay_skips_redirect() {
    let action = Arc::new(ScriptedAction::succeeding());
    let navigator = Arc::new(RecordingNavigator::default());
    let wf = workflow(FormKind::SignIn, &action, &navigator).with_delay(Duration::from_secs(60));
    fill_valid(&wf);

    let first = wf.submit();
    tokio::pin!(first);
    assert!(futures::poll!(&mut first).is_pending());
    assert_eq!(wf.state(), WorkflowState::Succeeded);
    assert!(!wf.is_busy());

    wf.cancel();
    assert_eq!(first.await, SubmitOutcome::Cancelled);
    assert!(navigator.visits().is_empty());
}

#[tokio::test]
async fn short_delay_still_redirects() {
    let action = Arc::new(ScriptedAction::succeeding());
    let navigator = Arc::new(RecordingNavigator::default());
    let wf = workflow(FormKind::PostCreate, &action, &navigator)
        .with_delay(Duration::from_millis(5));
    fill_valid(&wf);

    assert_eq!(wf.submit().await, SubmitOutcome::Redirected("board"));
    assert_eq!(navigator.visits(), vec!["board".to_string()]);
}

#[tokio::test]
async fn shared_token_cancels_workflow() {
    let action = Arc::new(ScriptedAction::succeeding().gated());
    let navigator = Arc::new(RecordingNavigator::default());
    let view_token = stat_forms::CancellationToken::new();
    let wf = workflow(FormKind::SignUp, &action, &navigator)
        .with_cancellation(view_token.child_token());
    fill_valid(&wf);

    let first = wf.submit();
    tokio::pin!(first);
    assert!(futures::poll!(&mut first).is_pending());

    view_token.cancel();
    assert_eq!(first.await, SubmitOutcome::Cancelled);
    assert!(wf.cancellation_token().is_cancelled());
}

#[tokio::test]
async fn abandoned_submit_returns_to_idle() {
    let action = Arc::new(ScriptedAction::succeeding().gated());
    let navigator = Arc::new(RecordingNavigator::default());
    let wf = workflow(FormKind::PostCreate, &action, &navigator);
    fill_valid(&wf);

    let timed_out = tokio::time::timeout(Duration::from_millis(10), wf.submit()).await;
    assert!(timed_out.is_err());
    assert_eq!(wf.state(), WorkflowState::Idle);
    assert!(!wf.is_busy());
    assert!(navigator.visits().is_empty());

    action.release();
    assert_eq!(wf.submit().await, SubmitOutcome::Redirected("board"));
    assert_eq!(action.calls(), 2);
    assert_eq!(navigator.visits(), vec!["board".to_string()]);
}
