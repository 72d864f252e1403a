//! Tests for redirects driven by submission workflows.

use std::sync::Arc;

use stat_forms::{field, FormKind, LoggingAction, SubmissionWorkflow, SubmitOutcome};
use stat_router::{HistoryNavigator, Route};

#[tokio::test]
async fn sign_up_lands_on_sign_in() {
    let history = Arc::new(HistoryNavigator::new(Route::SignUp));
    let wf = SubmissionWorkflow::for_kind(FormKind::SignUp, Arc::new(LoggingAction), history.clone())
        .unwrap();

    wf.set_field_value(field::EMAIL, "neph@example.com").unwrap();
    wf.set_field_value(field::NICKNAME, "네팔렘").unwrap();
    wf.set_field_value(field::PASSWORD, "diablo444").unwrap();
    wf.set_field_value(field::CONFIRM_PASSWORD, "diablo444").unwrap();
    wf.set_field_value(field::AGREE_TERMS, true).unwrap();

    assert_eq!(wf.submit().await, SubmitOutcome::Redirected("sign_in"));
    assert_eq!(history.current(), Route::SignIn { registered: false });
    assert_eq!(history.current().path(), "/sign-in");
}

#[tokio::test]
async fn sign_in_lands_on_dashboard() {
    let history = Arc::new(HistoryNavigator::new(Route::SignIn { registered: true }));
    let wf = SubmissionWorkflow::for_kind(FormKind::SignIn, Arc::new(LoggingAction), history.clone())
        .unwrap();

    wf.set_field_value(field::EMAIL, "gamer123@example.com").unwrap();
    wf.set_field_value(field::PASSWORD, "pw").unwrap();

    wf.submit().await;
    assert_eq!(history.current(), Route::Dashboard);
}

#[tokio::test]
async fn invalid_post_stays_on_write_page() {
    let history = Arc::new(HistoryNavigator::new(Route::Board));
    history.push(Route::BoardWrite);
    let wf = SubmissionWorkflow::for_kind(
        FormKind::PostCreate,
        Arc::new(LoggingAction),
        history.clone(),
    )
    .unwrap();

    wf.set_field_value(field::TITLE, "짧음").unwrap();
    assert!(matches!(wf.submit().await, SubmitOutcome::Invalid(_)));
    assert_eq!(history.current(), Route::BoardWrite);

    assert_eq!(history.back(), Some(Route::Board));
}
