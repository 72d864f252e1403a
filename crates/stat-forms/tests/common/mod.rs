#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use stat_forms::{
    field, BoxFuture, FormKind, Navigator, SubmissionError, SubmissionWorkflow, SubmitAction,
    ValidatedForm,
};

/// Records every navigation.
#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: &str) {
        self.visits.lock().unwrap().push(route.to_string());
    }
}

/// Counts calls and answers with a fixed result, optionally after a gate opens.
pub struct ScriptedAction {
    calls: AtomicUsize,
    result: Result<(), SubmissionError>,
    gate: Option<Notify>,
    seen: Mutex<Vec<ValidatedForm>>,
}

impl ScriptedAction {
    pub fn succeeding() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            result: Ok(()),
            gate: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(SubmissionError::new(message)),
            ..Self::succeeding()
        }
    }

    /// Blocks inside `perform` until [`ScriptedAction::release`] is called.
    #[must_use]
    pub fn gated(mut self) -> Self {
        self.gate = Some(Notify::new());
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<ValidatedForm> {
        self.seen.lock().unwrap().clone()
    }
}

impl SubmitAction for ScriptedAction {
    fn perform<'a>(
        &'a self,
        form: &'a ValidatedForm,
    ) -> BoxFuture<'a, Result<(), SubmissionError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(form.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.result.clone()
        })
    }
}

pub fn workflow(
    kind: FormKind,
    action: &Arc<ScriptedAction>,
    navigator: &Arc<RecordingNavigator>,
) -> SubmissionWorkflow {
    SubmissionWorkflow::for_kind(kind, action.clone(), navigator.clone())
        .unwrap_or_else(|e| panic!("failed to build {kind} workflow: {e}"))
}

pub fn fill_valid(workflow: &SubmissionWorkflow) {
    let values: Vec<(&str, stat_forms::FieldValue)> = match workflow.kind() {
        FormKind::SignIn => vec![
            (field::EMAIL, "gamer123@example.com".into()),
            (field::PASSWORD, "hunter22".into()),
        ],
        FormKind::SignUp => vec![
            (field::EMAIL, "maple@example.com".into()),
            (field::NICKNAME, "단풍나무".into()),
            (field::PASSWORD, "maple2025".into()),
            (field::CONFIRM_PASSWORD, "maple2025".into()),
            (field::AGREE_TERMS, true.into()),
        ],
        FormKind::PostCreate => vec![
            (field::TITLE, "로스트아크 아르고스 파티 구합니다".into()),
            (field::CONTENT, "1430 이상, 저녁 9시 출발합니다. 디코 필수".into()),
            (field::DISCORD_LINK, "https://discord.gg/argos".into()),
        ],
    };
    for (name, value) in values {
        workflow
            .set_field_value(name, value)
            .unwrap_or_else(|e| panic!("failed to set {name}: {e}"));
    }
}
