//! Post creation as a submit action.

use std::sync::Arc;

use stat_forms::{BoxFuture, SubmissionError, SubmitAction, ValidatedForm};

use crate::board::Board;
use crate::identity::Identity;

/// Publishes the validated post-creation form to a board.
#[derive(Debug, Clone)]
pub struct CreatePostAction {
    board: Arc<Board>,
    author: Identity,
}

impl CreatePostAction {
    /// Creates an action publishing as `author`.
    pub const fn new(board: Arc<Board>, author: Identity) -> Self {
        Self { board, author }
    }
}

impl SubmitAction for CreatePostAction {
    fn perform<'a>(
        &'a self,
        form: &'a ValidatedForm,
    ) -> BoxFuture<'a, Result<(), SubmissionError>> {
        Box::pin(async move {
            match form {
                ValidatedForm::PostCreate(data) => {
                    self.board.create_post(data.clone(), &self.author);
                    Ok(())
                }
                other => Err(SubmissionError::new(format!(
                    "{} 양식으로는 게시글을 등록할 수 없습니다",
                    other.kind()
                ))),
            }
        })
    }
}
