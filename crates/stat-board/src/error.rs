//! Error types for the board.

use thiserror::Error;

/// Board-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// No post has this id.
    #[error("post not found: {0}")]
    PostNotFound(u64),

    /// A comment was empty after trimming.
    #[error("comment is empty")]
    EmptyComment,
}

/// Result type alias for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;
