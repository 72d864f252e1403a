//! # stat-board
//!
//! The party recruitment board: posts, comments and search, held in memory.
//!
//! The current user is always passed in as an [`Identity`]; nothing here
//! assumes a signed-in user.
//!
//! ## Quick Start
//!
//! ```rust
//! use stat_board::{Board, Identity};
//! use stat_forms::PostData;
//!
//! let board = Board::new();
//! let me = Identity::new("치킨먹자");
//! board.create_post(
//!     PostData {
//!         title: "배틀그라운드 스쿼드 모집합니다".to_string(),
//!         content: "저녁 10시, 마이크 필수입니다".to_string(),
//!         discord_link: None,
//!     },
//!     &me,
//! );
//!
//! assert_eq!(board.search("스쿼드").len(), 1);
//! assert_eq!(board.search("치킨").len(), 1);
//! ```
//!
//! ## Writing posts through a form
//!
//! [`CreatePostAction`] is the submit action of the post-creation form:
//!
//! ```ignore
//! let action = Arc::new(CreatePostAction::new(board.clone(), me));
//! let workflow = SubmissionWorkflow::for_kind(FormKind::PostCreate, action, history)?;
//! ```

mod action;
mod board;
mod error;
mod identity;
mod post;

pub use action::CreatePostAction;
pub use board::Board;
pub use error::{BoardError, Result};
pub use identity::Identity;
pub use post::{Comment, PartyPost, PostSummary};
