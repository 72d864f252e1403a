//! # stat-router
//!
//! Routes of the STAT party board and a history that submission workflows
//! navigate through.
//!
//! This crate provides:
//! - Path pattern matching with `{param}` segments
//! - Named routes for reverse URL lookup
//! - A [`HistoryNavigator`] implementing [`stat_forms::Navigator`]
//!
//! ## Resolving paths
//!
//! ```rust
//! use stat_router::Route;
//!
//! assert_eq!(Route::from_path("/board/write").unwrap(), Route::BoardWrite);
//! assert_eq!(
//!     Route::from_path("/board/3").unwrap(),
//!     Route::BoardDetail { id: 3 },
//! );
//! assert_eq!(Route::UserProfile { username: "user".into() }.path(), "/user/user");
//! ```
//!
//! ## Named Routes
//!
//! ```rust
//! use std::collections::HashMap;
//! use stat_router::RouteTable;
//!
//! let table = RouteTable::new();
//! let params: HashMap<String, String> =
//!     [("id".to_string(), "5".to_string())].into_iter().collect();
//! assert_eq!(table.url_for("board_detail", &params).unwrap(), "/board/5");
//! ```

mod error;
mod history;
mod path;
mod route;

pub use error::{Result, RouterError};
pub use history::HistoryNavigator;
pub use path::{PathPattern, PathSegment};
pub use route::{Route, RouteTable};
