//! Party posts and their comments.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use stat_router::Route;

/// A comment under a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Sequential within its post, starting at 1.
    pub id: u64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A party recruitment post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyPost {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub discord_link: Option<String>,
    pub upload_date: NaiveDate,
    pub views: u64,
    pub comments: Vec<Comment>,
}

impl PartyPost {
    /// Returns the route of this post's detail page.
    pub fn route(&self) -> Route {
        Route::BoardDetail { id: self.id }
    }

    /// Returns whether the title or author contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }

    /// Returns the list-row view of this post.
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id,
            title: self.title.clone(),
            author: self.author.clone(),
            upload_date: self.upload_date,
            views: self.views,
            comment_count: self.comments.len(),
        }
    }
}

/// One row of the board list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub upload_date: NaiveDate,
    pub views: u64,
    pub comment_count: usize,
}
