//! The in-memory board.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use stat_forms::PostData;
use tracing::{debug, info};

use crate::error::{BoardError, Result};
use crate::identity::Identity;
use crate::post::{Comment, PartyPost, PostSummary};

#[derive(Debug, Default)]
struct State {
    posts: Vec<PartyPost>,
    next_id: u64,
}

/// Party posts held in memory.
#[derive(Debug, Default)]
pub struct Board {
    state: RwLock<State>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the number of posts.
    pub fn len(&self) -> usize {
        self.read().posts.len()
    }

    /// Returns whether the board has no posts.
    pub fn is_empty(&self) -> bool {
        self.read().posts.is_empty()
    }

    /// Publishes a validated post under `author`, dated today.
    pub fn create_post(&self, data: PostData, author: &Identity) -> PartyPost {
        let mut state = self.write();
        state.next_id += 1;
        let post = PartyPost {
            id: state.next_id,
            title: data.title,
            content: data.content,
            author: author.username.clone(),
            discord_link: data.discord_link,
            upload_date: Utc::now().date_naive(),
            views: 0,
            comments: Vec::new(),
        };
        state.posts.push(post.clone());
        info!(id = post.id, author = %post.author, "post created");
        post
    }

    /// Returns every post, newest first.
    pub fn list(&self) -> Vec<PostSummary> {
        self.read()
            .posts
            .iter()
            .rev()
            .map(PartyPost::summary)
            .collect()
    }

    /// Returns posts whose title or author contains `term`, ignoring case.
    ///
    /// An empty term matches every post.
    pub fn search(&self, term: &str) -> Vec<PostSummary> {
        let needle = term.to_lowercase();
        self.read()
            .posts
            .iter()
            .rev()
            .filter(|p| p.matches(&needle))
            .map(PartyPost::summary)
            .collect()
    }

    /// Returns a post.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PostNotFound`] for an unknown id.
    pub fn get(&self, id: u64) -> Result<PartyPost> {
        self.read()
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(BoardError::PostNotFound(id))
    }

    /// Opens a post's detail page, counting the view.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PostNotFound`] for an unknown id.
    pub fn view(&self, id: u64) -> Result<PartyPost> {
        let mut state = self.write();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(BoardError::PostNotFound(id))?;
        post.views += 1;
        Ok(post.clone())
    }

    /// Adds a comment to a post.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyComment`] when `content` is blank and
    /// [`BoardError::PostNotFound`] for an unknown id.
    pub fn add_comment(&self, id: u64, author: &Identity, content: &str) -> Result<Comment> {
        let content = content.trim();
        if content.is_empty() {
            return Err(BoardError::EmptyComment);
        }

        let mut state = self.write();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(BoardError::PostNotFound(id))?;
        let comment = Comment {
            id: post.comments.len() as u64 + 1,
            author: author.username.clone(),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        post.comments.push(comment.clone());
        debug!(post = id, comment = comment.id, "comment added");
        Ok(comment)
    }
}
