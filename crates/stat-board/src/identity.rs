//! The signed-in user, passed explicitly.

use serde::{Deserialize, Serialize};
use stat_router::Route;

/// Who is using the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
}

impl Identity {
    /// Creates an identity.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Returns the route of this user's profile page.
    pub fn profile_route(&self) -> Route {
        Route::UserProfile {
            username: self.username.clone(),
        }
    }
}
