//! Application routes.

use std::collections::HashMap;

use crate::error::{Result, RouterError};
use crate::path::PathPattern;

/// Route names paired with their path patterns.
const ROUTES: &[(&str, &str)] = &[
    ("sign_in", "/sign-in"),
    ("sign_up", "/sign-up"),
    ("forgot_password", "/forgot-password"),
    ("terms", "/terms"),
    ("dashboard", "/dashboard"),
    ("board", "/board"),
    ("board_write", "/board/write"),
    ("board_detail", "/board/{id}"),
    ("user_profile", "/user/{username}"),
];

/// A page of the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `registered` shows the "sign-up complete" banner.
    SignIn { registered: bool },
    SignUp,
    ForgotPassword,
    Terms,
    Dashboard,
    Board,
    BoardWrite,
    BoardDetail { id: u64 },
    UserProfile { username: String },
}

impl Route {
    /// Returns the route name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SignIn { .. } => "sign_in",
            Self::SignUp => "sign_up",
            Self::ForgotPassword => "forgot_password",
            Self::Terms => "terms",
            Self::Dashboard => "dashboard",
            Self::Board => "board",
            Self::BoardWrite => "board_write",
            Self::BoardDetail { .. } => "board_detail",
            Self::UserProfile { .. } => "user_profile",
        }
    }

    /// Returns the path, including the query string if any.
    pub fn path(&self) -> String {
        match self {
            Self::SignIn { registered: true } => "/sign-in?registered=true".to_string(),
            Self::SignIn { registered: false } => "/sign-in".to_string(),
            Self::SignUp => "/sign-up".to_string(),
            Self::ForgotPassword => "/forgot-password".to_string(),
            Self::Terms => "/terms".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Board => "/board".to_string(),
            Self::BoardWrite => "/board/write".to_string(),
            Self::BoardDetail { id } => format!("/board/{id}"),
            Self::UserProfile { username } => format!("/user/{username}"),
        }
    }

    /// Resolves a path such as `/board/3` or `/sign-in?registered=1`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::NotFound`] if no route matches, and
    /// [`RouterError::InvalidParam`] for a non-numeric post id.
    pub fn from_path(path: &str) -> Result<Self> {
        RouteTable::new().resolve(path)
    }

    fn from_name(name: &str, params: &HashMap<String, String>, query: &str) -> Result<Self> {
        let param = |key: &str| {
            params.get(key).cloned().ok_or_else(|| RouterError::MissingParam {
                route: name.to_string(),
                param: key.to_string(),
            })
        };

        Ok(match name {
            "sign_in" => Self::SignIn {
                registered: query_flag(query, "registered"),
            },
            "sign_up" => Self::SignUp,
            "forgot_password" => Self::ForgotPassword,
            "terms" => Self::Terms,
            "dashboard" => Self::Dashboard,
            "board" => Self::Board,
            "board_write" => Self::BoardWrite,
            "board_detail" => {
                let raw = param("id")?;
                let id = raw.parse().map_err(|_| RouterError::InvalidParam {
                    param: "id".to_string(),
                    value: raw.clone(),
                })?;
                Self::BoardDetail { id }
            }
            "user_profile" => Self::UserProfile {
                username: param("username")?,
            },
            other => return Err(RouterError::RouteNotFound(other.to_string())),
        })
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// A query flag is set when present with any value other than `false`/`0`.
fn query_flag(query: &str, key: &str) -> bool {
    query
        .split('&')
        .filter_map(|pair| {
            let mut kv = pair.splitn(2, '=');
            Some((kv.next()?, kv.next().unwrap_or("")))
        })
        .any(|(k, v)| k == key && v != "false" && v != "0")
}

/// Named path patterns for every route.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<(&'static str, PathPattern)>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    /// Creates the table of application routes.
    pub fn new() -> Self {
        Self {
            routes: ROUTES
                .iter()
                .map(|(name, pattern)| (*name, PathPattern::new(pattern)))
                .collect(),
        }
    }

    /// Returns the pattern of a named route.
    pub fn pattern(&self, name: &str) -> Option<&PathPattern> {
        self.routes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, p)| p)
    }

    /// Generates a URL for a named route.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::RouteNotFound`] for an unknown name and
    /// [`RouterError::MissingParam`] when a parameter is missing.
    pub fn url_for(&self, name: &str, params: &HashMap<String, String>) -> Result<String> {
        let pattern = self
            .pattern(name)
            .ok_or_else(|| RouterError::RouteNotFound(name.to_string()))?;
        pattern
            .reverse(params)
            .map_err(|param| RouterError::MissingParam {
                route: name.to_string(),
                param,
            })
    }

    /// Resolves a concrete path to a route.
    ///
    /// Literal routes are tried before parameterized ones, so
    /// `/board/write` never resolves to a post.
    ///
    /// # Errors
    ///
    /// See [`Route::from_path`].
    pub fn resolve(&self, path: &str) -> Result<Route> {
        let (path_part, query) = path.split_once('?').unwrap_or((path, ""));

        let literal = self.routes.iter().filter(|(_, p)| p.is_literal());
        let parameterized = self.routes.iter().filter(|(_, p)| !p.is_literal());

        for (name, pattern) in literal.chain(parameterized) {
            if let Some(params) = pattern.match_path(path_part) {
                return Route::from_name(name, &params, query);
            }
        }

        Err(RouterError::NotFound(path.to_string()))
    }
}
