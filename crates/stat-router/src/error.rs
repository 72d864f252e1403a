//! Error types for routing.

use thiserror::Error;

/// Router-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// No route matched the path.
    #[error("no route matched: {0}")]
    NotFound(String),

    /// Route name not found.
    #[error("route not found: {0}")]
    RouteNotFound(String),

    /// A path parameter needed to build the URL was not given.
    #[error("missing parameter {param} for route {route}")]
    MissingParam { route: String, param: String },

    /// A path parameter did not have the expected shape.
    #[error("invalid parameter {param}: {value}")]
    InvalidParam { param: String, value: String },
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
