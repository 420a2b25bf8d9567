//! Error types and handling for tablebook core

use thiserror::Error;

/// Result type alias for tablebook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tablebook core
#[derive(Error, Debug)]
pub enum Error {
    /// Route table or router configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigurationError),

    /// Navigation errors
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),
}

/// Errors raised while building a route table.
///
/// These are fatal: a navigator cannot be constructed from a malformed table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Route table is empty")]
    EmptyTable,

    #[error("Route at position {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    #[error("Invalid path pattern '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Duplicate route path '{path}' (conflicts with route '{existing}')")]
    DuplicatePath { path: String, existing: String },

    #[error("Duplicate route name '{name}'")]
    DuplicateName { name: String },

    #[error("Unknown view '{view}' for route '{route}'")]
    UnknownView { route: String, view: String },

    #[error("Invalid redirect on route '{route}': {reason}")]
    InvalidRedirect { route: String, reason: String },

    #[error("Invalid base path '{base}'")]
    InvalidBase { base: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// Errors returned by navigation requests.
///
/// All of these are recoverable; the current route is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No route named '{name}'")]
    UnknownRoute { name: String },

    #[error("Invalid params for route '{route}': {message}")]
    InvalidParams { route: String, message: String },

    #[error("No route matches '{path}'")]
    NotFound { path: String },

    #[error("Invalid location '{location}'")]
    InvalidLocation { location: String },

    #[error("Too many redirects while resolving '{path}'")]
    RedirectLimit { path: String },

    #[error("History has no entry at offset {delta}")]
    OutOfRange { delta: isize },

    #[error("Navigator has been torn down")]
    Detached,
}
