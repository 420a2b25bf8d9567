//! # tablebook Core
//!
//! Client-side routing for the tablebook reservation app.
//!
//! This library provides the route table (path-to-view mappings), history
//! backends for clean-URL, fragment and in-memory URL strategies, and the
//! navigator the application root is handed to move between views.

// Core modules
pub mod app;
pub mod config;
pub mod error;
pub mod router;
pub mod view;

// Re-export commonly used types
pub use app::{create_router, App, Screen};
pub use config::{HistoryMode, RouteConfig, RouterConfig};
pub use error::{ConfigurationError, Error, NavigationError, Result};
pub use router::{
    Location, NavigationTarget, Navigator, PopEvent, Resolution, ResolvedRoute, RouteDescriptor,
    RouteName, RouteTable,
};
pub use view::{StaticView, View, ViewRef, ViewRegistry};

/// Current version of the tablebook-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
