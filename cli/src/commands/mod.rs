//! CLI command implementations

pub mod interactive;
pub mod navigate;
pub mod resolve;
pub mod routes;

pub use interactive::interactive_command;
pub use navigate::navigate_command;
pub use resolve::resolve_command;
pub use routes::routes_command;

use anyhow::{Context, Result};
use tablebook_core::{app, Navigator, RouterConfig};

/// Build a navigator for the configuration, with the application's views
pub fn build_navigator(config: &RouterConfig) -> Result<Navigator> {
    config
        .build_navigator(&app::views())
        .context("Invalid route configuration")
}
