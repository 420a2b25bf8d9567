//! Path resolution command

use super::build_navigator;
use crate::config::CliConfigLoader;
use crate::output::format_resolution;
use anyhow::Result;

/// Resolve a path without navigating.
///
/// A path that matches no route is reported, not treated as a failure.
pub async fn resolve_command(config_loader: CliConfigLoader, path: String) -> Result<()> {
    let loaded = config_loader.load().await?;
    let navigator = build_navigator(&loaded.config)?;

    println!("{}", format_resolution(&navigator.resolve(&path)));

    Ok(())
}
