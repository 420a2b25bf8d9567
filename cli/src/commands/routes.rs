//! Route listing command

use super::build_navigator;
use crate::config::CliConfigLoader;
use crate::output::format_route_table;
use anyhow::Result;
use tracing::info;

/// Print the route table in match order
pub async fn routes_command(config_loader: CliConfigLoader) -> Result<()> {
    let loaded = config_loader.load().await?;
    info!("Listing routes from {}", loaded.source);

    let navigator = build_navigator(&loaded.config)?;
    println!("{}", format_route_table(navigator.routes(), navigator.history()));

    Ok(())
}
