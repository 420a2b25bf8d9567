//! Navigation replay command

use super::build_navigator;
use crate::config::CliConfigLoader;
use crate::output::{format_change, format_current, format_history};
use crate::steps::Step;
use anyhow::{anyhow, Context, Result};
use tablebook_core::router::RouteChange;
use tracing::debug;

/// Apply navigation steps in order and print where they lead.
///
/// Steps are all parsed before any is applied; the first rejected step
/// aborts the replay.
pub async fn navigate_command(config_loader: CliConfigLoader, steps: Vec<String>) -> Result<()> {
    let steps = steps
        .iter()
        .map(|raw| {
            raw.parse::<Step>()
                .map(|step| (raw.as_str(), step))
                .map_err(|e| anyhow!("Invalid step '{}': {}", raw, e))
        })
        .collect::<Result<Vec<_>>>()?;

    let loaded = config_loader.load().await?;
    let mut navigator = build_navigator(&loaded.config)?;

    navigator.subscribe(|change: &RouteChange| println!("{}", format_change(change)));
    navigator.install();

    for (raw, step) in steps {
        debug!("Applying step {:?}", step);
        step.apply(&mut navigator)
            .with_context(|| format!("Step '{}' failed", raw))?;
    }

    println!("{}", format_current(&navigator));
    println!("{}", format_history(navigator.history()));

    Ok(())
}
