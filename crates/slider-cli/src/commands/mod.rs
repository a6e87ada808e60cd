//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod judge;
pub mod schedule;
pub mod trace;

use std::path::Path;

use anyhow::{Context, Result};
use slider_core::Scenario;

use crate::config::CliConfig;

/// Load a scenario and apply the config's difficulty overrides
pub fn load_scenario(path: &Path, config: &CliConfig) -> Result<Scenario> {
    let mut scenario = Scenario::load(path)
        .with_context(|| format!("Failed to load scenario {}", path.display()))?;
    config.difficulty.apply(&mut scenario.difficulty);
    Ok(scenario)
}
