//! Schedule command implementation.

use std::path::Path;

use anyhow::Result;
use slider_core::SliderGeometry;

use super::load_scenario;
use crate::config::CliConfig;
use crate::output::format_instant;

/// Run the schedule command
pub fn run(path: &Path, config: &CliConfig, json: bool) -> Result<()> {
    let json = json || config.output.json;

    let scenario = load_scenario(path, config)?;
    let slider = scenario.build_slider()?;
    let instants = slider.scheduled_instants();

    if json {
        println!("{}", serde_json::to_string_pretty(&instants)?);
        return Ok(());
    }

    println!(
        "Slider {}ms - {}ms ({} span(s) of {:.1}ms, follow radius {:.1})",
        slider.start_time(),
        slider.end_time(),
        slider.span_count(),
        slider.span_duration(),
        slider.follow_radius()
    );
    for instant in &instants {
        println!("{}", format_instant(instant));
    }

    Ok(())
}
