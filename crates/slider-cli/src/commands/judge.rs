//! Judge command implementation.

use std::path::Path;

use anyhow::Result;
use slider_core::{ScoreProcessor, SliderGeometry, SliderJudge};
use tracing::info;

use super::load_scenario;
use crate::config::CliConfig;
use crate::output::{JudgeReport, format_result, format_summary};

/// Run the judge command
pub fn run(path: &Path, config: &CliConfig, json: bool, no_color: bool) -> Result<()> {
    let json = json || config.output.json;
    let color = config.output.color && !no_color;

    let scenario = load_scenario(path, config)?;
    let slider = scenario.build_slider()?;
    let expected = slider.scheduled_instants().len();
    let frames = scenario.frames();
    info!(
        "Judging slider at {}ms against {} frames",
        slider.start_time(),
        frames.len()
    );

    let mut judge = SliderJudge::new(slider, scenario.hit_windows())?;
    let mut results = Vec::with_capacity(expected);
    judge.run(&frames, &mut results)?;

    let mut processor = ScoreProcessor::new(expected);
    for result in &results {
        processor.apply(result);
    }

    if json {
        let report = JudgeReport::new(&results, &processor);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for result in &results {
            println!("{}", format_result(result, color));
        }
        println!("{}", format_summary(&processor, color));
    }

    Ok(())
}
