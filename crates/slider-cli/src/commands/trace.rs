//! Trace command implementation.

use std::path::Path;

use anyhow::{Result, bail};
use slider_core::{JudgementResult, SliderJudge};

use super::load_scenario;
use crate::config::CliConfig;
use crate::output::{format_result, format_trace_line};

/// Run the trace command
pub fn run(path: &Path, config: &CliConfig, no_color: bool) -> Result<()> {
    let color = config.output.color && !no_color;

    let scenario = load_scenario(path, config)?;
    let slider = scenario.build_slider()?;
    let mut judge = SliderJudge::new(slider, scenario.hit_windows())?;

    let mut resolved: Vec<JudgementResult> = Vec::new();
    for frame in scenario.frames() {
        judge.process_frame(&frame, &mut resolved)?;
        println!("{}", format_trace_line(&frame, judge.tracking_state()));
        for result in resolved.drain(..) {
            println!("    -> {}", format_result(&result, color));
        }
    }

    judge.finish(&mut resolved)?;
    println!("finish");
    for result in resolved.drain(..) {
        println!("    -> {}", format_result(&result, color));
    }

    if !judge.is_complete() {
        bail!("Judge finished with unresolved instants");
    }
    Ok(())
}
