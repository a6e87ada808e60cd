//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use serde::Serialize;
use slider_core::{
    HitResult, InputFrame, JudgementInstant, JudgementResult, ScoreProcessor, Statistics,
    TrackingState,
};

/// Everything `judge --json` prints
#[derive(Debug, Serialize)]
pub struct JudgeReport<'a> {
    pub results: &'a [JudgementResult],
    pub statistics: Statistics,
    pub max_combo: u32,
    pub score: u64,
    pub accuracy: f64,
    pub all_judged: bool,
}

impl<'a> JudgeReport<'a> {
    pub fn new(results: &'a [JudgementResult], processor: &ScoreProcessor) -> Self {
        Self {
            results,
            statistics: processor.statistics(),
            max_combo: processor.max_combo(),
            score: processor.score(),
            accuracy: processor.accuracy(),
            all_judged: processor.all_judged(),
        }
    }
}

/// Format hit result with color
pub fn format_colored_result(result: HitResult, color: bool) -> String {
    let name = result.short_name();
    if !color {
        return name.to_string();
    }
    match result {
        HitResult::Great => name.cyan().to_string(),
        HitResult::Good => name.green().to_string(),
        HitResult::Meh => name.yellow().to_string(),
        HitResult::Miss => name.red().to_string(),
    }
}

/// One line per result: time, kind, result and head offset
pub fn format_result(result: &JudgementResult, color: bool) -> String {
    let mut line = format!(
        "{:>8.1}ms {:<6} {}",
        result.time,
        result.kind,
        format_colored_result(result.result, color)
    );
    if let Some(offset) = result.time_offset {
        let _ = write!(line, " ({:+.1}ms)", offset);
    }
    line
}

/// Boxed score summary
pub fn format_summary(processor: &ScoreProcessor, color: bool) -> String {
    let mut output = String::new();
    let border = "━".repeat(40);
    let border = if color {
        border.dimmed().to_string()
    } else {
        border
    };

    let stats = processor.statistics();
    let counts = [
        HitResult::Great,
        HitResult::Good,
        HitResult::Meh,
        HitResult::Miss,
    ]
    .map(|r| {
        let count = stats.get(r).to_string();
        if color {
            match r {
                HitResult::Great => count.cyan().to_string(),
                HitResult::Good => count.green().to_string(),
                HitResult::Meh => count.yellow().to_string(),
                HitResult::Miss => count.red().to_string(),
            }
        } else {
            count
        }
    });

    let judged = if processor.all_judged() {
        "all judged".to_string()
    } else {
        let pending = "incomplete";
        if color {
            pending.red().to_string()
        } else {
            pending.to_string()
        }
    };

    let _ = writeln!(output, "{}", border);
    let _ = writeln!(output, "  JUDGE  : {}", counts.join("/"));
    let _ = writeln!(output, "  COMBO  : {}x", processor.max_combo());
    let _ = writeln!(output, "  SCORE  : {}", processor.score());
    let _ = writeln!(output, "  ACC    : {:.2}%", processor.accuracy() * 100.0);
    let _ = writeln!(
        output,
        "  JUDGED : {}/{} ({})",
        processor.judged_count(),
        processor.expected_count(),
        judged
    );
    let _ = write!(output, "{}", border);

    output
}

pub fn format_instant(instant: &JudgementInstant) -> String {
    format!("{:>3} {:>8.1}ms {}", instant.index, instant.time, instant.kind)
}

/// Frame followed by the tracking state it left behind
pub fn format_trace_line(frame: &InputFrame, state: &TrackingState) -> String {
    let head = state
        .head_action()
        .map(|a| a.short_name())
        .unwrap_or("-");
    format!(
        "{:>8.1}ms {:<16} {:<3} tracking={:<5} head={} any={}",
        frame.time,
        frame.position.to_string(),
        frame.actions.to_string(),
        state.is_tracking(),
        head,
        state.accepts_any_action()
    )
}
