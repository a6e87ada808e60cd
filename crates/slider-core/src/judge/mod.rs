//! Slider judgement.
//!
//! This module turns a frame stream into per-instant results:
//! - `SliderJudge` - frame-driven judge for one slider
//! - `TrackingState` - follow-circle tracking state machine
//! - `HitWindows` - head timing windows derived from overall difficulty
//! - `JudgementResult`, `HitResult` - resolved outcomes
//! - `JudgementSink` - destination for results

mod hit_windows;
mod result;
mod sink;
mod slider_judge;
mod tracking;

pub use hit_windows::*;
pub use result::*;
pub use sink::*;
pub use slider_judge::*;
pub use tracking::*;
