//! Slider geometry.
//!
//! This module provides the hit-testing and scheduling contract the judge
//! relies on, plus the osu! slider that implements it:
//! - `SliderGeometry` - body hit test and judgement schedule
//! - `Slider` - a slider built from a path, difficulty and timing point
//! - `SliderPath` - flattened linear and perfect-curve paths
//! - `Position` - playfield coordinates

mod path;
mod position;
mod slider;

pub use path::*;
pub use position::*;
pub use slider::*;

use crate::judge::JudgementInstant;

/// Hit-testing and scheduling for one slider.
///
/// Implementations must be deterministic and free of side effects.
pub trait SliderGeometry {
    /// Time the slider becomes active
    fn start_time(&self) -> f64;

    /// Time of the tail
    fn end_time(&self) -> f64;

    /// Whether `point` is inside the slider's tracking region at `time`
    fn is_inside(&self, point: Position, time: f64) -> bool;

    /// Whether a press at `point` lands on the head
    fn hits_head(&self, point: Position) -> bool {
        self.is_inside(point, self.start_time())
    }

    /// Judgement instants in time order, starting with the head
    fn scheduled_instants(&self) -> Vec<JudgementInstant>;
}
