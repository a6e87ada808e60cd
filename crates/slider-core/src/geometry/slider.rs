use serde::{Deserialize, Serialize};

use crate::config::geometry::{
    MAX_SCHEDULED_INSTANTS, MAX_TICK_PATH_LENGTH, TICK_END_MARGIN_MS,
};
use crate::config::{BeatmapDifficulty, TimingPoint};
use crate::error::{Error, Result};
use crate::geometry::{PathDefinition, Position, SliderGeometry, SliderPath};
use crate::judge::{JudgementInstant, JudgementKind};

/// Slider as written in a beatmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderDefinition {
    pub start_time: f64,
    /// Head position
    #[serde(default)]
    pub position: Position,
    pub path: PathDefinition,
    /// Number of times the slider reverses
    #[serde(default)]
    pub repeat_count: u32,
}

/// osu! slider with its derived timing
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    start_time: f64,
    position: Position,
    path: SliderPath,
    repeat_count: u32,
    velocity: f64,
    tick_distance: f64,
    object_radius: f64,
    follow_radius: f64,
}

impl Slider {
    pub fn new(
        definition: &SliderDefinition,
        difficulty: &BeatmapDifficulty,
        timing: &TimingPoint,
    ) -> Result<Self> {
        if !definition.start_time.is_finite() {
            return Err(Error::InvalidSlider(format!(
                "start time is not finite: {}",
                definition.start_time
            )));
        }
        if !definition.position.is_finite() {
            return Err(Error::InvalidSlider(
                "head position is not finite".to_string(),
            ));
        }
        if !(timing.beat_length.is_finite() && timing.beat_length > 0.0) {
            return Err(Error::InvalidSlider(format!(
                "beat length must be positive, got {}",
                timing.beat_length
            )));
        }

        let velocity = timing.velocity(difficulty);
        if !(velocity.is_finite() && velocity > 0.0) {
            return Err(Error::InvalidSlider(format!(
                "velocity must be positive, got {}",
                velocity
            )));
        }

        let tick_distance = timing.tick_distance(difficulty);
        if !(tick_distance.is_finite() && tick_distance > 0.0) {
            return Err(Error::InvalidSlider(format!(
                "tick rate must be positive, got {}",
                difficulty.slider_tick_rate
            )));
        }

        let follow_radius = difficulty.follow_radius();
        if !(follow_radius.is_finite() && follow_radius > 0.0) {
            return Err(Error::InvalidSlider(format!(
                "circle size {} leaves no follow area",
                difficulty.circle_size
            )));
        }

        let path = SliderPath::new(&definition.path)?;
        let ticks_per_span = (path.distance().min(MAX_TICK_PATH_LENGTH) / tick_distance).floor();
        let span_count = f64::from(definition.repeat_count) + 1.0;
        let instant_count = span_count * (ticks_per_span + 1.0) + 2.0;
        if instant_count > MAX_SCHEDULED_INSTANTS as f64 {
            return Err(Error::InvalidSlider(format!(
                "slider would schedule about {:.0} judgements, limit is {}",
                instant_count, MAX_SCHEDULED_INSTANTS
            )));
        }

        Ok(Self {
            start_time: definition.start_time,
            position: definition.position,
            path,
            repeat_count: definition.repeat_count,
            velocity,
            tick_distance,
            object_radius: difficulty.object_radius(),
            follow_radius,
        })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn path(&self) -> &SliderPath {
        &self.path
    }

    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    pub fn span_count(&self) -> u32 {
        self.repeat_count + 1
    }

    /// Pixels per millisecond
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn tick_distance(&self) -> f64 {
        self.tick_distance
    }

    pub fn object_radius(&self) -> f64 {
        self.object_radius
    }

    pub fn follow_radius(&self) -> f64 {
        self.follow_radius
    }

    pub fn span_duration(&self) -> f64 {
        self.path.distance() / self.velocity
    }

    pub fn duration(&self) -> f64 {
        self.span_duration() * self.span_count() as f64
    }

    /// Progress along the path in `0..=1`, reversing on odd spans
    pub fn progress_at(&self, time: f64) -> f64 {
        let span_duration = self.span_duration();
        let elapsed = (time - self.start_time).clamp(0.0, self.duration());

        let span = ((elapsed / span_duration).floor() as u32).min(self.span_count() - 1);
        let within = ((elapsed - span as f64 * span_duration) / span_duration).clamp(0.0, 1.0);

        if span % 2 == 1 { 1.0 - within } else { within }
    }

    /// Slider ball position at `time`
    pub fn ball_position(&self, time: f64) -> Position {
        self.position + self.path.position_at(self.progress_at(time))
    }

    /// Tick offsets from the span start, in time order
    fn span_tick_offsets(&self, reversed: bool) -> Vec<f64> {
        let length = self.path.distance();
        let tick_length = length.min(MAX_TICK_PATH_LENGTH);
        let min_distance_from_end = self.velocity * TICK_END_MARGIN_MS;

        let mut offsets = Vec::new();
        let mut d = self.tick_distance;
        while d < tick_length - min_distance_from_end {
            let travelled = if reversed { length - d } else { d };
            offsets.push(travelled / self.velocity);
            d += self.tick_distance;
        }

        if reversed {
            offsets.reverse();
        }
        offsets
    }
}

impl SliderGeometry for Slider {
    fn start_time(&self) -> f64 {
        self.start_time
    }

    fn end_time(&self) -> f64 {
        self.start_time + self.duration()
    }

    fn is_inside(&self, point: Position, time: f64) -> bool {
        self.ball_position(time).distance(point) <= self.follow_radius
    }

    fn hits_head(&self, point: Position) -> bool {
        self.position.distance(point) <= self.object_radius
    }

    fn scheduled_instants(&self) -> Vec<JudgementInstant> {
        let span_duration = self.span_duration();
        let end_time = self.end_time();

        let mut timeline = vec![(JudgementKind::Head, self.start_time)];
        for span in 0..self.span_count() {
            let span_start = self.start_time + span as f64 * span_duration;
            for offset in self.span_tick_offsets(span % 2 == 1) {
                timeline.push((JudgementKind::Tick, span_start + offset));
            }
            if span + 1 < self.span_count() {
                timeline.push((JudgementKind::Repeat, span_start + span_duration));
            }
        }
        timeline.push((JudgementKind::Tail, end_time));
        timeline.push((JudgementKind::Slider, end_time));

        timeline
            .into_iter()
            .enumerate()
            .map(|(index, (kind, time))| JudgementInstant::new(kind, time, index))
            .collect()
    }
}
