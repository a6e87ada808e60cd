use serde::{Deserialize, Serialize};

use super::geometry::{
    BASE_SCORING_DISTANCE, FOLLOW_AREA, MAX_SPEED_MULTIPLIER, MIN_SPEED_MULTIPLIER, OBJECT_RADIUS,
};

/// Beatmap difficulty settings relevant to slider judging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeatmapDifficulty {
    pub circle_size: f64,
    pub overall_difficulty: f64,
    pub slider_multiplier: f64,
    pub slider_tick_rate: f64,
}

impl Default for BeatmapDifficulty {
    fn default() -> Self {
        Self {
            circle_size: 5.0,
            overall_difficulty: 5.0,
            slider_multiplier: 1.4,
            slider_tick_rate: 1.0,
        }
    }
}

impl BeatmapDifficulty {
    /// Radius of a hit circle (and the slider ball) in osu! pixels
    pub fn object_radius(&self) -> f64 {
        let scale = (1.0 - 0.7 * (self.circle_size - 5.0) / 5.0) / 2.0;
        OBJECT_RADIUS * scale
    }

    /// Radius of the area around the slider ball in which the cursor tracks
    pub fn follow_radius(&self) -> f64 {
        self.object_radius() * FOLLOW_AREA
    }
}

/// Timing point in effect at a slider's start time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingPoint {
    /// Milliseconds per beat
    pub beat_length: f64,
    /// Slider velocity multiplier from the difficulty control point
    pub speed_multiplier: f64,
}

impl Default for TimingPoint {
    fn default() -> Self {
        Self {
            beat_length: 1000.0,
            speed_multiplier: 1.0,
        }
    }
}

impl TimingPoint {
    pub fn clamped_speed_multiplier(&self) -> f64 {
        self.speed_multiplier
            .clamp(MIN_SPEED_MULTIPLIER, MAX_SPEED_MULTIPLIER)
    }

    /// Distance travelled per beat
    pub fn scoring_distance(&self, difficulty: &BeatmapDifficulty) -> f64 {
        BASE_SCORING_DISTANCE * difficulty.slider_multiplier * self.clamped_speed_multiplier()
    }

    /// Slider velocity in pixels per millisecond
    pub fn velocity(&self, difficulty: &BeatmapDifficulty) -> f64 {
        self.scoring_distance(difficulty) / self.beat_length
    }

    /// Distance between slider ticks in pixels
    pub fn tick_distance(&self, difficulty: &BeatmapDifficulty) -> f64 {
        self.scoring_distance(difficulty) / difficulty.slider_tick_rate
    }
}
