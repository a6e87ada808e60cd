//! Gameplay configuration.
//!
//! This module contains the beatmap-level settings sliders are built from:
//! - `BeatmapDifficulty` - circle size, overall difficulty, slider multiplier and tick rate
//! - `TimingPoint` - beat length and speed multiplier in effect at a slider
//! - Geometry and hit window constants

mod difficulty;

pub use difficulty::*;

/// Slider geometry constants.
pub mod geometry {
    /// Distance (in osu! pixels) a slider travels per beat at a slider multiplier of 1.
    pub const BASE_SCORING_DISTANCE: f64 = 100.0;

    /// Radius of a hit circle at circle size 0 before scaling.
    pub const OBJECT_RADIUS: f64 = 64.0;

    /// Scale of the follow area around the slider ball.
    pub const FOLLOW_AREA: f64 = 2.4;

    /// Ticks closer than this many milliseconds of travel to a span end are dropped.
    pub const TICK_END_MARGIN_MS: f64 = 10.0;

    /// Speed multiplier bounds applied to timing points.
    pub const MIN_SPEED_MULTIPLIER: f64 = 0.1;
    pub const MAX_SPEED_MULTIPLIER: f64 = 10.0;

    /// Path length beyond which no further ticks are generated.
    pub const MAX_TICK_PATH_LENGTH: f64 = 100_000.0;

    /// Sliders scheduling more judgement instants than this are rejected.
    pub const MAX_SCHEDULED_INSTANTS: usize = 100_000;
}

/// Hit window coefficients.
///
/// Each window is `base - per_od * overall_difficulty` milliseconds either side
/// of the object's start time.
pub mod hit_windows {
    pub const GREAT_BASE: f64 = 80.0;
    pub const GREAT_PER_OD: f64 = 6.0;

    pub const GOOD_BASE: f64 = 140.0;
    pub const GOOD_PER_OD: f64 = 8.0;

    pub const MEH_BASE: f64 = 200.0;
    pub const MEH_PER_OD: f64 = 10.0;
}
