pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod judge;
pub mod scenario;
pub mod score;

pub use config::{BeatmapDifficulty, TimingPoint};
pub use error::{Error, Result};
pub use geometry::{PathDefinition, PathType, Position, Slider, SliderDefinition, SliderGeometry};
pub use input::{ActionSet, InputFrame, OsuAction};
pub use judge::{
    HitResult, HitWindows, JudgementInstant, JudgementKind, JudgementResult, JudgementSink,
    SliderJudge, TrackingState, judge_slider, judge_sliders,
};
pub use scenario::Scenario;
pub use score::{ScoreProcessor, Statistics};
