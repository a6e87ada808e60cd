//! Scenario files.
//!
//! A scenario bundles one slider, the beatmap settings it is played under and
//! the frames played against it. Used by the CLI and the integration tests.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{BeatmapDifficulty, TimingPoint};
use crate::error::{Error, Result};
use crate::geometry::{Slider, SliderDefinition};
use crate::input::{ActionSet, InputFrame, validate_frames};
use crate::judge::HitWindows;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub difficulty: BeatmapDifficulty,
    #[serde(default)]
    pub timing: TimingPoint,
    pub slider: SliderDefinition,
    #[serde(default)]
    pub frames: Vec<InputFrame>,
    /// Insert an idle frame at time 0 on the slider head
    #[serde(default)]
    pub lead_in_frame: bool,
}

impl Scenario {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(json)?;
        validate_frames(&scenario.frames)
            .map_err(|e| Error::ScenarioParseError(e.to_string()))?;
        Ok(scenario)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let scenario = Self::from_json_str(&content)?;
        debug!(
            "Loaded scenario {} with {} frames",
            path.display(),
            scenario.frames.len()
        );
        Ok(scenario)
    }

    pub fn build_slider(&self) -> Result<Slider> {
        Slider::new(&self.slider, &self.difficulty, &self.timing)
    }

    pub fn hit_windows(&self) -> HitWindows {
        HitWindows::from_overall_difficulty(self.difficulty.overall_difficulty)
    }

    /// Frames to feed the judge, including the lead-in frame if requested
    pub fn frames(&self) -> Vec<InputFrame> {
        let mut frames = Vec::with_capacity(self.frames.len() + 1);
        if self.lead_in_frame {
            frames.push(InputFrame::new(
                0.0,
                self.slider.position,
                ActionSet::empty(),
            ));
        }
        frames.extend_from_slice(&self.frames);
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::OsuAction;

    const SCENARIO: &str = r#"{
        "difficulty": { "circle_size": 5, "overall_difficulty": 5, "slider_multiplier": 1, "slider_tick_rate": 4 },
        "timing": { "beat_length": 4096, "speed_multiplier": 0.25 },
        "slider": {
            "start_time": 1500,
            "position": [0, 0],
            "path": { "control_points": [[0, 0], [25, 0]], "expected_distance": 25 }
        },
        "frames": [
            { "time": 1500, "position": [0, 0], "actions": ["LeftButton"] },
            { "time": 2500, "position": [0, 0], "actions": ["LeftButton", "RightButton"] }
        ],
        "lead_in_frame": true
    }"#;

    #[test]
    fn test_parse_scenario() {
        let scenario = Scenario::from_json_str(SCENARIO).unwrap();
        assert_eq!(scenario.slider.start_time, 1500.0);
        assert_eq!(scenario.slider.repeat_count, 0);
        assert_eq!(scenario.frames.len(), 2);
        assert!(scenario.frames[1].actions.contains(OsuAction::RightButton));
        assert_eq!(scenario.hit_windows().meh, 150.0);

        let slider = scenario.build_slider().unwrap();
        assert_eq!(slider.span_duration(), 4096.0);
    }

    #[test]
    fn test_lead_in_frame() {
        let scenario = Scenario::from_json_str(SCENARIO).unwrap();
        let frames = scenario.frames();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].time, 0.0);
        assert!(frames[0].actions.is_empty());
    }

    #[test]
    fn test_rejects_unordered_frames() {
        let json = SCENARIO.replace("\"time\": 2500", "\"time\": 1000");
        assert!(matches!(
            Scenario::from_json_str(&json),
            Err(Error::ScenarioParseError(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Scenario::from_json_str("{ \"frames\": "),
            Err(Error::Json(_))
        ));
    }
}
