use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Position;
use crate::input::{ActionSet, OsuAction};

/// A single decoded replay frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Frame time in milliseconds
    pub time: f64,
    pub position: Position,
    /// Actions held during this frame
    #[serde(default)]
    pub actions: ActionSet,
}

impl InputFrame {
    pub fn new(time: f64, position: Position, actions: ActionSet) -> Self {
        Self {
            time,
            position,
            actions,
        }
    }

    /// Frame at `(x, y)` holding `actions`
    pub fn at(time: f64, x: f64, y: f64, actions: &[OsuAction]) -> Self {
        Self::new(
            time,
            Position::new(x, y),
            actions.iter().copied().collect(),
        )
    }

    /// Check the frame holds finite values
    pub fn validate(&self) -> Result<()> {
        if !self.time.is_finite() {
            return Err(Error::InvalidFrame(format!(
                "non-finite frame time {}",
                self.time
            )));
        }
        if !self.position.is_finite() {
            return Err(Error::InvalidFrame(format!(
                "non-finite position {} at {}ms",
                self.position, self.time
            )));
        }
        Ok(())
    }
}

/// Check that frames are finite and in non-decreasing time order
pub fn validate_frames(frames: &[InputFrame]) -> Result<()> {
    let mut previous: Option<f64> = None;
    for frame in frames {
        frame.validate()?;
        if let Some(previous) = previous
            && frame.time < previous
        {
            return Err(Error::FrameOutOfOrder {
                previous,
                time: frame.time,
            });
        }
        previous = Some(frame.time);
    }
    Ok(())
}
