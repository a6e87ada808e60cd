use serde::{Deserialize, Serialize};

use crate::config::hit_windows::*;
use crate::judge::HitResult;

/// Timing windows for a head press, in milliseconds either side of the start time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitWindows {
    pub great: f64,
    pub good: f64,
    pub meh: f64,
}

impl HitWindows {
    pub fn from_overall_difficulty(od: f64) -> Self {
        Self {
            great: GREAT_BASE - GREAT_PER_OD * od,
            good: GOOD_BASE - GOOD_PER_OD * od,
            meh: MEH_BASE - MEH_PER_OD * od,
        }
    }

    /// Grade a press `offset` ms away from the start time.
    ///
    /// Returns `None` when the press falls outside every window.
    pub fn result_for(&self, offset: f64) -> Option<HitResult> {
        let offset = offset.abs();
        if offset <= self.great {
            Some(HitResult::Great)
        } else if offset <= self.good {
            Some(HitResult::Good)
        } else if offset <= self.meh {
            Some(HitResult::Meh)
        } else {
            None
        }
    }
}

impl Default for HitWindows {
    fn default() -> Self {
        Self::from_overall_difficulty(5.0)
    }
}
