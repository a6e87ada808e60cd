//! Player input types.
//!
//! This module contains the decoded form of replay input:
//! - `OsuAction` - input actions (left/right button)
//! - `ActionSet` - the set of actions held at one instant
//! - `InputFrame` - a timestamped cursor position with its held actions

mod action;
mod frame;

pub use action::*;
pub use frame::*;
