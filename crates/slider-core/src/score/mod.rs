//! Score aggregation.
//!
//! - `ScoreProcessor` - a judgement sink that tallies counts, combo and accuracy
//! - `Statistics` - per-result counts

mod processor;

pub use processor::*;
