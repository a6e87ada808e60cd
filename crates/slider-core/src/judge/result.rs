use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

/// Hit quality, ordered from worst to best
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumIter,
    IntoStaticStr,
)]
pub enum HitResult {
    #[default]
    Miss,
    Meh,
    Good,
    Great,
}

impl HitResult {
    pub fn is_hit(&self) -> bool {
        *self != HitResult::Miss
    }

    /// Result for an instant judged only on whether the cursor was tracking
    pub fn from_tracking(tracking: bool) -> Self {
        if tracking {
            HitResult::Great
        } else {
            HitResult::Miss
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for HitResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.short_name())
    }
}

/// What a scheduled judgement instant belongs to
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
pub enum JudgementKind {
    Head,
    Tick,
    Repeat,
    Tail,
    /// The slider as a whole, judged after the tail
    Slider,
}

impl JudgementKind {
    /// Whether this instant counts towards the slider's hit fraction
    pub fn is_nested(&self) -> bool {
        !matches!(self, JudgementKind::Slider)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for JudgementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.short_name())
    }
}

/// A point in time at which a slider part is judged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JudgementInstant {
    pub kind: JudgementKind,
    /// Time in milliseconds
    pub time: f64,
    /// Position in the slider's schedule
    pub index: usize,
}

impl JudgementInstant {
    pub fn new(kind: JudgementKind, time: f64, index: usize) -> Self {
        Self { kind, time, index }
    }
}

/// Outcome of one judgement instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JudgementResult {
    pub kind: JudgementKind,
    pub time: f64,
    pub result: HitResult,
    /// Press time minus start time for a hit head
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_offset: Option<f64>,
}

impl JudgementResult {
    pub fn new(instant: &JudgementInstant, result: HitResult) -> Self {
        Self {
            kind: instant.kind,
            time: instant.time,
            result,
            time_offset: None,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.time_offset = Some(offset);
        self
    }

    pub fn is_hit(&self) -> bool {
        self.result.is_hit()
    }
}

impl std::fmt::Display for JudgementResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>8.1}ms {:<6} {}", self.time, self.kind, self.result)?;
        if let Some(offset) = self.time_offset {
            write!(f, " ({:+.1}ms)", offset)?;
        }
        Ok(())
    }
}
