use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Frame out of order: frame at {time}ms follows frame at {previous}ms")]
    FrameOutOfOrder { previous: f64, time: f64 },

    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    #[error("Invalid slider: {0}")]
    InvalidSlider(String),

    #[error("Invalid judgement schedule: {0}")]
    InvalidSchedule(String),

    #[error("Judge no longer accepts input")]
    JudgeFinished,

    #[error("Judgement sink closed")]
    SinkClosed,

    #[error("Scenario parse error: {0}")]
    ScenarioParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
