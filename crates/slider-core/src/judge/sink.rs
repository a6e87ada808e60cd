//! Judgement sinks.
//!
//! The judge pushes every resolved result into exactly one sink, in
//! schedule order.

use std::sync::mpsc::Sender;

use crate::error::{Error, Result};
use crate::judge::JudgementResult;

/// Receiver of judgement results
pub trait JudgementSink {
    /// Accept the next result
    fn push(&mut self, result: JudgementResult) -> Result<()>;
}

impl JudgementSink for Vec<JudgementResult> {
    fn push(&mut self, result: JudgementResult) -> Result<()> {
        Vec::push(self, result);
        Ok(())
    }
}

impl JudgementSink for Sender<JudgementResult> {
    fn push(&mut self, result: JudgementResult) -> Result<()> {
        self.send(result).map_err(|_| Error::SinkClosed)
    }
}

impl<S: JudgementSink + ?Sized> JudgementSink for &mut S {
    fn push(&mut self, result: JudgementResult) -> Result<()> {
        (**self).push(result)
    }
}
