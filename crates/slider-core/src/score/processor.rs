use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::error::Result;
use crate::judge::{HitResult, JudgementKind, JudgementResult, JudgementSink};

/// Count of each hit result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub great: u32,
    pub good: u32,
    pub meh: u32,
    pub miss: u32,
}

impl Statistics {
    pub fn get(&self, result: HitResult) -> u32 {
        match result {
            HitResult::Great => self.great,
            HitResult::Good => self.good,
            HitResult::Meh => self.meh,
            HitResult::Miss => self.miss,
        }
    }

    fn increment(&mut self, result: HitResult) {
        match result {
            HitResult::Great => self.great += 1,
            HitResult::Good => self.good += 1,
            HitResult::Meh => self.meh += 1,
            HitResult::Miss => self.miss += 1,
        }
    }

    pub fn total(&self) -> u32 {
        HitResult::iter().map(|r| self.get(r)).sum()
    }
}

/// Score value of a result for a judgement kind
pub fn score_value(kind: JudgementKind, result: HitResult) -> u32 {
    match (kind, result) {
        (_, HitResult::Miss) => 0,
        (JudgementKind::Tick, _) => 10,
        (JudgementKind::Repeat | JudgementKind::Tail, _) => 30,
        (JudgementKind::Head | JudgementKind::Slider, HitResult::Great) => 300,
        (JudgementKind::Head | JudgementKind::Slider, HitResult::Good) => 100,
        (JudgementKind::Head | JudgementKind::Slider, HitResult::Meh) => 50,
    }
}

/// Aggregates judgement results into counts, combo and accuracy
///
/// Nested results (head, ticks, repeats, tail) build or break combo; the
/// overall slider result only counts towards score and accuracy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreProcessor {
    statistics: Statistics,
    combo: u32,
    max_combo: u32,
    score: u64,
    max_score: u64,
    judged: usize,
    expected: usize,
}

impl ScoreProcessor {
    /// Processor expecting `expected` results in total
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, result: &JudgementResult) {
        self.statistics.increment(result.result);
        self.score += u64::from(score_value(result.kind, result.result));
        self.max_score += u64::from(score_value(result.kind, HitResult::Great));
        self.judged += 1;

        if result.kind.is_nested() {
            if result.is_hit() {
                self.combo += 1;
                self.max_combo = self.max_combo.max(self.combo);
            } else {
                if self.combo > 0 {
                    debug!("Combo of {} broken at {}ms", self.combo, result.time);
                }
                self.combo = 0;
            }
        }
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Accuracy in `0..=1`, 1 before anything is judged
    pub fn accuracy(&self) -> f64 {
        if self.max_score == 0 {
            1.0
        } else {
            self.score as f64 / self.max_score as f64
        }
    }

    pub fn judged_count(&self) -> usize {
        self.judged
    }

    pub fn expected_count(&self) -> usize {
        self.expected
    }

    /// Whether every expected result has arrived
    pub fn all_judged(&self) -> bool {
        self.judged >= self.expected
    }
}

impl JudgementSink for ScoreProcessor {
    fn push(&mut self, result: JudgementResult) -> Result<()> {
        self.apply(&result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::JudgementInstant;

    fn result(kind: JudgementKind, result: HitResult) -> JudgementResult {
        JudgementResult::new(&JudgementInstant::new(kind, 0.0, 0), result)
    }

    #[test]
    fn test_score_values() {
        assert_eq!(score_value(JudgementKind::Head, HitResult::Great), 300);
        assert_eq!(score_value(JudgementKind::Slider, HitResult::Meh), 50);
        assert_eq!(score_value(JudgementKind::Tick, HitResult::Great), 10);
        assert_eq!(score_value(JudgementKind::Tail, HitResult::Great), 30);
        assert_eq!(score_value(JudgementKind::Repeat, HitResult::Miss), 0);
    }

    #[test]
    fn test_combo_and_break() {
        let mut processor = ScoreProcessor::new(5);
        processor.apply(&result(JudgementKind::Head, HitResult::Great));
        processor.apply(&result(JudgementKind::Tick, HitResult::Great));
        processor.apply(&result(JudgementKind::Tick, HitResult::Miss));
        processor.apply(&result(JudgementKind::Tail, HitResult::Great));

        assert_eq!(processor.combo(), 1);
        assert_eq!(processor.max_combo(), 2);
        assert!(!processor.all_judged());

        // The overall result does not touch combo
        processor.apply(&result(JudgementKind::Slider, HitResult::Meh));
        assert_eq!(processor.combo(), 1);
        assert!(processor.all_judged());
    }

    #[test]
    fn test_statistics_and_accuracy() {
        let mut processor = ScoreProcessor::new(3);
        processor.apply(&result(JudgementKind::Head, HitResult::Good));
        processor.apply(&result(JudgementKind::Tail, HitResult::Miss));
        processor.apply(&result(JudgementKind::Slider, HitResult::Meh));

        let stats = processor.statistics();
        assert_eq!(stats.good, 1);
        assert_eq!(stats.miss, 1);
        assert_eq!(stats.meh, 1);
        assert_eq!(stats.total(), 3);
        assert_eq!(processor.score(), 150);
        assert_eq!(processor.accuracy(), 150.0 / 630.0);
    }

    #[test]
    fn test_empty_accuracy() {
        let processor = ScoreProcessor::new(0);
        assert_eq!(processor.accuracy(), 1.0);
        assert!(processor.all_judged());
    }

    #[test]
    fn test_processor_as_sink() {
        let mut processor = ScoreProcessor::new(1);
        processor
            .push(result(JudgementKind::Head, HitResult::Great))
            .unwrap();
        assert_eq!(processor.score(), 300);
    }
}
