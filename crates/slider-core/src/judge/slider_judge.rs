use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::geometry::{Position, SliderGeometry};
use crate::input::{ActionSet, InputFrame, OsuAction};
use crate::judge::{
    HitResult, HitWindows, JudgementInstant, JudgementKind, JudgementResult, JudgementSink,
    TrackingSample, TrackingState,
};

/// Input carried over from the last processed frame
#[derive(Debug, Clone, Copy)]
struct LastInput {
    time: f64,
    position: Position,
    held: ActionSet,
}

/// Judges one slider from a time-ordered frame stream.
///
/// Each frame is applied in three steps: instants strictly before the frame
/// are resolved with the previous input, then the frame is applied (head
/// press, tracking update), then instants at exactly the frame's time are
/// resolved. Results reach the sink in schedule order; an unresolved head
/// holds back everything after it.
pub struct SliderJudge<G: SliderGeometry> {
    geometry: G,
    hit_windows: HitWindows,
    instants: Vec<JudgementInstant>,
    outcomes: Vec<Option<JudgementResult>>,
    /// Next instant to evaluate
    next_due: usize,
    /// Next instant to hand to the sink
    next_emit: usize,
    tracking: TrackingState,
    last_input: Option<LastInput>,
    finished: bool,
}

impl<G: SliderGeometry> SliderJudge<G> {
    /// Create a judge, rejecting a schedule the geometry cannot honour
    pub fn new(geometry: G, hit_windows: HitWindows) -> Result<Self> {
        let instants = validate_schedule(&geometry)?;
        let outcomes = vec![None; instants.len()];

        Ok(Self {
            geometry,
            hit_windows,
            instants,
            outcomes,
            next_due: 0,
            next_emit: 0,
            tracking: TrackingState::new(),
            last_input: None,
            finished: false,
        })
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn instants(&self) -> &[JudgementInstant] {
        &self.instants
    }

    pub fn tracking_state(&self) -> &TrackingState {
        &self.tracking
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.is_tracking()
    }

    /// Head result once the head has been hit or missed
    pub fn head_result(&self) -> Option<&JudgementResult> {
        self.outcomes[0].as_ref()
    }

    /// Whether every instant has been handed to the sink
    pub fn is_complete(&self) -> bool {
        self.next_emit == self.instants.len()
    }

    /// Number of results handed to the sink so far
    pub fn emitted_count(&self) -> usize {
        self.next_emit
    }

    /// Apply one frame and push every result it resolves
    pub fn process_frame<S: JudgementSink>(
        &mut self,
        frame: &InputFrame,
        sink: &mut S,
    ) -> Result<()> {
        if self.finished {
            return Err(Error::JudgeFinished);
        }
        if let Err(e) = self.check_frame(frame) {
            warn!("Rejected frame at {}ms: {}", frame.time, e);
            self.finished = true;
            return Err(e);
        }

        self.advance(frame.time, false, sink)?;
        self.apply_frame(frame);
        self.advance(frame.time, true, sink)
    }

    /// Resolve everything left using the last frame's input
    pub fn finish<S: JudgementSink>(&mut self, sink: &mut S) -> Result<()> {
        if self.finished {
            return Err(Error::JudgeFinished);
        }
        self.advance(f64::INFINITY, true, sink)?;
        self.finished = true;

        debug_assert!(self.is_complete());
        Ok(())
    }

    /// Process every frame in order and finish
    pub fn run<'a, I, S>(&mut self, frames: I, sink: &mut S) -> Result<()>
    where
        I: IntoIterator<Item = &'a InputFrame>,
        S: JudgementSink,
    {
        for frame in frames {
            self.process_frame(frame, sink)?;
        }
        self.finish(sink)
    }

    fn check_frame(&self, frame: &InputFrame) -> Result<()> {
        frame.validate()?;
        if let Some(last) = self.last_input
            && frame.time < last.time
        {
            return Err(Error::FrameOutOfOrder {
                previous: last.time,
                time: frame.time,
            });
        }
        Ok(())
    }

    fn apply_frame(&mut self, frame: &InputFrame) {
        let previously_held = self.last_input.map(|i| i.held).unwrap_or_default();
        let presses = frame.actions.difference(previously_held);

        if self.outcomes[0].is_none()
            && let Some(action) = presses.first()
        {
            self.try_hit_head(frame, action);
        }

        self.last_input = Some(LastInput {
            time: frame.time,
            position: frame.position,
            held: frame.actions,
        });

        let sample = TrackingSample::new(frame.time, frame.position, frame.actions);
        self.tracking.update(&self.geometry, &sample);
    }

    fn try_hit_head(&mut self, frame: &InputFrame, action: OsuAction) {
        let offset = frame.time - self.geometry.start_time();
        let Some(result) = self.hit_windows.result_for(offset) else {
            trace!("Press of {} at {}ms outside the head window", action, frame.time);
            return;
        };
        if !self.geometry.hits_head(frame.position) {
            trace!("Press of {} at {} missed the head", action, frame.position);
            return;
        }

        debug!(
            "Head hit with {} at {}ms ({:+}ms): {}",
            action, frame.time, offset, result
        );
        self.outcomes[0] =
            Some(JudgementResult::new(&self.instants[0], result).with_offset(offset));
        self.tracking.set_head_action(action);
    }

    /// Resolve instants up to `until` and push whatever is ready
    fn advance<S: JudgementSink>(
        &mut self,
        until: f64,
        inclusive: bool,
        sink: &mut S,
    ) -> Result<()> {
        let reached = |time: f64| if inclusive { time <= until } else { time < until };

        let head_deadline = self.geometry.start_time() + self.hit_windows.meh;
        if self.outcomes[0].is_none() && reached(head_deadline) {
            debug!("Head window closed at {}ms without a hit", head_deadline);
            self.outcomes[0] = Some(JudgementResult::new(&self.instants[0], HitResult::Miss));
        }

        while let Some(instant) = self.instants.get(self.next_due).copied() {
            if !reached(instant.time) {
                break;
            }

            match instant.kind {
                JudgementKind::Head => {}
                JudgementKind::Slider => {
                    if self.outcomes[0].is_none() {
                        break;
                    }
                    let result = self.slider_result(instant.index);
                    self.outcomes[instant.index] = Some(JudgementResult::new(&instant, result));
                }
                JudgementKind::Tick | JudgementKind::Repeat | JudgementKind::Tail => {
                    let tracking = self.sample_at(instant.time);
                    trace!(
                        "{} at {}ms: tracking={}",
                        instant.kind, instant.time, tracking
                    );
                    self.outcomes[instant.index] = Some(JudgementResult::new(
                        &instant,
                        HitResult::from_tracking(tracking),
                    ));
                }
            }
            self.next_due += 1;
        }

        self.emit_ready(sink)
    }

    /// Re-sample tracking at `time` with the last known input
    fn sample_at(&mut self, time: f64) -> bool {
        match self.last_input {
            Some(input) => {
                let sample = TrackingSample::new(time, input.position, input.held);
                self.tracking.update(&self.geometry, &sample)
            }
            None => false,
        }
    }

    /// Overall slider result from the nested results before `index`
    fn slider_result(&self, index: usize) -> HitResult {
        let nested: Vec<&JudgementResult> = self.outcomes[..index]
            .iter()
            .flatten()
            .filter(|r| r.kind.is_nested())
            .collect();
        if nested.is_empty() {
            return HitResult::Miss;
        }

        let hits = nested.iter().filter(|r| r.is_hit()).count();
        let fraction = hits as f64 / nested.len() as f64;
        let head = self.outcomes[0].map(|r| r.result).unwrap_or_default();

        if fraction == 1.0 && head == HitResult::Great {
            HitResult::Great
        } else if fraction >= 0.5 && head >= HitResult::Good {
            HitResult::Good
        } else if fraction > 0.0 {
            HitResult::Meh
        } else {
            HitResult::Miss
        }
    }

    fn emit_ready<S: JudgementSink>(&mut self, sink: &mut S) -> Result<()> {
        while let Some(Some(result)) = self.outcomes.get(self.next_emit).copied() {
            sink.push(result)?;
            self.next_emit += 1;
        }
        Ok(())
    }
}

/// Check the schedule is ordered, starts with the head and stays inside the slider's lifetime
fn validate_schedule<G: SliderGeometry>(geometry: &G) -> Result<Vec<JudgementInstant>> {
    let start = geometry.start_time();
    let end = geometry.end_time();
    if !(start.is_finite() && end.is_finite() && start <= end) {
        return Err(Error::InvalidSchedule(format!(
            "slider lifetime {}ms..{}ms is not valid",
            start, end
        )));
    }

    let mut instants = geometry.scheduled_instants();
    let Some(first) = instants.first() else {
        return Err(Error::InvalidSchedule("no judgement instants".to_string()));
    };
    if first.kind != JudgementKind::Head || first.time != start {
        return Err(Error::InvalidSchedule(format!(
            "schedule must start with the head at {}ms, found {} at {}ms",
            start, first.kind, first.time
        )));
    }

    let last_index = instants.len() - 1;
    let mut previous = start;
    for (i, instant) in instants.iter_mut().enumerate() {
        if !(instant.time >= start && instant.time <= end) {
            return Err(Error::InvalidSchedule(format!(
                "{} at {}ms is outside {}ms..{}ms",
                instant.kind, instant.time, start, end
            )));
        }
        if instant.time < previous {
            return Err(Error::InvalidSchedule(format!(
                "{} at {}ms is scheduled before {}ms",
                instant.kind, instant.time, previous
            )));
        }
        if i > 0 && instant.kind == JudgementKind::Head {
            return Err(Error::InvalidSchedule("more than one head".to_string()));
        }
        if instant.kind == JudgementKind::Slider && i != last_index {
            return Err(Error::InvalidSchedule(
                "slider judgement must be scheduled last".to_string(),
            ));
        }
        previous = instant.time;
        instant.index = i;
    }

    Ok(instants)
}

/// Judge one slider over a complete frame stream
pub fn judge_slider<G: SliderGeometry>(
    geometry: G,
    hit_windows: HitWindows,
    frames: &[InputFrame],
) -> Result<Vec<JudgementResult>> {
    let mut judge = SliderJudge::new(geometry, hit_windows)?;
    let mut results = Vec::with_capacity(judge.instants().len());
    judge.run(frames, &mut results)?;
    Ok(results)
}

/// Judge several sliders independently over the same frame stream.
///
/// Results are merged by time; ties keep slider order.
pub fn judge_sliders<G: SliderGeometry + Clone>(
    sliders: &[G],
    hit_windows: HitWindows,
    frames: &[InputFrame],
) -> Result<Vec<JudgementResult>> {
    let mut merged = Vec::new();
    for slider in sliders {
        merged.extend(judge_slider(slider.clone(), hit_windows, frames)?);
    }
    merged.sort_by(|a, b| a.time.total_cmp(&b.time));
    Ok(merged)
}
