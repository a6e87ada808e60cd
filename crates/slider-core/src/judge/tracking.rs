use tracing::debug;

use crate::geometry::{Position, SliderGeometry};
use crate::input::{ActionSet, OsuAction};

/// Cursor position and held actions at one point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingSample {
    pub time: f64,
    pub position: Position,
    pub held: ActionSet,
}

impl TrackingSample {
    pub fn new(time: f64, position: Position, held: ActionSet) -> Self {
        Self {
            time,
            position,
            held,
        }
    }
}

/// Slider tracking state machine
///
/// Tracking holds while the slider is active, the cursor is inside the follow
/// area and at least one valid action is held. Once the head has been hit,
/// only the action that hit it is valid until the first sample where no other
/// action is held; from then on any action is valid for the rest of the slider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackingState {
    is_tracking: bool,
    held_at_tracking_start: ActionSet,
    head_action: Option<OsuAction>,
    accept_any_action: bool,
}

impl TrackingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the action that hit the slider head
    pub fn set_head_action(&mut self, action: OsuAction) {
        self.head_action = Some(action);
        self.accept_any_action = false;
    }

    /// Actions in `held` that may keep the slider tracked
    ///
    /// Lifts the head action restriction when nothing but the head action is held.
    pub fn valid_actions(&mut self, held: ActionSet) -> ActionSet {
        let Some(head_action) = self.head_action else {
            return held;
        };

        if !self.accept_any_action && held.without(head_action).is_empty() {
            debug!("Head action {} released from restriction", head_action);
            self.accept_any_action = true;
        }

        if self.accept_any_action {
            held
        } else {
            held.intersection(ActionSet::single(head_action))
        }
    }

    /// Advance the state machine by one sample and return the tracking flag
    pub fn update<G: SliderGeometry + ?Sized>(
        &mut self,
        geometry: &G,
        sample: &TrackingSample,
    ) -> bool {
        let valid = self.valid_actions(sample.held);
        let active = geometry.start_time() <= sample.time && sample.time <= geometry.end_time();

        let tracking =
            active && !valid.is_empty() && geometry.is_inside(sample.position, sample.time);

        if tracking && !self.is_tracking {
            debug!(
                "Tracking acquired at {}ms with {} at {}",
                sample.time, sample.held, sample.position
            );
            self.held_at_tracking_start = sample.held;
        } else if !tracking && self.is_tracking {
            debug!(
                "Tracking lost at {}ms with {} at {}",
                sample.time, sample.held, sample.position
            );
        }

        self.is_tracking = tracking;
        tracking
    }

    pub fn is_tracking(&self) -> bool {
        self.is_tracking
    }

    /// Actions held on the sample that last acquired tracking
    pub fn held_at_tracking_start(&self) -> ActionSet {
        self.held_at_tracking_start
    }

    pub fn head_action(&self) -> Option<OsuAction> {
        self.head_action
    }

    pub fn accepts_any_action(&self) -> bool {
        self.head_action.is_none() || self.accept_any_action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::JudgementInstant;
    use OsuAction::{LeftButton, RightButton};

    /// Slider body covering every point with x below 50
    struct MockGeometry;

    impl SliderGeometry for MockGeometry {
        fn start_time(&self) -> f64 {
            1000.0
        }

        fn end_time(&self) -> f64 {
            2000.0
        }

        fn is_inside(&self, point: Position, _time: f64) -> bool {
            point.x < 50.0
        }

        fn scheduled_instants(&self) -> Vec<JudgementInstant> {
            Vec::new()
        }
    }

    fn sample(time: f64, x: f64, actions: &[OsuAction]) -> TrackingSample {
        TrackingSample::new(
            time,
            Position::new(x, 0.0),
            actions.iter().copied().collect(),
        )
    }

    #[test]
    fn test_initial_state() {
        let state = TrackingState::new();
        assert!(!state.is_tracking());
        assert!(state.accepts_any_action());
        assert_eq!(state.head_action(), None);
    }

    #[test]
    fn test_no_tracking_outside_active_time() {
        let mut state = TrackingState::new();
        assert!(!state.update(&MockGeometry, &sample(999.0, 0.0, &[LeftButton])));
        assert!(state.update(&MockGeometry, &sample(1000.0, 0.0, &[LeftButton])));
        assert!(state.update(&MockGeometry, &sample(2000.0, 0.0, &[LeftButton])));
        assert!(!state.update(&MockGeometry, &sample(2001.0, 0.0, &[LeftButton])));
    }

    #[test]
    fn test_leaving_body_drops_tracking() {
        let mut state = TrackingState::new();
        assert!(state.update(&MockGeometry, &sample(1100.0, 0.0, &[LeftButton])));
        assert!(!state.update(&MockGeometry, &sample(1200.0, 100.0, &[LeftButton])));
        assert!(state.update(&MockGeometry, &sample(1300.0, 10.0, &[LeftButton])));
    }

    #[test]
    fn test_releasing_all_drops_tracking() {
        let mut state = TrackingState::new();
        assert!(state.update(&MockGeometry, &sample(1100.0, 0.0, &[RightButton])));
        assert!(!state.update(&MockGeometry, &sample(1200.0, 0.0, &[])));
        assert!(state.update(&MockGeometry, &sample(1300.0, 0.0, &[LeftButton])));
        assert_eq!(
            state.held_at_tracking_start(),
            ActionSet::single(LeftButton)
        );
    }

    #[test]
    fn test_head_action_restricts_until_alone() {
        let mut state = TrackingState::new();
        state.set_head_action(RightButton);

        // Left held from before the head keeps the restriction in force
        assert!(state.update(&MockGeometry, &sample(1000.0, 0.0, &[LeftButton, RightButton])));
        assert!(!state.accepts_any_action());

        // Releasing the head action leaves only an invalid action held
        assert!(!state.update(&MockGeometry, &sample(1500.0, 0.0, &[LeftButton])));
        assert!(!state.update(&MockGeometry, &sample(1600.0, 0.0, &[LeftButton])));
        assert!(!state.accepts_any_action());
    }

    #[test]
    fn test_head_action_alone_lifts_restriction() {
        let mut state = TrackingState::new();
        state.set_head_action(LeftButton);

        assert!(state.update(&MockGeometry, &sample(1000.0, 0.0, &[LeftButton])));
        assert!(state.accepts_any_action());

        assert!(state.update(&MockGeometry, &sample(1500.0, 0.0, &[LeftButton, RightButton])));
        assert!(state.update(&MockGeometry, &sample(1600.0, 0.0, &[RightButton])));
    }

    #[test]
    fn test_release_all_lifts_restriction() {
        let mut state = TrackingState::new();
        state.set_head_action(RightButton);

        assert!(state.update(&MockGeometry, &sample(1000.0, 0.0, &[LeftButton, RightButton])));
        assert!(!state.update(&MockGeometry, &sample(1200.0, 100.0, &[])));
        assert!(state.accepts_any_action());
        assert!(state.update(&MockGeometry, &sample(1400.0, 0.0, &[LeftButton])));
    }

    #[test]
    fn test_valid_actions_without_head_action() {
        let mut state = TrackingState::new();
        let both = ActionSet::single(LeftButton).with(RightButton);
        assert_eq!(state.valid_actions(both), both);
    }
}
