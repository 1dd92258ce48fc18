//! Gesture classification state machine.
//!
//! Converts UI interaction boundaries (begin / end of a drag) into the
//! automation event attached to each value push, and gates host-originated
//! updates so they are applied to the control without being pushed back to
//! the parameter.

use legato_core::AutomationEvent;

/// Where an editor is within a user gesture or host update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingState {
    /// No gesture in progress; pushes classify as `Value`.
    #[default]
    Inactive,
    /// Gesture just started; the next push classifies as `Touch`.
    Began,
    /// Gesture ongoing; pushes classify as `Value`.
    Active,
    /// Gesture just finished; the next push classifies as `Release`.
    Ended,
    /// A change from outside any gesture (automation playback, preset
    /// recall) is being applied to the control. Pushes are suppressed.
    HostUpdate,
}

/// Inputs that drive [`EditingState::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingInput {
    /// The user started interacting with a control.
    GestureBegan,
    /// The user stopped interacting with a control.
    GestureEnded,
    /// A value is about to be pushed to the parameter.
    ValuePushed,
    /// A host-originated change is about to be applied to the control.
    HostUpdateBegan,
    /// The host-originated change has been applied.
    HostUpdateEnded,
}

impl EditingState {
    /// Pure transition function.
    ///
    /// Returns the next state and, for `ValuePushed`, the classification the
    /// push must carry. `None` means the push must not be forwarded to the
    /// parameter at all (only ever the case during a host update, which is
    /// what breaks the feedback loop for externally driven changes).
    ///
    /// A host update may only begin while `Inactive`; deliveries arriving
    /// mid-gesture leave the state unchanged and are ignored by callers.
    pub fn transition(self, input: EditingInput) -> (EditingState, Option<AutomationEvent>) {
        use EditingInput::*;
        use EditingState::*;

        match (self, input) {
            (HostUpdate, ValuePushed) => (HostUpdate, None),
            (Began, ValuePushed) => (Active, Some(AutomationEvent::Touch)),
            (Ended, ValuePushed) => (Inactive, Some(AutomationEvent::Release)),
            (state, ValuePushed) => (state, Some(AutomationEvent::Value)),

            (HostUpdate, GestureBegan) => (HostUpdate, None),
            (_, GestureBegan) => (Began, None),
            (HostUpdate, GestureEnded) => (HostUpdate, None),
            (_, GestureEnded) => (Ended, None),

            (Inactive, HostUpdateBegan) => (HostUpdate, None),
            (state, HostUpdateBegan) => (state, None),
            (HostUpdate, HostUpdateEnded) => (Inactive, None),
            (state, HostUpdateEnded) => (state, None),
        }
    }
}

/// Stateful wrapper around [`EditingState::transition`] embedded in each
/// editor.
#[derive(Debug, Default)]
pub struct EditingMonitor {
    state: EditingState,
}

impl EditingMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> EditingState {
        self.state
    }

    /// Record the start of a user gesture. Must be called before the first
    /// value of the gesture is pushed.
    pub fn begin_gesture(&mut self) {
        self.state = self.state.transition(EditingInput::GestureBegan).0;
    }

    /// Record the end of a user gesture. The caller must follow up with one
    /// final push so the `Release` classification is delivered.
    pub fn end_gesture(&mut self) {
        self.state = self.state.transition(EditingInput::GestureEnded).0;
    }

    /// Classify the push that is about to happen, advancing the state.
    /// `None` means the push must be dropped (host update in progress).
    pub fn classify_push(&mut self) -> Option<AutomationEvent> {
        let (next, event) = self.state.transition(EditingInput::ValuePushed);
        self.state = next;
        event
    }

    /// Try to enter the host-update window. Returns false when a gesture is
    /// in progress, in which case the host change must be ignored.
    pub fn begin_host_update(&mut self) -> bool {
        self.state = self.state.transition(EditingInput::HostUpdateBegan).0;
        self.state == EditingState::HostUpdate
    }

    /// Leave the host-update window.
    pub fn end_host_update(&mut self) {
        self.state = self.state.transition(EditingInput::HostUpdateEnded).0;
    }

    /// Whether a host update is being applied.
    pub fn is_host_update(&self) -> bool {
        self.state == EditingState::HostUpdate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EditingState::*;

    #[test]
    fn gesture_sequence_classifies_touch_value_release() {
        let mut monitor = EditingMonitor::new();

        monitor.begin_gesture();
        assert_eq!(monitor.state(), Began);
        assert_eq!(monitor.classify_push(), Some(AutomationEvent::Touch));
        assert_eq!(monitor.state(), Active);
        assert_eq!(monitor.classify_push(), Some(AutomationEvent::Value));
        assert_eq!(monitor.classify_push(), Some(AutomationEvent::Value));

        monitor.end_gesture();
        assert_eq!(monitor.state(), Ended);
        assert_eq!(monitor.classify_push(), Some(AutomationEvent::Release));
        assert_eq!(monitor.state(), Inactive);
    }

    #[test]
    fn pushes_outside_any_gesture_are_plain_values() {
        let mut monitor = EditingMonitor::new();
        assert_eq!(monitor.classify_push(), Some(AutomationEvent::Value));
        assert_eq!(monitor.state(), Inactive);
    }

    #[test]
    fn host_update_suppresses_pushes() {
        let mut monitor = EditingMonitor::new();
        assert!(monitor.begin_host_update());
        assert_eq!(monitor.classify_push(), None);
        assert!(monitor.is_host_update());
        monitor.end_host_update();
        assert_eq!(monitor.state(), Inactive);
    }

    #[test]
    fn host_update_cannot_interrupt_a_gesture() {
        let mut monitor = EditingMonitor::new();
        monitor.begin_gesture();
        assert!(!monitor.begin_host_update());
        assert_eq!(monitor.state(), Began);

        monitor.classify_push();
        assert!(!monitor.begin_host_update());
        assert_eq!(monitor.state(), Active);
    }

    #[test]
    fn transition_is_pure_and_total() {
        use EditingInput::*;
        let states = [Inactive, Began, Active, Ended, HostUpdate];
        let inputs = [
            GestureBegan,
            GestureEnded,
            ValuePushed,
            HostUpdateBegan,
            HostUpdateEnded,
        ];

        for state in states {
            for input in inputs {
                // Every combination has a defined successor, and repeating
                // the same transition from the same state is deterministic.
                let first = state.transition(input);
                let second = state.transition(input);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn release_emitted_even_without_intervening_values() {
        let mut monitor = EditingMonitor::new();
        monitor.begin_gesture();
        monitor.end_gesture();
        assert_eq!(monitor.classify_push(), Some(AutomationEvent::Release));
    }
}
