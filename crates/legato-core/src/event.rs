//! Automation event classification and change notifications.

/// How a host should record a parameter push in an automation lane.
///
/// A gesture is a `Touch`, any number of `Value` changes, then a `Release`.
/// The `Release` is delivered even when the numeric value did not change
/// since the last push, so a host can close the recorded segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum AutomationEvent {
    /// Gesture start
    Touch,
    /// In-gesture (or gesture-free) value change
    #[default]
    Value,
    /// Gesture end
    Release,
}

/// A single delivery on a parameter subscription.
///
/// Deliveries arrive in the order values were applied to the parameter, one
/// per distinct `set_value` call; nothing is coalesced. The thread draining
/// the subscription is arbitrary, so UI consumers drain on their own loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterChange {
    /// Address of the parameter that changed.
    pub address: u64,
    /// The value after clamping, as stored.
    pub value: f32,
    /// Classification attached by the originator.
    pub event: AutomationEvent,
    /// Host timestamp the originator attached; 0 means "apply immediately".
    /// Passed through untouched, scheduling is the host's concern.
    pub host_time: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_event_is_value() {
        assert_eq!(AutomationEvent::default(), AutomationEvent::Value);
    }
}
