//! Observable wrapper for a parameter, for UI frameworks that bind values
//! directly instead of going through a control editor.
//!
//! Where [`FloatParameterEditor`](crate::FloatParameterEditor) drives a
//! widget, an [`ObservableParameter`] is itself the binding target: the view
//! reads [`value`](ObservableParameter::value), writes through
//! [`set_value`](ObservableParameter::set_value), and reports interaction
//! boundaries via [`on_editing_changed`](ObservableParameter::on_editing_changed).
//! The embedded state machine attaches the correct automation event to every
//! push and keeps host-originated updates from being echoed back.

use legato_core::{Parameter, ParameterEvents};

use crate::state::EditingMonitor;

/// A parameter plus the editing state needed to bind it to a view.
pub struct ObservableParameter {
    parameter: Parameter,
    token: legato_core::ObserverToken,
    events: ParameterEvents,
    monitor: EditingMonitor,
}

impl ObservableParameter {
    /// Wrap a parameter, creating the lifetime subscription.
    pub fn new(parameter: Parameter) -> Self {
        let (token, events) = parameter.subscribe();
        Self {
            parameter,
            token,
            events,
            monitor: EditingMonitor::new(),
        }
    }

    /// The wrapped parameter.
    pub fn parameter(&self) -> &Parameter {
        &self.parameter
    }

    /// The current value.
    pub fn value(&self) -> f32 {
        self.parameter.value()
    }

    /// Minimum of the parameter range, for slider bounds.
    pub fn min_value(&self) -> f32 {
        self.parameter.min_value()
    }

    /// Maximum of the parameter range, for slider bounds.
    pub fn max_value(&self) -> f32 {
        self.parameter.max_value()
    }

    /// Push a new value from the bound view.
    ///
    /// Ignored while a host update is being applied; otherwise the push
    /// carries the classification resolved by the editing state machine.
    pub fn set_value(&mut self, value: f32) {
        let Some(event) = self.monitor.classify_push() else {
            return;
        };
        self.parameter.set_value(value, Some(self.token), event, 0);
    }

    /// Report a change in the view's editing state.
    ///
    /// Call with `true` before the first value of a gesture so it is pushed
    /// as `Touch`; call with `false` after the last value, which itself
    /// performs one final push carrying `Release`, even when the value did
    /// not change.
    pub fn on_editing_changed(&mut self, editing: bool) {
        if editing {
            self.monitor.begin_gesture();
        } else {
            self.monitor.end_gesture();
            let value = self.parameter.value();
            self.set_value(value);
        }
    }

    /// Drain host-originated deliveries, returning the most recent value the
    /// view should display, if any arrived.
    ///
    /// Deliveries are applied inside the host-update window so a binding
    /// that reacts by writing back through [`set_value`](Self::set_value)
    /// cannot re-notify the parameter. Deliveries arriving mid-gesture are
    /// dropped; the gesture's own pushes win.
    pub fn process_events(&mut self) -> Option<f32> {
        let mut latest = None;
        while let Some(change) = self.events.try_next() {
            if !self.monitor.begin_host_update() {
                continue;
            }
            latest = Some(change.value);
            self.monitor.end_host_update();
        }
        latest
    }
}

impl Drop for ObservableParameter {
    fn drop(&mut self) {
        self.parameter.unsubscribe(self.token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legato_core::{AutomationEvent, ParameterDefinition};

    fn observable() -> (Parameter, ObservableParameter) {
        let param = Parameter::new(ParameterDefinition::percent("mix", "Mix", 5));
        let observable = ObservableParameter::new(param.clone());
        (param, observable)
    }

    #[test]
    fn gesture_classification_sequence() {
        let (param, mut observable) = observable();
        let (_host, host_events) = param.subscribe();

        observable.on_editing_changed(true);
        observable.set_value(10.0);
        observable.set_value(20.0);
        observable.on_editing_changed(false);

        let kinds: Vec<_> = host_events.drain().into_iter().map(|c| c.event).collect();
        assert_eq!(
            kinds,
            [
                AutomationEvent::Touch,
                AutomationEvent::Value,
                AutomationEvent::Release
            ]
        );
        assert_eq!(param.value(), 20.0);
    }

    #[test]
    fn release_is_pushed_even_when_value_unchanged() {
        let (param, mut observable) = observable();
        let (_host, host_events) = param.subscribe();

        observable.on_editing_changed(true);
        observable.set_value(30.0);
        observable.on_editing_changed(false);

        let delivered = host_events.drain();
        assert_eq!(delivered.last().unwrap().event, AutomationEvent::Release);
        assert_eq!(delivered.last().unwrap().value, 30.0);
    }

    #[test]
    fn host_updates_are_observed_but_not_echoed() {
        let (param, mut observable) = observable();
        let (_host, host_events) = param.subscribe();

        param.set(55.0);
        assert_eq!(observable.process_events(), Some(55.0));

        // Only the original host write is on the wire; the observable did
        // not push it again.
        assert_eq!(host_events.drain().len(), 1);
        assert_eq!(observable.value(), 55.0);
    }

    #[test]
    fn host_updates_mid_gesture_are_dropped() {
        let (param, mut observable) = observable();

        observable.on_editing_changed(true);
        observable.set_value(10.0);
        param.set_value(90.0, None, AutomationEvent::Value, 0);
        assert_eq!(observable.process_events(), None);

        observable.on_editing_changed(false);
        assert_eq!(param.value(), 90.0);
    }

    #[test]
    fn range_accessors_mirror_the_parameter() {
        let (_param, observable) = observable();
        assert_eq!(observable.min_value(), 0.0);
        assert_eq!(observable.max_value(), 100.0);
    }
}
