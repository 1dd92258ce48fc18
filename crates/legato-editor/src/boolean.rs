//! Editor for boolean parameters backed by a switch-like control.

use std::sync::Arc;

use legato_core::{AutomationEvent, Parameter, ParameterEvents};

use crate::control::{ControlValueProvider, SharedBooleanControl, WeakBooleanControl};

/// Synchronizes one boolean [`Parameter`] with a two-state control.
///
/// A stored value `>= 0.5` denotes "true". The control state is only written
/// when it actually changes, so widgets with expensive redraws are not
/// disturbed by redundant syncs.
pub struct BooleanParameterEditor {
    parameter: Parameter,
    control: WeakBooleanControl,
    token: legato_core::ObserverToken,
    events: ParameterEvents,
}

impl BooleanParameterEditor {
    /// Bind a boolean parameter to its control, tagging the control with the
    /// parameter address and syncing the initial state.
    pub fn new(parameter: Parameter, control: &SharedBooleanControl) -> Self {
        let (token, events) = parameter.subscribe();

        {
            let mut control = control.lock();
            control.set_parameter_address(parameter.address());
            control.set_boolean_state(parameter.bool_value());
        }

        Self {
            parameter,
            control: Arc::downgrade(control),
            token,
            events,
        }
    }

    /// The parameter being edited.
    pub fn parameter(&self) -> &Parameter {
        &self.parameter
    }

    /// Whether the control's state disagrees with the parameter.
    pub fn differs(&self) -> bool {
        let Some(control) = self.control.upgrade() else {
            return false;
        };
        let shown = control.lock().boolean_state();
        shown != self.parameter.bool_value()
    }

    /// Notification that a control changed due to direct user interaction.
    pub fn control_changed(&mut self, source: &dyn ControlValueProvider) {
        tracing::debug!(
            address = self.parameter.address(),
            value = source.value(),
            "control_changed"
        );
        self.set_value(source.value());
    }

    /// Apply a new value to both the parameter and the control.
    pub fn set_value(&mut self, value: f32) {
        if value != self.parameter.value() {
            self.parameter
                .set_value(value, Some(self.token), AutomationEvent::Value, 0);
        }
        self.set_control_state(self.parameter.value());
    }

    /// Drain parameter-originated changes and apply them to the control.
    /// Never pushes back to the parameter.
    pub fn process_events(&mut self) {
        while let Some(change) = self.events.try_next() {
            self.set_control_state(change.value);
        }
    }

    fn set_control_state(&mut self, value: f32) {
        let Some(control) = self.control.upgrade() else {
            return;
        };
        let state = value >= 0.5;
        let mut control = control.lock();
        if control.boolean_state() != state {
            control.set_boolean_state(state);
        }
    }
}

impl Drop for BooleanParameterEditor {
    fn drop(&mut self) {
        self.parameter.unsubscribe(self.token);
    }
}
