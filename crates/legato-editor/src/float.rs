//! Editor for continuous parameters backed by a ranged control.

use std::sync::Arc;
use std::time::{Duration, Instant};

use legato_core::{AutomationEvent, Parameter, ParameterEvents};

use crate::control::{SharedLabel, SharedRangedControl, WeakLabel, WeakRangedControl};
use crate::format::ValueFormatting;
use crate::state::EditingMonitor;

/// Lower bound of the auxiliary control range used for log-display
/// parameters.
pub const LOG_CONTROL_MIN: f32 = 0.0;

/// Upper bound of the auxiliary control range used for log-display
/// parameters. The control then operates over `[0, 9]` regardless of the
/// parameter's native range.
pub const LOG_CONTROL_MAX: f32 = 9.0;

/// How long a label keeps showing a freshly changed value before reverting
/// to the parameter's display name.
pub const NAME_RESTORE_DELAY: Duration = Duration::from_secs(1);

/// Synchronizes one continuous [`Parameter`] with one primary ranged control
/// (and any secondary controls routed through [`control_changed`](Self::control_changed)).
///
/// Dataflow is strictly one-directional in each direction:
/// control-originated changes go control → parameter → other subscribers,
/// and parameter-originated changes (host automation, preset recall, another
/// editor) go parameter → control without ever being pushed back. The editor
/// subscribes once at construction and owns that subscription for its whole
/// life.
///
/// Deliveries land on whatever thread called `set_value`, so the owning UI
/// loop is expected to call [`process_events`](Self::process_events) (and
/// [`tick`](Self::tick) for label upkeep) once per frame.
pub struct FloatParameterEditor {
    parameter: Parameter,
    control: WeakRangedControl,
    label: Option<WeakLabel>,
    token: legato_core::ObserverToken,
    events: ParameterEvents,
    monitor: EditingMonitor,
    use_log_values: bool,
    log_span: f32,
    restore_deadline: Option<Instant>,
}

impl FloatParameterEditor {
    /// Bind a parameter to its primary control.
    ///
    /// Tags the control with the parameter address, configures its range
    /// (native, or the fixed `[0, 9]` log range when the parameter's display
    /// transform is logarithmic), and immediately pushes the parameter's
    /// current value into the control so the initial display is consistent.
    pub fn new(parameter: Parameter, control: &SharedRangedControl) -> Self {
        Self::build(parameter, control, None)
    }

    /// Like [`new`](Self::new) with a label that shows the parameter name
    /// and, briefly, freshly changed values.
    pub fn with_label(parameter: Parameter, control: &SharedRangedControl, label: &SharedLabel) -> Self {
        Self::build(parameter, control, Some(label))
    }

    fn build(parameter: Parameter, control: &SharedRangedControl, label: Option<&SharedLabel>) -> Self {
        let use_log_values = parameter.transform() == legato_core::DisplayTransform::Logarithmic;
        let (token, events) = parameter.subscribe();

        let mut editor = Self {
            parameter,
            control: Arc::downgrade(control),
            label: label.map(Arc::downgrade),
            token,
            events,
            monitor: EditingMonitor::new(),
            use_log_values,
            log_span: 2.0_f32.powf(LOG_CONTROL_MAX) - 1.0,
            restore_deadline: None,
        };

        {
            let mut control = control.lock();
            control.set_parameter_address(editor.parameter.address());
            if editor.use_log_values {
                control.set_minimum_value(LOG_CONTROL_MIN);
                control.set_maximum_value(LOG_CONTROL_MAX);
            } else {
                control.set_minimum_value(editor.parameter.min_value());
                control.set_maximum_value(editor.parameter.max_value());
            }
            control.set_value(editor.to_control(editor.parameter.value()));
        }

        if let Some(label) = label {
            label.lock().set_text(editor.parameter.display_name());
        }

        editor
    }

    /// The parameter being edited.
    pub fn parameter(&self) -> &Parameter {
        &self.parameter
    }

    /// Whether the control's displayed value disagrees with the parameter.
    /// Consumers use this to decide whether to force a resync.
    pub fn differs(&self) -> bool {
        let Some(control) = self.control.upgrade() else {
            return false;
        };
        let shown = control.lock().value();
        shown != self.to_control(self.parameter.value())
    }

    /// Record the start of a user gesture on any of this editor's controls.
    /// Must precede the first [`control_changed`](Self::control_changed) of
    /// the gesture so that push carries the `Touch` classification.
    pub fn begin_gesture(&mut self) {
        self.monitor.begin_gesture();
    }

    /// Record the end of a user gesture, pushing one final value carrying
    /// the `Release` classification even when the value did not change.
    pub fn end_gesture(&mut self) {
        self.monitor.end_gesture();
        if let Some(event) = self.monitor.classify_push() {
            self.parameter
                .set_value(self.parameter.value(), Some(self.token), event, 0);
        }
    }

    /// Notification that `source` changed due to direct user interaction.
    ///
    /// Inverts the display mapping, pushes the result to the parameter
    /// (tagged with this editor's token so it is excluded from its own
    /// notification), and refreshes the primary control. When `source` is a
    /// secondary control, the primary's new value is mirrored back into it
    /// so every control bound through this editor stays in step.
    pub fn control_changed(&mut self, source: &SharedRangedControl) {
        let source_value = source.lock().value();
        tracing::debug!(
            address = self.parameter.address(),
            value = source_value,
            "control_changed"
        );

        let Some(event) = self.monitor.classify_push() else {
            return;
        };

        let value = self.from_control(source_value);
        if value != self.parameter.value() || event != AutomationEvent::Value {
            self.parameter.set_value(value, Some(self.token), event, 0);
        }
        self.set_control_state(self.parameter.value(), Some(source));
    }

    /// Apply a new value to both the parameter and the control.
    ///
    /// The value is clamped to the parameter range. The push happens when
    /// the value differs from the current one or when `event` is a gesture
    /// boundary (`Touch`/`Release` must reach the host even when the number
    /// is unchanged). The control is always refreshed.
    pub fn set_value(&mut self, value: f32, event: AutomationEvent) {
        let clamped = value.clamp(self.parameter.min_value(), self.parameter.max_value());
        tracing::debug!(address = self.parameter.address(), value = clamped, "set_value");

        if !self.monitor.is_host_update()
            && (clamped != self.parameter.value() || event != AutomationEvent::Value)
        {
            self.parameter.set_value(clamped, Some(self.token), event, 0);
        }
        self.set_control_state(clamped, None);
    }

    /// Drain parameter-originated changes and apply them to the control.
    ///
    /// This is the UI-thread hop: deliveries are queued on the subscription
    /// from whatever thread applied the value, and the owning loop calls
    /// this to resynchronize. Values applied here are never pushed back to
    /// the parameter, and deliveries arriving mid-gesture are dropped in
    /// favor of the gesture's own pushes.
    pub fn process_events(&mut self) {
        while let Some(change) = self.events.try_next() {
            if !self.monitor.begin_host_update() {
                continue;
            }
            self.set_control_state(change.value, None);
            self.monitor.end_host_update();
        }
    }

    /// Restore the label to the parameter's display name once the value
    /// flash has been up long enough. Presentation only.
    pub fn tick(&mut self, now: Instant) {
        let due = self.restore_deadline.is_some_and(|deadline| now >= deadline);
        if !due {
            return;
        }
        self.restore_deadline = None;
        if let Some(label) = self.label.as_ref().and_then(WeakLabel::upgrade) {
            label.lock().set_text(self.parameter.display_name());
        }
    }

    /// Convert a parameter value into the control's coordinate space.
    fn to_control(&self, value: f32) -> f32 {
        if !self.use_log_values {
            return value;
        }
        let min = self.parameter.min_value();
        let max = self.parameter.max_value();
        (((value - min) / (max - min)) * self.log_span + 1.0).log2()
    }

    /// Convert a control position back into a parameter value.
    fn from_control(&self, control_value: f32) -> f32 {
        if !self.use_log_values {
            return control_value;
        }
        let min = self.parameter.min_value();
        let max = self.parameter.max_value();
        ((2.0_f32.powf(control_value) - 1.0) / self.log_span) * (max - min) + min
    }

    fn set_control_state(&mut self, value: f32, source: Option<&SharedRangedControl>) {
        let control_value = self.to_control(value);

        if let Some(primary) = self.control.upgrade() {
            primary.lock().set_value(control_value);
            if let Some(source) = source {
                if !Arc::ptr_eq(source, &primary) {
                    source.lock().set_value(control_value);
                }
            }
        } else if let Some(source) = source {
            source.lock().set_value(control_value);
        }

        self.show_value(value);
    }

    fn show_value(&mut self, value: f32) {
        let Some(label) = self.label.as_ref().and_then(WeakLabel::upgrade) else {
            return;
        };
        label.lock().set_text(&self.parameter.display_value(value));
        self.restore_deadline = Some(Instant::now() + NAME_RESTORE_DELAY);
    }
}

impl Drop for FloatParameterEditor {
    fn drop(&mut self) {
        self.parameter.unsubscribe(self.token);
    }
}
