//! Capability traits a UI widget implements to participate in parameter
//! synchronization.
//!
//! Controls are owned by the UI layer. An editor receives a live shared
//! handle at construction and keeps only a [`Weak`] back-reference, so it can
//! never outlive the control's real owner. The editor assumes nothing about
//! rendering; only the `{range, value, tag}` capability matters.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// Anything that can report a current parameter value. The `source` argument
/// of [`FloatParameterEditor::control_changed`](crate::FloatParameterEditor::control_changed)
/// only needs this much.
pub trait ControlValueProvider {
    /// The current value held by the control.
    fn value(&self) -> f32;
}

/// A widget presenting a bounded continuous value (knob, slider).
///
/// The parameter address is an opaque tag the owning editor assigns once, so
/// UI code can correlate a control back to its parameter.
pub trait RangedControl: ControlValueProvider {
    /// Address of the parameter this control is bound to.
    fn parameter_address(&self) -> u64;

    /// Bind the control to a parameter address. Called once by the editor.
    fn set_parameter_address(&mut self, address: u64);

    /// The minimum value the control can represent.
    fn minimum_value(&self) -> f32;

    /// Change the minimum value the control can represent.
    fn set_minimum_value(&mut self, value: f32);

    /// The maximum value the control can represent.
    fn maximum_value(&self) -> f32;

    /// Change the maximum value the control can represent.
    fn set_maximum_value(&mut self, value: f32);

    /// Move the control to a new value.
    fn set_value(&mut self, value: f32);
}

/// A widget presenting a binary state (switch, checkbox).
pub trait BooleanControl {
    /// Address of the parameter this control is bound to.
    fn parameter_address(&self) -> u64;

    /// Bind the control to a parameter address. Called once by the editor.
    fn set_parameter_address(&mut self, address: u64);

    /// Current on/off state.
    fn boolean_state(&self) -> bool;

    /// Flip the control to a new state.
    fn set_boolean_state(&mut self, state: bool);
}

/// A text element that shows a parameter name or formatted value.
/// Presentation only; correctness never depends on it.
pub trait ControlLabel {
    fn set_text(&mut self, text: &str);
}

/// Shared handle to a ranged control. The UI layer owns the `Arc`.
pub type SharedRangedControl = Arc<Mutex<dyn RangedControl + Send>>;

/// Shared handle to a boolean control. The UI layer owns the `Arc`.
pub type SharedBooleanControl = Arc<Mutex<dyn BooleanControl + Send>>;

/// Shared handle to a label. The UI layer owns the `Arc`.
pub type SharedLabel = Arc<Mutex<dyn ControlLabel + Send>>;

/// Weak counterpart held by editors.
pub(crate) type WeakRangedControl = Weak<Mutex<dyn RangedControl + Send>>;
pub(crate) type WeakBooleanControl = Weak<Mutex<dyn BooleanControl + Send>>;
pub(crate) type WeakLabel = Weak<Mutex<dyn ControlLabel + Send>>;

/// Wrap a concrete ranged control for sharing between the UI and an editor.
pub fn shared_ranged_control<C: RangedControl + Send + 'static>(control: C) -> SharedRangedControl {
    Arc::new(Mutex::new(control))
}

/// Wrap a concrete boolean control for sharing between the UI and an editor.
pub fn shared_boolean_control<C: BooleanControl + Send + 'static>(
    control: C,
) -> SharedBooleanControl {
    Arc::new(Mutex::new(control))
}

/// Wrap a concrete label for sharing between the UI and an editor.
pub fn shared_label<L: ControlLabel + Send + 'static>(label: L) -> SharedLabel {
    Arc::new(Mutex::new(label))
}
