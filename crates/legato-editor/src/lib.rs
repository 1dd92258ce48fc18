//! Control-to-parameter synchronization.
//!
//! One editor binds one [`Parameter`](legato_core::Parameter) to one primary
//! control (plus any secondary controls routed through it), applying display
//! transforms, classifying gesture boundaries for automation recording, and
//! keeping the two directions of dataflow from ever feeding back into each
//! other.
//!
//! # Primary API
//!
//! - [`FloatParameterEditor`]: continuous parameter ↔ ranged control
//! - [`BooleanParameterEditor`]: boolean parameter ↔ switch control
//! - [`ObservableParameter`]: direct value binding for declarative UIs
//! - [`EditingState`] / [`EditingMonitor`]: the gesture classification state
//!   machine, usable on its own
//! - [`RangedControl`] / [`BooleanControl`]: the capability a widget
//!   implements to participate
//!
//! Editors are single-threaded by design: they live on the UI loop, which
//! calls `process_events` each frame to apply changes that arrived from
//! other threads (host automation, preset recall, other editors).

mod control;
pub use control::{
    shared_boolean_control, shared_label, shared_ranged_control, BooleanControl, ControlLabel,
    ControlValueProvider, RangedControl, SharedBooleanControl, SharedLabel, SharedRangedControl,
};

mod state;
pub use state::{EditingInput, EditingMonitor, EditingState};

mod float;
pub use float::{FloatParameterEditor, LOG_CONTROL_MAX, LOG_CONTROL_MIN, NAME_RESTORE_DELAY};

mod boolean;
pub use boolean::BooleanParameterEditor;

mod observable;
pub use observable::ObservableParameter;

mod format;
pub use format::ValueFormatting;
