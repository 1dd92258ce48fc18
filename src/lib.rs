//! # Legato - Parameter Synchronization for Plugin Hosting
//!
//! Keeps plugin parameters, UI controls, and host automation in agreement.
//!
//! ## Architecture
//!
//! Legato is an umbrella crate that coordinates:
//! - **legato-core** - Parameters, the parameter tree, normalized values and
//!   display transforms, automation events
//! - **legato-editor** - Control binding: gesture classification, logarithmic
//!   control taper, value labels, feedback-loop suppression
//! - **legato-presets** - User preset bookkeeping: numbering, CRUD, the
//!   current-preset reference
//!
//! ## Quick Start
//!
//! ```
//! use legato::prelude::*;
//!
//! let tree = ParameterTree::builder()
//!     .parameter(ParameterDefinition::percent("depth", "Depth", 1))
//!     .parameter(
//!         ParameterDefinition::float("rate", "Rate", 2, 0.01, 25.0, ParameterUnit::Hertz)
//!             .with_default(2.0),
//!     )
//!     .build()?;
//!
//! let rate = tree.require(2)?;
//! rate.set(8.0);
//! assert_eq!(rate.value(), 8.0);
//! # Ok::<(), legato::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Everything enabled
//! - `editor` - Control/editor synchronization layer
//! - `presets` - User preset management

/// Re-export of legato-core for direct access
pub use legato_core as core;

// Core types
pub use legato_core::{
    AutomationEvent,
    DisplayTransform,
    Error,
    ObserverToken,
    Parameter,
    ParameterChange,
    ParameterDefinition,
    ParameterEvents,
    ParameterTree,
    ParameterTreeBuilder,
    ParameterUnit,
    ParametricValue,
    Result,
    ValueObserver,
};

// Editor subsystem
#[cfg(feature = "editor")]
pub use legato_editor as editor;

#[cfg(feature = "editor")]
pub use legato_editor::{
    BooleanControl, BooleanParameterEditor, ControlLabel, ControlValueProvider, EditingMonitor,
    EditingState, FloatParameterEditor, ObservableParameter, RangedControl, ValueFormatting,
};

// Preset subsystem
#[cfg(feature = "presets")]
pub use legato_presets as presets;

#[cfg(feature = "presets")]
pub use legato_presets::{MemoryPresets, Preset, PresetError, PresetsFacade, UserPresetsManager};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{
        AutomationEvent, DisplayTransform, Parameter, ParameterDefinition, ParameterTree,
        ParameterUnit, ParametricValue,
    };

    #[cfg(feature = "editor")]
    pub use crate::editor::{
        BooleanParameterEditor, FloatParameterEditor, ObservableParameter, RangedControl,
    };

    #[cfg(feature = "presets")]
    pub use crate::presets::{Preset, PresetsFacade, UserPresetsManager};
}
