//! Parameter model for audio plugin hosts.
//!
//! One authoritative value per parameter, any number of observers. An engine
//! publishes its control points once as a [`ParameterTree`]; editors, preset
//! recall, and host automation all mutate through [`Parameter::set_value`],
//! which clamps, stores, and fans the change out to every subscriber except
//! (optionally) the originator.
//!
//! # Primary API
//!
//! - [`ParameterTree`] / [`ParameterTreeBuilder`]: one-time publication of an
//!   engine's parameter set
//! - [`Parameter`]: the authoritative value holder and its change stream
//! - [`ParametricValue`] / [`DisplayTransform`]: the linear `[0, 1]` view of
//!   a non-linearly scaled value
//! - [`AutomationEvent`]: gesture classification (`Touch` / `Value` /
//!   `Release`) recorded by hosts
//!
//! Widget-facing synchronization lives in the `legato-editor` crate; preset
//! bookkeeping in `legato-presets`.

pub mod error;
pub use error::{Error, Result};

mod parametric;
pub use parametric::{DisplayTransform, ParametricValue};

mod definition;
pub use definition::{ParameterDefinition, ParameterUnit};

mod event;
pub use event::{AutomationEvent, ParameterChange};

mod parameter;
pub use parameter::{ObserverToken, Parameter, ParameterEvents, ValueObserver};

mod tree;
pub use tree::{ParameterTree, ParameterTreeBuilder};
