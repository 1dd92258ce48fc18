//! Preset bookkeeping.
//!
//! A preset is a named, numbered snapshot of a plugin's parameter state.
//! Factory presets (`number >= 0`) come from the engine and are read-only;
//! user presets (`number < 0`) are created, renamed, and deleted at will.
//! [`UserPresetsManager`] owns that lifecycle over any store implementing
//! [`PresetsFacade`], keeping the numbering scheme and the current-preset
//! reference consistent across operations.

mod preset;
pub use preset::Preset;

mod facade;
pub use facade::{MemoryPresets, PresetError, PresetsFacade, Result};

mod manager;
pub use manager::UserPresetsManager;
