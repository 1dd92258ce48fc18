//! Storage facade the preset manager operates against.

use thiserror::Error;

use crate::preset::Preset;

/// Persistence failure surfaced by a [`PresetsFacade`].
///
/// These are the only preset operations that error. Invalid operations
/// (touching a factory preset, acting with no current preset) are silent
/// no-ops by design, and the manager never retries a failed write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    #[error("Preset store rejected write of preset {number}: {reason}")]
    Save { number: i32, reason: String },

    #[error("Preset store rejected delete of preset {number}: {reason}")]
    Delete { number: i32, reason: String },
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, PresetError>;

/// The slice of a plugin component that preset management needs.
///
/// The component owns the factory list (immutable, engine-defined), the user
/// preset collection (persisted through a platform key-value store whose
/// layout this crate does not define), and the "current preset" reference.
pub trait PresetsFacade {
    /// Factory presets in positional order. Never mutated.
    fn factory_presets(&self) -> &[Preset];

    /// The user presets, unordered.
    fn user_presets(&self) -> &[Preset];

    /// The currently active preset (user or factory), if any.
    fn current_preset(&self) -> Option<Preset>;

    /// Replace the currently active preset reference.
    fn set_current_preset(&mut self, preset: Option<Preset>);

    /// Persist a user preset, overwriting any entry with the same number.
    fn save_user_preset(&mut self, preset: &Preset) -> Result<()>;

    /// Remove the user preset with the given number from the store.
    fn delete_user_preset(&mut self, preset: &Preset) -> Result<()>;
}

/// In-memory [`PresetsFacade`].
///
/// The reference implementation backing tests and standalone hosts that do
/// not persist presets across runs. Write failures can be injected to
/// exercise error propagation.
#[derive(Debug, Default)]
pub struct MemoryPresets {
    factory: Vec<Preset>,
    user: Vec<Preset>,
    current: Option<Preset>,
    fail_next_write: Option<String>,
}

impl MemoryPresets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with an engine-defined factory list.
    pub fn with_factory(factory: Vec<Preset>) -> Self {
        Self {
            factory,
            ..Self::default()
        }
    }

    /// Seed the user collection, for tests that start mid-history.
    pub fn with_user_presets(mut self, user: Vec<Preset>) -> Self {
        self.user = user;
        self
    }

    /// Make the next save or delete fail with the given reason.
    pub fn fail_next_write(&mut self, reason: impl Into<String>) {
        self.fail_next_write = Some(reason.into());
    }

    fn take_failure(&mut self) -> Option<String> {
        self.fail_next_write.take()
    }
}

impl PresetsFacade for MemoryPresets {
    fn factory_presets(&self) -> &[Preset] {
        &self.factory
    }

    fn user_presets(&self) -> &[Preset] {
        &self.user
    }

    fn current_preset(&self) -> Option<Preset> {
        self.current.clone()
    }

    fn set_current_preset(&mut self, preset: Option<Preset>) {
        self.current = preset;
    }

    fn save_user_preset(&mut self, preset: &Preset) -> Result<()> {
        if let Some(reason) = self.take_failure() {
            return Err(PresetError::Save {
                number: preset.number,
                reason,
            });
        }
        match self.user.iter_mut().find(|p| p.number == preset.number) {
            Some(existing) => *existing = preset.clone(),
            None => self.user.push(preset.clone()),
        }
        Ok(())
    }

    fn delete_user_preset(&mut self, preset: &Preset) -> Result<()> {
        if let Some(reason) = self.take_failure() {
            return Err(PresetError::Delete {
                number: preset.number,
                reason,
            });
        }
        self.user.retain(|p| p.number != preset.number);
        Ok(())
    }
}
