//! User preset CRUD and numbering.

use crate::facade::{PresetsFacade, Result};
use crate::preset::Preset;

/// Manager of user presets for a plugin component.
///
/// Owns the numbering invariant and the "current preset" reference: when the
/// current preset is a user preset it always matches an entry in the store,
/// and factory presets are never written through here. Operations on a
/// factory preset or an absent current preset are silent no-ops; only
/// persistence failures surface, and they are never retried.
pub struct UserPresetsManager<F: PresetsFacade> {
    facade: F,
}

impl<F: PresetsFacade> UserPresetsManager<F> {
    /// Create a manager over the given component slice.
    pub fn new(facade: F) -> Self {
        Self { facade }
    }

    /// Read access to the underlying component slice.
    pub fn facade(&self) -> &F {
        &self.facade
    }

    /// Mutable access to the underlying component slice.
    pub fn facade_mut(&mut self) -> &mut F {
        &mut self.facade
    }

    /// The user presets, as stored.
    pub fn presets(&self) -> &[Preset] {
        self.facade.user_presets()
    }

    /// The user presets ordered by number, descending (−1 first).
    pub fn presets_ordered_by_number(&self) -> Vec<Preset> {
        let mut ordered = self.facade.user_presets().to_vec();
        ordered.sort_by_key(|preset| std::cmp::Reverse(preset.number));
        ordered
    }

    /// The user presets ordered by name, case-insensitively.
    pub fn presets_ordered_by_name(&self) -> Vec<Preset> {
        let mut ordered = self.facade.user_presets().to_vec();
        ordered.sort_by_key(|preset| preset.name.to_lowercase());
        ordered
    }

    /// The currently active preset, if any.
    pub fn current_preset(&self) -> Option<Preset> {
        self.facade.current_preset()
    }

    /// Locate the first user preset with the given name. Factory presets are
    /// not searched.
    pub fn find_by_name(&self, name: &str) -> Option<Preset> {
        self.facade
            .user_presets()
            .iter()
            .find(|preset| preset.name == name)
            .cloned()
    }

    /// Locate the user preset with the given number. Factory presets are not
    /// searched.
    pub fn find_by_number(&self, number: i32) -> Option<Preset> {
        self.facade
            .user_presets()
            .iter()
            .find(|preset| preset.number == number)
            .cloned()
    }

    /// Clear the current-preset reference.
    pub fn clear_current(&mut self) {
        self.facade.set_current_preset(None);
    }

    /// Make the first user preset with the given name current. Clears the
    /// reference when nothing matches.
    pub fn make_current_by_name(&mut self, name: &str) {
        let found = self.find_by_name(name);
        tracing::debug!(name, found = ?found, "make_current_by_name");
        self.facade.set_current_preset(found);
    }

    /// Make the preset with the given number current. Unlike the name
    /// variant, a non-negative number indexes the factory list by position.
    /// Clears the reference when nothing matches.
    pub fn make_current_by_number(&mut self, number: i32) {
        let found = if number >= 0 {
            self.facade.factory_presets().get(number as usize).cloned()
        } else {
            self.find_by_number(number)
        };
        tracing::debug!(number, found = ?found, "make_current_by_number");
        self.facade.set_current_preset(found);
    }

    /// The number the next created preset will receive.
    ///
    /// Starts at the most negative of the existing user numbers (or −1 when
    /// there are none) and walks downward past contiguously occupied
    /// numbers. A gap left in the middle of the sequence is deliberately not
    /// reused: reusing it would change numbers already observed by hosts, so
    /// the only slots ever handed out are the one below the current bottom
    /// and the gap directly below a top-contiguous run.
    pub fn next_number(&self) -> i32 {
        let user = self.facade.user_presets();
        let mut number = user
            .iter()
            .map(|preset| preset.number)
            .min()
            .unwrap_or(-1)
            .min(-1);
        while user.iter().any(|preset| preset.number == number) {
            number -= 1;
        }
        number
    }

    /// Create a new user preset with the given name and make it current.
    ///
    /// The number is [`next_number`](Self::next_number). On a store failure
    /// the error propagates and the current-preset reference is untouched.
    pub fn create(&mut self, name: &str) -> Result<Preset> {
        let preset = Preset::new(self.next_number(), name);
        tracing::debug!(%preset, "create");
        self.facade.save_user_preset(&preset)?;
        self.facade.set_current_preset(Some(preset.clone()));
        Ok(preset)
    }

    /// Re-persist a user preset (presumably with new captured state) and
    /// make it current. Factory presets are immutable: a non-negative number
    /// is a silent no-op.
    pub fn update(&mut self, preset: &Preset) -> Result<()> {
        if preset.is_factory() {
            return Ok(());
        }
        tracing::debug!(%preset, "update");
        self.facade.save_user_preset(preset)?;
        self.facade.set_current_preset(Some(preset.clone()));
        Ok(())
    }

    /// Rename the current preset, keeping its number.
    ///
    /// No-op when there is no current preset or it is a factory preset.
    /// The old entry is deleted before the new one is written; a failure
    /// between the two steps can leave no preset at that number. Accepted
    /// risk window, not a transactional guarantee.
    pub fn rename_current(&mut self, name: &str) -> Result<()> {
        let Some(old) = self.facade.current_preset() else {
            return Ok(());
        };
        if old.is_factory() {
            return Ok(());
        }
        tracing::debug!(%old, new_name = name, "rename_current");
        let new = Preset::new(old.number, name);
        self.facade.delete_user_preset(&old)?;
        self.facade.save_user_preset(&new)?;
        self.facade.set_current_preset(Some(new));
        Ok(())
    }

    /// Delete the current preset.
    ///
    /// No-op when there is no current preset or it is a factory preset. The
    /// current reference is cleared before the store delete, so it never
    /// points at a just-deleted entry, even transiently.
    pub fn delete_current(&mut self) -> Result<()> {
        let Some(preset) = self.facade.current_preset() else {
            return Ok(());
        };
        if preset.is_factory() {
            return Ok(());
        }
        tracing::debug!(%preset, "delete_current");
        self.facade.set_current_preset(None);
        self.facade.delete_user_preset(&preset)?;
        Ok(())
    }
}
