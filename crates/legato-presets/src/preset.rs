//! Preset identity.

/// A named snapshot of parameter state.
///
/// Only identity lives here; the snapshot payload is an opaque blob owned by
/// whatever store implements [`PresetsFacade`](crate::PresetsFacade).
/// Numbering convention: `number >= 0` is a read-only factory preset indexed
/// by position, `number < 0` is a mutable user preset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Preset {
    /// Integer identity. Sign determines factory vs. user.
    pub number: i32,
    /// Display name. Not required to be unique, but lookup-by-name returns
    /// the first match.
    pub name: String,
}

impl Preset {
    pub fn new(number: i32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
        }
    }

    /// Whether this is an immutable factory preset.
    pub fn is_factory(&self) -> bool {
        self.number >= 0
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' ({})", self.name, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_is_non_negative() {
        assert!(Preset::new(0, "Init").is_factory());
        assert!(Preset::new(3, "Bright").is_factory());
        assert!(!Preset::new(-1, "Mine").is_factory());
    }
}
