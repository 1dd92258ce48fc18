//! Static parameter attributes published by an audio engine.
//!
//! A [`ParameterDefinition`] carries everything about a parameter that never
//! changes after the engine publishes its parameter set: identity, range,
//! unit, and display curve. The live value lives in
//! [`Parameter`](crate::Parameter).

use crate::parametric::DisplayTransform;

/// The unit of a parameter value. Presentation metadata only; has no effect
/// on the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum ParameterUnit {
    #[default]
    Generic,
    /// `range = [0, 1]`, a value `>= 0.5` denotes "true"
    Boolean,
    Percent,
    Seconds,
    Milliseconds,
    Hertz,
    Decibels,
    /// Named via [`ParameterDefinition::unit_name`]
    Custom,
}

/// Attributes used to create a [`Parameter`](crate::Parameter) in a
/// [`ParameterTree`](crate::ParameterTree).
#[derive(Debug, Clone)]
pub struct ParameterDefinition {
    /// Unique identifier for the parameter. Should never change across
    /// releases of the owning engine.
    pub identifier: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Unique, stable address within the parameter tree.
    pub address: u64,
    /// Inclusive minimum value.
    pub min: f32,
    /// Inclusive maximum value. Must be greater than `min`.
    pub max: f32,
    /// Initial value; clamped to the range at tree construction.
    pub default_value: f32,
    /// The unit type of the value.
    pub unit: ParameterUnit,
    /// Custom unit name, shown after the value by formatters.
    pub unit_name: Option<String>,
    /// When true, the engine should ramp to new values over a few samples to
    /// avoid discontinuities. Advisory; the engine owns the ramping.
    pub ramping: bool,
    /// Display curve applied when presenting the value on a linear control.
    pub transform: DisplayTransform,
}

impl ParameterDefinition {
    /// Describe a float parameter over a known range of values.
    pub fn float(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        address: u64,
        min: f32,
        max: f32,
        unit: ParameterUnit,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            address,
            min,
            max,
            default_value: min,
            unit,
            unit_name: None,
            ramping: true,
            transform: DisplayTransform::Linear,
        }
    }

    /// Describe a percentage parameter between 0 and 100.
    pub fn percent(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        address: u64,
    ) -> Self {
        Self::float(identifier, display_name, address, 0.0, 100.0, ParameterUnit::Percent)
    }

    /// Describe a boolean parameter with `range = [0, 1]`.
    pub fn boolean(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        address: u64,
    ) -> Self {
        let mut def = Self::float(identifier, display_name, address, 0.0, 1.0, ParameterUnit::Boolean);
        def.ramping = false;
        def
    }

    /// Set the display curve.
    pub fn with_transform(mut self, transform: DisplayTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the initial value.
    pub fn with_default(mut self, value: f32) -> Self {
        self.default_value = value;
        self
    }

    /// Set a custom unit name.
    pub fn with_unit_name(mut self, name: impl Into<String>) -> Self {
        self.unit_name = Some(name.into());
        self
    }

    /// Whether this definition describes a boolean parameter.
    pub fn is_boolean(&self) -> bool {
        self.unit == ParameterUnit::Boolean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_definition_defaults() {
        let def = ParameterDefinition::float("cutoff", "Cutoff", 1, 20.0, 20_000.0, ParameterUnit::Hertz)
            .with_transform(DisplayTransform::Logarithmic)
            .with_default(1_000.0);
        assert_eq!(def.address, 1);
        assert_eq!(def.min, 20.0);
        assert_eq!(def.max, 20_000.0);
        assert_eq!(def.default_value, 1_000.0);
        assert_eq!(def.transform, DisplayTransform::Logarithmic);
        assert!(def.ramping);
        assert!(!def.is_boolean());
    }

    #[test]
    fn boolean_definition() {
        let def = ParameterDefinition::boolean("bypass", "Bypass", 7);
        assert_eq!(def.min, 0.0);
        assert_eq!(def.max, 1.0);
        assert!(!def.ramping);
        assert!(def.is_boolean());
    }
}
