//! Value-to-text formatting for labels and text fields.

use legato_core::Parameter;

/// Formatting attributes and formatters for presenting parameter values.
///
/// The defaults produce `"0.500"`-style display text with an optional unit
/// suffix, and a shorter `"0.50"` form while a value is being edited in a
/// text field.
pub trait ValueFormatting {
    /// The string inserted between the value and the suffix.
    fn unit_separator(&self) -> &str {
        " "
    }

    /// The suffix appended to a formatted display value.
    fn suffix(&self) -> String {
        String::new()
    }

    /// Format a value for display next to a control.
    fn display_value(&self, value: f32) -> String {
        format!("{value:.3}{}", self.suffix())
    }

    /// Format a value for editing in a text field (no suffix).
    fn editing_value(&self, value: f32) -> String {
        format!("{value:.2}")
    }
}

impl ValueFormatting for Parameter {
    fn suffix(&self) -> String {
        match self.unit_name() {
            Some(name) if !name.is_empty() => format!("{}{}", self.unit_separator(), name),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legato_core::{ParameterDefinition, ParameterUnit};

    #[test]
    fn display_value_includes_unit_name() {
        let param = Parameter::new(
            ParameterDefinition::float("freq", "Frequency", 1, 20.0, 20_000.0, ParameterUnit::Hertz)
                .with_unit_name("Hz"),
        );
        assert_eq!(param.display_value(440.0), "440.000 Hz");
        assert_eq!(param.editing_value(440.0), "440.00");
    }

    #[test]
    fn display_value_without_unit_name() {
        let param = Parameter::new(ParameterDefinition::percent("depth", "Depth", 2));
        assert_eq!(param.display_value(12.5), "12.500");
    }
}
