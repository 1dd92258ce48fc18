//! Parametric values and display transforms.
//!
//! A [`ParametricValue`] is a scalar in `[0, 1]` that a parameter exposes to
//! controls regardless of its native range or display curve. The named
//! transforms let a host present a linear slider for a non-linearly scaled
//! value (frequencies, gains) without the widget knowing anything about it.
//!
//! # Example
//!
//! ```
//! use legato_core::{DisplayTransform, ParametricValue};
//!
//! // A squared display curve: more resolution at the low end.
//! let t = DisplayTransform::Squared.to_parametric(ParametricValue::new(0.5));
//! let back = DisplayTransform::Squared.from_parametric(t);
//! assert!((back.value() - 0.5).abs() < 1e-6);
//! ```

/// A value in `[0, 1]`. Out-of-range inputs saturate silently; NaN maps to 0.
///
/// Instances are immutable; every transform returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametricValue(f32);

impl ParametricValue {
    /// Create a new parametric value, clamping to `[0, 1]`.
    #[inline]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// The raw scalar.
    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// `x²`
    #[inline]
    pub fn squared(self) -> Self {
        Self::new(self.0 * self.0)
    }

    /// `√x`
    #[inline]
    pub fn square_root(self) -> Self {
        Self::new(self.0.sqrt())
    }

    /// `x³`
    #[inline]
    pub fn cubed(self) -> Self {
        Self::new(self.0 * self.0 * self.0)
    }

    /// `∛x`
    #[inline]
    pub fn cube_root(self) -> Self {
        Self::new(self.0.cbrt())
    }

    /// `(10^x − 1) / 9`
    #[inline]
    pub fn exponential(self) -> Self {
        Self::new((10.0_f32.powf(self.0) - 1.0) / 9.0)
    }

    /// `log10(10x + 1) / log10(11)`
    #[inline]
    pub fn logarithmic(self) -> Self {
        Self::new((10.0 * self.0 + 1.0).log10() / 11.0_f32.log10())
    }
}

impl From<f32> for ParametricValue {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

/// How a stored parameter value maps to the linear `[0, 1]` view shown by a
/// control.
///
/// `to_parametric` converts a normalized stored value into its display
/// position; `from_parametric` applies the exact algebraic inverse, so
/// `from_parametric(to_parametric(x)) == x` within floating-point error for
/// every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum DisplayTransform {
    /// Identity mapping (default)
    #[default]
    Linear,
    /// Display position is the square of the normalized value
    Squared,
    /// Display position is the square root of the normalized value
    SquareRoot,
    /// Display position is the cube of the normalized value
    Cubed,
    /// Display position is the cube root of the normalized value
    CubeRoot,
    /// Logarithmic display curve, `log10(10x + 1) / log10(11)`
    Logarithmic,
    /// Exponential display curve, `(10^x − 1) / 9`
    Exponential,
}

impl DisplayTransform {
    /// Map a normalized stored value to its parametric display position.
    pub fn to_parametric(self, t: ParametricValue) -> ParametricValue {
        match self {
            Self::Linear => t,
            Self::Squared => t.squared(),
            Self::SquareRoot => t.square_root(),
            Self::Cubed => t.cubed(),
            Self::CubeRoot => t.cube_root(),
            Self::Logarithmic => t.logarithmic(),
            Self::Exponential => t.exponential(),
        }
    }

    /// Map a parametric display position back to the normalized stored value.
    ///
    /// Inverse of [`to_parametric`](Self::to_parametric). The logarithmic and
    /// exponential curves use their closed-form inverses (`(11^t − 1) / 10`
    /// and `log10(9t + 1)`) rather than each other, which keeps the round
    /// trip exact.
    pub fn from_parametric(self, t: ParametricValue) -> ParametricValue {
        match self {
            Self::Linear => t,
            Self::Squared => t.square_root(),
            Self::SquareRoot => t.squared(),
            Self::Cubed => t.cube_root(),
            Self::CubeRoot => t.cubed(),
            Self::Logarithmic => ParametricValue::new((11.0_f32.powf(t.value()) - 1.0) / 10.0),
            Self::Exponential => ParametricValue::new((9.0 * t.value() + 1.0).log10()),
        }
    }

    /// All variants, for exhaustive property tests.
    pub const ALL: [DisplayTransform; 7] = [
        Self::Linear,
        Self::Squared,
        Self::SquareRoot,
        Self::Cubed,
        Self::CubeRoot,
        Self::Logarithmic,
        Self::Exponential,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn construction_clamps() {
        assert_eq!(ParametricValue::new(-0.5).value(), 0.0);
        assert_eq!(ParametricValue::new(1.5).value(), 1.0);
        assert_eq!(ParametricValue::new(0.25).value(), 0.25);
        assert_eq!(ParametricValue::new(f32::NAN).value(), 0.0);
    }

    #[test]
    fn named_transforms() {
        assert_abs_diff_eq!(ParametricValue::new(0.5).squared().value(), 0.25);
        assert_abs_diff_eq!(ParametricValue::new(0.25).square_root().value(), 0.5);
        assert_abs_diff_eq!(ParametricValue::new(0.5).cubed().value(), 0.125);
        assert_abs_diff_eq!(
            ParametricValue::new(0.125).cube_root().value(),
            0.5,
            epsilon = 1e-6
        );

        // Endpoints are fixed points of every curve.
        assert_abs_diff_eq!(ParametricValue::new(0.0).exponential().value(), 0.0);
        assert_abs_diff_eq!(ParametricValue::new(1.0).exponential().value(), 1.0);
        assert_abs_diff_eq!(ParametricValue::new(0.0).logarithmic().value(), 0.0);
        assert_abs_diff_eq!(
            ParametricValue::new(1.0).logarithmic().value(),
            1.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn round_trip_all_transforms() {
        for transform in DisplayTransform::ALL {
            for i in 0..=100 {
                let x = i as f32 / 100.0;
                let t = transform.to_parametric(ParametricValue::new(x));
                let back = transform.from_parametric(t);
                assert_abs_diff_eq!(back.value(), x, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn exponential_matches_reference_values() {
        // (10^0.5 - 1) / 9
        assert_abs_diff_eq!(
            ParametricValue::new(0.5).exponential().value(),
            0.24029,
            epsilon = 1e-4
        );
        // log10(6) / log10(11)
        assert_abs_diff_eq!(
            ParametricValue::new(0.5).logarithmic().value(),
            0.74724,
            epsilon = 1e-4
        );
    }
}
