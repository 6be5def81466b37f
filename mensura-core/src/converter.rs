//! Unit converters.

use core::fmt::Debug;

/// Converts raw values between a unit and the base unit of its family.
///
/// Implementations are pure function objects: they hold their coefficients and nothing else. The two directions are
/// expected to be inverses of each other, but this is not checked.
pub trait UnitConverter: Debug + Send + Sync {
    /// Converts `value`, expressed in the converter's unit, into the base unit of the family.
    fn base_unit_value(&self, value: f64) -> f64;

    /// Converts `base_unit_value`, expressed in the base unit of the family, back into the converter's unit.
    fn value(&self, base_unit_value: f64) -> f64;
}

/// Affine converter: `base = value * coefficient + constant`.
///
/// Covers plain scaling units (`constant == 0.0`) as well as offset scales such as degrees Celsius.
///
/// ```rust
/// use mensura_core::{LinearConverter, UnitConverter};
///
/// let celsius = LinearConverter::with_constant(1.0, 273.15);
/// assert_eq!(celsius.base_unit_value(0.0), 273.15);
/// assert_eq!(celsius.value(273.15), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearConverter {
    coefficient: f64,
    constant: f64,
}

impl LinearConverter {
    /// Converter for the base unit itself.
    pub const IDENTITY: Self = Self::new(1.0);

    /// Pure scaling converter.
    #[inline]
    pub const fn new(coefficient: f64) -> Self {
        Self::with_constant(coefficient, 0.0)
    }

    /// Scaling converter with an additive offset applied after scaling.
    #[inline]
    pub const fn with_constant(coefficient: f64, constant: f64) -> Self {
        Self {
            coefficient,
            constant,
        }
    }

    /// Multiplier applied to a value before the offset.
    #[inline]
    pub const fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Offset added after scaling.
    #[inline]
    pub const fn constant(&self) -> f64 {
        self.constant
    }
}

impl UnitConverter for LinearConverter {
    #[inline]
    fn base_unit_value(&self, value: f64) -> f64 {
        value * self.coefficient + self.constant
    }

    #[inline]
    fn value(&self, base_unit_value: f64) -> f64 {
        (base_unit_value - self.constant) / self.coefficient
    }
}

/// Inverse-proportional converter: `base = reciprocal / value`.
///
/// Used by families whose units are inverses of each other, e.g. litres per 100 km versus miles per gallon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReciprocalConverter {
    reciprocal: f64,
}

impl ReciprocalConverter {
    /// Creates a converter with the given reciprocal factor.
    #[inline]
    pub const fn new(reciprocal: f64) -> Self {
        Self { reciprocal }
    }

    /// The factor divided by the value in both directions.
    #[inline]
    pub const fn reciprocal(&self) -> f64 {
        self.reciprocal
    }
}

impl UnitConverter for ReciprocalConverter {
    #[inline]
    fn base_unit_value(&self, value: f64) -> f64 {
        self.reciprocal / value
    }

    #[inline]
    fn value(&self, base_unit_value: f64) -> f64 {
        self.reciprocal / base_unit_value
    }
}
