//! Measurement type and its implementations.

use crate::dimension::Dimension;
use crate::format::MeasurementFormatter;
use crate::unit::{same_unit, Unit};
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result};
use core::hash::{Hash, Hasher};
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value paired with a unit.
///
/// `Measurement<U>` stores an `f64` magnitude and a unit value of type `U`. The unit is fixed for the life of the
/// measurement; only [`Measurement::convert_to`] replaces it, together with the value.
///
/// Arithmetic depends on what the unit can do:
///
/// - For plain [`Unit`]s, `+` and `-` require identical units and panic otherwise.
/// - For [`Dimension`] units, `+` and `-` between different units of the same family convert both operands to the
///   family's base unit, and the result is expressed **in the base unit**.
///
/// # Examples
///
/// ```rust
/// use mensura_core::{Measurement, Unit};
///
/// #[derive(Clone, Debug, PartialEq)]
/// pub enum Fruit {
///     Apple,
///     Orange,
/// }
///
/// impl Unit for Fruit {
///     fn symbol(&self) -> &str {
///         match self {
///             Fruit::Apple => "apple",
///             Fruit::Orange => "orange",
///         }
///     }
/// }
///
/// let x = Measurement::new(5.0, Fruit::Apple);
/// let y = Measurement::new(3.0, Fruit::Apple);
/// let sum = x + y;
/// assert_eq!(sum.value(), 8.0);
/// assert_eq!(sum.to_string(), "8 apple");
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement<U: Unit> {
    value: f64,
    unit: U,
}

impl<U: Unit> Measurement<U> {
    /// Creates a new measurement. Any `f64` is accepted, including NaN and infinities.
    #[inline]
    pub const fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit.
    #[inline]
    pub const fn unit(&self) -> &U {
        &self.unit
    }

    /// Replaces the numeric value, keeping the unit.
    #[inline]
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Mutable access to the numeric value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut f64 {
        &mut self.value
    }

    /// Splits the measurement into its value and unit.
    #[inline]
    pub fn into_parts(self) -> (f64, U) {
        (self.value, self.unit)
    }

    /// Renders the measurement with an external formatter.
    ///
    /// Best effort: if the formatter declines, the result is an empty string.
    pub fn formatted(&self, formatter: &dyn MeasurementFormatter) -> String {
        formatter
            .format(self.value, self.unit.symbol())
            .unwrap_or_else(|| {
                log::debug!("formatter produced no output for {}", self);
                String::new()
            })
    }

    fn combine(self, rhs: Self, verb: &str, op: fn(f64, f64) -> f64) -> Self {
        if self.unit == rhs.unit {
            return Self::new(op(self.value, rhs.value), self.unit);
        }

        let in_base = match (self.unit.as_dimension(), rhs.unit.as_dimension()) {
            (Some(lhs), Some(rhs_dim)) => Some((
                op(lhs.to_base(self.value), rhs_dim.to_base(rhs.value)),
                lhs.base_unit(),
            )),
            _ => None,
        };

        match in_base {
            Some((value, base)) => {
                log::trace!(
                    "{} {} and {} in base unit {}",
                    verb,
                    self,
                    rhs,
                    base.symbol()
                );
                Self::new(value, base)
            }
            None => {
                log::error!(
                    "attempt to {} measurements with non-equal units: {} and {}",
                    verb,
                    self,
                    rhs
                );
                panic!(
                    "attempt to {} measurements with non-equal units ({} and {})",
                    verb,
                    self.unit.symbol(),
                    rhs.unit.symbol()
                );
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion (dimension units only)
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Dimension> Measurement<U> {
    /// Returns this measurement expressed in `other`.
    ///
    /// The conversion always goes through the family's base unit.
    ///
    /// # Panics
    ///
    /// With debug assertions enabled, panics when the unit's [`Unit::as_dimension`] returns `None`.
    ///
    /// ```rust
    /// use mensura_core::{Dimension, DimensionView, LinearConverter, Measurement, Unit, UnitConverter};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// pub struct UnitLength(&'static str, LinearConverter);
    ///
    /// const METERS: UnitLength = UnitLength("m", LinearConverter::IDENTITY);
    /// const KILOMETERS: UnitLength = UnitLength("km", LinearConverter::new(1000.0));
    ///
    /// impl Unit for UnitLength {
    ///     fn symbol(&self) -> &str { self.0 }
    ///     fn as_dimension(&self) -> Option<DimensionView<'_, Self>> { Some(DimensionView::from(self)) }
    /// }
    ///
    /// impl Dimension for UnitLength {
    ///     fn converter(&self) -> &dyn UnitConverter { &self.1 }
    ///     fn base_unit() -> Self { METERS }
    /// }
    ///
    /// let km = Measurement::new(1.25, KILOMETERS);
    /// let m = km.converted_to(METERS);
    /// assert_eq!(m.value(), 1250.0);
    /// assert_eq!(m.unit(), &METERS);
    /// ```
    pub fn converted_to(&self, other: U) -> Self {
        debug_assert!(
            self.unit.as_dimension().is_some(),
            "unit `{}` implements Dimension but as_dimension() returns None",
            self.unit.symbol()
        );

        if self.unit == other {
            return Self::new(self.value, other);
        }

        let base = self.unit.converter().base_unit_value(self.value);
        if other == U::base_unit() {
            Self::new(base, other)
        } else {
            let value = other.converter().value(base);
            Self::new(value, other)
        }
    }

    /// Converts this measurement to `other` in place, replacing both value and unit.
    #[inline]
    pub fn convert_to(&mut self, other: U) {
        *self = self.converted_to(other);
    }

    /// Returns this measurement expressed in the family's base unit.
    #[inline]
    pub fn in_base_unit(&self) -> Self {
        self.converted_to(U::base_unit())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display and hashing
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Display for Measurement<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

/// Hashes the value only. Measurements that differ only in their unit collide, which the `Hash` contract allows.
///
/// Measurements in the same unit that compare equal hash equal. Measurements that are equal only after conversion
/// (`1 km == 1000 m`) do not: hash [`in_base_unit`](Measurement::in_base_unit) when mixed units share a map key.
impl<U: Unit> Hash for Measurement<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0, so they must hash alike.
        let value = if self.value == 0.0 { 0.0 } else { self.value };
        value.to_bits().hash(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<A: Unit, B: Unit> PartialEq<Measurement<B>> for Measurement<A> {
    /// Same unit: compares values. Same family: compares base-unit values. Anything else is unequal.
    fn eq(&self, other: &Measurement<B>) -> bool {
        if same_unit(&self.unit, &other.unit) {
            return self.value == other.value;
        }

        match (self.unit.as_dimension(), other.unit.as_dimension()) {
            (Some(lhs), Some(rhs)) if lhs.shares_base_with(&rhs) => {
                lhs.to_base(self.value) == rhs.to_base(other.value)
            }
            _ => false,
        }
    }
}

impl<A: Unit, B: Unit> PartialOrd<Measurement<B>> for Measurement<A> {
    /// # Panics
    ///
    /// Panics when the units are neither identical nor members of the same dimension.
    fn partial_cmp(&self, other: &Measurement<B>) -> Option<Ordering> {
        if same_unit(&self.unit, &other.unit) {
            return self.value.partial_cmp(&other.value);
        }

        match (self.unit.as_dimension(), other.unit.as_dimension()) {
            (Some(lhs), Some(rhs)) if lhs.shares_base_with(&rhs) => lhs
                .to_base(self.value)
                .partial_cmp(&rhs.to_base(other.value)),
            _ => {
                log::error!(
                    "attempt to compare measurements with non-equal dimensions: {} and {}",
                    self,
                    other
                );
                panic!(
                    "attempt to compare measurements with non-equal dimensions ({} and {})",
                    self.unit.symbol(),
                    other.unit.symbol()
                );
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Measurement<U> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when the units differ and are not members of a dimension.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.combine(rhs, "add", |a, b| a + b)
    }
}

impl<U: Unit> Sub for Measurement<U> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when the units differ and are not members of a dimension.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.combine(rhs, "subtract", |a, b| a - b)
    }
}

impl<U: Unit> Mul<f64> for Measurement<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.unit)
    }
}

impl<U: Unit> Mul<Measurement<U>> for f64 {
    type Output = Measurement<U>;
    #[inline]
    fn mul(self, rhs: Measurement<U>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit> Div<f64> for Measurement<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.unit)
    }
}

impl<U: Unit> Div<Measurement<U>> for f64 {
    type Output = Measurement<U>;
    #[inline]
    fn div(self, rhs: Measurement<U>) -> Self::Output {
        Measurement::new(self / rhs.value, rhs.unit)
    }
}

impl<U: Unit> Neg for Measurement<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

/// Serde helper for units that are not themselves serializable.
///
/// Serializes a measurement as `{"value": <f64>, "unit": "<symbol>"}`. Use it with `serialize_with`; there is no
/// matching deserializer because symbols are not parsed back into units.
///
/// ```rust
/// use mensura_core::{Measurement, Unit};
/// use serde::Serialize;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Byte;
/// impl Unit for Byte {
///     fn symbol(&self) -> &str { "B" }
/// }
///
/// #[derive(Serialize)]
/// struct Upload {
///     #[serde(serialize_with = "mensura_core::serde_with_symbol::serialize")]
///     size: Measurement<Byte>,
/// }
///
/// let json = serde_json::to_string(&Upload { size: Measurement::new(512.0, Byte) }).unwrap();
/// assert_eq!(json, r#"{"size":{"value":512.0,"unit":"B"}}"#);
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_symbol {
    use super::*;
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Measurement<U>` as a struct with `value` and `unit` (symbol) fields.
    pub fn serialize<U, S>(measurement: &Measurement<U>, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Measurement", 2)?;
        state.serialize_field("value", &measurement.value())?;
        state.serialize_field("unit", measurement.unit().symbol())?;
        state.end()
    }
}
