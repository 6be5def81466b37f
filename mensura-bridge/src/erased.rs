//! Type-erased measurement representation.
//!
//! [`ExternalMeasurement`] is what crosses a boundary that cannot carry the unit's Rust type: a plain value plus a
//! shared, type-erased unit. The unit is never converted on the way out or back in.

use core::any::Any;
use core::fmt::{self, Debug, Display};
use std::sync::Arc;

use mensura_core::Unit;

/// Object-safe view of a [`Unit`].
///
/// Blanket-implemented for every `U: Unit`; there is no need to implement it by hand.
pub trait ErasedUnit: Debug + Send + Sync + 'static {
    /// Display symbol of the unit.
    fn symbol(&self) -> &str;

    /// The unit as `Any`, for downcasting back to its concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Rust type name of the concrete unit, used in error messages.
    fn type_name(&self) -> &'static str;

    /// Whether `other` is the same unit: same concrete type and equal by `PartialEq`.
    fn eq_erased(&self, other: &dyn ErasedUnit) -> bool;
}

impl<U: Unit> ErasedUnit for U {
    #[inline]
    fn symbol(&self) -> &str {
        Unit::symbol(self)
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        core::any::type_name::<U>()
    }

    fn eq_erased(&self, other: &dyn ErasedUnit) -> bool {
        other
            .as_any()
            .downcast_ref::<U>()
            .is_some_and(|other| other == self)
    }
}

/// A measurement whose unit type has been erased.
///
/// Cloning is cheap: the unit is shared behind an [`Arc`].
#[derive(Clone)]
pub struct ExternalMeasurement {
    value: f64,
    unit: Arc<dyn ErasedUnit>,
}

impl ExternalMeasurement {
    /// Creates an external measurement from a value and a concrete unit.
    pub fn new<U: Unit>(value: f64, unit: U) -> Self {
        Self {
            value,
            unit: Arc::new(unit),
        }
    }

    /// Creates an external measurement from an already erased unit.
    pub fn from_erased(value: f64, unit: Arc<dyn ErasedUnit>) -> Self {
        Self { value, unit }
    }

    /// The numeric value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The erased unit.
    #[inline]
    pub fn unit(&self) -> &Arc<dyn ErasedUnit> {
        &self.unit
    }

    /// Shorthand for `self.unit().symbol()`.
    #[inline]
    pub fn symbol(&self) -> &str {
        self.unit.symbol()
    }

    /// The carried unit as `U`, or `None` when it is of another type.
    #[inline]
    pub fn downcast_unit<U: Unit>(&self) -> Option<&U> {
        self.unit.as_any().downcast_ref::<U>()
    }
}

impl Debug for ExternalMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalMeasurement")
            .field("value", &self.value)
            .field("unit", &self.unit)
            .finish()
    }
}

impl Display for ExternalMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

/// Equal when the values are equal and the units are the same unit. No conversion takes place.
impl PartialEq for ExternalMeasurement {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.unit.eq_erased(other.unit.as_ref())
    }
}
