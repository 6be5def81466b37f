//! Dimension trait and the type-erased dimension view.

use crate::converter::UnitConverter;
use crate::unit::{same_unit, Unit};
use core::any::TypeId;
use core::fmt::{Debug, Formatter, Result};

/// A **dimension** is a family of units convertible to one canonical base unit (length, mass, temperature …).
///
/// Every unit of the family carries a [`UnitConverter`] to and from the base unit. Conversions between two siblings
/// always route through the base, so all values of one `Dimension` type must agree on [`Dimension::base_unit`].
///
/// Implementors must also override [`Unit::as_dimension`] to return `Some(DimensionView::from(self))`; the
/// `#[derive(Unit)]` macro does this with `#[unit(dimension)]`. Without the override, `+`, `-`, `==` and `<` treat
/// the units as exact and never convert.
///
/// The base unit's symbol names the family. Units of two different `Dimension` types belong to the same family when
/// their base units carry the same symbol, and then compare through their base values.
///
/// # Panics
///
/// With debug assertions enabled, [`Measurement::converted_to`](crate::Measurement::converted_to) panics when
/// [`Unit::as_dimension`] returns `None` for a `Dimension` unit.
///
/// ```rust
/// use mensura_core::{Dimension, DimensionView, LinearConverter, Unit, UnitConverter};
///
/// #[derive(Clone, Debug, PartialEq)]
/// pub struct UnitLength {
///     symbol: &'static str,
///     converter: LinearConverter,
/// }
///
/// impl UnitLength {
///     pub const METERS: Self = Self { symbol: "m", converter: LinearConverter::IDENTITY };
///     pub const KILOMETERS: Self = Self { symbol: "km", converter: LinearConverter::new(1000.0) };
/// }
///
/// impl Unit for UnitLength {
///     fn symbol(&self) -> &str { self.symbol }
///     fn as_dimension(&self) -> Option<DimensionView<'_, Self>> { Some(DimensionView::from(self)) }
/// }
///
/// impl Dimension for UnitLength {
///     fn converter(&self) -> &dyn UnitConverter { &self.converter }
///     fn base_unit() -> Self { Self::METERS }
/// }
///
/// assert_eq!(UnitLength::KILOMETERS.converter().base_unit_value(2.0), 2000.0);
/// ```
pub trait Dimension: Unit {
    /// Converter between this unit and [`Dimension::base_unit`].
    fn converter(&self) -> &dyn UnitConverter;

    /// Canonical unit of the family; identical for every value of the implementing type.
    fn base_unit() -> Self;
}

/// Borrowed view of a unit's dimension capabilities.
///
/// Returned by [`Unit::as_dimension`]. It lets generic code convert to the base unit and compare families without
/// knowing statically whether a unit type implements [`Dimension`].
pub struct DimensionView<'a, U> {
    converter: &'a dyn UnitConverter,
    base_unit: fn() -> U,
}

impl<'a, U: Unit> DimensionView<'a, U> {
    /// Converter of the viewed unit.
    #[inline]
    pub fn converter(&self) -> &'a dyn UnitConverter {
        self.converter
    }

    /// Base unit of the viewed unit's family.
    #[inline]
    pub fn base_unit(&self) -> U {
        (self.base_unit)()
    }

    /// Converts `value`, expressed in the viewed unit, into the family's base unit.
    #[inline]
    pub fn to_base(&self, value: f64) -> f64 {
        self.converter.base_unit_value(value)
    }

    /// Returns `true` when both views belong to the same family.
    ///
    /// Views of one unit type compare their base units by identity. Views of different unit types match when their
    /// base units have the same symbol.
    pub fn shares_base_with<V: Unit>(&self, other: &DimensionView<'_, V>) -> bool {
        let (lhs, rhs) = (self.base_unit(), other.base_unit());
        if TypeId::of::<U>() == TypeId::of::<V>() {
            same_unit(&lhs, &rhs)
        } else {
            lhs.symbol() == rhs.symbol()
        }
    }
}

impl<'a, D: Dimension> From<&'a D> for DimensionView<'a, D> {
    #[inline]
    fn from(unit: &'a D) -> Self {
        Self {
            converter: unit.converter(),
            base_unit: D::base_unit,
        }
    }
}

impl<U> Clone for DimensionView<'_, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for DimensionView<'_, U> {}

impl<U> Debug for DimensionView<'_, U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("DimensionView")
            .field("converter", &self.converter)
            .field("family", &core::any::type_name::<U>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::LinearConverter;

    #[derive(Clone, Debug, PartialEq)]
    struct Mass {
        symbol: &'static str,
        converter: LinearConverter,
    }

    const GRAMS: Mass = Mass {
        symbol: "g",
        converter: LinearConverter::new(1e-3),
    };
    const KILOGRAMS: Mass = Mass {
        symbol: "kg",
        converter: LinearConverter::IDENTITY,
    };

    impl Unit for Mass {
        fn symbol(&self) -> &str {
            self.symbol
        }
        fn as_dimension(&self) -> Option<DimensionView<'_, Self>> {
            Some(DimensionView::from(self))
        }
    }

    impl Dimension for Mass {
        fn converter(&self) -> &dyn UnitConverter {
            &self.converter
        }
        fn base_unit() -> Self {
            KILOGRAMS
        }
    }

    // Same shape, separate family.
    #[derive(Clone, Debug, PartialEq)]
    struct Charge(LinearConverter);

    impl Unit for Charge {
        fn symbol(&self) -> &str {
            "C"
        }
        fn as_dimension(&self) -> Option<DimensionView<'_, Self>> {
            Some(DimensionView::from(self))
        }
    }

    impl Dimension for Charge {
        fn converter(&self) -> &dyn UnitConverter {
            &self.0
        }
        fn base_unit() -> Self {
            Charge(LinearConverter::IDENTITY)
        }
    }

    #[test]
    fn view_converts_to_base() {
        let view = GRAMS.as_dimension().unwrap();
        assert_eq!(view.to_base(500.0), 0.5);
        assert_eq!(view.base_unit(), KILOGRAMS);
    }

    #[test]
    fn siblings_share_a_base() {
        let g = GRAMS.as_dimension().unwrap();
        let kg = KILOGRAMS.as_dimension().unwrap();
        assert!(g.shares_base_with(&kg));
        assert!(kg.shares_base_with(&g));
    }

    #[test]
    fn unrelated_families_do_not_share_a_base() {
        let g = GRAMS.as_dimension().unwrap();
        let coulomb = Charge(LinearConverter::IDENTITY);
        let c = coulomb.as_dimension().unwrap();
        assert!(!g.shares_base_with(&c));
    }

    // Second mass type sharing the kilogram base.
    #[derive(Clone, Debug, PartialEq)]
    struct Weight(&'static str, LinearConverter);

    impl Unit for Weight {
        fn symbol(&self) -> &str {
            self.0
        }
        fn as_dimension(&self) -> Option<DimensionView<'_, Self>> {
            Some(DimensionView::from(self))
        }
    }

    impl Dimension for Weight {
        fn converter(&self) -> &dyn UnitConverter {
            &self.1
        }
        fn base_unit() -> Self {
            Weight("kg", LinearConverter::IDENTITY)
        }
    }

    #[test]
    fn families_of_different_types_match_on_base_symbol() {
        let g = GRAMS.as_dimension().unwrap();
        let pound = Weight("lb", LinearConverter::new(0.453_592_37));
        let lb = pound.as_dimension().unwrap();
        assert!(g.shares_base_with(&lb));
        assert!(lb.shares_base_with(&g));

        let coulomb = Charge(LinearConverter::IDENTITY);
        assert!(!lb.shares_base_with(&coulomb.as_dimension().unwrap()));
    }

    #[test]
    fn view_is_copy() {
        let view = GRAMS.as_dimension().unwrap();
        let copy = view;
        assert_eq!(view.to_base(1.0), copy.to_base(1.0));
    }
}
