//! Unit trait and unit identity.

use crate::dimension::DimensionView;
use core::any::Any;
use core::fmt::Debug;

/// Trait implemented by every **unit** type.
///
/// A unit is a runtime value: `Meters` and `Kilometers` are typically two values of one `UnitLength` type, which
/// is what lets [`Measurement`](crate::Measurement) tell them apart at runtime and convert between them.
///
/// * `symbol` is the printable string (e.g. `"m"` or `"km"`), shown by [`core::fmt::Display`].
/// * `PartialEq` is the unit identity. It must be exact: two units are the same unit iff they are equal.
/// * [`as_dimension`](Unit::as_dimension) is the capability query for convertible units. Types implementing
///   [`Dimension`](crate::Dimension) must return `Some`; plain exact units keep the default `None`.
///
/// # Invariants
///
/// - Units are immutable once constructed and may be shared read-only between threads.
/// - Every value of a given [`Dimension`](crate::Dimension) type belongs to the same family, with the same base unit.
pub trait Unit: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// Printable symbol.
    fn symbol(&self) -> &str;

    /// Returns the convertible view of this unit, if it belongs to a dimension.
    #[inline]
    fn as_dimension(&self) -> Option<DimensionView<'_, Self>> {
        None
    }
}

/// Unit identity across two possibly different unit types.
///
/// Units of different Rust types are never the same unit; units of the same type are compared with `PartialEq`.
///
/// ```rust
/// use mensura_core::{same_unit, Unit};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Pixel;
/// impl Unit for Pixel {
///     fn symbol(&self) -> &str { "px" }
/// }
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Point;
/// impl Unit for Point {
///     fn symbol(&self) -> &str { "pt" }
/// }
///
/// assert!(same_unit(&Pixel, &Pixel));
/// assert!(!same_unit(&Pixel, &Point));
/// ```
#[inline]
pub fn same_unit<A: Unit, B: Unit>(a: &A, b: &B) -> bool {
    (b as &dyn Any).downcast_ref::<A>().is_some_and(|b| a == b)
}
