//! Conversions between [`Measurement<U>`] and [`ExternalMeasurement`].
//!
//! ## Converting to the external form
//!
//! ```rust
//! use mensura_bridge::{ExternalMeasurement, MeasurementBridge};
//! use mensura_core::{Measurement, Unit};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Widgets;
//!
//! impl Unit for Widgets {
//!     fn symbol(&self) -> &str { "widgets" }
//! }
//!
//! let ext: ExternalMeasurement = Measurement::new(12.0, Widgets).into();
//! assert_eq!(ext.to_string(), "12 widgets");
//!
//! let back = Measurement::<Widgets>::from_external(&ext);
//! assert_eq!(back.value(), 12.0);
//! ```
//!
//! ## Error handling
//!
//! Bridging back fails when the external measurement carries a unit of another type:
//!
//! ```rust
//! use mensura_bridge::{BridgeError, ExternalMeasurement};
//! use mensura_core::{Measurement, Unit};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Widgets;
//! impl Unit for Widgets {
//!     fn symbol(&self) -> &str { "widgets" }
//! }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Gadgets;
//! impl Unit for Gadgets {
//!     fn symbol(&self) -> &str { "gadgets" }
//! }
//!
//! let ext = ExternalMeasurement::new(1.0, Gadgets);
//! let result: Result<Measurement<Widgets>, BridgeError> = ext.try_into();
//! assert!(matches!(result, Err(BridgeError::UnitTypeMismatch { .. })));
//! ```

use mensura_core::{Measurement, Unit};

use crate::error::{BridgeError, BridgeResult};
use crate::erased::ExternalMeasurement;

/// Two-way conversion between a typed measurement and [`ExternalMeasurement`].
pub trait MeasurementBridge: Sized {
    /// Erases the unit type. Always succeeds.
    fn to_external(&self) -> ExternalMeasurement;

    /// Recovers the typed measurement, or reports why it cannot.
    fn try_from_external(external: &ExternalMeasurement) -> BridgeResult<Self>;

    /// Recovers the typed measurement.
    ///
    /// # Panics
    ///
    /// Panics when `external` carries a unit of another type. Use
    /// [`conditionally_from_external`](Self::conditionally_from_external) or
    /// [`try_from_external`](Self::try_from_external) when that can happen.
    fn from_external(external: &ExternalMeasurement) -> Self {
        match Self::try_from_external(external) {
            Ok(measurement) => measurement,
            Err(err) => {
                log::error!("{} ({})", err, external);
                panic!("{}", err);
            }
        }
    }

    /// Writes the typed measurement into `result` and returns `true`, or clears `result` and returns `false`.
    fn conditionally_from_external(external: &ExternalMeasurement, result: &mut Option<Self>) -> bool {
        match Self::try_from_external(external) {
            Ok(measurement) => {
                *result = Some(measurement);
                true
            }
            Err(err) => {
                log::debug!("{}", err);
                *result = None;
                false
            }
        }
    }
}

impl<U: Unit> MeasurementBridge for Measurement<U> {
    fn to_external(&self) -> ExternalMeasurement {
        ExternalMeasurement::new(self.value(), self.unit().clone())
    }

    fn try_from_external(external: &ExternalMeasurement) -> BridgeResult<Self> {
        match external.downcast_unit::<U>() {
            Some(unit) => Ok(Measurement::new(external.value(), unit.clone())),
            None => Err(BridgeError::UnitTypeMismatch {
                expected: core::any::type_name::<U>(),
                found: external.unit().type_name(),
            }),
        }
    }
}

impl<U: Unit> From<Measurement<U>> for ExternalMeasurement {
    fn from(measurement: Measurement<U>) -> Self {
        let (value, unit) = measurement.into_parts();
        ExternalMeasurement::new(value, unit)
    }
}

impl<U: Unit> TryFrom<&ExternalMeasurement> for Measurement<U> {
    type Error = BridgeError;

    fn try_from(external: &ExternalMeasurement) -> Result<Self, Self::Error> {
        Self::try_from_external(external)
    }
}

impl<U: Unit> TryFrom<ExternalMeasurement> for Measurement<U> {
    type Error = BridgeError;

    fn try_from(external: ExternalMeasurement) -> Result<Self, Self::Error> {
        Self::try_from_external(&external)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensura_core::{Dimension, LinearConverter, UnitConverter};
    use mensura_derive::Unit;

    #[derive(Clone, Debug, PartialEq, Unit)]
    #[unit(dimension, crate = mensura_core)]
    struct UnitLength {
        symbol: &'static str,
        converter: LinearConverter,
    }

    const METERS: UnitLength = UnitLength {
        symbol: "m",
        converter: LinearConverter::IDENTITY,
    };
    const KILOMETERS: UnitLength = UnitLength {
        symbol: "km",
        converter: LinearConverter::new(1000.0),
    };

    impl Dimension for UnitLength {
        fn converter(&self) -> &dyn UnitConverter {
            &self.converter
        }
        fn base_unit() -> Self {
            METERS
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Unit)]
    #[unit(symbol = "s", crate = mensura_core)]
    struct Second;

    #[test]
    fn to_external_keeps_value_and_unit() {
        let ext = Measurement::new(2.5, KILOMETERS).to_external();
        assert_eq!(ext.value(), 2.5);
        assert_eq!(ext.symbol(), "km");
        assert_eq!(ext.downcast_unit::<UnitLength>(), Some(&KILOMETERS));
    }

    #[test]
    fn bridging_back_does_not_convert() {
        let ext = Measurement::new(2.5, KILOMETERS).to_external();
        let back = Measurement::<UnitLength>::from_external(&ext);
        assert_eq!(back.value(), 2.5);
        assert_eq!(back.unit(), &KILOMETERS);
    }

    #[test]
    fn conditional_bridge_success() {
        let ext = ExternalMeasurement::new(7.0, Second);
        let mut out = None;
        assert!(Measurement::<Second>::conditionally_from_external(&ext, &mut out));
        assert_eq!(out.map(|m| m.value()), Some(7.0));
    }

    #[test]
    fn conditional_bridge_failure_clears_result() {
        let ext = ExternalMeasurement::new(7.0, Second);
        let mut out = Some(Measurement::new(1.0, METERS));
        assert!(!Measurement::<UnitLength>::conditionally_from_external(&ext, &mut out));
        assert!(out.is_none());
    }

    #[test]
    fn try_from_external_reports_both_types() {
        let ext = ExternalMeasurement::new(1.0, Second);
        let err = Measurement::<UnitLength>::try_from_external(&ext).unwrap_err();
        let BridgeError::UnitTypeMismatch { expected, found } = err.clone();
        assert!(expected.ends_with("UnitLength"));
        assert!(found.ends_with("Second"));
        assert!(err
            .to_string()
            .starts_with("unable to bridge measurement: expected unit type"));
    }

    #[test]
    #[should_panic(expected = "unable to bridge measurement: expected unit type")]
    fn from_external_panics_on_mismatch() {
        let ext = ExternalMeasurement::new(1.0, Second);
        let _ = Measurement::<UnitLength>::from_external(&ext);
    }

    #[test]
    fn std_conversions() {
        let ext: ExternalMeasurement = Measurement::new(3.0, Second).into();
        let by_ref: Result<Measurement<Second>, _> = (&ext).try_into();
        assert_eq!(by_ref, Ok(Measurement::new(3.0, Second)));

        let by_value: Result<Measurement<UnitLength>, _> = ext.try_into();
        assert!(by_value.is_err());
    }
}
