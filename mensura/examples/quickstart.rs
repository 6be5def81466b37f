//! Minimal end-to-end example: a convertible length family and an exact unit.

use mensura::{Dimension, LinearConverter, Measurement, PrecisionFormatter, Unit, UnitConverter};

#[derive(Clone, Debug, PartialEq, Unit)]
#[unit(dimension)]
struct UnitLength {
    symbol: &'static str,
    converter: LinearConverter,
}

impl UnitLength {
    const METERS: Self = Self {
        symbol: "m",
        converter: LinearConverter::IDENTITY,
    };
    const KILOMETERS: Self = Self {
        symbol: "km",
        converter: LinearConverter::new(1_000.0),
    };
    const MILES: Self = Self {
        symbol: "mi",
        converter: LinearConverter::new(1_609.344),
    };
}

impl Dimension for UnitLength {
    fn converter(&self) -> &dyn UnitConverter {
        &self.converter
    }
    fn base_unit() -> Self {
        Self::METERS
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "laps")]
struct Laps;

fn main() {
    let run = Measurement::new(5.0, UnitLength::KILOMETERS) + Measurement::new(400.0, UnitLength::METERS);
    assert_eq!(run.to_string(), "5400 m");

    let miles = run.converted_to(UnitLength::MILES);
    assert_eq!(miles.formatted(&PrecisionFormatter::new(2)), "3.36 mi");
    assert!(miles > Measurement::new(5.0, UnitLength::KILOMETERS));

    let laps = Measurement::new(12.0, Laps) + Measurement::new(1.5, Laps);
    assert_eq!(laps.to_string(), "13.5 laps");
    assert!(laps != run);
}
