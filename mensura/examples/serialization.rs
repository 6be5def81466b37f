//! Serializing and deserializing measurements.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

use mensura::{Dimension, LinearConverter, Measurement, Unit, UnitConverter};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Unit)]
#[unit(dimension)]
enum UnitMass {
    #[unit(symbol = "g")]
    Grams,
    #[unit(symbol = "kg")]
    Kilograms,
}

const GRAMS: LinearConverter = LinearConverter::new(0.001);
const KILOGRAMS: LinearConverter = LinearConverter::IDENTITY;

impl Dimension for UnitMass {
    fn converter(&self) -> &dyn UnitConverter {
        match self {
            Self::Grams => &GRAMS,
            Self::Kilograms => &KILOGRAMS,
        }
    }
    fn base_unit() -> Self {
        Self::Kilograms
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Parcel {
    label: String,
    weight: Measurement<UnitMass>,
}

#[derive(Serialize)]
struct Report {
    #[serde(serialize_with = "mensura::serde_with_symbol::serialize")]
    weight: Measurement<UnitMass>,
}

fn main() {
    println!("=== Measurement Serialization ===\n");

    // Value and unit travel together.
    let parcel = Parcel {
        label: "books".into(),
        weight: Measurement::new(1.5, UnitMass::Kilograms),
    };
    let json = serde_json::to_string(&parcel).unwrap();
    println!("   {:?} → {}", parcel, json);
    assert_eq!(json, r#"{"label":"books","weight":{"value":1.5,"unit":"Kilograms"}}"#);

    let restored: Parcel = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.weight.unit(), &UnitMass::Kilograms);
    assert_eq!(restored.weight, Measurement::new(1.5, UnitMass::Kilograms));
    assert!(restored.weight > Measurement::new(1_200.0, UnitMass::Grams));

    // Human-facing output with the symbol instead of the unit's own encoding.
    let report = Report {
        weight: Measurement::new(250.0, UnitMass::Grams),
    };
    let json = serde_json::to_string(&report).unwrap();
    println!("   report → {}", json);
    assert_eq!(json, r#"{"weight":{"value":250.0,"unit":"g"}}"#);
}
