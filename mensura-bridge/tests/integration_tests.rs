//! Integration tests for mensura-bridge.
//!
//! These tests exercise the bridge from a consumer's perspective.

use approx::assert_relative_eq;
use mensura_bridge::{BridgeError, ExternalMeasurement, MeasurementBridge};
use mensura_core::{Dimension, LinearConverter, Measurement, Unit, UnitConverter};
use std::sync::Arc;
use std::thread;

#[derive(Clone, Debug, PartialEq, mensura_derive::Unit)]
#[unit(dimension, crate = mensura_core)]
struct UnitDuration {
    symbol: &'static str,
    converter: LinearConverter,
}

const SECONDS: UnitDuration = UnitDuration {
    symbol: "s",
    converter: LinearConverter::IDENTITY,
};
const HOURS: UnitDuration = UnitDuration {
    symbol: "h",
    converter: LinearConverter::new(3600.0),
};

impl Dimension for UnitDuration {
    fn converter(&self) -> &dyn UnitConverter {
        &self.converter
    }
    fn base_unit() -> Self {
        SECONDS
    }
}

#[derive(Clone, Debug, PartialEq, mensura_derive::Unit)]
#[unit(crate = mensura_core)]
enum Coin {
    #[unit(symbol = "gold")]
    Gold,
    #[unit(symbol = "silver")]
    Silver,
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn test_dimension_round_trip_keeps_unit() {
    let original = Measurement::new(1.5, HOURS);
    let ext: ExternalMeasurement = original.clone().into();
    let back: Measurement<UnitDuration> = ext.try_into().unwrap();

    assert_eq!(back.unit(), &HOURS);
    assert_eq!(back.value(), 1.5);
    assert_relative_eq!(back.converted_to(SECONDS).value(), 5400.0);
}

#[test]
fn test_exact_unit_round_trip() {
    let ext = Measurement::new(12.0, Coin::Silver).to_external();
    assert_eq!(ext.to_string(), "12 silver");

    let back = Measurement::<Coin>::from_external(&ext);
    assert_eq!(back.unit(), &Coin::Silver);
    assert_eq!(back.value(), 12.0);
}

// =============================================================================
// Heterogeneous collections
// =============================================================================

#[test]
fn test_sorting_out_a_mixed_batch() {
    let batch = vec![
        Measurement::new(2.0, HOURS).to_external(),
        Measurement::new(3.0, Coin::Gold).to_external(),
        Measurement::new(900.0, SECONDS).to_external(),
        Measurement::new(4.0, Coin::Gold).to_external(),
    ];

    let mut total = Measurement::new(0.0, SECONDS);
    let mut gold = Measurement::new(0.0, Coin::Gold);
    let mut slot = None;

    for ext in &batch {
        if Measurement::<UnitDuration>::conditionally_from_external(ext, &mut slot) {
            if let Some(duration) = slot.take() {
                total = total + duration;
            }
        } else if let Ok(coins) = Measurement::<Coin>::try_from_external(ext) {
            gold = gold + coins;
        }
    }

    assert_relative_eq!(total.value(), 8100.0);
    assert_eq!(total.unit(), &SECONDS);
    assert_eq!(gold, Measurement::new(7.0, Coin::Gold));
}

#[test]
fn test_mismatch_error_names_types() {
    let ext = Measurement::new(1.0, Coin::Gold).to_external();
    let err = Measurement::<UnitDuration>::try_from_external(&ext).unwrap_err();

    match err {
        BridgeError::UnitTypeMismatch { expected, found } => {
            assert!(expected.contains("UnitDuration"));
            assert!(found.contains("Coin"));
        }
    }
}

#[test]
#[should_panic(expected = "unable to bridge measurement")]
fn test_unconditional_bridge_panics() {
    let ext = Measurement::new(1.0, Coin::Gold).to_external();
    let _ = Measurement::<UnitDuration>::from_external(&ext);
}

// =============================================================================
// Threads
// =============================================================================

#[test]
fn test_external_measurements_cross_threads() {
    let shared = Arc::new(vec![
        Measurement::new(1.0, HOURS).to_external(),
        Measurement::new(30.0, SECONDS).to_external(),
    ]);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                shared
                    .iter()
                    .map(|ext| Measurement::<UnitDuration>::from_external(ext).in_base_unit().value())
                    .sum::<f64>()
            })
        })
        .collect();

    for handle in handles {
        assert_relative_eq!(handle.join().unwrap(), 3630.0);
    }
}

#[test]
fn test_symbols_survive_erasure() {
    let ext = Measurement::new(1.0, Coin::Gold).to_external();
    assert_eq!(ext.symbol(), Coin::Gold.symbol());
}
