//! Passing measurements through code that cannot name their unit type.
//!
//! ```bash
//! cargo run --example bridging --features bridge
//! ```

use mensura::bridge::{ExternalMeasurement, MeasurementBridge};
use mensura::{Measurement, Unit};

#[derive(Clone, Copy, Debug, PartialEq, Unit)]
enum Storage {
    #[unit(symbol = "B")]
    Bytes,
    #[unit(symbol = "blocks")]
    Blocks,
}

#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "req")]
struct Requests;

fn main() {
    let inbox: Vec<ExternalMeasurement> = vec![
        Measurement::new(4096.0, Storage::Bytes).into(),
        Measurement::new(12.0, Requests).into(),
        Measurement::new(8.0, Storage::Blocks).into(),
    ];

    let mut slot = None;
    for ext in &inbox {
        if Measurement::<Storage>::conditionally_from_external(ext, &mut slot) {
            println!("storage: {}", ext);
        } else {
            let requests = Measurement::<Requests>::from_external(ext);
            println!("requests: {}", requests);
            assert_eq!(requests.unit().symbol(), "req");
        }
    }
    assert_eq!(slot.map(|m| m.unit().symbol().to_owned()), Some("blocks".to_owned()));
}
