//! Bridging between typed `mensura` measurements and a type-erased external representation.
//!
//! `mensura-bridge` lets a [`Measurement<U>`](mensura_core::Measurement) travel through code that cannot name `U`:
//! plugin boundaries, heterogeneous collections, message queues inside one process. The external form,
//! [`ExternalMeasurement`], carries the value and the unit behind an `Arc<dyn ErasedUnit>`.
//!
//! # Quick Start
//!
//! ```rust
//! use mensura_bridge::{ExternalMeasurement, MeasurementBridge};
//! use mensura_core::{Measurement, Unit};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Bytes;
//! impl Unit for Bytes {
//!     fn symbol(&self) -> &str { "B" }
//! }
//!
//! let ext = Measurement::new(512.0, Bytes).to_external();
//!
//! let mut out = None;
//! assert!(Measurement::<Bytes>::conditionally_from_external(&ext, &mut out));
//! assert_eq!(out.map(|m| m.value()), Some(512.0));
//! ```
//!
//! # Error Handling
//!
//! Recovering a typed measurement comes in three flavours:
//!
//! - [`MeasurementBridge::from_external`] panics on a unit type mismatch;
//! - [`MeasurementBridge::conditionally_from_external`] reports it through its `bool` result;
//! - [`MeasurementBridge::try_from_external`] (and `TryFrom`) return [`BridgeError`].
//!
//! Units are never converted while bridging. A kilometre measurement comes back in kilometres.
//!
//! # Thread Safety
//!
//! [`ExternalMeasurement`] is `Send + Sync`; the erased unit is immutable and shared.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod bridge;
mod erased;
mod error;

pub use bridge::MeasurementBridge;
pub use erased::{ErasedUnit, ExternalMeasurement};
pub use error::{BridgeError, BridgeResult};
