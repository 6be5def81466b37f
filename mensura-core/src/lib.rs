//! Core type system for unit-tagged measurements.
//!
//! `mensura-core` provides a small measurement model:
//!
//! - A *unit* is a runtime value implementing [`Unit`]: an identity (`PartialEq`) and a display symbol.
//! - A *dimension* is a family of units implementing [`Dimension`], each carrying a [`UnitConverter`] to the family's
//!   canonical base unit.
//! - A value tagged with a unit is a [`Measurement<U>`], backed by an `f64`.
//! - Conversion is explicit via [`Measurement::converted_to`] and always routes through the base unit.
//!
//! Most users should depend on `mensura` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Type-safe measurements: a length cannot be added to a duration.
//! - Runtime unit identity within a family: metres and kilometres are both `UnitLength` values and convert into one
//!   another automatically when added or compared.
//! - Exact units without any conversion (item counts, custom tokens) that only combine with themselves.
//!
//! # What this crate does not try to solve
//!
//! - A unit catalog: concrete units and their coefficients are supplied by users.
//! - Parsing unit strings, localization, or rich formatting (see [`MeasurementFormatter`] for the boundary).
//! - Exact arithmetic or error tracking (`Measurement` is `f64`).
//!
//! # Quick start
//!
//! ```rust
//! use mensura_core::{Dimension, DimensionView, LinearConverter, Measurement, Unit, UnitConverter};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! pub struct UnitLength(&'static str, LinearConverter);
//!
//! const METERS: UnitLength = UnitLength("m", LinearConverter::IDENTITY);
//! const KILOMETERS: UnitLength = UnitLength("km", LinearConverter::new(1000.0));
//!
//! impl Unit for UnitLength {
//!     fn symbol(&self) -> &str { self.0 }
//!     fn as_dimension(&self) -> Option<DimensionView<'_, Self>> { Some(DimensionView::from(self)) }
//! }
//!
//! impl Dimension for UnitLength {
//!     fn converter(&self) -> &dyn UnitConverter { &self.1 }
//!     fn base_unit() -> Self { METERS }
//! }
//!
//! // Mixed units are combined in the base unit.
//! let total = Measurement::new(1.0, KILOMETERS) + Measurement::new(500.0, METERS);
//! assert_eq!(total, Measurement::new(1500.0, METERS));
//! assert_eq!(total.unit(), &METERS);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `mensura-core` without `std` (an allocator is still required for formatting):
//!
//! ```toml
//! [dependencies]
//! mensura-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Measurement<U>` and the [`serde_with_symbol`] helper.
//!
//! # Panics and errors
//!
//! This crate does not define an error type. Conversions and arithmetic are pure `f64` computations following IEEE-754
//! (NaN and infinities propagate, division by zero is not an error).
//!
//! Combining or ordering measurements whose units cannot be related is a logic error and panics:
//!
//! - `+` / `-` between different units that are not members of a [`Dimension`];
//! - `<`, `<=`, `>`, `>=` between units that are neither identical nor in the same dimension.
//!
//! Equality never panics: unrelated measurements are simply unequal.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade. Logic errors are logged at `error` level before
//! panicking; no logger is installed by this crate.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod converter;
mod dimension;
mod format;
mod measurement;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use converter::{LinearConverter, ReciprocalConverter, UnitConverter};
pub use dimension::{Dimension, DimensionView};
pub use format::{MeasurementFormatter, PrecisionFormatter};
pub use measurement::Measurement;
pub use unit::{same_unit, Unit};

#[cfg(feature = "serde")]
pub use measurement::serde_with_symbol;
