//! Unit-tagged measurements and conversions.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the full API from `mensura-core`, the
//! `Unit` derive from `mensura-derive`, and (behind the `bridge` feature) the bridging adapter.
//!
//! The core idea is: a value is always a `Measurement<U>`, where `U` is a unit value. Units of one
//! [`Dimension`] (metres, kilometres, …) share a base unit and convert automatically; plain units only combine with
//! themselves.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible families (you can't add metres to seconds).
//! - Converts within a family explicitly (`converted_to`) or implicitly in `+`, `-`, `==` and `<`.
//! - Supports exact, non-convertible units (counts, tokens, currencies without rates).
//!
//! # What this crate does not try to solve
//!
//! - A catalog of units: define the families you need with `#[derive(Unit)]`.
//! - Parsing unit strings, localization, or arbitrary-precision arithmetic.
//!
//! # Quick start
//!
//! ```rust
//! use mensura::{Dimension, LinearConverter, Measurement, Unit, UnitConverter};
//!
//! #[derive(Clone, Debug, PartialEq, Unit)]
//! #[unit(dimension)]
//! pub struct UnitLength {
//!     symbol: &'static str,
//!     converter: LinearConverter,
//! }
//!
//! impl UnitLength {
//!     pub const METERS: Self = Self { symbol: "m", converter: LinearConverter::IDENTITY };
//!     pub const KILOMETERS: Self = Self { symbol: "km", converter: LinearConverter::new(1000.0) };
//! }
//!
//! impl Dimension for UnitLength {
//!     fn converter(&self) -> &dyn UnitConverter { &self.converter }
//!     fn base_unit() -> Self { Self::METERS }
//! }
//!
//! let d = Measurement::new(1.0, UnitLength::KILOMETERS) + Measurement::new(500.0, UnitLength::METERS);
//! assert_eq!(d.to_string(), "1500 m");
//!
//! let km = d.converted_to(UnitLength::KILOMETERS);
//! assert_eq!(km.value(), 1.5);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use mensura::{Measurement, Unit};
//!
//! #[derive(Clone, Debug, PartialEq, Unit)]
//! #[unit(symbol = "m")]
//! struct Meter;
//!
//! #[derive(Clone, Debug, PartialEq, Unit)]
//! #[unit(symbol = "s")]
//! struct Second;
//!
//! let _ = Measurement::new(1.0, Meter) + Measurement::new(1.0, Second); // different unit types
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `mensura-core`.
//! - `serde`: enables `serde` support for `Measurement<U>`.
//! - `bridge`: re-exports `mensura-bridge` as [`bridge`].
//!
//! # Panics and errors
//!
//! Combining different exact units, or ordering measurements from unrelated families, is a logic error and panics.
//! Equality never panics. Everything else follows IEEE-754.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use mensura_core::*;

/// Derive macro implementing [`Unit`] for a unit type.
///
/// Accepts `#[unit(symbol = "...")]`, `#[unit(dimension)]` and `#[unit(crate = path)]`; see `mensura-derive`.
pub use mensura_derive::Unit;

/// Bridging to and from the type-erased [`bridge::ExternalMeasurement`].
#[cfg(feature = "bridge")]
pub use mensura_bridge as bridge;
