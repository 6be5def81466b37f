//! Formatter boundary.
//!
//! The core does not localize or style measurements itself. Rendering is delegated to a [`MeasurementFormatter`],
//! configured however the implementor likes, and consumed through [`Measurement::formatted`](crate::Measurement::formatted).

use alloc::format;
use alloc::string::String;

/// Renders a value and unit symbol to text.
///
/// Returning `None` means the formatter could not render the input; callers degrade to an empty string.
pub trait MeasurementFormatter {
    /// Formats `value` expressed in the unit whose symbol is `symbol`.
    fn format(&self, value: f64, symbol: &str) -> Option<String>;
}

impl<F> MeasurementFormatter for F
where
    F: Fn(f64, &str) -> Option<String>,
{
    fn format(&self, value: f64, symbol: &str) -> Option<String> {
        self(value, symbol)
    }
}

/// Fixed-precision formatter.
///
/// Renders finite values with `precision` fraction digits followed by `separator` and the symbol. Non-finite values
/// are declined.
///
/// ```rust
/// use mensura_core::{MeasurementFormatter, PrecisionFormatter};
///
/// let f = PrecisionFormatter::new(2);
/// assert_eq!(f.format(1.0 / 3.0, "m").as_deref(), Some("0.33 m"));
/// assert_eq!(f.format(f64::NAN, "m"), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PrecisionFormatter {
    precision: usize,
    separator: String,
}

impl PrecisionFormatter {
    /// Creates a formatter with a single space between value and symbol.
    pub fn new(precision: usize) -> Self {
        Self::with_separator(precision, " ")
    }

    /// Creates a formatter with a custom value/symbol separator.
    pub fn with_separator(precision: usize, separator: impl Into<String>) -> Self {
        Self {
            precision,
            separator: separator.into(),
        }
    }

    /// Number of fraction digits.
    pub fn precision(&self) -> usize {
        self.precision
    }
}

impl MeasurementFormatter for PrecisionFormatter {
    fn format(&self, value: f64, symbol: &str) -> Option<String> {
        if !value.is_finite() {
            return None;
        }
        if symbol.is_empty() {
            return Some(format!("{:.*}", self.precision, value));
        }
        Some(format!(
            "{:.*}{}{}",
            self.precision, value, self.separator, symbol
        ))
    }
}
