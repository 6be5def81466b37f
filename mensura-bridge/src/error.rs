//! Error types for bridging operations.

/// Result type for bridging operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Error type for bridging operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// The external measurement carries a unit of another Rust type than the requested one.
    #[error("unable to bridge measurement: expected unit type {expected}, found {found}")]
    UnitTypeMismatch {
        /// Type name of the requested unit.
        expected: &'static str,
        /// Type name of the unit carried by the external measurement.
        found: &'static str,
    },
}
