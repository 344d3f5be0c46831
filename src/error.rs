//! Error types shared by all engines.
//!
//! Engines themselves never fail: invalid or infeasible inputs are reported
//! inside their result values, tagged with a [`FailureKind`]. The
//! [`OptimizeError`] type is reserved for construction (denomination sets,
//! configuration validation) and for parsing operating modes.

use thiserror::Error;

/// Errors raised while building inputs or configuration for the engines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptimizeError {
    /// An input collection or value is out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An operating mode name was not recognized.
    #[error("unknown mode '{0}'")]
    UnknownMode(String),
}

impl OptimizeError {
    /// Creates an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result alias for fallible construction and parsing.
pub type Result<T> = std::result::Result<T, OptimizeError>;

/// Why an engine result did not fully succeed.
///
/// Carried on every result value as `failure: Option<FailureKind>`; `None`
/// means the call completed normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailureKind {
    /// The request itself was malformed: negative amount, non-positive
    /// capacity, empty required collection.
    InvalidInput,

    /// The request was well-formed but cannot be satisfied, e.g. an amount
    /// not representable with the available denominations.
    Infeasible,
}
