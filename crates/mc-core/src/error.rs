//! Error types for the cost engine.
//!
//! Every error here is local and recoverable: the engine rejects the input,
//! keeps its previous state, and the next parameter change recomputes from
//! scratch.

use mc_config::ValidationError;
use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the cost engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Out-of-range control value or non-positive Beta shape.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },

    /// Curve algebra operands of different length.
    #[error("curve length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A derived value was requested before its inputs exist.
    #[error("not available: {0}")]
    NotAvailable(String),

    #[error("configuration error: {0}")]
    Config(#[from] ValidationError),
}

impl Error {
    pub(crate) fn invalid(name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns the error code for this error type.
    ///
    /// - 10: invalid parameter
    /// - 20: length mismatch
    /// - 30: not available
    /// - 40: configuration
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidParameter { .. } => 10,
            Error::LengthMismatch { .. } => 20,
            Error::NotAvailable(_) => 30,
            Error::Config(_) => 40,
        }
    }

    /// Whether the host can carry on after this error.
    ///
    /// Always true: no engine state is left half-updated.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::InvalidParameter { .. }
            | Error::LengthMismatch { .. }
            | Error::NotAvailable(_)
            | Error::Config(_) => true,
        }
    }
}

/// Check that a control value lies in [0, 1].
pub(crate) fn ensure_unit(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::invalid(
            name,
            format!("must be in [0, 1], got {}", value),
        ));
    }
    Ok(())
}
