//! Error types for the configuration boundary.
//!
//! Evaluation and ticking never fail; only loading and validating
//! configuration does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("'{field}' must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("trajectory json parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrajectoryError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Check that `value` is finite.
    pub(crate) fn check_finite(field: &'static str, value: f32) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::NonFinite { field, value })
        }
    }
}
