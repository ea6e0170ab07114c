//! Error handling for the room planner
//!
//! Provides the error types shared by every layer:
//! - Validation errors (bad numeric input rejected at the boundary)
//! - Document errors (layout files that cannot be read or are malformed)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Validation error type
///
/// Raised before a value reaches the scene, so the scene never holds
/// invalid geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A dimension that must be strictly positive was not
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// The offending field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A value was NaN or infinite
    #[error("{field} must be a finite number")]
    NotFinite {
        /// The offending field name.
        field: &'static str,
    },

    /// Text input could not be parsed as a length
    #[error("Cannot parse '{input}': {reason}")]
    Unparseable {
        /// The raw input.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Rotation is not a whole number of quarter turns
    #[error("Rotation must be a multiple of 90 degrees, got {degrees}")]
    InvalidRotation {
        /// The rejected angle.
        degrees: f64,
    },

    /// A color string is not `#rrggbb`
    #[error("Invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),
}

impl ValidationError {
    /// Checks that `value` is finite and strictly positive.
    pub fn check_positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field });
        }
        if value <= 0.0 {
            return Err(ValidationError::NonPositive { field, value });
        }
        Ok(value)
    }

    /// Checks that `value` is finite.
    pub fn check_finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ValidationError::NotFinite { field })
        }
    }
}

/// Layout document error type
///
/// Represents failures reading, parsing or validating a persisted layout.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document is not valid JSON or is missing required fields
    #[error("Malformed layout document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but describes something impossible
    #[error("Invalid layout document: {0}")]
    Invalid(String),

    /// A record failed validation
    #[error("Invalid value in layout document: {0}")]
    Validation(#[from] ValidationError),
}
