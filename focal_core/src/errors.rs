//! # Error Types
//!
//! Structured error types for focal_core. Two distinct classes exist and they
//! never mix:
//!
//! - [`CalcError`] - contract violations between the engine and its caller
//!   (an unrecognized sensor id). These surface through `Result` and indicate
//!   an integration bug, not bad user input.
//! - [`ValidationError`] - user-correctable input problems. These are
//!   collected exhaustively into a list and returned inside the calculation
//!   outcome, never through `Result::Err`.
//!
//! ## Example
//!
//! ```rust
//! use focal_core::errors::CalcError;
//! use focal_core::sensors::SensorFormat;
//!
//! let err = SensorFormat::from_id("aps-h").unwrap_err();
//! assert_eq!(err, CalcError::unknown_sensor("aps-h"));
//! assert_eq!(err.error_code(), "UNKNOWN_SENSOR");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for focal_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for engine/caller contract violations.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic handling by the consuming integration.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Sensor identifier not present in the catalog
    #[error("Unknown sensor format: '{sensor_id}'")]
    UnknownSensor { sensor_id: String },
}

impl CalcError {
    /// Create an UnknownSensor error
    pub fn unknown_sensor(sensor_id: impl Into<String>) -> Self {
        CalcError::UnknownSensor {
            sensor_id: sensor_id.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownSensor { .. } => "UNKNOWN_SENSOR",
        }
    }
}

/// A violated input-validation rule.
///
/// Variants are declared in the order the rules are evaluated and reported.
/// The `Display` impl yields the user-facing message; serde serializes the
/// variant name for machine consumption.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationError {
    /// Rule 1: full-frame sensors take a single mandatory focal length
    #[error("Enter a valid original lens focal length.")]
    MissingFocalLength,

    /// Rule 2: other sensors need the actual or the 35mm-equivalent value
    #[error("Enter either the actual focal length or the 35mm equivalent focal length.")]
    MissingAnyFocalLength,

    /// Rule 3
    #[error("Enter a valid original photo width in pixels.")]
    InvalidOriginalWidth,

    /// Rule 4
    #[error("Enter a valid original photo height in pixels.")]
    InvalidOriginalHeight,

    /// Rule 5
    #[error("Enter a valid cropped photo width in pixels.")]
    InvalidCropWidth,

    /// Rule 6
    #[error("Enter a valid cropped photo height in pixels.")]
    InvalidCropHeight,

    /// Rule 7
    #[error("The cropped photo width cannot exceed the original width.")]
    CropWidthExceedsOriginal,

    /// Rule 8
    #[error("The cropped photo height cannot exceed the original height.")]
    CropHeightExceedsOriginal,
}
