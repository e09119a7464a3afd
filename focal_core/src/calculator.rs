//! # Crop Focal-Length Calculation
//!
//! Computes the equivalent focal length and crop characteristics of a
//! digitally cropped photograph from the originating sensor format and the
//! pixel dimensions of the original and cropped frames.
//!
//! ## Assumptions
//!
//! - Dimensions are pixel counts of the rectangular frames; no image data is
//!   ever read
//! - The diagonal-based crop factor is the multiplier applied to focal
//!   length; axis factors are auxiliary metrics only
//! - One calculation is one synchronous call over the input snapshot; every
//!   invocation with the same inputs yields identical rounded outputs
//!
//! ## Example
//!
//! ```rust
//! use focal_core::calculator::{CalcOutcome, CropCalculator};
//! use focal_core::sensors::SensorFormat;
//!
//! let mut calc = CropCalculator::new();
//! calc.set_inputs(SensorFormat::FullFrame, "50", "", "6000", "4000", "3000", "2000");
//!
//! match calc.calculate() {
//!     CalcOutcome::Success { results, details } => {
//!         assert_eq!(results.crop_factor, 2.0);
//!         assert_eq!(results.crop_equivalent_focal_length_mm, 100.0);
//!         assert_eq!(details.original_diagonal_px, 7211);
//!     }
//!     CalcOutcome::Invalid { errors } => panic!("unexpected errors: {:?}", errors),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{
    actual_to_equivalent, aspect_ratio, axis_crop_factor, crop_area_ratio, diagonal_crop_factor,
    diagonal_px, equivalent_to_actual, round_dp,
};
use crate::errors::ValidationError;
use crate::sensors::{SensorFormat, SensorInfo};

/// The focal calculation engine: one normalized input snapshot per request.
///
/// Raw form values go in through [`set_inputs`](CropCalculator::set_inputs)
/// (which never fails), legality is checked by
/// [`validate`](CropCalculator::validate), and
/// [`calculate`](CropCalculator::calculate) returns either the derived
/// metrics or the full list of violated rules.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sensor": "apsc",
///   "focal_length_mm": 18.0,
///   "equivalent_focal_length_mm": 0.0,
///   "original_width_px": 5472,
///   "original_height_px": 3648,
///   "crop_width_px": 4000,
///   "crop_height_px": 3000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CropCalculator {
    /// Selected sensor format
    pub sensor: SensorFormat,

    /// Original lens focal length in mm (0 = absent)
    pub focal_length_mm: f64,

    /// Original 35mm-equivalent focal length in mm (0 = absent)
    pub equivalent_focal_length_mm: f64,

    /// Original photo width in pixels (0 = absent)
    pub original_width_px: u32,

    /// Original photo height in pixels (0 = absent)
    pub original_height_px: u32,

    /// Cropped photo width in pixels (0 = absent)
    pub crop_width_px: u32,

    /// Cropped photo height in pixels (0 = absent)
    pub crop_height_px: u32,
}

/// Derived metrics, rounded at the output boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcResults {
    /// Cropped actual focal length in mm (1 decimal place)
    pub crop_actual_focal_length_mm: f64,

    /// Cropped 35mm-equivalent focal length in mm (1 decimal place)
    pub crop_equivalent_focal_length_mm: f64,

    /// Diagonal-based image crop factor (2 decimal places)
    pub crop_factor: f64,

    /// Width-axis crop factor (2 decimal places)
    pub horizontal_crop_factor: f64,

    /// Height-axis crop factor (2 decimal places)
    pub vertical_crop_factor: f64,

    /// Cropped area as a percentage of the original (1 decimal place)
    pub crop_ratio_percent: f64,
}

/// Supporting detail for a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalcDetails {
    /// Sensor format the calculation used
    pub sensor: SensorFormat,

    /// Catalog record for that format
    pub sensor_info: SensorInfo,

    /// Original frame diagonal in whole pixels
    pub original_diagonal_px: u32,

    /// Cropped frame diagonal in whole pixels
    pub crop_diagonal_px: u32,

    /// Original aspect ratio, width over height (2 decimal places)
    pub original_aspect_ratio: f64,

    /// Cropped aspect ratio, width over height (2 decimal places)
    pub crop_aspect_ratio: f64,
}

/// Outcome of a calculation request.
///
/// Validation problems are data, not `Err`: the `Invalid` variant carries
/// every violated rule in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CalcOutcome {
    /// All rules passed; metrics and supporting detail follow
    Success {
        results: CalcResults,
        details: CalcDetails,
    },
    /// One or more rules violated; no metrics were computed
    Invalid { errors: Vec<ValidationError> },
}

impl CalcOutcome {
    /// Check whether the calculation produced results
    pub fn is_success(&self) -> bool {
        matches!(self, CalcOutcome::Success { .. })
    }

    /// The violated rules, empty on success
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            CalcOutcome::Success { .. } => &[],
            CalcOutcome::Invalid { errors } => errors,
        }
    }
}

/// Parse a focal-length field: un-parseable, absent, or non-finite text is 0.
fn parse_focal_mm(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a resolution field: anything but a whole non-negative number is 0.
fn parse_px(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

impl CropCalculator {
    /// Create an engine with a full-frame, all-absent snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a normalized input snapshot from raw form values.
    ///
    /// Never fails: focal lengths coerce to `f64` (zero when un-parseable),
    /// resolutions to whole pixel counts (zero when un-parseable). No range
    /// checks happen here; legality is entirely
    /// [`validate`](CropCalculator::validate)'s concern.
    #[allow(clippy::too_many_arguments)]
    pub fn set_inputs(
        &mut self,
        sensor: SensorFormat,
        focal_length: &str,
        equivalent_focal_length: &str,
        orig_width: &str,
        orig_height: &str,
        crop_width: &str,
        crop_height: &str,
    ) {
        self.sensor = sensor;
        self.focal_length_mm = parse_focal_mm(focal_length);
        self.equivalent_focal_length_mm = parse_focal_mm(equivalent_focal_length);
        self.original_width_px = parse_px(orig_width);
        self.original_height_px = parse_px(orig_height);
        self.crop_width_px = parse_px(crop_width);
        self.crop_height_px = parse_px(crop_height);
    }

    /// Evaluate every validation rule over the snapshot.
    ///
    /// Rules are independent and all of them run; the returned list holds one
    /// entry per violated rule, in evaluation order. Empty means valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.sensor.is_full_frame() {
            if self.focal_length_mm <= 0.0 {
                errors.push(ValidationError::MissingFocalLength);
            }
        } else if self.focal_length_mm <= 0.0 && self.equivalent_focal_length_mm <= 0.0 {
            errors.push(ValidationError::MissingAnyFocalLength);
        }

        if self.original_width_px == 0 {
            errors.push(ValidationError::InvalidOriginalWidth);
        }
        if self.original_height_px == 0 {
            errors.push(ValidationError::InvalidOriginalHeight);
        }
        if self.crop_width_px == 0 {
            errors.push(ValidationError::InvalidCropWidth);
        }
        if self.crop_height_px == 0 {
            errors.push(ValidationError::InvalidCropHeight);
        }

        if self.crop_width_px > self.original_width_px {
            errors.push(ValidationError::CropWidthExceedsOriginal);
        }
        if self.crop_height_px > self.original_height_px {
            errors.push(ValidationError::CropHeightExceedsOriginal);
        }

        errors
    }

    /// Convert an actual focal length to its 35mm equivalent using the
    /// currently set sensor format. Full precision; exposed for linked-field
    /// consumers independent of a full calculation.
    pub fn actual_to_equivalent(&self, actual_mm: f64) -> f64 {
        actual_to_equivalent(actual_mm, self.sensor.crop_multiplier())
    }

    /// Convert a 35mm-equivalent focal length back to the actual focal
    /// length using the currently set sensor format.
    pub fn equivalent_to_actual(&self, equivalent_mm: f64) -> f64 {
        equivalent_to_actual(equivalent_mm, self.sensor.crop_multiplier())
    }

    /// Resolve the original actual focal length: the supplied actual value
    /// when present, else derived from the supplied equivalent, else zero.
    pub fn original_actual_focal_length(&self) -> f64 {
        if self.focal_length_mm > 0.0 {
            self.focal_length_mm
        } else if self.equivalent_focal_length_mm > 0.0 {
            self.equivalent_to_actual(self.equivalent_focal_length_mm)
        } else {
            0.0
        }
    }

    /// Resolve the original 35mm-equivalent focal length.
    ///
    /// For full frame the actual value IS the equivalent value; a populated
    /// equivalent field is ignored (that field is unused for full frame).
    /// Other sensors use the supplied equivalent when present, else the
    /// forward-converted actual, else zero.
    pub fn original_equivalent_focal_length(&self) -> f64 {
        if self.sensor.is_full_frame() {
            return self.focal_length_mm;
        }

        if self.equivalent_focal_length_mm > 0.0 {
            self.equivalent_focal_length_mm
        } else if self.focal_length_mm > 0.0 {
            self.actual_to_equivalent(self.focal_length_mm)
        } else {
            0.0
        }
    }

    /// Run the calculation over the current snapshot.
    ///
    /// Validation failures short-circuit into [`CalcOutcome::Invalid`];
    /// otherwise every metric is computed at full precision and rounded once
    /// while assembling the payload.
    pub fn calculate(&self) -> CalcOutcome {
        let errors = self.validate();
        if !errors.is_empty() {
            return CalcOutcome::Invalid { errors };
        }

        let original_diagonal = diagonal_px(self.original_width_px, self.original_height_px);
        let crop_diagonal = diagonal_px(self.crop_width_px, self.crop_height_px);
        let crop_factor = diagonal_crop_factor(original_diagonal, crop_diagonal);

        let crop_actual = self.original_actual_focal_length() * crop_factor;
        let crop_equivalent = self.original_equivalent_focal_length() * crop_factor;

        let results = CalcResults {
            crop_actual_focal_length_mm: round_dp(crop_actual, 1),
            crop_equivalent_focal_length_mm: round_dp(crop_equivalent, 1),
            crop_factor: round_dp(crop_factor, 2),
            horizontal_crop_factor: round_dp(
                axis_crop_factor(self.original_width_px, self.crop_width_px),
                2,
            ),
            vertical_crop_factor: round_dp(
                axis_crop_factor(self.original_height_px, self.crop_height_px),
                2,
            ),
            crop_ratio_percent: round_dp(
                crop_area_ratio(
                    self.original_width_px,
                    self.original_height_px,
                    self.crop_width_px,
                    self.crop_height_px,
                ),
                1,
            ),
        };

        let details = CalcDetails {
            sensor: self.sensor,
            sensor_info: *self.sensor.info(),
            original_diagonal_px: original_diagonal.round() as u32,
            crop_diagonal_px: crop_diagonal.round() as u32,
            original_aspect_ratio: round_dp(
                aspect_ratio(self.original_width_px, self.original_height_px),
                2,
            ),
            crop_aspect_ratio: round_dp(aspect_ratio(self.crop_width_px, self.crop_height_px), 2),
        };

        CalcOutcome::Success { results, details }
    }
}
