//! # Sensor Format Catalog
//!
//! Fixed catalog of camera sensor formats with physical dimensions and
//! 35mm-equivalence crop multipliers.
//!
//! The catalog is immutable reference data: a closed enum backed by `const`
//! records, built once into the binary and safe for unsynchronized concurrent
//! reads. Lookup by wire id fails explicitly with
//! [`CalcError::UnknownSensor`] rather than defaulting.
//!
//! ## Example
//!
//! ```rust
//! use focal_core::sensors::SensorFormat;
//!
//! let sensor = SensorFormat::from_id("apsc").unwrap();
//! assert_eq!(sensor.display_name(), "APS-C");
//! assert_eq!(sensor.crop_multiplier(), 1.5);
//! assert_eq!(sensor.info().width_mm, 23.6);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Camera sensor format designation.
///
/// Represents the originating camera's sensor with automatic physical-size
/// and crop-multiplier lookup. Serde round-trips through the wire ids
/// (`"fullframe"`, `"apsc-canon"`, `"1inch"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SensorFormat {
    /// Medium format (43.8 x 32.9 mm)
    #[serde(rename = "medium-format")]
    MediumFormat,
    /// Full frame (36 x 24 mm)
    #[serde(rename = "fullframe")]
    #[default]
    FullFrame,
    /// APS-C (23.6 x 15.6 mm)
    #[serde(rename = "apsc")]
    Apsc,
    /// APS-C Canon (22.2 x 14.8 mm)
    #[serde(rename = "apsc-canon")]
    ApscCanon,
    /// Micro Four Thirds (17.3 x 13 mm)
    #[serde(rename = "micro43")]
    Micro43,
    /// 1-inch (13.2 x 8.8 mm)
    #[serde(rename = "1inch")]
    OneInch,
}

/// Catalog record for a sensor format.
///
/// Physical dimensions are in millimeters; `crop_multiplier` is the sensor's
/// own 35mm-equivalence factor, independent of any image crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorInfo {
    /// Physical sensor width (mm)
    pub width_mm: f64,
    /// Physical sensor height (mm)
    pub height_mm: f64,
    /// Display name
    pub name: &'static str,
    /// 35mm-equivalence crop multiplier
    pub crop_multiplier: f64,
}

const MEDIUM_FORMAT: SensorInfo = SensorInfo {
    width_mm: 43.8,
    height_mm: 32.9,
    name: "Medium Format",
    crop_multiplier: 0.79,
};

const FULL_FRAME: SensorInfo = SensorInfo {
    width_mm: 36.0,
    height_mm: 24.0,
    name: "Full Frame",
    crop_multiplier: 1.0,
};

const APSC: SensorInfo = SensorInfo {
    width_mm: 23.6,
    height_mm: 15.6,
    name: "APS-C",
    crop_multiplier: 1.5,
};

const APSC_CANON: SensorInfo = SensorInfo {
    width_mm: 22.2,
    height_mm: 14.8,
    name: "APS-C (Canon)",
    crop_multiplier: 1.6,
};

const MICRO43: SensorInfo = SensorInfo {
    width_mm: 17.3,
    height_mm: 13.0,
    name: "Micro Four Thirds",
    crop_multiplier: 2.0,
};

const ONE_INCH: SensorInfo = SensorInfo {
    width_mm: 13.2,
    height_mm: 8.8,
    name: "1-inch",
    crop_multiplier: 2.7,
};

impl SensorFormat {
    /// All sensor formats in catalog order, for UI selection lists
    pub const ALL: [SensorFormat; 6] = [
        SensorFormat::MediumFormat,
        SensorFormat::FullFrame,
        SensorFormat::Apsc,
        SensorFormat::ApscCanon,
        SensorFormat::Micro43,
        SensorFormat::OneInch,
    ];

    /// Resolve a wire id to a sensor format.
    ///
    /// An unrecognized id is a contract violation between the caller and the
    /// engine and yields [`CalcError::UnknownSensor`].
    pub fn from_id(id: &str) -> CalcResult<SensorFormat> {
        match id {
            "medium-format" => Ok(SensorFormat::MediumFormat),
            "fullframe" => Ok(SensorFormat::FullFrame),
            "apsc" => Ok(SensorFormat::Apsc),
            "apsc-canon" => Ok(SensorFormat::ApscCanon),
            "micro43" => Ok(SensorFormat::Micro43),
            "1inch" => Ok(SensorFormat::OneInch),
            other => Err(CalcError::unknown_sensor(other)),
        }
    }

    /// Get the wire id (e.g., "apsc-canon")
    pub fn id(&self) -> &'static str {
        match self {
            SensorFormat::MediumFormat => "medium-format",
            SensorFormat::FullFrame => "fullframe",
            SensorFormat::Apsc => "apsc",
            SensorFormat::ApscCanon => "apsc-canon",
            SensorFormat::Micro43 => "micro43",
            SensorFormat::OneInch => "1inch",
        }
    }

    /// Get the catalog record for this format
    pub fn info(&self) -> &'static SensorInfo {
        match self {
            SensorFormat::MediumFormat => &MEDIUM_FORMAT,
            SensorFormat::FullFrame => &FULL_FRAME,
            SensorFormat::Apsc => &APSC,
            SensorFormat::ApscCanon => &APSC_CANON,
            SensorFormat::Micro43 => &MICRO43,
            SensorFormat::OneInch => &ONE_INCH,
        }
    }

    /// Get display name (e.g., "Micro Four Thirds")
    pub fn display_name(&self) -> &'static str {
        self.info().name
    }

    /// Get physical sensor width in millimeters
    pub fn width_mm(&self) -> f64 {
        self.info().width_mm
    }

    /// Get physical sensor height in millimeters
    pub fn height_mm(&self) -> f64 {
        self.info().height_mm
    }

    /// Get the sensor's 35mm-equivalence crop multiplier
    pub fn crop_multiplier(&self) -> f64 {
        self.info().crop_multiplier
    }

    /// Check whether this is the full-frame reference format
    pub fn is_full_frame(&self) -> bool {
        matches!(self, SensorFormat::FullFrame)
    }
}

impl std::fmt::Display for SensorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_values() {
        let ff = SensorFormat::FullFrame.info();
        assert_eq!(ff.width_mm, 36.0);
        assert_eq!(ff.height_mm, 24.0);
        assert_eq!(ff.crop_multiplier, 1.0);

        let apsc = SensorFormat::Apsc.info();
        assert_eq!(apsc.width_mm, 23.6);
        assert_eq!(apsc.height_mm, 15.6);
        assert_eq!(apsc.crop_multiplier, 1.5);

        assert_eq!(SensorFormat::MediumFormat.crop_multiplier(), 0.79);
        assert_eq!(SensorFormat::ApscCanon.crop_multiplier(), 1.6);
        assert_eq!(SensorFormat::Micro43.crop_multiplier(), 2.0);
        assert_eq!(SensorFormat::OneInch.crop_multiplier(), 2.7);

        assert_eq!(SensorFormat::OneInch.width_mm(), 13.2);
        assert_eq!(SensorFormat::OneInch.height_mm(), 8.8);
    }

    #[test]
    fn test_id_roundtrip() {
        for sensor in SensorFormat::ALL {
            assert_eq!(SensorFormat::from_id(sensor.id()).unwrap(), sensor);
        }
    }

    #[test]
    fn test_unknown_id() {
        let err = SensorFormat::from_id("aps-h").unwrap_err();
        assert_eq!(
            err,
            CalcError::UnknownSensor {
                sensor_id: "aps-h".to_string()
            }
        );
        // Case and whitespace are the caller's responsibility
        assert!(SensorFormat::from_id("Fullframe").is_err());
        assert!(SensorFormat::from_id(" apsc").is_err());
        assert!(SensorFormat::from_id("").is_err());
    }

    #[test]
    fn test_serde_uses_wire_ids() {
        let json = serde_json::to_string(&SensorFormat::OneInch).unwrap();
        assert_eq!(json, "\"1inch\"");
        let parsed: SensorFormat = serde_json::from_str("\"apsc-canon\"").unwrap();
        assert_eq!(parsed, SensorFormat::ApscCanon);
    }

    #[test]
    fn test_default_is_full_frame() {
        assert_eq!(SensorFormat::default(), SensorFormat::FullFrame);
        assert!(SensorFormat::default().is_full_frame());
    }

    #[test]
    fn test_display() {
        assert_eq!(SensorFormat::Micro43.to_string(), "Micro Four Thirds");
        assert_eq!(SensorFormat::ApscCanon.to_string(), "APS-C (Canon)");
    }
}
