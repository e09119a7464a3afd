//! # Geometry & Optics Formulas
//!
//! The fundamental formulas behind the crop calculation. Having them in one
//! place keeps the calculation orchestration free of arithmetic and lets each
//! formula be verified in isolation.
//!
//! ## Notation
//!
//! - `w`, `h` = frame width and height in pixels
//! - `D` = frame diagonal in pixels
//! - `F` = crop factor (dimensionless ratio)
//! - `m` = sensor 35mm-equivalence crop multiplier
//!
//! All functions take and return full-precision values; rounding happens once
//! at the output boundary via [`round_dp`].

/// Calculate the frame diagonal in pixels
///
/// # Formula
/// D = √(w² + h²)
///
/// # Example
/// ```rust
/// use focal_core::equations::diagonal_px;
///
/// let d = diagonal_px(6000, 4000);
/// assert!((d - 7211.1026).abs() < 0.001);
/// ```
#[inline]
pub fn diagonal_px(width: u32, height: u32) -> f64 {
    let w = width as f64;
    let h = height as f64;
    (w * w + h * h).sqrt()
}

/// Calculate the diagonal-based image crop factor
///
/// This is the primary multiplier applied to focal length: the ratio of the
/// original diagonal to the cropped diagonal.
///
/// # Formula
/// F = D_original / D_cropped
///
/// # Example
/// ```rust
/// use focal_core::equations::{diagonal_crop_factor, diagonal_px};
///
/// let f = diagonal_crop_factor(diagonal_px(6000, 4000), diagonal_px(3000, 2000));
/// assert!((f - 2.0).abs() < 1e-9);
/// ```
#[inline]
pub fn diagonal_crop_factor(original_diagonal: f64, crop_diagonal: f64) -> f64 {
    original_diagonal / crop_diagonal
}

/// Calculate the crop factor along a single axis
///
/// Horizontal and vertical factors are auxiliary metrics; they diverge from
/// the diagonal factor when the crop changes aspect ratio and take no part in
/// the focal-length computation.
///
/// # Formula
/// F_axis = original / cropped
#[inline]
pub fn axis_crop_factor(original_px: u32, cropped_px: u32) -> f64 {
    original_px as f64 / cropped_px as f64
}

/// Convert an actual focal length to its 35mm equivalent
///
/// # Formula
/// f_equiv = f_actual × m
///
/// # Example
/// ```rust
/// use focal_core::equations::actual_to_equivalent;
///
/// assert!((actual_to_equivalent(18.0, 1.5) - 27.0).abs() < 1e-9);
/// ```
#[inline]
pub fn actual_to_equivalent(actual_mm: f64, crop_multiplier: f64) -> f64 {
    actual_mm * crop_multiplier
}

/// Convert a 35mm-equivalent focal length back to the actual focal length
///
/// Exact algebraic inverse of [`actual_to_equivalent`].
///
/// # Formula
/// f_actual = f_equiv / m
///
/// # Example
/// ```rust
/// use focal_core::equations::{actual_to_equivalent, equivalent_to_actual};
///
/// let roundtrip = equivalent_to_actual(actual_to_equivalent(35.0, 1.6), 1.6);
/// assert!((roundtrip - 35.0).abs() < 1e-9);
/// ```
#[inline]
pub fn equivalent_to_actual(equivalent_mm: f64, crop_multiplier: f64) -> f64 {
    equivalent_mm / crop_multiplier
}

/// Calculate the cropped area as a percentage of the original area
///
/// # Formula
/// ratio = (w_crop × h_crop) / (w_orig × h_orig) × 100
///
/// # Example
/// ```rust
/// use focal_core::equations::crop_area_ratio;
///
/// assert!((crop_area_ratio(6000, 4000, 3000, 2000) - 25.0).abs() < 1e-9);
/// ```
#[inline]
pub fn crop_area_ratio(orig_width: u32, orig_height: u32, crop_width: u32, crop_height: u32) -> f64 {
    let original_area = orig_width as f64 * orig_height as f64;
    let crop_area = crop_width as f64 * crop_height as f64;
    crop_area / original_area * 100.0
}

/// Calculate the aspect ratio of a frame (width over height)
///
/// # Formula
/// r = w / h
#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f64 {
    width as f64 / height as f64
}

/// Round a value to a fixed number of decimal places
///
/// Applied once, when assembling the output payload. Intermediate values are
/// never rounded.
///
/// # Example
/// ```rust
/// use focal_core::equations::round_dp;
///
/// assert_eq!(round_dp(7211.102551, 1), 7211.1);
/// assert_eq!(round_dp(1.9999, 2), 2.0);
/// ```
#[inline]
pub fn round_dp(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal() {
        // 3:4:5 triangle scaled by 1000
        assert!((diagonal_px(3000, 4000) - 5000.0).abs() < 1e-9);
        // full-frame style 3:2 frame
        assert!((diagonal_px(6000, 4000) - 7211.102551).abs() < 1e-5);
    }

    #[test]
    fn test_diagonal_crop_factor_halved_frame() {
        let orig = diagonal_px(6000, 4000);
        let crop = diagonal_px(3000, 2000);
        assert!((diagonal_crop_factor(orig, crop) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_diagonal_crop_factor_identity() {
        let d = diagonal_px(5472, 3648);
        assert!((diagonal_crop_factor(d, d) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_axis_crop_factors_diverge_from_diagonal() {
        // 3:2 frame cropped to a square: axes differ, diagonal in between
        let horizontal = axis_crop_factor(6000, 4000);
        let vertical = axis_crop_factor(4000, 4000);
        let diagonal = diagonal_crop_factor(diagonal_px(6000, 4000), diagonal_px(4000, 4000));
        assert!((horizontal - 1.5).abs() < 1e-9);
        assert!((vertical - 1.0).abs() < 1e-9);
        assert!(diagonal > vertical && diagonal < horizontal);
    }

    #[test]
    fn test_focal_conversions_inverse() {
        for multiplier in [0.79, 1.5, 1.6, 2.0, 2.7] {
            for focal in [8.0, 18.0, 23.5, 50.0, 300.0] {
                let roundtrip = equivalent_to_actual(actual_to_equivalent(focal, multiplier), multiplier);
                assert!((roundtrip - focal).abs() < 0.1);
            }
        }
    }

    #[test]
    fn test_crop_area_ratio() {
        assert!((crop_area_ratio(6000, 4000, 3000, 2000) - 25.0).abs() < 1e-9);
        assert!((crop_area_ratio(5472, 3648, 5472, 3648) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_aspect_ratio() {
        assert!((aspect_ratio(6000, 4000) - 1.5).abs() < 1e-9);
        assert!((aspect_ratio(4000, 4000) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(26.999999, 1), 27.0);
        assert_eq!(round_dp(1.2345, 2), 1.23);
        assert_eq!(round_dp(7211.102551, 0), 7211.0);
        assert_eq!(round_dp(33.333333, 1), 33.3);
    }
}
