//! Y'CbCr -> R'G'B' conversion matrices.
//!
//! The decode is an affine transform on normalized code values:
//!
//! ```text
//! rgb = matrix * (ycbcr - offset)
//! ```
//!
//! where `ycbcr` is `code / (num_levels - 1)` per component, which is what a
//! normalized integer texture returns when sampled.
//!
//! # Range handling
//!
//! | Range  | Y' offset     | Cb/Cr offset      | Y' scale           | Cb/Cr scale        |
//! |--------|---------------|-------------------|--------------------|--------------------|
//! | full   | 0             | (n/2) / (n-1)     | 1                  | 1                  |
//! | studio | 16k / (n-1)   | 128k / (n-1)      | (n-1) / 219k       | (n-1) / 224k       |
//!
//! with `n = num_levels` and `k = n / 256` (Rec.601 page 4, Rec.709 page 19,
//! Rec.2020 page 5). The scales are folded into the matrix columns.

use tracing::trace;
use vfx_core::{Error, Result};
use vfx_math::{Mat3, Vec3};

use crate::YCbCrFormat;

/// A derived Y'CbCr -> R'G'B' transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YCbCrConversion {
    /// Maps offset-corrected normalized Y'CbCr to R'G'B'.
    pub matrix: Mat3,
    /// Subtracted from normalized Y'CbCr before the matrix is applied.
    pub offset: Vec3,
    /// Code levels of the source format, for [`YCbCrConversion::apply_codes`].
    pub num_levels: u32,
}

impl YCbCrConversion {
    /// Converts normalized Y'CbCr to R'G'B'.
    #[inline]
    pub fn apply(&self, ycbcr: Vec3) -> Vec3 {
        self.matrix * (ycbcr - self.offset)
    }

    /// Converts integer code values to R'G'B'.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vfx_ycbcr::{ycbcr_to_rgb, LumaStandard, YCbCrFormat};
    ///
    /// let conv = ycbcr_to_rgb(&YCbCrFormat::new(LumaStandard::Rec601, false, 256)).unwrap();
    /// let white = conv.apply_codes([235, 128, 128]);
    /// assert!((white.x - 1.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn apply_codes(&self, codes: [u32; 3]) -> Vec3 {
        let max_code = f64::from(self.num_levels - 1);
        let ycbcr = Vec3::new(f64::from(codes[0]), f64::from(codes[1]), f64::from(codes[2]));
        self.apply(ycbcr / max_code)
    }

    /// Returns the R'G'B' -> normalized Y'CbCr matrix (the inverse of
    /// [`YCbCrConversion::matrix`]); add [`YCbCrConversion::offset`] afterwards.
    #[inline]
    pub fn rgb_to_ycbcr(&self) -> Option<Mat3> {
        self.matrix.inverse()
    }

    /// Encodes R'G'B' into normalized Y'CbCr.
    pub fn encode(&self, rgb: Vec3) -> Option<Vec3> {
        self.rgb_to_ycbcr().map(|m| m * rgb + self.offset)
    }
}

/// Zero-point offsets and per-channel scales for a format's code range.
///
/// The format is assumed to be valid.
pub fn range_constants(format: &YCbCrFormat) -> (Vec3, Vec3) {
    let n = format.num_levels;
    let max_code = f64::from(n - 1);
    if format.full_range {
        let mid = f64::from(n / 2) / max_code;
        (Vec3::new(0.0, mid, mid), Vec3::ONE)
    } else {
        let k = f64::from(n / 256);
        let offset = Vec3::new(16.0 * k, 128.0 * k, 128.0 * k) / max_code;
        let scale = Vec3::new(max_code / (219.0 * k), max_code / (224.0 * k), max_code / (224.0 * k));
        (offset, scale)
    }
}

/// Derives the Y'CbCr -> R'G'B' matrix and offset for a format.
///
/// Pure function of its input: equal formats give bit-identical results.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the format fails
/// [`YCbCrFormat::validate`].
///
/// # Example
///
/// ```rust
/// use vfx_ycbcr::{ycbcr_to_rgb, LumaStandard, YCbCrFormat};
///
/// let conv = ycbcr_to_rgb(&YCbCrFormat::new(LumaStandard::Rec601, true, 256)).unwrap();
/// assert!((conv.matrix.m[0][2] - 1.402).abs() < 1e-9);
/// ```
pub fn ycbcr_to_rgb(format: &YCbCrFormat) -> Result<YCbCrConversion> {
    format.validate()?;

    let rgb_to_ycbcr = format.luma_coefficients.coefficients().rgb_to_ycbcr_matrix();
    let inverse = rgb_to_ycbcr
        .inverse()
        .ok_or_else(|| Error::other(format!("{} matrix is singular", format.luma_coefficients)))?;

    let (offset, scale) = range_constants(format);
    let matrix = inverse * Mat3::from_diagonal(scale);

    trace!(
        standard = %format.luma_coefficients,
        full_range = format.full_range,
        num_levels = format.num_levels,
        "derived Y'CbCr matrix"
    );

    Ok(YCbCrConversion {
        matrix,
        offset,
        num_levels: format.num_levels,
    })
}
