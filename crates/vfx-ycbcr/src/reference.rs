//! CPU reference decode of planar Y'CbCr.
//!
//! Runs the same math the generated input shader runs on the GPU: chroma is
//! fetched with [`ChromaGeometry::sample`], then the conversion matrix is
//! applied. Slow, but exact in `f64`; used to validate formats and to
//! produce expected images in tests.

use tracing::debug;
use vfx_core::{Error, Result};

use crate::{chroma_geometries, chroma_plane_size, ycbcr_to_rgb, YCbCrFormat};
use vfx_math::Vec3;

/// Borrowed planar Y'CbCr image of integer code values.
///
/// `y` is `width * height` samples; `cb` and `cr` are sized per
/// [`chroma_plane_size`]. All planes are row-major without padding.
#[derive(Debug, Clone, Copy)]
pub struct YCbCrPlanes<'a, T> {
    /// Luma plane width.
    pub width: u32,
    /// Luma plane height.
    pub height: u32,
    /// Luma codes.
    pub y: &'a [T],
    /// Blue-difference codes.
    pub cb: &'a [T],
    /// Red-difference codes.
    pub cr: &'a [T],
}

impl<'a, T> YCbCrPlanes<'a, T> {
    /// Bundles three planes.
    pub fn new(width: u32, height: u32, y: &'a [T], cb: &'a [T], cr: &'a [T]) -> Self {
        Self { width, height, y, cb, cr }
    }
}

fn check_len(plane: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::PlaneSizeMismatch { plane, expected, actual });
    }
    Ok(())
}

/// Decodes planar Y'CbCr to R'G'B', one `[r, g, b]` per luma sample.
///
/// Chroma is reconstructed with bilinear clamp-to-edge filtering at the
/// sited positions. Output is not clamped.
///
/// # Errors
///
/// - [`Error::InvalidFormat`] if the format fails validation
/// - [`Error::PlaneSizeMismatch`] if a plane has the wrong sample count
///
/// # Example
///
/// ```rust
/// use vfx_ycbcr::{decode_planes, LumaStandard, YCbCrFormat, YCbCrPlanes};
///
/// let format = YCbCrFormat::new(LumaStandard::Rec601, false, 256);
/// let planes = YCbCrPlanes::new(1, 1, &[235u8], &[128u8], &[128u8]);
/// let rgb = decode_planes(&format, &planes).unwrap();
/// assert!((rgb[0][1] - 1.0).abs() < 1e-9);
/// ```
pub fn decode_planes<T>(format: &YCbCrFormat, planes: &YCbCrPlanes<'_, T>) -> Result<Vec<[f64; 3]>>
where
    T: Copy + Into<u32>,
{
    let conversion = ycbcr_to_rgb(format)?;
    let [cb_geometry, cr_geometry] = chroma_geometries(format)?;
    let (cw, ch) = chroma_plane_size(format, planes.width, planes.height)?;

    let (width, height) = (planes.width as usize, planes.height as usize);
    let (cw, ch) = (cw as usize, ch as usize);
    check_len("y", width * height, planes.y.len())?;
    check_len("cb", cw * ch, planes.cb.len())?;
    check_len("cr", cw * ch, planes.cr.len())?;

    let max_code = f64::from(format.max_code());
    let normalize = |plane: &[T]| -> Vec<f64> {
        plane.iter().map(|&c| f64::from(c.into()) / max_code).collect()
    };
    let cb = normalize(planes.cb);
    let cr = normalize(planes.cr);

    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let (lx, ly) = (x as f64 + 0.5, y as f64 + 0.5);
            let luma = f64::from(planes.y[y * width + x].into()) / max_code;
            let ycbcr = Vec3::new(
                luma,
                cb_geometry.sample(&cb, cw, ch, lx, ly),
                cr_geometry.sample(&cr, cw, ch, lx, ly),
            );
            out.push(conversion.apply(ycbcr).to_array());
        }
    }

    debug!(width, height, chroma_width = cw, chroma_height = ch, "decoded Y'CbCr planes");
    Ok(out)
}
