//! Chroma plane sampling geometry.
//!
//! A subsampled chroma plane has fewer texels than the luma plane, and its
//! samples are sited somewhere inside each subsampling block. To
//! reconstruct chroma at a luma position with a single bilinear fetch, the
//! luma coordinate has to be scaled and shifted into the chroma plane.
//!
//! All coordinates here are in texel units with texel `i` centered at
//! `i + 0.5`. Along one axis, with subsampling factor `s` and siting `p`,
//! the chroma sample of block `j` lies at luma coordinate
//! `j*s + 0.5 + p*(s-1)`, which gives
//!
//! ```text
//! chroma = luma / s + (s - 1)(0.5 - p) / s
//! ```
//!
//! # Example
//!
//! ```rust
//! use vfx_ycbcr::{chroma_geometry, ChromaPlane, LumaStandard, YCbCrFormat};
//!
//! // 4:2:0, chroma co-sited with the left luma column
//! let format = YCbCrFormat::new(LumaStandard::Rec709, false, 256)
//!     .with_subsampling(2, 2)
//!     .with_chroma_position(0.0, 0.5);
//! let g = chroma_geometry(&format, ChromaPlane::Cb).unwrap();
//! assert_eq!(g.scale, [0.5, 0.5]);
//! assert_eq!(g.offset[0], 0.25);
//! assert_eq!(g.offset[1], 0.0);
//! ```

use std::fmt;

use vfx_core::{Error, Result};
use vfx_math::{div_round_up, sample_bilinear_clamped};

use crate::YCbCrFormat;

/// One of the two chroma planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromaPlane {
    /// Blue-difference plane.
    Cb,
    /// Red-difference plane.
    Cr,
}

impl ChromaPlane {
    /// Both planes, Cb first.
    pub const BOTH: [ChromaPlane; 2] = [ChromaPlane::Cb, ChromaPlane::Cr];

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cb => "cb",
            Self::Cr => "cr",
        }
    }
}

impl fmt::Display for ChromaPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps luma texel coordinates to chroma texel coordinates:
/// `chroma = luma * scale + offset`, per axis (`[x, y]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromaGeometry {
    /// Per-axis scale (`1 / subsampling`).
    pub scale: [f64; 2],
    /// Per-axis offset in chroma texels.
    pub offset: [f64; 2],
}

impl ChromaGeometry {
    /// Geometry of a plane that is not subsampled.
    pub const IDENTITY: Self = Self {
        scale: [1.0, 1.0],
        offset: [-0.0, -0.0],
    };

    /// Maps a luma texel coordinate into the chroma plane.
    #[inline]
    pub fn to_chroma(&self, luma_x: f64, luma_y: f64) -> [f64; 2] {
        [
            luma_x * self.scale[0] + self.offset[0],
            luma_y * self.scale[1] + self.offset[1],
        ]
    }

    /// Offset in normalized coordinates of a `chroma_width` x
    /// `chroma_height` chroma texture.
    #[inline]
    pub fn normalized_offset(&self, chroma_width: u32, chroma_height: u32) -> [f64; 2] {
        [
            self.offset[0] / f64::from(chroma_width.max(1)),
            self.offset[1] / f64::from(chroma_height.max(1)),
        ]
    }

    /// Scale and offset for normalized texture coordinates.
    ///
    /// A shader that addresses both planes with the same `[0, 1]`
    /// coordinates `tc` (relative to the luma plane) samples chroma at
    /// `tc * scale + offset`. The scale is 1 unless the chroma plane was
    /// padded to a whole number of blocks.
    pub fn normalized(
        &self,
        luma_width: u32,
        luma_height: u32,
        chroma_width: u32,
        chroma_height: u32,
    ) -> ([f64; 2], [f64; 2]) {
        let axis_scale = |i: usize, luma: u32, chroma: u32| {
            self.scale[i] * f64::from(luma) / f64::from(chroma.max(1))
        };
        (
            [
                axis_scale(0, luma_width, chroma_width),
                axis_scale(1, luma_height, chroma_height),
            ],
            self.normalized_offset(chroma_width, chroma_height),
        )
    }

    /// Fetches chroma at a luma texel coordinate with bilinear filtering
    /// and clamp-to-edge wrapping, as the GPU would.
    pub fn sample(
        &self,
        plane: &[f64],
        chroma_width: usize,
        chroma_height: usize,
        luma_x: f64,
        luma_y: f64,
    ) -> f64 {
        let [cx, cy] = self.to_chroma(luma_x, luma_y);
        sample_bilinear_clamped(plane, chroma_width, chroma_height, cx, cy)
    }

    /// Upsamples a chroma plane to full luma resolution, one fetch per
    /// luma texel center.
    pub fn upsample(
        &self,
        plane: &[f64],
        chroma_width: usize,
        chroma_height: usize,
        width: usize,
        height: usize,
    ) -> Vec<f64> {
        let mut out = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                out.push(self.sample(plane, chroma_width, chroma_height, x as f64 + 0.5, y as f64 + 0.5));
            }
        }
        out
    }
}

/// Scale and offset along one axis.
fn axis_geometry(subsampling: u32, position: f32) -> (f64, f64) {
    let s = f64::from(subsampling);
    let local = (0.5 + f64::from(position) * (s - 1.0)) / s;
    // -0.0 so that `x + offset` folds away in generated shaders.
    let offset = if (local - 0.5).abs() < 1e-10 { -0.0 } else { 0.5 - local };
    (1.0 / s, offset)
}

/// Derives the sampling geometry of one chroma plane.
///
/// Subsampling 1 or centered siting on an axis gives an offset of zero on
/// that axis; siting is irrelevant without subsampling.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the format fails
/// [`YCbCrFormat::validate`].
pub fn chroma_geometry(format: &YCbCrFormat, plane: ChromaPlane) -> Result<ChromaGeometry> {
    format.validate()?;
    let (x_pos, y_pos) = match plane {
        ChromaPlane::Cb => (format.cb_x_position, format.cb_y_position),
        ChromaPlane::Cr => (format.cr_x_position, format.cr_y_position),
    };
    let (sx, ox) = axis_geometry(format.chroma_subsampling_x, x_pos);
    let (sy, oy) = axis_geometry(format.chroma_subsampling_y, y_pos);
    Ok(ChromaGeometry {
        scale: [sx, sy],
        offset: [ox, oy],
    })
}

/// Derives the geometry of both planes, `[cb, cr]`.
pub fn chroma_geometries(format: &YCbCrFormat) -> Result<[ChromaGeometry; 2]> {
    Ok([
        chroma_geometry(format, ChromaPlane::Cb)?,
        chroma_geometry(format, ChromaPlane::Cr)?,
    ])
}

/// Resolution of the chroma planes for a luma resolution.
///
/// Partial blocks at the right and bottom edge still get a chroma sample.
pub fn chroma_plane_size(format: &YCbCrFormat, width: u32, height: u32) -> Result<(u32, u32)> {
    if format.chroma_subsampling_x == 0 || format.chroma_subsampling_y == 0 {
        return Err(Error::invalid_format("chroma_subsampling", "must be at least 1"));
    }
    Ok((
        div_round_up(width, format.chroma_subsampling_x),
        div_round_up(height, format.chroma_subsampling_y),
    ))
}
