//! Y'CbCr encoding descriptor.
//!
//! A [`YCbCrFormat`] captures everything needed to turn decoded planes back
//! into R'G'B': which luma weights were used, whether the codes use the full
//! or the studio range, the code depth, and where the chroma samples sit
//! relative to the luma grid.
//!
//! # Chroma siting
//!
//! Positions are given per chroma plane and per axis, as a fraction of the
//! subsampling block: 0 puts the chroma sample on the first luma sample of
//! the block, 0.5 in the middle, 1 on the last one.
//!
//! ```text
//!  luma:    x     x     x     x        (2x horizontal subsampling)
//!  pos 0:   c           c              (co-sited, MPEG-2 4:2:0 horizontally)
//!  pos 0.5:    c           c           (centered, JPEG)
//! ```
//!
//! Cb and Cr are sited independently since some 4:2:2 variants put them
//! in different places.
//!
//! # Example
//!
//! ```rust
//! use vfx_ycbcr::{LumaStandard, YCbCrFormat};
//!
//! // 8-bit studio range 4:2:0 with left-sited chroma
//! let format = YCbCrFormat::new(LumaStandard::Rec709, false, 256)
//!     .with_subsampling(2, 2)
//!     .with_chroma_position(0.0, 0.5);
//! assert!(format.validate().is_ok());
//! ```

use vfx_core::{Error, Result};

use crate::LumaStandard;

/// Description of one Y'CbCr encoding.
///
/// Plain value type; derive matrices with [`crate::ycbcr_to_rgb`] and chroma
/// geometry with [`crate::chroma_geometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct YCbCrFormat {
    /// Luma coefficient standard.
    pub luma_coefficients: LumaStandard,

    /// Full range (codes span 0..num_levels-1) or studio range.
    pub full_range: bool,

    /// Number of code levels: 256 for 8-bit, 1024 for 10-bit.
    pub num_levels: u32,

    /// Luma samples per chroma sample, horizontally.
    pub chroma_subsampling_x: u32,

    /// Luma samples per chroma sample, vertically.
    pub chroma_subsampling_y: u32,

    /// Horizontal siting of Cb within a subsampling block, in [0, 1].
    pub cb_x_position: f32,

    /// Vertical siting of Cb within a subsampling block, in [0, 1].
    pub cb_y_position: f32,

    /// Horizontal siting of Cr within a subsampling block, in [0, 1].
    pub cr_x_position: f32,

    /// Vertical siting of Cr within a subsampling block, in [0, 1].
    pub cr_y_position: f32,
}

impl Default for YCbCrFormat {
    /// 8-bit studio range Rec.601, 4:4:4.
    fn default() -> Self {
        Self::new(LumaStandard::Rec601, false, 256)
    }
}

impl YCbCrFormat {
    /// Creates a 4:4:4 format with centered chroma.
    pub const fn new(luma_coefficients: LumaStandard, full_range: bool, num_levels: u32) -> Self {
        Self {
            luma_coefficients,
            full_range,
            num_levels,
            chroma_subsampling_x: 1,
            chroma_subsampling_y: 1,
            cb_x_position: 0.5,
            cb_y_position: 0.5,
            cr_x_position: 0.5,
            cr_y_position: 0.5,
        }
    }

    /// Creates a format from a bit depth (`num_levels = 2^bits`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use vfx_ycbcr::{LumaStandard, YCbCrFormat};
    ///
    /// let f = YCbCrFormat::from_bit_depth(LumaStandard::Rec2020, false, 10);
    /// assert_eq!(f.num_levels, 1024);
    /// ```
    pub const fn from_bit_depth(luma_coefficients: LumaStandard, full_range: bool, bits: u32) -> Self {
        Self::new(luma_coefficients, full_range, 1 << bits)
    }

    /// Sets the subsampling factors.
    pub const fn with_subsampling(mut self, x: u32, y: u32) -> Self {
        self.chroma_subsampling_x = x;
        self.chroma_subsampling_y = y;
        self
    }

    /// Sets the siting of both chroma planes.
    pub const fn with_chroma_position(self, x: f32, y: f32) -> Self {
        self.with_cb_position(x, y).with_cr_position(x, y)
    }

    /// Sets the siting of the Cb plane.
    pub const fn with_cb_position(mut self, x: f32, y: f32) -> Self {
        self.cb_x_position = x;
        self.cb_y_position = y;
        self
    }

    /// Sets the siting of the Cr plane.
    pub const fn with_cr_position(mut self, x: f32, y: f32) -> Self {
        self.cr_x_position = x;
        self.cr_y_position = y;
        self
    }

    /// Largest code value (`num_levels - 1`).
    #[inline]
    pub const fn max_code(&self) -> u32 {
        self.num_levels.saturating_sub(1)
    }

    /// Checks the descriptor invariants.
    ///
    /// - `num_levels > 1`, and at least 256 for studio range (the studio
    ///   constants are defined in multiples of one 8-bit step)
    /// - subsampling factors of at least 1
    /// - finite siting positions in [0, 1]
    pub fn validate(&self) -> Result<()> {
        if self.num_levels < 2 {
            return Err(Error::invalid_format(
                "num_levels",
                format!("must be greater than 1, got {}", self.num_levels),
            ));
        }
        if !self.full_range && self.num_levels < 256 {
            return Err(Error::invalid_format(
                "num_levels",
                format!("must be at least 256 for studio range, got {}", self.num_levels),
            ));
        }
        if self.chroma_subsampling_x == 0 {
            return Err(Error::invalid_format("chroma_subsampling_x", "must be at least 1"));
        }
        if self.chroma_subsampling_y == 0 {
            return Err(Error::invalid_format("chroma_subsampling_y", "must be at least 1"));
        }
        let positions = [
            ("cb_x_position", self.cb_x_position),
            ("cb_y_position", self.cb_y_position),
            ("cr_x_position", self.cr_x_position),
            ("cr_y_position", self.cr_y_position),
        ];
        for (field, pos) in positions {
            if !(0.0..=1.0).contains(&pos) {
                return Err(Error::invalid_format(field, format!("must be in [0, 1], got {pos}")));
            }
        }
        Ok(())
    }
}
