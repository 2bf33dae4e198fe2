//! Value types shared by the tap combiners.

use vfx_core::StorageFormat;

/// One weighted filter sample: read the texel at `position`, multiply by
/// `weight`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Filter weight.
    pub weight: f32,
    /// Texture coordinate of the sample.
    pub position: f32,
}

impl Sample {
    /// Creates a sample.
    #[inline]
    pub const fn new(weight: f32, position: f32) -> Self {
        Self { weight, position }
    }
}

/// Resolution of the hardware bilinear interpolator.
///
/// Texture units do not interpolate with a full float weight; the fraction
/// between two texels is quantized to `num_subtexels` steps. OpenGL only
/// guarantees 8 bits, most hardware has more.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubtexelPrecision {
    /// Number of interpolation steps between two texels.
    pub num_subtexels: f32,
    /// `1 / num_subtexels`.
    pub inv_num_subtexels: f32,
}

impl SubtexelPrecision {
    /// The OpenGL minimum.
    pub const GL_MINIMUM: Self = Self::from_bits(8);

    /// Creates a precision of `num_subtexels` steps. Zero is treated as one.
    pub const fn new(num_subtexels: u32) -> Self {
        let n = if num_subtexels == 0 { 1 } else { num_subtexels };
        Self {
            num_subtexels: n as f32,
            inv_num_subtexels: 1.0 / n as f32,
        }
    }

    /// Creates a precision of `2^bits` steps, `bits` capped at 24.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vfx_taps::SubtexelPrecision;
    ///
    /// assert_eq!(SubtexelPrecision::from_bits(8), SubtexelPrecision::new(256));
    /// ```
    pub const fn from_bits(bits: u32) -> Self {
        let bits = if bits > 24 { 24 } else { bits };
        Self::new(1 << bits)
    }

    /// Snaps an interpolation fraction to the grid, ties to even.
    #[inline]
    pub fn snap(&self, z: f32) -> f32 {
        (z * self.num_subtexels).round_ties_even() * self.inv_num_subtexels
    }
}

impl Default for SubtexelPrecision {
    fn default() -> Self {
        Self::GL_MINIMUM
    }
}

/// A tap as it will be uploaded: position and weight in storage format `T`,
/// plus the squared error against the samples it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CombinedTap<T: StorageFormat> {
    /// Texture coordinate to fetch at.
    pub position: T,
    /// Weight to multiply the fetched value by.
    pub weight: T,
    /// Sum of squared differences between the effective and requested
    /// per-sample weights.
    pub sum_sq_error: f32,
}

impl<T: StorageFormat> CombinedTap<T> {
    /// Position widened to `f32`.
    #[inline]
    pub fn position_f32(&self) -> f32 {
        self.position.to_f32()
    }

    /// Weight widened to `f32`.
    #[inline]
    pub fn weight_f32(&self) -> f32 {
        self.weight.to_f32()
    }
}
