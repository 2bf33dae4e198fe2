//! Limited-precision storage formats for GPU constants.
//!
//! Values computed on the CPU (texture coordinates, filter weights) end up in
//! vertex attributes, uniforms or textures whose format may have far fewer
//! significant bits than the `f32` they were computed in. Algorithms that need
//! to know what the GPU will *actually* see are written generically over
//! [`StorageFormat`] and round through it.
//!
//! # Implementations
//!
//! | Type   | Significand bits | Typical use                         |
//! |--------|------------------|-------------------------------------|
//! | `f32`  | 24               | `GL_RGBA32F`, `float` uniforms      |
//! | `f16`  | 11               | `GL_RGBA16F`, half vertex attributes |
//! | `bf16` | 8                | bfloat16 storage                    |
//!
//! # Example
//!
//! ```
//! use vfx_core::{StorageFormat, f16};
//!
//! let stored = <f16 as StorageFormat>::from_f32(10.666667);
//! // f16 spacing at 10.x is 1/128
//! assert_eq!(stored.to_f32(), 10.6640625);
//! ```
//!
//! # Dependencies
//!
//! - `half` crate for `f16` and `bf16`

use half::{bf16, f16};

/// A numeric format that `f32` values are rounded into.
///
/// Round-to-nearest-even is used by every implementation, matching what the
/// GPU driver does on upload.
pub trait StorageFormat: Copy + Clone + Default + Send + Sync + PartialEq + std::fmt::Debug + 'static {
    /// Human readable name (`"f32"`, `"f16"`, `"bf16"`).
    const NAME: &'static str;

    /// Number of significand bits, including the implicit leading one.
    const SIGNIFICAND_BITS: u32;

    /// Rounds an `f32` into this format.
    fn from_f32(v: f32) -> Self;

    /// Widens the stored value back to `f32`. Exact for every implementation.
    fn to_f32(self) -> f32;

    /// Returns `v` after a trip through this format.
    #[inline]
    fn round_trip(v: f32) -> f32 {
        Self::from_f32(v).to_f32()
    }

    /// Distance from 1.0 to the next representable value.
    #[inline]
    fn epsilon() -> f32 {
        (2.0f32).powi(1 - Self::SIGNIFICAND_BITS as i32)
    }
}

impl StorageFormat for f32 {
    const NAME: &'static str = "f32";
    const SIGNIFICAND_BITS: u32 = 24;

    #[inline]
    fn from_f32(v: f32) -> Self {
        v
    }

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }
}

impl StorageFormat for f16 {
    const NAME: &'static str = "f16";
    const SIGNIFICAND_BITS: u32 = 11;

    #[inline]
    fn from_f32(v: f32) -> Self {
        f16::from_f32(v)
    }

    #[inline]
    fn to_f32(self) -> f32 {
        f16::to_f32(self)
    }
}

impl StorageFormat for bf16 {
    const NAME: &'static str = "bf16";
    const SIGNIFICAND_BITS: u32 = 8;

    #[inline]
    fn from_f32(v: f32) -> Self {
        bf16::from_f32(v)
    }

    #[inline]
    fn to_f32(self) -> f32 {
        bf16::to_f32(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_f32_is_lossless() {
        assert_eq!(<f32 as StorageFormat>::round_trip(0.1), 0.1);
        assert_eq!(<f32 as StorageFormat>::epsilon(), f32::EPSILON);
    }

    #[test]
    fn test_f16_rounding() {
        assert_eq!(<f16 as StorageFormat>::round_trip(0.5), 0.5);
        assert_eq!(<f16 as StorageFormat>::round_trip(10.666667), 10.6640625);
        assert_eq!(<f16 as StorageFormat>::epsilon(), f16::EPSILON.to_f32());
    }

    #[test]
    fn test_bf16_rounding() {
        assert_eq!(<bf16 as StorageFormat>::round_trip(10.666667), 10.6875);
        assert_relative_eq!(<bf16 as StorageFormat>::epsilon(), 0.0078125);
    }

    #[test]
    fn test_precision_ordering() {
        let v = 1.0 / 3.0;
        let e32 = (<f32 as StorageFormat>::round_trip(v) - v).abs();
        let e16 = (<f16 as StorageFormat>::round_trip(v) - v).abs();
        let eb16 = (<bf16 as StorageFormat>::round_trip(v) - v).abs();
        assert!(e32 <= e16);
        assert!(e16 <= eb16);
    }
}
