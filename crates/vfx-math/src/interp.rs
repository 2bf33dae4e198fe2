//! Interpolation and texture fetch emulation.
//!
//! The sampling functions reproduce what a GPU texture unit does with
//! `GL_LINEAR` filtering and `GL_CLAMP_TO_EDGE` wrapping, in texel units:
//! texel `i` has its center at `i + 0.5`, so a fetch at `2.5` returns texel 2
//! exactly and a fetch at `3.0` is the average of texels 2 and 3.
//!
//! They serve as the CPU reference when validating chroma sampling geometry.
//!
//! # Usage
//!
//! ```rust
//! use vfx_math::{lerp, sample_linear_clamped};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//!
//! let row = [0.0, 1.0];
//! assert_eq!(sample_linear_clamped(&row, 1.0), 0.5);
//! assert_eq!(sample_linear_clamped(&row, -4.0), 0.0); // clamped
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t` value.
/// Returns 0 when `a` and `b` coincide.
///
/// # Example
///
/// ```rust
/// use vfx_math::inverse_lerp;
///
/// assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
/// assert_eq!(inverse_lerp(3.0, 3.0, 5.0), 0.0);
/// ```
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < 1e-15 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Splits a texel-space coordinate into the two texels a linear fetch
/// blends and the weight of the second one.
#[inline]
fn linear_taps(coord: f64, len: usize) -> (usize, usize, f64) {
    let t = coord - 0.5;
    let base = t.floor();
    let frac = t - base;
    let last = len as i64 - 1;
    let i0 = (base as i64).clamp(0, last) as usize;
    let i1 = (base as i64 + 1).clamp(0, last) as usize;
    (i0, i1, frac)
}

/// Samples a 1D texture with linear filtering and clamp-to-edge wrapping.
///
/// `coord` is in texel units. Returns 0 for an empty texture.
pub fn sample_linear_clamped(data: &[f64], coord: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let (i0, i1, frac) = linear_taps(coord, data.len());
    lerp(data[i0], data[i1], frac)
}

/// Samples a row-major 2D texture with bilinear filtering and
/// clamp-to-edge wrapping.
///
/// `x` and `y` are in texel units. Returns 0 for an empty texture.
///
/// # Example
///
/// ```rust
/// use vfx_math::sample_bilinear_clamped;
///
/// let tex = [0.0, 1.0,
///            2.0, 3.0];
/// assert_eq!(sample_bilinear_clamped(&tex, 2, 2, 1.0, 1.0), 1.5);
/// assert_eq!(sample_bilinear_clamped(&tex, 2, 2, 1.5, 0.5), 1.0);
/// ```
pub fn sample_bilinear_clamped(data: &[f64], width: usize, height: usize, x: f64, y: f64) -> f64 {
    if width == 0 || height == 0 {
        return 0.0;
    }
    debug_assert_eq!(data.len(), width * height);
    let (x0, x1, fx) = linear_taps(x, width);
    let (y0, y1, fy) = linear_taps(y, height);
    let top = lerp(data[y0 * width + x0], data[y0 * width + x1], fx);
    let bottom = lerp(data[y1 * width + x0], data[y1 * width + x1], fx);
    lerp(top, bottom, fy)
}
