//! Merging two filter samples into one bilinear fetch.
//!
//! Two adjacent texels with weights `w1` and `w2` can be read with a single
//! linear-filtered fetch at a position between them, scaled by `w1 + w2`.
//! That only holds exactly if the position is stored and interpolated
//! exactly, which it is not: the position is rounded into the storage
//! format, and the hardware quantizes the interpolation fraction. This
//! module picks the weight that best compensates for both, and reports how
//! far the result is from the requested weights.

use vfx_core::StorageFormat;

use crate::{CombinedTap, Sample, SubtexelPrecision};

/// Weight sums below this are treated as zero; the tap is then centered.
pub const WEIGHT_SUM_EPSILON: f32 = 1e-6;

/// Combines two samples into one tap stored in format `T`.
///
/// The fetch position is placed where a linear fetch reproduces the
/// `w1 : w2` ratio, rounded into `T`. From the interpolation fraction the
/// hardware will actually use at that stored position, the weight is chosen
/// to minimize `(w(1-z) - w1)^2 + (wz - w2)^2`, then rounded into `T`. The
/// returned error uses the rounded weight.
///
/// If both positions coincide, both samples read the same texel: the tap
/// sits there with weight `w1 + w2`, and the error is the rounding of that
/// weight.
///
/// # Panics
///
/// Panics if `w1` and `w2` have different signs (or either is NaN). A
/// linear fetch cannot produce weights of opposite sign.
///
/// # Example
///
/// ```rust
/// use vfx_core::f16;
/// use vfx_taps::{combine_two_samples, SubtexelPrecision};
///
/// let tap = combine_two_samples::<f16>(1.0, 1.0, 0.0, 1.0, SubtexelPrecision::from_bits(8));
/// assert_eq!(tap.position_f32(), 0.5);
/// assert_eq!(tap.weight_f32(), 2.0);
/// assert_eq!(tap.sum_sq_error, 0.0);
/// ```
pub fn combine_two_samples<T: StorageFormat>(
    w1: f32,
    w2: f32,
    pos1: f32,
    pos2: f32,
    precision: SubtexelPrecision,
) -> CombinedTap<T> {
    assert!(
        w1 * w2 >= 0.0,
        "cannot combine samples with weights of different sign ({w1}, {w2})"
    );

    if pos1 == pos2 {
        let total = w1 + w2;
        let weight = T::from_f32(total);
        let residual = weight.to_f32() - total;
        return CombinedTap {
            position: T::from_f32(pos1),
            weight,
            sum_sq_error: residual * residual,
        };
    }

    let sum = w1 + w2;
    let z = if sum.abs() < WEIGHT_SUM_EPSILON { 0.5 } else { w2 / sum };
    let position = T::from_f32(pos1 + z * (pos2 - pos1));

    // What the hardware will actually interpolate with.
    let z = (position.to_f32() - pos1) / (pos2 - pos1);
    let z = precision.snap(z);

    let optimal = (w1 + z * (w2 - w1)) / (z * z + (1.0 - z) * (1.0 - z));
    let weight = T::from_f32(optimal);

    let w = weight.to_f32();
    let e1 = w * (1.0 - z) - w1;
    let e2 = w * z - w2;

    CombinedTap {
        position,
        weight,
        sum_sq_error: e1 * e1 + e2 * e2,
    }
}

/// Stores one sample as its own tap.
///
/// The error is the squared weight rounding residual; position rounding is
/// not counted since a lone tap has no neighbor to bleed into.
pub fn single_tap<T: StorageFormat>(sample: Sample) -> CombinedTap<T> {
    let weight = T::from_f32(sample.weight);
    let residual = weight.to_f32() - sample.weight;
    CombinedTap {
        position: T::from_f32(sample.position),
        weight,
        sum_sq_error: residual * residual,
    }
}
