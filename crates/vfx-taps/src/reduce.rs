//! Reducing a whole filter kernel to as few taps as possible.

use tracing::debug;
use vfx_core::StorageFormat;

use crate::{combine_two_samples, single_tap, CombinedTap, Sample, SubtexelPrecision};

/// Reduces a list of filter samples to hardware taps.
///
/// Samples are walked in order. Each pair of neighbors with weights of the
/// same sign is merged into one tap when the merge error stays within
/// `max_sq_error`; otherwise the first sample becomes a tap of its own.
/// Zero-weight samples are dropped. Neighbors are expected to be adjacent
/// texels so that one linear fetch covers both.
///
/// # Example
///
/// ```rust
/// use vfx_core::f16;
/// use vfx_taps::{reduce_taps, Sample, SubtexelPrecision};
///
/// let kernel = [
///     Sample::new(0.25, 0.5),
///     Sample::new(0.25, 1.5),
///     Sample::new(0.5, 2.5),
///     Sample::new(0.0, 3.5),
/// ];
/// let taps = reduce_taps::<f16>(&kernel, SubtexelPrecision::from_bits(8), 1e-6);
/// assert_eq!(taps.len(), 2);
/// assert_eq!(taps[0].position_f32(), 1.0);
/// ```
pub fn reduce_taps<T: StorageFormat>(
    samples: &[Sample],
    precision: SubtexelPrecision,
    max_sq_error: f32,
) -> Vec<CombinedTap<T>> {
    let mut taps = Vec::with_capacity(samples.len());
    let mut total_error = 0.0f32;
    let mut merged = 0usize;

    let mut i = 0;
    while i < samples.len() {
        let a = samples[i];
        if a.weight == 0.0 {
            i += 1;
            continue;
        }

        if let Some(&b) = samples.get(i + 1) {
            if a.weight * b.weight > 0.0 {
                let tap = combine_two_samples::<T>(a.weight, b.weight, a.position, b.position, precision);
                if tap.sum_sq_error <= max_sq_error {
                    total_error += tap.sum_sq_error;
                    taps.push(tap);
                    merged += 1;
                    i += 2;
                    continue;
                }
            }
        }

        let tap = single_tap::<T>(a);
        total_error += tap.sum_sq_error;
        taps.push(tap);
        i += 1;
    }

    debug!(
        format = T::NAME,
        samples = samples.len(),
        taps = taps.len(),
        merged,
        total_error,
        "reduced filter taps"
    );
    taps
}
