//! Integer helpers for texture dimensions.

/// Divides `a` by `b`, rounding up.
///
/// Used for the size of a subsampled plane: a 5-pixel wide luma plane with
/// 2x horizontal subsampling has a 3-pixel wide chroma plane.
///
/// # Panics
///
/// Panics if `b` is zero.
///
/// # Example
///
/// ```rust
/// use vfx_math::div_round_up;
///
/// assert_eq!(div_round_up(5, 2), 3);
/// assert_eq!(div_round_up(4, 2), 2);
/// ```
#[inline]
pub const fn div_round_up(a: u32, b: u32) -> u32 {
    a.div_ceil(b)
}

/// Rounds `v` up to the next power of two.
///
/// Powers of two map to themselves, and 0 maps to 0 (as the classic
/// bit-smearing formulation does).
///
/// # Example
///
/// ```rust
/// use vfx_math::next_power_of_two;
///
/// assert_eq!(next_power_of_two(0), 0);
/// assert_eq!(next_power_of_two(1), 1);
/// assert_eq!(next_power_of_two(600), 1024);
/// ```
#[inline]
pub const fn next_power_of_two(v: u32) -> u32 {
    if v == 0 {
        0
    } else {
        v.next_power_of_two()
    }
}
