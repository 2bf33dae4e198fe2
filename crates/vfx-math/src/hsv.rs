//! HSV to RGB conversion for generating test colors.
//!
//! Hue is given in radians. A single negative turn is wrapped into range,
//! which is enough for hues produced by `atan2`.

use std::f32::consts::PI;

const LUMA_709: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Converts HSV to RGB.
///
/// # Example
///
/// ```rust
/// use vfx_math::hsv_to_rgb;
///
/// assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
/// assert_eq!(hsv_to_rgb(0.0, 0.0, 0.5), [0.5, 0.5, 0.5]);
/// ```
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let h = if h < 0.0 { h + 2.0 * PI } else { h };
    let c = v * s;
    let hp = h.to_degrees() / 60.0;
    let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());

    let [r, g, b] = match hp {
        hp if (0.0..1.0).contains(&hp) => [c, x, 0.0],
        hp if (1.0..2.0).contains(&hp) => [x, c, 0.0],
        hp if (2.0..3.0).contains(&hp) => [0.0, c, x],
        hp if (3.0..4.0).contains(&hp) => [0.0, x, c],
        hp if (4.0..5.0).contains(&hp) => [x, 0.0, c],
        _ => [c, 0.0, x],
    };

    let m = v - c;
    [r + m, g + m, b + m]
}

/// Converts HSV to RGB, then rescales so the Rec.709 luminance matches that
/// of the fully desaturated color with the same value.
///
/// Colors with luminance at or below 1e-3 are returned unscaled.
pub fn hsv_to_rgb_normalized(h: f32, s: f32, v: f32) -> [f32; 3] {
    let rgb = hsv_to_rgb(h, s, v);
    let reference = hsv_to_rgb(h, 0.0, v);
    let lum = luminance(rgb);
    if lum > 1e-3 {
        let fac = luminance(reference) / lum;
        rgb.map(|c| c * fac)
    } else {
        rgb
    }
}

#[inline]
fn luminance(rgb: [f32; 3]) -> f32 {
    rgb[0] * LUMA_709[0] + rgb[1] * LUMA_709[1] + rgb[2] * LUMA_709[2]
}
