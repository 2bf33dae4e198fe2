//! Small Y'CbCr images with hand-computed RGB.
//!
//! Pure colors are encoded with the formulas of Rec.601 section 2.5.4 and
//! Rec.709 items 3.4 and 3.5; the codes are rounded, so decoding needs some
//! leeway.

use vfx_ycbcr::{decode_planes, LumaStandard, YCbCrFormat, YCbCrPlanes};

/// Black, white, red, green, blue.
const PRIMARIES: [[f64; 3]; 5] = [
    [0.0, 0.0, 0.0],
    [1.0, 1.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

fn decode(format: &YCbCrFormat, width: u32, height: u32, y: &[u8], cb: &[u8], cr: &[u8]) -> Vec<[f64; 3]> {
    decode_planes(format, &YCbCrPlanes::new(width, height, y, cb, cr)).unwrap()
}

fn assert_rgb_close(actual: &[[f64; 3]], expected: &[[f64; 3]], tolerance: f64) {
    assert_eq!(actual.len(), expected.len());
    for (i, (got, want)) in actual.iter().zip(expected).enumerate() {
        for c in 0..3 {
            assert!(
                (got[c] - want[c]).abs() <= tolerance,
                "pixel {i} channel {c}: {} vs {}",
                got[c],
                want[c]
            );
        }
    }
}

fn assert_blue_close(actual: &[[f64; 3]], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len());
    for (i, (got, want)) in actual.iter().zip(expected).enumerate() {
        assert!((got[2] - want).abs() <= tolerance, "pixel {i}: {} vs {want}", got[2]);
    }
}

#[test]
fn test_simple_444() {
    let format = YCbCrFormat::new(LumaStandard::Rec601, false, 256);
    let y = [16u8, 235, 81, 145, 41];
    let cb = [128u8, 128, 90, 54, 240];
    let cr = [128u8, 128, 240, 34, 110];
    assert_rgb_close(&decode(&format, 1, 5, &y, &cb, &cr), &PRIMARIES, 0.025);
}

#[test]
fn test_full_range_rec601() {
    // Same colors without the studio scaling: every component spans 0..255
    let format = YCbCrFormat::new(LumaStandard::Rec601, true, 256);
    let y = [0u8, 255, 76, 150, 29];
    let cb = [128u8, 128, 85, 44, 255];
    let cr = [128u8, 128, 255, 21, 107];
    assert_rgb_close(&decode(&format, 1, 5, &y, &cb, &cr), &PRIMARIES, 0.025);
}

#[test]
fn test_rec709() {
    let format = YCbCrFormat::new(LumaStandard::Rec709, false, 256);
    let y = [16u8, 235, 63, 173, 32];
    let cb = [128u8, 128, 102, 42, 240];
    let cr = [128u8, 128, 240, 26, 118];
    assert_rgb_close(&decode(&format, 1, 5, &y, &cb, &cr), &PRIMARIES, 0.025);
}

const GRAY_4X4: [u8; 16] = [126; 16];
const CB_2X2: [u8; 4] = [64, 128, 128, 192];
const CR_2X2: [u8; 4] = [128; 4];

#[test]
fn test_subsampling_420_centered() {
    let format = YCbCrFormat::new(LumaStandard::Rec601, false, 256).with_subsampling(2, 2);
    // Chroma samples sit between luma rows and columns; blue is 0, 0.5,
    // 0.5 and 1 at their centers.
    let expected = [
        0.000, 0.125, 0.375, 0.500,
        0.125, 0.250, 0.500, 0.625,
        0.375, 0.500, 0.750, 0.875,
        0.500, 0.625, 0.875, 1.000,
    ];
    let rgb = decode(&format, 4, 4, &GRAY_4X4, &CB_2X2, &CR_2X2);
    assert_blue_close(&rgb, &expected, 0.01);
}

#[test]
fn test_subsampling_420_left_sited() {
    let format = YCbCrFormat::new(LumaStandard::Rec601, false, 256)
        .with_subsampling(2, 2)
        .with_chroma_position(0.0, 0.5);
    // Chroma samples are co-sited with luma columns 0 and 2.
    let expected = [
        0.000, 0.250, 0.500, 0.500,
        0.125, 0.375, 0.625, 0.625,
        0.375, 0.625, 0.875, 0.875,
        0.500, 0.750, 1.000, 1.000,
    ];
    let rgb = decode(&format, 4, 4, &GRAY_4X4, &CB_2X2, &CR_2X2);
    assert_blue_close(&rgb, &expected, 0.01);
}

#[test]
fn test_subsampling_422_planes_sited_apart() {
    // Cb co-sited left, Cr co-sited right: a constant Cb and a ramp in Cr
    // must land on different luma columns.
    let format = YCbCrFormat::new(LumaStandard::Rec601, true, 256)
        .with_subsampling(2, 1)
        .with_cb_position(0.0, 0.5)
        .with_cr_position(1.0, 0.5);
    let y = [128u8; 4];
    let cb = [128u8; 2];
    let cr = [128u8, 228];
    let rgb = decode(&format, 4, 1, &y, &cb, &cr);
    let red: Vec<f64> = rgb.iter().map(|p| p[0]).collect();
    // Cr samples sit on luma columns 1 and 3
    assert!((red[0] - red[1]).abs() < 1e-9);
    assert!(red[2] > red[1] && red[3] > red[2]);
    assert!((red[2] - (red[1] + red[3]) / 2.0).abs() < 1e-9);
}
