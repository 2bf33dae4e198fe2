//! Integration tests for the vfx crates.
//!
//! This crate contains end-to-end tests that check the crates against
//! published reference values and against each other: matrices against the
//! ITU recommendations, the CPU decode against hand-computed images, the
//! generated shader text against the matrices it was built from.

#[cfg(test)]
mod images;

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rayon::prelude::*;
    use tempfile::tempdir;
    use vfx_core::{bf16, f16, StorageFormat};
    use vfx_gpu::YCbCrInputShader;
    use vfx_math::{hsv_to_rgb, hsv_to_rgb_normalized, Mat3, Vec3};
    use vfx_taps::{combine_two_samples, reduce_taps, Sample, SubtexelPrecision};
    use vfx_ycbcr::{
        chroma_geometries, chroma_plane_size, decode_planes, ycbcr_to_rgb, LumaStandard, YCbCrFormat,
        YCbCrPlanes,
    };

    fn assert_mat3_eq(actual: &Mat3, expected: [[f64; 3]; 3], epsilon: f64) {
        for (r, row) in expected.iter().enumerate() {
            for (c, &want) in row.iter().enumerate() {
                assert_abs_diff_eq!(actual.m[r][c], want, epsilon = epsilon);
            }
        }
    }

    fn all_formats() -> Vec<YCbCrFormat> {
        let mut formats = Vec::new();
        for standard in LumaStandard::ALL {
            for full_range in [false, true] {
                for num_levels in [256, 1024, 4096] {
                    for (sx, sy) in [(1, 1), (2, 1), (2, 2)] {
                        for pos in [0.0, 0.5, 1.0] {
                            formats.push(
                                YCbCrFormat::new(standard, full_range, num_levels)
                                    .with_subsampling(sx, sy)
                                    .with_cb_position(pos, 0.5)
                                    .with_cr_position(0.5, pos),
                            );
                        }
                    }
                }
            }
        }
        formats
    }

    // ---------------------------------------------------------------------
    // Conversion matrices
    // ---------------------------------------------------------------------

    /// Rec.601 section 2.5.3, 8-bit studio range encode.
    #[test]
    fn test_rec601_studio_forward_matrix() {
        let conv = ycbcr_to_rgb(&YCbCrFormat::new(LumaStandard::Rec601, false, 256)).unwrap();
        let forward = conv.rgb_to_ycbcr().unwrap() * 255.0;
        assert_mat3_eq(
            &forward,
            [
                [65.481, 128.553, 24.966],
                [-37.797, -74.203, 112.0],
                [112.0, -93.786, -18.214],
            ],
            1e-3,
        );
    }

    /// JFIF full range Rec.601.
    #[test]
    fn test_rec601_full_range_matrix() {
        let conv = ycbcr_to_rgb(&YCbCrFormat::new(LumaStandard::Rec601, true, 256)).unwrap();
        assert_mat3_eq(
            &conv.matrix,
            [
                [1.0, 0.0, 1.402],
                [1.0, -0.34414, -0.71414],
                [1.0, 1.772, 0.0],
            ],
            1e-5,
        );
        assert_mat3_eq(
            &conv.rgb_to_ycbcr().unwrap(),
            [
                [0.299, 0.587, 0.114],
                [-0.168736, -0.331264, 0.5],
                [0.5, -0.418688, -0.081312],
            ],
            1e-6,
        );
    }

    #[test]
    fn test_black_and_white_every_format() {
        for format in all_formats() {
            let conv = ycbcr_to_rgb(&format).unwrap();
            let n = format.num_levels;
            let (black, white, mid) = if format.full_range {
                ([0, n / 2, n / 2], [n - 1, n / 2, n / 2], n / 2)
            } else {
                let k = n / 256;
                ([16 * k, 128 * k, 128 * k], [235 * k, 128 * k, 128 * k], 128 * k)
            };
            assert!(conv.apply_codes(black).max_abs_diff(Vec3::ZERO) < 1e-9, "{format:?}");
            assert!(conv.apply_codes(white).max_abs_diff(Vec3::ONE) < 1e-9, "{format:?}");
            assert_eq!(black[1], mid);
        }
    }

    #[test]
    fn test_primaries_survive_code_rounding() {
        let primaries = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
        ];
        for standard in LumaStandard::ALL {
            for full_range in [false, true] {
                let conv = ycbcr_to_rgb(&YCbCrFormat::new(standard, full_range, 256)).unwrap();
                for rgb in primaries {
                    let ycbcr = conv.encode(rgb).unwrap();
                    let codes = (ycbcr * 255.0).to_array().map(|c| c.round().clamp(0.0, 255.0) as u32);
                    let decoded = conv.apply_codes(codes);
                    assert!(decoded.max_abs_diff(rgb) < 1e-2, "{standard} {full_range} {rgb:?} -> {decoded:?}");
                }
            }
        }
    }

    #[test]
    fn test_h273_codes() {
        let from_code = ycbcr_to_rgb(&YCbCrFormat::new(LumaStandard::from_h273(1).unwrap(), false, 256)).unwrap();
        let from_enum = ycbcr_to_rgb(&YCbCrFormat::new(LumaStandard::Rec709, false, 256)).unwrap();
        assert_eq!(from_code, from_enum);

        let err = LumaStandard::from_h273(10).unwrap_err();
        assert!(err.is_standard_error());
    }

    #[test]
    fn test_hsv_wheel_roundtrip_10bit() {
        let format = YCbCrFormat::from_bit_depth(LumaStandard::Rec2020, false, 10);
        let conv = ycbcr_to_rgb(&format).unwrap();

        let colors: Vec<Vec3> = (0..24)
            .map(|i| {
                let h = (i as f32 - 12.0) * std::f32::consts::PI / 12.0;
                let [r, g, b] = hsv_to_rgb(h, 0.8, 0.7);
                Vec3::new(f64::from(r), f64::from(g), f64::from(b))
            })
            .collect();

        let mut planes: [Vec<u16>; 3] = Default::default();
        for rgb in &colors {
            let ycbcr = conv.encode(*rgb).unwrap();
            for (plane, v) in planes.iter_mut().zip(ycbcr.to_array()) {
                plane.push((v * 1023.0).round() as u16);
            }
        }

        let [y, cb, cr] = &planes;
        let decoded = decode_planes(&format, &YCbCrPlanes::new(24, 1, y, cb, cr)).unwrap();
        for (got, want) in decoded.iter().zip(colors.iter()) {
            assert!(Vec3::from_array(*got).max_abs_diff(*want) < 4e-3);
        }
    }

    #[test]
    fn test_normalized_hsv_matches_rec709_luma() {
        let luma_row = LumaStandard::Rec709.coefficients().rgb_to_ycbcr_matrix().row(0);
        for i in 0..12 {
            let h = i as f32 * 0.5;
            let [r, g, b] = hsv_to_rgb_normalized(h, 0.9, 0.6);
            let y = luma_row.dot(Vec3::new(f64::from(r), f64::from(g), f64::from(b)));
            assert_abs_diff_eq!(y, 0.6, epsilon = 1e-4);
        }
    }

    // ---------------------------------------------------------------------
    // Chroma siting
    // ---------------------------------------------------------------------

    /// Chroma sample index space: where a luma coordinate falls between the
    /// sited chroma samples, clamped at the ends.
    fn sited_taps(luma: f64, subsampling: u32, position: f32, len: usize) -> (usize, usize, f64) {
        let s = f64::from(subsampling);
        let first = 0.5 + f64::from(position) * (s - 1.0);
        let t = (luma - first) / s;
        let last = (len - 1) as f64;
        if t <= 0.0 {
            (0, 0, 0.0)
        } else if t >= last {
            (len - 1, len - 1, 0.0)
        } else {
            let j = t.floor();
            (j as usize, j as usize + 1, t - j)
        }
    }

    fn direct_chroma(plane: &[f64], cw: usize, ch: usize, fmt: (u32, u32, f32, f32), lx: f64, ly: f64) -> f64 {
        let (sx, sy, px, py) = fmt;
        let (x0, x1, fx) = sited_taps(lx, sx, px, cw);
        let (y0, y1, fy) = sited_taps(ly, sy, py, ch);
        let at = |x: usize, y: usize| plane[y * cw + x];
        let top = at(x0, y0) + (at(x1, y0) - at(x0, y0)) * fx;
        let bottom = at(x0, y1) + (at(x1, y1) - at(x0, y1)) * fx;
        top + (bottom - top) * fy
    }

    #[test]
    fn test_chroma_geometry_matches_sited_interpolation() {
        let (width, height) = (7u32, 5u32);
        let positions = [0.0f32, 0.5, 1.0];
        for sx in [1u32, 2] {
            for sy in [1u32, 2] {
                for px in positions {
                    for py in positions {
                        let format = YCbCrFormat::new(LumaStandard::Rec709, false, 256)
                            .with_subsampling(sx, sy)
                            .with_cb_position(px, py)
                            .with_cr_position(py, px);
                        let (cw, ch) = chroma_plane_size(&format, width, height).unwrap();
                        let (cw, ch) = (cw as usize, ch as usize);
                        let plane: Vec<f64> = (0..cw * ch)
                            .map(|i| {
                                let (x, y) = ((i % cw) as f64, (i / cw) as f64);
                                0.1 * x + 0.03 * y * y + 0.05 * x * y
                            })
                            .collect();

                        let [cb, cr] = chroma_geometries(&format).unwrap();
                        for y in 0..height {
                            for x in 0..width {
                                let (lx, ly) = (f64::from(x) + 0.5, f64::from(y) + 0.5);
                                let want_cb = direct_chroma(&plane, cw, ch, (sx, sy, px, py), lx, ly);
                                let want_cr = direct_chroma(&plane, cw, ch, (sx, sy, py, px), lx, ly);
                                let got_cb = cb.sample(&plane, cw, ch, lx, ly);
                                let got_cr = cr.sample(&plane, cw, ch, lx, ly);
                                assert_abs_diff_eq!(got_cb, want_cb, epsilon = 1e-9);
                                assert_abs_diff_eq!(got_cr, want_cr, epsilon = 1e-9);
                            }
                        }
                    }
                }
            }
        }
    }

    // ---------------------------------------------------------------------
    // Texture taps
    // ---------------------------------------------------------------------

    #[test]
    fn test_tap_error_ordered_by_storage_precision() {
        let precision = SubtexelPrecision::from_bits(16);
        let mut totals = [0.0f64; 3];
        let mut max_f32 = 0.0f32;
        for i in 1..=20 {
            for j in 1..=20 {
                let (w1, w2) = (i as f32 * 0.05, j as f32 * 0.05);
                let pos1 = 3.0 + (i * 7 + j) as f32 * 0.037;
                let pos2 = pos1 + 1.0;
                let e32 = combine_two_samples::<f32>(w1, w2, pos1, pos2, precision).sum_sq_error;
                let e16 = combine_two_samples::<f16>(w1, w2, pos1, pos2, precision).sum_sq_error;
                let eb16 = combine_two_samples::<bf16>(w1, w2, pos1, pos2, precision).sum_sq_error;
                totals[0] += f64::from(e32);
                totals[1] += f64::from(e16);
                totals[2] += f64::from(eb16);
                max_f32 = max_f32.max(e32);
            }
        }
        assert!(max_f32 < 1e-6, "{max_f32}");
        assert!(totals[0] < totals[1] && totals[1] < totals[2], "{totals:?}");
    }

    #[test]
    fn test_zero_weight_partner_is_exact_in_every_format() {
        fn check<T: StorageFormat>(precision: SubtexelPrecision) {
            for (w1, pos1) in [(0.75f32, 3.0f32), (-0.5, 12.0), (1.0, 0.5)] {
                let tap = combine_two_samples::<T>(w1, 0.0, pos1, pos1 + 1.0, precision);
                assert_eq!(tap.position_f32(), pos1, "{}", T::NAME);
                assert_eq!(tap.weight_f32(), w1, "{}", T::NAME);
                assert_eq!(tap.sum_sq_error, 0.0, "{}", T::NAME);
            }
        }
        for precision in [SubtexelPrecision::GL_MINIMUM, SubtexelPrecision::from_bits(16)] {
            check::<f32>(precision);
            check::<f16>(precision);
            check::<bf16>(precision);
        }
    }

    #[test]
    fn test_gaussian_kernel_reduction() {
        let sigma = 1.5f32;
        let raw: Vec<f32> = (0..8)
            .map(|i| {
                let x = i as f32 - 3.5;
                (-x * x / (2.0 * sigma * sigma)).exp()
            })
            .collect();
        let sum: f32 = raw.iter().sum();
        let samples: Vec<Sample> = raw
            .iter()
            .enumerate()
            .map(|(i, &w)| Sample::new(w / sum, i as f32 + 0.5))
            .collect();

        let taps = reduce_taps::<f16>(&samples, SubtexelPrecision::from_bits(8), 1e-4);
        assert_eq!(taps.len(), 4);
        let total: f32 = taps.iter().map(|t| t.weight_f32()).sum();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-2);
        for pair in taps.windows(2) {
            assert!(pair[0].position_f32() < pair[1].position_f32());
        }
    }

    // ---------------------------------------------------------------------
    // Shader text
    // ---------------------------------------------------------------------

    fn parse_floats(line: &str) -> Vec<f64> {
        line.split(',')
            .map(|s| s.trim().trim_end_matches(");").trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>().unwrap())
            .collect()
    }

    #[test]
    fn test_shader_matrix_parses_back() {
        for standard in LumaStandard::ALL {
            let format = YCbCrFormat::new(standard, false, 1024).with_subsampling(2, 2);
            let conv = ycbcr_to_rgb(&format).unwrap();
            let src = YCbCrInputShader::new(format, 64, 32).fragment("in").unwrap();

            let lines: Vec<&str> = src.lines().collect();
            let start = lines
                .iter()
                .position(|l| l.starts_with("const mat3 in_inv_ycbcr_matrix"))
                .unwrap();
            for c in 0..3 {
                let values = parse_floats(lines[start + 1 + c]);
                assert_eq!(values.len(), 3);
                let col = conv.matrix.col(c).to_array();
                for (got, want) in values.iter().zip(col.iter()) {
                    assert!((got - want).abs() <= 1e-8 * want.abs().max(1.0), "{standard}: {got} vs {want}");
                }
            }
            assert!(!src.contains("PREFIX"));
            assert!(src.contains("uniform sampler2D in_tex_cr;"));
        }
    }

    // ---------------------------------------------------------------------
    // Configuration
    // ---------------------------------------------------------------------

    #[test]
    fn test_yaml_descriptor_with_defaults() {
        let yaml = "
luma_coefficients: rec709
num_levels: 1024
chroma_subsampling_x: 2
cb_x_position: 0.0
cr_x_position: 0.0
";
        let format: YCbCrFormat = serde_yaml::from_str(yaml).unwrap();
        let expected = YCbCrFormat::new(LumaStandard::Rec709, false, 1024)
            .with_subsampling(2, 1)
            .with_chroma_position(0.0, 0.5);
        assert_eq!(format, expected);
    }

    #[test]
    fn test_yaml_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("format.yaml");

        let format = YCbCrFormat::new(LumaStandard::Rec2020, true, 4096)
            .with_subsampling(2, 2)
            .with_cb_position(0.0, 0.0)
            .with_cr_position(1.0, 0.25);
        std::fs::write(&path, serde_yaml::to_string(&format).unwrap()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("luma_coefficients: rec2020"));
        let loaded: YCbCrFormat = serde_yaml::from_str(&text).unwrap();
        assert_eq!(loaded, format);
    }

    #[test]
    fn test_yaml_rejects_unknown_standard() {
        let result: Result<YCbCrFormat, _> = serde_yaml::from_str("luma_coefficients: rec2100\n");
        assert!(result.is_err());
    }

    // ---------------------------------------------------------------------
    // Concurrency
    // ---------------------------------------------------------------------

    #[test]
    fn test_parallel_derivation_is_deterministic() {
        let formats = all_formats();
        let derive = |f: &YCbCrFormat| {
            let conv = ycbcr_to_rgb(f).unwrap();
            let geometry = chroma_geometries(f).unwrap();
            let shader = YCbCrInputShader::new(*f, 33, 17).fragment("p").unwrap();
            (conv, geometry, shader)
        };

        let sequential: Vec<_> = formats.iter().map(derive).collect();
        for _ in 0..4 {
            let parallel: Vec<_> = formats.par_iter().map(derive).collect();
            assert_eq!(parallel, sequential);
        }
    }
}
