//! Y'CbCr input shader generation.
//!
//! Bakes the conversion matrix, range offset and chroma geometry of one
//! [`YCbCrFormat`] into GLSL constants, and pairs them with the sampling
//! function from [`crate::shaders::YCBCR_INPUT`].

use tracing::debug;
use vfx_core::Result;
use vfx_ycbcr::{chroma_geometries, chroma_plane_size, ycbcr_to_rgb, YCbCrFormat};

use crate::glsl::{output_glsl_mat3, output_glsl_vec2, output_glsl_vec3};
use crate::shaders::YCBCR_INPUT;

/// Replaces every `PREFIX(name)` in `src` with `prefix_name`.
///
/// An unterminated `PREFIX(` is copied through unchanged.
///
/// # Example
///
/// ```rust
/// use vfx_gpu::replace_prefix;
///
/// assert_eq!(replace_prefix("x = PREFIX(offset);", "ycbcr0"), "x = ycbcr0_offset;");
/// ```
pub fn replace_prefix(src: &str, prefix: &str) -> String {
    const TOKEN: &str = "PREFIX(";
    let mut out = String::with_capacity(src.len());
    let mut rest = src;
    while let Some(start) = rest.find(TOKEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + TOKEN.len()..];
        match after.find(')') {
            Some(end) => {
                out.push_str(prefix);
                out.push('_');
                out.push_str(&after[..end]);
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Shader source generator for one planar Y'CbCr input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YCbCrInputShader {
    /// Encoding of the planes.
    pub format: YCbCrFormat,
    /// Luma plane width.
    pub width: u32,
    /// Luma plane height.
    pub height: u32,
}

impl YCbCrInputShader {
    /// Creates a generator for a `width` x `height` input.
    pub fn new(format: YCbCrFormat, width: u32, height: u32) -> Self {
        Self { format, width, height }
    }

    /// Resolution of the Cb and Cr textures.
    pub fn chroma_size(&self) -> Result<(u32, u32)> {
        chroma_plane_size(&self.format, self.width, self.height)
    }

    /// Constant declarations, names still wrapped in `PREFIX(...)`.
    ///
    /// # Errors
    ///
    /// Fails if the format is invalid.
    pub fn constants(&self) -> Result<String> {
        let conversion = ycbcr_to_rgb(&self.format)?;
        let [cb, cr] = chroma_geometries(&self.format)?;
        let (cw, ch) = self.chroma_size()?;

        let mut out = output_glsl_mat3("PREFIX(inv_ycbcr_matrix)", &conversion.matrix);
        let [ox, oy, oz] = conversion.offset.to_f32_array();
        out.push_str(&output_glsl_vec3("PREFIX(offset)", ox, oy, oz));

        for (name, geometry) in [("cb", cb), ("cr", cr)] {
            let (scale, offset) = geometry.normalized(self.width, self.height, cw, ch);
            out.push_str(&output_glsl_vec2(
                &format!("PREFIX({name}_scale)"),
                scale[0] as f32,
                scale[1] as f32,
            ));
            out.push_str(&output_glsl_vec2(
                &format!("PREFIX({name}_offset)"),
                offset[0] as f32,
                offset[1] as f32,
            ));
        }
        Ok(out)
    }

    /// Complete fragment: constants, samplers and `PREFIX(sample)`, with
    /// every `PREFIX(...)` resolved against `prefix`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vfx_gpu::YCbCrInputShader;
    /// use vfx_ycbcr::{LumaStandard, YCbCrFormat};
    ///
    /// let format = YCbCrFormat::new(LumaStandard::Rec709, false, 256).with_subsampling(2, 2);
    /// let src = YCbCrInputShader::new(format, 1920, 1080).fragment("in0").unwrap();
    /// assert!(src.contains("const mat3 in0_inv_ycbcr_matrix = mat3("));
    /// assert!(src.contains("vec4 in0_sample(vec2 tc)"));
    /// assert!(!src.contains("PREFIX"));
    /// ```
    pub fn fragment(&self, prefix: &str) -> Result<String> {
        let mut src = self.constants()?;
        src.push('\n');
        src.push_str(YCBCR_INPUT);
        let src = replace_prefix(&src, prefix);
        debug!(
            prefix,
            standard = %self.format.luma_coefficients,
            width = self.width,
            height = self.height,
            bytes = src.len(),
            "generated Y'CbCr input shader"
        );
        Ok(src)
    }
}
