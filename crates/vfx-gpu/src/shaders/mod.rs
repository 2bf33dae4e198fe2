//! GLSL fragment sources.
//!
//! Sources use `PREFIX(name)` for every identifier they declare so that
//! several instances can be linked into one program; see
//! [`crate::replace_prefix`].

/// Reads three planar Y'CbCr textures and returns R'G'B'A.
///
/// Expects the constants emitted by [`crate::YCbCrInputShader::constants`]
/// to precede it. `tc` addresses the luma plane in `[0, 1]`.
pub const YCBCR_INPUT: &str = r#"uniform sampler2D PREFIX(tex_y);
uniform sampler2D PREFIX(tex_cb);
uniform sampler2D PREFIX(tex_cr);

vec4 PREFIX(sample)(vec2 tc)
{
    vec3 ycbcr;
    ycbcr.x = texture(PREFIX(tex_y), tc).x;
    ycbcr.y = texture(PREFIX(tex_cb), tc * PREFIX(cb_scale) + PREFIX(cb_offset)).x;
    ycbcr.z = texture(PREFIX(tex_cr), tc * PREFIX(cr_scale) + PREFIX(cr_offset)).x;

    ycbcr -= PREFIX(offset);

    vec4 rgba;
    rgba.rgb = PREFIX(inv_ycbcr_matrix) * ycbcr;
    rgba.a = 1.0;
    return rgba;
}
"#;
