//! GLSL constant declarations.
//!
//! Numbers are written in scientific notation with eight fractional digits
//! (`1.40200000e+00`), always with `.` as the decimal separator and a signed
//! two-digit exponent. Rust formatting never consults the process locale,
//! so the output is the same on every host and from every thread.
//!
//! # Usage
//!
//! ```rust
//! use vfx_gpu::{glsl_float, output_glsl_vec2};
//!
//! assert_eq!(glsl_float(1.402), "1.40200000e+00");
//! assert_eq!(
//!     output_glsl_vec2("cb_offset", 0.25, -0.0),
//!     "const vec2 cb_offset = vec2(2.50000000e-01, -0.00000000e+00);\n",
//! );
//! ```

use vfx_math::Mat3;

/// Formats one number as a GLSL float literal.
///
/// Non-finite values are written as Rust prints them (`inf`, `NaN`), which
/// no GLSL compiler accepts; callers are expected to pass finite values.
pub fn glsl_float(x: f64) -> String {
    let s = format!("{x:.8e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

/// `const float NAME = x;`
pub fn output_glsl_float(name: &str, x: f32) -> String {
    format!("const float {name} = {};\n", glsl_float(f64::from(x)))
}

/// `const vec2 NAME = vec2(x, y);`
pub fn output_glsl_vec2(name: &str, x: f32, y: f32) -> String {
    format!(
        "const vec2 {name} = vec2({}, {});\n",
        glsl_float(f64::from(x)),
        glsl_float(f64::from(y))
    )
}

/// `const vec3 NAME = vec3(x, y, z);`
pub fn output_glsl_vec3(name: &str, x: f32, y: f32, z: f32) -> String {
    format!(
        "const vec3 {name} = vec3({}, {}, {});\n",
        glsl_float(f64::from(x)),
        glsl_float(f64::from(y)),
        glsl_float(f64::from(z))
    )
}

/// `const mat3 NAME = mat3(...);` followed by a blank line.
///
/// GLSL matrix constructors are column-major, so each output line holds one
/// column of `m`. Elements keep full `f64` precision.
pub fn output_glsl_mat3(name: &str, m: &Mat3) -> String {
    let mut out = format!("const mat3 {name} = mat3(\n");
    for c in 0..3 {
        let col = m.col(c);
        let end = if c == 2 { ");\n\n" } else { ",\n" };
        out.push_str(&format!(
            "    {}, {}, {}{end}",
            glsl_float(col.x),
            glsl_float(col.y),
            glsl_float(col.z)
        ));
    }
    out
}
