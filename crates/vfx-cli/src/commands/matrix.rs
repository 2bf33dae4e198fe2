//! Matrix command
//!
//! Prints the Y'CbCr -> RGB conversion for a descriptor, its inverse, and
//! optionally the GLSL constants and the decode of one code triplet.

use crate::MatrixArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{Context, Result};
use vfx_gpu::{output_glsl_mat3, output_glsl_vec3};
use vfx_ycbcr::ycbcr_to_rgb;

pub fn run(args: MatrixArgs, verbose: u8) -> Result<()> {
    let format = super::resolve_format(&args.format)?;
    trace!(?format, "matrix::run");

    let conversion = ycbcr_to_rgb(&format).context("Failed to derive conversion matrix")?;

    if verbose > 0 {
        println!("Format: {}", super::describe(&format));
        println!();
    }

    println!("Y'CbCr -> RGB:");
    print!("{}", conversion.matrix);
    println!();
    println!(
        "Offset: {:.6} {:.6} {:.6}",
        conversion.offset.x, conversion.offset.y, conversion.offset.z
    );

    if let Some(inverse) = conversion.rgb_to_ycbcr() {
        println!();
        println!("RGB -> Y'CbCr:");
        print!("{inverse}");
    }

    if let Some(codes) = &args.decode {
        let codes = parse_codes(codes)?;
        let max_code = format.max_code();
        if let Some(c) = codes.iter().find(|&&c| c > max_code) {
            anyhow::bail!("Code {c} exceeds the maximum code {max_code}");
        }
        let rgb = conversion.apply_codes(codes);
        info!(?codes, "decoding code triplet");
        println!();
        println!(
            "Decode {},{},{} -> RGB {:.6} {:.6} {:.6}",
            codes[0], codes[1], codes[2], rgb.x, rgb.y, rgb.z
        );
    }

    if args.glsl {
        let [ox, oy, oz] = conversion.offset.to_f32_array();
        println!();
        print!("{}", output_glsl_mat3("inv_ycbcr_matrix", &conversion.matrix));
        print!("{}", output_glsl_vec3("offset", ox, oy, oz));
    }

    Ok(())
}

fn parse_codes(s: &str) -> Result<[u32; 3]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [y, cb, cr] = parts.as_slice() else {
        anyhow::bail!("Invalid code triplet '{s}', expected Y,Cb,Cr");
    };
    let parse = |v: &str| v.parse::<u32>().with_context(|| format!("Invalid code '{v}'"));
    Ok([parse(*y)?, parse(*cb)?, parse(*cr)?])
}
