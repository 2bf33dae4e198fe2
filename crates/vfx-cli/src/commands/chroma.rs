//! Chroma command
//!
//! Shows how each chroma plane maps onto the luma grid.

use crate::ChromaArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{Context, Result};
use vfx_math::next_power_of_two;
use vfx_ycbcr::{chroma_geometry, chroma_plane_size, ChromaPlane};

pub fn run(args: ChromaArgs, verbose: u8) -> Result<()> {
    let format = super::resolve_format(&args.format)?;
    trace!(?format, width = args.width, height = args.height, "chroma::run");

    let (cw, ch) = chroma_plane_size(&format, args.width, args.height)?;

    if verbose > 0 {
        println!("Format: {}", super::describe(&format));
    }
    println!("Luma plane:   {}x{}", args.width, args.height);
    println!("Chroma plane: {}x{}", cw, ch);
    if verbose > 0 {
        println!(
            "Chroma texture (power of two): {}x{}",
            next_power_of_two(cw),
            next_power_of_two(ch)
        );
    }

    for plane in ChromaPlane::BOTH {
        let geometry = chroma_geometry(&format, plane).with_context(|| format!("Failed to derive {plane} geometry"))?;
        let (scale, offset) = geometry.normalized(args.width, args.height, cw, ch);
        println!();
        println!("{plane}:");
        println!("  texel scale:       {:.6} {:.6}", geometry.scale[0], geometry.scale[1]);
        println!("  texel offset:      {:.6} {:.6}", geometry.offset[0], geometry.offset[1]);
        println!("  normalized scale:  {:.6} {:.6}", scale[0], scale[1]);
        println!("  normalized offset: {:.8} {:.8}", offset[0], offset[1]);
    }

    Ok(())
}
