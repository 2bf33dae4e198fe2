//! Shader command
//!
//! Emits the Y'CbCr input fragment for a descriptor and resolution.

use crate::ShaderArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{Context, Result};
use std::fs;
use vfx_gpu::YCbCrInputShader;

pub fn run(args: ShaderArgs, verbose: u8) -> Result<()> {
    let format = super::resolve_format(&args.format)?;
    trace!(?format, prefix = %args.prefix, "shader::run");

    let shader = YCbCrInputShader::new(format, args.width, args.height);
    let src = shader.fragment(&args.prefix).context("Failed to generate shader")?;

    match &args.output {
        Some(path) => {
            fs::write(path, &src).with_context(|| format!("Failed to write: {}", path.display()))?;
            info!(path = %path.display(), bytes = src.len(), "wrote shader");
            if verbose > 0 {
                println!("Wrote {}", path.display());
            }
        }
        None => print!("{src}"),
    }

    Ok(())
}
