//! CLI command implementations

pub mod chroma;
pub mod matrix;
pub mod shader;
pub mod taps;

use crate::FormatArgs;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use vfx_ycbcr::{LumaStandard, YCbCrFormat};

/// Loads a descriptor from a YAML file.
///
/// Missing fields take their default values.
pub fn load_format(path: &Path) -> Result<YCbCrFormat> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read: {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("Failed to parse format: {}", path.display()))
}

/// Builds and validates the descriptor selected on the command line.
pub fn resolve_format(args: &FormatArgs) -> Result<YCbCrFormat> {
    let format = match &args.format_file {
        Some(path) => load_format(path)?,
        None => format_from_flags(args)?,
    };
    format.validate().context("Invalid Y'CbCr format")?;
    Ok(format)
}

fn format_from_flags(args: &FormatArgs) -> Result<YCbCrFormat> {
    let standard = match args.h273 {
        Some(code) => LumaStandard::from_h273(code)?,
        None => args.standard.parse()?,
    };
    if args.bits == 0 || args.bits > 16 {
        bail!("--bits must be between 1 and 16, got {}", args.bits);
    }
    let (sx, sy) = parse_subsampling(&args.subsampling)?;

    let mut format = YCbCrFormat::from_bit_depth(standard, args.full_range, args.bits).with_subsampling(sx, sy);
    if let Some(pos) = &args.chroma_position {
        let (x, y) = parse_pair(pos).context("--chroma-position")?;
        format = format.with_chroma_position(x, y);
    }
    if let Some(pos) = &args.cb_position {
        let (x, y) = parse_pair(pos).context("--cb-position")?;
        format = format.with_cb_position(x, y);
    }
    if let Some(pos) = &args.cr_position {
        let (x, y) = parse_pair(pos).context("--cr-position")?;
        format = format.with_cr_position(x, y);
    }
    Ok(format)
}

/// Parses `XxY` (`2x2`) or a J:a:b ratio (`4:2:0`, `4:2:2`, `4:4:4`).
pub fn parse_subsampling(s: &str) -> Result<(u32, u32)> {
    match s {
        "4:4:4" => return Ok((1, 1)),
        "4:2:2" => return Ok((2, 1)),
        "4:2:0" => return Ok((2, 2)),
        "4:1:1" => return Ok((4, 1)),
        _ => {}
    }
    let (x, y) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("Invalid subsampling '{s}', expected XxY or 4:2:0"))?;
    let x = x.trim().parse().with_context(|| format!("Invalid subsampling '{s}'"))?;
    let y = y.trim().parse().with_context(|| format!("Invalid subsampling '{s}'"))?;
    Ok((x, y))
}

/// Parses `X,Y`.
pub fn parse_pair(s: &str) -> Result<(f32, f32)> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("Invalid pair '{s}', expected X,Y"))?;
    let x = x.trim().parse().with_context(|| format!("Invalid number '{x}'"))?;
    let y = y.trim().parse().with_context(|| format!("Invalid number '{y}'"))?;
    Ok((x, y))
}

/// One-line summary of a descriptor.
pub fn describe(format: &YCbCrFormat) -> String {
    format!(
        "{} {} range, {} levels, subsampling {}x{}, cb at ({}, {}), cr at ({}, {})",
        format.luma_coefficients,
        if format.full_range { "full" } else { "studio" },
        format.num_levels,
        format.chroma_subsampling_x,
        format.chroma_subsampling_y,
        format.cb_x_position,
        format.cb_y_position,
        format.cr_x_position,
        format.cr_y_position,
    )
}
