//! vfx - Y'CbCr and texture tap inspection CLI
//!
//! Prints the constants the numeric core derives, in the form a shader
//! author or a pipeline debugger wants to look at them.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

mod commands;

#[derive(Parser)]
#[command(name = "vfx")]
#[command(author, version, about = "Y'CbCr conversion and texture tap inspection")]
#[command(long_about = "
Derives Y'CbCr -> RGB matrices, chroma sampling geometry, GLSL constants
and combined bilinear texture taps.

Examples:
  vfx matrix --standard rec709                    # 8-bit studio Rec.709
  vfx matrix --standard 601 --full-range          # JPEG
  vfx matrix --h273 9 --bits 10 --decode 940,512,512
  vfx matrix --format-file format.yaml
  vfx chroma --subsampling 2x2 --chroma-position 0,0.5 -W 1920 -H 1080
  vfx taps --w1 1 --w2 2 --pos1 10 --pos2 11
  vfx taps --kernel 0.1,0.2,0.4,0.2,0.1 --max-error 1e-5
  vfx shader --standard rec709 --subsampling 2x2 -W 1920 -H 1080 --prefix in0
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Y'CbCr -> RGB matrix, offset and inverse
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),

    /// Print chroma plane size and sampling geometry
    #[command(visible_alias = "c")]
    Chroma(ChromaArgs),

    /// Combine filter samples into bilinear taps
    #[command(visible_alias = "t")]
    Taps(TapsArgs),

    /// Print the Y'CbCr input fragment shader
    #[command(visible_alias = "s")]
    Shader(ShaderArgs),
}

/// Encoding descriptor, from flags or a YAML file.
#[derive(Args)]
struct FormatArgs {
    /// YAML descriptor file (overrides the other format flags)
    #[arg(long)]
    format_file: Option<PathBuf>,

    /// Luma coefficients: rec601, rec709, rec2020
    #[arg(short, long, default_value = "rec601")]
    standard: String,

    /// ITU-T H.273 matrix coefficient code (overrides --standard)
    #[arg(long)]
    h273: Option<u32>,

    /// Full range codes instead of studio range
    #[arg(short, long)]
    full_range: bool,

    /// Bits per code value
    #[arg(short, long, default_value = "8")]
    bits: u32,

    /// Chroma subsampling as XxY, e.g. 2x2 for 4:2:0
    #[arg(long, default_value = "1x1")]
    subsampling: String,

    /// Siting of both chroma planes as X,Y in [0, 1]
    #[arg(long)]
    chroma_position: Option<String>,

    /// Siting of the Cb plane as X,Y (overrides --chroma-position)
    #[arg(long)]
    cb_position: Option<String>,

    /// Siting of the Cr plane as X,Y (overrides --chroma-position)
    #[arg(long)]
    cr_position: Option<String>,
}

#[derive(Args)]
struct MatrixArgs {
    #[command(flatten)]
    format: FormatArgs,

    /// Decode one Y,Cb,Cr code triplet
    #[arg(short, long)]
    decode: Option<String>,

    /// Also print GLSL constants
    #[arg(short, long)]
    glsl: bool,
}

#[derive(Args)]
struct ChromaArgs {
    #[command(flatten)]
    format: FormatArgs,

    /// Luma plane width
    #[arg(short = 'W', long, default_value = "1920")]
    width: u32,

    /// Luma plane height
    #[arg(short = 'H', long, default_value = "1080")]
    height: u32,
}

#[derive(Args)]
struct TapsArgs {
    /// Weight of the first sample
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    w1: f32,

    /// Weight of the second sample
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    w2: f32,

    /// Position of the first sample
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    pos1: f32,

    /// Position of the second sample
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    pos2: f32,

    /// Reduce a whole kernel instead; weights at texel centers 0.5, 1.5, ...
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    kernel: Option<Vec<f32>>,

    /// Largest squared error accepted when merging kernel samples
    #[arg(long, default_value = "1e-6")]
    max_error: f32,

    /// Bits of hardware interpolation precision
    #[arg(long, default_value = "8")]
    subtexel_bits: u32,
}

#[derive(Args)]
struct ShaderArgs {
    #[command(flatten)]
    format: FormatArgs,

    /// Luma plane width
    #[arg(short = 'W', long, default_value = "1920")]
    width: u32,

    /// Luma plane height
    #[arg(short = 'H', long, default_value = "1080")]
    height: u32,

    /// Identifier prefix
    #[arg(short, long, default_value = "ycbcr")]
    prefix: String,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Matrix(args) => commands::matrix::run(args, cli.verbose),
        Commands::Chroma(args) => commands::chroma::run(args, cli.verbose),
        Commands::Taps(args) => commands::taps::run(args, cli.verbose),
        Commands::Shader(args) => commands::shader::run(args, cli.verbose),
    }
}
