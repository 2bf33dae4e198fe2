//! Taps command
//!
//! Combines two samples (or reduces a kernel) in every storage format and
//! prints what the GPU would end up with.

use crate::TapsArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{bail, Result};
use vfx_core::{bf16, f16, StorageFormat};
use vfx_taps::{combine_two_samples, reduce_taps, CombinedTap, Sample, SubtexelPrecision};

pub fn run(args: TapsArgs, verbose: u8) -> Result<()> {
    let precision = SubtexelPrecision::from_bits(args.subtexel_bits);
    trace!(subtexel_bits = args.subtexel_bits, "taps::run");

    if verbose > 0 {
        println!("Subtexel precision: {} steps", precision.num_subtexels);
    }

    match &args.kernel {
        Some(weights) => {
            let samples: Vec<Sample> = weights
                .iter()
                .enumerate()
                .map(|(i, &w)| Sample::new(w, i as f32 + 0.5))
                .collect();
            print_reduction::<f32>(&samples, precision, args.max_error);
            print_reduction::<f16>(&samples, precision, args.max_error);
            print_reduction::<bf16>(&samples, precision, args.max_error);
        }
        None => {
            if args.w1 * args.w2 < 0.0 {
                bail!("Weights {} and {} have different signs and cannot share a tap", args.w1, args.w2);
            }
            println!("{:<6} {:>14} {:>14} {:>12}", "format", "position", "weight", "sq error");
            print_pair::<f32>(&args, precision);
            print_pair::<f16>(&args, precision);
            print_pair::<bf16>(&args, precision);
        }
    }

    Ok(())
}

fn print_tap<T: StorageFormat>(tap: &CombinedTap<T>) {
    println!(
        "{:<6} {:>14.8} {:>14.8} {:>12.4e}",
        T::NAME,
        tap.position_f32(),
        tap.weight_f32(),
        tap.sum_sq_error
    );
}

fn print_pair<T: StorageFormat>(args: &TapsArgs, precision: SubtexelPrecision) {
    let tap = combine_two_samples::<T>(args.w1, args.w2, args.pos1, args.pos2, precision);
    print_tap(&tap);
}

fn print_reduction<T: StorageFormat>(samples: &[Sample], precision: SubtexelPrecision, max_error: f32) {
    let taps = reduce_taps::<T>(samples, precision, max_error);
    let total: f32 = taps.iter().map(|t| t.sum_sq_error).sum();
    println!();
    println!("{}: {} samples -> {} taps (total sq error {:.4e})", T::NAME, samples.len(), taps.len(), total);
    for tap in &taps {
        print_tap(tap);
    }
}
