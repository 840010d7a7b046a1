//! Compare denoising methods on a saved, labeled spectrogram.
//!
//! Loads a `spec-*.npy` and its `labels-*.csv` as written by the main
//! binary and reports the burst-mask SNR of the raw series, after adaptive
//! Gaussian background subtraction, and after 2D median filtering.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use callisto_day::data::denoise::{gaussian_background_subtract, median_denoise};
use callisto_day::data::model::{BurstIndexRange, Spectrogram};
use callisto_day::data::snr::compute_snr;
use callisto_day::output::{read_burst_ranges, read_spectrogram};

#[derive(Parser, Debug)]
#[command(name = "compare_filters", version, about)]
struct Args {
    /// Assembled spectrogram (.npy) from callisto-day
    spectrogram: PathBuf,

    /// Aligned burst ranges (.csv) from callisto-day --save-burst-labels
    labels: PathBuf,
}

fn report(name: &str, spectrogram: &Spectrogram, ranges: &[BurstIndexRange]) {
    println!("=== {name} ===");
    match compute_snr(spectrogram, ranges) {
        Some(snr) => {
            println!("Signal mean: {:.3}", snr.signal_mean);
            println!("Noise  mean: {:.3}", snr.noise_mean);
            println!("SNR        : {:.2} dB", snr.snr_db);
        }
        None => println!("SNR undefined (empty burst mask or non-positive flux)"),
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let spectrogram = read_spectrogram(&args.spectrogram)?;
    let ranges = read_burst_ranges(&args.labels)?;
    println!(
        "Loaded {:?} spectrogram from {}, {} burst label entries",
        spectrogram.dim(),
        args.spectrogram.display(),
        ranges.len()
    );
    println!();

    report("RAW SPECTROGRAM", &spectrogram, &ranges);

    let (cleaned, _background) =
        gaussian_background_subtract(&spectrogram, 1.0, 20.0, Some(0.0));
    report("GAUSSIAN BACKGROUND SUBTRACTION", &cleaned, &ranges);

    let filtered = median_denoise(&spectrogram, 3, 3);
    report("MEDIAN FILTER", &filtered, &ranges);

    Ok(())
}
