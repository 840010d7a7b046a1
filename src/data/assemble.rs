use anyhow::{Context, Result};
use log::{info, warn};
use ndarray::{concatenate, Axis};

use super::burst::BurstAccumulator;
use super::model::{DayAssembly, Spectrogram};
use super::sequence::embedded_seconds;
use crate::error::AssembleError;

// ---------------------------------------------------------------------------
// Day assembly: fetch, align, concatenate
// ---------------------------------------------------------------------------

/// Fetch+decode collaborator: turns a file identifier into a 2D array
/// (frequency × time). Implemented over HTTP in [`crate::remote::fits`];
/// tests supply an in-memory source.
pub trait SpectrogramSource {
    fn fetch(&self, file: &str) -> Result<Spectrogram>;
}

/// Assemble one day's ordered files into a single continuous spectrogram.
///
/// Files are fetched strictly in order. A file that fails to download or
/// decode is skipped with a warning and contributes nothing — neither
/// samples nor an aligner call for its slot. When `bursts` is present, each
/// decoded file's intervals are aligned against the running sample cursor
/// *before* the cursor absorbs that file's samples.
///
/// After concatenation along the time axis the frequency axis is reversed:
/// raw files store frequency descending, callers expect ascending.
pub fn assemble(
    ordered: &[String],
    bursts: Option<&[String]>,
    source: &dyn SpectrogramSource,
    context_url: &str,
) -> Result<DayAssembly> {
    if ordered.is_empty() {
        return Err(AssembleError::NoFiles(context_url.to_string()).into());
    }

    let mut arrays: Vec<Spectrogram> = Vec::with_capacity(ordered.len());
    let mut accumulator = BurstAccumulator::new();
    let mut cursor: usize = 0;

    for (i, file) in ordered.iter().enumerate() {
        info!("fetching {}/{}: {file}", i + 1, ordered.len());
        let array = match source.fetch(file) {
            Ok(array) => array,
            Err(err) => {
                warn!("skipping {file}: {err:#}");
                continue;
            }
        };

        if let Some(intervals) = bursts {
            if let Some(file_start) = embedded_seconds(file) {
                accumulator.align_file(array.ncols(), file_start, intervals, cursor)?;
            }
        }

        cursor += array.ncols();
        arrays.push(array);
    }

    if arrays.is_empty() {
        return Err(AssembleError::NoValidData(context_url.to_string()).into());
    }

    let views: Vec<_> = arrays.iter().map(|a| a.view()).collect();
    let mut spectrogram =
        concatenate(Axis(1), &views).context("concatenating along the time axis")?;
    // raw rows are frequency-descending; flip so index 0 is the lowest bin
    spectrogram.invert_axis(Axis(0));

    Ok(DayAssembly {
        spectrogram,
        burst_ranges: accumulator.into_ranges(),
    })
}
