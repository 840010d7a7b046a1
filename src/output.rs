//! Persisted outputs: the assembled spectrogram and aligned burst ranges.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ndarray_npy::{read_npy, write_npy};

use crate::data::model::{BurstIndexRange, Spectrogram};
use crate::remote::DayQuery;

/// `spec-STATION-MM-DD-YYYY.npy` under `dir`.
pub fn spectrogram_path(dir: &Path, query: &DayQuery) -> PathBuf {
    dir.join(format!("spec-{}.npy", file_stem(query)))
}

/// `labels-STATION-MM-DD-YYYY.csv` under `dir`.
pub fn labels_path(dir: &Path, query: &DayQuery) -> PathBuf {
    dir.join(format!("labels-{}.csv", file_stem(query)))
}

fn file_stem(query: &DayQuery) -> String {
    format!(
        "{}-{:02}-{:02}-{:04}",
        query.station, query.month, query.day, query.year
    )
}

/// Write the assembled series as a NumPy `.npy` file (f32, frequency × time).
pub fn write_spectrogram(path: &Path, spectrogram: &Spectrogram) -> Result<()> {
    write_npy(path, spectrogram).with_context(|| format!("writing {}", path.display()))
}

/// Read a previously saved spectrogram back.
pub fn read_spectrogram(path: &Path) -> Result<Spectrogram> {
    read_npy(path).with_context(|| format!("reading {}", path.display()))
}

/// Write burst ranges as CSV with columns `burst,start_idx,end_idx`.
pub fn write_burst_ranges(path: &Path, ranges: &[BurstIndexRange]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for range in ranges {
        writer.serialize(range).context("writing burst range")?;
    }
    writer.flush().context("flushing burst ranges")?;
    Ok(())
}

/// Read burst ranges back from a CSV written by [`write_burst_ranges`].
pub fn read_burst_ranges(path: &Path) -> Result<Vec<BurstIndexRange>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let mut ranges = Vec::new();
    for record in reader.deserialize() {
        ranges.push(record.context("reading burst range")?);
    }
    Ok(ranges)
}
