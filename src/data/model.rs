use ndarray::Array2;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Core value types of an assembly run
// ---------------------------------------------------------------------------

/// Samples per second along the time axis of an e-Callisto recording.
///
/// Every current station records at 4 Hz; a station with another rate would
/// need it passed explicitly (see the `with_sample_rate` constructors).
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 4;

/// Labeling slack applied around each announced burst, in seconds.
pub const BURST_MARGIN_SECONDS: i64 = 60;

/// A spectrogram: axis 0 = frequency bin, axis 1 = time sample.
///
/// Raw per-file arrays store frequency descending; the assembled day is
/// flipped so index 0 holds the lowest frequency.
pub type Spectrogram = Array2<f32>;

/// One burst label projected onto the assembled series' time axis.
///
/// Bounds carry the ±60 s margin and are deliberately *not* clamped to the
/// series: a burst at the very start of the day yields a negative
/// `start_idx`. A burst spanning two consecutive files yields two separate,
/// possibly overlapping entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurstIndexRange {
    /// The announced time range, verbatim (e.g. `"09:00-09:15"`).
    pub burst: String,
    pub start_idx: i64,
    pub end_idx: i64,
}

/// Result of one day-assembly run.
#[derive(Debug, Clone)]
pub struct DayAssembly {
    pub spectrogram: Spectrogram,
    /// Empty when the run was made without a burst list.
    pub burst_ranges: Vec<BurstIndexRange>,
}
