use super::model::{BurstIndexRange, BURST_MARGIN_SECONDS, DEFAULT_SAMPLE_RATE_HZ};
use super::time::parse_interval;
use crate::error::AssembleError;

// ---------------------------------------------------------------------------
// Burst alignment: announced intervals → global sample indices
// ---------------------------------------------------------------------------

/// Collects burst index ranges over one day-assembly run.
///
/// The accumulator is owned by a single run and fed one decoded file at a
/// time, in playback order, with the cursor value *before* that file's
/// samples are absorbed. Advancing the cursor is the assembler's job, so
/// the same cursor can be read here and bumped afterwards.
#[derive(Debug)]
pub struct BurstAccumulator {
    sample_rate: u32,
    ranges: Vec<BurstIndexRange>,
}

impl BurstAccumulator {
    pub fn new() -> Self {
        Self::with_sample_rate(DEFAULT_SAMPLE_RATE_HZ)
    }

    /// Rate override for stations that do not record at 4 Hz.
    pub fn with_sample_rate(sample_rate: u32) -> Self {
        BurstAccumulator {
            sample_rate,
            ranges: Vec::new(),
        }
    }

    /// Project every interval overlapping this file's `[start, end)` window
    /// onto the global index space and record it.
    ///
    /// Local indices are clipped to the file; the ±60 s margin is applied
    /// *after* clipping and never re-clipped, so recorded bounds may fall
    /// outside `[0, total_samples - 1]`.
    pub fn align_file(
        &mut self,
        sample_count: usize,
        file_start_seconds: u32,
        intervals: &[String],
        cursor: usize,
    ) -> Result<(), AssembleError> {
        if sample_count == 0 {
            return Ok(());
        }
        let rate = i64::from(self.sample_rate);
        let file_start = i64::from(file_start_seconds);
        let file_end = file_start as f64 + sample_count as f64 / rate as f64;
        let last_local = sample_count as i64 - 1;
        let margin = BURST_MARGIN_SECONDS * rate;

        for raw in intervals {
            let (burst_start, burst_end) = parse_interval(raw)?;
            let (burst_start, burst_end) = (i64::from(burst_start), i64::from(burst_end));

            if (burst_start as f64) < file_end && burst_end >= file_start {
                let local_start = ((burst_start - file_start) * rate).clamp(0, last_local);
                let local_end = ((burst_end - file_start) * rate).clamp(0, last_local);
                self.ranges.push(BurstIndexRange {
                    burst: raw.clone(),
                    start_idx: cursor as i64 + local_start - margin,
                    end_idx: cursor as i64 + local_end + margin,
                });
            }
        }
        Ok(())
    }

    pub fn into_ranges(self) -> Vec<BurstIndexRange> {
        self.ranges
    }
}

impl Default for BurstAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 09:00:00 in seconds
    const NINE: u32 = 9 * 3600;

    #[test]
    fn overlapping_burst_is_clipped_then_padded() {
        let mut acc = BurstAccumulator::new();
        // 900 samples at 4 Hz: the file spans [09:00:00, 09:03:45)
        acc.align_file(900, NINE, &["09:00:30-09:01:00".to_string()], 0)
            .unwrap();
        let ranges = acc.into_ranges();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].burst, "09:00:30-09:01:00");
        // local 120..240, cursor 0, margin 240
        assert_eq!(ranges[0].start_idx, 120 - 240);
        assert_eq!(ranges[0].end_idx, 240 + 240);
    }

    #[test]
    fn padding_is_not_clamped_at_the_day_start() {
        let mut acc = BurstAccumulator::new();
        acc.align_file(900, NINE, &["09:00-09:01".to_string()], 0)
            .unwrap();
        let ranges = acc.into_ranges();
        assert_eq!(ranges[0].start_idx, -240);
    }

    #[test]
    fn cursor_offsets_the_global_indices() {
        let mut acc = BurstAccumulator::new();
        acc.align_file(900, NINE, &["09:00:30-09:01:00".to_string()], 1750)
            .unwrap();
        let ranges = acc.into_ranges();
        assert_eq!(ranges[0].start_idx, 1750 + 120 - 240);
        assert_eq!(ranges[0].end_idx, 1750 + 240 + 240);
    }

    #[test]
    fn burst_outside_the_file_window_is_excluded() {
        let mut acc = BurstAccumulator::new();
        let intervals = vec![
            "08:00-08:30".to_string(), // entirely before
            "10:00-10:15".to_string(), // entirely after
        ];
        acc.align_file(900, NINE, &intervals, 0).unwrap();
        assert!(acc.into_ranges().is_empty());
    }

    #[test]
    fn burst_running_past_the_file_end_is_clipped_to_the_last_sample() {
        let mut acc = BurstAccumulator::new();
        // ends at 09:10, far past the file's 09:03:45 end
        acc.align_file(900, NINE, &["09:02-09:10".to_string()], 0)
            .unwrap();
        let ranges = acc.into_ranges();
        assert_eq!(ranges[0].end_idx, 899 + 240);
    }

    #[test]
    fn burst_spanning_two_files_yields_two_entries() {
        let mut acc = BurstAccumulator::new();
        let intervals = vec!["09:03-09:05".to_string()];
        acc.align_file(900, NINE, &intervals, 0).unwrap();
        // next file starts at 09:03:45
        acc.align_file(900, NINE + 225, &intervals, 900).unwrap();
        let ranges = acc.into_ranges();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].burst, ranges[1].burst);
    }

    #[test]
    fn malformed_interval_is_fatal() {
        let mut acc = BurstAccumulator::new();
        let err = acc
            .align_file(900, NINE, &["garbage".to_string()], 0)
            .unwrap_err();
        assert!(matches!(err, AssembleError::MalformedTime(_)));
    }

    #[test]
    fn custom_sample_rate_scales_indices_and_margin() {
        let mut acc = BurstAccumulator::with_sample_rate(2);
        acc.align_file(450, NINE, &["09:00:30-09:01:00".to_string()], 0)
            .unwrap();
        let ranges = acc.into_ranges();
        assert_eq!(ranges[0].start_idx, 60 - 120);
        assert_eq!(ranges[0].end_idx, 120 + 120);
    }
}
