use ndarray::{Array2, Axis};

use super::model::BurstIndexRange;

// ---------------------------------------------------------------------------
// Burst-mask signal-to-noise ratio
// ---------------------------------------------------------------------------

/// Mean flux levels inside and outside the burst windows, and their ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snr {
    pub snr_db: f64,
    pub signal_mean: f64,
    pub noise_mean: f64,
}

/// SNR of the burst windows against the quiet remainder, in dB.
///
/// The frequency axis is collapsed to a mean flux per time sample; samples
/// covered by any range count as signal, the rest as noise. Padded range
/// bounds may lie outside the series and are clamped into range here
/// (alignment itself never clamps). Returns `None` when either side of the
/// mask is empty or a mean is non-positive.
pub fn compute_snr(spectrogram: &Array2<f32>, ranges: &[BurstIndexRange]) -> Option<Snr> {
    let n_times = spectrogram.ncols();
    if n_times == 0 {
        return None;
    }
    let flux = spectrogram.mean_axis(Axis(0))?;

    let mut mask = vec![false; n_times];
    for range in ranges {
        let start = range.start_idx.max(0);
        let end = range.end_idx.min(n_times as i64 - 1);
        if end < start {
            continue; // entirely out of range
        }
        for m in &mut mask[start as usize..=end as usize] {
            *m = true;
        }
    }

    let mut signal_sum = 0.0f64;
    let mut signal_n = 0usize;
    let mut noise_sum = 0.0f64;
    let mut noise_n = 0usize;
    for (i, &f) in flux.iter().enumerate() {
        if mask[i] {
            signal_sum += f64::from(f);
            signal_n += 1;
        } else {
            noise_sum += f64::from(f);
            noise_n += 1;
        }
    }
    if signal_n == 0 || noise_n == 0 {
        return None;
    }

    let signal_mean = signal_sum / signal_n as f64;
    let noise_mean = noise_sum / noise_n as f64;
    if signal_mean <= 0.0 || noise_mean <= 0.0 {
        return None;
    }

    Some(Snr {
        snr_db: 10.0 * (signal_mean / noise_mean).log10(),
        signal_mean,
        noise_mean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn range(start_idx: i64, end_idx: i64) -> BurstIndexRange {
        BurstIndexRange {
            burst: "09:00-09:01".to_string(),
            start_idx,
            end_idx,
        }
    }

    #[test]
    fn louder_burst_window_gives_positive_snr() {
        // 10 time samples, burst over [2, 4] at flux 10, rest at 1
        let mut a = Array2::<f32>::ones((3, 10));
        for j in 2..=4 {
            for i in 0..3 {
                a[(i, j)] = 10.0;
            }
        }
        let snr = compute_snr(&a, &[range(2, 4)]).unwrap();
        assert!((snr.signal_mean - 10.0).abs() < 1e-9);
        assert!((snr.noise_mean - 1.0).abs() < 1e-9);
        assert!((snr.snr_db - 10.0).abs() < 1e-9);
    }

    #[test]
    fn padded_bounds_are_clamped_into_the_series() {
        let a = Array2::<f32>::ones((2, 8));
        // covers everything once clamped, so the noise side is empty
        assert!(compute_snr(&a, &[range(-240, 500)]).is_none());
    }

    #[test]
    fn fully_out_of_range_entries_contribute_nothing() {
        let a = Array2::<f32>::ones((2, 8));
        assert!(compute_snr(&a, &[range(-10, -1)]).is_none()); // empty mask
        assert!(compute_snr(&a, &[range(100, 200)]).is_none());
    }

    #[test]
    fn no_ranges_means_no_snr() {
        let a = Array2::<f32>::ones((2, 8));
        assert!(compute_snr(&a, &[]).is_none());
    }
}
