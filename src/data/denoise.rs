use ndarray::Array2;

// ---------------------------------------------------------------------------
// Stateless denoising transforms
// ---------------------------------------------------------------------------

/// Suppress impulsive RFI with a 2D median filter.
///
/// Many artifacts are bright isolated pixels or tiny blobs; replacing each
/// pixel with the median of its window removes them while keeping burst
/// edges far better than a mean would. Window sizes must be odd; edges use
/// nearest-pixel padding.
pub fn median_denoise(
    spectrogram: &Array2<f32>,
    size_freq: usize,
    size_time: usize,
) -> Array2<f32> {
    assert!(
        size_freq % 2 == 1 && size_time % 2 == 1,
        "median window sizes must be odd"
    );
    let (n_freq, n_time) = spectrogram.dim();
    let (r_freq, r_time) = (size_freq as isize / 2, size_time as isize / 2);
    let mut out = Array2::zeros((n_freq, n_time));
    let mut window = Vec::with_capacity(size_freq * size_time);

    for i in 0..n_freq {
        for j in 0..n_time {
            window.clear();
            for di in -r_freq..=r_freq {
                for dj in -r_time..=r_time {
                    let ii = (i as isize + di).clamp(0, n_freq as isize - 1) as usize;
                    let jj = (j as isize + dj).clamp(0, n_time as isize - 1) as usize;
                    window.push(spectrogram[(ii, jj)]);
                }
            }
            window.sort_by(|a, b| a.total_cmp(b));
            out[(i, j)] = window[window.len() / 2];
        }
    }
    out
}

/// Estimate a smooth background with a wide 2D Gaussian blur and subtract it.
///
/// The quiet-Sun background plus slow instrumental drift is smooth, while
/// bursts are localized, so the blurred spectrogram approximates the
/// background. Returns `(cleaned, background)`. `clip_min` floors the
/// cleaned values after subtraction (0.0 keeps intensities non-negative);
/// `None` skips clipping.
pub fn gaussian_background_subtract(
    spectrogram: &Array2<f32>,
    sigma_freq: f64,
    sigma_time: f64,
    clip_min: Option<f32>,
) -> (Array2<f32>, Array2<f32>) {
    let background = gaussian_blur(spectrogram, sigma_freq, sigma_time);
    let mut cleaned = spectrogram - &background;
    if let Some(floor) = clip_min {
        cleaned.mapv_inplace(|v| v.max(floor));
    }
    (cleaned, background)
}

/// Separable Gaussian blur with nearest-edge padding.
fn gaussian_blur(a: &Array2<f32>, sigma_freq: f64, sigma_time: f64) -> Array2<f32> {
    let kernel_freq = gaussian_kernel(sigma_freq);
    let kernel_time = gaussian_kernel(sigma_time);
    let (n_freq, n_time) = a.dim();
    let r_freq = (kernel_freq.len() / 2) as isize;
    let r_time = (kernel_time.len() / 2) as isize;

    // pass 1: along the time axis
    let mut tmp = Array2::<f32>::zeros((n_freq, n_time));
    for i in 0..n_freq {
        for j in 0..n_time {
            let mut acc = 0.0f64;
            for (w, &k) in kernel_time.iter().enumerate() {
                let jj = (j as isize + w as isize - r_time).clamp(0, n_time as isize - 1) as usize;
                acc += k * f64::from(a[(i, jj)]);
            }
            tmp[(i, j)] = acc as f32;
        }
    }

    // pass 2: along the frequency axis
    let mut out = Array2::<f32>::zeros((n_freq, n_time));
    for i in 0..n_freq {
        for j in 0..n_time {
            let mut acc = 0.0f64;
            for (w, &k) in kernel_freq.iter().enumerate() {
                let ii = (i as isize + w as isize - r_freq).clamp(0, n_freq as isize - 1) as usize;
                acc += k * f64::from(tmp[(ii, j)]);
            }
            out[(i, j)] = acc as f32;
        }
    }
    out
}

/// Normalized 1D Gaussian kernel truncated at 4 sigma.
fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    if sigma <= 0.0 {
        return vec![1.0];
    }
    let radius = (4.0 * sigma).ceil() as isize;
    let mut kernel: Vec<f64> = (-radius..=radius)
        .map(|i| (-((i * i) as f64) / (2.0 * sigma * sigma)).exp())
        .collect();
    let sum: f64 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_removes_an_isolated_spike() {
        let mut a = Array2::<f32>::ones((5, 5));
        a[(2, 2)] = 100.0;
        let filtered = median_denoise(&a, 3, 3);
        assert_eq!(filtered[(2, 2)], 1.0);
    }

    #[test]
    fn median_of_a_constant_array_is_unchanged() {
        let a = Array2::<f32>::from_elem((4, 6), 7.5);
        assert_eq!(median_denoise(&a, 3, 3), a);
    }

    #[test]
    fn background_subtraction_of_a_constant_array_is_zero() {
        let a = Array2::<f32>::from_elem((6, 40), 3.0);
        let (cleaned, background) = gaussian_background_subtract(&a, 1.0, 5.0, None);
        for &v in background.iter() {
            assert!((v - 3.0).abs() < 1e-4);
        }
        for &v in cleaned.iter() {
            assert!(v.abs() < 1e-4);
        }
    }

    #[test]
    fn clip_min_floors_the_cleaned_values() {
        let mut a = Array2::<f32>::from_elem((4, 30), 10.0);
        a[(2, 15)] = 0.0; // a dip below the background
        let (cleaned, _) = gaussian_background_subtract(&a, 1.0, 3.0, Some(0.0));
        assert!(cleaned.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let k = gaussian_kernel(2.0);
        let sum: f64 = k.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(k.len(), 17); // radius ceil(8) both sides
        assert!((k[0] - k[k.len() - 1]).abs() < 1e-15);
    }
}
