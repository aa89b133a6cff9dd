//! Single-sided magnitude spectrum restricted to positive frequencies

use super::fft::FftEngine;
use crate::config::SamplingConfig;

/// Parallel frequency/magnitude sequences, ascending in frequency,
/// strictly positive frequencies only.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Bin frequencies in Hz
    pub frequencies: Vec<f64>,

    /// Complex modulus at each bin; phase is discarded
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    /// Number of retained bins
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether the spectrum holds no bins
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Frequency of the largest-magnitude bin, if any
    pub fn peak_frequency(&self) -> Option<f64> {
        self.magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| self.frequencies[i])
    }
}

/// Compute the magnitude spectrum of a full capture.
///
/// The transform length equals the input length (no padding or
/// truncation). Retained bins are `k in [1, ceil(n/2))` at
/// `f_k = k * rate / n`: DC is dropped and, for even `n`, so is the
/// Nyquist bin, which the standard bin-frequency convention maps to the
/// negative side.
pub fn analyze(samples: &[f64], config: &SamplingConfig) -> Spectrum {
    let n = samples.len();
    let mut engine = FftEngine::new(n);
    let half = engine.compute_magnitude(samples);

    // k in [1, ceil(n/2)): strictly positive under the fftfreq convention
    let positive = 1..(n + 1) / 2;

    let frequencies: Vec<f64> = positive
        .clone()
        .map(|k| engine.bin_to_hz(k, config.sample_rate()))
        .collect();
    let magnitudes: Vec<f64> = positive.map(|k| half[k]).collect();

    Spectrum {
        frequencies,
        magnitudes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{generate, SignalKind, SignalParams};

    #[test]
    fn test_all_frequencies_strictly_positive() {
        let config = SamplingConfig::default();
        let samples = vec![1.0; config.num_samples()];
        let spectrum = analyze(&samples, &config);

        assert!(spectrum.frequencies.iter().all(|&f| f > 0.0));
        assert_eq!(spectrum.frequencies.len(), spectrum.magnitudes.len());
    }

    #[test]
    fn test_even_length_excludes_dc_and_nyquist() {
        // n = 8 at 8 Hz: fftfreq keeps 1, 2, 3 Hz as positive
        let config = SamplingConfig::new(8, 1);
        let samples = vec![0.0; 8];
        let spectrum = analyze(&samples, &config);

        assert_eq!(spectrum.frequencies, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_odd_length_keeps_every_positive_bin() {
        // n = 5 at 5 Hz: no Nyquist bin exists, so 1 and 2 Hz survive
        let config = SamplingConfig::new(5, 1);
        let samples: Vec<f64> = (0..5)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 / 5.0).cos())
            .collect();
        let spectrum = analyze(&samples, &config);

        assert_eq!(spectrum.frequencies, vec![1.0, 2.0]);
        // Unit cosine on bin 1: |X[1]| = n/2, bin 2 empty
        assert!((spectrum.magnitudes[0] - 2.5).abs() < 1e-9);
        assert!(spectrum.magnitudes[1] < 1e-9);
    }

    #[test]
    fn test_ascending_frequency_order() {
        let config = SamplingConfig::default();
        let samples = vec![0.5; config.num_samples()];
        let spectrum = analyze(&samples, &config);
        assert!(spectrum
            .frequencies
            .windows(2)
            .all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_sine_peaks_at_its_frequency() {
        let config = SamplingConfig::default();
        let params = SignalParams {
            kind: SignalKind::Sine,
            frequency_hz: 5.0,
            amplitude: 1.0,
            noise_std: 0.0,
        };
        let (_, samples) = generate(&config, &params);
        let spectrum = analyze(&samples, &config);

        assert_eq!(spectrum.peak_frequency(), Some(5.0));

        // Exact-bin sine: the peak dominates every other bin
        let peak: f64 = spectrum.magnitudes.iter().fold(0.0, |m, &v| m.max(v));
        assert!((peak - 1000.0).abs() < 1e-6, "peak magnitude {}", peak);
        let runner_up: f64 = spectrum
            .magnitudes
            .iter()
            .filter(|&&v| v < peak)
            .fold(0.0, |m, &v| m.max(v));
        assert!(peak > 100.0 * runner_up, "margin too small: {}", runner_up);
    }

    #[test]
    fn test_dc_component_is_dropped() {
        let config = SamplingConfig::new(100, 1);
        // Pure DC offset: every retained magnitude is ~0
        let samples = vec![3.0; 100];
        let spectrum = analyze(&samples, &config);
        assert!(spectrum.magnitudes.iter().all(|&m| m < 1e-8));
    }
}
