//! FFT engine using realfft for real-valued signals

use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// FFT engine for real-valued signals
pub struct FftEngine {
    /// Transform size (number of samples)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer
    input_buffer: Vec<f64>,

    /// Reusable output buffer (complex half-spectrum)
    output_buffer: Vec<num_complex::Complex<f64>>,
}

impl FftEngine {
    /// Create a new engine for transforms of `fft_size` samples.
    ///
    /// Arbitrary (non power-of-two) sizes are supported; the pipeline
    /// always transforms the full configured capture length.
    pub fn new(fft_size: usize) -> Self {
        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = vec![0.0; fft_size];
        let output_buffer = vec![num_complex::Complex::new(0.0, 0.0); fft_size / 2 + 1];

        Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        }
    }

    /// Compute the FFT and return the magnitude half-spectrum.
    ///
    /// # Arguments
    /// * `signal` - Input signal (zero-padded if shorter than `fft_size`)
    ///
    /// # Returns
    /// `|X[k]|` for `k = 0..=fft_size/2` (DC through Nyquist)
    pub fn compute_magnitude(&mut self, signal: &[f64]) -> Vec<f64> {
        let copy_len = signal.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        if copy_len < self.fft_size {
            self.input_buffer[copy_len..].fill(0.0);
        }

        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .expect("FFT processing failed");

        self.output_buffer.iter().map(|c| c.norm()).collect()
    }

    /// Transform size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Number of half-spectrum bins (`fft_size/2 + 1`)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Convert a bin index to Hz for a given sampling rate
    pub fn bin_to_hz(&self, bin: usize, sample_rate: f64) -> f64 {
        bin as f64 * sample_rate / self.fft_size as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_fft_dc_signal() {
        let mut fft = FftEngine::new(1024);

        let signal = vec![1.0; 1024];
        let spectrum = fft.compute_magnitude(&signal);

        // All energy in the DC bin
        assert!(spectrum[0] > 1000.0);
        assert!(spectrum[10] < 1e-9);
    }

    #[test]
    fn test_fft_sine_wave() {
        let mut fft = FftEngine::new(1000);

        // 50 cycles over 1000 samples: exact bin 50
        let signal: Vec<f64> = (0..1000)
            .map(|n| (2.0 * PI * 50.0 * n as f64 / 1000.0).sin())
            .collect();
        let spectrum = fft.compute_magnitude(&signal);

        let (peak_bin, &peak_mag) = spectrum
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();

        assert_eq!(peak_bin, 50);
        // Peak magnitude is N/2 for a unit sine on an exact bin
        assert!((peak_mag - 500.0).abs() < 1e-6);
    }

    #[test]
    fn test_shorter_signal_is_zero_padded() {
        let mut fft = FftEngine::new(64);
        let spectrum = fft.compute_magnitude(&[1.0; 16]);
        assert_eq!(spectrum.len(), 33);
        assert!((spectrum[0] - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_bin_frequencies() {
        let fft = FftEngine::new(2000);
        assert_eq!(fft.num_bins(), 1001);
        assert_eq!(fft.bin_to_hz(0, 1000.0), 0.0);
        assert!((fft.bin_to_hz(10, 1000.0) - 5.0).abs() < 1e-12);
        assert!((fft.bin_to_hz(1000, 1000.0) - 500.0).abs() < 1e-12);
    }
}
