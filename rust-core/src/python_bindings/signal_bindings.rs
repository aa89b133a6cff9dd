//! Python bindings for waveform synthesis

use crate::config::SamplingConfig;
use crate::signal::{generate, SignalKind, SignalParams};
use numpy::PyArray1;
use pyo3::prelude::*;

/// Waveform generator exposed to Python
#[pyclass(name = "SignalGenerator")]
pub struct PySignalGenerator {
    config: SamplingConfig,
}

#[pymethods]
impl PySignalGenerator {
    /// Create a new generator
    ///
    /// Args:
    ///     sample_rate: Sampling rate in Hz
    ///     duration: Capture duration in seconds
    #[new]
    #[pyo3(signature = (sample_rate=1000, duration=2))]
    fn new(sample_rate: u32, duration: u32) -> Self {
        Self {
            config: SamplingConfig::new(sample_rate, duration),
        }
    }

    /// Synthesize a waveform with optional Gaussian noise
    ///
    /// Args:
    ///     kind: "Sine", "Square" or "Sawtooth" (unknown names fall back to sine)
    ///     frequency: Fundamental frequency in Hz
    ///     amplitude: Peak amplitude
    ///     noise_std: Standard deviation of the additive noise (0 disables it)
    ///
    /// Returns:
    ///     Tuple of (time, samples) numpy arrays
    #[pyo3(signature = (kind="Sine", frequency=5.0, amplitude=1.0, noise_std=0.1))]
    fn generate<'py>(
        &self,
        py: Python<'py>,
        kind: &str,
        frequency: f64,
        amplitude: f64,
        noise_std: f64,
    ) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
        let params = SignalParams {
            kind: SignalKind::from_name(kind),
            frequency_hz: frequency,
            amplitude,
            noise_std,
        };
        let (time, samples) = generate(&self.config, &params);

        Ok((PyArray1::from_vec(py, time), PyArray1::from_vec(py, samples)))
    }

    /// Number of samples per capture
    fn num_samples(&self) -> usize {
        self.config.num_samples()
    }

    /// Sampling rate in Hz
    fn get_sample_rate(&self) -> f64 {
        self.config.sample_rate()
    }
}
