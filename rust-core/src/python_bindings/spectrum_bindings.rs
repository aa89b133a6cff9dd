//! Python bindings for spectral analysis

use crate::config::SamplingConfig;
use crate::spectrum::analyze;
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

/// Spectrum analyzer exposed to Python
#[pyclass(name = "SpectrumAnalyzer")]
pub struct PySpectrumAnalyzer {
    config: SamplingConfig,
}

#[pymethods]
impl PySpectrumAnalyzer {
    /// Create a new spectrum analyzer
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

    /// Compute the positive-frequency magnitude spectrum
    ///
    /// Args:
    ///     signal: Input signal as numpy array
    ///
    /// Returns:
    ///     Tuple of (frequencies, magnitudes) numpy arrays; DC and the
    ///     even-length Nyquist bin are excluded
    fn analyze<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
        let sig = signal.as_slice().unwrap();
        let spectrum = analyze(sig, &self.config);

        Ok((
            PyArray1::from_vec(py, spectrum.frequencies),
            PyArray1::from_vec(py, spectrum.magnitudes),
        ))
    }
}
