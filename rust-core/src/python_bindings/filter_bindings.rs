//! Python bindings for the zero-phase filter stage

use crate::config::SamplingConfig;
use crate::filters::{apply_filter, FilterKind, FilterOutcome, FilterParams};
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

/// Butterworth filter stage exposed to Python
#[pyclass(name = "FilterStage")]
pub struct PyFilterStage {
    config: SamplingConfig,
}

#[pymethods]
impl PyFilterStage {
    /// Create a new filter stage
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

    /// Filter a signal forward and backward (zero phase)
    ///
    /// Args:
    ///     signal: Input signal as numpy array
    ///     kind: "Low-Pass" or "High-Pass" (unknown names fall back to low-pass)
    ///     cutoff: Cutoff frequency in Hz, clamped to the usable band
    ///
    /// Returns:
    ///     Tuple of (filtered samples, degradation reason or None); on
    ///     degradation the samples are the unfiltered input
    #[pyo3(signature = (signal, kind="Low-Pass", cutoff=10.0))]
    fn apply<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
        kind: &str,
        cutoff: f64,
    ) -> PyResult<(&'py PyArray1<f64>, Option<String>)> {
        let sig = signal.as_slice().unwrap();
        let params = FilterParams {
            kind: FilterKind::from_name(kind),
            cutoff_hz: cutoff,
        };

        let (samples, reason) = match apply_filter(sig, &self.config, &params) {
            FilterOutcome::Filtered(samples) => (samples, None),
            FilterOutcome::Passthrough { samples, reason } => {
                (samples, Some(reason.to_string()))
            }
        };

        Ok((PyArray1::from_vec(py, samples), reason))
    }
}
