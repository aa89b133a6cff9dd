//! Python bindings for the one-shot pipeline

use crate::config::SamplingConfig;
use crate::filters::{FilterKind, FilterParams};
use crate::pipeline::process;
use crate::signal::{SignalKind, SignalParams};
use numpy::PyArray1;
use pyo3::prelude::*;

/// Full generate/filter/analyze pipeline exposed to Python
///
/// One call per parameter-change event; the shell redraws from the
/// returned dictionary.
#[pyclass(name = "Pipeline")]
pub struct PyPipeline {
    config: SamplingConfig,
}

#[pymethods]
impl PyPipeline {
    /// Create a new pipeline
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

    /// Run the full pipeline for one parameter set
    ///
    /// Args:
    ///     kind: Waveform name ("Sine", "Square", "Sawtooth")
    ///     frequency: Fundamental frequency in Hz
    ///     amplitude: Peak amplitude
    ///     noise_std: Additive Gaussian noise standard deviation
    ///     filter_kind: "Low-Pass" or "High-Pass"
    ///     cutoff: Cutoff frequency in Hz
    ///
    /// Returns:
    ///     Dictionary with keys: 'time', 'original', 'filtered',
    ///     'frequencies', 'original_spectrum', 'filtered_spectrum',
    ///     'degraded' (reason string or None)
    #[pyo3(signature = (
        kind="Sine", frequency=5.0, amplitude=1.0, noise_std=0.1,
        filter_kind="Low-Pass", cutoff=10.0
    ))]
    #[allow(clippy::too_many_arguments)]
    fn process(
        &self,
        py: Python<'_>,
        kind: &str,
        frequency: f64,
        amplitude: f64,
        noise_std: f64,
        filter_kind: &str,
        cutoff: f64,
    ) -> PyResult<PyObject> {
        let signal_params = SignalParams {
            kind: SignalKind::from_name(kind),
            frequency_hz: frequency,
            amplitude,
            noise_std,
        };
        let filter_params = FilterParams {
            kind: FilterKind::from_name(filter_kind),
            cutoff_hz: cutoff,
        };

        let result = process(&self.config, &signal_params, &filter_params);

        let dict = pyo3::types::PyDict::new(py);
        dict.set_item("time", PyArray1::from_vec(py, result.time))?;
        dict.set_item("original", PyArray1::from_vec(py, result.original))?;
        dict.set_item("filtered", PyArray1::from_vec(py, result.filtered))?;
        dict.set_item(
            "frequencies",
            PyArray1::from_vec(py, result.original_spectrum.frequencies),
        )?;
        dict.set_item(
            "original_spectrum",
            PyArray1::from_vec(py, result.original_spectrum.magnitudes),
        )?;
        dict.set_item(
            "filtered_spectrum",
            PyArray1::from_vec(py, result.filtered_spectrum.magnitudes),
        )?;
        dict.set_item("degraded", result.degraded.map(|e| e.to_string()))?;

        Ok(dict.into())
    }
}
