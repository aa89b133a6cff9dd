//! One-shot exploration pipeline: generate, filter, analyze both traces
//!
//! Invoked by the shell on every parameter-change event. Synchronous and
//! allocation-fresh: nothing is cached between invocations.

use crate::config::SamplingConfig;
use crate::filters::{apply_filter, FilterError, FilterParams};
use crate::signal::{generate, SignalParams};
use crate::spectrum::{analyze, Spectrum};

/// Everything the shell needs to redraw both plots
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    /// Time axis, `time[i] = i / sample_rate`
    pub time: Vec<f64>,

    /// Synthesized signal, noise included
    pub original: Vec<f64>,

    /// Zero-phase filtered signal (or the original on degradation)
    pub filtered: Vec<f64>,

    /// Why the filter stage fell back to passthrough, when it did
    pub degraded: Option<FilterError>,

    /// Magnitude spectrum of the original signal
    pub original_spectrum: Spectrum,

    /// Magnitude spectrum of the filtered signal
    pub filtered_spectrum: Spectrum,
}

/// Run the full generate -> filter -> analyze x2 sequence.
pub fn process(
    config: &SamplingConfig,
    signal_params: &SignalParams,
    filter_params: &FilterParams,
) -> PipelineResult {
    let (time, original) = generate(config, signal_params);
    let outcome = apply_filter(&original, config, filter_params);
    let degraded = outcome.degradation().cloned();
    let filtered = outcome.into_samples();

    let original_spectrum = analyze(&original, config);
    let filtered_spectrum = analyze(&filtered, config);

    PipelineResult {
        time,
        original,
        filtered,
        degraded,
        original_spectrum,
        filtered_spectrum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterKind;
    use crate::signal::SignalKind;
    use std::f64::consts::PI;

    #[test]
    fn test_end_to_end_sine_capture() {
        // 1 kHz for 2 s, 5 Hz unit sine, low-pass at 10 Hz
        let config = SamplingConfig::new(1000, 2);
        let signal_params = SignalParams {
            kind: SignalKind::Sine,
            frequency_hz: 5.0,
            amplitude: 1.0,
            noise_std: 0.0,
        };
        let filter_params = FilterParams {
            kind: FilterKind::LowPass,
            cutoff_hz: 10.0,
        };

        let result = process(&config, &signal_params, &filter_params);

        assert_eq!(result.time.len(), 2000);
        assert_eq!(result.original.len(), 2000);
        assert_eq!(result.filtered.len(), 2000);
        assert!(result.degraded.is_none());

        for i in 0..2000 {
            let expected = (2.0 * PI * 5.0 * result.time[i]).sin();
            assert!((result.original[i] - expected).abs() < 1e-12);
        }

        // 5 Hz sits well under the 10 Hz cutoff: minimal attenuation
        let peak = result.filtered[500..1500]
            .iter()
            .fold(0.0_f64, |m, &v| m.max(v.abs()));
        assert!((peak - 1.0).abs() < 0.05, "filtered peak {}", peak);

        assert_eq!(result.original_spectrum.peak_frequency(), Some(5.0));
        assert_eq!(result.filtered_spectrum.peak_frequency(), Some(5.0));
    }

    #[test]
    fn test_spectra_share_the_frequency_axis() {
        let config = SamplingConfig::default();
        let result = process(
            &config,
            &SignalParams::default(),
            &FilterParams::default(),
        );
        assert_eq!(
            result.original_spectrum.frequencies,
            result.filtered_spectrum.frequencies
        );
    }

    #[test]
    fn test_highpass_strips_the_fundamental() {
        let config = SamplingConfig::default();
        let signal_params = SignalParams {
            kind: SignalKind::Sine,
            frequency_hz: 5.0,
            amplitude: 1.0,
            noise_std: 0.0,
        };
        let filter_params = FilterParams {
            kind: FilterKind::HighPass,
            cutoff_hz: 50.0,
        };

        let result = process(&config, &signal_params, &filter_params);
        assert!(result.degraded.is_none());

        // The 5 Hz bin collapses after high-pass filtering
        let bin_5hz = result
            .filtered_spectrum
            .frequencies
            .iter()
            .position(|&f| (f - 5.0).abs() < 1e-9)
            .unwrap();
        let orig_mag = result.original_spectrum.magnitudes[bin_5hz];
        let filt_mag = result.filtered_spectrum.magnitudes[bin_5hz];
        assert!(filt_mag < orig_mag / 100.0, "{} vs {}", filt_mag, orig_mag);
    }

    #[test]
    fn test_noisy_run_keeps_contract() {
        let config = SamplingConfig::default();
        let signal_params = SignalParams {
            noise_std: 0.3,
            ..SignalParams::default()
        };
        let result = process(&config, &signal_params, &FilterParams::default());

        assert_eq!(result.original.len(), config.num_samples());
        assert_eq!(result.filtered.len(), config.num_samples());
        assert!(result
            .original_spectrum
            .frequencies
            .iter()
            .all(|&f| f > 0.0));
    }
}
