//! Degradation-aware filter stage
//!
//! The shell must always have something to plot, so numerical failures
//! never cross this boundary as errors: the stage falls back to the
//! unfiltered input and records why.

use super::design::{butter, FilterKind};
use super::iir::filtfilt;
use crate::config::SamplingConfig;
use thiserror::Error;

/// Fixed filter order for the exploration pipeline
pub const FILTER_ORDER: usize = 4;

/// Bounds for the normalized cutoff; values outside are clamped, never
/// rejected.
pub const MIN_NORMALIZED_CUTOFF: f64 = 0.001;
pub const MAX_NORMALIZED_CUTOFF: f64 = 0.999;

/// Numerical failures inside design or application
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("filter design produced non-finite coefficients")]
    UnstableDesign,

    #[error("steady-state initial conditions are singular")]
    SingularInitialState,

    #[error("input of {len} samples cannot host a pad of {padlen}")]
    InputTooShort { len: usize, padlen: usize },
}

/// Parameters for one filtering call, supplied fresh per invocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Low-pass or high-pass
    pub kind: FilterKind,

    /// Cutoff frequency in Hz; clamped against Nyquist, never rejected
    pub cutoff_hz: f64,
}

impl Default for FilterParams {
    /// The shell's initial control values
    fn default() -> Self {
        Self {
            kind: FilterKind::LowPass,
            cutoff_hz: 10.0,
        }
    }
}

/// Result of a filter invocation.
///
/// Degradation is observable rather than masked: callers that only want
/// samples use [`FilterOutcome::samples`], callers that care whether the
/// filter actually ran check [`FilterOutcome::is_degraded`].
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// Zero-phase filtered sequence, same length as the input
    Filtered(Vec<f64>),

    /// The input passed through untouched because filtering failed
    Passthrough {
        samples: Vec<f64>,
        reason: FilterError,
    },
}

impl FilterOutcome {
    /// The output sequence, filtered or not
    pub fn samples(&self) -> &[f64] {
        match self {
            Self::Filtered(samples) => samples,
            Self::Passthrough { samples, .. } => samples,
        }
    }

    /// Consume the outcome, keeping only the sequence
    pub fn into_samples(self) -> Vec<f64> {
        match self {
            Self::Filtered(samples) => samples,
            Self::Passthrough { samples, .. } => samples,
        }
    }

    /// True when the stage fell back to passthrough
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Passthrough { .. })
    }

    /// The failure behind a passthrough, if any
    pub fn degradation(&self) -> Option<&FilterError> {
        match self {
            Self::Filtered(_) => None,
            Self::Passthrough { reason, .. } => Some(reason),
        }
    }
}

/// Design and apply a 4th-order Butterworth filter with zero phase.
///
/// The cutoff is normalized against Nyquist and clamped into
/// `[0.001, 0.999]`, so a cutoff at or beyond Nyquist degrades the
/// response rather than erroring. The returned sequence always has the
/// input's length.
pub fn apply_filter(
    samples: &[f64],
    config: &SamplingConfig,
    params: &FilterParams,
) -> FilterOutcome {
    let wn = (params.cutoff_hz / config.nyquist())
        .clamp(MIN_NORMALIZED_CUTOFF, MAX_NORMALIZED_CUTOFF);

    let result = butter(FILTER_ORDER, wn, params.kind).and_then(|ba| filtfilt(&ba, samples));

    match result {
        Ok(filtered) => FilterOutcome::Filtered(filtered),
        Err(reason) => {
            eprintln!("Filter degraded to passthrough: {}", reason);
            FilterOutcome::Passthrough {
                samples: samples.to_vec(),
                reason,
            }
        }
    }
}
