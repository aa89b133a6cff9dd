//! Deterministic waveform synthesis
//!
//! Produces the base signal from declarative parameters; noise injection
//! is layered on top by [`super::noise`].

use super::noise::add_gaussian_noise;
use crate::config::SamplingConfig;
use rand::Rng;
use std::f64::consts::PI;

/// Base waveform shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalKind {
    #[default]
    Sine,
    Square,
    Sawtooth,
}

impl SignalKind {
    /// Resolve a kind from the shell's dropdown label. Unknown labels
    /// fall back to `Sine`; the controls are the only source of these
    /// strings.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Square" => Self::Square,
            "Sawtooth" => Self::Sawtooth,
            _ => Self::Sine,
        }
    }
}

/// Parameters for one generation call, supplied fresh per invocation.
///
/// Ranges are constrained by the shell's sliders (frequency > 0,
/// amplitude >= 0, noise_std >= 0) and are not re-validated here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalParams {
    /// Waveform shape
    pub kind: SignalKind,

    /// Fundamental frequency in Hz
    pub frequency_hz: f64,

    /// Peak amplitude
    pub amplitude: f64,

    /// Standard deviation of the additive Gaussian noise; 0 disables noise
    pub noise_std: f64,
}

impl Default for SignalParams {
    /// The shell's initial control values
    fn default() -> Self {
        Self {
            kind: SignalKind::Sine,
            frequency_hz: 5.0,
            amplitude: 1.0,
            noise_std: 0.1,
        }
    }
}

/// Sign with `sign(0) = 0`, so the square wave passes through zero at
/// exact zero-crossings of the underlying sine.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Synthesize a waveform, drawing noise from the thread-local RNG.
///
/// # Returns
/// `(time, samples)` with `time[i] = i / sample_rate` and both vectors
/// of length `config.num_samples()`.
pub fn generate(config: &SamplingConfig, params: &SignalParams) -> (Vec<f64>, Vec<f64>) {
    generate_with_rng(config, params, &mut rand::thread_rng())
}

/// Synthesize a waveform with an injected RNG for reproducible noise.
///
/// With `noise_std == 0` the RNG is never touched and repeated calls
/// with identical parameters are bit-for-bit identical.
pub fn generate_with_rng<R: Rng + ?Sized>(
    config: &SamplingConfig,
    params: &SignalParams,
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    let n = config.num_samples();
    let dt = config.dt();
    let time: Vec<f64> = (0..n).map(|i| i as f64 * dt).collect();

    let f = params.frequency_hz;
    let a = params.amplitude;
    let mut samples: Vec<f64> = match params.kind {
        SignalKind::Sine => time.iter().map(|&t| a * (2.0 * PI * f * t).sin()).collect(),
        SignalKind::Square => time
            .iter()
            .map(|&t| a * sign((2.0 * PI * f * t).sin()))
            .collect(),
        SignalKind::Sawtooth => time
            .iter()
            // Centered ramp in [-a, a)
            .map(|&t| a * 2.0 * (f * t - (f * t + 0.5).floor()))
            .collect(),
    };

    if params.noise_std > 0.0 {
        add_gaussian_noise(&mut samples, params.noise_std, rng);
    }

    (time, samples)
}
