//! Process-wide sampling configuration
//!
//! Threaded explicitly through every pipeline operation rather than held
//! as ambient state, so each call is a pure function of its inputs.

/// Sampling rate and capture duration for one pipeline invocation.
///
/// Integer fields keep the sample count exact: `rate * duration` never
/// produces a fractional sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Sampling rate in samples per second
    pub sample_rate_hz: u32,

    /// Total capture duration in seconds
    pub duration_secs: u32,
}

impl SamplingConfig {
    /// Create a new sampling configuration
    pub fn new(sample_rate_hz: u32, duration_secs: u32) -> Self {
        Self {
            sample_rate_hz,
            duration_secs,
        }
    }

    /// Number of samples in a full capture
    pub fn num_samples(&self) -> usize {
        self.sample_rate_hz as usize * self.duration_secs as usize
    }

    /// Sampling rate as f64 (Hz)
    pub fn sample_rate(&self) -> f64 {
        f64::from(self.sample_rate_hz)
    }

    /// Nyquist frequency (half the sampling rate)
    pub fn nyquist(&self) -> f64 {
        self.sample_rate() / 2.0
    }

    /// Sample spacing in seconds
    pub fn dt(&self) -> f64 {
        1.0 / self.sample_rate()
    }
}

impl Default for SamplingConfig {
    /// 1 kHz for 2 seconds, the shell's fixed capture window
    fn default() -> Self {
        Self {
            sample_rate_hz: 1000,
            duration_secs: 2,
        }
    }
}
