//! Spectral analysis with FFT

pub mod analysis;
pub mod fft;

pub use analysis::{analyze, Spectrum};
pub use fft::FftEngine;
