//! Waveform synthesis with optional additive Gaussian noise

pub mod noise;
pub mod waveform;

pub use waveform::{generate, generate_with_rng, SignalKind, SignalParams};
