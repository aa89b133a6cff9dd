//! Sigviz - Interactive Signal Exploration Core
//!
//! Waveform synthesis, zero-phase Butterworth filtering, and spectral
//! analysis behind a thin Python/Tkinter shell.

pub mod config;
pub mod filters;
pub mod pipeline;
pub mod signal;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use config::SamplingConfig;
pub use filters::{apply_filter, FilterError, FilterKind, FilterOutcome, FilterParams};
pub use pipeline::{process, PipelineResult};
pub use signal::{generate, SignalKind, SignalParams};
pub use spectrum::{analyze, Spectrum};
