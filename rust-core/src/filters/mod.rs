//! Butterworth design and zero-phase IIR filtering

pub mod design;
pub mod iir;
pub mod stage;

pub use design::{butter, BaCoeffs, FilterKind};
pub use iir::filtfilt;
pub use stage::{apply_filter, FilterError, FilterOutcome, FilterParams};
