//! PyO3 bindings for the Tkinter shell

use pyo3::prelude::*;

mod filter_bindings;
mod pipeline_bindings;
mod signal_bindings;
mod spectrum_bindings;

/// Python module definition
#[pymodule]
fn sigviz(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<signal_bindings::PySignalGenerator>()?;
    m.add_class::<filter_bindings::PyFilterStage>()?;
    m.add_class::<spectrum_bindings::PySpectrumAnalyzer>()?;
    m.add_class::<pipeline_bindings::PyPipeline>()?;

    Ok(())
}
