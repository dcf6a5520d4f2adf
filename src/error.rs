use pyo3::PyErr;
use thiserror::Error;

/// Possible errors when rendering the curve.
#[derive(Debug, Error)]
pub enum Error {
    /// The `x` and `y` coordinate sequences do not have the same length.
    #[error("dimension mismatch: x has {x} points but y has {y}")]
    DimensionMismatch { x: usize, y: usize },
    /// No display or image backend could be reached (Python, matplotlib
    /// or numpy failed to import).
    #[error("no rendering backend available: {0}\n\
             Please install matplotlib.  See https://matplotlib.org/")]
    RenderBackendUnavailable(String),
    /// A drawing directive was issued before a figure was created.
    #[error("no current figure; a figure must be created before drawing")]
    NoFigure,
    /// Other Python errors.
    #[error("Python error: {0}")]
    Python(#[from] PyErr),
}
