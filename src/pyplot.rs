//! [Matplotlib][] backend, driven through the embedded Python
//! interpreter.
//!
//! Only the handful of pyplot and `Axes` calls needed to draw the
//! curve are bound.  Each [`Directive`] maps to one of them.
//!
//! [Matplotlib]: https://matplotlib.org/

use lazy_static::lazy_static;
use log::info;
use numpy::PyArray1;
use pyo3::{
    prelude::*,
    types::PyDict,
};
use crate::{
    Error,
    render::{Backend, Directive, LineStyle},
};

/// Call the method `$m` of the Python object `$obj` while holding the
/// GIL.  The `$py ->` forms give access to the GIL token to build the
/// arguments.
macro_rules! meth {
    ($obj: expr, $m: ident, $py: ident -> $args: expr, $kwargs: expr) => {
        Python::with_gil(|$py| -> Result<(), Error> {
            let kwargs = $kwargs;
            $obj.bind($py).call_method(stringify!($m), $args, Some(&kwargs))?;
            Ok(())
        })
    };
    ($obj: expr, $m: ident, $py: ident -> $args: expr) => {
        Python::with_gil(|$py| -> Result<(), Error> {
            $obj.bind($py).call_method1(stringify!($m), $args)?;
            Ok(())
        })
    };
    ($obj: expr, $m: ident, $args: expr) => {
        Python::with_gil(|py| -> Result<(), Error> {
            $obj.bind(py).call_method1(stringify!($m), $args)?;
            Ok(())
        })
    };
}

/// Import and return a handle to the module `$m`.
macro_rules! pyimport { ($m: literal) => {
    Python::with_gil(|py|
        PyModule::import_bound(py, $m).map(Bound::unbind))
}}

lazy_static! {
    static ref PYPLOT: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.pyplot")
    };
    static ref NUMPY: Result<Py<PyModule>, PyErr> = {
        pyimport!("numpy")
    };
}

/// Return a handle to the module `$m`.
/// ⚠ This may try to lock Python's GIL.  Make sure it is executed
/// outside a call to `Python::with_gil`.
macro_rules! pymod { ($m: ident) => {
    $m.as_ref().map_err(|e| Error::RenderBackendUnavailable(e.to_string()))
}}

/// Trait expressing that `Self` can be converted to a numpy.ndarray.
pub trait Data {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>>;
}

impl<T> Data for T where T: AsRef<[f64]> + ?Sized {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_slice_bound(py, self.as_ref())
    }
}

fn line_kwargs<'py>(py: Python<'py>, line: &LineStyle)
                    -> PyResult<Bound<'py, PyDict>> {
    let kwargs = PyDict::new_bound(py);
    kwargs.set_item("color", line.color)?;
    if let Some(ls) = line.linestyle {
        kwargs.set_item("linestyle", ls)?;
    }
    kwargs.set_item("linewidth", line.linewidth)?;
    Ok(kwargs)
}

fn aspect_kwargs(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    let kwargs = PyDict::new_bound(py);
    kwargs.set_item("adjustable", "box")?;
    Ok(kwargs)
}

/// The top level container for all the plot elements.
#[derive(Debug)]
pub struct Figure {
    fig: PyObject, // instance of matplotlib.figure.Figure
}

#[derive(Debug, Clone)]
pub struct Axes {
    ax: PyObject, // instance of matplotlib.axes.Axes
}

/// Create a new pyplot figure of size `figsize` (in inches).
pub fn figure(figsize: (f64, f64)) -> Result<Figure, Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let kwargs = PyDict::new_bound(py);
        kwargs.set_item("figsize", figsize)?;
        let fig = pyplot.bind(py).getattr("figure")?
            .call((), Some(&kwargs))?;
        Ok(Figure { fig: fig.unbind() })
    })
}

/// Display all open figures.  Blocks until they are closed when the
/// Matplotlib backend is interactive.
pub fn show() -> Result<(), Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        pyplot.bind(py).getattr("show")?.call0()?;
        Ok(())
    })
}

/// Close the figure `fig` and release the memory pyplot holds for it.
pub fn close(fig: &Figure) -> Result<(), Error> {
    let pyplot = pymod!(PYPLOT)?;
    meth!(pyplot, close, py -> (fig.fig.clone_ref(py),))
}

/// Name of the Matplotlib backend in use.
pub fn get_backend() -> Result<String, Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let name = pyplot.bind(py).getattr("get_backend")?.call0()?;
        Ok(name.extract()?)
    })
}

/// Switch the Matplotlib backend (e.g. "agg" for headless use).
pub fn switch_backend(name: &str) -> Result<(), Error> {
    let pyplot = pymod!(PYPLOT)?;
    meth!(pyplot, switch_backend, (name,))
}

impl Figure {
    /// Return the current axes of the figure, creating them if needed.
    pub fn gca(&self) -> Result<Axes, Error> {
        Python::with_gil(|py| {
            let ax = self.fig.bind(py).call_method0("gca")?;
            Ok(Axes { ax: ax.unbind() })
        })
    }
}

impl Axes {
    /// Plot `y` versus `x` as a line.  `x` and `y` must have the same
    /// length.
    pub fn plot<D>(&mut self, x: &D, y: &D) -> Result<(), Error>
    where D: Data + ?Sized {
        meth!(self.ax, plot, py -> (x.to_numpy(py), y.to_numpy(py)))
    }

    pub fn axhline(&mut self, y: f64, line: &LineStyle) -> Result<(), Error> {
        meth!(self.ax, axhline, py -> (y,), line_kwargs(py, line)?)
    }

    pub fn axvline(&mut self, x: f64, line: &LineStyle) -> Result<(), Error> {
        meth!(self.ax, axvline, py -> (x,), line_kwargs(py, line)?)
    }

    pub fn grid(&mut self, line: &LineStyle) -> Result<(), Error> {
        meth!(self.ax, grid, py -> (true,), line_kwargs(py, line)?)
    }

    pub fn set_title(&mut self, v: &str) -> Result<(), Error> {
        meth!(self.ax, set_title, (v,))
    }

    pub fn set_xlabel(&mut self, label: &str) -> Result<(), Error> {
        meth!(self.ax, set_xlabel, (label,))
    }

    pub fn set_ylabel(&mut self, label: &str) -> Result<(), Error> {
        meth!(self.ax, set_ylabel, (label,))
    }

    /// Make a unit on the x-axis as long as a unit on the y-axis,
    /// resizing the box rather than changing the data limits.
    pub fn set_aspect_equal(&mut self) -> Result<(), Error> {
        meth!(self.ax, set_aspect, py -> ("equal",), aspect_kwargs(py)?)
    }
}

/// [`Backend`] drawing with Matplotlib's pyplot.
#[derive(Debug)]
pub struct Pyplot {
    fig: Option<Figure>,
    ax: Option<Axes>,
}

impl Pyplot {
    /// Return a new backend using Matplotlib's default backend.
    ///
    /// Return [`Error::RenderBackendUnavailable`] if matplotlib or
    /// numpy cannot be imported.
    pub fn new() -> Result<Pyplot, Error> {
        pymod!(PYPLOT)?;
        pymod!(NUMPY)?;
        info!("matplotlib backend: {}", get_backend()?);
        Ok(Pyplot { fig: None, ax: None })
    }

    /// Same as [`Pyplot::new`] but first switch Matplotlib to the
    /// backend `name`.
    pub fn with_backend(name: &str) -> Result<Pyplot, Error> {
        // Switching closes all open figures.
        if !get_backend()?.eq_ignore_ascii_case(name) {
            switch_backend(name)?;
        }
        Self::new()
    }

    /// Close the figure this backend drew on, if any.
    pub fn close(mut self) -> Result<(), Error> {
        self.ax = None;
        match self.fig.take() {
            Some(fig) => close(&fig),
            None => Ok(()),
        }
    }

    fn axes(&mut self) -> Result<&mut Axes, Error> {
        self.ax.as_mut().ok_or(Error::NoFigure)
    }
}

impl<'a> Backend<'a> for Pyplot {
    fn draw(&mut self, directive: Directive<'a>) -> Result<(), Error> {
        match directive {
            Directive::Figure { width, height } => {
                self.ax = None;
                if let Some(prev) = self.fig.take() {
                    close(&prev)?;
                }
                let fig = figure((width, height))?;
                self.ax = Some(fig.gca()?);
                self.fig = Some(fig);
            }
            Directive::Plot { x, y } => self.axes()?.plot(x, y)?,
            Directive::AxHLine { y, line } => self.axes()?.axhline(y, &line)?,
            Directive::AxVLine { x, line } => self.axes()?.axvline(x, &line)?,
            Directive::Grid { line } => self.axes()?.grid(&line)?,
            Directive::Title(t) => self.axes()?.set_title(t)?,
            Directive::XLabel(l) => self.axes()?.set_xlabel(l)?,
            Directive::YLabel(l) => self.axes()?.set_ylabel(l)?,
            Directive::EqualAspect => self.axes()?.set_aspect_equal()?,
            Directive::Show => {
                if self.fig.is_none() {
                    return Err(Error::NoFigure)
                }
                show()?
            }
        }
        Ok(())
    }
}
