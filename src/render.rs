//! Rendering of the sampled curve as a fixed sequence of drawing
//! directives sent to a [`Backend`].

use log::debug;
use crate::Error;

/// Size hint of the figure, in inches.
pub const FIGSIZE: (f64, f64) = (6., 6.);

pub const TITLE: &str = "Lemniscate of Gerono";

/// Style of the horizontal and vertical lines through the origin.
pub const REFERENCE_LINE: LineStyle =
    LineStyle { color: "black", linestyle: None, linewidth: 0.5 };

pub const GRID_LINE: LineStyle =
    LineStyle { color: "gray", linestyle: Some("--"), linewidth: 0.5 };

/// Matplotlib-like line properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: &'static str,
    /// `None` means the backend default (solid).
    pub linestyle: Option<&'static str>,
    pub linewidth: f64,
}

/// One drawing instruction.  `'a` is the lifetime of the plotted data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Directive<'a> {
    /// Create a new figure of the given size.
    Figure { width: f64, height: f64 },
    /// Plot `y` versus `x` as a connected line, default style.
    Plot { x: &'a [f64], y: &'a [f64] },
    /// Horizontal line across the axes at ordinate `y`.
    AxHLine { y: f64, line: LineStyle },
    /// Vertical line across the axes at abscissa `x`.
    AxVLine { x: f64, line: LineStyle },
    Grid { line: LineStyle },
    Title(&'a str),
    XLabel(&'a str),
    YLabel(&'a str),
    /// Same visual length for a unit on both axes, obtained by
    /// adjusting the box, not the data limits.
    EqualAspect,
    /// Present the figure.  Blocks until the window is closed on
    /// interactive backends.
    Show,
}

/// Something able to carry out drawing directives.
pub trait Backend<'a> {
    fn draw(&mut self, directive: Directive<'a>) -> Result<(), Error>;
}

/// Draw the curve (`x`, `y`) with its reference lines, grid, title,
/// labels and equal aspect, then show it.
///
/// Nothing reaches `backend` if `x` and `y` differ in length.
///
/// # Example
///
/// ```
/// use gerono::render::{render, Directive, Recorder};
/// let mut rec = Recorder::new();
/// render(&mut rec, &[1., 2.], &[3., 4.])?;
/// assert_eq!(rec.directives().last(), Some(&Directive::Show));
/// # Ok::<(), gerono::Error>(())
/// ```
pub fn render<'a, B>(backend: &mut B, x: &'a [f64], y: &'a [f64])
                     -> Result<(), Error>
where B: Backend<'a> + ?Sized {
    if x.len() != y.len() {
        return Err(Error::DimensionMismatch { x: x.len(), y: y.len() })
    }
    let (width, height) = FIGSIZE;
    let directives = [
        Directive::Figure { width, height },
        Directive::Plot { x, y },
        Directive::AxHLine { y: 0., line: REFERENCE_LINE },
        Directive::AxVLine { x: 0., line: REFERENCE_LINE },
        Directive::Grid { line: GRID_LINE },
        Directive::Title(TITLE),
        Directive::XLabel("x"),
        Directive::YLabel("y"),
        Directive::EqualAspect,
        Directive::Show,
    ];
    for d in directives {
        match d {
            Directive::Plot { x, .. } => debug!("plot {} points", x.len()),
            _ => debug!("{:?}", d),
        }
        backend.draw(d)?;
    }
    Ok(())
}

/// A headless backend keeping the directives it receives, in order.
#[derive(Debug, Default)]
pub struct Recorder<'a> {
    directives: Vec<Directive<'a>>,
}

impl<'a> Recorder<'a> {
    pub fn new() -> Self {
        Recorder { directives: vec![] }
    }

    pub fn directives(&self) -> &[Directive<'a>] {
        &self.directives
    }
}

impl<'a> Backend<'a> for Recorder<'a> {
    fn draw(&mut self, directive: Directive<'a>) -> Result<(), Error> {
        self.directives.push(directive);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler;

    #[test_log::test]
    fn directive_order() -> Result<(), Error> {
        let s = sampler::sample();
        let (x, y) = (s.x(), s.y());
        let mut rec = Recorder::new();
        render(&mut rec, x, y)?;
        assert_eq!(rec.directives(), &[
            Directive::Figure { width: 6., height: 6. },
            Directive::Plot { x, y },
            Directive::AxHLine { y: 0., line: REFERENCE_LINE },
            Directive::AxVLine { x: 0., line: REFERENCE_LINE },
            Directive::Grid { line: GRID_LINE },
            Directive::Title("Lemniscate of Gerono"),
            Directive::XLabel("x"),
            Directive::YLabel("y"),
            Directive::EqualAspect,
            Directive::Show,
        ]);
        Ok(())
    }

    #[test_log::test]
    fn plots_the_given_data() -> Result<(), Error> {
        let s = sampler::sample();
        let (x, y) = (s.x(), s.y());
        let mut rec = Recorder::new();
        render(&mut rec, x, y)?;
        let plotted = rec.directives().iter().find_map(|d| match d {
            Directive::Plot { x, y } => Some((x.len(), y.len(), x[0], y[0])),
            _ => None,
        });
        assert_eq!(plotted, Some((1000, 1000, 400., 200.)));
        Ok(())
    }

    #[test_log::test]
    fn styles() {
        assert_eq!(REFERENCE_LINE.color, "black");
        assert_eq!(REFERENCE_LINE.linewidth, 0.5);
        assert_eq!(REFERENCE_LINE.linestyle, None);
        assert_eq!(GRID_LINE.color, "gray");
        assert_eq!(GRID_LINE.linestyle, Some("--"));
        assert_eq!(GRID_LINE.linewidth, 0.5);
    }

    #[test_log::test]
    fn dimension_mismatch() {
        let x = vec![0.; 1000];
        let y = vec![0.; 999];
        let mut rec = Recorder::new();
        match render(&mut rec, &x, &y) {
            Err(Error::DimensionMismatch { x: 1000, y: 999 }) => (),
            r => panic!("expected DimensionMismatch, got {:?}", r),
        }
        assert!(rec.directives().is_empty());
    }

    /// A backend that fails on the first directive of a given kind.
    struct Failing(usize);

    impl<'a> Backend<'a> for Failing {
        fn draw(&mut self, d: Directive<'a>) -> Result<(), Error> {
            self.0 += 1;
            match d {
                Directive::Grid { .. } => Err(Error::NoFigure),
                _ => Ok(()),
            }
        }
    }

    #[test_log::test]
    fn stops_at_first_error() {
        let mut b = Failing(0);
        let r = render(&mut b, &[1.], &[2.]);
        assert!(matches!(r, Err(Error::NoFigure)));
        assert_eq!(b.0, 5);
    }
}
