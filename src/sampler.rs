//! Sampling of the Lemniscate of Gerono.
//!
//! The curve is traced by
//!
//! ```text
//! x(t) = a·cos(t) + cx
//! y(t) = b·sin(t)·cos(t) + cy
//! ```
//!
//! for `t` in \[0, 2π\].

use std::f64::consts::TAU;
use ndarray::Array1;

/// Number of parameter values generated by [`sample`].
pub const SAMPLES: usize = 1000;

/// Parameters of a Lemniscate of Gerono.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gerono {
    /// Horizontal half-width of the figure eight.
    pub amplitude_x: f64,
    /// Vertical scale of the lobes.
    pub amplitude_y: f64,
    /// Point the curve crosses itself at.
    pub center: (f64, f64),
}

impl Default for Gerono {
    fn default() -> Self {
        Gerono { amplitude_x: 100., amplitude_y: 100., center: (300., 200.) }
    }
}

impl Gerono {
    /// Return the point of the curve at parameter `t`.
    ///
    /// # Example
    ///
    /// ```
    /// use gerono::sampler::Gerono;
    /// assert_eq!(Gerono::default().point(0.), (400., 200.));
    /// ```
    #[inline]
    pub fn point(&self, t: f64) -> (f64, f64) {
        let (cx, cy) = self.center;
        let cos = t.cos();
        let x = self.amplitude_x * cos + cx;
        let y = self.amplitude_y * t.sin() * cos + cy;
        (x, y)
    }

    /// Sample the whole loop at `n` parameter values spread over
    /// \[0, 2π\] (endpoints included, so the step is 2π/(n - 1)).
    pub fn sample(&self, n: usize) -> Samples {
        let t = Array1::linspace(0., TAU, n).into_raw_vec();
        let (x, y) = t.iter().map(|&t| self.point(t)).unzip();
        Samples { t, x, y }
    }
}

/// Parameter values together with the coordinates they map to.
/// All three sequences have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    t: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Samples {
    /// Parameter values.
    pub fn t(&self) -> &[f64] {
        &self.t
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Sample the default curve ([`Gerono::default`]) at [`SAMPLES`] points.
pub fn sample() -> Samples {
    Gerono::default().sample(SAMPLES)
}
