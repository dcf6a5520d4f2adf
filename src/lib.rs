//! Sample a [Lemniscate of Gerono][] and plot it with [Matplotlib][].
//!
//! Usage
//! -----
//!
//! The curve is first sampled with [`sampler::sample`], then drawn by
//! [`render::render`] on any [`render::Backend`]: [`pyplot::Pyplot`]
//! to display it, or [`render::Recorder`] to keep the directives.
//!
//! ```
//! use gerono::{render::{render, Recorder}, sampler};
//! let s = sampler::sample();
//! let (x, y) = (s.x(), s.y());
//! let mut rec = Recorder::new();
//! render(&mut rec, x, y)?;
//! assert_eq!(rec.directives().len(), 10);
//! # Ok::<(), gerono::Error>(())
//! ```
//!
//! [Lemniscate of Gerono]: https://en.wikipedia.org/wiki/Lemniscate_of_Gerono
//! [Matplotlib]: https://matplotlib.org/

mod error;
pub mod pyplot;
pub mod render;
pub mod sampler;

pub use error::Error;
