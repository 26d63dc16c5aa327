//! Colormap construction for rendering derived imagery.
//!
//! Parses GMT `.cpt` color tables and explicit RGB lists into
//! piecewise-linear interpolation tables over the unit interval.

pub mod color;
pub mod colormap;
pub mod cpt;

pub use color::Rgb;
pub use colormap::Colormap;
pub use cpt::{Breakpoint, ColorModel, ColorTable};
