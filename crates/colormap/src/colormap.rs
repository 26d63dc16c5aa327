//! Piecewise-linear colormaps over the unit interval.

use goes_common::{GoesError, GoesResult};

use crate::color::Rgb;
use crate::cpt::ColorTable;

/// A piecewise-linear color interpolation table over [0, 1].
///
/// Stops are ascending, with the first at position 0 and the last at
/// position 1. Sampling at 0 and 1 returns the boundary colors exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    stops: Vec<(f64, Rgb)>,
}

impl Colormap {
    /// Build a colormap from a parsed color table.
    ///
    /// Breakpoint positions are normalized so the table spans [0, 1].
    pub fn from_table(table: &ColorTable) -> GoesResult<Self> {
        let bps = table.breakpoints();
        let first = bps.first().map(|b| b.position).unwrap_or(0.0);
        let last = bps.last().map(|b| b.position).unwrap_or(0.0);

        if bps.len() < 2 || last == first {
            return Err(GoesError::InvalidColormap(
                "color table spans zero width".to_string(),
            ));
        }

        let span = last - first;
        let stops = bps
            .iter()
            .map(|bp| ((bp.position - first) / span, bp.color))
            .collect();

        Ok(Self { stops })
    }

    /// Build a colormap from explicit colors and optional positions.
    ///
    /// When `positions` is omitted the colors are spaced equally. When
    /// supplied, it must match the color count, be non-decreasing, and span
    /// exactly [0, 1].
    pub fn from_colors(colors: &[Rgb], positions: Option<&[f64]>) -> GoesResult<Self> {
        if colors.len() < 2 {
            return Err(GoesError::InvalidColormap(
                "need at least 2 colors".to_string(),
            ));
        }

        let stops = match positions {
            None => {
                let last = (colors.len() - 1) as f64;
                colors
                    .iter()
                    .enumerate()
                    .map(|(i, c)| (i as f64 / last, *c))
                    .collect()
            }
            Some(positions) => {
                if positions.len() != colors.len() {
                    return Err(GoesError::InvalidColormap(format!(
                        "position length must match color count ({} vs {})",
                        positions.len(),
                        colors.len()
                    )));
                }
                if positions.iter().any(|p| !p.is_finite()) {
                    return Err(GoesError::InvalidColormap(
                        "positions must be finite".to_string(),
                    ));
                }
                if positions.first() != Some(&0.0) || positions.last() != Some(&1.0) {
                    return Err(GoesError::InvalidColormap(
                        "positions must start at 0 and end at 1".to_string(),
                    ));
                }
                if positions.windows(2).any(|w| w[1] < w[0]) {
                    return Err(GoesError::InvalidColormap(
                        "positions must be non-decreasing".to_string(),
                    ));
                }
                positions.iter().copied().zip(colors.iter().copied()).collect()
            }
        };

        Ok(Self { stops })
    }

    /// Build from 8-bit color tuples.
    pub fn from_colors_u8(colors: &[(u8, u8, u8)], positions: Option<&[f64]>) -> GoesResult<Self> {
        let colors: Vec<Rgb> = colors
            .iter()
            .map(|&(r, g, b)| Rgb::from_u8(r, g, b))
            .collect();
        Self::from_colors(&colors, positions)
    }

    /// Sample the colormap at `t`, clamping to [0, 1].
    pub fn sample(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let (first_pos, first_color) = self.stops[0];
        if t <= first_pos {
            return first_color;
        }

        for i in 1..self.stops.len() {
            let (high_pos, high_color) = self.stops[i];
            if t <= high_pos {
                let (low_pos, low_color) = self.stops[i - 1];
                if high_pos == low_pos {
                    // Zero-width segment encodes a discontinuity
                    return high_color;
                }
                let frac = (t - low_pos) / (high_pos - low_pos);
                return low_color.lerp(&high_color, frac);
            }
        }

        self.stops[self.stops.len() - 1].1
    }

    /// Discretize into an `n`-entry lookup table for rendering front ends.
    pub fn lookup_table(&self, n: usize) -> Vec<Rgb> {
        assert!(n >= 2, "lookup table needs at least 2 entries");
        (0..n)
            .map(|i| self.sample(i as f64 / (n - 1) as f64))
            .collect()
    }

    /// The normalized stops, ascending over [0, 1].
    pub fn stops(&self) -> &[(f64, Rgb)] {
        &self.stops
    }
}
