//! GMT `.cpt` color-table parsing.
//!
//! A `.cpt` file is a sequence of segment lines, each carrying two
//! breakpoints (`x1 r1 g1 b1  x2 r2 g2 b2`), optionally preceded by comment
//! lines (a trailing `HSV` token switches the color model) and followed by
//! `B`/`F`/`N` footer lines naming background/foreground/nodata colors.
//! Malformed segment lines are a parse error; no fallback values are
//! fabricated.

use std::path::Path;

use goes_common::{GoesError, GoesResult};

use crate::color::Rgb;

/// Color model declared by a `.cpt` header comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorModel {
    Rgb,
    Hsv,
}

/// An ordered breakpoint of a color table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Position in the table's native units (not yet normalized)
    pub position: f64,
    pub color: Rgb,
}

/// An ordered color table parsed from `.cpt` text.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    breakpoints: Vec<Breakpoint>,
}

impl ColorTable {
    /// Parse a color table from `.cpt` text.
    pub fn from_cpt_str(text: &str) -> GoesResult<Self> {
        let mut model = ColorModel::Rgb;
        // Raw triples in the declared model, converted once parsing is done
        let mut raw: Vec<(f64, f64, f64, f64)> = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if trimmed.starts_with('#') {
                if trimmed.split_whitespace().last() == Some("HSV") {
                    model = ColorModel::Hsv;
                }
                continue;
            }

            let fields: Vec<&str> = trimmed.split_whitespace().collect();

            // Background/foreground/nodata footers carry no breakpoints.
            // Before any segment there is nothing they could refer to.
            if matches!(fields[0], "B" | "F" | "N") {
                if raw.is_empty() {
                    return Err(GoesError::ColorTableParse {
                        line: line_no,
                        message: format!("footer line '{}' before any segment", fields[0]),
                    });
                }
                continue;
            }

            if fields.len() != 8 {
                return Err(GoesError::ColorTableParse {
                    line: line_no,
                    message: format!(
                        "expected 8 numeric columns in segment line, got {}",
                        fields.len()
                    ),
                });
            }

            let mut nums = [0.0f64; 8];
            for (i, field) in fields.iter().enumerate() {
                nums[i] = field.parse().map_err(|_| GoesError::ColorTableParse {
                    line: line_no,
                    message: format!("invalid number '{}'", field),
                })?;
            }

            for half in [0, 4] {
                let (x, c0, c1, c2) = (nums[half], nums[half + 1], nums[half + 2], nums[half + 3]);
                // Consecutive segments share an endpoint; keep one copy
                if raw.last() != Some(&(x, c0, c1, c2)) {
                    raw.push((x, c0, c1, c2));
                }
            }
        }

        if raw.len() < 2 {
            return Err(GoesError::ColorTableParse {
                line: 0,
                message: "color table contains no segment lines".to_string(),
            });
        }

        for w in raw.windows(2) {
            if w[1].0 < w[0].0 {
                return Err(GoesError::ColorTableParse {
                    line: 0,
                    message: format!(
                        "breakpoint positions must be ascending ({} after {})",
                        w[1].0, w[0].0
                    ),
                });
            }
        }

        let breakpoints = raw
            .into_iter()
            .map(|(x, c0, c1, c2)| Breakpoint {
                position: x,
                color: match model {
                    ColorModel::Rgb => Rgb::from_u8(
                        c0.clamp(0.0, 255.0).round() as u8,
                        c1.clamp(0.0, 255.0).round() as u8,
                        c2.clamp(0.0, 255.0).round() as u8,
                    ),
                    ColorModel::Hsv => Rgb::from_hsv(c0, c1, c2),
                },
            })
            .collect();

        Ok(Self { breakpoints })
    }

    /// Parse a color table from a `.cpt` file on disk.
    pub fn from_cpt_file(path: impl AsRef<Path>) -> GoesResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_cpt_str(&text)
    }

    /// Ordered breakpoints with positions in the file's native units.
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }
}
