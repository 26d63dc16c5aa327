//! Scan-angle axes defining the fixed-grid sampling.

use goes_common::{GoesError, GoesResult};

/// The two 1-D scan-angle axes of a fixed-grid image, in radians.
///
/// `x` is the east-west scan angle and `y` the north-south scan angle.
/// Both must be strictly monotonic; no uniform spacing is assumed. The full
/// sampling grid is the outer product of the two axes, shape `(ny, nx)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanAngleAxes {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl ScanAngleAxes {
    /// Create axes from explicit coordinate vectors.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> GoesResult<Self> {
        check_axis("x", &x)?;
        check_axis("y", &y)?;
        Ok(Self { x, y })
    }

    /// Create regularly spaced axes from origin, step, and count.
    ///
    /// This matches how GOES fixed-grid coordinates are usually carried:
    /// a corner coordinate plus a per-pixel increment (negative `dy` for
    /// north-to-south scan order).
    pub fn regular(
        x_origin: f64,
        dx: f64,
        nx: usize,
        y_origin: f64,
        dy: f64,
        ny: usize,
    ) -> GoesResult<Self> {
        if dx == 0.0 || !dx.is_finite() {
            return Err(GoesError::InvalidAxis(format!(
                "x step must be non-zero and finite, got {}",
                dx
            )));
        }
        if dy == 0.0 || !dy.is_finite() {
            return Err(GoesError::InvalidAxis(format!(
                "y step must be non-zero and finite, got {}",
                dy
            )));
        }
        let x = (0..nx).map(|i| x_origin + i as f64 * dx).collect();
        let y = (0..ny).map(|j| y_origin + j as f64 * dy).collect();
        Self::new(x, y)
    }

    /// East-west scan angles (radians).
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// North-south scan angles (radians).
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of columns in the expanded grid.
    pub fn nx(&self) -> usize {
        self.x.len()
    }

    /// Number of rows in the expanded grid.
    pub fn ny(&self) -> usize {
        self.y.len()
    }
}

fn check_axis(name: &str, values: &[f64]) -> GoesResult<()> {
    if values.is_empty() {
        return Err(GoesError::InvalidAxis(format!("{} axis is empty", name)));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(GoesError::InvalidAxis(format!(
            "{} axis contains a non-finite value",
            name
        )));
    }
    if values.len() > 1 {
        let increasing = values[1] > values[0];
        for w in values.windows(2) {
            let ok = if increasing { w[1] > w[0] } else { w[1] < w[0] };
            if !ok {
                return Err(GoesError::InvalidAxis(format!(
                    "{} axis is not strictly monotonic",
                    name
                )));
            }
        }
    }
    Ok(())
}
