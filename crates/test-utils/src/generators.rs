//! Test data generators for synthetic satellite fixed-grid inputs.
//!
//! These generators create predictable data that can be verified across the
//! test suite without shipping real imagery.

/// Half-width of the GOES full-disk scan-angle extent, in radians.
///
/// Scan angles beyond roughly ±0.1518 rad point past the Earth's limb, so
/// an axis spanning `±FULL_DISK_HALF_ANGLE * 1.0+` produces off-Earth
/// corner cells the way a real full-disk product does.
pub const FULL_DISK_HALF_ANGLE: f64 = 0.151844;

/// Create a regularly spaced axis of `n` values starting at `origin`.
///
/// # Example
///
/// ```
/// use test_utils::regular_axis;
///
/// let axis = regular_axis(-0.1, 0.05, 5);
/// assert_eq!(axis.len(), 5);
/// assert!((axis[4] - 0.1).abs() < 1e-12);
/// ```
pub fn regular_axis(origin: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| origin + i as f64 * step).collect()
}

/// Create full-disk scan-angle axes of size `nx` x `ny`.
///
/// The x axis runs west to east, the y axis north to south, both spanning
/// slightly past the visible disk so the grid corners are off-Earth.
pub fn full_disk_axes(nx: usize, ny: usize) -> (Vec<f64>, Vec<f64>) {
    assert!(nx >= 2 && ny >= 2, "axes need at least 2 samples");
    let half = FULL_DISK_HALF_ANGLE * 1.05;
    let dx = 2.0 * half / (nx - 1) as f64;
    let dy = 2.0 * half / (ny - 1) as f64;
    let x = regular_axis(-half, dx, nx);
    let y = regular_axis(half, -dy, ny);
    (x, y)
}

/// A small well-formed RGB `.cpt` document with three segments.
///
/// Positions run 0..30 and must be normalized to [0, 1] by the parser.
pub fn sample_cpt_rgb() -> &'static str {
    "\
# Synthetic RGB color table
#   COLOR_MODEL = RGB
0    0   0 255   10   0 255 255
10   0 255 255   20   0 255   0
20   0 255   0   30 255   0   0
B 0 0 0
F 255 255 255
N 128 128 128
"
}

/// A `.cpt` document declaring the HSV color model.
///
/// Hues are in degrees; saturations and values in [0, 1].
pub fn sample_cpt_hsv() -> &'static str {
    "\
# Synthetic HSV color table  HSV
0   240 1 1   50   120 1 1
50  120 1 1   100    0 1 1
"
}
