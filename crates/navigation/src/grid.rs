//! Geodetic output grid with NaN-marked undefined cells.

/// Co-registered latitude/longitude planes produced by reprojection.
///
/// Both planes are row-major with shape `(ny, nx)` matching the scan-angle
/// outer product. Cells where the viewing ray misses the Earth ellipsoid
/// hold NaN in both planes.
#[derive(Debug, Clone)]
pub struct GeodeticGrid {
    lat: Vec<f64>,
    lon: Vec<f64>,
    nx: usize,
    ny: usize,
}

impl GeodeticGrid {
    /// Create a grid with every cell undefined.
    pub(crate) fn undefined(ny: usize, nx: usize) -> Self {
        Self {
            lat: vec![f64::NAN; nx * ny],
            lon: vec![f64::NAN; nx * ny],
            nx,
            ny,
        }
    }

    /// Grid shape as `(ny, nx)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.ny, self.nx)
    }

    /// Latitude in degrees at `(row, col)`, NaN if undefined.
    #[inline]
    pub fn lat(&self, row: usize, col: usize) -> f64 {
        self.lat[row * self.nx + col]
    }

    /// Longitude in degrees at `(row, col)`, NaN if undefined.
    #[inline]
    pub fn lon(&self, row: usize, col: usize) -> f64 {
        self.lon[row * self.nx + col]
    }

    /// Whether the cell at `(row, col)` maps onto the Earth ellipsoid.
    #[inline]
    pub fn is_defined(&self, row: usize, col: usize) -> bool {
        !self.lat(row, col).is_nan()
    }

    /// Number of cells that map onto the Earth ellipsoid.
    pub fn defined_count(&self) -> usize {
        self.lat.iter().filter(|v| !v.is_nan()).count()
    }

    /// Full latitude plane, row-major.
    pub fn lat_plane(&self) -> &[f64] {
        &self.lat
    }

    /// Full longitude plane, row-major.
    pub fn lon_plane(&self) -> &[f64] {
        &self.lon
    }

    /// Geographic bounding box over the defined cells.
    ///
    /// Returns `(min_lon, min_lat, max_lon, max_lat)` in degrees, or None
    /// when every cell is off-Earth.
    ///
    /// Longitudes are in [-180, 180], so a disk straddling the
    /// antimeridian (e.g. GOES-West's) reports a longitude span of nearly
    /// (-180, 180) even though the coverage is contiguous.
    pub fn geographic_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lon = f64::MAX;
        let mut max_lon = f64::MIN;
        let mut any = false;

        for (lat, lon) in self.lat.iter().zip(self.lon.iter()) {
            if lat.is_nan() {
                continue;
            }
            any = true;
            min_lat = min_lat.min(*lat);
            max_lat = max_lat.max(*lat);
            min_lon = min_lon.min(*lon);
            max_lon = max_lon.max(*lon);
        }

        any.then_some((min_lon, min_lat, max_lon, max_lat))
    }

    /// Mutable views of the two planes for row-parallel fills.
    pub(crate) fn planes_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.lat, &mut self.lon)
    }
}
