//! Geostationary navigation transform.
//!
//! Maps fixed-grid scan angles to WGS-84 latitude/longitude by intersecting
//! the satellite line of sight with the oblate Earth ellipsoid.
//!
//! Reference: GOES-R Product Definition and Users' Guide (PUG) Volume 4,
//! Section 4.2.8.

use rayon::prelude::*;
use tracing::debug;

use goes_common::GoesResult;

use crate::axes::ScanAngleAxes;
use crate::grid::GeodeticGrid;
use crate::parameters::ProjectionParameters;

/// Convert a single scan-angle pair (radians) to geographic coordinates.
///
/// Returns `(lat_deg, lon_deg)`, or None when the viewing ray does not
/// intersect the Earth ellipsoid (the scan angle points past the limb).
pub fn scan_to_geo(params: &ProjectionParameters, x_rad: f64, y_rad: f64) -> Option<(f64, f64)> {
    let req = params.semi_major_axis();
    let rpol = params.semi_minor_axis();
    let h = params.satellite_distance();

    let sin_x = x_rad.sin();
    let cos_x = x_rad.cos();
    let sin_y = y_rad.sin();
    let cos_y = y_rad.cos();

    // Quadratic coefficients for the slant range along the viewing ray
    let a = sin_x.powi(2)
        + cos_x.powi(2) * (cos_y.powi(2) + (req / rpol).powi(2) * sin_y.powi(2));
    let b = -2.0 * h * cos_x * cos_y;
    let c = h.powi(2) - req.powi(2);

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None; // Scan angle points to space
    }

    // Near root: the first intersection along the ray
    let rs = (-b - discriminant.sqrt()) / (2.0 * a);

    // Intersection point in the satellite-centered, Earth-fixed frame
    let sx = rs * cos_x * cos_y;
    let sy = -rs * sin_x;
    let sz = rs * cos_x * sin_y;

    // Geodetic conversion
    let lat = ((req / rpol).powi(2) * sz / (h - sx).hypot(sy)).atan();
    let lon = params.lambda_0() - sy.atan2(h - sx);

    if !lat.is_finite() || !lon.is_finite() {
        return None; // Degenerate limb geometry
    }

    Some((lat.to_degrees(), wrap_longitude(lon.to_degrees())))
}

/// Convert geographic coordinates (degrees) to scan angles (radians).
///
/// Returns None if the point is not visible from the satellite.
pub fn geo_to_scan(params: &ProjectionParameters, lat_deg: f64, lon_deg: f64) -> Option<(f64, f64)> {
    let req = params.semi_major_axis();
    let rpol = params.semi_minor_axis();
    let h = params.satellite_distance();

    let lat_rad = lat_deg.to_radians();
    let lon_rad = lon_deg.to_radians();

    // Horizon check: the limb sits at acos(Re / H) from nadir
    let dlon = lon_rad - params.lambda_0();
    let cos_c = lat_rad.cos() * dlon.cos();
    let horizon_angle = (req / h).acos();
    if cos_c.acos() > horizon_angle {
        return None;
    }

    // Geocentric latitude on the oblate ellipsoid
    let phi_c = ((rpol / req).powi(2) * lat_rad.tan()).atan();
    let e2 = 1.0 - (rpol / req).powi(2);
    let rc = rpol / (1.0 - e2 * phi_c.cos().powi(2)).sqrt();

    let sx = h - rc * phi_c.cos() * dlon.cos();
    let sy = -rc * phi_c.cos() * dlon.sin();
    let sz = rc * phi_c.sin();

    if sx <= 0.0 {
        return None; // Behind the Earth from the satellite's perspective
    }

    let y_rad = sz.atan2(sx.hypot(sy));
    let x_rad = (-sy).atan2(sx);

    Some((x_rad, y_rad))
}

/// Reproject a full scan-angle grid to geodetic coordinates.
///
/// Expands the two axes by outer product and applies [`scan_to_geo`] per
/// cell. Off-Earth cells become NaN in both output planes; they never fail
/// the call, since full-disk imagery routinely carries thousands of
/// off-disk corner cells. Rows are evaluated in parallel; the result is
/// identical in any execution order.
pub fn reproject(
    params: &ProjectionParameters,
    axes: &ScanAngleAxes,
) -> GoesResult<GeodeticGrid> {
    let nx = axes.nx();
    let ny = axes.ny();
    let mut grid = GeodeticGrid::undefined(ny, nx);

    {
        let (lat_plane, lon_plane) = grid.planes_mut();
        lat_plane
            .par_chunks_mut(nx)
            .zip(lon_plane.par_chunks_mut(nx))
            .zip(axes.y().par_iter())
            .for_each(|((lat_row, lon_row), &y_rad)| {
                for (col, &x_rad) in axes.x().iter().enumerate() {
                    if let Some((lat, lon)) = scan_to_geo(params, x_rad, y_rad) {
                        lat_row[col] = lat;
                        lon_row[col] = lon;
                    }
                }
            });
    }

    debug!(
        ny,
        nx,
        defined = grid.defined_count(),
        "reprojected scan-angle grid"
    );

    Ok(grid)
}

fn wrap_longitude(lon_deg: f64) -> f64 {
    if lon_deg > 180.0 {
        lon_deg - 360.0
    } else if lon_deg < -180.0 {
        lon_deg + 360.0
    } else {
        lon_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nadir_maps_to_subsatellite_point() {
        let params = ProjectionParameters::goes_east();

        let (lat, lon) = scan_to_geo(&params, 0.0, 0.0).expect("nadir must be on Earth");
        assert!(lat.abs() < 1e-6, "nadir latitude should be ~0, got {}", lat);
        assert!(
            (lon - (-75.0)).abs() < 1e-6,
            "nadir longitude should be -75, got {}",
            lon
        );
    }

    #[test]
    fn test_off_earth_scan_angle_is_none() {
        let params = ProjectionParameters::goes_east();

        // ~17 degrees off nadir, far past the Earth's limb
        assert!(scan_to_geo(&params, 0.3, 0.3).is_none());
        assert!(scan_to_geo(&params, 0.0, 0.5).is_none());
    }

    #[test]
    fn test_north_south_symmetry_spherical() {
        // Spherical Earth so latitude is exactly odd in the y scan angle
        let params = ProjectionParameters::new(6378137.0, 6378137.0, -75.0, 35786023.0).unwrap();

        let (lat_n, lon_n) = scan_to_geo(&params, 0.01, 0.05).unwrap();
        let (lat_s, lon_s) = scan_to_geo(&params, 0.01, -0.05).unwrap();

        assert!(
            (lat_n + lat_s).abs() < 1e-9,
            "latitudes should negate: {} vs {}",
            lat_n,
            lat_s
        );
        assert!((lon_n - lon_s).abs() < 1e-9);
    }

    #[test]
    fn test_goes_west_limb_wraps_longitude() {
        // The raw closed form yields lon below -180 at GOES-West's western
        // limb; the result must come back wrapped into [-180, 180]
        let params = ProjectionParameters::goes_west();

        let (lat, lon) = scan_to_geo(&params, -0.14, 0.0).expect("on Earth");
        assert!(lat.abs() < 1e-9, "equatorial scan, got lat {}", lat);
        assert!(
            (-180.0..=180.0).contains(&lon),
            "longitude must be wrapped, got {}",
            lon
        );
        assert!(
            (150.0..180.0).contains(&lon),
            "western limb lies east of the antimeridian, got {}",
            lon
        );
    }

    #[test]
    fn test_scan_geo_roundtrip() {
        let params = ProjectionParameters::goes_east();

        let (x, y) = (-0.05, 0.08); // Roughly over the central US
        let (lat, lon) = scan_to_geo(&params, x, y).expect("on Earth");
        let (x2, y2) = geo_to_scan(&params, lat, lon).expect("visible");

        assert!((x - x2).abs() < 1e-9, "x roundtrip: {} vs {}", x, x2);
        assert!((y - y2).abs() < 1e-9, "y roundtrip: {} vs {}", y, y2);
    }

    #[test]
    fn test_antipode_not_visible() {
        let params = ProjectionParameters::goes_east();

        // Opposite side of the Earth from GOES-East
        assert!(geo_to_scan(&params, 0.0, 105.0).is_none());
    }

    #[test]
    fn test_determinism() {
        let params = ProjectionParameters::goes_east();
        let axes = ScanAngleAxes::regular(-0.1, 0.004, 50, 0.1, -0.004, 50).unwrap();

        let a = reproject(&params, &axes).unwrap();
        let b = reproject(&params, &axes).unwrap();

        // Bit-identical including NaN placement
        for row in 0..50 {
            for col in 0..50 {
                assert_eq!(a.lat(row, col).to_bits(), b.lat(row, col).to_bits());
                assert_eq!(a.lon(row, col).to_bits(), b.lon(row, col).to_bits());
            }
        }
    }
}
