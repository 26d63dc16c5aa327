//! Grid-level tests for the geostationary navigation transform.

use navigation::{reproject, ProjectionParameters, ScanAngleAxes};
use test_utils::full_disk_axes;

#[test]
fn test_output_shape_matches_outer_product() {
    let params = ProjectionParameters::goes_east();
    let axes = ScanAngleAxes::regular(-0.01, 0.005, 7, 0.01, -0.005, 4).unwrap();

    let grid = reproject(&params, &axes).unwrap();
    assert_eq!(grid.shape(), (4, 7));
}

#[test]
fn test_subsatellite_cell() {
    // The reference scenario: GRS80 radii, GOES-East at -75 degrees.
    let params =
        ProjectionParameters::new(6378137.0, 6356752.31414, -75.0, 35786023.0).unwrap();
    let axes = ScanAngleAxes::new(vec![-0.01, 0.0, 0.01], vec![0.01, 0.0, -0.01]).unwrap();

    let grid = reproject(&params, &axes).unwrap();

    // Center cell is the nadir scan angle (0, 0)
    assert!(grid.lat(1, 1).abs() < 1e-6, "lat {}", grid.lat(1, 1));
    assert!(
        (grid.lon(1, 1) - (-75.0)).abs() < 1e-6,
        "lon {}",
        grid.lon(1, 1)
    );
}

#[test]
fn test_full_disk_corners_are_undefined() {
    let params = ProjectionParameters::goes_east();
    let (x, y) = full_disk_axes(21, 17);
    let axes = ScanAngleAxes::new(x, y).unwrap();

    let grid = reproject(&params, &axes).unwrap();
    let (ny, nx) = grid.shape();

    // Corners aim past the limb; the disk center is on Earth
    for (row, col) in [(0, 0), (0, nx - 1), (ny - 1, 0), (ny - 1, nx - 1)] {
        assert!(!grid.is_defined(row, col), "corner ({}, {})", row, col);
        assert!(grid.lat(row, col).is_nan());
        assert!(grid.lon(row, col).is_nan());
    }
    assert!(grid.is_defined(ny / 2, nx / 2));

    let defined = grid.defined_count();
    assert!(defined > 0 && defined < nx * ny);
}

#[test]
fn test_undefined_cells_are_paired() {
    let params = ProjectionParameters::goes_east();
    let (x, y) = full_disk_axes(15, 15);
    let axes = ScanAngleAxes::new(x, y).unwrap();

    let grid = reproject(&params, &axes).unwrap();
    let (ny, nx) = grid.shape();

    // A geometric miss leaves a hole in both planes, never just one
    for row in 0..ny {
        for col in 0..nx {
            assert_eq!(grid.lat(row, col).is_nan(), grid.lon(row, col).is_nan());
        }
    }
}

#[test]
fn test_far_off_disk_pair_is_a_miss() {
    let params = ProjectionParameters::goes_east();
    let axes = ScanAngleAxes::new(vec![0.3], vec![0.3]).unwrap();

    let grid = reproject(&params, &axes).unwrap();
    assert_eq!(grid.shape(), (1, 1));
    assert!(!grid.is_defined(0, 0));
}

#[test]
fn test_geographic_bounds_cover_the_disk() {
    let params = ProjectionParameters::goes_east();
    let (x, y) = full_disk_axes(41, 41);
    let axes = ScanAngleAxes::new(x, y).unwrap();

    let grid = reproject(&params, &axes).unwrap();
    let (min_lon, min_lat, max_lon, max_lat) = grid.geographic_bounds().unwrap();

    // GOES-East sees most of a hemisphere centered on -75
    assert!(min_lat < -60.0 && max_lat > 60.0, "lat {}..{}", min_lat, max_lat);
    assert!(min_lon < -130.0 && max_lon > -20.0, "lon {}..{}", min_lon, max_lon);
}

#[test]
fn test_rejects_bad_parameters_before_work() {
    let err = ProjectionParameters::new(-6378137.0, 6356752.31414, -75.0, 35786023.0);
    assert!(err.is_err());
}
