//! Validated geostationary projection parameters.

use goes_common::{GoesError, GoesResult};

/// Projection parameters for a geostationary imager.
///
/// These are read from the `goes_imager_projection` attributes carried by
/// GOES-R imagery metadata and are immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionParameters {
    /// Semi-major axis of the Earth ellipsoid (meters)
    semi_major_axis: f64,
    /// Semi-minor axis of the Earth ellipsoid (meters)
    semi_minor_axis: f64,
    /// Longitude of the satellite nadir point (degrees, negative west)
    longitude_of_origin: f64,
    /// Satellite altitude above the Earth surface (meters)
    satellite_height: f64,
}

impl ProjectionParameters {
    /// Create validated projection parameters.
    ///
    /// Fails fast with a configuration error on any non-positive geometric
    /// constant or an out-of-range origin longitude; no per-cell work ever
    /// runs against invalid parameters.
    pub fn new(
        semi_major_axis: f64,
        semi_minor_axis: f64,
        longitude_of_origin: f64,
        satellite_height: f64,
    ) -> GoesResult<Self> {
        if !semi_major_axis.is_finite() || semi_major_axis <= 0.0 {
            return Err(GoesError::configuration(
                "semi_major_axis",
                format!("must be positive, got {}", semi_major_axis),
            ));
        }
        if !semi_minor_axis.is_finite() || semi_minor_axis <= 0.0 {
            return Err(GoesError::configuration(
                "semi_minor_axis",
                format!("must be positive, got {}", semi_minor_axis),
            ));
        }
        if semi_minor_axis > semi_major_axis {
            return Err(GoesError::configuration(
                "semi_minor_axis",
                format!(
                    "must not exceed semi_major_axis ({} > {})",
                    semi_minor_axis, semi_major_axis
                ),
            ));
        }
        if !longitude_of_origin.is_finite() || !(-180.0..=180.0).contains(&longitude_of_origin) {
            return Err(GoesError::configuration(
                "longitude_of_origin",
                format!("must be in [-180, 180] degrees, got {}", longitude_of_origin),
            ));
        }
        if !satellite_height.is_finite() || satellite_height <= 0.0 {
            return Err(GoesError::configuration(
                "satellite_height",
                format!("must be positive, got {}", satellite_height),
            ));
        }

        Ok(Self {
            semi_major_axis,
            semi_minor_axis,
            longitude_of_origin,
            satellite_height,
        })
    }

    /// Parameters for GOES-East (GOES-16/19 at 75°W), GRS80 ellipsoid.
    pub fn goes_east() -> Self {
        // Values from the AWS GOES-16 product metadata
        Self::new(6378137.0, 6356752.31414, -75.0, 35786023.0)
            .expect("GOES-East constants are valid")
    }

    /// Parameters for GOES-West (GOES-18 at 137.2°W), GRS80 ellipsoid.
    pub fn goes_west() -> Self {
        Self::new(6378137.0, 6356752.31414, -137.2, 35786023.0)
            .expect("GOES-West constants are valid")
    }

    /// Semi-major (equatorial) axis in meters.
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Semi-minor (polar) axis in meters.
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    /// Longitude of the projection origin in degrees.
    pub fn longitude_of_origin(&self) -> f64 {
        self.longitude_of_origin
    }

    /// Satellite altitude above the Earth surface in meters.
    pub fn satellite_height(&self) -> f64 {
        self.satellite_height
    }

    /// Distance from the Earth center to the satellite (meters).
    pub fn satellite_distance(&self) -> f64 {
        self.semi_major_axis + self.satellite_height
    }

    /// Longitude of the projection origin in radians.
    pub fn lambda_0(&self) -> f64 {
        self.longitude_of_origin.to_radians()
    }
}
