//! Geostationary satellite navigation.
//!
//! Converts GOES-R fixed-grid scan angles (radians) to WGS-84 geographic
//! coordinates and back.

pub mod axes;
pub mod grid;
pub mod parameters;
pub mod projector;

pub use axes::ScanAngleAxes;
pub use grid::GeodeticGrid;
pub use parameters::ProjectionParameters;
pub use projector::{geo_to_scan, reproject, scan_to_geo};
