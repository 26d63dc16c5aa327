//! Imagery catalog access for goes-toolkit.
//!
//! Lists stored GOES-R imagery objects in an S3-compatible bucket, lazily
//! and per-prefix. Decoding the objects themselves is out of scope here.

pub mod object_store;
pub mod paths;

pub use self::object_store::{ImageryStore, ImageryStoreConfig};
pub use paths::ImageryPath;
