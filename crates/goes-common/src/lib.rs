//! Common types and utilities shared across the goes-toolkit workspace.

pub mod error;

pub use error::{GoesError, GoesResult};
