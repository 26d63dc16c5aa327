//! Shared test utilities for the goes-toolkit workspace.
//!
//! Provides deterministic generators for scan-angle axes and synthetic
//! color-table documents used across the test suites.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod generators;

pub use generators::*;
