//! Shared test utilities for the co2-atlas workspace.
//!
//! This crate provides common testing infrastructure:
//! - Synthetic emission grid generators with known sums
//! - Simple rectangular/compound state boundaries
//! - On-disk GeoTIFF and GeoJSON fixture writers
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
