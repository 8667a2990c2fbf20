//! Convex hull extraction and polygon regularity metrics.
//!
//! Purpose
//! - Turn a projected 2D point cloud into its boundary polygon and measure
//!   how close that polygon is to a regular n-gon.
//!
//! Why
//! - The search keys on the hull vertex count; the regularity score ranks
//!   configurations that reach the same count.

pub mod cfg;
mod geometry;
mod scan;

pub use geometry::{analyze, HullGeometry};
pub use scan::{convex_hull_2d, count_hull_vertices};
