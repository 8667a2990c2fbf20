//! Numerical tolerances for hull extraction and polygon classification.

/// Two projected points closer than this on each axis are the same vertex.
pub const MERGE_EPS: f64 = 1e-8;

/// Guard added to denominators before dividing by vector norms or means.
pub const NORM_GUARD: f64 = 1e-10;

/// A hull is equiangular when the angle standard deviation stays below this
/// many degrees.
pub const EQUIANGULAR_MAX_STD_DEG: f64 = 0.5;

/// A hull is equilateral when the edge-length coefficient of variation stays
/// below this percentage.
pub const EQUILATERAL_MAX_CV_PCT: f64 = 1.0;

/// Mean angle deviation (degrees) at which the angle sub-score reaches zero.
pub const ANGLE_DEV_CEILING_DEG: f64 = 10.0;

/// Edge CV (percent) at which the edge sub-score reaches zero.
pub const EDGE_CV_CEILING_PCT: f64 = 10.0;
