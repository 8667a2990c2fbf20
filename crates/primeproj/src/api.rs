//! Curated re-export surface for the CLI and integration tests.
//!
//! Prefer these over deep module paths; the module tree may shuffle, this
//! surface stays put.

// Spread algebra
pub use crate::spread::{clamp_spread, quadrance, spread_between, spread_to_sin_cos, SpreadError};
// Rotation builders
pub use crate::rot::{
    rotation_matrix_3d, rotation_matrix_4d, RotationConfig, RotationError,
};
// Polytope registry
pub use crate::shapes::{generate, list_shapes, lookup, GenCfg, ShapeInfo, VertexSet};
// Compounds with a free relative orientation
pub use crate::compound::{build_compound, CompoundError};
// Projection and hull analysis
pub use crate::hull::{analyze, convex_hull_2d, count_hull_vertices, HullGeometry};
pub use crate::project::project_to_2d;
// Search orchestration
pub use crate::search::{
    evaluate, rational_spreads, search, search_compound, verify, Finding, GridSpec, RationalTier,
    SearchCfg, SearchError, TARGET_PRIMES,
};
