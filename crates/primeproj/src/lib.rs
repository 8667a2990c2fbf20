//! Prime projection search: sweep rotation parameters of polytope vertex
//! sets, project orthographically to 2D, and look for convex-hull silhouettes
//! with a prime number of corners.
//!
//! Pipeline: spread grid → rotation matrix → rotate vertex set → drop to XY →
//! Graham scan → hull count filter → regularity ranking.
//!
//! Angles are parameterized as spreads (sin² of the angle) throughout, so
//! grid values like 1/4 or (2−√2)/4 stay exact until the single sin/cos
//! extraction in the rotation builder.

pub mod api;
pub mod compound;
pub mod hull;
pub mod project;
pub mod rot;
pub mod search;
pub mod shapes;
pub mod spread;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::compound::build_compound;
    pub use crate::hull::{analyze, convex_hull_2d, count_hull_vertices, HullGeometry};
    pub use crate::project::project_to_2d;
    pub use crate::rot::RotationConfig;
    pub use crate::search::{
        search, search_compound, verify, Finding, GridSpec, RationalTier, SearchCfg, SearchError,
        TARGET_PRIMES,
    };
    pub use crate::shapes::{generate, GenCfg, VertexSet};
    pub use nalgebra::{Vector2, Vector3, Vector4};
}
