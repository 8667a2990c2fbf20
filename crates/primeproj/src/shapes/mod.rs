//! Named polytope generators and the process-wide registry.
//!
//! Purpose
//! - Provide pure generators for the 3D solids, 4D polytopes, and
//!   symmetry-breaking compounds the search sweeps over, each tagged with
//!   its ambient dimension.
//! - Expose them through an immutable name → descriptor registry, built once
//!   and safe to share across workers without synchronization.
//!
//! Conventions
//! - Every generator has the uniform signature `fn(&GenCfg) -> VertexSet`
//!   and returns a fresh vertex set on each call; callers never mutate
//!   shared state.
//! - The 120-cell and 600-cell entries are documented reduced
//!   approximations: symmetry generators plus rounding-based dedup, not the
//!   full vertex enumeration.

mod compound;
mod platonic;
mod poly4;
mod quadray;

pub use compound::truncated_tetrahedron;
pub use quadray::{wxyz_to_cartesian, zero_sum_normalize};

use std::collections::BTreeMap;
use std::sync::OnceLock;

use nalgebra::{Vector3, Vector4};

/// An ordered vertex set in its ambient dimension.
#[derive(Clone, Debug)]
pub enum VertexSet {
    Dim3(Vec<Vector3<f64>>),
    Dim4(Vec<Vector4<f64>>),
}

impl VertexSet {
    /// Ambient dimension (3 or 4).
    pub fn dim(&self) -> usize {
        match self {
            Self::Dim3(_) => 3,
            Self::Dim4(_) => 4,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        match self {
            Self::Dim3(v) => v.len(),
            Self::Dim4(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest vertex norm (circumradius of the set).
    pub fn max_radius(&self) -> f64 {
        match self {
            Self::Dim3(v) => v.iter().map(|p| p.norm()).fold(0.0, f64::max),
            Self::Dim4(v) => v.iter().map(|p| p.norm()).fold(0.0, f64::max),
        }
    }
}

/// Uniform generator configuration with documented defaults.
///
/// - `scale`: circumradius / half-size factor (default 1.0).
/// - `truncation`: edge-truncation parameter t ∈ [0, 0.5] for the truncated
///   tetrahedron family (default 1/3, the Archimedean solid).
/// - `truncation_dual`: independent truncation of the dual half in
///   `variable_stella` (default 0.0, the untruncated dual tetrahedron).
#[derive(Clone, Copy, Debug)]
pub struct GenCfg {
    pub scale: f64,
    pub truncation: f64,
    pub truncation_dual: f64,
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            scale: 1.0,
            truncation: 1.0 / 3.0,
            truncation_dual: 0.0,
        }
    }
}

/// A registered polytope: unique name, ambient dimension, pure generator.
#[derive(Clone, Copy)]
pub struct Descriptor {
    pub name: &'static str,
    pub dim: usize,
    pub gen: fn(&GenCfg) -> VertexSet,
}

/// Summary row for `list_shapes`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ShapeInfo {
    pub name: &'static str,
    pub dim: usize,
    pub vertex_count: usize,
}

fn entry(name: &'static str, dim: usize, gen: fn(&GenCfg) -> VertexSet) -> (&'static str, Descriptor) {
    (name, Descriptor { name, dim, gen })
}

/// The process-wide registry, built on first use and never mutated.
pub fn registry() -> &'static BTreeMap<&'static str, Descriptor> {
    static REG: OnceLock<BTreeMap<&'static str, Descriptor>> = OnceLock::new();
    REG.get_or_init(|| {
        BTreeMap::from([
            // 3D regular and Archimedean/Catalan solids.
            entry("tetrahedron", 3, platonic::tetrahedron),
            entry("dual_tetrahedron", 3, platonic::dual_tetrahedron),
            entry("cube", 3, platonic::cube),
            entry("octahedron", 3, platonic::octahedron),
            entry("icosahedron", 3, platonic::icosahedron),
            entry("dodecahedron", 3, platonic::dodecahedron),
            entry("cuboctahedron", 3, platonic::cuboctahedron),
            entry("vector_equilibrium", 3, platonic::cuboctahedron),
            entry("rhombic_dodecahedron", 3, platonic::rhombic_dodecahedron),
            // 4D polytopes.
            entry("tesseract", 4, poly4::tesseract),
            entry("cell16", 4, poly4::cell16),
            entry("cell24", 4, poly4::cell24),
            entry("cell120", 4, poly4::cell120),
            entry("cell600", 4, poly4::cell600),
            // Symmetry-breaking compounds.
            entry("stella_octangula", 3, compound::stella_octangula),
            entry("compound_5_tet", 3, compound::five_tetrahedra),
            entry("compound_cube_octa", 3, compound::cube_octahedron),
            entry("compound_icosa_dodeca", 3, compound::icosa_dodecahedron),
            entry("truncated_tetrahedron", 3, compound::truncated_tetrahedron_entry),
            entry("snub_cube", 3, compound::snub_cube),
            entry("trunctet_tet", 3, compound::trunctet_tet),
            entry("trunctet_icosa", 3, compound::trunctet_icosa),
            entry("trunctet_dual_tet", 3, compound::trunctet_dual_tet),
            entry("variable_stella", 3, compound::variable_stella),
        ])
    })
}

/// Look up a descriptor by name.
pub fn lookup(name: &str) -> Option<&'static Descriptor> {
    registry().get(name)
}

/// Generate a named vertex set, or `None` for an unknown name.
pub fn generate(name: &str, cfg: &GenCfg) -> Option<VertexSet> {
    lookup(name).map(|d| (d.gen)(cfg))
}

/// Names, dimensions and vertex counts of every registered polytope.
pub fn list_shapes() -> Vec<ShapeInfo> {
    let cfg = GenCfg::default();
    registry()
        .values()
        .map(|d| ShapeInfo {
            name: d.name,
            dim: d.dim,
            vertex_count: (d.gen)(&cfg).len(),
        })
        .collect()
}

/// Coordinate-rounding digits for generator dedup; exact float equality is
/// unreliable after symmetry expansion.
pub const DEDUP_DIGITS: i32 = 10;

fn round_digits(x: f64, digits: i32) -> f64 {
    let f = 10f64.powi(digits);
    (x * f).round() / f
}

/// Dedup 3D vertices by rounding each coordinate to [`DEDUP_DIGITS`].
pub(crate) fn dedup_rounded3(verts: Vec<Vector3<f64>>) -> Vec<Vector3<f64>> {
    let mut rounded: Vec<Vector3<f64>> = verts
        .into_iter()
        .map(|v| v.map(|x| round_digits(x, DEDUP_DIGITS)))
        .collect();
    rounded.sort_by(|a, b| {
        a.iter()
            .zip(b.iter())
            .find_map(|(x, y)| x.partial_cmp(y).filter(|o| o.is_ne()))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rounded.dedup();
    rounded
}

/// Dedup 4D vertices by rounding each coordinate to [`DEDUP_DIGITS`].
pub(crate) fn dedup_rounded4(verts: Vec<Vector4<f64>>) -> Vec<Vector4<f64>> {
    let mut rounded: Vec<Vector4<f64>> = verts
        .into_iter()
        .map(|v| v.map(|x| round_digits(x, DEDUP_DIGITS)))
        .collect();
    rounded.sort_by(|a, b| {
        a.iter()
            .zip(b.iter())
            .find_map(|(x, y)| x.partial_cmp(y).filter(|o| o.is_ne()))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rounded.dedup();
    rounded
}
