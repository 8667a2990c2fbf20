//! Symmetry-breaking solids and fixed compounds.
//!
//! Central inversion symmetry forces even hull counts, so the search leans
//! on vertex sets without it: the truncated tetrahedron and snub cube, and
//! compounds pairing components whose rotational symmetries are
//! incommensurate (3-fold against 5-fold).

use nalgebra::{vector, Matrix3, Vector3};

use super::platonic;
use super::quadray;
use super::{dedup_rounded3, GenCfg, VertexSet};
use crate::spread::cubics::tribonacci;
use crate::spread::phi::phi;

/// Base tetrahedron inscribed in the cube of half-size `s`, odd-parity
/// corners. The truncation family interpolates along its six edges.
fn trunctet_base(s: f64) -> [Vector3<f64>; 4] {
    [
        vector![-s, -s, -s],
        vector![s, s, -s],
        vector![s, -s, s],
        vector![-s, s, s],
    ]
}

const TRUNCTET_EDGES: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Parametric truncated tetrahedron, t clamped to [0, 0.5].
///
/// - t ≈ 0: the base tetrahedron (4 vertices).
/// - t ≈ 0.5: the octahedron of edge midpoints (6 vertices).
/// - otherwise: two cut points per edge (12 vertices).
pub fn truncated_tetrahedron(half_size: f64, truncation: f64) -> Vec<Vector3<f64>> {
    let t = truncation.clamp(0.0, 0.5);
    let base = trunctet_base(half_size);

    if t < 0.001 {
        return base.to_vec();
    }
    if t > 0.499 {
        return TRUNCTET_EDGES
            .iter()
            .map(|&(i, j)| (base[i] + base[j]) / 2.0)
            .collect();
    }

    let mut verts = Vec::with_capacity(12);
    for &(i, j) in &TRUNCTET_EDGES {
        verts.push(base[i] + t * (base[j] - base[i]));
        verts.push(base[j] + t * (base[i] - base[j]));
    }
    verts
}

/// The point reflection of [`truncated_tetrahedron`].
pub fn truncated_dual_tetrahedron(half_size: f64, truncation: f64) -> Vec<Vector3<f64>> {
    truncated_tetrahedron(half_size, truncation)
        .into_iter()
        .map(|v| -v)
        .collect()
}

fn unit_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    let mag = v.norm();
    if mag == 0.0 {
        Vector3::zeros()
    } else {
        v / mag
    }
}

fn scaled_to_unit_circumradius(verts: Vec<Vector3<f64>>, scale: f64) -> VertexSet {
    let max = verts.iter().map(|v| v.norm()).fold(0.0, f64::max);
    VertexSet::Dim3(verts.into_iter().map(|v| v * (scale / max)).collect())
}

fn concat3(a: VertexSet, b: VertexSet) -> VertexSet {
    let (VertexSet::Dim3(mut va), VertexSet::Dim3(vb)) = (a, b) else {
        unreachable!()
    };
    va.extend(vb);
    VertexSet::Dim3(va)
}

/// Two dual tetrahedra: eight cube corners, but without the cube's vertex
/// orbit structure.
pub fn stella_octangula(cfg: &GenCfg) -> VertexSet {
    concat3(platonic::tetrahedron(cfg), platonic::dual_tetrahedron(cfg))
}

/// Five tetrahedra at 72° increments about the icosahedral axis (1, φ, 0),
/// built with the Rodrigues rotation formula. Chiral, 20 vertices.
pub fn five_tetrahedra(cfg: &GenCfg) -> VertexSet {
    let VertexSet::Dim3(base) = platonic::tetrahedron(cfg) else {
        unreachable!()
    };
    let axis = unit_or_zero(vector![1.0, phi(), 0.0]);
    let k = Matrix3::new(
        0.0, -axis.z, axis.y,
        axis.z, 0.0, -axis.x,
        -axis.y, axis.x, 0.0,
    );

    let mut verts = Vec::with_capacity(20);
    for step in 0..5 {
        let angle = step as f64 * 2.0 * std::f64::consts::PI / 5.0;
        let r = Matrix3::identity() + angle.sin() * k + (1.0 - angle.cos()) * (k * k);
        verts.extend(base.iter().map(|v| r * v));
    }
    VertexSet::Dim3(verts)
}

/// Cube and octahedron dual pair on a common circumsphere, 14 vertices.
pub fn cube_octahedron(cfg: &GenCfg) -> VertexSet {
    concat3(platonic::cube(cfg), platonic::octahedron(cfg))
}

/// Icosahedron and dodecahedron dual pair, 32 vertices.
pub fn icosa_dodecahedron(cfg: &GenCfg) -> VertexSet {
    concat3(platonic::icosahedron(cfg), platonic::dodecahedron(cfg))
}

/// Registry entry for the truncation family: parametric cut at
/// `cfg.truncation`, normalized to unit circumradius.
pub fn truncated_tetrahedron_entry(cfg: &GenCfg) -> VertexSet {
    scaled_to_unit_circumradius(truncated_tetrahedron(1.0, cfg.truncation), cfg.scale)
}

/// Snub cube vertex field: all sign combinations of the cyclic permutations
/// of (1, ξ, 1/ξ) with ξ the tribonacci constant, normalized to unit
/// circumradius. 24 vertices covering both enantiomorphs' positions.
pub fn snub_cube(cfg: &GenCfg) -> VertexSet {
    let xi = tribonacci();
    let bases = [
        [1.0, xi, 1.0 / xi],
        [xi, 1.0 / xi, 1.0],
        [1.0 / xi, 1.0, xi],
    ];
    let mut verts = Vec::with_capacity(24);
    for b in &bases {
        for &s1 in &[-1.0, 1.0] {
            for &s2 in &[-1.0, 1.0] {
                for &s3 in &[-1.0, 1.0] {
                    verts.push(vector![s1 * b[0], s2 * b[1], s3 * b[2]]);
                }
            }
        }
    }
    scaled_to_unit_circumradius(dedup_rounded3(verts), cfg.scale)
}

/// Quadray truncated tetrahedron plus the same-parity tetrahedron, both at
/// unit circumradius. 16 vertices, the 7-gon and 11-gon workhorse.
pub fn trunctet_tet(cfg: &GenCfg) -> VertexSet {
    let mut verts = quadray::trunctet_cartesian();
    let VertexSet::Dim3(tet) = platonic::tetrahedron(&GenCfg::default()) else {
        unreachable!()
    };
    verts.extend(tet);
    VertexSet::Dim3(verts.into_iter().map(|v| v * cfg.scale).collect())
}

/// Quadray truncated tetrahedron plus the icosahedron, both at unit
/// circumradius. 24 vertices; 3-fold against 5-fold symmetry for 13-gons.
pub fn trunctet_icosa(cfg: &GenCfg) -> VertexSet {
    let mut verts = quadray::trunctet_cartesian();
    let VertexSet::Dim3(icosa) = platonic::icosahedron(&GenCfg::default()) else {
        unreachable!()
    };
    verts.extend(icosa);
    VertexSet::Dim3(verts.into_iter().map(|v| v * cfg.scale).collect())
}

/// Truncated tetrahedron plus the dual tetrahedron with every vertex pushed
/// to the unit sphere. The dual parity breaks the shared mirror planes,
/// which keeps 7-gon hulls stable at any scale.
pub fn trunctet_dual_tet(cfg: &GenCfg) -> VertexSet {
    let mut verts: Vec<Vector3<f64>> = truncated_tetrahedron(3.0, 1.0 / 3.0)
        .into_iter()
        .map(unit_or_zero)
        .collect();
    let VertexSet::Dim3(dual) = platonic::dual_tetrahedron(&GenCfg::default()) else {
        unreachable!()
    };
    verts.extend(dual.into_iter().map(unit_or_zero));
    VertexSet::Dim3(verts.into_iter().map(|v| v * cfg.scale).collect())
}

/// Variable stella octangula: base and dual tetrahedra truncated
/// independently by `cfg.truncation` and `cfg.truncation_dual`, all vertices
/// on the unit sphere. Vertex count runs from 8 (no truncation) to 24.
pub fn variable_stella(cfg: &GenCfg) -> VertexSet {
    let mut verts: Vec<Vector3<f64>> = truncated_tetrahedron(3.0, cfg.truncation)
        .into_iter()
        .map(unit_or_zero)
        .collect();
    verts.extend(
        truncated_dual_tetrahedron(3.0, cfg.truncation_dual)
            .into_iter()
            .map(unit_or_zero),
    );
    VertexSet::Dim3(verts.into_iter().map(|v| v * cfg.scale).collect())
}
