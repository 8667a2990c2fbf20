//! The five regular solids plus cuboctahedron and rhombic dodecahedron.
//!
//! All generators emit vertices at unit circumradius times `cfg.scale`, so
//! cross-polytope compounds can be put on a common circumsphere by scale
//! alone. Hull vertex counts and regularity are scale invariant.

use nalgebra::{vector, Vector3};

use super::{GenCfg, VertexSet};
use crate::spread::phi::{inv_phi, one_plus_phi_squared, phi};
use crate::spread::radicals::{sqrt2, sqrt3};

/// Regular tetrahedron inscribed in the cube, unit circumradius.
pub fn tetrahedron(cfg: &GenCfg) -> VertexSet {
    let k = cfg.scale / sqrt3();
    VertexSet::Dim3(vec![
        vector![k, k, k],
        vector![k, -k, -k],
        vector![-k, k, -k],
        vector![-k, -k, k],
    ])
}

/// The point reflection of [`tetrahedron`] through the origin.
pub fn dual_tetrahedron(cfg: &GenCfg) -> VertexSet {
    let VertexSet::Dim3(verts) = tetrahedron(cfg) else {
        unreachable!()
    };
    VertexSet::Dim3(verts.into_iter().map(|v| -v).collect())
}

pub fn cube(cfg: &GenCfg) -> VertexSet {
    let k = cfg.scale / sqrt3();
    let mut verts = Vec::with_capacity(8);
    for &x in &[-k, k] {
        for &y in &[-k, k] {
            for &z in &[-k, k] {
                verts.push(vector![x, y, z]);
            }
        }
    }
    VertexSet::Dim3(verts)
}

pub fn octahedron(cfg: &GenCfg) -> VertexSet {
    let k = cfg.scale;
    VertexSet::Dim3(vec![
        vector![k, 0.0, 0.0],
        vector![-k, 0.0, 0.0],
        vector![0.0, k, 0.0],
        vector![0.0, -k, 0.0],
        vector![0.0, 0.0, k],
        vector![0.0, 0.0, -k],
    ])
}

/// Icosahedron with unit circumradius: cyclic permutations of (0, ±a, ±b)
/// where a = 1/√(φ+2) and b = φa, so a² + b² = 1.
pub fn icosahedron(cfg: &GenCfg) -> VertexSet {
    let a = cfg.scale / one_plus_phi_squared().sqrt();
    let b = phi() * a;
    let mut verts = Vec::with_capacity(12);
    for &sa in &[-a, a] {
        for &sb in &[-b, b] {
            verts.push(vector![0.0, sa, sb]);
            verts.push(vector![sa, sb, 0.0]);
            verts.push(vector![sb, 0.0, sa]);
        }
    }
    VertexSet::Dim3(verts)
}

/// Dodecahedron with unit circumradius: the cube's eight corners plus the
/// twelve (0, ±1/φ, ±φ) cyclic permutations, all divided by √3.
pub fn dodecahedron(cfg: &GenCfg) -> VertexSet {
    let k = cfg.scale / sqrt3();
    let p = phi() * k;
    let q = inv_phi() * k;
    let VertexSet::Dim3(mut verts) = cube(cfg) else {
        unreachable!()
    };
    for &sq in &[-q, q] {
        for &sp in &[-p, p] {
            verts.push(vector![0.0, sq, sp]);
            verts.push(vector![sq, sp, 0.0]);
            verts.push(vector![sp, 0.0, sq]);
        }
    }
    VertexSet::Dim3(verts)
}

/// Cuboctahedron (vector equilibrium): the twelve (±1, ±1, 0) permutations
/// at unit circumradius.
pub fn cuboctahedron(cfg: &GenCfg) -> VertexSet {
    let k = cfg.scale / sqrt2();
    let mut verts = Vec::with_capacity(12);
    for &sx in &[-k, k] {
        for &sy in &[-k, k] {
            verts.push(vector![sx, sy, 0.0]);
            verts.push(vector![sx, 0.0, sy]);
            verts.push(vector![0.0, sx, sy]);
        }
    }
    VertexSet::Dim3(verts)
}

/// Rhombic dodecahedron: cube corners at (±1, ±1, ±1) plus octahedron tips
/// at distance 2, normalized to unit circumradius.
pub fn rhombic_dodecahedron(cfg: &GenCfg) -> VertexSet {
    let k = cfg.scale / 2.0;
    let mut verts: Vec<Vector3<f64>> = Vec::with_capacity(14);
    for &x in &[-k, k] {
        for &y in &[-k, k] {
            for &z in &[-k, k] {
                verts.push(vector![x, y, z]);
            }
        }
    }
    let t = 2.0 * k;
    verts.push(vector![t, 0.0, 0.0]);
    verts.push(vector![-t, 0.0, 0.0]);
    verts.push(vector![0.0, t, 0.0]);
    verts.push(vector![0.0, -t, 0.0]);
    verts.push(vector![0.0, 0.0, t]);
    verts.push(vector![0.0, 0.0, -t]);
    VertexSet::Dim3(verts)
}
