//! 4D polytope vertex generators.
//!
//! The tesseract, 16-cell and 24-cell are exact. The 120-cell and 600-cell
//! are reduced approximations built from symmetry generators with
//! rounding-based dedup, then normalized so the largest vertex norm is 1.

use nalgebra::{vector, Vector4};

use super::{dedup_rounded4, GenCfg, VertexSet};
use crate::spread::phi::{inv_phi, phi, phi_squared, sqrt5};

const SIGNS: [f64; 2] = [-1.0, 1.0];

/// Hypercube with half-unit coordinates (circumradius 1).
pub fn tesseract(cfg: &GenCfg) -> VertexSet {
    let k = cfg.scale / 2.0;
    let mut verts = Vec::with_capacity(16);
    for &sw in &SIGNS {
        for &sx in &SIGNS {
            for &sy in &SIGNS {
                for &sz in &SIGNS {
                    verts.push(vector![sw * k, sx * k, sy * k, sz * k]);
                }
            }
        }
    }
    VertexSet::Dim4(verts)
}

/// Hyperoctahedron: the eight signed unit axis vectors.
pub fn cell16(cfg: &GenCfg) -> VertexSet {
    VertexSet::Dim4(axis_vertices(cfg.scale))
}

/// The 24-cell: all sixteen (±1/2, ±1/2, ±1/2, ±1/2) points together with
/// the eight unit axis vectors.
pub fn cell24(cfg: &GenCfg) -> VertexSet {
    let k = cfg.scale / 2.0;
    let mut verts = Vec::with_capacity(24);
    for &s1 in &SIGNS {
        for &s2 in &SIGNS {
            for &s3 in &SIGNS {
                for &s4 in &SIGNS {
                    verts.push(vector![s1 * k, s2 * k, s3 * k, s4 * k]);
                }
            }
        }
    }
    verts.extend(axis_vertices(cfg.scale));
    VertexSet::Dim4(verts)
}

/// Reduced 120-cell: even permutations of (0, 0, ±2, ±2), the
/// (±1, ±1, ±1, ±√5) family, and the φ² / 1/φ golden family, deduped and
/// normalized by the largest norm.
pub fn cell120(cfg: &GenCfg) -> VertexSet {
    let mut verts: Vec<Vector4<f64>> = Vec::new();

    let perms2 = [
        [0.0, 0.0, 2.0, 2.0],
        [0.0, 2.0, 0.0, 2.0],
        [0.0, 2.0, 2.0, 0.0],
        [2.0, 0.0, 0.0, 2.0],
        [2.0, 0.0, 2.0, 0.0],
        [2.0, 2.0, 0.0, 0.0],
    ];
    push_signed(&mut verts, &perms2);

    let r5 = sqrt5();
    let perms5 = [
        [1.0, 1.0, 1.0, r5],
        [1.0, 1.0, r5, 1.0],
        [1.0, r5, 1.0, 1.0],
        [r5, 1.0, 1.0, 1.0],
    ];
    push_signed(&mut verts, &perms5);

    let p2 = phi_squared();
    let q = inv_phi();
    let golden = [
        [p2, q, q, q],
        [q, p2, q, q],
        [q, q, p2, q],
        [q, q, q, p2],
    ];
    push_signed(&mut verts, &golden);

    normalize_deduped(verts, cfg.scale)
}

/// 600-cell: unit axis vectors, half-integer sign combinations, and all
/// permutations of (±φ/2, ±1/2, ±1/(2φ), 0), deduped and normalized by the
/// largest norm. The sign loop over the zero slot double-counts, so dedup is
/// structural here, not just numerical.
pub fn cell600(cfg: &GenCfg) -> VertexSet {
    let mut verts = axis_vertices(1.0);

    for &s1 in &SIGNS {
        for &s2 in &SIGNS {
            for &s3 in &SIGNS {
                for &s4 in &SIGNS {
                    verts.push(vector![s1 * 0.5, s2 * 0.5, s3 * 0.5, s4 * 0.5]);
                }
            }
        }
    }

    let coords = [phi() / 2.0, 0.5, inv_phi() / 2.0, 0.0];
    for perm in permutations4() {
        let base = [
            coords[perm[0]],
            coords[perm[1]],
            coords[perm[2]],
            coords[perm[3]],
        ];
        push_signed(&mut verts, &[base]);
    }

    normalize_deduped(verts, cfg.scale)
}

fn axis_vertices(scale: f64) -> Vec<Vector4<f64>> {
    let mut verts = Vec::with_capacity(8);
    for i in 0..4 {
        for &s in &SIGNS {
            let mut v = Vector4::zeros();
            v[i] = s * scale;
            verts.push(v);
        }
    }
    verts
}

fn push_signed(verts: &mut Vec<Vector4<f64>>, bases: &[[f64; 4]]) {
    for b in bases {
        for &s1 in &SIGNS {
            for &s2 in &SIGNS {
                for &s3 in &SIGNS {
                    for &s4 in &SIGNS {
                        verts.push(vector![s1 * b[0], s2 * b[1], s3 * b[2], s4 * b[3]]);
                    }
                }
            }
        }
    }
}

fn permutations4() -> Vec<[usize; 4]> {
    let mut perms = Vec::with_capacity(24);
    for a in 0..4 {
        for b in 0..4 {
            if b == a {
                continue;
            }
            for c in 0..4 {
                if c == a || c == b {
                    continue;
                }
                let d = 6 - a - b - c;
                perms.push([a, b, c, d]);
            }
        }
    }
    perms
}

fn normalize_deduped(verts: Vec<Vector4<f64>>, scale: f64) -> VertexSet {
    let deduped = dedup_rounded4(verts);
    let max_norm = deduped.iter().map(|v| v.norm()).fold(0.0, f64::max);
    VertexSet::Dim4(deduped.into_iter().map(|v| v * (scale / max_norm)).collect())
}
