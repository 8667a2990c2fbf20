//! Rotation matrices from spreads.
//!
//! Purpose
//! - Build 3×3 (ZYX Euler) and 4×4 (six-plane) rotation matrices whose
//!   angles are given as spreads, and apply them to whole vertex sets.
//!
//! Conventions
//! - 3D: R = Rz(s_xy) · Ry(s_xz) · Rx(s_yz).
//! - 4D: the six independent rotation planes compose in the fixed order
//!   XY, XZ, XW, YZ, YW, ZW.
//! - An invalid spread fails the whole construction; no degenerate matrix is
//!   ever returned.

use std::fmt;

use nalgebra::{Matrix3, Matrix4, Vector3, Vector4};
use serde::{Deserialize, Serialize};

use crate::shapes::VertexSet;
use crate::spread::{spread_to_sin_cos, SpreadError};

/// The six 4D rotation planes, in composition order.
const PLANES_4D: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Failure while building or applying a spread-parameterized rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotationError {
    /// A spread was outside [0, 1].
    Spread(SpreadError),
    /// Rotation arity does not match the ambient dimension of the points.
    Arity { arity: usize, dim: usize },
}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spread(e) => write!(f, "{e}"),
            Self::Arity { arity, dim } => {
                write!(f, "{arity}-spread rotation applied to {dim}D vertices")
            }
        }
    }
}

impl std::error::Error for RotationError {}

impl From<SpreadError> for RotationError {
    fn from(e: SpreadError) -> Self {
        Self::Spread(e)
    }
}

/// Build a 3D rotation matrix from three spreads (ZYX Euler convention).
pub fn rotation_matrix_3d(
    s_xy: f64,
    s_xz: f64,
    s_yz: f64,
) -> Result<Matrix3<f64>, SpreadError> {
    let (sin1, cos1) = spread_to_sin_cos(s_xy)?;
    let (sin2, cos2) = spread_to_sin_cos(s_xz)?;
    let (sin3, cos3) = spread_to_sin_cos(s_yz)?;

    #[rustfmt::skip]
    let rz = Matrix3::new(
        cos1, -sin1, 0.0,
        sin1,  cos1, 0.0,
         0.0,   0.0, 1.0,
    );
    #[rustfmt::skip]
    let ry = Matrix3::new(
         cos2, 0.0, sin2,
          0.0, 1.0,  0.0,
        -sin2, 0.0, cos2,
    );
    #[rustfmt::skip]
    let rx = Matrix3::new(
        1.0,  0.0,   0.0,
        0.0, cos3, -sin3,
        0.0, sin3,  cos3,
    );
    Ok(rz * ry * rx)
}

/// Build a 4D rotation matrix from six plane spreads (XY, XZ, XW, YZ, YW, ZW).
pub fn rotation_matrix_4d(spreads: [f64; 6]) -> Result<Matrix4<f64>, SpreadError> {
    let mut r = Matrix4::identity();
    for (k, &(i, j)) in PLANES_4D.iter().enumerate() {
        let (sin_t, cos_t) = spread_to_sin_cos(spreads[k])?;
        let mut p = Matrix4::identity();
        p[(i, i)] = cos_t;
        p[(i, j)] = -sin_t;
        p[(j, i)] = sin_t;
        p[(j, j)] = cos_t;
        r *= p;
    }
    Ok(r)
}

/// Apply a rotation matrix to every vertex (fresh output, input untouched).
pub fn rotate3(m: &Matrix3<f64>, verts: &[Vector3<f64>]) -> Vec<Vector3<f64>> {
    verts.iter().map(|v| m * v).collect()
}

/// 4D counterpart of [`rotate3`].
pub fn rotate4(m: &Matrix4<f64>, verts: &[Vector4<f64>]) -> Vec<Vector4<f64>> {
    verts.iter().map(|v| m * v).collect()
}

/// A full rotation configuration: 3 spreads for 3D, 6 for 4D.
///
/// Stateless; the matrix is recomputed per application.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RotationConfig {
    Three([f64; 3]),
    Six([f64; 6]),
}

impl RotationConfig {
    /// Number of free spread parameters.
    pub fn arity(&self) -> usize {
        match self {
            Self::Three(_) => 3,
            Self::Six(_) => 6,
        }
    }

    /// The spreads as a slice, for logging and tie-breaking.
    pub fn spreads(&self) -> &[f64] {
        match self {
            Self::Three(s) => s,
            Self::Six(s) => s,
        }
    }

    /// Rotate a vertex set. Fails if the arity does not match the ambient
    /// dimension or any spread is invalid.
    pub fn apply(&self, verts: &VertexSet) -> Result<VertexSet, RotationError> {
        match (self, verts) {
            (Self::Three([s1, s2, s3]), VertexSet::Dim3(v)) => {
                let m = rotation_matrix_3d(*s1, *s2, *s3)?;
                Ok(VertexSet::Dim3(rotate3(&m, v)))
            }
            (Self::Six(spreads), VertexSet::Dim4(v)) => {
                let m = rotation_matrix_4d(*spreads)?;
                Ok(VertexSet::Dim4(rotate4(&m, v)))
            }
            _ => Err(RotationError::Arity {
                arity: self.arity(),
                dim: verts.dim(),
            }),
        }
    }
}
