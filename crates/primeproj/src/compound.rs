//! Pairwise compounds with a variable relative orientation.
//!
//! The fixed compounds in the registry bake one relative orientation in.
//! Here the second component spins in the XY plane by a free spread, which
//! turns the compound itself into a search axis.

use std::fmt;

use crate::rot::{rotation_matrix_3d, rotation_matrix_4d};
use crate::shapes::{self, GenCfg, VertexSet};
use crate::spread::SpreadError;

/// Failure while assembling a two-polytope compound.
#[derive(Clone, Debug, PartialEq)]
pub enum CompoundError {
    UnknownPolytope { name: String },
    DimensionMismatch {
        left: String,
        left_dim: usize,
        right: String,
        right_dim: usize,
    },
    Spread(SpreadError),
}

impl fmt::Display for CompoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPolytope { name } => write!(f, "unknown polytope {name:?}"),
            Self::DimensionMismatch {
                left,
                left_dim,
                right,
                right_dim,
            } => write!(
                f,
                "cannot compound {left} ({left_dim}D) with {right} ({right_dim}D)"
            ),
            Self::Spread(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CompoundError {}

impl From<SpreadError> for CompoundError {
    fn from(e: SpreadError) -> Self {
        Self::Spread(e)
    }
}

/// Concatenate two registered polytopes, spinning the second one in the XY
/// plane by `relative_spread` first.
///
/// Both components must live in the same ambient dimension; the spread must
/// be a valid spread. `relative_spread = 0` is the plain union.
pub fn build_compound(
    left: &str,
    right: &str,
    relative_spread: f64,
) -> Result<VertexSet, CompoundError> {
    let cfg = GenCfg::default();
    let missing = |name: &str| CompoundError::UnknownPolytope {
        name: name.to_string(),
    };
    let dl = shapes::lookup(left).ok_or_else(|| missing(left))?;
    let dr = shapes::lookup(right).ok_or_else(|| missing(right))?;
    if dl.dim != dr.dim {
        return Err(CompoundError::DimensionMismatch {
            left: left.to_string(),
            left_dim: dl.dim,
            right: right.to_string(),
            right_dim: dr.dim,
        });
    }

    let first = (dl.gen)(&cfg);
    let second = (dr.gen)(&cfg);

    match (first, second) {
        (VertexSet::Dim3(mut a), VertexSet::Dim3(b)) => {
            let r = rotation_matrix_3d(relative_spread, 0.0, 0.0)?;
            a.extend(b.iter().map(|v| r * v));
            Ok(VertexSet::Dim3(a))
        }
        (VertexSet::Dim4(mut a), VertexSet::Dim4(b)) => {
            let r = rotation_matrix_4d([relative_spread, 0.0, 0.0, 0.0, 0.0, 0.0])?;
            a.extend(b.iter().map(|v| r * v));
            Ok(VertexSet::Dim4(a))
        }
        _ => unreachable!("dimensions checked against the registry"),
    }
}
