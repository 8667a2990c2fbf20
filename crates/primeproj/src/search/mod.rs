//! Sweep rotation grids and collect prime-count silhouettes.
//!
//! Purpose
//! - Enumerate every rotation configuration on a grid, evaluate each one
//!   (rotate, project, hull), keep the hits, and rank them by how close the
//!   silhouette is to a regular polygon.
//!
//! Why
//! - Hull counts jump discontinuously with the viewpoint, so there is no
//!   gradient to follow; exhaustive sweep over a structured grid is the
//!   honest strategy, and evaluations are independent enough to fan out
//!   with rayon.

mod grid;

pub use grid::{rational_spreads, GridSpec, RationalTier, MAX_PRECISION_6D, PRECISION_RANGE};

use std::cmp::Ordering;
use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

use crate::compound::{build_compound, CompoundError};
use crate::hull::{analyze, HullGeometry};
use crate::project::project_to_2d;
use crate::rot::{RotationConfig, RotationError};
use crate::shapes::{self, GenCfg, VertexSet};

/// Prime hull counts worth reporting, in ascending order.
pub const TARGET_PRIMES: [usize; 12] = [7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

/// Search parameters shared by the single-shape and compound sweeps.
#[derive(Clone, Debug, Serialize)]
pub struct SearchCfg {
    pub grid: GridSpec,
    /// Hull counts to keep; anything else is discarded during the sweep.
    pub targets: Vec<usize>,
    /// Keep only the best N findings after ranking.
    pub top: Option<usize>,
    /// Subsample the grid down to this many configurations when it is
    /// larger, using `seed` so runs repeat exactly.
    pub max_configs: Option<usize>,
    pub seed: u64,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            grid: GridSpec::Decimal { precision: 2 },
            targets: TARGET_PRIMES.to_vec(),
            top: None,
            max_configs: None,
            seed: 42,
        }
    }
}

/// One configuration whose silhouette hit a target hull count.
#[derive(Clone, Debug, Serialize)]
pub struct Finding {
    pub shape: String,
    /// Spin of the second component, present for compound sweeps only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_spread: Option<f64>,
    pub rotation: RotationConfig,
    pub geometry: HullGeometry,
}

/// Failure configuring or starting a sweep. Individual grid points cannot
/// fail once the grid itself is valid.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchError {
    UnknownPolytope { name: String },
    DimensionMismatch {
        left: String,
        left_dim: usize,
        right: String,
        right_dim: usize,
    },
    InvalidGrid { precision: u32 },
    Rotation(RotationError),
}

impl fmt::Display for SearchError {
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
            Self::InvalidGrid { precision } => write!(
                f,
                "decimal precision {precision} outside {:?}",
                PRECISION_RANGE
            ),
            Self::Rotation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<RotationError> for SearchError {
    fn from(e: RotationError) -> Self {
        Self::Rotation(e)
    }
}

impl From<CompoundError> for SearchError {
    fn from(e: CompoundError) -> Self {
        match e {
            CompoundError::UnknownPolytope { name } => Self::UnknownPolytope { name },
            CompoundError::DimensionMismatch {
                left,
                left_dim,
                right,
                right_dim,
            } => Self::DimensionMismatch {
                left,
                left_dim,
                right,
                right_dim,
            },
            CompoundError::Spread(e) => Self::Rotation(RotationError::Spread(e)),
        }
    }
}

/// Rotate, project and measure one configuration.
pub fn evaluate(verts: &VertexSet, rotation: &RotationConfig) -> Result<HullGeometry, RotationError> {
    let rotated = rotation.apply(verts)?;
    Ok(analyze(&project_to_2d(&rotated)))
}

/// Sweep every rotation of a registered polytope, keeping configurations
/// whose hull count is in `cfg.targets`, ranked best first.
pub fn search(name: &str, cfg: &SearchCfg) -> Result<Vec<Finding>, SearchError> {
    cfg.grid.validate()?;
    let verts = shapes::generate(name, &GenCfg::default()).ok_or_else(|| {
        SearchError::UnknownPolytope {
            name: name.to_string(),
        }
    })?;
    let mut findings = sweep(name, None, &verts, cfg);
    rank(&mut findings, cfg.top);
    Ok(findings)
}

/// Sweep a two-polytope compound: outer loop over the relative spin of the
/// second component, inner sweep over viewing rotations. Subsampling, when
/// requested, draws from the combined (relative × viewing) space.
pub fn search_compound(
    left: &str,
    right: &str,
    cfg: &SearchCfg,
) -> Result<Vec<Finding>, SearchError> {
    cfg.grid.validate()?;
    // Fails fast on unknown names or mixed dimensions.
    let probe = build_compound(left, right, 0.0)?;
    let arity = rotation_arity(&probe);

    let relative_axis = cfg.grid.axis_spreads(arity);
    // Split the sampling budget evenly across the relative-spin slices so the
    // whole sweep evaluates about `max_configs` configurations.
    let per_relative_budget = cfg
        .max_configs
        .map(|m| (m / relative_axis.len().max(1)).max(1));

    if min_target(&cfg.targets).is_some_and(|t| probe.len() < t) {
        return Ok(Vec::new());
    }

    let name = format!("{left}+{right}");
    let mut findings = Vec::new();
    for (i, &rel) in relative_axis.iter().enumerate() {
        let verts = build_compound(left, right, rel)?;
        let inner = SearchCfg {
            max_configs: per_relative_budget,
            // Decorrelate the subsample drawn for each relative spin.
            seed: cfg.seed.wrapping_add(i as u64),
            ..cfg.clone()
        };
        findings.extend(sweep(&name, Some(rel), &verts, &inner));
    }
    rank(&mut findings, cfg.top);
    Ok(findings)
}

/// Evaluate one explicit rotation of a registered polytope.
pub fn verify(name: &str, rotation: &RotationConfig) -> Result<Finding, SearchError> {
    let verts = shapes::generate(name, &GenCfg::default()).ok_or_else(|| {
        SearchError::UnknownPolytope {
            name: name.to_string(),
        }
    })?;
    let geometry = evaluate(&verts, rotation)?;
    Ok(Finding {
        shape: name.to_string(),
        relative_spread: None,
        rotation: *rotation,
        geometry,
    })
}

/// Registry summary, re-exported here so the CLI has one entry point.
pub fn list_shapes() -> Vec<shapes::ShapeInfo> {
    shapes::list_shapes()
}

fn rotation_arity(verts: &VertexSet) -> usize {
    if verts.dim() == 3 {
        3
    } else {
        6
    }
}

fn min_target(targets: &[usize]) -> Option<usize> {
    targets.iter().copied().min()
}

/// The parallel inner sweep over all viewing rotations of one vertex set.
fn sweep(
    shape: &str,
    relative_spread: Option<f64>,
    verts: &VertexSet,
    cfg: &SearchCfg,
) -> Vec<Finding> {
    // A hull can never have more corners than the set has vertices.
    if min_target(&cfg.targets).is_some_and(|t| verts.len() < t) {
        return Vec::new();
    }

    let arity = rotation_arity(verts);
    let axis = cfg.grid.axis_spreads(arity);
    let total = axis.len().pow(arity as u32);

    let eval_one = |idx: usize| {
        let rotation = decode(idx, &axis, arity);
        // Grid spreads are valid by construction; apply cannot fail.
        let geometry = evaluate(verts, &rotation).ok()?;
        if !cfg.targets.contains(&geometry.hull_count) {
            return None;
        }
        Some(Finding {
            shape: shape.to_string(),
            relative_spread,
            rotation,
            geometry,
        })
    };

    match cfg.max_configs {
        Some(max) if max < total => {
            let mut rng = StdRng::seed_from_u64(cfg.seed);
            rand::seq::index::sample(&mut rng, total, max)
                .into_vec()
                .into_par_iter()
                .filter_map(eval_one)
                .collect()
        }
        // Full enumeration streams the index range; it is never materialized.
        _ => (0..total).into_par_iter().filter_map(eval_one).collect(),
    }
}

/// Map a flat grid index to its rotation, most significant digit first so
/// index order is lexicographic in the spreads.
fn decode(idx: usize, axis: &[f64], arity: usize) -> RotationConfig {
    let base = axis.len();
    let mut rest = idx;
    let mut digits = [0.0f64; 6];
    for slot in (0..arity).rev() {
        digits[slot] = axis[rest % base];
        rest /= base;
    }
    if arity == 3 {
        RotationConfig::Three([digits[0], digits[1], digits[2]])
    } else {
        RotationConfig::Six(digits)
    }
}

/// Regularity descending; ties broken on the relative spread, then the
/// rotation tuple, ascending, so output order is reproducible.
fn rank(findings: &mut Vec<Finding>, top: Option<usize>) {
    findings.sort_by(|a, b| {
        b.geometry
            .regularity_score
            .partial_cmp(&a.geometry.regularity_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                a.relative_spread
                    .partial_cmp(&b.relative_spread)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| lex(a.rotation.spreads(), b.rotation.spreads()))
    });
    if let Some(n) = top {
        findings.truncate(n);
    }
}

fn lex(a: &[f64], b: &[f64]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.partial_cmp(y) {
            Some(Ordering::Equal) | None => continue,
            Some(ord) => return ord,
        }
    }
    a.len().cmp(&b.len())
}

#[cfg(test)]
mod tests;
