//! Polygon metrics over an extracted hull.

use nalgebra::Vector2;
use serde::Serialize;

use super::cfg;
use super::scan::convex_hull_2d;

/// Full geometric report for one projected silhouette.
///
/// Degenerate hulls (fewer than three corners) carry their vertex count with
/// empty metric lists, infinite dispersion, and a zero regularity score.
#[derive(Clone, Debug, Serialize)]
pub struct HullGeometry {
    pub hull_count: usize,
    pub hull_vertices: Vec<[f64; 2]>,
    pub interior_angles: Vec<f64>,
    pub edge_lengths: Vec<f64>,
    pub is_equiangular: bool,
    pub is_equilateral: bool,
    /// Standard deviation of the interior angles, degrees.
    pub angle_std_dev: f64,
    /// Coefficient of variation of the edge lengths, percent.
    pub edge_cv: f64,
    /// Mean of the angle and edge sub-scores, in [0, 1]; 1 is a perfect
    /// regular polygon.
    pub regularity_score: f64,
}

impl HullGeometry {
    fn degenerate(hull_count: usize) -> Self {
        Self {
            hull_count,
            hull_vertices: Vec::new(),
            interior_angles: Vec::new(),
            edge_lengths: Vec::new(),
            is_equiangular: false,
            is_equilateral: false,
            angle_std_dev: f64::INFINITY,
            edge_cv: f64::INFINITY,
            regularity_score: 0.0,
        }
    }
}

/// Extract the hull of `points` and measure it.
pub fn analyze(points: &[Vector2<f64>]) -> HullGeometry {
    let hull = convex_hull_2d(points, cfg::MERGE_EPS);
    let n = hull.len();
    if n < 3 {
        return HullGeometry::degenerate(n);
    }

    let edge_lengths: Vec<f64> = (0..n).map(|i| (hull[(i + 1) % n] - hull[i]).norm()).collect();

    let interior_angles: Vec<f64> = (0..n)
        .map(|i| {
            let prev = hull[(i + n - 1) % n];
            let curr = hull[i];
            let next = hull[(i + 1) % n];
            let v1 = prev - curr;
            let v2 = next - curr;
            let cos = (v1.dot(&v2) / (v1.norm() * v2.norm() + cfg::NORM_GUARD)).clamp(-1.0, 1.0);
            cos.acos().to_degrees()
        })
        .collect();

    let angle_std_dev = std_dev(&interior_angles);
    let edge_mean = mean(&edge_lengths);
    let edge_cv = 100.0 * std_dev(&edge_lengths) / (edge_mean + cfg::NORM_GUARD);

    // Regularity: deviation from the ideal n-gon angle and edge uniformity,
    // each mapped linearly onto [0, 1] and averaged.
    let ideal_angle = 180.0 * (n as f64 - 2.0) / n as f64;
    let angle_deviation =
        interior_angles.iter().map(|a| (a - ideal_angle).abs()).sum::<f64>() / n as f64;
    let angle_score = (1.0 - angle_deviation / cfg::ANGLE_DEV_CEILING_DEG).max(0.0);
    let edge_score = (1.0 - edge_cv / cfg::EDGE_CV_CEILING_PCT).max(0.0);

    HullGeometry {
        hull_count: n,
        hull_vertices: hull.iter().map(|p| [p.x, p.y]).collect(),
        is_equiangular: angle_std_dev < cfg::EQUIANGULAR_MAX_STD_DEG,
        is_equilateral: edge_cv < cfg::EQUILATERAL_MAX_CV_PCT,
        interior_angles,
        edge_lengths,
        angle_std_dev,
        edge_cv,
        regularity_score: (angle_score + edge_score) / 2.0,
    }
}

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Population standard deviation, matching how the thresholds were tuned.
fn std_dev(xs: &[f64]) -> f64 {
    let m = mean(xs);
    (xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / xs.len() as f64).sqrt()
}
