//! Graham scan over projected point clouds.
//!
//! Fewer than three distinct points is not an error here: the silhouette of
//! a degenerate projection is a point or a segment, and the search treats
//! those hull counts as ordinary values.

use nalgebra::Vector2;

/// Compute the 2D convex hull in counter-clockwise order.
///
/// Points within `merge_eps` of each other on both axes collapse to one.
/// Collinear boundary points are dropped, so the result lists corners only.
pub fn convex_hull_2d(points: &[Vector2<f64>], merge_eps: f64) -> Vec<Vector2<f64>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    // Tolerance merge; point clouds here are small, the quadratic scan is fine.
    let mut unique: Vec<Vector2<f64>> = Vec::with_capacity(points.len());
    for p in points {
        if !unique
            .iter()
            .any(|q| (p.x - q.x).abs() < merge_eps && (p.y - q.y).abs() < merge_eps)
        {
            unique.push(*p);
        }
    }
    if unique.len() < 3 {
        return unique;
    }

    // Pivot: lowest y, then lowest x.
    let start = *unique
        .iter()
        .min_by(|a, b| (a.y, a.x).partial_cmp(&(b.y, b.x)).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap();

    // Sort the rest by polar angle around the pivot, nearer points first on
    // ties so collinear runs pop cleanly.
    unique.sort_by(|a, b| {
        let ka = angle_key(&start, a);
        let kb = angle_key(&start, b);
        ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut hull: Vec<Vector2<f64>> = Vec::with_capacity(unique.len());
    for p in unique {
        while hull.len() >= 2 && cross(&hull[hull.len() - 2], &hull[hull.len() - 1], &p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}

fn angle_key(start: &Vector2<f64>, p: &Vector2<f64>) -> (f64, f64) {
    let d = p - start;
    if d.x == 0.0 && d.y == 0.0 {
        return (f64::NEG_INFINITY, 0.0);
    }
    (d.y.atan2(d.x), d.norm_squared())
}

/// z-component of (a − o) × (b − o); positive for a left turn.
fn cross(o: &Vector2<f64>, a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Hull vertex count with the same degenerate-input semantics as
/// [`convex_hull_2d`].
pub fn count_hull_vertices(points: &[Vector2<f64>], merge_eps: f64) -> usize {
    convex_hull_2d(points, merge_eps).len()
}
