//! Quadray (WXYZ) tetrahedral coordinates.
//!
//! Four basis rays point at alternating cube corners; a coordinate is
//! zero-sum normalized before conversion so each point has a canonical
//! representative.

use nalgebra::{vector, Vector3};

/// Basis rays W, X, Y, Z toward the even-parity cube corners.
pub const QUADRAY_BASIS: [[f64; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
];

/// Subtract the mean so the four coordinates sum to zero.
pub fn zero_sum_normalize(wxyz: [f64; 4]) -> [f64; 4] {
    let avg = wxyz.iter().sum::<f64>() / 4.0;
    wxyz.map(|c| c - avg)
}

/// Convert a WXYZ coordinate to Cartesian by summing the weighted basis rays.
pub fn wxyz_to_cartesian(wxyz: [f64; 4], scale: f64) -> Vector3<f64> {
    let mut p = Vector3::zeros();
    for (c, b) in wxyz.iter().zip(QUADRAY_BASIS.iter()) {
        p += c * scale * vector![b[0], b[1], b[2]];
    }
    p
}

/// The twelve {2, 1, 0, 0} permutations: the truncated tetrahedron in
/// quadray form, three vertices per basis direction.
pub const TRUNCTET_WXYZ: [[f64; 4]; 12] = [
    [2.0, 1.0, 0.0, 0.0],
    [2.0, 0.0, 1.0, 0.0],
    [2.0, 0.0, 0.0, 1.0],
    [1.0, 2.0, 0.0, 0.0],
    [0.0, 2.0, 1.0, 0.0],
    [0.0, 2.0, 0.0, 1.0],
    [1.0, 0.0, 2.0, 0.0],
    [0.0, 1.0, 2.0, 0.0],
    [0.0, 0.0, 2.0, 1.0],
    [1.0, 0.0, 0.0, 2.0],
    [0.0, 1.0, 0.0, 2.0],
    [0.0, 0.0, 1.0, 2.0],
];

/// The quadray truncated tetrahedron in Cartesian coordinates, normalized to
/// unit circumradius.
pub fn trunctet_cartesian() -> Vec<Vector3<f64>> {
    let raw: Vec<Vector3<f64>> = TRUNCTET_WXYZ
        .iter()
        .map(|&c| wxyz_to_cartesian(zero_sum_normalize(c), 1.0))
        .collect();
    let circumradius = raw.iter().map(|v| v.norm()).fold(0.0, f64::max);
    raw.into_iter().map(|v| v / circumradius).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_rays_sum_to_zero() {
        let total: Vector3<f64> = QUADRAY_BASIS
            .iter()
            .map(|b| vector![b[0], b[1], b[2]])
            .sum();
        assert!(total.norm() < 1e-15);
    }

    #[test]
    fn zero_sum_is_idempotent() {
        let once = zero_sum_normalize([2.0, 1.0, 0.0, 0.0]);
        let twice = zero_sum_normalize(once);
        assert_eq!(once, twice);
        assert!(once.iter().sum::<f64>().abs() < 1e-15);
    }

    #[test]
    fn zero_sum_preserves_cartesian_image() {
        // Adding a constant to all four quadray coordinates moves the point
        // along W+X+Y+Z = 0, so the image is unchanged.
        let raw = [2.0, 0.0, 1.0, 0.0];
        let a = wxyz_to_cartesian(raw, 1.0);
        let b = wxyz_to_cartesian(zero_sum_normalize(raw), 1.0);
        assert!((a - b).norm() < 1e-12);
    }

    #[test]
    fn trunctet_has_twelve_unit_radius_vertices() {
        let verts = trunctet_cartesian();
        assert_eq!(verts.len(), 12);
        let max = verts.iter().map(|v| v.norm()).fold(0.0, f64::max);
        assert!((max - 1.0).abs() < 1e-12);
    }
}
