//! Orthographic projection onto the XY plane.
//!
//! Rotation carries all the viewpoint freedom, so projection is a fixed
//! drop of every axis past the first two. 4D sets lose Z and W in one step.

use nalgebra::{vector, Vector2};

use crate::shapes::VertexSet;

/// Project a vertex set to 2D by keeping the first two coordinates.
pub fn project_to_2d(verts: &VertexSet) -> Vec<Vector2<f64>> {
    match verts {
        VertexSet::Dim3(v) => v.iter().map(|p| vector![p.x, p.y]).collect(),
        VertexSet::Dim4(v) => v.iter().map(|p| vector![p.x, p.y]).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{generate, GenCfg};

    #[test]
    fn projection_keeps_xy() {
        let cube = generate("cube", &GenCfg::default()).unwrap();
        let flat = project_to_2d(&cube);
        assert_eq!(flat.len(), 8);
        let VertexSet::Dim3(orig) = cube else { panic!() };
        for (p, q) in orig.iter().zip(flat.iter()) {
            assert_eq!(p.x, q.x);
            assert_eq!(p.y, q.y);
        }
    }

    #[test]
    fn four_dimensional_sets_project_in_one_step() {
        let tess = generate("tesseract", &GenCfg::default()).unwrap();
        let flat = project_to_2d(&tess);
        assert_eq!(flat.len(), 16);
        // The 16 corners collapse onto the 4 XY sign combinations.
        for p in flat {
            assert!((p.x.abs() - 0.5).abs() < 1e-12);
            assert!((p.y.abs() - 0.5).abs() < 1e-12);
        }
    }
}
