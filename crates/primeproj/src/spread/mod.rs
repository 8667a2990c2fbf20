//! Spread algebra: scalar rational-trigonometry primitives.
//!
//! Purpose
//! - Convert between spread (sin²θ) and sin/cos pairs, with an explicit
//!   out-of-range failure instead of silent clamping.
//! - Provide quadrance (distance²) and vector spread, the two RT measures
//!   used by generators and tests.
//! - Cache radical and golden-ratio constants once so every call site sees
//!   bit-identical values; φ powers come from algebraic identities, never
//!   from repeated multiplication or division.
//!
//! Why identities
//! - Results are meant to be portable between independent implementations;
//!   deriving φ² as φ+1 (not φ·φ) keeps the constants reproducible to the
//!   last bit across languages.

pub mod cubics;
pub mod phi;
pub mod radicals;

use std::fmt;

use nalgebra::Vector3;

/// Spread value outside the valid [0, 1] range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpreadError {
    OutOfRange { value: f64 },
}

impl fmt::Display for SpreadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { value } => {
                write!(f, "spread {value} outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for SpreadError {}

/// Convert a spread s = sin²θ to `(sin θ, cos θ) = (√s, √(1−s))`.
///
/// Fails for s outside [0, 1]. Callers that want robustness must clamp
/// explicitly via [`clamp_spread`] before calling; nothing is clamped here.
#[inline]
pub fn spread_to_sin_cos(s: f64) -> Result<(f64, f64), SpreadError> {
    if !(0.0..=1.0).contains(&s) {
        return Err(SpreadError::OutOfRange { value: s });
    }
    Ok((s.sqrt(), (1.0 - s).sqrt()))
}

/// Intentional clamp of a spread into [0, 1]. NaN maps to 0.
#[inline]
pub fn clamp_spread(s: f64) -> f64 {
    if s.is_nan() {
        0.0
    } else {
        s.clamp(0.0, 1.0)
    }
}

/// Quadrance between two 3D points: Q = dx² + dy² + dz². No square root.
#[inline]
pub fn quadrance(p1: Vector3<f64>, p2: Vector3<f64>) -> f64 {
    (p2 - p1).norm_squared()
}

/// Spread between two 3D vectors: s = 1 − (v·w)² / (|v|²|w|²).
///
/// 0 for parallel, 1 for perpendicular. Zero vectors yield 0.
pub fn spread_between(v: Vector3<f64>, w: Vector3<f64>) -> f64 {
    let q1 = v.norm_squared();
    let q2 = w.norm_squared();
    if q1 == 0.0 || q2 == 0.0 {
        return 0.0;
    }
    let dot = v.dot(&w);
    1.0 - (dot * dot) / (q1 * q2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    const EPS: f64 = 1e-12;

    #[test]
    fn sin_cos_endpoints() {
        let (s0, c0) = spread_to_sin_cos(0.0).unwrap();
        assert_eq!((s0, c0), (0.0, 1.0));
        let (s1, c1) = spread_to_sin_cos(1.0).unwrap();
        assert_eq!((s1, c1), (1.0, 0.0));
    }

    #[test]
    fn sin_cos_half_is_45_degrees() {
        let (s, c) = spread_to_sin_cos(0.5).unwrap();
        let r = std::f64::consts::FRAC_1_SQRT_2;
        assert!((s - r).abs() < EPS && (c - r).abs() < EPS);
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(
            spread_to_sin_cos(-0.1),
            Err(SpreadError::OutOfRange { .. })
        ));
        assert!(matches!(
            spread_to_sin_cos(1.1),
            Err(SpreadError::OutOfRange { .. })
        ));
        assert!(spread_to_sin_cos(f64::NAN).is_err());
    }

    #[test]
    fn clamp_is_explicit_opt_in() {
        assert_eq!(clamp_spread(-0.3), 0.0);
        assert_eq!(clamp_spread(1.7), 1.0);
        assert_eq!(clamp_spread(f64::NAN), 0.0);
        assert_eq!(clamp_spread(0.42), 0.42);
    }

    #[test]
    fn quadrance_unit_cube_diagonal() {
        let q = quadrance(vector![0.0, 0.0, 0.0], vector![1.0, 1.0, 1.0]);
        assert!((q - 3.0).abs() < EPS);
    }

    #[test]
    fn spread_perpendicular_and_parallel() {
        let s = spread_between(vector![1.0, 0.0, 0.0], vector![0.0, 1.0, 0.0]);
        assert!((s - 1.0).abs() < EPS);
        let s = spread_between(vector![1.0, 0.0, 0.0], vector![2.0, 0.0, 0.0]);
        assert!(s.abs() < EPS);
    }

    #[test]
    fn spread_tetrahedral() {
        // Between two tetrahedron vertices seen from the center: 8/9 exactly.
        let s = spread_between(vector![1.0, 1.0, 1.0], vector![1.0, -1.0, -1.0]);
        assert!((s - 8.0 / 9.0).abs() < EPS);
    }
}
