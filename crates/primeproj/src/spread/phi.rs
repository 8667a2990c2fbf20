//! Golden-ratio constants via algebraic identities.
//!
//! φ = (1 + √5)/2. The powers are derived from φ² = φ + 1 rather than
//! recomputed by multiplication or division, so all call sites agree to the
//! last bit with reference implementations:
//!   φ² = φ + 1
//!   1/φ = φ − 1
//!   1 + φ² = φ + 2  (icosahedron normalizer)

use std::sync::OnceLock;

/// Cached √5, computed once and reused everywhere.
pub fn sqrt5() -> f64 {
    static VAL: OnceLock<f64> = OnceLock::new();
    *VAL.get_or_init(|| 5.0_f64.sqrt())
}

/// φ = (1 + √5)/2 ≈ 1.618033988749895
pub fn phi() -> f64 {
    0.5 * (1.0 + sqrt5())
}

/// φ² = φ + 1 (identity, not φ·φ).
pub fn phi_squared() -> f64 {
    phi() + 1.0
}

/// 1/φ = φ − 1 (identity, not 1/φ).
pub fn inv_phi() -> f64 {
    phi() - 1.0
}

/// 1 + φ² = φ + 2, the squared circumradius of the golden rectangles.
pub fn one_plus_phi_squared() -> f64 {
    phi() + 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-14;

    #[test]
    fn phi_value() {
        assert!((phi() - 1.618033988749895).abs() < EPS);
    }

    #[test]
    fn squared_identity() {
        assert!((phi_squared() - phi() * phi()).abs() < EPS);
    }

    #[test]
    fn inverse_identity() {
        assert!((inv_phi() - 1.0 / phi()).abs() < EPS);
    }

    #[test]
    fn normalizer_identity() {
        assert!((one_plus_phi_squared() - (1.0 + phi_squared())).abs() < EPS);
    }
}
