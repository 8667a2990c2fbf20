//! Cached cubic roots for non-constructible constants.
//!
//! The snub cube requires the tribonacci constant, the real root of
//! x³ − x² − x − 1 = 0. Solved once, cached as a literal for IEEE 754
//! consistency across implementations.

/// Tribonacci constant ξ ≈ 1.8393, real root of x³ − x² − x − 1 = 0.
pub fn tribonacci() -> f64 {
    1.839_286_755_214_161_2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tribonacci_satisfies_cubic() {
        let x = tribonacci();
        let residual = x * x * x - x * x - x - 1.0;
        assert!(residual.abs() < 1e-12, "cubic residual = {residual}");
    }
}
