//! Cached radical constants.
//!
//! √2 and √3 are computed once and cached so the rational-tier grid and the
//! tests share bit-identical values.

use std::sync::OnceLock;

/// √2 ≈ 1.4142135623730951
pub fn sqrt2() -> f64 {
    static VAL: OnceLock<f64> = OnceLock::new();
    *VAL.get_or_init(|| 2.0_f64.sqrt())
}

/// √3 ≈ 1.7320508075688772
pub fn sqrt3() -> f64 {
    static VAL: OnceLock<f64> = OnceLock::new();
    *VAL.get_or_init(|| 3.0_f64.sqrt())
}
