//! Spread grids: what values each rotation parameter sweeps over.

use serde::{Deserialize, Serialize};

use crate::spread::phi::{inv_phi, sqrt5};
use crate::spread::radicals::{sqrt2, sqrt3};

use super::SearchError;

/// Decimal precisions outside this range either miss everything interesting
/// or explode the grid.
pub const PRECISION_RANGE: std::ops::RangeInclusive<u32> = 1..=6;

/// Six-spread decimal grids are clamped to this precision; the 6-parameter
/// product is intractable above it.
pub const MAX_PRECISION_6D: u32 = 2;

/// How the spread axis is discretized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridSpec {
    /// Evenly spaced: step 10^-precision over [0, 1].
    Decimal { precision: u32 },
    /// Hand-picked exactly-representable spreads, cumulative by tier.
    Rational { tier: RationalTier },
}

/// Cumulative rational tiers; each includes everything below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RationalTier {
    /// Quarters: sin and cos reduce to 0, 1/2, 1/√2, √3/2, 1.
    Radical,
    /// Adds the golden-ratio family and the radical star spreads.
    Golden,
    /// Adds eighths, ninths and sixteenths.
    Fine,
}

impl GridSpec {
    /// Reject precisions outside [`PRECISION_RANGE`]. The only caller-facing
    /// fatal error in the search pipeline.
    pub fn validate(&self) -> Result<(), SearchError> {
        match *self {
            Self::Decimal { precision } if !PRECISION_RANGE.contains(&precision) => {
                Err(SearchError::InvalidGrid { precision })
            }
            _ => Ok(()),
        }
    }

    /// Grid values for one spread axis. `arity` is 3 or 6; six-spread
    /// decimal grids clamp to [`MAX_PRECISION_6D`].
    pub fn axis_spreads(&self, arity: usize) -> Vec<f64> {
        match *self {
            Self::Decimal { precision } => {
                let p = if arity == 6 {
                    precision.min(MAX_PRECISION_6D)
                } else {
                    precision
                };
                let steps = 10usize.pow(p);
                let factor = steps as f64;
                (0..=steps).map(|i| i as f64 / factor).collect()
            }
            Self::Rational { tier } => rational_spreads(tier),
        }
    }

    /// Number of configurations a full sweep enumerates.
    pub fn config_count(&self, arity: usize) -> usize {
        self.axis_spreads(arity).len().pow(arity as u32)
    }
}

/// The tier members, sorted and deduped.
///
/// The golden additions are the spreads of star-polygon diagonals and
/// related radical values; they hit regular 5-, 8- and 12-fold silhouettes
/// that no coarse decimal grid lands on exactly.
pub fn rational_spreads(tier: RationalTier) -> Vec<f64> {
    let mut values = vec![0.0, 0.25, 0.5, 0.75, 1.0];

    if tier >= RationalTier::Golden {
        values.extend([
            (5.0 - sqrt5()) / 8.0,
            (3.0 - sqrt5()) / 8.0,
            (2.0 - sqrt2()) / 4.0,
            (2.0 - sqrt3()) / 4.0,
            inv_phi(),
            inv_phi() * inv_phi(),
            8.0 / 9.0,
        ]);
    }

    if tier >= RationalTier::Fine {
        for denom in [8u32, 9, 16] {
            values.extend((1..denom).map(|k| k as f64 / denom as f64));
        }
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    values.dedup_by(|a, b| (*a - *b).abs() < 1e-12);
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_axis_is_inclusive() {
        let axis = GridSpec::Decimal { precision: 1 }.axis_spreads(3);
        assert_eq!(axis.len(), 11);
        assert_eq!(axis[0], 0.0);
        assert_eq!(axis[10], 1.0);
    }

    #[test]
    fn six_spread_decimal_grids_clamp() {
        let spec = GridSpec::Decimal { precision: 4 };
        assert_eq!(spec.axis_spreads(3).len(), 10_001);
        assert_eq!(spec.axis_spreads(6).len(), 101);
        assert_eq!(spec.config_count(6), 101usize.pow(6));
    }

    #[test]
    fn precision_bounds_enforced() {
        assert!(GridSpec::Decimal { precision: 0 }.validate().is_err());
        assert!(GridSpec::Decimal { precision: 7 }.validate().is_err());
        for p in 1..=6 {
            assert!(GridSpec::Decimal { precision: p }.validate().is_ok());
        }
        let rational = GridSpec::Rational {
            tier: RationalTier::Fine,
        };
        assert!(rational.validate().is_ok());
    }

    #[test]
    fn tiers_are_cumulative() {
        let radical = rational_spreads(RationalTier::Radical);
        let golden = rational_spreads(RationalTier::Golden);
        let fine = rational_spreads(RationalTier::Fine);
        assert_eq!(radical.len(), 5);
        assert_eq!(golden.len(), 12);
        for v in &radical {
            assert!(golden.contains(v));
        }
        for v in &golden {
            assert!(fine.iter().any(|w| (w - v).abs() < 1e-12));
        }
        // Quarters appear once even though eighths and sixteenths repeat them.
        let quarters = fine.iter().filter(|v| (**v - 0.25).abs() < 1e-12).count();
        assert_eq!(quarters, 1);
    }

    #[test]
    fn tier_values_sorted_in_unit_interval() {
        let fine = rational_spreads(RationalTier::Fine);
        for w in fine.windows(2) {
            assert!(w[0] < w[1]);
        }
        assert!(fine.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn golden_members_are_the_star_spreads() {
        let golden = rational_spreads(RationalTier::Golden);
        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        for expected in [
            (5.0 - 5f64.sqrt()) / 8.0,
            (3.0 - 5f64.sqrt()) / 8.0,
            1.0 / phi,
            1.0 / (phi * phi),
            8.0 / 9.0,
        ] {
            assert!(
                golden.iter().any(|v| (v - expected).abs() < 1e-12),
                "missing {expected}"
            );
        }
    }
}
