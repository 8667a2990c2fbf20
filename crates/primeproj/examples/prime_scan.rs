//! Quick prime-silhouette probe over the symmetry-breaking shapes.
//!
//! Purpose
//! - Give a reproducible data point for "which shapes reach small prime hull
//!   counts on the golden rational tier, and how fast?" without pulling in
//!   the CLI crate.
//!
//! Why these shapes
//! - All four lack central inversion symmetry, which is the precondition for
//!   odd hull counts; centrally symmetric sets only cast even-cornered
//!   shadows.

use std::time::Instant;

use primeproj::api::{search, GridSpec, RationalTier, SearchCfg};

fn main() {
    let cfg = SearchCfg {
        grid: GridSpec::Rational {
            tier: RationalTier::Golden,
        },
        targets: vec![5, 7, 11, 13],
        top: Some(3),
        ..SearchCfg::default()
    };

    for name in [
        "truncated_tetrahedron",
        "trunctet_tet",
        "trunctet_dual_tet",
        "trunctet_icosa",
    ] {
        let start = Instant::now();
        let findings = search(name, &cfg).expect("registered shape, valid grid");
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

        println!("shape={name} hits={} time_ms={elapsed_ms:.1}", findings.len());
        for f in &findings {
            println!(
                "  {}-gon regularity={:.4} spreads={:?}",
                f.geometry.hull_count,
                f.geometry.regularity_score,
                f.rotation.spreads()
            );
        }
    }
}
