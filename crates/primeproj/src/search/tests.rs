use super::*;
use proptest::prelude::*;

fn coarse(targets: &[usize]) -> SearchCfg {
    SearchCfg {
        grid: GridSpec::Decimal { precision: 1 },
        targets: targets.to_vec(),
        ..SearchCfg::default()
    }
}

#[test]
fn cube_square_silhouette_found() {
    // The identity rotation is on every decimal grid, and there the cube
    // projects to a perfect square.
    let findings = search("cube", &coarse(&[4])).unwrap();
    assert!(!findings.is_empty());
    let best = &findings[0];
    assert_eq!(best.geometry.hull_count, 4);
    assert!(best.geometry.regularity_score > 0.95);
    assert!(best.relative_spread.is_none());
}

#[test]
fn centrally_symmetric_shapes_never_hit_odd_targets() {
    let findings = search("cube", &coarse(&TARGET_PRIMES)).unwrap();
    assert!(findings.is_empty());
}

#[test]
fn targets_filter_is_exact() {
    let findings = search("truncated_tetrahedron", &coarse(&[5, 7])).unwrap();
    for f in &findings {
        assert!(matches!(f.geometry.hull_count, 5 | 7));
        assert_eq!(f.shape, "truncated_tetrahedron");
    }
}

#[test]
fn ranking_is_descending_and_top_truncates() {
    let cfg = coarse(&[4, 6]);
    let all = search("cube", &cfg).unwrap();
    assert!(all.len() > 3);
    for w in all.windows(2) {
        assert!(w[0].geometry.regularity_score >= w[1].geometry.regularity_score);
    }

    let capped = search(
        "cube",
        &SearchCfg {
            top: Some(3),
            ..cfg
        },
    )
    .unwrap();
    assert_eq!(capped.len(), 3);
    assert_eq!(
        capped[0].geometry.regularity_score,
        all[0].geometry.regularity_score
    );
}

#[test]
fn search_is_deterministic() {
    let cfg = coarse(&[4, 6]);
    let a = search("octahedron", &cfg).unwrap();
    let b = search("octahedron", &cfg).unwrap();
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.rotation, y.rotation);
        assert_eq!(x.geometry.hull_count, y.geometry.hull_count);
    }
}

#[test]
fn subsampling_is_seeded() {
    let base = SearchCfg {
        max_configs: Some(200),
        ..coarse(&[4, 6])
    };
    let a = search("cube", &base).unwrap();
    let b = search("cube", &base).unwrap();
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.rotation, y.rotation);
    }
}

#[test]
fn too_few_vertices_exits_early() {
    // A 4-vertex set can never produce a 7-gon silhouette.
    let findings = search("tetrahedron", &coarse(&[7])).unwrap();
    assert!(findings.is_empty());
}

#[test]
fn unknown_shape_is_reported() {
    let err = search("enneahedron", &coarse(&[7])).unwrap_err();
    assert!(matches!(err, SearchError::UnknownPolytope { .. }));
}

#[test]
fn invalid_precision_is_fatal() {
    for precision in [0, 7] {
        let cfg = SearchCfg {
            grid: GridSpec::Decimal { precision },
            ..SearchCfg::default()
        };
        assert_eq!(
            search("cube", &cfg).unwrap_err(),
            SearchError::InvalidGrid { precision }
        );
        assert_eq!(
            search_compound("cube", "octahedron", &cfg).unwrap_err(),
            SearchError::InvalidGrid { precision }
        );
    }
}

#[test]
fn verify_cube_identity() {
    let finding = verify("cube", &RotationConfig::Three([0.0, 0.0, 0.0])).unwrap();
    let geom = &finding.geometry;
    assert_eq!(geom.hull_count, 4);
    assert!(geom.is_equiangular);
    assert!(geom.is_equilateral);
    assert!(geom.regularity_score > 0.95);
}

#[test]
fn verify_rejects_mismatched_arity() {
    let err = verify("cube", &RotationConfig::Six([0.0; 6])).unwrap_err();
    assert!(matches!(
        err,
        SearchError::Rotation(RotationError::Arity { arity: 6, dim: 3 })
    ));
}

#[test]
fn duplicate_compound_collapses_in_the_hull() {
    // tetrahedron + tetrahedron at zero relative spin doubles every vertex;
    // the merge step collapses the pairs and the silhouette is the plain
    // tetrahedron square.
    let verts = build_compound("tetrahedron", "tetrahedron", 0.0).unwrap();
    assert_eq!(verts.len(), 8);
    let geom = evaluate(&verts, &RotationConfig::Three([0.0, 0.0, 0.0])).unwrap();
    assert_eq!(geom.hull_count, 4);
}

#[test]
fn compound_findings_carry_relative_spread() {
    let cfg = SearchCfg {
        grid: GridSpec::Rational {
            tier: RationalTier::Radical,
        },
        targets: vec![4, 6, 8],
        ..SearchCfg::default()
    };
    let findings = search_compound("tetrahedron", "dual_tetrahedron", &cfg).unwrap();
    assert!(!findings.is_empty());
    for f in &findings {
        assert_eq!(f.shape, "tetrahedron+dual_tetrahedron");
        assert!(f.relative_spread.is_some());
    }
}

#[test]
fn compound_subsampling_spends_the_whole_budget() {
    // Every silhouette of an 8-vertex compound has between 1 and 8 corners,
    // so with all-inclusive targets the finding count equals the number of
    // configurations actually evaluated.
    let cfg = SearchCfg {
        max_configs: Some(1_000),
        ..coarse(&[1, 2, 3, 4, 5, 6, 7, 8])
    };
    let findings = search_compound("tetrahedron", "dual_tetrahedron", &cfg).unwrap();
    assert!(
        findings.len() >= 900,
        "evaluated {} of ~1000 requested configurations",
        findings.len()
    );
    assert!(findings.len() <= 1_000);
}

#[test]
fn truncated_tetrahedron_pentagon_at_precision_two() {
    let cfg = SearchCfg {
        grid: GridSpec::Decimal { precision: 2 },
        targets: vec![5],
        top: Some(5),
        ..SearchCfg::default()
    };
    let findings = search("truncated_tetrahedron", &cfg).unwrap();
    assert!(!findings.is_empty());
    for f in &findings {
        assert_eq!(f.geometry.hull_count, 5);
    }
}

#[test]
fn compound_dimension_mismatch_is_fatal() {
    let err = search_compound("cube", "tesseract", &coarse(&[7])).unwrap_err();
    assert!(matches!(err, SearchError::DimensionMismatch { .. }));
}

#[test]
fn four_dimensional_search_uses_six_spreads() {
    let cfg = SearchCfg {
        grid: GridSpec::Rational {
            tier: RationalTier::Radical,
        },
        targets: vec![4, 6, 8, 10, 12],
        max_configs: Some(2_000),
        ..SearchCfg::default()
    };
    let findings = search("cell16", &cfg).unwrap();
    for f in &findings {
        assert!(matches!(f.rotation, RotationConfig::Six(_)));
    }
}

#[test]
fn rational_grid_runs_end_to_end() {
    // The radical tier contains 0, and at the identity the octahedron's
    // silhouette is a perfect square.
    let cfg = SearchCfg {
        grid: GridSpec::Rational {
            tier: RationalTier::Golden,
        },
        targets: vec![4],
        ..SearchCfg::default()
    };
    let findings = search("octahedron", &cfg).unwrap();
    assert!(!findings.is_empty());
    assert!(findings[0].geometry.regularity_score > 0.95);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn symmetric_silhouettes_have_even_corners(
        s1 in 0.0f64..=1.0, s2 in 0.0f64..=1.0, s3 in 0.0f64..=1.0,
    ) {
        let finding = verify("cube", &RotationConfig::Three([s1, s2, s3])).unwrap();
        prop_assert_eq!(finding.geometry.hull_count % 2, 0);
    }
}
