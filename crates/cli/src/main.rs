use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::fmt::SubscriberBuilder;

use primeproj::api::{
    list_shapes, search, search_compound, verify, Finding, GridSpec, RationalTier, RotationConfig,
    SearchCfg, TARGET_PRIMES,
};

mod provenance;

#[derive(Parser)]
#[command(name = "primeproj")]
#[command(about = "Prime projection search over polytope silhouettes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// List registered polytopes with dimension and vertex count
    List,
    /// Sweep all rotations of one polytope for prime hull counts
    Search {
        shape: String,
        #[command(flatten)]
        opts: SweepOpts,
    },
    /// Sweep a two-polytope compound over relative and viewing rotations
    Compound {
        left: String,
        right: String,
        #[command(flatten)]
        opts: SweepOpts,
    },
    /// Evaluate one explicit rotation, optionally asserting the hull count
    Verify {
        shape: String,
        /// Comma-separated spreads: three for 3D shapes, six for 4D
        #[arg(long, value_delimiter = ',', required = true)]
        spreads: Vec<f64>,
        /// Fail (exit nonzero) unless the hull count matches
        #[arg(long)]
        expect: Option<usize>,
    },
}

#[derive(clap::Args)]
struct SweepOpts {
    /// Decimal grid precision (step 10^-N)
    #[arg(long, default_value_t = 2, conflicts_with = "tier")]
    precision: u32,
    /// Rational grid tier instead of a decimal grid
    #[arg(long, value_enum)]
    tier: Option<Tier>,
    /// Hull counts to keep (default: the target primes)
    #[arg(long, value_delimiter = ',')]
    targets: Option<Vec<usize>>,
    /// Keep only the best N findings
    #[arg(long)]
    top: Option<usize>,
    /// Randomly subsample the grid down to this many configurations
    #[arg(long)]
    max_configs: Option<usize>,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Write the JSON artifact here (defaults to stdout)
    #[arg(long)]
    out: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Tier {
    Radical,
    Golden,
    Fine,
}

impl SweepOpts {
    fn search_cfg(&self) -> SearchCfg {
        let grid = match self.tier {
            Some(Tier::Radical) => GridSpec::Rational {
                tier: RationalTier::Radical,
            },
            Some(Tier::Golden) => GridSpec::Rational {
                tier: RationalTier::Golden,
            },
            Some(Tier::Fine) => GridSpec::Rational {
                tier: RationalTier::Fine,
            },
            None => GridSpec::Decimal {
                precision: self.precision,
            },
        };
        SearchCfg {
            grid,
            targets: self
                .targets
                .clone()
                .unwrap_or_else(|| TARGET_PRIMES.to_vec()),
            top: self.top,
            max_configs: self.max_configs,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::List => list(),
        Action::Search { shape, opts } => run_search(&shape, &opts),
        Action::Compound { left, right, opts } => run_compound(&left, &right, &opts),
        Action::Verify {
            shape,
            spreads,
            expect,
        } => run_verify(&shape, &spreads, expect),
    }
}

fn list() -> Result<()> {
    for info in list_shapes() {
        println!(
            "{:24} {}D {:4} vertices",
            info.name, info.dim, info.vertex_count
        );
    }
    Ok(())
}

fn run_search(shape: &str, opts: &SweepOpts) -> Result<()> {
    let cfg = opts.search_cfg();
    tracing::info!(shape, grid = ?cfg.grid, targets = ?cfg.targets, "search");
    let findings = search(shape, &cfg).with_context(|| format!("searching {shape}"))?;
    report(&[shape.to_string()], &cfg, findings, opts.out.as_deref())
}

fn run_compound(left: &str, right: &str, opts: &SweepOpts) -> Result<()> {
    let cfg = opts.search_cfg();
    tracing::info!(left, right, grid = ?cfg.grid, "compound search");
    let findings = search_compound(left, right, &cfg)
        .with_context(|| format!("searching compound {left}+{right}"))?;
    report(
        &[left.to_string(), right.to_string()],
        &cfg,
        findings,
        opts.out.as_deref(),
    )
}

fn run_verify(shape: &str, spreads: &[f64], expect: Option<usize>) -> Result<()> {
    let rotation = match *spreads {
        [a, b, c] => RotationConfig::Three([a, b, c]),
        [a, b, c, d, e, f] => RotationConfig::Six([a, b, c, d, e, f]),
        _ => bail!("expected 3 or 6 spreads, got {}", spreads.len()),
    };
    let finding = verify(shape, &rotation).with_context(|| format!("verifying {shape}"))?;
    let geom = &finding.geometry;
    println!(
        "{shape}: {}-gon regularity={:.4} equiangular={} equilateral={}",
        geom.hull_count, geom.regularity_score, geom.is_equiangular, geom.is_equilateral
    );
    if let Some(expected) = expect {
        if geom.hull_count != expected {
            bail!("expected a {expected}-gon, got {}", geom.hull_count);
        }
    }
    Ok(())
}

/// Log the summary, then write or print the JSON artifact.
fn report(
    shapes: &[String],
    cfg: &SearchCfg,
    findings: Vec<Finding>,
    out: Option<&str>,
) -> Result<()> {
    tracing::info!(hits = findings.len(), "sweep finished");
    for f in findings.iter().take(5) {
        tracing::info!(
            shape = %f.shape,
            hull = f.geometry.hull_count,
            regularity = f.geometry.regularity_score,
            "finding"
        );
    }

    let artifact = serde_json::json!({
        "metadata": {
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "version": primeproj::VERSION,
            "shapes": shapes,
            "grid": cfg.grid,
            "targets": cfg.targets,
            "seed": cfg.seed,
        },
        "findings": findings,
    });

    match out {
        Some(path) => {
            let path = Path::new(path);
            write_artifact(path, &artifact)?;
            provenance::write_sidecar(
                path,
                provenance::Payload::new(serde_json::json!({
                    "shapes": shapes,
                    "grid": cfg.grid,
                    "targets": cfg.targets,
                    "seed": cfg.seed,
                })),
            )?;
            Ok(())
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&artifact)?);
            Ok(())
        }
    }
}

fn write_artifact(path: &Path, artifact: &serde_json::Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(artifact)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "artifact written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_roundtrips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("run.json");

        let cfg = SearchCfg {
            grid: GridSpec::Decimal { precision: 1 },
            targets: vec![4],
            ..SearchCfg::default()
        };
        let findings = search("cube", &cfg).unwrap();
        assert!(!findings.is_empty());

        let artifact = serde_json::json!({
            "metadata": { "grid": cfg.grid, "targets": cfg.targets },
            "findings": findings,
        });
        write_artifact(&path, &artifact).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["metadata"]["targets"][0], 4);
        let first = &parsed["findings"][0];
        assert_eq!(first["geometry"]["hull_count"], 4);
        assert!(first["rotation"].is_array());
    }

    #[test]
    fn spreads_arity_is_enforced() {
        assert!(run_verify("cube", &[0.0, 0.0], None).is_err());
        assert!(run_verify("cube", &[0.0, 0.0, 0.0], Some(4)).is_ok());
        assert!(run_verify("cube", &[0.0, 0.0, 0.0], Some(7)).is_err());
    }
}
