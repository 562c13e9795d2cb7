//! Wireframe emitter: formats generator output as float array literals.
//!
//! This is the I/O layer around `ndwire`: it picks a shape family and
//! dimension, expands polytopes into wireframe endpoint pairs (sphere samples
//! stay bare point clouds), and prints the result as a fixed-precision float
//! array literal to stdout or a file. File outputs get a JSON stats sidecar.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use ndwire::api::{
    cross_polytope, expand_wireframe, hypercube, sample_hypersphere, simplex, Point,
};

mod format;
use format::{ArrayDoc, Stats};

#[derive(Parser)]
#[command(name = "ndwire")]
#[command(about = "Emit N-dimensional shape wireframes as float array literals")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Family {
    Cross,
    Cube,
    Simplex,
    Sphere,
}

impl Family {
    fn label(self, dim: usize) -> String {
        match self {
            Self::Cross => format!("Regular {dim}-Cross-Polytope (Wireframe Pairs)"),
            Self::Cube => format!("{dim}D Hypercube (Wireframe Pairs)"),
            Self::Simplex => format!("Regular {dim}-Simplex (Wireframe Pairs)"),
            Self::Sphere => format!("{dim}D Hypersphere Sample (Point Cloud)"),
        }
    }

    fn array_name(self, dim: usize) -> String {
        match self {
            Self::Cross => format!("crossPolytopeVerts_{dim}D"),
            Self::Cube => format!("hypercubeVerts_{dim}D"),
            Self::Simplex => format!("simplexVerts_{dim}D"),
            Self::Sphere => format!("hypersphereVerts_{dim}D"),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Cross => "cross-polytope",
            Self::Cube => "hypercube",
            Self::Simplex => "simplex",
            Self::Sphere => "hypersphere",
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Generate one shape and print or write its array literal
    Emit {
        #[arg(long, value_enum)]
        family: Family,
        /// Ambient dimension N
        #[arg(long)]
        dim: usize,
        /// Point count (sphere family only)
        #[arg(long, default_value_t = 100)]
        count: usize,
        /// RNG seed for the Gaussian sphere branch (default: reference seed)
        #[arg(long)]
        seed: Option<u64>,
        /// Decimal places per coordinate
        #[arg(long, default_value_t = 4)]
        precision: usize,
        /// Output file (stdout when omitted); a `.stats.json` sidecar is
        /// written next to file outputs
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Log vertex/edge counts over a dimension range (polytope families)
    Table {
        #[arg(long, value_enum)]
        family: Family,
        #[arg(long, default_value_t = 2)]
        dim_min: usize,
        #[arg(long, default_value_t = 8)]
        dim_max: usize,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Emit {
            family,
            dim,
            count,
            seed,
            precision,
            out,
        } => emit(family, dim, count, seed, precision, out.as_deref()),
        Action::Table {
            family,
            dim_min,
            dim_max,
        } => table(family, dim_min, dim_max),
    }
}

fn row(p: &Point) -> Vec<f64> {
    p.iter().copied().collect()
}

fn build_doc(
    family: Family,
    dim: usize,
    count: usize,
    seed: Option<u64>,
) -> Result<(ArrayDoc, Stats)> {
    let (vertex_count, edge_count, points, seed_used) = match family {
        Family::Sphere => {
            let cloud = sample_hypersphere(count, dim, seed)?;
            let points: Vec<Vec<f64>> = cloud.points.iter().map(row).collect();
            // Only the Gaussian branch consumes the seed.
            let seed_used = if !matches!(dim, 2 | 3) {
                Some(seed.unwrap_or(ndwire::sphere::DEFAULT_SEED))
            } else {
                None
            };
            (cloud.len(), None, points, seed_used)
        }
        Family::Cross | Family::Cube | Family::Simplex => {
            let shape = match family {
                Family::Cross => cross_polytope(dim),
                Family::Cube => hypercube(dim),
                Family::Simplex => simplex(dim),
                Family::Sphere => unreachable!(),
            };
            let wireframe = expand_wireframe(&shape);
            let points: Vec<Vec<f64>> = wireframe.points.iter().map(row).collect();
            (shape.vertices.len(), Some(shape.edges.len()), points, None)
        }
    };
    let doc = ArrayDoc {
        label: family.label(dim),
        array_name: family.array_name(dim),
        dimension: dim,
        vertex_count,
        edge_count,
        points,
    };
    let stats = Stats {
        family: family.name().to_string(),
        dimension: dim,
        vertex_count,
        edge_count,
        emitted_points: doc.points.len(),
        seed: seed_used,
    };
    Ok((doc, stats))
}

fn emit(
    family: Family,
    dim: usize,
    count: usize,
    seed: Option<u64>,
    precision: usize,
    out: Option<&Path>,
) -> Result<()> {
    let (doc, stats) = build_doc(family, dim, count, seed)?;
    let text = doc.render(precision);
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            fs::write(path, &text).with_context(|| format!("writing {}", path.display()))?;
            let sidecar = stats_path(path);
            fs::write(&sidecar, serde_json::to_vec_pretty(&stats)?)
                .with_context(|| format!("writing {}", sidecar.display()))?;
            tracing::info!(
                family = family.name(),
                dim,
                out = %path.display(),
                stats = %sidecar.display(),
                "emit"
            );
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// `<artifact>.stats.json` next to the artifact.
fn stats_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".stats.json");
    artifact.with_file_name(name)
}

fn table(family: Family, dim_min: usize, dim_max: usize) -> Result<()> {
    if family == Family::Sphere {
        bail!("table only applies to polytope families (sphere counts are caller-chosen)");
    }
    if dim_min > dim_max {
        bail!("dim-min must not exceed dim-max");
    }
    for dim in dim_min..=dim_max {
        let shape = match family {
            Family::Cross => cross_polytope(dim),
            Family::Cube => hypercube(dim),
            Family::Simplex => simplex(dim),
            Family::Sphere => unreachable!(),
        };
        tracing::info!(
            family = family.name(),
            dim,
            vertices = shape.vertices.len(),
            edges = shape.edges.len(),
            wireframe_points = shape.edges.len() * 2,
            "counts"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn emit_writes_array_and_stats_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("cross2.h");
        emit(Family::Cross, 2, 0, None, 4, Some(out.as_path())).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("// Regular 2-Cross-Polytope"));
        assert!(text.contains("float crossPolytopeVerts_2D[] = {"));
        // 4 edges -> 8 endpoint rows.
        let rows = text
            .lines()
            .filter(|l| {
                let l = l.trim_end();
                l.ends_with("f,") || l.ends_with('f')
            })
            .count();
        assert_eq!(rows, 8);

        let stats: Value =
            serde_json::from_str(&fs::read_to_string(stats_path(&out)).unwrap()).unwrap();
        assert_eq!(stats["family"], "cross-polytope");
        assert_eq!(stats["vertex_count"], 4);
        assert_eq!(stats["edge_count"], 4);
        assert_eq!(stats["emitted_points"], 8);
    }

    #[test]
    fn sphere_doc_has_no_edges_and_carries_seed() {
        let (doc, stats) = build_doc(Family::Sphere, 4, 25, Some(7)).unwrap();
        assert_eq!(doc.points.len(), 25);
        assert!(doc.edge_count.is_none());
        assert_eq!(stats.seed, Some(7));

        // Deterministic branches report no seed.
        let (_, stats2d) = build_doc(Family::Sphere, 2, 25, Some(7)).unwrap();
        assert_eq!(stats2d.seed, None);
    }

    #[test]
    fn sphere_errors_surface_through_emit() {
        assert!(build_doc(Family::Sphere, 3, 1, None).is_err());
        assert!(build_doc(Family::Sphere, 4, 0, None).is_err());
    }

    #[test]
    fn stats_path_appends_suffix() {
        assert_eq!(
            stats_path(Path::new("data/cube.h")),
            PathBuf::from("data/cube.stats.json")
        );
    }
}
