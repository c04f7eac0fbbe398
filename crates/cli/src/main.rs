use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};
use vecla::matrix::{determinant, transform};
use vecla::ops::{compose_ops, parse_vec2};
use vecla::sample::{random_affine, seeded, AffineBounds};
use vecla::TransformOp;

mod output;

use output::{matrix_json, matrix_text, Emit, Rendered};

#[derive(Parser)]
#[command(name = "vecla-cli")]
#[command(about = "Compose 2D affine transforms and apply them to points")]
struct Cmd {
    /// Emit pretty JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Write output to this file instead of stdout
    #[arg(long, global = true)]
    out: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compose ops in order and print the matrix
    Matrix {
        /// e.g. `translate:10,0`, `rotate:1.57`, `scale:2,2`, `shear:0.2,0`, `matrix:a,b,c,d,tx,ty`
        #[arg(long = "op", required = true)]
        ops: Vec<String>,
    },
    /// Compose ops in order and apply the result to points
    Apply {
        #[arg(long = "op", required = true)]
        ops: Vec<String>,
        /// Point as `x,y`; repeatable
        #[arg(long = "point", required = true, allow_hyphen_values = true)]
        points: Vec<String>,
    },
    /// Draw seeded random affine matrices
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Print crate name and version
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let emit = Emit::new(cmd.json, cmd.out);
    let rendered = execute(cmd.action)?;
    emit.write(&rendered)
}

fn execute(action: Action) -> Result<Rendered> {
    match action {
        Action::Matrix { ops } => matrix(&ops),
        Action::Apply { ops, points } => apply(&ops, &points),
        Action::Random { seed, count } => Ok(random(seed, count)),
        Action::Report => Ok(report()),
    }
}

fn parse_ops(raw: &[String]) -> Result<Vec<TransformOp>> {
    raw.iter()
        .map(|s| {
            s.parse::<TransformOp>()
                .with_context(|| format!("parsing op {s:?}"))
        })
        .collect()
}

fn op_names(ops: &[TransformOp]) -> Vec<&'static str> {
    ops.iter().map(TransformOp::name).collect()
}

fn matrix(raw_ops: &[String]) -> Result<Rendered> {
    let ops = parse_ops(raw_ops)?;
    tracing::info!(ops = ?op_names(&ops), "matrix");
    let m = compose_ops(&ops);
    Ok(Rendered {
        text: matrix_text(&m),
        json: json!({ "matrix": matrix_json(&m), "determinant": determinant(&m) }),
    })
}

fn apply(raw_ops: &[String], raw_points: &[String]) -> Result<Rendered> {
    let ops = parse_ops(raw_ops)?;
    let points = raw_points
        .iter()
        .map(|s| parse_vec2(s).with_context(|| format!("parsing point {s:?}")))
        .collect::<Result<Vec<_>>>()?;
    tracing::info!(ops = ?op_names(&ops), points = points.len(), "apply");
    let m = compose_ops(&ops);
    let mapped: Vec<_> = points.iter().map(|&p| (p, transform(p, &m))).collect();
    Ok(Rendered {
        text: mapped
            .iter()
            .map(|(p, q)| format!("{} {} -> {} {}\n", p.x, p.y, q.x, q.y))
            .collect(),
        json: json!({
            "matrix": matrix_json(&m),
            "points": mapped
                .iter()
                .map(|(p, q)| json!({ "in": [p.x, p.y], "out": [q.x, q.y] }))
                .collect::<Vec<_>>(),
        }),
    })
}

fn random(seed: u64, count: usize) -> Rendered {
    tracing::info!(seed, count, "random");
    let mut rng = seeded(seed);
    let bounds = AffineBounds::default();
    let draws: Vec<_> = (0..count)
        .map(|_| random_affine(&mut rng, &bounds))
        .collect();
    Rendered {
        text: draws
            .iter()
            .map(|m| format!("{}det {}\n", matrix_text(m), determinant(m)))
            .collect(),
        json: json!({
            "seed": seed,
            "matrices": draws
                .iter()
                .map(|m| json!({ "matrix": matrix_json(m), "determinant": determinant(m) }))
                .collect::<Vec<_>>(),
        }),
    }
}

fn report() -> Rendered {
    Rendered {
        text: format!("vecla {}\n", vecla::VERSION),
        json: json!({ "name": "vecla", "version": vecla::VERSION }),
    }
}
