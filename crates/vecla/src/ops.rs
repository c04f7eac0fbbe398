//! Textual transform steps.
//!
//! Grammar: `name:arg,arg,...` with `f64` arguments.
//! - `translate:x,y`
//! - `rotate:angle` (radians)
//! - `scale:x,y`
//! - `shear:x,y`
//! - `matrix:a,b,c,d,tx,ty` (same order as `create_matrix`)
//!
//! A list of ops composes in list order, the same as the matching chain of
//! builder calls.

use std::fmt;
use std::str::FromStr;

use crate::builder::MatrixBuilder;
use crate::matrix::{create_matrix, AffineParams, Matrix};
use crate::Vec2;

/// One builder step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    Translate { x: f64, y: f64 },
    Rotate { angle: f64 },
    Scale { x: f64, y: f64 },
    Shear { x: f64, y: f64 },
    Matrix(Matrix),
}

impl TransformOp {
    /// Perform this step on `b`.
    pub fn apply<'a>(&self, b: &'a mut MatrixBuilder) -> &'a mut MatrixBuilder {
        match *self {
            TransformOp::Translate { x, y } => b.translate(x, y),
            TransformOp::Rotate { angle } => b.rotate(angle),
            TransformOp::Scale { x, y } => b.scale(x, y),
            TransformOp::Shear { x, y } => b.shear(x, y),
            TransformOp::Matrix(m) => b.add(m),
        }
    }

    /// Op name as used in the textual form.
    pub fn name(&self) -> &'static str {
        match self {
            TransformOp::Translate { .. } => "translate",
            TransformOp::Rotate { .. } => "rotate",
            TransformOp::Scale { .. } => "scale",
            TransformOp::Shear { .. } => "shear",
            TransformOp::Matrix(_) => "matrix",
        }
    }
}

/// Compose `ops` in order on a fresh builder.
pub fn compose_ops(ops: &[TransformOp]) -> Matrix {
    let mut b = MatrixBuilder::new();
    for op in ops {
        op.apply(&mut b);
    }
    b.done()
}

/// Errors surfaced while parsing ops or points.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseOpError {
    /// No `:` between op name and arguments.
    MissingSeparator(String),
    UnknownOp(String),
    /// Wrong number of comma-separated arguments.
    Arity {
        op: &'static str,
        expected: usize,
        found: usize,
    },
    BadNumber(String),
}

impl fmt::Display for ParseOpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseOpError::MissingSeparator(s) => {
                write!(f, "expected `name:args`, got {s:?}")
            }
            ParseOpError::UnknownOp(name) => write!(
                f,
                "unknown op {name:?} (expected translate, rotate, scale, shear or matrix)"
            ),
            ParseOpError::Arity {
                op,
                expected,
                found,
            } => write!(f, "{op} takes {expected} argument(s), got {found}"),
            ParseOpError::BadNumber(s) => write!(f, "not a number: {s:?}"),
        }
    }
}

impl std::error::Error for ParseOpError {}

fn parse_args<const N: usize>(op: &'static str, args: &str) -> Result<[f64; N], ParseOpError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(ParseOpError::Arity {
            op,
            expected: N,
            found: parts.len(),
        });
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|_| ParseOpError::BadNumber((*part).to_string()))?;
    }
    Ok(out)
}

impl FromStr for TransformOp {
    type Err = ParseOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, args) = s
            .split_once(':')
            .ok_or_else(|| ParseOpError::MissingSeparator(s.to_string()))?;
        match name.trim().to_ascii_lowercase().as_str() {
            "translate" => {
                let [x, y] = parse_args::<2>("translate", args)?;
                Ok(TransformOp::Translate { x, y })
            }
            "rotate" => {
                let [angle] = parse_args::<1>("rotate", args)?;
                Ok(TransformOp::Rotate { angle })
            }
            "scale" => {
                let [x, y] = parse_args::<2>("scale", args)?;
                Ok(TransformOp::Scale { x, y })
            }
            "shear" => {
                let [x, y] = parse_args::<2>("shear", args)?;
                Ok(TransformOp::Shear { x, y })
            }
            "matrix" => {
                let [a, b, c, d, tx, ty] = parse_args::<6>("matrix", args)?;
                Ok(TransformOp::Matrix(create_matrix(AffineParams {
                    a,
                    b,
                    c,
                    d,
                    tx,
                    ty,
                })))
            }
            other => Err(ParseOpError::UnknownOp(other.to_string())),
        }
    }
}

/// Parse a point written as `x,y`.
pub fn parse_vec2(s: &str) -> Result<Vec2, ParseOpError> {
    let [x, y] = parse_args::<2>("point", s)?;
    Ok(Vec2::new(x, y))
}
