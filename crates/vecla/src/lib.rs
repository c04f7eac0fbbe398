//! 2D vector and affine-matrix arithmetic.
//!
//! Layout
//! - `vector`: pure functions over `Vec2` (add, rotate, normalize, ...).
//! - `matrix`: flat row-major 3×3 `Matrix` for 2D affine transforms.
//! - `builder`: `MatrixBuilder`, a fluent accumulator of transforms.
//! - `ops`: textual transform steps (`translate:10,0`) applied to a builder.
//! - `sample`: seeded random vectors and affine matrices.
//!
//! Conventions
//! - Matrices are row-major: `[a, c, tx, b, d, ty, m6, m7, m8]`.
//! - `compose(m, m2)` applies `m2` first, then `m`.
//! - The builder applies its steps in call order.
//! - Arithmetic is total; degenerate inputs produce IEEE-754 values
//!   (NaN, ±inf, 0) rather than errors.

pub mod builder;
pub mod matrix;
pub mod ops;
pub mod sample;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use builder::MatrixBuilder;
pub use matrix::{AffineParams, Matrix};
pub use nalgebra::Vector2;
pub use ops::{parse_vec2, ParseOpError, TransformOp};

/// 2D vector `(x, y)` of `f64`.
pub type Vec2 = Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::builder::MatrixBuilder;
    pub use crate::matrix::{
        compose, create_matrix, determinant, rotation, scaling, shear, transform, translation,
        AffineParams, Matrix,
    };
    pub use crate::ops::{compose_ops, TransformOp};
    pub use crate::vector::{
        add, distance, distance_squared, dot, magnitude, midpoint, normal, normalize,
        rotate, rotate_around, scale, sub, towards,
    };
    pub use crate::Vec2;
}
