//! Flat row-major 3×3 matrices for 2D affine transforms.
//!
//! Layout
//! ```text
//! [ a  c  tx ]      index  0 1 2
//! [ b  d  ty ]             3 4 5
//! [ m6 m7 m8 ]             6 7 8
//! ```
//! A matrix is *affine* when its last row is `[0, 0, 1]`. Every constructor in
//! this module returns an affine matrix and `compose` keeps affine inputs
//! affine. `compose` itself is a plain 3×3 product and does not check the last
//! row, so non-affine inputs are multiplied like any other matrix.
//!
//! Composition order: `transform(v, compose(m, m2)) == transform(transform(v, m2), m)`.

use std::ops::{Index, Mul};

use nalgebra::Matrix3;

use crate::Vec2;

/// Row-major 3×3 matrix stored as 9 flat entries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix(pub [f64; 9]);

impl Matrix {
    pub const IDENTITY: Matrix = Matrix([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    #[inline]
    pub fn to_array(self) -> [f64; 9] {
        self.0
    }

    /// Row `i` (0..3) as `[m(i,0), m(i,1), m(i,2)]`.
    #[inline]
    pub fn row(&self, i: usize) -> [f64; 3] {
        [self.0[3 * i], self.0[3 * i + 1], self.0[3 * i + 2]]
    }

    /// True iff the last row is exactly `[0, 0, 1]`.
    #[inline]
    pub fn is_affine(&self) -> bool {
        self.row(2) == [0.0, 0.0, 1.0]
    }

    /// Max-abs entrywise difference; handy for tolerance checks.
    pub fn max_abs_diff(&self, other: &Matrix) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 9]> for Matrix {
    fn from(m: [f64; 9]) -> Self {
        Matrix(m)
    }
}

impl From<Matrix> for [f64; 9] {
    fn from(m: Matrix) -> Self {
        m.0
    }
}

impl From<Matrix3<f64>> for Matrix {
    fn from(n: Matrix3<f64>) -> Self {
        Matrix([
            n[(0, 0)],
            n[(0, 1)],
            n[(0, 2)],
            n[(1, 0)],
            n[(1, 1)],
            n[(1, 2)],
            n[(2, 0)],
            n[(2, 1)],
            n[(2, 2)],
        ])
    }
}

impl From<Matrix> for Matrix3<f64> {
    fn from(m: Matrix) -> Self {
        // `Matrix3::new` takes its arguments in row-major order.
        let [m0, m1, m2, m3, m4, m5, m6, m7, m8] = m.0;
        Matrix3::new(m0, m1, m2, m3, m4, m5, m6, m7, m8)
    }
}

impl Index<usize> for Matrix {
    type Output = f64;
    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl Mul for Matrix {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: Matrix) -> Matrix {
        compose(&self, &rhs)
    }
}

impl Mul<Vec2> for Matrix {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        transform(rhs, &self)
    }
}

/// Parameters of [`create_matrix`]; `Default` is the identity transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineParams {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }
}

/// Affine matrix `[a, c, tx, b, d, ty, 0, 0, 1]`.
///
/// Partial parameter sets use struct update syntax:
/// `create_matrix(AffineParams { tx: 10.0, ..Default::default() })`.
#[inline]
pub fn create_matrix(p: AffineParams) -> Matrix {
    Matrix([p.a, p.c, p.tx, p.b, p.d, p.ty, 0.0, 0.0, 1.0])
}

#[inline]
pub fn translation(x: f64, y: f64) -> Matrix {
    Matrix([1.0, 0.0, x, 0.0, 1.0, y, 0.0, 0.0, 1.0])
}

/// Counter-clockwise rotation by `angle` radians about the origin.
#[inline]
pub fn rotation(angle: f64) -> Matrix {
    let (sin, cos) = angle.sin_cos();
    Matrix([cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0])
}

#[inline]
pub fn scaling(x: f64, y: f64) -> Matrix {
    Matrix([x, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 1.0])
}

/// Shear with `x' = x + sx·y` and `y' = sy·x + y`.
#[inline]
pub fn shear(sx: f64, sy: f64) -> Matrix {
    Matrix([1.0, sx, 0.0, sy, 1.0, 0.0, 0.0, 0.0, 1.0])
}

/// Apply `m` to `v` as the homogeneous column `(x, y, 1)`. The last row is ignored.
#[inline]
pub fn transform(v: Vec2, m: &Matrix) -> Vec2 {
    let m = &m.0;
    Vec2::new(
        v.x * m[0] + v.y * m[1] + m[2],
        v.x * m[3] + v.y * m[4] + m[5],
    )
}

/// Full row-major product `m · m2` (`m2` is applied first).
pub fn compose(m: &Matrix, m2: &Matrix) -> Matrix {
    let a = &m.0;
    let b = &m2.0;
    let mut out = [0.0; 9];
    for r in 0..3 {
        for c in 0..3 {
            out[3 * r + c] = a[3 * r] * b[c] + a[3 * r + 1] * b[3 + c] + a[3 * r + 2] * b[6 + c];
        }
    }
    Matrix(out)
}

/// Determinant of the 2×2 linear part, `a·d − b·c`.
///
/// Translation and the last row are ignored. Zero means the linear part is
/// singular; that is reported as a value and left for the caller to check.
#[inline]
pub fn determinant(m: &Matrix) -> f64 {
    m.0[0] * m.0[4] - m.0[3] * m.0[1]
}
