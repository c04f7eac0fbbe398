//! Fluent accumulator for chains of affine transforms.
//!
//! Each step is composed *after* everything accumulated so far, so
//! `b.translate(10.0, 0.0).rotate(a)` moves a point first and rotates it second.
//! This is the reverse of how the product reads in matrix notation: the
//! builder stores `op_n · … · op_2 · op_1`.

use crate::matrix::{compose, rotation, scaling, shear, translation, Matrix};

/// Mutable cell holding the accumulated matrix.
///
/// `Clone` forks a partially built chain; the copies evolve independently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatrixBuilder {
    m: Matrix,
}

impl MatrixBuilder {
    /// Start from the identity.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `m`; later steps apply after it.
    #[inline]
    pub fn from_matrix(m: Matrix) -> Self {
        Self { m }
    }

    /// Apply `m` after the current accumulation: `current = m · current`.
    #[inline]
    pub fn add(&mut self, m: Matrix) -> &mut Self {
        self.m = compose(&m, &self.m);
        self
    }

    #[inline]
    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.add(translation(x, y))
    }

    /// Counter-clockwise rotation about the origin by `angle` radians.
    #[inline]
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.add(rotation(angle))
    }

    #[inline]
    pub fn scale(&mut self, x: f64, y: f64) -> &mut Self {
        self.add(scaling(x, y))
    }

    #[inline]
    pub fn shear(&mut self, x: f64, y: f64) -> &mut Self {
        self.add(shear(x, y))
    }

    /// Current matrix. Does not reset the builder.
    #[inline]
    pub fn done(&self) -> Matrix {
        self.m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{determinant, transform};
    use crate::vector::{add, rotate};
    use crate::Vec2;
    use nalgebra::vector;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn starts_at_identity() {
        assert_eq!(MatrixBuilder::new().done(), Matrix::IDENTITY);
        let start = translation(1.0, 2.0);
        assert_eq!(MatrixBuilder::from_matrix(start).done(), start);
    }

    #[test]
    fn translate_then_rotate_in_call_order() {
        let m = MatrixBuilder::new()
            .translate(10.0, 0.0)
            .rotate(FRAC_PI_2)
            .done();
        let p = transform(vector![0.0, 0.0], &m);
        assert!((p - vector![0.0, 10.0]).amax() < 1e-9, "p={p:?}");
        // Reversed order gives a different point.
        let r = MatrixBuilder::new()
            .rotate(FRAC_PI_2)
            .translate(10.0, 0.0)
            .done();
        assert!((transform(vector![0.0, 0.0], &r) - vector![10.0, 0.0]).amax() < 1e-9);
    }

    #[test]
    fn chain_matches_stepwise_application() {
        let v = vector![1.5, -2.0];
        let m = MatrixBuilder::new()
            .scale(2.0, 3.0)
            .shear(0.5, -0.25)
            .rotate(0.7)
            .translate(-4.0, 9.0)
            .done();
        let mut w = v;
        w = Vec2::new(w.x * 2.0, w.y * 3.0);
        w = transform(w, &shear(0.5, -0.25));
        w = rotate(w, 0.7);
        w = add(w, vector![-4.0, 9.0]);
        assert!((transform(v, &m) - w).amax() < 1e-12);
    }

    #[test]
    fn full_chain_reference_matrix() {
        let m = MatrixBuilder::new()
            .rotate(1.5)
            .scale(3.2, 2.3)
            .shear(0.2, 0.3)
            .translate(10.0, 20.0)
            .done();
        let expected = Matrix([
            0.6852067391745144,
            -3.1594448443658307,
            10.0,
            2.36214618279032,
            -0.7948996233041755,
            20.0,
            0.0,
            0.0,
            1.0,
        ]);
        assert!(m.max_abs_diff(&expected) < 1e-12, "m={m:?}");
        assert!(m.is_affine());
    }

    #[test]
    fn add_applies_after_starting_matrix() {
        let mut b = MatrixBuilder::from_matrix(scaling(2.0, 2.0));
        b.add(translation(1.0, 0.0));
        assert_eq!(transform(vector![1.0, 1.0], &b.done()), vector![3.0, 2.0]);
    }

    #[test]
    fn done_does_not_reset_and_clone_forks() {
        let mut b = MatrixBuilder::new();
        b.scale(2.0, 4.0);
        let first = b.done();
        assert_eq!(b.done(), first);
        let mut fork = b.clone();
        fork.translate(1.0, 1.0);
        b.scale(0.5, 0.5);
        assert_eq!(determinant(&first), 8.0);
        assert_eq!(determinant(&b.done()), 2.0);
        assert_eq!(fork.done(), compose(&translation(1.0, 1.0), &first));
    }
}
