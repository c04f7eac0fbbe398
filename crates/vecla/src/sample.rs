//! Seeded random vectors and affine matrices.
//!
//! Draws are reproducible: the same seed yields the same sequence. Matrices are
//! built with `MatrixBuilder` (rotate, scale, shear, translate in that order),
//! so every sample is affine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::builder::MatrixBuilder;
use crate::matrix::Matrix;
use crate::Vec2;

/// Ranges for [`random_affine`].
#[derive(Clone, Copy, Debug)]
pub struct AffineBounds {
    /// Scale factors are drawn from `[scale_min, scale_max]` per axis.
    pub scale_min: f64,
    pub scale_max: f64,
    /// Shear factors are drawn from `[-shear_max, shear_max]`.
    pub shear_max: f64,
    /// Translation components are drawn from `[-translate_max, translate_max]`.
    pub translate_max: f64,
}

impl Default for AffineBounds {
    fn default() -> Self {
        Self {
            scale_min: 0.25,
            scale_max: 4.0,
            shear_max: 1.0,
            translate_max: 100.0,
        }
    }
}

/// RNG for reproducible draws.
#[inline]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Clamp a bound into the finite range; NaN becomes 0.
fn finite_bound(b: f64) -> f64 {
    if b.is_nan() {
        0.0
    } else {
        b.clamp(-f64::MAX, f64::MAX)
    }
}

/// Uniform draw from `[lo, hi]` (`lo <= hi`, both finite).
///
/// Interpolates instead of `lo + u·(hi − lo)` so the full `f64` range cannot overflow.
fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    let u = rng.gen::<f64>();
    (lo * (1.0 - u) + hi * u).clamp(lo, hi)
}

/// Vector with each component uniform in `[-bound, bound]`.
///
/// Never panics: NaN bounds act as 0 and infinite bounds as `f64::MAX`.
pub fn random_vector<R: Rng>(rng: &mut R, bound: f64) -> Vec2 {
    let b = finite_bound(bound).abs();
    Vec2::new(uniform(rng, -b, b), uniform(rng, -b, b))
}

/// Random affine matrix: rotation, then scale, then shear, then translation.
///
/// Bounds are sanitized like in [`random_vector`]; the scale range may be given
/// in either order.
pub fn random_affine<R: Rng>(rng: &mut R, bounds: &AffineBounds) -> Matrix {
    let (s0, s1) = (finite_bound(bounds.scale_min), finite_bound(bounds.scale_max));
    let (lo, hi) = (s0.min(s1), s0.max(s1));
    let sh = finite_bound(bounds.shear_max).abs();
    let angle = rng.gen::<f64>() * std::f64::consts::TAU;
    let (sx, sy) = (uniform(rng, lo, hi), uniform(rng, lo, hi));
    let (hx, hy) = (uniform(rng, -sh, sh), uniform(rng, -sh, sh));
    let t = random_vector(rng, bounds.translate_max);
    MatrixBuilder::new()
        .rotate(angle)
        .scale(sx, sy)
        .shear(hx, hy)
        .translate(t.x, t.y)
        .done()
}
