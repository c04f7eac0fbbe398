//! Pure 2D vector algebra.
//!
//! Every function takes its arguments by value (`Vec2` is `Copy`) and returns a
//! fresh result. Nothing is checked: a zero-length vector passed to
//! [`normalize`] yields non-finite components, which callers may rely on.

use crate::Vec2;

/// Componentwise sum `v + v2`.
#[inline]
pub fn add(v: Vec2, v2: Vec2) -> Vec2 {
    Vec2::new(v.x + v2.x, v.y + v2.y)
}

/// Componentwise difference `v - v2`.
#[inline]
pub fn sub(v: Vec2, v2: Vec2) -> Vec2 {
    Vec2::new(v.x - v2.x, v.y - v2.y)
}

/// Euclidean norm `sqrt(x² + y²)`.
#[inline]
pub fn magnitude(v: Vec2) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// `v / |v|`. The zero vector maps to NaN components.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let mag = magnitude(v);
    Vec2::new(v.x / mag, v.y / mag)
}

#[inline]
pub fn scale(v: Vec2, s: f64) -> Vec2 {
    Vec2::new(v.x * s, v.y * s)
}

#[inline]
pub fn dot(v: Vec2, v2: Vec2) -> f64 {
    v.x * v2.x + v.y * v2.y
}

/// Point halfway between `v` and `v2`.
#[inline]
pub fn midpoint(v: Vec2, v2: Vec2) -> Vec2 {
    scale(add(v, v2), 0.5)
}

/// Rotate about the origin by `angle` radians (counter-clockwise for positive angles).
#[inline]
pub fn rotate(v: Vec2, angle: f64) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Rotate `v` about `pivot` by `angle` radians.
///
/// Counter-clockwise like [`rotate`]: `[2,0]` about `[4,0]` by `π/2` lands on `[4,-2]`.
#[inline]
pub fn rotate_around(v: Vec2, pivot: Vec2, angle: f64) -> Vec2 {
    add(pivot, rotate(sub(v, pivot), angle))
}

/// Left-hand perpendicular `(-y, x)`, i.e. `v` turned a quarter counter-clockwise.
#[inline]
pub fn normal(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Linear interpolation `v + t·(v2 − v)`; `t = 0` gives `v`, `t = 1` gives `v2`.
#[inline]
pub fn towards(t: f64, v: Vec2, v2: Vec2) -> Vec2 {
    add(v, scale(sub(v2, v), t))
}

#[inline]
pub fn distance(v: Vec2, v2: Vec2) -> f64 {
    magnitude(sub(v, v2))
}

/// Squared distance; skips the square root when only comparisons are needed.
#[inline]
pub fn distance_squared(v: Vec2, v2: Vec2) -> f64 {
    let d = sub(v, v2);
    dot(d, d)
}
