//! Math kernel: small numeric primitives shared by the evaluators and the
//! playback timer.
//!
//! Everything here is pure and allocation-free. Inputs are not guarded
//! against NaN/inf; non-finite inputs propagate. The only clamping performed
//! is the one that keeps otherwise-finite inputs from producing non-finite
//! output (arcsine domain, zero-length normalization, zero spans).

use nalgebra::Vector3;

pub use core::f32::consts::TAU;

/// World/local vector type used throughout the crate.
pub type Vec3 = Vector3<f32>;

/// origin + forward*f + right*r + up*u
#[inline]
pub fn project_offsets(
    origin: &Vec3,
    forward: &Vec3,
    right: &Vec3,
    up: &Vec3,
    forward_offset: f32,
    right_offset: f32,
    up_offset: f32,
) -> Vec3 {
    origin + forward * forward_offset + right * right_offset + up * up_offset
}

/// Unit parabola over normalized time: 0 at t=0 and t=1, peak 1 at t=0.5.
#[inline]
pub fn parabola(t: f32) -> f32 {
    4.0 * t * (1.0 - t)
}

/// Parabola scaled to a peak height.
#[inline]
pub fn parabola_at_height(t: f32, height: f32) -> f32 {
    height * parabola(t)
}

/// (sin, cos) of an angle in radians.
#[inline]
pub fn sin_cos(angle: f32) -> (f32, f32) {
    angle.sin_cos()
}

/// Arcsine with its input clamped to [-1, 1].
#[inline]
pub fn safe_asin(x: f32) -> f32 {
    x.clamp(-1.0, 1.0).asin()
}

/// Arccosine with its input clamped to [-1, 1].
#[inline]
pub fn safe_acos(x: f32) -> f32 {
    x.clamp(-1.0, 1.0).acos()
}

/// Normalize `v`, returning the zero vector when `v` has no usable length.
#[inline]
pub fn safe_normalize(v: &Vec3) -> Vec3 {
    v.try_normalize(f32::EPSILON).unwrap_or_else(Vec3::zeros)
}

/// Euclidean modulo of `value` into `[0, span)`. Returns 0 for a non-positive span.
#[inline]
pub fn wrap(value: f32, span: f32) -> f32 {
    if span <= 0.0 {
        return 0.0;
    }
    let m = value.rem_euclid(span);
    // rem_euclid can round up to exactly `span` for tiny negative inputs
    if m >= span {
        0.0
    } else {
        m
    }
}

/// Triangular reflection of normalized time: 0 -> 1 -> 0 as `t` goes 0 -> 0.5 -> 1.
#[inline]
pub fn triangle_wave(t: f32) -> f32 {
    1.0 - (1.0 - 2.0 * t).abs()
}
