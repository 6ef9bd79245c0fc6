//! Easing injection point for linear trajectories.
//!
//! The evaluators only need "some function t -> t'". `Ease` is that seam;
//! any `Fn(f32) -> f32` satisfies it, so hosts can plug in their own curve
//! evaluator. `Easing` is the small serializable selector stored in configs.

use serde::{Deserialize, Serialize};

/// Maps normalized time to eased normalized time.
pub trait Ease {
    fn ease(&self, t: f32) -> f32;
}

impl<F> Ease for F
where
    F: Fn(f32) -> f32,
{
    #[inline]
    fn ease(&self, t: f32) -> f32 {
        self(t)
    }
}

/// Serializable easing selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Easing {
    /// Identity. Extrapolates outside [0,1].
    #[default]
    Linear,
    /// CSS-style timing curve through (0,0), (x1,y1), (x2,y2), (1,1).
    /// Input is clamped to [0,1].
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    pub const EASE: Easing = Easing::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };
    pub const EASE_IN: Easing = Easing::CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };
    pub const EASE_OUT: Easing = Easing::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };
    pub const EASE_IN_OUT: Easing = Easing::CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };
}

impl Ease for Easing {
    #[inline]
    fn ease(&self, t: f32) -> f32 {
        match *self {
            Easing::Linear => t,
            Easing::CubicBezier { x1, y1, x2, y2 } => bezier_ease_t(t, x1, y1, x2, y2),
        }
    }
}

#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Invert x(s) by bisection, then evaluate y(s).
/// Assumes x1/x2 in [0,1] so x(s) is monotonic.
#[inline]
fn bezier_ease_t(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if x1 == y1 && x2 == y2 {
        return t;
    }
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}
