//! Shape evaluators: normalized time -> world position.
//!
//! Model:
//! - Every shape advances along the basis forward axis by `range * progress`.
//! - Shapes differ only in how they deviate laterally (right/up) from that line.
//! - `t` is not clamped. Values outside [0,1] extrapolate, so tooling can
//!   sample past either end.
//!
//! API:
//! - evaluate(&Shape, &Basis, range, t) is the single dispatch point.
//! - evaluate_linear / evaluate_linear_with / evaluate_helix / evaluate_arc
//!   are the per-shape functions it dispatches to.
//! - evaluate_into / evaluate_batch run many evaluations with no shared state.

use serde::{Deserialize, Serialize};

use crate::basis::Basis;
use crate::easing::{Ease, Easing};
use crate::envelope::EnvelopeType;
use crate::math::{parabola, sin_cos, Vec3, TAU};

/// Anything that can place a point along a basis at normalized time `t`.
pub trait ShapeEvaluator {
    fn evaluate(&self, basis: &Basis, range: f32, t: f32) -> Vec3;
}

/// Straight line along forward, eased.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearConfig {
    #[serde(default)]
    pub easing: Easing,
}

/// Corkscrew around the forward axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HelixConfig {
    /// Radius at full envelope.
    pub radius: f32,
    /// Turns over the full range.
    pub frequency: f32,
    /// Starting angle in degrees; 0 starts on the right axis.
    #[serde(default)]
    pub phase: f32,
    #[serde(default)]
    pub envelope: EnvelopeType,
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            frequency: 1.0,
            phase: 0.0,
            envelope: EnvelopeType::Constant,
        }
    }
}

/// Vertical parabolic arc along the up axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcConfig {
    /// Peak height reached at t = 0.5.
    pub height: f32,
    #[serde(default)]
    pub envelope: EnvelopeType,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            height: 1.0,
            envelope: EnvelopeType::Constant,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "snake_case")]
pub enum Shape {
    Linear(LinearConfig),
    Helix(HelixConfig),
    Arc(ArcConfig),
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Linear(LinearConfig::default())
    }
}

impl Shape {
    /// Get the name of this shape
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Linear(_) => "linear",
            Shape::Helix(_) => "helix",
            Shape::Arc(_) => "arc",
        }
    }

    /// Largest lateral distance the shape can reach from the forward axis.
    pub fn lateral_extent(&self) -> f32 {
        match self {
            Shape::Linear(_) => 0.0,
            Shape::Helix(cfg) => cfg.radius.abs(),
            Shape::Arc(cfg) => cfg.height.abs(),
        }
    }
}

impl ShapeEvaluator for Shape {
    #[inline]
    fn evaluate(&self, basis: &Basis, range: f32, t: f32) -> Vec3 {
        evaluate(self, basis, range, t)
    }
}

impl ShapeEvaluator for LinearConfig {
    #[inline]
    fn evaluate(&self, basis: &Basis, range: f32, t: f32) -> Vec3 {
        evaluate_linear(basis, range, self, t)
    }
}

impl ShapeEvaluator for HelixConfig {
    #[inline]
    fn evaluate(&self, basis: &Basis, range: f32, t: f32) -> Vec3 {
        evaluate_helix(basis, range, self, t)
    }
}

impl ShapeEvaluator for ArcConfig {
    #[inline]
    fn evaluate(&self, basis: &Basis, range: f32, t: f32) -> Vec3 {
        evaluate_arc(basis, range, self, t)
    }
}

/// Evaluate any shape.
#[inline]
pub fn evaluate(shape: &Shape, basis: &Basis, range: f32, t: f32) -> Vec3 {
    match shape {
        Shape::Linear(cfg) => evaluate_linear(basis, range, cfg, t),
        Shape::Helix(cfg) => evaluate_helix(basis, range, cfg, t),
        Shape::Arc(cfg) => evaluate_arc(basis, range, cfg, t),
    }
}

#[inline]
pub fn evaluate_linear(basis: &Basis, range: f32, cfg: &LinearConfig, t: f32) -> Vec3 {
    evaluate_linear_with(basis, range, t, &cfg.easing)
}

/// Linear evaluation with a caller-supplied easing function.
#[inline]
pub fn evaluate_linear_with<E: Ease + ?Sized>(basis: &Basis, range: f32, t: f32, ease: &E) -> Vec3 {
    basis.position_at(range * ease.ease(t))
}

#[inline]
pub fn evaluate_helix(basis: &Basis, range: f32, cfg: &HelixConfig, t: f32) -> Vec3 {
    let radius = cfg.radius * cfg.envelope.evaluate(t);
    let angle = t * cfg.frequency * TAU + cfg.phase.to_radians();
    let (sin, cos) = sin_cos(angle);
    basis.project(range * t, radius * cos, radius * sin)
}

#[inline]
pub fn evaluate_arc(basis: &Basis, range: f32, cfg: &ArcConfig, t: f32) -> Vec3 {
    let height = cfg.height * parabola(t) * cfg.envelope.evaluate(t);
    basis.project(range * t, 0.0, height)
}

/// Evaluate one shape at many times, appending into a reusable buffer.
pub fn evaluate_into(shape: &Shape, basis: &Basis, range: f32, times: &[f32], out: &mut Vec<Vec3>) {
    out.reserve(times.len());
    out.extend(times.iter().map(|&t| evaluate(shape, basis, range, t)));
}

/// One independent evaluation request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvalJob<'a> {
    pub shape: &'a Shape,
    pub basis: Basis,
    pub range: f32,
    pub t: f32,
}

/// Evaluate independent jobs. Jobs share nothing, so callers may split the
/// slice across threads freely.
pub fn evaluate_batch(jobs: &[EvalJob<'_>]) -> Vec<Vec3> {
    jobs.iter()
        .map(|job| evaluate(job.shape, &job.basis, job.range, job.t))
        .collect()
}
