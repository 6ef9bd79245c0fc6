//! Vizij Trajectory Core (engine-agnostic)
//!
//! Parametric motion along a local reference frame, plus the playback timer
//! that drives it. Two independent halves:
//! - geometry: `Basis`, the math kernel, envelopes and shape evaluators
//!   (pure, reentrant, safe to run in parallel over many instances);
//! - timing: `PlaybackState`, a single-owner timer with loop/ping-pong/once
//!   boundary policy.
//!
//! The only value passed between them is normalized time. `Trajectory`
//! wires the two together for hosts that want the usual per-frame flow.

pub mod baking;
pub mod basis;
pub mod config;
pub mod easing;
pub mod envelope;
pub mod error;
pub mod math;
pub mod playback;
pub mod shape;
pub mod stored_trajectory;
pub mod trajectory;

// Re-exports for consumers (adapters)
pub use baking::{bake_path, BakedPath, BakingConfig};
pub use basis::Basis;
pub use config::{PlaybackSettings, TrajectoryConfig};
pub use easing::{Ease, Easing};
pub use envelope::EnvelopeType;
pub use error::TrajectoryError;
pub use math::Vec3;
pub use playback::{BoundaryEvent, PlaybackState, PlaybackStatus, TickOutput, TIME_EPSILON};
pub use shape::{
    evaluate, evaluate_arc, evaluate_batch, evaluate_helix, evaluate_into, evaluate_linear,
    evaluate_linear_with, ArcConfig, EvalJob, HelixConfig, LinearConfig, Shape, ShapeEvaluator,
};
pub use stored_trajectory::{parse_trajectory_json, parse_trajectory_list_json, to_json_pretty};
pub use trajectory::{Trajectory, TrajectorySample};

/// Trajectory result type
pub type Result<T> = core::result::Result<T, TrajectoryError>;
