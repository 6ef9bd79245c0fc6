//! Trajectory: one shape, one cached basis and one playback timer.
//!
//! This is the per-frame flow in one place: tick the timer, then evaluate
//! the shape at the presented (ping-pong aware) progress. Hosts that keep
//! their own timer can skip this type and call `shape::evaluate` directly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::basis::Basis;
use crate::config::{default_trajectory_name, TrajectoryConfig};
use crate::math::Vec3;
use crate::playback::{BoundaryEvent, PlaybackState};
use crate::shape::{evaluate, Shape};

/// Result of `Trajectory::update`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub position: Vec3,
    /// Progress the position was evaluated at.
    pub progress: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<BoundaryEvent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub name: String,
    pub shape: Shape,
    pub range: f32,
    basis: Basis,
    playback: PlaybackState,
}

impl Trajectory {
    pub fn new(shape: Shape, range: f32, basis: Basis, playback: PlaybackState) -> Self {
        Self {
            name: default_trajectory_name(),
            shape,
            range,
            basis,
            playback,
        }
    }

    /// Build from a (validated) config and the basis captured at activation.
    pub fn from_config(cfg: &TrajectoryConfig, basis: Basis) -> Self {
        Self {
            name: cfg.name.clone(),
            shape: cfg.shape,
            range: cfg.range,
            basis,
            playback: cfg.playback.into_state(),
        }
    }

    #[inline]
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Replace the cached basis, e.g. after the host re-anchors the path.
    pub fn rebase(&mut self, basis: Basis) {
        self.basis = basis;
    }

    #[inline]
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    #[inline]
    pub fn playback_mut(&mut self) -> &mut PlaybackState {
        &mut self.playback
    }

    /// Position at the current progress, without advancing time.
    pub fn position(&self) -> Vec3 {
        self.position_at(self.playback.normalized_progress())
    }

    /// Position at an arbitrary normalized time.
    #[inline]
    pub fn position_at(&self, t: f32) -> Vec3 {
        evaluate(&self.shape, &self.basis, self.range, t)
    }

    /// Advance the timer by `dt` seconds and evaluate.
    pub fn update(&mut self, dt: f32) -> TrajectorySample {
        let tick = self.playback.tick(dt);
        let progress = self.playback.normalized_progress();
        let position = self.position_at(progress);

        if let Some(ev) = tick.event {
            debug!(
                "trajectory '{}': {} at progress={:.4} position=({:.4}, {:.4}, {:.4})",
                self.name,
                ev.name(),
                progress,
                position.x,
                position.y,
                position.z
            );
        }

        TrajectorySample {
            position,
            progress,
            event: tick.event,
        }
    }

    /// Basis at the end of this trajectory's forward travel, for chaining
    /// another trajectory after this one.
    pub fn end_basis(&self) -> Basis {
        self.basis.advanced(self.range)
    }
}
