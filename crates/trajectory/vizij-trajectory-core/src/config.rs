//! Configuration records for trajectories.
//!
//! These are what a host persists and edits. The per-frame core trusts them,
//! so `validate()` is the place to reject bad input (non-finite numbers,
//! negative durations, bezier handles that break monotonic timing).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::easing::Easing;
use crate::error::TrajectoryError;
use crate::playback::PlaybackState;
use crate::shape::Shape;
use crate::Result;

pub(crate) fn default_trajectory_name() -> String {
    "unnamed".to_string()
}

fn default_range() -> f32 {
    1.0
}

/// Timing and transport settings for a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Seconds for one full traverse.
    pub duration: f32,
    /// Signed speed multiplier.
    pub speed: f32,
    pub looping: bool,
    pub ping_pong: bool,
    /// Start playing as soon as the state is created.
    pub autoplay: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            duration: 1.0,
            speed: 1.0,
            looping: false,
            ping_pong: false,
            autoplay: true,
        }
    }
}

impl PlaybackSettings {
    pub fn validate(&self) -> Result<()> {
        TrajectoryError::check_finite("playback.duration", self.duration)?;
        TrajectoryError::check_finite("playback.speed", self.speed)?;
        if self.duration < 0.0 {
            return Err(TrajectoryError::invalid(
                "playback.duration",
                format!("must be non-negative, got {}", self.duration),
            ));
        }
        Ok(())
    }

    /// Build a fresh playback state from these settings.
    pub fn into_state(self) -> PlaybackState {
        PlaybackState::new(self.duration)
            .with_speed(self.speed)
            .with_looping(self.looping)
            .with_ping_pong(self.ping_pong)
            .with_playing(self.autoplay)
    }

    #[inline]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    #[inline]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    #[inline]
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    #[inline]
    pub fn with_ping_pong(mut self, ping_pong: bool) -> Self {
        self.ping_pong = ping_pong;
        self
    }

    #[inline]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }
}

/// A complete persisted trajectory: shape, travel distance and timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryConfig {
    #[serde(default = "default_trajectory_name")]
    pub name: String,
    pub shape: Shape,
    /// Distance travelled along the basis forward axis at t = 1.
    #[serde(default = "default_range")]
    pub range: f32,
    #[serde(default)]
    pub playback: PlaybackSettings,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            name: default_trajectory_name(),
            shape: Shape::default(),
            range: default_range(),
            playback: PlaybackSettings::default(),
        }
    }
}

impl TrajectoryConfig {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    #[inline]
    pub fn with_playback(mut self, playback: PlaybackSettings) -> Self {
        self.playback = playback;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let result = self.validate_inner();
        if let Err(err) = &result {
            warn!("trajectory '{}' rejected: {}", self.name, err);
        }
        result
    }

    fn validate_inner(&self) -> Result<()> {
        TrajectoryError::check_finite("range", self.range)?;
        self.playback.validate()?;

        match &self.shape {
            Shape::Linear(cfg) => validate_easing(&cfg.easing)?,
            Shape::Helix(cfg) => {
                TrajectoryError::check_finite("helix.radius", cfg.radius)?;
                TrajectoryError::check_finite("helix.frequency", cfg.frequency)?;
                TrajectoryError::check_finite("helix.phase", cfg.phase)?;
            }
            Shape::Arc(cfg) => {
                TrajectoryError::check_finite("arc.height", cfg.height)?;
            }
        }
        Ok(())
    }
}

fn validate_easing(easing: &Easing) -> Result<()> {
    if let Easing::CubicBezier { x1, y1, x2, y2 } = *easing {
        for (field, v) in [
            ("easing.x1", x1),
            ("easing.y1", y1),
            ("easing.x2", x2),
            ("easing.y2", y2),
        ] {
            TrajectoryError::check_finite(field, v)?;
        }
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(TrajectoryError::invalid(
                "easing",
                format!("bezier x control points must lie in [0, 1], got x1={x1} x2={x2}"),
            ));
        }
    }
    Ok(())
}
