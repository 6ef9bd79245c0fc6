//! Playback timer: elapsed time, speed and boundary policy.
//!
//! The timer owns no geometry. Each frame the driver calls `tick(dt)`, reads
//! the returned event, then feeds `normalized_progress()` into a shape.
//!
//! Boundary policy on crossing either end (checked in this order):
//! - looping: wrap the overshoot back into range, keep playing, `Looped`.
//! - ping_pong: same wrap, keep playing, `Bounced`. The bounce lives in the
//!   read-out: `normalized_progress()` mirrors the raw fraction with a
//!   triangle wave, so presented progress goes 0 -> 1 -> 0 per traverse
//!   while the timer itself keeps running in one direction.
//! - otherwise: clamp to the boundary, stop, raise `has_completed`, `Completed`.
//!
//! `has_completed` is a pulse: it is cleared at the start of every `tick`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::math::{triangle_wave, wrap};

/// Tolerance (seconds) for `is_at_start` / `is_at_end`.
pub const TIME_EPSILON: f32 = 1e-4;

/// Independent status flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub playing: bool,
    pub looping: bool,
    pub ping_pong: bool,
    /// Set only by the tick that reached a terminal boundary.
    pub has_completed: bool,
}

impl Default for PlaybackStatus {
    fn default() -> Self {
        Self {
            playing: true,
            looping: false,
            ping_pong: false,
            has_completed: false,
        }
    }
}

/// What happened at a boundary during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryEvent {
    /// Wrapped under the looping policy.
    Looped,
    /// Wrapped under the ping-pong policy.
    Bounced,
    /// Reached the end (or the start, in reverse) and stopped.
    Completed,
}

impl BoundaryEvent {
    /// Get the name of this event
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Looped => "looped",
            Self::Bounced => "bounced",
            Self::Completed => "completed",
        }
    }
}

/// Result of one `tick`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickOutput {
    /// Raw elapsed fraction, clamped to [0,1]. Not ping-pong mirrored.
    pub normalized_time: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<BoundaryEvent>,
}

impl TickOutput {
    #[inline]
    pub fn boundary_hit(&self) -> bool {
        self.event.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    elapsed: f32,
    duration: f32,
    speed: f32,
    status: PlaybackStatus,
    /// Whether a playing tick has run since the last reset. Only consulted
    /// when duration is zero, where elapsed alone cannot tell start from end.
    #[serde(default)]
    advanced: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl PlaybackState {
    /// Playing, forward at 1x, no looping. Negative durations clamp to 0.
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration: duration.max(0.0),
            speed: 1.0,
            status: PlaybackStatus::default(),
            advanced: false,
        }
    }

    #[inline]
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.status.looping = looping;
        self
    }

    #[inline]
    pub fn with_ping_pong(mut self, ping_pong: bool) -> Self {
        self.status.ping_pong = ping_pong;
        self
    }

    #[inline]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    #[inline]
    pub fn with_playing(mut self, playing: bool) -> Self {
        self.status.playing = playing;
        self
    }

    // ----- accessors -----

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.status.playing
    }

    #[inline]
    pub fn is_looping(&self) -> bool {
        self.status.looping
    }

    #[inline]
    pub fn is_ping_pong(&self) -> bool {
        self.status.ping_pong
    }

    #[inline]
    pub fn has_completed(&self) -> bool {
        self.status.has_completed
    }

    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.speed < 0.0
    }

    /// Seconds left in the current direction of travel.
    #[inline]
    pub fn remaining(&self) -> f32 {
        if self.is_reversed() {
            self.elapsed
        } else {
            self.duration - self.elapsed
        }
    }

    // ----- transport -----

    pub fn play(&mut self) {
        self.status.playing = true;
        trace!("playback: play at {:.4}", self.elapsed);
    }

    pub fn pause(&mut self) {
        self.status.playing = false;
        trace!("playback: pause at {:.4}", self.elapsed);
    }

    pub fn toggle_play(&mut self) {
        if self.status.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Pause and return to the start.
    pub fn stop(&mut self) {
        self.status.playing = false;
        self.reset_elapsed();
        trace!("playback: stop");
    }

    /// Return to the start without touching `playing`.
    pub fn rewind(&mut self) {
        self.reset_elapsed();
        trace!("playback: rewind");
    }

    /// Jump to `seconds`, clamped to [0, duration]. Fires no event.
    /// Non-finite input is ignored.
    pub fn set_time(&mut self, seconds: f32) {
        if !seconds.is_finite() {
            warn!("playback: ignoring non-finite seek target {}", seconds);
            return;
        }
        self.elapsed = seconds.clamp(0.0, self.duration);
        self.advanced = self.elapsed > 0.0;
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.status.looping = looping;
    }

    pub fn set_ping_pong(&mut self, ping_pong: bool) {
        self.status.ping_pong = ping_pong;
    }

    /// Negative durations clamp to 0; elapsed is re-clamped into range.
    pub fn set_duration(&mut self, duration: f32) {
        self.duration = duration.max(0.0);
        self.elapsed = self.elapsed.clamp(0.0, self.duration);
    }

    // ----- speed -----

    pub fn set_time_scale(&mut self, scale: f32) {
        self.speed = scale;
        trace!("playback: time scale {:.3}", scale);
    }

    pub fn slow_mo(&mut self) {
        self.set_time_scale(0.5);
    }

    pub fn fast_forward(&mut self) {
        self.set_time_scale(2.0);
    }

    /// Force backward travel, keeping the current rate.
    pub fn reverse(&mut self) {
        self.set_time_scale(-self.speed.abs());
    }

    pub fn normal_speed(&mut self) {
        self.set_time_scale(1.0);
    }

    // ----- stepping -----

    /// Advance by `delta_seconds * speed` and apply the boundary policy.
    ///
    /// Does nothing (and reports no event) while paused. A non-finite advance
    /// is treated as zero so the timer never leaves [0, duration].
    ///
    /// Wrapping depends on the direction of travel: forward overshoot wraps
    /// into [0, duration), backward overshoot into (0, duration]. A backward
    /// tick that lands exactly on 0 while looping resumes at `duration`.
    pub fn tick(&mut self, delta_seconds: f32) -> TickOutput {
        self.status.has_completed = false;

        if !self.status.playing {
            return TickOutput {
                normalized_time: self.normalized_time(),
                event: None,
            };
        }

        let mut delta = delta_seconds * self.speed;
        if !delta.is_finite() {
            warn!(
                "playback: ignoring non-finite advance dt={} speed={}",
                delta_seconds, self.speed
            );
            delta = 0.0;
        }
        self.elapsed += delta;
        self.advanced = true;

        let crossed = if self.duration <= 0.0 {
            true
        } else if delta < 0.0 {
            self.elapsed <= 0.0
        } else if delta > 0.0 {
            self.elapsed >= self.duration
        } else {
            false
        };

        let event = if crossed {
            Some(self.apply_boundary(delta < 0.0))
        } else {
            None
        };

        if let Some(ev) = event {
            debug!(
                "playback: boundary {} elapsed={:.6} duration={:.6} speed={:.3}",
                ev.name(),
                self.elapsed,
                self.duration,
                self.speed
            );
        }

        TickOutput {
            normalized_time: self.normalized_time(),
            event,
        }
    }

    fn apply_boundary(&mut self, backward: bool) -> BoundaryEvent {
        if self.status.looping || self.status.ping_pong {
            self.elapsed = self.wrapped(backward);
            return if self.status.looping {
                BoundaryEvent::Looped
            } else {
                BoundaryEvent::Bounced
            };
        }

        self.elapsed = if backward { 0.0 } else { self.duration };
        self.status.playing = false;
        self.status.has_completed = true;
        BoundaryEvent::Completed
    }

    /// Forward overshoot wraps into [0, d); backward into (0, d].
    fn wrapped(&self, backward: bool) -> f32 {
        let d = self.duration;
        if d <= 0.0 {
            return 0.0;
        }
        if backward {
            d - wrap(-self.elapsed, d)
        } else {
            wrap(self.elapsed, d)
        }
    }

    fn reset_elapsed(&mut self) {
        self.elapsed = 0.0;
        self.advanced = false;
    }

    // ----- read-outs -----

    /// Raw elapsed fraction in [0,1].
    ///
    /// With no duration there is nothing to divide by: 0 before the first
    /// playing tick after a reset, 1 afterwards.
    #[inline]
    pub fn normalized_time(&self) -> f32 {
        if self.duration <= 0.0 {
            return if self.advanced { 1.0 } else { 0.0 };
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Progress to feed a shape: `normalized_time`, mirrored into a
    /// 0 -> 1 -> 0 bounce when ping-pong is on.
    #[inline]
    pub fn normalized_progress(&self) -> f32 {
        let t = self.normalized_time();
        if self.status.ping_pong {
            triangle_wave(t)
        } else {
            t
        }
    }

    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.is_at_start_within(TIME_EPSILON)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.is_at_end_within(TIME_EPSILON)
    }

    #[inline]
    pub fn is_at_start_within(&self, tolerance: f32) -> bool {
        self.elapsed.abs() <= tolerance
    }

    #[inline]
    pub fn is_at_end_within(&self, tolerance: f32) -> bool {
        (self.duration - self.elapsed).abs() <= tolerance
    }
}
