//! Basis: the local reference frame trajectories are expressed in.
//!
//! A `Basis` is an origin plus forward/right/up axes. It is a plain value:
//! drivers capture one from a live transform when playback starts and keep it
//! for the session. Every "modifying" operation returns a new `Basis`.
//!
//! `Basis::new` trusts the caller to pass an orthonormal triple. Use
//! `from_rotation` or `from_forward_up` when the axes come from somewhere less
//! trustworthy.

use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};

use crate::math::{project_offsets, safe_normalize, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Basis {
    pub origin: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Default for Basis {
    fn default() -> Self {
        Self::identity()
    }
}

impl Basis {
    pub fn new(origin: Vec3, forward: Vec3, right: Vec3, up: Vec3) -> Self {
        Self {
            origin,
            forward,
            right,
            up,
        }
    }

    /// World-aligned frame at the origin: forward=+Z, right=+X, up=+Y.
    pub fn identity() -> Self {
        Self::at(Vec3::zeros())
    }

    /// World-aligned frame at `origin`.
    pub fn at(origin: Vec3) -> Self {
        Self {
            origin,
            forward: Vec3::z(),
            right: Vec3::x(),
            up: Vec3::y(),
        }
    }

    /// Frame from a position and orientation (local +Z forward, +X right, +Y up).
    pub fn from_rotation(origin: Vec3, rotation: &UnitQuaternion<f32>) -> Self {
        Self {
            origin,
            forward: rotation * Vec3::z(),
            right: rotation * Vec3::x(),
            up: rotation * Vec3::y(),
        }
    }

    /// Frame from a forward direction and an approximate up hint.
    ///
    /// Right is `up x forward`; up is then recomputed so the triple is
    /// orthonormal. Degenerate input (zero forward, or up parallel to
    /// forward) yields zero axes rather than NaN.
    pub fn from_forward_up(origin: Vec3, forward: Vec3, up_hint: Vec3) -> Self {
        let forward = safe_normalize(&forward);
        let right = safe_normalize(&up_hint.cross(&forward));
        let up = forward.cross(&right);
        Self {
            origin,
            forward,
            right,
            up,
        }
    }

    /// World position of a local offset along (forward, right, up).
    #[inline]
    pub fn project(&self, forward_offset: f32, right_offset: f32, up_offset: f32) -> Vec3 {
        project_offsets(
            &self.origin,
            &self.forward,
            &self.right,
            &self.up,
            forward_offset,
            right_offset,
            up_offset,
        )
    }

    /// Point `distance` along the forward axis.
    #[inline]
    pub fn position_at(&self, distance: f32) -> Vec3 {
        self.project(distance, 0.0, 0.0)
    }

    /// Rotate a local direction (x=right, y=up, z=forward) into world space.
    #[inline]
    pub fn transform_direction(&self, local: &Vec3) -> Vec3 {
        self.forward * local.z + self.right * local.x + self.up * local.y
    }

    /// Distance from the origin to a world point.
    #[inline]
    pub fn distance_to(&self, point: &Vec3) -> f32 {
        (point - self.origin).norm()
    }

    /// Same axes, origin moved by a world-space offset.
    #[inline]
    pub fn translated(&self, offset: &Vec3) -> Self {
        Self {
            origin: self.origin + offset,
            ..*self
        }
    }

    /// Same axes, origin moved `distance` along forward. Used to chain segments.
    #[inline]
    pub fn advanced(&self, distance: f32) -> Self {
        Self {
            origin: self.position_at(distance),
            ..*self
        }
    }
}
