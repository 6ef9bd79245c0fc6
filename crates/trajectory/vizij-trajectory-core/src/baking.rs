//! Baking API: sample a shape into a fixed list of points.
//!
//! Useful for drawing a path preview or for caching positions of a
//! trajectory that never changes. The window may extend past [0,1].

use serde::{Deserialize, Serialize};

use crate::basis::Basis;
use crate::math::Vec3;
use crate::shape::{evaluate_into, Shape};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakingConfig {
    /// Number of evenly spaced samples, endpoints included.
    pub samples: usize,
    /// First normalized time sampled.
    pub start: f32,
    /// Last normalized time sampled.
    pub end: f32,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            samples: 64,
            start: 0.0,
            end: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedPath {
    pub start: f32,
    pub end: f32,
    pub points: Vec<Vec3>,
}

impl BakedPath {
    /// Sum of segment lengths.
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}

/// Bake a shape over `cfg`'s window. Fewer than two samples yields a single
/// point at `cfg.start`.
pub fn bake_path(shape: &Shape, basis: &Basis, range: f32, cfg: &BakingConfig) -> BakedPath {
    let times: Vec<f32> = if cfg.samples < 2 {
        vec![cfg.start]
    } else {
        let step = (cfg.end - cfg.start) / (cfg.samples - 1) as f32;
        (0..cfg.samples)
            .map(|i| {
                if i + 1 == cfg.samples {
                    cfg.end
                } else {
                    cfg.start + step * i as f32
                }
            })
            .collect()
    };

    let mut points = Vec::with_capacity(times.len());
    evaluate_into(shape, basis, range, &times, &mut points);

    BakedPath {
        start: cfg.start,
        end: cfg.end,
        points,
    }
}
