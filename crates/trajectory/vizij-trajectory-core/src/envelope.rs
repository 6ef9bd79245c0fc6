//! Envelope functions: shaping curves over normalized time.
//!
//! An envelope modulates a geometric parameter (helix radius, arc height)
//! as the trajectory progresses. All envelopes map [0,1] into [0,1]; inputs
//! outside that range are evaluated with the same closed form (no clamping).

use serde::{Deserialize, Serialize};

use crate::math::parabola;

/// Closed set of envelope selectors.
///
/// Persisted as a snake_case name. Unknown names load as `Constant` so a
/// stale or hand-edited config degrades to an unshaped envelope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EnvelopeType {
    /// Always 1 (no shaping).
    #[default]
    Constant,
    /// t
    Linear,
    /// t²
    EaseIn,
    /// 1 - (1 - t)²
    EaseOut,
    /// 4t³ below 0.5, 1 - (2 - 2t)²/2 above.
    EaseInOut,
    /// 4t(1 - t): zero at both ends, 1 at the midpoint.
    Parabolic,
    /// 2t - t²: zero at the start, 1 at the end.
    HalfParabolic,
}

impl EnvelopeType {
    pub const ALL: [EnvelopeType; 7] = [
        Self::Constant,
        Self::Linear,
        Self::EaseIn,
        Self::EaseOut,
        Self::EaseInOut,
        Self::Parabolic,
        Self::HalfParabolic,
    ];

    /// Get the persisted name of this envelope
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Constant => "none",
            Self::Linear => "linear",
            Self::EaseIn => "ease_in",
            Self::EaseOut => "ease_out",
            Self::EaseInOut => "ease_in_out",
            Self::Parabolic => "parabolic",
            Self::HalfParabolic => "half_parabolic",
        }
    }

    /// Evaluate the envelope at normalized time `t`.
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            Self::Constant => 1.0,
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 - 2.0 * t;
                    1.0 - u * u / 2.0
                }
            }
            Self::Parabolic => parabola(t),
            Self::HalfParabolic => 2.0 * t - t * t,
        }
    }
}

impl From<&str> for EnvelopeType {
    fn from(s: &str) -> Self {
        match s {
            "linear" => Self::Linear,
            "ease_in" => Self::EaseIn,
            "ease_out" => Self::EaseOut,
            "ease_in_out" => Self::EaseInOut,
            "parabolic" => Self::Parabolic,
            "half_parabolic" => Self::HalfParabolic,
            _ => Self::Constant,
        }
    }
}

impl From<String> for EnvelopeType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<EnvelopeType> for String {
    fn from(e: EnvelopeType) -> Self {
        e.name().to_string()
    }
}
